use crate::Result;
use core::cmp::Ordering;
use core::fmt;
use core::str::FromStr;
use ohno::{AppError, IntoAppError, bail};

/// Bottom limit of a range distribution bucket.
///
/// Limits are always finite and totally ordered. Integral limits print without a
/// fractional part (`5`, not `5.0`).
#[derive(Debug, Clone, Copy)]
pub struct BucketLimit(f64);

impl BucketLimit {
    /// Create a limit.
    ///
    /// # Errors
    ///
    /// Returns an error if the value is NaN or infinite.
    pub fn new(value: f64) -> Result<Self> {
        if !value.is_finite() {
            bail!("bucket limit must be a finite number, got {value}");
        }

        // fold -0.0 into 0.0 so both print and compare the same
        Ok(Self(value + 0.0))
    }

    #[must_use]
    pub const fn value(self) -> f64 {
        self.0
    }
}

impl PartialEq for BucketLimit {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for BucketLimit {}

impl PartialOrd for BucketLimit {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for BucketLimit {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.total_cmp(&other.0)
    }
}

impl fmt::Display for BucketLimit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.fract() == 0.0 {
            write!(f, "{:.0}", self.0)
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl FromStr for BucketLimit {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self> {
        let value = s.trim().parse::<f64>().into_app_err_with(|| format!("invalid bucket limit '{s}'"))?;
        Self::new(value)
    }
}
