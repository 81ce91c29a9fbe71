use super::format::ensure_encodable_key;
use super::{Distribution, ensure_distribution_metric};
use crate::Result;
use crate::measures::Measure;
use crate::metrics::Metric;
use compact_str::CompactString;
use core::fmt;

/// Accumulates occurrences of discrete keys into a distribution measure.
///
/// Keys must print without the `;` and `=` separators so the built payload parses back.
#[derive(Debug, Clone)]
pub struct CountDistributionBuilder<K: Ord> {
    metric_key: CompactString,
    counts: Distribution<K>,
}

impl<K: Ord + Clone + fmt::Display> CountDistributionBuilder<K> {
    /// Create a builder for a `DISTRIB` or `DATA` metric.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric has any other value type.
    pub fn new(metric: &Metric) -> Result<Self> {
        ensure_distribution_metric(metric)?;
        Ok(Self {
            metric_key: metric.key().into(),
            counts: Distribution::new(),
        })
    }

    /// Record one occurrence of a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be written in the distribution text form.
    pub fn add(&mut self, key: K) -> Result<&mut Self> {
        self.add_count(key, 1)
    }

    /// Record `count` occurrences of a key.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be written in the distribution text form.
    pub fn add_count(&mut self, key: K, count: u64) -> Result<&mut Self> {
        ensure_encodable_key(&key)?;
        self.counts.add(key, count);
        Ok(self)
    }

    /// Make a key appear in the output even if it never occurs.
    ///
    /// # Errors
    ///
    /// Returns an error if the key cannot be written in the distribution text form.
    pub fn add_zero(&mut self, key: K) -> Result<&mut Self> {
        self.add_count(key, 0)
    }

    /// Merge every entry of another distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if one of the keys cannot be written in the distribution text form.
    /// Nothing is merged in that case.
    pub fn add_distribution(&mut self, distribution: &Distribution<K>) -> Result<&mut Self> {
        for key in distribution.keys() {
            ensure_encodable_key(key)?;
        }

        for (key, count) in distribution.iter() {
            self.counts.add(key.clone(), count);
        }
        Ok(self)
    }

    pub fn clear(&mut self) {
        self.counts.clear();
    }

    /// Whether no key has been recorded, not even with a zero count.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    #[must_use]
    pub fn to_data(&self) -> String {
        self.counts.to_string()
    }

    /// Build the measure, even when nothing was recorded.
    #[must_use]
    pub fn build(&self) -> Measure {
        Measure::with_data(self.metric_key.clone(), self.to_data())
    }

    #[must_use]
    pub fn build_non_empty(&self) -> Option<Measure> {
        (!self.is_empty()).then(|| self.build())
    }
}
