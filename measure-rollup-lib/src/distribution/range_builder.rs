use super::{BucketLimit, Distribution, ensure_distribution_metric};
use crate::Result;
use crate::measures::Measure;
use crate::metrics::Metric;
use compact_str::CompactString;

const LOG_TARGET: &str = "     range";

/// Accumulates numeric values into buckets identified by their bottom limit.
///
/// A value lands in the bucket with the greatest limit that is less than or equal to it.
/// Values below the smallest limit are dropped.
///
/// Serialized distributions can be merged in as long as they use exactly the same limits.
/// Any mismatch, or a payload that cannot be parsed, makes the builder invalid for good.
#[derive(Debug, Clone)]
pub struct RangeDistributionBuilder {
    metric_key: CompactString,
    limits: Option<Vec<BucketLimit>>,
    counts: Distribution<BucketLimit>,
    empty: bool,
    valid: bool,
}

impl RangeDistributionBuilder {
    /// Create a builder with fixed bottom limits.
    ///
    /// Limits may be given in any order; duplicates are collapsed.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric is not a `DISTRIB` or `DATA` metric, or if a limit is not finite.
    pub fn new(metric: &Metric, bottom_limits: &[f64]) -> Result<Self> {
        ensure_distribution_metric(metric)?;

        let mut limits = bottom_limits.iter().map(|&v| BucketLimit::new(v)).collect::<Result<Vec<_>>>()?;
        limits.sort();
        limits.dedup();

        Ok(Self {
            metric_key: metric.key().into(),
            counts: limits.iter().map(|&limit| (limit, 0)).collect(),
            limits: Some(limits),
            empty: true,
            valid: true,
        })
    }

    /// Create a builder that adopts its limits from the first merged distribution.
    ///
    /// # Errors
    ///
    /// Returns an error if the metric is not a `DISTRIB` or `DATA` metric.
    pub fn unbounded(metric: &Metric) -> Result<Self> {
        ensure_distribution_metric(metric)?;

        Ok(Self {
            metric_key: metric.key().into(),
            limits: None,
            counts: Distribution::new(),
            empty: true,
            valid: true,
        })
    }

    /// Record one value.
    pub fn add(&mut self, value: f64) -> &mut Self {
        self.add_count(value, 1)
    }

    /// Record `count` occurrences of a value.
    pub fn add_count(&mut self, value: f64, count: u64) -> &mut Self {
        if let Some(limit) = self.bucket_for(value) {
            self.counts.add(limit, count);
            self.empty = false;
        }
        self
    }

    /// Merge the serialized distribution held by a measure, if it has one.
    pub fn add_measure(&mut self, measure: &Measure) -> &mut Self {
        if let Some(data) = measure.data() {
            let _ = self.add_data(data);
        }
        self
    }

    /// Merge a serialized distribution.
    pub fn add_data(&mut self, data: &str) -> &mut Self {
        match Distribution::<BucketLimit>::parse(data) {
            Ok(distribution) => self.add_distribution(&distribution),
            Err(e) => {
                log::debug!(target: LOG_TARGET, "Invalidating '{}' distribution, cannot parse '{data}': {e:#}", self.metric_key);
                self.valid = false;
                self
            }
        }
    }

    /// Merge a distribution bucket by bucket.
    pub fn add_distribution(&mut self, distribution: &Distribution<BucketLimit>) -> &mut Self {
        if !self.valid {
            return self;
        }

        let limits = self.limits.get_or_insert_with(|| {
            log::trace!(target: LOG_TARGET, "Adopting limits of the first merged '{}' distribution", self.metric_key);
            distribution.keys().copied().collect()
        });

        if !distribution.keys().eq(limits.iter()) {
            log::debug!(
                target: LOG_TARGET,
                "Invalidating '{}' distribution, limits of '{distribution}' do not match {limits:?}",
                self.metric_key
            );
            self.valid = false;
            return self;
        }

        for (&limit, count) in distribution.iter() {
            self.counts.add(limit, count);
        }
        self.empty = false;
        self
    }

    /// Reset every bucket to zero. Limits and validity are kept.
    pub fn clear(&mut self) {
        self.counts = self.limits.iter().flatten().map(|&limit| (limit, 0)).collect();
        self.empty = true;
    }

    /// Whether no value or distribution has been recorded.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.empty
    }

    #[must_use]
    pub const fn is_valid(&self) -> bool {
        self.valid
    }

    /// The bottom limits, or `None` while an unbounded builder has not adopted any.
    #[must_use]
    pub fn bottom_limits(&self) -> Option<&[BucketLimit]> {
        self.limits.as_deref()
    }

    /// The serialized distribution, or `None` if the builder is invalid.
    #[must_use]
    pub fn to_data(&self) -> Option<String> {
        self.valid.then(|| self.counts.to_string())
    }

    /// Build the measure, or `None` if the builder is invalid.
    #[must_use]
    pub fn build(&self) -> Option<Measure> {
        self.to_data().map(|data| Measure::with_data(self.metric_key.clone(), data))
    }

    /// Build the measure, or `None` if the builder is invalid or empty.
    #[must_use]
    pub fn build_non_empty(&self) -> Option<Measure> {
        if self.empty { None } else { self.build() }
    }

    fn bucket_for(&self, value: f64) -> Option<BucketLimit> {
        let limits = self.limits.as_deref()?;
        let above = limits.partition_point(|limit| limit.value() <= value);
        above.checked_sub(1).and_then(|position| limits.get(position).copied())
    }
}
