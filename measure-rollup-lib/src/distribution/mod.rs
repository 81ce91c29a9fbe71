//! Histogram-shaped measures and their canonical text form
//!
//! # Implementation Model
//!
//! A [`Distribution`] is an ordered mapping from bucket key to count, serialized as
//! `key1=count1;key2=count2` with keys ascending and no trailing separator. The format
//! is stored alongside other measure data, so parsing a built payload and printing it
//! again always yields the identical string.
//!
//! Two transient, single-owner accumulators produce these payloads:
//!
//! - [`CountDistributionBuilder`] counts occurrences of discrete keys such as
//!   severities. Keys can be registered with a zero count so they show up in the output.
//! - [`RangeDistributionBuilder`] assigns numeric values to buckets identified by their
//!   bottom limit ([`BucketLimit`]). It also merges already-serialized distributions,
//!   which is how per-file complexity histograms roll up to directories. A merge whose
//!   limits differ from the builder's turns the builder invalid; an invalid builder never
//!   produces a measure.
//!
//! Both builders only accept metrics whose value type is `DISTRIB` or `DATA`.

mod bucket_limit;
mod count_builder;
mod format;
mod range_builder;

pub use bucket_limit::BucketLimit;
pub use count_builder::CountDistributionBuilder;
pub use format::Distribution;
pub use range_builder::RangeDistributionBuilder;

use crate::Result;
use crate::metrics::Metric;
use ohno::bail;

fn ensure_distribution_metric(metric: &Metric) -> Result<()> {
    if !metric.is_distribution() {
        bail!(
            "metric '{}' has value type {} but distributions need DISTRIB or DATA",
            metric.key(),
            metric.value_type()
        );
    }

    Ok(())
}
