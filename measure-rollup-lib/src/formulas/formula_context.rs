use crate::metrics::Metric;

/// What a formula is computing: the target metric.
#[derive(Debug, Clone, Copy)]
pub struct FormulaContext<'a> {
    metric: &'a Metric,
}

impl<'a> FormulaContext<'a> {
    #[must_use]
    pub const fn new(metric: &'a Metric) -> Self {
        Self { metric }
    }

    #[must_use]
    pub const fn metric(&self) -> &'a Metric {
        self.metric
    }

    #[must_use]
    pub fn target_key(&self) -> &'a str {
        self.metric.key()
    }
}
