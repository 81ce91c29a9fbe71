use super::CoverageType;
use crate::distribution::Distribution;
use crate::measures::{Measure, PersistenceMode};
use std::collections::BTreeMap;

/// Derives line and branch coverage measures from per-line hit and condition data.
///
/// Data for a line is recorded once: later writes for the same line are ignored.
#[derive(Debug, Clone, Default)]
pub struct CoverageMeasuresBuilder {
    hits_by_line: BTreeMap<u32, u64>,
    conditions_by_line: BTreeMap<u32, u32>,
    covered_conditions_by_line: BTreeMap<u32, u32>,
}

impl CoverageMeasuresBuilder {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Record how many times a line was executed.
    pub fn set_hits(&mut self, line: u32, hits: u64) -> &mut Self {
        let _ = self.hits_by_line.entry(line).or_insert(hits);
        self
    }

    /// Record the number of conditions on a line and how many were covered.
    ///
    /// Lines without any condition are ignored.
    pub fn set_conditions(&mut self, line: u32, conditions: u32, covered_conditions: u32) -> &mut Self {
        if conditions > 0 && !self.conditions_by_line.contains_key(&line) {
            let _ = self.conditions_by_line.insert(line, conditions);
            let _ = self.covered_conditions_by_line.insert(line, covered_conditions);
        }
        self
    }

    /// Forget everything recorded so far.
    pub fn reset(&mut self) {
        self.hits_by_line.clear();
        self.conditions_by_line.clear();
        self.covered_conditions_by_line.clear();
    }

    #[must_use]
    pub fn lines_to_cover(&self) -> usize {
        self.hits_by_line.len()
    }

    #[must_use]
    pub fn covered_lines(&self) -> usize {
        self.hits_by_line.values().filter(|&&hits| hits > 0).count()
    }

    #[must_use]
    pub fn uncovered_lines(&self) -> usize {
        self.lines_to_cover() - self.covered_lines()
    }

    #[must_use]
    pub fn conditions(&self) -> u64 {
        self.conditions_by_line.values().map(|&c| u64::from(c)).sum()
    }

    #[must_use]
    pub fn covered_conditions(&self) -> u64 {
        self.covered_conditions_by_line.values().map(|&c| u64::from(c)).sum()
    }

    #[must_use]
    pub fn uncovered_conditions(&self) -> u64 {
        self.conditions().saturating_sub(self.covered_conditions())
    }

    /// Hits per line as `line=hits` pairs.
    #[must_use]
    pub fn hits_by_line_data(&self) -> String {
        to_data(self.hits_by_line.iter().map(|(&line, &hits)| (line, hits)))
    }

    #[must_use]
    pub fn conditions_by_line_data(&self) -> String {
        to_data(self.conditions_by_line.iter().map(|(&line, &c)| (line, u64::from(c))))
    }

    #[must_use]
    pub fn covered_conditions_by_line_data(&self) -> String {
        to_data(self.covered_conditions_by_line.iter().map(|(&line, &c)| (line, u64::from(c))))
    }

    /// Build the measures of a coverage family.
    ///
    /// Line measures are only produced once a line has been recorded, condition measures
    /// once a line with conditions has been recorded.
    #[must_use]
    pub fn create_measures(&self, coverage_type: CoverageType) -> Vec<Measure> {
        let mut measures = Vec::new();

        if self.lines_to_cover() > 0 {
            measures.push(Measure::with_count(coverage_type.lines_to_cover(), count(self.lines_to_cover())));
            measures.push(Measure::with_count(coverage_type.uncovered_lines(), count(self.uncovered_lines())));
            measures.push(durable_data(coverage_type.line_hits_data(), self.hits_by_line_data()));
        }

        if self.conditions() > 0 {
            measures.push(Measure::with_count(coverage_type.conditions_to_cover(), self.conditions()));
            measures.push(Measure::with_count(coverage_type.uncovered_conditions(), self.uncovered_conditions()));
            measures.push(durable_data(coverage_type.conditions_by_line(), self.conditions_by_line_data()));
            measures.push(durable_data(
                coverage_type.covered_conditions_by_line(),
                self.covered_conditions_by_line_data(),
            ));
        }

        measures
    }
}

fn to_data(entries: impl Iterator<Item = (u32, u64)>) -> String {
    entries.collect::<Distribution<u32>>().to_string()
}

fn durable_data(metric_key: &str, data: String) -> Measure {
    Measure::with_data(metric_key, data).with_persistence_mode(PersistenceMode::Durable)
}

const fn count(n: usize) -> u64 {
    n as u64
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> CoverageMeasuresBuilder {
        let mut builder = CoverageMeasuresBuilder::new();
        let _ = builder.set_hits(1, 1).set_hits(2, 0).set_hits(3, 3).set_conditions(1, 2, 1);
        builder
    }

    #[test]
    fn test_counts() {
        let builder = sample();

        assert_eq!(builder.lines_to_cover(), 3);
        assert_eq!(builder.covered_lines(), 2);
        assert_eq!(builder.uncovered_lines(), 1);
        assert_eq!(builder.conditions(), 2);
        assert_eq!(builder.covered_conditions(), 1);
        assert_eq!(builder.uncovered_conditions(), 1);
    }

    #[test]
    fn test_first_write_wins() {
        let mut builder = sample();
        let _ = builder.set_hits(1, 99).set_hits(2, 5).set_conditions(1, 8, 8);

        assert_eq!(builder.covered_lines(), 2);
        assert_eq!(builder.hits_by_line_data(), "1=1;2=0;3=3");
        assert_eq!(builder.conditions(), 2);
        assert_eq!(builder.covered_conditions(), 1);
    }

    #[test]
    fn test_lines_without_conditions_are_ignored() {
        let mut builder = CoverageMeasuresBuilder::new();
        let _ = builder.set_conditions(4, 0, 0).set_conditions(4, 3, 2);

        assert_eq!(builder.conditions(), 3);
        assert_eq!(builder.conditions_by_line_data(), "4=3");
        assert_eq!(builder.covered_conditions_by_line_data(), "4=2");
    }

    #[test]
    fn test_line_data_is_sorted_by_line() {
        let mut builder = CoverageMeasuresBuilder::new();
        let _ = builder.set_hits(10, 1).set_hits(2, 4);
        assert_eq!(builder.hits_by_line_data(), "2=4;10=1");
    }

    #[test]
    fn test_create_measures() {
        let measures = sample().create_measures(CoverageType::Integration);
        let summary: Vec<(&str, Option<f64>, Option<&str>)> =
            measures.iter().map(|m| (m.metric_key(), m.value(), m.data())).collect();

        assert_eq!(
            summary,
            [
                ("it_lines_to_cover", Some(3.0), None),
                ("it_uncovered_lines", Some(1.0), None),
                ("it_coverage_line_hits_data", None, Some("1=1;2=0;3=3")),
                ("it_conditions_to_cover", Some(2.0), None),
                ("it_uncovered_conditions", Some(1.0), None),
                ("it_conditions_by_line", None, Some("1=2")),
                ("it_covered_conditions_by_line", None, Some("1=1")),
            ]
        );
        assert!(measures.iter().all(|m| m.persistence_mode() == PersistenceMode::Durable));
    }

    #[test]
    fn test_create_measures_without_conditions() {
        let mut builder = CoverageMeasuresBuilder::new();
        let _ = builder.set_hits(1, 0);

        let keys: Vec<_> = builder.create_measures(CoverageType::Unit).iter().map(|m| m.metric_key().to_string()).collect();
        assert_eq!(keys, ["lines_to_cover", "uncovered_lines", "coverage_line_hits_data"]);
    }

    #[test]
    fn test_empty_builder_creates_nothing() {
        assert!(CoverageMeasuresBuilder::new().create_measures(CoverageType::Overall).is_empty());
    }

    #[test]
    fn test_reset() {
        let mut builder = sample();
        builder.reset();

        assert_eq!(builder.lines_to_cover(), 0);
        assert_eq!(builder.conditions(), 0);
        assert!(builder.create_measures(CoverageType::Unit).is_empty());
    }
}
