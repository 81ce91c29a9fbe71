use crate::metrics::keys;
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// The family of tests a set of coverage measures belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum CoverageType {
    Unit,
    Integration,
    Overall,
}

impl CoverageType {
    #[must_use]
    pub const fn lines_to_cover(self) -> &'static str {
        match self {
            Self::Unit => keys::LINES_TO_COVER,
            Self::Integration => keys::IT_LINES_TO_COVER,
            Self::Overall => keys::OVERALL_LINES_TO_COVER,
        }
    }

    #[must_use]
    pub const fn uncovered_lines(self) -> &'static str {
        match self {
            Self::Unit => keys::UNCOVERED_LINES,
            Self::Integration => keys::IT_UNCOVERED_LINES,
            Self::Overall => keys::OVERALL_UNCOVERED_LINES,
        }
    }

    #[must_use]
    pub const fn line_hits_data(self) -> &'static str {
        match self {
            Self::Unit => keys::COVERAGE_LINE_HITS_DATA,
            Self::Integration => keys::IT_COVERAGE_LINE_HITS_DATA,
            Self::Overall => keys::OVERALL_COVERAGE_LINE_HITS_DATA,
        }
    }

    #[must_use]
    pub const fn conditions_to_cover(self) -> &'static str {
        match self {
            Self::Unit => keys::CONDITIONS_TO_COVER,
            Self::Integration => keys::IT_CONDITIONS_TO_COVER,
            Self::Overall => keys::OVERALL_CONDITIONS_TO_COVER,
        }
    }

    #[must_use]
    pub const fn uncovered_conditions(self) -> &'static str {
        match self {
            Self::Unit => keys::UNCOVERED_CONDITIONS,
            Self::Integration => keys::IT_UNCOVERED_CONDITIONS,
            Self::Overall => keys::OVERALL_UNCOVERED_CONDITIONS,
        }
    }

    #[must_use]
    pub const fn conditions_by_line(self) -> &'static str {
        match self {
            Self::Unit => keys::CONDITIONS_BY_LINE,
            Self::Integration => keys::IT_CONDITIONS_BY_LINE,
            Self::Overall => keys::OVERALL_CONDITIONS_BY_LINE,
        }
    }

    #[must_use]
    pub const fn covered_conditions_by_line(self) -> &'static str {
        match self {
            Self::Unit => keys::COVERED_CONDITIONS_BY_LINE,
            Self::Integration => keys::IT_COVERED_CONDITIONS_BY_LINE,
            Self::Overall => keys::OVERALL_COVERED_CONDITIONS_BY_LINE,
        }
    }
}
