use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString, IntoStaticStr};

/// The kind of value a metric carries.
///
/// The textual forms (`INT`, `DISTRIB`, ...) are part of the stored data format and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, IntoStaticStr, Deserialize, Serialize)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE", ascii_case_insensitive)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ValueType {
    Int,
    Float,
    Percent,
    Bool,
    String,
    Millisec,
    Data,
    Level,
    Distrib,
    Rating,
    WorkDur,
}

impl ValueType {
    /// Whether measures of this type carry a numeric value.
    #[must_use]
    pub const fn is_numeric(self) -> bool {
        matches!(
            self,
            Self::Int | Self::Float | Self::Percent | Self::Bool | Self::Millisec | Self::Rating | Self::WorkDur
        )
    }

    /// Whether measures of this type carry their payload in the text `data` field.
    #[must_use]
    pub const fn is_data(self) -> bool {
        matches!(self, Self::Data | Self::Distrib | Self::String | Self::Level)
    }
}
