use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Which way a metric's values improve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumIter, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
#[serde(rename_all = "lowercase")]
pub enum Direction {
    /// Higher values are worse.
    Worst,

    /// Higher values are better.
    Better,

    /// Values carry no quality judgement.
    #[default]
    None,
}
