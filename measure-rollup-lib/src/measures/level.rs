use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Alert level attached to a measure by quality-gate evaluation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "UPPERCASE", ascii_case_insensitive)]
#[serde(rename_all = "UPPERCASE")]
pub enum Level {
    Ok,
    Warn,
    Error,
}
