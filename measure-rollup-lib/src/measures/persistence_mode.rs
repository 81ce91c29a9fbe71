use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// Whether a measure outlives the aggregation pass that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Display, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "snake_case")]
#[serde(rename_all = "snake_case")]
pub enum PersistenceMode {
    /// Visible to later formulas and reports during this pass only.
    MemoryOnly,

    #[default]
    Durable,
}

impl PersistenceMode {
    #[must_use]
    pub const fn is_durable(self) -> bool {
        matches!(self, Self::Durable)
    }
}
