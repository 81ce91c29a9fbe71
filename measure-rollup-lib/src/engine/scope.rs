use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Structural level of a component, ordered from the finest to the coarsest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Display, EnumIter, EnumString, Deserialize, Serialize)]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
#[serde(rename_all = "snake_case")]
pub enum Scope {
    /// A block inside a file, such as a function or class body.
    BlockUnit,
    File,
    /// A directory, module, or package.
    Directory,
    Project,
}
