//! Measures: the values metrics take on individual components
//!
//! # Implementation Model
//!
//! A [`Measure`] pairs a metric key with an optional numeric value and an optional
//! text payload (used by distribution and data metrics). Numeric values are always
//! rounded half-up to a fixed precision and can never be NaN, so rounding happens in
//! the setters rather than when values are read.
//!
//! Measures may also be scoped to a rule, a characteristic, or a person. The tuple
//! (metric key, characteristic, requirement, person id) forms the measure's slot;
//! [`selection`] provides lookups by slot and the small arithmetic helpers formulas
//! rely on.

mod level;
mod measure;
mod persistence_mode;
mod rounding;
pub mod selection;

pub use level::Level;
pub use measure::{DEFAULT_PRECISION, MAX_VARIATIONS, Measure};
pub use persistence_mode::PersistenceMode;
pub use rounding::round_half_up;
