//! Bottom-up evaluation of derived metrics over a component tree
//!
//! # Implementation Model
//!
//! The engine consumes two collaborators:
//!
//! - [`ComponentTree`]: the component hierarchy (project, directories, files) with
//!   each node's [`Scope`] and children
//! - [`MeasureStore`]: where each node's measures are read and written
//!
//! [`ProjectTree`] and [`InMemoryMeasureStore`] are the in-memory implementations
//! used by the command-line front end and by tests.
//!
//! [`aggregate`] is the scheduler. It takes the metrics carrying a formula in the
//! catalogue's evaluation order (dependencies first), and for each metric walks the
//! tree in post-order so children are always computed before their parent. Every
//! formula sees an immutable snapshot of the store; a result is written back before the
//! next node is visited. Evaluation is sequential and never fails: a formula that has
//! nothing to compute just yields no measure.

mod component_tree;
mod measure_store;
mod node_id;
mod project_tree;
mod scheduler;
mod scope;

pub use component_tree::ComponentTree;
pub use measure_store::{InMemoryMeasureStore, MeasureStore};
pub use node_id::NodeId;
pub use project_tree::ProjectTree;
pub use scheduler::{AggregationSummary, aggregate};
pub use scope::Scope;
