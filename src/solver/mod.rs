//! Jotto solving machinery
//!
//! Entropy-guided guess selection, offline decision tree construction and the
//! runtime that walks a built tree one reply at a time.

mod engine;
pub mod entropy;
mod runtime;
pub mod tree;

pub use engine::{Engine, SolvePath, SolveStep};
pub use runtime::QueryTree;
pub use tree::{Node, TreeStats};
