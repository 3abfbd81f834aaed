// src/dag/mod.rs

//! Dependency-graph representation and ordering.
//!
//! - [`graph`] holds a simple directed graph of tasks keyed by name.
//! - [`order`] turns it into a linear schedule-ready task order.

pub mod graph;
pub mod order;

pub use graph::DepGraph;
pub use order::topological_order;
