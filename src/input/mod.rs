// src/input/mod.rs

//! Task-definition loading and validation.
//!
//! Responsibilities:
//! - Define the JSON-backed data model (`model.rs`).
//! - Load a task file from disk (`loader.rs`).
//! - Validate semantic invariants like dependency correctness (`validate.rs`).

pub mod loader;
pub mod model;
pub mod validate;

pub use loader::{load_and_validate, load_from_path};
pub use model::{TaskDef, TaskSet};
pub use validate::validate_tasks;
