// src/errors.rs

//! Crate-wide error types.
//!
//! The application boundary (file loading, CLI wiring) uses `anyhow`; the
//! ordering and scheduling core reports failures through the structured
//! [`ScheduleError`] enum so library callers can match on the exact condition.

use thiserror::Error;

pub use anyhow::{Error, Result};

/// Failures the ordering and scheduling core can produce.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ScheduleError {
    /// A task lists a dependency that is not a key in the task set.
    #[error("task '{task}' has unknown dependency '{dependency}'")]
    UnknownDependency { task: String, dependency: String },

    /// The dependency graph contains a cycle; `task` lies on it.
    #[error("dependency cycle detected involving task '{task}'")]
    DependencyCycle { task: String },

    /// The resource pool must contain at least one resource.
    #[error("resource count must be >= 1 (got {got})")]
    InvalidResourceCount { got: usize },

    /// A task declares a negative duration.
    #[error("task '{task}' has a negative timeRequired")]
    NegativeDuration { task: String },

    /// The task set contains no tasks.
    #[error("task set contains no tasks")]
    EmptyTaskSet,
}
