// src/input/loader.rs

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};

use crate::input::model::TaskSet;
use crate::input::validate::validate_tasks;

/// Load task definitions from a JSON file and return the raw `TaskSet`.
///
/// This only performs deserialization; it does **not** perform semantic
/// validation (dependency references, cycles, resource count). Use
/// [`load_and_validate`] for that.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<TaskSet> {
    let path = path.as_ref();
    let contents =
        fs::read_to_string(path).with_context(|| format!("reading task file at {:?}", path))?;

    let tasks: TaskSet = serde_json::from_str(&contents)
        .with_context(|| format!("parsing JSON task definitions from {:?}", path))?;

    Ok(tasks)
}

/// Load task definitions from a path and run semantic validation against the
/// requested resource pool size.
///
/// This is the recommended entry point for the rest of the application:
///
/// - Reads JSON.
/// - Checks for:
///   - at least one task and `num_resources >= 1`,
///   - unknown or negative-duration definitions,
///   - dependency cycles.
pub fn load_and_validate(path: impl AsRef<Path>, num_resources: usize) -> Result<TaskSet> {
    let tasks = load_from_path(&path)?;
    validate_tasks(&tasks, num_resources)?;
    Ok(tasks)
}
