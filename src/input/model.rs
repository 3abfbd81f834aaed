// src/input/model.rs

use std::collections::BTreeMap;

use serde::Deserialize;

/// Task definitions as read from a JSON file.
///
/// This is a direct mapping of the input format:
///
/// ```json
/// {
///   "build": { "dependencies": [], "timeRequired": 4 },
///   "test":  { "dependencies": ["build"], "timeRequired": 2.5 }
/// }
/// ```
///
/// Keys are the *task names*. A `BTreeMap` keeps iteration order stable and
/// caller-visible (sorted by name), which the ordering step relies on for
/// reproducible output.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(transparent)]
pub struct TaskSet {
    pub tasks: BTreeMap<String, TaskDef>,
}

/// A single task definition.
#[derive(Debug, Clone, Deserialize)]
pub struct TaskDef {
    /// Names of tasks that must progress before this one may start.
    #[serde(default)]
    pub dependencies: Vec<String>,

    /// Time this task occupies a resource for. Non-negative.
    #[serde(rename = "timeRequired")]
    pub time_required: f64,
}

impl TaskSet {
    /// Number of tasks in the set.
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Look up a task definition by name.
    pub fn get(&self, name: &str) -> Option<&TaskDef> {
        self.tasks.get(name)
    }

    /// Iterate (name, definition) pairs in stable name order.
    pub fn iter(&self) -> impl Iterator<Item = (&String, &TaskDef)> {
        self.tasks.iter()
    }
}

impl TaskDef {
    /// Convenience constructor for a task with no dependencies.
    pub fn new(time_required: f64) -> Self {
        Self {
            dependencies: Vec::new(),
            time_required,
        }
    }

    /// Sets the dependency list.
    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = impl Into<String>>) -> Self {
        self.dependencies = deps.into_iter().map(Into::into).collect();
        self
    }
}

impl FromIterator<(String, TaskDef)> for TaskSet {
    fn from_iter<I: IntoIterator<Item = (String, TaskDef)>>(iter: I) -> Self {
        Self {
            tasks: iter.into_iter().collect(),
        }
    }
}
