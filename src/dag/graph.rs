// src/dag/graph.rs

use std::collections::BTreeMap;

use crate::input::model::TaskSet;

/// Simple in-memory dependency graph keyed by task name.
///
/// This is intentionally lightweight; acyclicity is checked both in
/// `input::validate` and by the ordering traversal itself, so here we just
/// keep adjacency information. Built once from a task set and read-only
/// afterwards.
#[derive(Debug, Clone)]
pub struct DepGraph {
    /// Task name -> direct dependency names, in their declared order.
    ///
    /// `BTreeMap` keeps `tasks()` iteration deterministic (sorted by name),
    /// which makes the produced topological order reproducible across runs.
    nodes: BTreeMap<String, Vec<String>>,
}

impl DepGraph {
    /// Build a graph from a [`TaskSet`].
    pub fn from_tasks(tasks: &TaskSet) -> Self {
        let mut nodes = BTreeMap::new();
        for (name, def) in tasks.iter() {
            nodes.insert(name.clone(), def.dependencies.clone());
        }
        Self { nodes }
    }

    /// All task names, in stable sorted order.
    pub fn tasks(&self) -> impl Iterator<Item = &str> {
        self.nodes.keys().map(|s| s.as_str())
    }

    /// Immediate dependencies of a task, in declared order.
    ///
    /// Unknown names yield an empty slice; the scheduler surfaces missing
    /// definitions as errors when it dereferences them.
    pub fn dependencies_of(&self, name: &str) -> &[String] {
        self.nodes.get(name).map(|d| d.as_slice()).unwrap_or(&[])
    }

    /// Number of tasks in the graph.
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
