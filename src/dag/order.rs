// src/dag/order.rs

use std::collections::HashMap;

use tracing::debug;

use crate::dag::graph::DepGraph;
use crate::errors::ScheduleError;

/// Traversal mark for a node.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Mark {
    /// On the current traversal stack; seeing it again means a cycle.
    InProgress,
    /// Fully explored and appended to the completion stack.
    Done,
}

/// Produce a topological order of all task names: every dependency appears
/// strictly before its dependents.
///
/// Depth-first traversal with an explicit stack of
/// `(node, next-dependency-index)` frames, so arbitrarily deep graphs never
/// hit a recursion limit. Roots are taken in the graph's stable name order
/// and each node's dependencies are visited in their declared order; a node
/// is appended to the output post-order, after everything it depends on.
/// For a fixed graph the output is identical on every call.
///
/// Cycles are an error: a node encountered while still in progress fails the
/// whole ordering with [`ScheduleError::DependencyCycle`] rather than
/// silently producing an order that violates the dependencies on the cycle.
pub fn topological_order(graph: &DepGraph) -> Result<Vec<String>, ScheduleError> {
    let mut marks: HashMap<&str, Mark> = HashMap::with_capacity(graph.len());
    let mut finished: Vec<String> = Vec::with_capacity(graph.len());

    for root in graph.tasks() {
        if marks.contains_key(root) {
            continue;
        }

        marks.insert(root, Mark::InProgress);
        // Frame: (node, index of the next dependency to visit).
        let mut stack: Vec<(&str, usize)> = vec![(root, 0)];

        while let Some(frame) = stack.last_mut() {
            let (node, next) = (frame.0, frame.1);
            let deps = graph.dependencies_of(node);

            if next < deps.len() {
                frame.1 += 1;
                let dep = deps[next].as_str();
                match marks.get(dep) {
                    None => {
                        marks.insert(dep, Mark::InProgress);
                        stack.push((dep, 0));
                    }
                    Some(Mark::InProgress) => {
                        return Err(ScheduleError::DependencyCycle {
                            task: dep.to_string(),
                        });
                    }
                    Some(Mark::Done) => {}
                }
            } else {
                marks.insert(node, Mark::Done);
                finished.push(node.to_string());
                stack.pop();
            }
        }
    }

    debug!(tasks = finished.len(), "topological order computed");
    Ok(finished)
}
