// src/input/validate.rs

use petgraph::algo::toposort;
use petgraph::graphmap::DiGraphMap;

use crate::errors::ScheduleError;
use crate::input::model::TaskSet;

/// Run semantic validation against a loaded task set.
///
/// This checks:
/// - there is at least one task
/// - `num_resources >= 1`
/// - no task has a negative `timeRequired`
/// - all dependency references point at existing tasks
/// - the dependency graph has no cycles
///
/// The scheduler defends against the first four conditions itself (it is also
/// a library entry point), but validating here lets the CLI report problems
/// before any ordering work starts.
pub fn validate_tasks(tasks: &TaskSet, num_resources: usize) -> Result<(), ScheduleError> {
    ensure_has_tasks(tasks)?;
    validate_resource_count(num_resources)?;
    validate_durations(tasks)?;
    validate_dependencies(tasks)?;
    validate_acyclic(tasks)?;
    Ok(())
}

fn ensure_has_tasks(tasks: &TaskSet) -> Result<(), ScheduleError> {
    if tasks.is_empty() {
        return Err(ScheduleError::EmptyTaskSet);
    }
    Ok(())
}

fn validate_resource_count(num_resources: usize) -> Result<(), ScheduleError> {
    if num_resources < 1 {
        return Err(ScheduleError::InvalidResourceCount { got: num_resources });
    }
    Ok(())
}

fn validate_durations(tasks: &TaskSet) -> Result<(), ScheduleError> {
    for (name, def) in tasks.iter() {
        if def.time_required < 0.0 {
            return Err(ScheduleError::NegativeDuration { task: name.clone() });
        }
    }
    Ok(())
}

fn validate_dependencies(tasks: &TaskSet) -> Result<(), ScheduleError> {
    for (name, def) in tasks.iter() {
        for dep in def.dependencies.iter() {
            if tasks.get(dep).is_none() {
                return Err(ScheduleError::UnknownDependency {
                    task: name.clone(),
                    dependency: dep.clone(),
                });
            }
        }
    }
    Ok(())
}

fn validate_acyclic(tasks: &TaskSet) -> Result<(), ScheduleError> {
    // Build a petgraph graph from the tasks and their dependencies.
    //
    // Edge direction: dep -> task, so for
    //   "test": { "dependencies": ["build"] }
    // we add edge build -> test. A self-dependency is a one-node cycle and is
    // reported the same way.
    let mut graph: DiGraphMap<&str, ()> = DiGraphMap::new();

    for (name, _) in tasks.iter() {
        graph.add_node(name.as_str());
    }

    for (name, def) in tasks.iter() {
        for dep in def.dependencies.iter() {
            graph.add_edge(dep.as_str(), name.as_str(), ());
        }
    }

    match toposort(&graph, None) {
        Ok(_order) => Ok(()),
        Err(cycle) => Err(ScheduleError::DependencyCycle {
            task: cycle.node_id().to_string(),
        }),
    }
}
