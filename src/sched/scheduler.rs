// src/sched/scheduler.rs

use std::collections::HashMap;

use serde::Serialize;
use tracing::{debug, trace};

use crate::errors::ScheduleError;
use crate::input::model::{TaskDef, TaskSet};

/// Which point of a dependency's timeline gates a dependent's earliest start.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DependencyBound {
    /// A dependent may start once each dependency has *started*. This is the
    /// historical behaviour of the system and the default; it can schedule a
    /// dependent while its dependency is still occupying a resource.
    #[default]
    StartTime,
    /// A dependent may start only once each dependency has *finished*
    /// (start + duration).
    FinishTime,
}

/// How a resource's free-time advances when a task had to wait for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DelayAccounting {
    /// free-time := previous free-time + duration. Historical behaviour and
    /// the default; asymmetric with the no-wait branch, which sets
    /// free-time := start + duration.
    #[default]
    ExtendPrevious,
    /// free-time := delayed start + duration, matching the no-wait branch.
    FromNewStart,
}

/// Knobs controlling the two places where the historical semantics diverge
/// from strict precedence accounting. `Default` keeps the historical pair.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SchedulerOptions {
    pub dependency_bound: DependencyBound,
    pub delay_accounting: DelayAccounting,
}

impl SchedulerOptions {
    /// Strict precedence semantics: dependents wait for dependency *finish*
    /// times, and delayed tasks advance their resource from the actual start.
    pub fn strict() -> Self {
        Self {
            dependency_bound: DependencyBound::FinishTime,
            delay_accounting: DelayAccounting::FromNewStart,
        }
    }
}

/// One task placed on the timeline. Created once per task, never revised.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Assignment {
    pub task: String,
    pub start_time: f64,
    pub resource: usize,
}

/// A complete schedule: assignments in processing order plus the time the
/// busiest resource finishes.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Schedule {
    pub assignments: Vec<Assignment>,
    pub total_completion_time: f64,
}

impl Schedule {
    /// Look up the assignment for a task by name.
    pub fn get(&self, task: &str) -> Option<&Assignment> {
        self.assignments.iter().find(|a| a.task == task)
    }
}

/// Assign a start time and a resource to every task, walking `ordered` (a
/// dependency-respecting order from [`crate::dag::topological_order`]).
///
/// Greedy, not optimal: each task takes the earliest slot available to it at
/// the moment it is processed, and placements are never revisited. Two
/// passes:
///
/// 1. earliest-start propagation along the order, per
///    [`SchedulerOptions::dependency_bound`];
/// 2. resource assignment against a free-time table (all resources free at
///    0), delaying a task to the earliest-freed resource when none is
///    available at its earliest start.
///
/// The free-time table is owned by this one call; repeated calls with equal
/// inputs produce equal schedules.
pub fn schedule(
    ordered: &[String],
    tasks: &TaskSet,
    num_resources: usize,
    options: SchedulerOptions,
) -> Result<Schedule, ScheduleError> {
    if num_resources < 1 {
        return Err(ScheduleError::InvalidResourceCount { got: num_resources });
    }

    let earliest = earliest_starts(ordered, tasks, options.dependency_bound)?;

    let mut free_at: Vec<f64> = vec![0.0; num_resources];
    let mut assignments: Vec<Assignment> = Vec::with_capacity(ordered.len());

    for name in ordered {
        let def = lookup(tasks, name)?;
        let duration = def.time_required;
        let mut start_time = earliest[name.as_str()];

        let resource = match earliest_available(&free_at, start_time) {
            Some(resource) => {
                // A resource is free by the task's earliest start; take the
                // one that has been idle longest.
                free_at[resource] = start_time + duration;
                resource
            }
            None => {
                // Every resource is busy past the earliest start; wait for
                // the first one to free up.
                let resource = earliest_freed(&free_at);
                let delay = free_at[resource] - start_time;
                start_time += delay;
                free_at[resource] = match options.delay_accounting {
                    DelayAccounting::ExtendPrevious => free_at[resource] + duration,
                    DelayAccounting::FromNewStart => start_time + duration,
                };
                trace!(task = %name, delay, "no resource free at earliest start; delaying");
                resource
            }
        };

        debug!(task = %name, start_time, resource, "task assigned");
        assignments.push(Assignment {
            task: name.clone(),
            start_time,
            resource,
        });
    }

    let total_completion_time = free_at.iter().copied().fold(0.0, f64::max);

    debug!(
        tasks = assignments.len(),
        total_completion_time, "schedule complete"
    );

    Ok(Schedule {
        assignments,
        total_completion_time,
    })
}

/// Pass 1: earliest start per task, walking the order.
///
/// A task's earliest start is the maximum over its dependencies of the
/// dependency's bound (start, or start + duration under `FinishTime`), and 0
/// for tasks with no dependencies. Dereferencing a name with no definition,
/// or a dependency not already processed, fails with `UnknownDependency`.
fn earliest_starts<'a>(
    ordered: &'a [String],
    tasks: &TaskSet,
    bound: DependencyBound,
) -> Result<HashMap<&'a str, f64>, ScheduleError> {
    let mut earliest: HashMap<&str, f64> = HashMap::with_capacity(ordered.len());

    for name in ordered {
        let def = lookup(tasks, name)?;

        let mut start = 0.0f64;
        for dep in def.dependencies.iter() {
            let dep_start =
                earliest
                    .get(dep.as_str())
                    .copied()
                    .ok_or_else(|| ScheduleError::UnknownDependency {
                        task: name.clone(),
                        dependency: dep.clone(),
                    })?;
            let dep_bound = match bound {
                DependencyBound::StartTime => dep_start,
                DependencyBound::FinishTime => {
                    dep_start + lookup(tasks, dep)?.time_required
                }
            };
            start = start.max(dep_bound);
        }

        earliest.insert(name.as_str(), start);
    }

    Ok(earliest)
}

/// Resolve a task name from the ordered sequence to its definition.
///
/// Names reach the order without a definition only via someone's dependency
/// list, so report the failure against the referencing task.
fn lookup<'a>(tasks: &'a TaskSet, name: &str) -> Result<&'a TaskDef, ScheduleError> {
    tasks.get(name).ok_or_else(|| {
        let referrer = tasks
            .iter()
            .find(|(_, def)| def.dependencies.iter().any(|d| d == name))
            .map(|(task, _)| task.clone())
            .unwrap_or_default();
        ScheduleError::UnknownDependency {
            task: referrer,
            dependency: name.to_string(),
        }
    })
}

/// Among resources free at or before `start_time`, the one with the smallest
/// free-time; ties go to the lowest index. `None` if every resource is busy.
fn earliest_available(free_at: &[f64], start_time: f64) -> Option<usize> {
    let mut best: Option<usize> = None;
    for (resource, &free) in free_at.iter().enumerate() {
        if free <= start_time && best.is_none_or(|b| free < free_at[b]) {
            best = Some(resource);
        }
    }
    best
}

/// The resource with the smallest free-time overall; ties go to the lowest
/// index. `free_at` is non-empty (resource count is validated up front).
fn earliest_freed(free_at: &[f64]) -> usize {
    let mut best = 0;
    for (resource, &free) in free_at.iter().enumerate().skip(1) {
        if free < free_at[best] {
            best = resource;
        }
    }
    best
}
