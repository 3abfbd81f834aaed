// src/sched/mod.rs

//! Greedy resource-constrained scheduling.
//!
//! Consumes a topological task order and places every task on a resource
//! from a fixed pool, producing a [`Schedule`] and the total completion time.

pub mod scheduler;

pub use scheduler::{
    Assignment, DelayAccounting, DependencyBound, Schedule, SchedulerOptions, schedule,
};
