// src/lib.rs

pub mod cli;
pub mod dag;
pub mod errors;
pub mod input;
pub mod logging;
pub mod render;
pub mod sched;

use std::path::PathBuf;

use anyhow::Result;
use serde_json::json;
use tracing::{debug, info};

use crate::cli::CliArgs;
use crate::dag::{DepGraph, topological_order};
use crate::errors::ScheduleError;
use crate::input::loader::load_and_validate;
use crate::input::model::TaskSet;
use crate::sched::{Schedule, SchedulerOptions, schedule};

/// Order and schedule a task set onto `num_resources` resources.
///
/// This is the library entry point behind the CLI: builds the dependency
/// graph, computes a topological order, and runs the greedy scheduler. Pure
/// function of its inputs.
pub fn plan(
    tasks: &TaskSet,
    num_resources: usize,
    options: SchedulerOptions,
) -> Result<Schedule, ScheduleError> {
    let graph = DepGraph::from_tasks(tasks);
    let ordered = topological_order(&graph)?;
    schedule(&ordered, tasks, num_resources, options)
}

/// High-level entry point used by `main.rs`.
///
/// This wires together:
/// - task file loading + validation
/// - graph ordering + scheduling
/// - JSON emission and the optional timeline rendering
pub fn run(args: CliArgs) -> Result<()> {
    let tasks_path = PathBuf::from(&args.tasks);
    let tasks = load_and_validate(&tasks_path, args.resources)?;

    if args.dry_run {
        print_dry_run(&tasks, args.resources);
        return Ok(());
    }

    let options = if args.strict {
        SchedulerOptions::strict()
    } else {
        SchedulerOptions::default()
    };

    info!(
        tasks = tasks.len(),
        resources = args.resources,
        strict = args.strict,
        "scheduling"
    );

    let schedule = plan(&tasks, args.resources, options)?;
    print_schedule(&schedule, args.pretty)?;

    if args.gantt {
        print!("{}", render::render(&schedule, &tasks, args.resources));
    }

    Ok(())
}

/// Emit the schedule as a single JSON document on stdout: a mapping from
/// task name to `{start_time, resource}`, plus the total completion time.
fn print_schedule(schedule: &Schedule, pretty: bool) -> Result<()> {
    let mut entries = serde_json::Map::new();
    for a in &schedule.assignments {
        entries.insert(
            a.task.clone(),
            json!({ "start_time": a.start_time, "resource": a.resource }),
        );
    }

    let doc = json!({
        "schedule": entries,
        "total_completion_time": schedule.total_completion_time,
    });

    let rendered = if pretty {
        serde_json::to_string_pretty(&doc)?
    } else {
        serde_json::to_string(&doc)?
    };
    println!("{rendered}");

    Ok(())
}

/// Simple dry-run output: print tasks, durations and dependencies.
fn print_dry_run(tasks: &TaskSet, num_resources: usize) {
    println!("taskdag dry-run");
    println!("  resources = {num_resources}");
    println!();

    println!("tasks ({}):", tasks.len());
    for (name, def) in tasks.iter() {
        println!("  - {name}");
        println!("      timeRequired: {}", def.time_required);
        if !def.dependencies.is_empty() {
            println!("      dependencies: {:?}", def.dependencies);
        }
    }

    debug!("dry-run complete (no scheduling)");
}
