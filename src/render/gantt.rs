// src/render/gantt.rs

use std::fmt::Write as _;

use crate::input::model::TaskSet;
use crate::sched::{Assignment, Schedule};

/// Width of the timeline area, in characters.
const TIMELINE_WIDTH: f64 = 48.0;

/// Render a schedule as a plain-text per-resource timeline.
///
/// One section per resource, tasks sorted by start time, each drawn as a
/// `#` bar offset and scaled so the whole plan spans [`TIMELINE_WIDTH`]
/// columns:
///
/// ```text
/// resource 0:
///   build     ######                   [0 - 4]
///   test      ...
/// ```
pub fn render(schedule: &Schedule, tasks: &TaskSet, num_resources: usize) -> String {
    let mut out = String::new();

    let scale = if schedule.total_completion_time > 0.0 {
        TIMELINE_WIDTH / schedule.total_completion_time
    } else {
        0.0
    };

    for resource in 0..num_resources {
        let mut rows: Vec<&Assignment> = schedule
            .assignments
            .iter()
            .filter(|a| a.resource == resource)
            .collect();
        rows.sort_by(|a, b| a.start_time.total_cmp(&b.start_time));

        let _ = writeln!(out, "resource {resource}:");
        if rows.is_empty() {
            let _ = writeln!(out, "  (idle)");
            continue;
        }

        for a in rows {
            let duration = tasks.get(&a.task).map(|d| d.time_required).unwrap_or(0.0);
            let end = a.start_time + duration;

            let lead = (a.start_time * scale).round() as usize;
            // Zero-duration tasks still get one visible cell.
            let bar = ((duration * scale).round() as usize).max(1);
            let tail = (TIMELINE_WIDTH as usize + 1).saturating_sub(lead + bar);

            let _ = writeln!(
                out,
                "  {:<12} {}{}{} [{} - {}]",
                a.task,
                " ".repeat(lead),
                "#".repeat(bar),
                " ".repeat(tail),
                a.start_time,
                end,
            );
        }
    }

    out
}
