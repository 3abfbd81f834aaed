use std::error::Error;

use taskdag::input::{TaskDef, TaskSet};
use taskdag::plan;
use taskdag::render::render;
use taskdag::sched::SchedulerOptions;

type TestResult = Result<(), Box<dyn Error>>;

fn task_set(entries: Vec<(&str, TaskDef)>) -> TaskSet {
    entries
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect()
}

#[test]
fn tasks_appear_under_their_resource() -> TestResult {
    let tasks = task_set(vec![("T1", TaskDef::new(5.0)), ("T2", TaskDef::new(5.0))]);
    let schedule = plan(&tasks, 2, SchedulerOptions::default())?;

    let out = render(&schedule, &tasks, 2);
    let lines: Vec<&str> = out.lines().collect();

    let r0 = lines.iter().position(|l| *l == "resource 0:").unwrap();
    let r1 = lines.iter().position(|l| *l == "resource 1:").unwrap();
    assert!(r0 < r1);

    // One task in each section.
    assert!(lines[r0 + 1].contains("T1"));
    assert!(lines[r1 + 1].contains("T2"));

    Ok(())
}

#[test]
fn unused_resources_are_marked_idle() -> TestResult {
    let tasks = task_set(vec![("only", TaskDef::new(2.0))]);
    let schedule = plan(&tasks, 3, SchedulerOptions::default())?;

    let out = render(&schedule, &tasks, 3);
    assert_eq!(out.matches("(idle)").count(), 2);

    Ok(())
}

#[test]
fn rows_are_sorted_by_start_time() -> TestResult {
    let tasks = task_set(vec![
        ("early", TaskDef::new(1.0)),
        ("late", TaskDef::new(1.0).with_dependencies(["early"])),
    ]);
    let schedule = plan(&tasks, 1, SchedulerOptions::default())?;

    let out = render(&schedule, &tasks, 1);
    let early = out.find("early").unwrap();
    let late = out.find("late").unwrap();
    assert!(early < late);

    Ok(())
}
