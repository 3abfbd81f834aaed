use std::error::Error;

use taskdag::dag::{DepGraph, topological_order};
use taskdag::errors::ScheduleError;
use taskdag::input::{TaskDef, TaskSet};

type TestResult = Result<(), Box<dyn Error>>;

fn task_set(entries: Vec<(&str, TaskDef)>) -> TaskSet {
    entries
        .into_iter()
        .map(|(name, def)| (name.to_string(), def))
        .collect()
}

fn diamond() -> TaskSet {
    task_set(vec![
        (
            "assemble",
            TaskDef::new(2.0).with_dependencies(["weld", "paint"]),
        ),
        ("paint", TaskDef::new(1.0).with_dependencies(["cut"])),
        ("weld", TaskDef::new(3.0).with_dependencies(["cut"])),
        ("cut", TaskDef::new(1.0)),
    ])
}

#[test]
fn dependencies_come_before_dependents() -> TestResult {
    let tasks = diamond();
    let graph = DepGraph::from_tasks(&tasks);
    let order = topological_order(&graph)?;

    assert_eq!(order.len(), 4);
    let pos = |n: &str| order.iter().position(|x| x == n).unwrap();
    for (name, def) in tasks.iter() {
        for dep in def.dependencies.iter() {
            assert!(
                pos(dep) < pos(name),
                "'{dep}' must precede '{name}' in {order:?}"
            );
        }
    }

    Ok(())
}

#[test]
fn order_is_deterministic() -> TestResult {
    let tasks = diamond();
    let graph = DepGraph::from_tasks(&tasks);

    let first = topological_order(&graph)?;
    let second = topological_order(&graph)?;
    assert_eq!(first, second);

    // Roots are visited in sorted name order, dependencies in declared
    // order, so the exact sequence is pinned down.
    assert_eq!(first, vec!["cut", "weld", "paint", "assemble"]);

    Ok(())
}

#[test]
fn cycle_is_an_error() {
    let tasks = task_set(vec![
        ("a", TaskDef::new(1.0).with_dependencies(["b"])),
        ("b", TaskDef::new(1.0).with_dependencies(["c"])),
        ("c", TaskDef::new(1.0).with_dependencies(["a"])),
    ]);
    let graph = DepGraph::from_tasks(&tasks);

    let err = topological_order(&graph).unwrap_err();
    assert!(matches!(err, ScheduleError::DependencyCycle { .. }), "{err}");
}

#[test]
fn self_dependency_is_a_cycle() {
    let tasks = task_set(vec![("a", TaskDef::new(1.0).with_dependencies(["a"]))]);
    let graph = DepGraph::from_tasks(&tasks);

    let err = topological_order(&graph).unwrap_err();
    assert_eq!(
        err,
        ScheduleError::DependencyCycle {
            task: "a".to_string()
        }
    );
}

#[test]
fn deep_chain_does_not_overflow_the_stack() -> TestResult {
    // t00000 depends on t00001 depends on ... so the traversal from the
    // first root descends the full chain in one go.
    let n = 50_000;
    let tasks: TaskSet = (0..n)
        .map(|i| {
            let def = if i + 1 < n {
                TaskDef::new(1.0).with_dependencies([format!("t{:05}", i + 1)])
            } else {
                TaskDef::new(1.0)
            };
            (format!("t{i:05}"), def)
        })
        .collect();

    let graph = DepGraph::from_tasks(&tasks);
    let order = topological_order(&graph)?;

    assert_eq!(order.len(), n);
    assert_eq!(order.first().map(String::as_str), Some("t49999"));
    assert_eq!(order.last().map(String::as_str), Some("t00000"));

    Ok(())
}

#[test]
fn empty_graph_gives_empty_order() -> TestResult {
    let graph = DepGraph::from_tasks(&TaskSet::default());
    assert!(topological_order(&graph)?.is_empty());
    Ok(())
}
