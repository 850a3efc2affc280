// tests/dag_graph.rs

use questlog::dag::DependencyGraph;
use questlog::errors::QuestlogError;
use questlog::task::TaskId;
use questlog_test_utils::{chain, init_tracing, task};

#[test]
fn closing_a_three_node_loop_is_a_cycle() {
    init_tracing();
    let tasks = chain(&["a", "b", "c"], 1);
    let graph = DependencyGraph::from_tasks(&tasks);

    // a <- b <- c, now propose a depending on c.
    let candidate = tasks[0].with_dependency_added(tasks[2].id());
    assert!(graph.would_cycle(&candidate));
}

#[test]
fn extending_a_chain_is_not_a_cycle() {
    init_tracing();
    let tasks = chain(&["a", "b", "c"], 1);
    let graph = DependencyGraph::from_tasks(&tasks);

    let candidate = tasks[2].with_dependency_added(tasks[0].id());
    assert!(!graph.would_cycle(&candidate));

    let d = task("d", 4).with_dependency_added(tasks[2].id());
    assert!(!graph.would_cycle(&d));
}

#[test]
fn self_dependency_is_a_cycle() {
    let a = task("a", 1);
    let graph = DependencyGraph::from_tasks([&a]);
    let candidate = a.with_dependency_added(a.id());
    assert!(graph.would_cycle(&candidate));
}

#[test]
fn topological_order_puts_dependees_first() {
    let tasks = chain(&["a", "b", "c"], 1);
    // Feed them in reverse.
    let reversed: Vec<_> = tasks.iter().rev().collect();
    let graph = DependencyGraph::from_tasks(reversed);

    let order = graph.topological_order().unwrap();
    let expected: Vec<TaskId> = tasks.iter().map(|t| t.id()).collect();
    assert_eq!(order, expected);
}

#[test]
fn topological_order_breaks_ties_by_input_order() {
    let y = task("y", 1);
    let x = task("x", 2);
    let z = task("z", 3).with_dependency_added(x.id());
    let graph = DependencyGraph::from_tasks([&y, &x, &z]);

    let order = graph.topological_order().unwrap();
    assert_eq!(order, vec![y.id(), x.id(), z.id()]);
}

#[test]
fn topological_order_reports_a_cycle() {
    let a = task("a", 1);
    let b = task("b", 2).with_dependency_added(a.id());
    let a = a.with_dependency_added(b.id());
    let graph = DependencyGraph::from_tasks([&a, &b]);

    match graph.topological_order() {
        Err(QuestlogError::DagCycle(msg)) => assert!(msg.contains("cycle detected")),
        other => panic!("expected DagCycle, got {other:?}"),
    }
}

#[test]
fn pruned_inverted_graph_drops_dangling_edges() {
    init_tracing();
    let ghost = task("ghost", 1);
    let a = task("a", 1);
    let b = task("b", 2)
        .with_dependency_added(a.id())
        .with_dependency_added(ghost.id());
    let graph = DependencyGraph::from_tasks([&a, &b]);

    let inverted = graph.pruned_inverted_graph();
    assert_eq!(inverted.len(), 2);
    assert!(inverted[&a.id()].is_empty());
    assert_eq!(inverted[&b.id()].iter().copied().collect::<Vec<_>>(), vec![a.id()]);

    // The dangling id still counts as an edge target but never as a node.
    assert_eq!(graph.dependencies_of(b.id()).len(), 2);
    assert!(!graph.contains(ghost.id()));
}

#[test]
fn roots_and_dependants() {
    let tasks = chain(&["a", "b", "c"], 1);
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(graph.len(), 3);
    assert_eq!(graph.roots(), vec![tasks[0].id()]);
    assert_eq!(graph.dependants_of(tasks[0].id()), &[tasks[1].id()]);
    assert!(graph.dependants_of(tasks[2].id()).is_empty());
}
