// tests/urgency.rs

use std::collections::HashMap;

use questlog::dag::DependencyGraph;
use questlog::errors::QuestlogError;
use questlog_test_utils::{chain, due_in_days, init_tracing, task};

#[test]
fn three_level_chain_takes_the_deepest_due_date() {
    init_tracing();
    // a (due +1) <- b (+2) <- c (+3)
    let tasks = chain(&["a", "b", "c"], 1);
    let graph = DependencyGraph::from_tasks(&tasks);

    assert_eq!(
        graph.earliest_dependent_due_date_of(tasks[2].id()).unwrap(),
        due_in_days(1)
    );
    assert_eq!(
        graph.earliest_dependent_due_date_of(tasks[0].id()).unwrap(),
        due_in_days(1)
    );
}

#[test]
fn own_due_date_wins_when_earlier() {
    let dep = task("dep", 5);
    let urgent = task("urgent", 1).with_dependency_added(dep.id());
    let graph = DependencyGraph::from_tasks([&dep, &urgent]);

    assert_eq!(
        graph.earliest_dependent_due_date_of(urgent.id()).unwrap(),
        due_in_days(1)
    );
}

#[test]
fn shared_dependees_are_memoised() {
    // top -> {left, right} -> shared
    let shared = task("shared", 2);
    let left = task("left", 4).with_dependency_added(shared.id());
    let right = task("right", 3).with_dependency_added(shared.id());
    let top = task("top", 6)
        .with_dependency_added(left.id())
        .with_dependency_added(right.id());
    let graph = DependencyGraph::from_tasks([&shared, &left, &right, &top]);

    let inverted = graph.pruned_inverted_graph();
    let mut memo = HashMap::new();
    let date = graph
        .earliest_dependent_due_date(top.id(), &inverted, &mut memo)
        .unwrap();

    assert_eq!(date, due_in_days(2));
    assert_eq!(memo.len(), 4);
    assert_eq!(memo[&right.id()], due_in_days(2));

    // A later query is answered from the memo.
    let again = graph
        .earliest_dependent_due_date(left.id(), &inverted, &mut memo)
        .unwrap();
    assert_eq!(again, due_in_days(2));
}

#[test]
fn cyclic_input_is_reported_not_looped() {
    let a = task("a", 1);
    let b = task("b", 2).with_dependency_added(a.id());
    let a = a.with_dependency_added(b.id());
    let graph = DependencyGraph::from_tasks([&a, &b]);

    match graph.earliest_dependent_due_date_of(a.id()) {
        Err(QuestlogError::DagCycle(_)) => {}
        other => panic!("expected DagCycle, got {other:?}"),
    }
}

#[test]
fn unknown_node_is_not_found() {
    let a = task("a", 1);
    let stranger = task("stranger", 1);
    let graph = DependencyGraph::from_tasks([&a]);

    assert!(matches!(
        graph.earliest_dependent_due_date_of(stranger.id()),
        Err(QuestlogError::TaskNotFound(_))
    ));
}
