use std::collections::HashSet;

use depdag::errors::SchedError;
use depdag::sched::Scheduler;
use depdag_test_utils::builders::SchedulerBuilder;
use depdag_test_utils::init_tracing;

#[test]
fn empty_scheduler_yields_no_groups() {
    init_tracing();
    let mut scheduler = Scheduler::<String>::new();
    assert_eq!(scheduler.task_count(), 0);
    assert_eq!(scheduler.dependency_count(), 0);
    let groups = scheduler.schedule().unwrap();
    assert!(groups.is_empty());
}

#[test]
fn registration_is_idempotent() {
    init_tracing();
    let mut scheduler = Scheduler::new();
    scheduler.add_task("A");
    assert_eq!(scheduler.task_count(), 1);
    scheduler.add_task("A");
    assert_eq!(scheduler.task_count(), 1);
    scheduler.add_tasks(["B", "C", "B"]);
    assert_eq!(scheduler.task_count(), 3);
}

#[test]
fn add_prerequisite_auto_registers_new_tasks() {
    init_tracing();
    let mut scheduler = Scheduler::new();

    // Both identifiers new: +2.
    scheduler.add_prerequisite("B", "A");
    assert_eq!(scheduler.task_count(), 2);

    // One identifier new: +1.
    scheduler.add_prerequisite("C", "B");
    assert_eq!(scheduler.task_count(), 3);

    // Nothing new: +0.
    scheduler.add_prerequisite("C", "A");
    assert_eq!(scheduler.task_count(), 3);
}

#[test]
fn duplicate_dependencies_count_once() {
    init_tracing();
    let mut scheduler = Scheduler::new();
    scheduler.add_prerequisite("B", "A");
    scheduler.add_prerequisite("B", "A");
    assert_eq!(scheduler.dependency_count(), 1);
}

#[test]
fn linear_chain_schedules_in_order() {
    init_tracing();
    // A <- B <- C <- D: each task depends on the previous one.
    let mut scheduler = SchedulerBuilder::new().with_chain(&["A", "B", "C", "D"]).build();
    let groups = scheduler.schedule().unwrap();
    assert_eq!(groups, vec![vec!["A", "B", "C", "D"]]);
}

#[test]
fn binary_tree_orders_root_first() {
    init_tracing();
    // B and C both depend on A.
    let mut scheduler = SchedulerBuilder::new()
        .with_prerequisite("B", "A")
        .with_prerequisite("C", "A")
        .build();

    let groups = scheduler.schedule().unwrap();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group[0], "A");
    assert_eq!(
        group[1..].iter().collect::<HashSet<_>>(),
        ["B".to_string(), "C".to_string()].iter().collect()
    );
}

#[test]
fn reversed_binary_tree_orders_root_last() {
    init_tracing();
    // A depends on both B and C.
    let mut scheduler = Scheduler::new();
    scheduler.add_prerequisites("A", ["B", "C"]);

    let groups = scheduler.schedule().unwrap();
    assert_eq!(groups.len(), 1);
    let group = &groups[0];
    assert_eq!(group[2], "A");
    assert_eq!(
        group[..2].iter().collect::<HashSet<_>>(),
        ["B", "C"].iter().collect()
    );
}

#[test]
fn disjoint_chains_form_independent_groups() {
    init_tracing();
    let mut scheduler = SchedulerBuilder::new()
        .with_chain(&["A", "B", "C"])
        .with_chain(&["1", "2", "3"])
        .build();

    let groups = scheduler.schedule().unwrap();
    let groups: HashSet<Vec<String>> = groups.into_iter().collect();
    let expected: HashSet<Vec<String>> = [
        vec!["A".to_string(), "B".to_string(), "C".to_string()],
        vec!["1".to_string(), "2".to_string(), "3".to_string()],
    ]
    .into_iter()
    .collect();
    assert_eq!(groups, expected);
}

#[test]
fn isolated_task_forms_a_singleton_group() {
    init_tracing();
    let mut scheduler = SchedulerBuilder::new()
        .with_chain(&["A", "B"])
        .with_task("solo")
        .build();

    let groups = scheduler.schedule().unwrap();
    assert!(groups.contains(&vec!["solo".to_string()]));
    assert_eq!(groups.len(), 2);
}

#[test]
fn cycle_fails_the_whole_schedule() {
    init_tracing();
    // A <- B <- C <- A closes a cycle.
    let mut scheduler = Scheduler::new();
    scheduler.add_prerequisite("A", "B");
    scheduler.add_prerequisite("B", "C");
    scheduler.add_prerequisite("C", "A");

    let err = scheduler.schedule().unwrap_err();
    match err {
        SchedError::CycleDetected { task } => {
            assert!(["A", "B", "C"].contains(&task.as_str()));
        }
        other => panic!("expected CycleDetected, got {other:?}"),
    }
}

#[test]
fn task_depending_on_itself_is_a_cycle() {
    init_tracing();
    let mut scheduler = Scheduler::new();
    scheduler.add_prerequisite("A", "A");
    assert!(matches!(
        scheduler.schedule(),
        Err(SchedError::CycleDetected { .. })
    ));
}

#[test]
fn check_dependency_follows_transitive_edges() {
    init_tracing();
    let scheduler = SchedulerBuilder::new().with_chain(&["A", "B", "C"]).build();

    // Direct and transitive prerequisites.
    assert!(scheduler.check_dependency(&"B".to_string(), &"A".to_string()));
    assert!(scheduler.check_dependency(&"C".to_string(), &"B".to_string()));
    assert!(scheduler.check_dependency(&"C".to_string(), &"A".to_string()));

    // Dependency is directional.
    assert!(!scheduler.check_dependency(&"A".to_string(), &"C".to_string()));

    // Unknown identifiers are never reachable.
    assert!(!scheduler.check_dependency(&"C".to_string(), &"Z".to_string()));
    assert!(!scheduler.check_dependency(&"Z".to_string(), &"A".to_string()));
}

#[test]
fn schedule_reflects_mutations_between_calls() {
    init_tracing();
    let mut scheduler = SchedulerBuilder::new()
        .with_chain(&["A", "B"])
        .with_chain(&["X", "Y"])
        .build();

    assert_eq!(scheduler.schedule().unwrap().len(), 2);

    // Bridge the two components; the next schedule sees one group.
    scheduler.add_prerequisite("X".to_string(), "B".to_string());
    let groups = scheduler.schedule().unwrap();
    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].len(), 4);
}

#[test]
fn prerequisites_of_lists_direct_edges_only() {
    init_tracing();
    let scheduler = SchedulerBuilder::new()
        .with_chain(&["A", "B", "C"])
        .build();

    let b = "B".to_string();
    assert_eq!(scheduler.prerequisites_of(&b), vec![&"A".to_string()]);
    let c = "C".to_string();
    assert_eq!(scheduler.prerequisites_of(&c), vec![&b]);
    assert!(scheduler.prerequisites_of(&"A".to_string()).is_empty());
    assert!(scheduler.prerequisites_of(&"Z".to_string()).is_empty());
}
