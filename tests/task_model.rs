// tests/task_model.rs

use chrono::{TimeZone, Utc};
use questlog::errors::QuestlogError;
use questlog::task::{DueDate, Priority, Status, Task};
use questlog_test_utils::{due_in_days, reference_now, task};

#[test]
fn due_dates_parse_the_supported_formats() {
    let midnight: DueDate = "01-10-19".parse().unwrap();
    assert_eq!(
        midnight.instant(),
        Utc.with_ymd_and_hms(2019, 10, 1, 0, 0, 0).unwrap()
    );

    let with_time: DueDate = "03-10-19 1700".parse().unwrap();
    assert_eq!(
        with_time.instant(),
        Utc.with_ymd_and_hms(2019, 10, 3, 17, 0, 0).unwrap()
    );
    assert_eq!(with_time.to_string(), "03-10-19 1700");

    let rfc: DueDate = "2024-01-10T12:00:00+02:00".parse().unwrap();
    assert_eq!(
        rfc.instant(),
        Utc.with_ymd_and_hms(2024, 1, 10, 10, 0, 0).unwrap()
    );

    assert!(matches!(
        "tomorrow".parse::<DueDate>(),
        Err(QuestlogError::InvalidArgument(_))
    ));
}

#[test]
fn overdue_means_strictly_after() {
    let due = DueDate::new(reference_now());
    assert!(!due.is_overdue(reference_now()));
    assert!(due.is_overdue(reference_now() + chrono::Duration::seconds(1)));
}

#[test]
fn builder_validates_fields() {
    assert!(matches!(
        Task::builder("").due_date(due_in_days(1)).build(),
        Err(QuestlogError::InvalidArgument(_))
    ));
    assert!(Task::builder("no due date").build().is_err());
    assert!(Priority::new(0).is_err());

    let t = Task::builder("write")
        .due_date(due_in_days(1))
        .priority(Priority::new(2).unwrap())
        .description("first draft")
        .label("writing")
        .build()
        .unwrap();
    assert_eq!(t.status(), Status::InProgress);
    assert_eq!(Status::default(), Status::InProgress);
    assert!(t.has_label("writing"));
    assert_eq!(t.priority().value(), 2);
}

#[test]
fn edits_keep_the_id() {
    let t = task("write", 1);
    let edited = t
        .with_priority(Priority::new(4).unwrap())
        .with_due_date(due_in_days(3))
        .with_status(Status::Overdue)
        .with_name("rewrite")
        .unwrap();

    assert_eq!(edited.id(), t.id());
    assert_eq!(edited.name(), "rewrite");
    assert_eq!(t.name(), "write");
    assert!(t.with_name("").is_err());
}

#[test]
fn value_equality_ignores_id_and_dependencies() {
    let a = task("write", 1);
    let twin = task("write", 1);
    let dep = task("research", 0);

    assert_ne!(a.id(), twin.id());
    assert_eq!(a, twin);
    assert_eq!(a, a.with_dependency_added(dep.id()));
    assert_ne!(a, a.with_status(Status::Completed));
}

#[test]
fn same_task_needs_name_and_one_more_field() {
    let a = task("write", 1);

    // Same name, same priority, different date.
    assert!(a.is_same_task(&task("write", 5)));

    // Same name, different date and priority.
    let other = Task::builder("write")
        .due_date(due_in_days(5))
        .priority(Priority::new(3).unwrap())
        .build()
        .unwrap();
    assert!(!a.is_same_task(&other));

    assert!(!a.is_same_task(&task("read", 1)));
}

#[test]
fn dependency_edits_are_values() {
    let a = task("a", 1);
    let b = task("b", 2);

    let linked = b.with_dependency_added(a.id());
    assert!(linked.is_dependent_on(a.id()));
    assert!(!b.is_dependent_on(a.id()));
    assert!(!linked.with_dependency_removed(a.id()).is_dependent_on(a.id()));
}
