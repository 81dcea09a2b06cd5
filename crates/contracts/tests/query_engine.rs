use chrono::NaiveDate;
use contracts::domain::a001_task::{default_tasks, Task};
use contracts::enums::{Priority, TaskStatus, TaskType};
use contracts::shared::query::{
    apply_filter, apply_sort, compute, ColumnId, FilterDirective, FilterDrafts, FilterValue,
    QueryPhase, SortDirection, SortDirective, SortSelection, TableQueryState,
};

fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

fn names(rows: &[Task]) -> Vec<&str> {
    rows.iter().map(|t| t.task_name.as_str()).collect()
}

#[test]
fn idle_view_equals_dataset() {
    let data = default_tasks();
    assert_eq!(compute(data, None, None), data.to_vec());
    assert_eq!(TableQueryState::new().view(data), data.to_vec());
}

#[test]
fn priority_ascending_orders_by_rank() {
    let rows = vec![
        Task::new("h", "01/08/2024", Priority::High, TaskStatus::Done, TaskType::Bug),
        Task::new("l", "01/08/2024", Priority::Low, TaskStatus::Done, TaskType::Bug),
        Task::new("m", "01/08/2024", Priority::Medium, TaskStatus::Done, TaskType::Bug),
    ];
    let sorted = apply_sort(&rows, ColumnId::Priority, SortDirection::Asc);
    let classes: Vec<Priority> = sorted.iter().map(|t| t.priority).collect();
    assert_eq!(classes, vec![Priority::Low, Priority::Medium, Priority::High]);
}

#[test]
fn equal_keys_keep_dataset_order() {
    let sorted = apply_sort(default_tasks(), ColumnId::Priority, SortDirection::Desc);
    assert_eq!(
        names(&sorted),
        vec![
            "Montoya Custom Cursor",
            "Montoya Navigation Menu",
            "Montoya Header",
            "Montoya Delayed Scroll",
            "Filtering and Sorting on Users Dashboard",
        ]
    );
}

#[test]
fn empty_status_set_differs_from_no_filter() {
    let data = default_tasks();
    let empty = FilterDirective::new(ColumnId::Status, FilterValue::Set(Vec::new()));
    assert!(compute(data, None, Some(&empty)).is_empty());
    assert_eq!(compute(data, None, None).len(), data.len());
}

#[test]
fn single_day_range_includes_that_day() {
    let value = FilterValue::range(date(2024, 8, 15), date(2024, 8, 15));
    let out = apply_filter(default_tasks(), ColumnId::DueDate, &value);
    assert_eq!(names(&out), vec!["Montoya Custom Cursor"]);
}

#[test]
fn sort_happens_before_range_filter() {
    let data = vec![
        Task::new("B", "20/08/2024", Priority::Low, TaskStatus::Done, TaskType::Bug),
        Task::new("A", "10/08/2024", Priority::Low, TaskStatus::Done, TaskType::Bug),
    ];
    let sort = SortDirective::asc(ColumnId::DueDate);
    assert_eq!(names(&compute(&data, Some(&sort), None)), vec!["A", "B"]);

    let filter = FilterDirective::new(
        ColumnId::DueDate,
        FilterValue::range(date(2024, 8, 15), date(2024, 8, 25)),
    );
    assert_eq!(names(&compute(&data, Some(&sort), Some(&filter))), vec!["B"]);
}

#[test]
fn name_filter_is_case_insensitive() {
    let filter = FilterDirective::new(ColumnId::TaskName, FilterValue::text("montoya"));
    let out = compute(default_tasks(), None, Some(&filter));
    assert!(names(&out).contains(&"Montoya Header"));
    assert_eq!(out.len(), 4);
}

#[test]
fn unrecognized_json_shape_fails_open() {
    let value = FilterValue::from_json(&serde_json::json!({ "min": 1 }));
    let filter = FilterDirective::new(ColumnId::Priority, value);
    assert_eq!(compute(default_tasks(), None, Some(&filter)).len(), 5);
}

#[test]
fn selector_session_drives_state() {
    let data = default_tasks();
    let mut state = TableQueryState::new();
    let mut sort = SortSelection::default();
    let mut drafts = FilterDrafts::default();

    state.set_sort(sort.select_direction(SortDirection::Desc));
    state.set_sort(sort.select_column(ColumnId::DueDate));
    assert_eq!(state.phase(), QueryPhase::Sorted);

    if let Some(directive) = drafts.select_column(Some(ColumnId::Status)) {
        state.set_filter(directive);
    }
    if let Some(directive) = drafts.toggle(ColumnId::Status, "In progress", true) {
        state.set_filter(directive);
    }
    assert_eq!(state.phase(), QueryPhase::SortedAndFiltered);
    assert_eq!(
        names(&state.view(data)),
        vec!["Montoya Delayed Scroll", "Montoya Navigation Menu"]
    );
    assert_eq!(
        state.filter.as_ref().map(|f| f.to_string()),
        Some("Filter: status (In progress)".to_string())
    );

    state.reset();
    assert_eq!(state.phase(), QueryPhase::Idle);
    assert_eq!(state.view(data), data.to_vec());
}

#[test]
fn array_of_non_labels_matches_no_rows() {
    let value = FilterValue::from_json(&serde_json::json!([1, 2]));
    let filter = FilterDirective::new(ColumnId::Priority, value);
    assert!(compute(default_tasks(), None, Some(&filter)).is_empty());
}

#[test]
fn half_picked_range_matches_no_rows() {
    let value = FilterValue::from_json(&serde_json::json!({
        "startDate": "2024-08-15",
        "endDate": null
    }));
    let filter = FilterDirective::new(ColumnId::DueDate, value);
    assert!(compute(default_tasks(), None, Some(&filter)).is_empty());

    let mut drafts = FilterDrafts::default();
    drafts.select_column(Some(ColumnId::DueDate));
    let picked = drafts
        .set_range(Some(date(2024, 8, 15)), None)
        .expect("due date column is selected");
    assert!(compute(default_tasks(), None, Some(&picked)).is_empty());
}
