use serde_json::json;

use taskboard::model::{Priority, Task, TaskPayload, TaskStatus};
use taskboard::store::decode_list_body;

#[test]
fn paginated_shape_yields_tasks_and_total_pages() {
    let body = json!({
        "results": [
            { "id": 1, "title": "t1", "status": "todo", "priority": "low" },
            { "id": 2, "title": "t2", "status": "done", "priority": "high" },
        ],
        "count": 5,
    });

    let result = decode_list_body(body);
    assert_eq!(result.tasks.len(), 2);
    assert_eq!(result.tasks[0].id, 1);
    // page size 3, count 5 -> 2 pages
    assert_eq!(result.total_pages, Some(2));
}

#[test]
fn paginated_shape_with_zero_count_is_one_empty_page() {
    let body = json!({ "results": [], "count": 0 });
    let result = decode_list_body(body);
    assert!(result.tasks.is_empty());
    assert_eq!(result.total_pages, Some(1));
}

#[test]
fn paginated_shape_ignores_extra_fields() {
    let body = json!({
        "results": [{ "id": 1, "title": "t1", "status": "todo", "priority": "low" }],
        "count": 7,
        "next": "http://example/api/tasks/?page=2",
        "previous": null,
    });
    let result = decode_list_body(body);
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.total_pages, Some(3));
}

#[test]
fn bare_array_shape_is_unpaginated() {
    let body = json!([
        { "id": 1, "title": "t1", "status": "todo", "priority": "low" },
    ]);
    let result = decode_list_body(body);
    assert_eq!(result.tasks.len(), 1);
    assert_eq!(result.total_pages, None);
}

#[test]
fn unknown_shape_degrades_to_empty() {
    let result = decode_list_body(json!({ "detail": "throttled" }));
    assert!(result.tasks.is_empty());
    assert_eq!(result.total_pages, None);

    let result = decode_list_body(json!("not a listing"));
    assert!(result.tasks.is_empty());
}

#[test]
fn task_decodes_wire_fields() {
    let task: Task = serde_json::from_value(json!({
        "id": 9,
        "title": "write report",
        "description": "quarterly numbers",
        "status": "in-progress",
        "priority": "medium",
        "due_date": "2024-05-01",
        "category": 3,
        "category_details": { "id": 3, "name": "Work" },
        "created_at": "2024-04-20T10:00:00Z",
    }))
    .unwrap();

    assert_eq!(task.status, TaskStatus::InProgress);
    assert_eq!(task.category, Some(3));
    assert_eq!(task.category_details.as_ref().unwrap().name, "Work");
    assert_eq!(task.due_date.as_deref(), Some("2024-05-01"));
}

#[test]
fn task_tolerates_missing_optional_fields() {
    let task: Task = serde_json::from_value(json!({
        "id": 9,
        "title": "bare",
        "status": "todo",
        "priority": "low",
    }))
    .unwrap();

    assert_eq!(task.description, "");
    assert_eq!(task.due_date, None);
    assert_eq!(task.category, None);
    assert_eq!(task.category_details, None);
}

#[test]
fn payload_serializes_unset_fields_as_null() {
    let payload = TaskPayload {
        title: "t".to_string(),
        description: String::new(),
        status: TaskStatus::Todo,
        priority: Priority::Medium,
        due_date: None,
        category: None,
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert!(value["due_date"].is_null());
    assert!(value["category"].is_null());
}

#[test]
fn payload_passes_set_fields_through() {
    let payload = TaskPayload {
        title: "t".to_string(),
        description: String::new(),
        status: TaskStatus::Done,
        priority: Priority::High,
        due_date: Some(chrono::NaiveDate::from_ymd_opt(2024, 5, 1).unwrap()),
        category: Some(3),
    };
    let value = serde_json::to_value(&payload).unwrap();
    assert_eq!(value["due_date"], "2024-05-01");
    assert_eq!(value["category"], 3);
    assert_eq!(value["status"], "done");
    assert_eq!(value["priority"], "high");
}
