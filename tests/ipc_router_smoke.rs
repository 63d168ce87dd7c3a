
use serde_json::json;
use test_support::{request, request_ok, spawn_sidecar};

#[test]
fn router_dispatch_smoke_covers_handler_families() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let health = request_ok(&mut stdin, &mut reader, "1", "health", json!({}));
    assert_eq!(
        health.get("anchor").and_then(|v| v.as_str()),
        Some("2025-09-01")
    );
    assert!(health.get("catalogPath").map(|v| v.is_null()).unwrap_or(false));

    let levels = request_ok(&mut stdin, &mut reader, "2", "catalog.levels", json!({}));
    let levels = levels.get("levels").and_then(|v| v.as_array()).expect("levels");
    assert_eq!(levels.len(), 4);
    assert_eq!(
        levels[0].get("cycleLength").and_then(|v| v.as_i64()),
        Some(3),
        "starter cycles every three teaching days"
    );
    assert!(levels
        .iter()
        .skip(1)
        .all(|l| l.get("cycleLength").and_then(|v| v.as_i64()) == Some(2)));

    let listed = request_ok(
        &mut stdin,
        &mut reader,
        "3",
        "catalog.list",
        json!({ "level": "starter" }),
    );
    let topics = listed.get("topics").and_then(|v| v.as_array()).expect("topics");
    assert!(!topics.is_empty());
    assert_eq!(
        topics[0].get("name").and_then(|v| v.as_str()),
        Some("Travel: Things to Do")
    );

    let resolved = request_ok(
        &mut stdin,
        &mut reader,
        "4",
        "schedule.resolve",
        json!({ "date": "2025-09-01", "level": "starter" }),
    );
    assert_eq!(
        resolved
            .get("topic")
            .and_then(|t| t.get("id"))
            .and_then(|v| v.as_str()),
        Some("starter-things-to-do")
    );

    let upcoming = request_ok(
        &mut stdin,
        &mut reader,
        "5",
        "schedule.upcoming",
        json!({ "level": "explorer", "from": "2025-09-01" }),
    );
    assert_eq!(
        upcoming.get("horizonDays").and_then(|v| v.as_u64()),
        Some(7)
    );
    assert!(upcoming
        .get("topics")
        .and_then(|v| v.as_array())
        .map(|a| !a.is_empty())
        .unwrap_or(false));

    let week = request_ok(
        &mut stdin,
        &mut reader,
        "6",
        "schedule.week",
        json!({ "level": "starter", "from": "2025-09-01" }),
    );
    let days = week.get("days").and_then(|v| v.as_array()).expect("days");
    assert_eq!(days.len(), 7);
    assert_eq!(
        days[0].get("topicId").and_then(|v| v.as_str()),
        Some("starter-things-to-do")
    );
    assert_eq!(
        days[6].get("dayOfWeek").and_then(|v| v.as_str()),
        Some("sunday")
    );
    assert!(days[6].get("topicId").map(|v| v.is_null()).unwrap_or(false));

    let unknown = request(&mut stdin, &mut reader, "7", "grades.compute", json!({}));
    assert_eq!(unknown.get("ok").and_then(|v| v.as_bool()), Some(false));
    assert_eq!(
        unknown
            .get("error")
            .and_then(|e| e.get("code"))
            .and_then(|v| v.as_str()),
        Some("not_implemented")
    );
}
