
use serde_json::json;
use test_support::{request_err, request_ok, spawn_sidecar};

fn resolve_topic_id(
    stdin: &mut std::process::ChildStdin,
    reader: &mut std::io::BufReader<std::process::ChildStdout>,
    id: &str,
    date: &str,
    level: &str,
) -> Option<String> {
    let result = request_ok(
        stdin,
        reader,
        id,
        "schedule.resolve",
        json!({ "date": date, "level": level }),
    );
    result
        .get("topic")
        .filter(|t| !t.is_null())
        .and_then(|t| t.get("id"))
        .and_then(|v| v.as_str())
        .map(|s| s.to_string())
}

#[test]
fn starter_holds_each_topic_for_three_teaching_days() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let day1 = resolve_topic_id(&mut stdin, &mut reader, "1", "2025-09-01", "starter");
    let day2 = resolve_topic_id(&mut stdin, &mut reader, "2", "2025-09-02", "starter");
    let day3 = resolve_topic_id(&mut stdin, &mut reader, "3", "2025-09-03", "starter");
    let day4 = resolve_topic_id(&mut stdin, &mut reader, "4", "2025-09-04", "starter");

    assert_eq!(day1.as_deref(), Some("starter-things-to-do"));
    assert_eq!(day2, day1);
    assert_eq!(day3, day1);
    assert_eq!(day4.as_deref(), Some("starter-going-places"));
}

#[test]
fn survivor_holds_each_topic_for_two_teaching_days() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let day1 = resolve_topic_id(&mut stdin, &mut reader, "1", "2025-09-01", "survivor");
    let day2 = resolve_topic_id(&mut stdin, &mut reader, "2", "2025-09-02", "survivor");
    let day3 = resolve_topic_id(&mut stdin, &mut reader, "3", "2025-09-03", "survivor");

    assert_eq!(day1.as_deref(), Some("survivor-pharmacy"));
    assert_eq!(day2, day1);
    assert_eq!(day3.as_deref(), Some("survivor-doctor"));
}

#[test]
fn sundays_report_no_lesson_for_every_level() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    for (i, level) in ["starter", "survivor", "explorer", "expert"]
        .iter()
        .enumerate()
    {
        let topic = resolve_topic_id(
            &mut stdin,
            &mut reader,
            &format!("{}", i + 1),
            "2025-09-07",
            level,
        );
        assert_eq!(topic, None, "level {}", level);
    }
}

#[test]
fn dates_before_the_anchor_report_no_lesson() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let topic = resolve_topic_id(&mut stdin, &mut reader, "1", "2024-01-01", "starter");
    assert_eq!(topic, None);
    // The day right before the anchor is a Sunday; the Saturday before that
    // is a plain teaching day and still pre-anchor.
    let topic = resolve_topic_id(&mut stdin, &mut reader, "2", "2025-08-30", "expert");
    assert_eq!(topic, None);
}

#[test]
fn repeated_calls_resolve_identically() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let first = resolve_topic_id(&mut stdin, &mut reader, "1", "2025-10-15", "explorer");
    let second = resolve_topic_id(&mut stdin, &mut reader, "2", "2025-10-15", "explorer");
    assert!(first.is_some());
    assert_eq!(first, second);
}

#[test]
fn resolve_rejects_bad_params() {
    let (_child, mut stdin, mut reader) = spawn_sidecar();

    let code = request_err(
        &mut stdin,
        &mut reader,
        "1",
        "schedule.resolve",
        json!({ "level": "starter" }),
    );
    assert_eq!(code, "bad_params");

    let code = request_err(
        &mut stdin,
        &mut reader,
        "2",
        "schedule.resolve",
        json!({ "date": "2025-09-01", "level": "beginner" }),
    );
    assert_eq!(code, "bad_params");

    let code = request_err(
        &mut stdin,
        &mut reader,
        "3",
        "schedule.resolve",
        json!({ "date": "09/01/2025", "level": "starter" }),
    );
    assert_eq!(code, "bad_params");
}
