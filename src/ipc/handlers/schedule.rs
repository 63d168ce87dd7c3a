use chrono::{Duration as ChronoDuration, Local, NaiveDate};
use serde_json::json;

use crate::ipc::error::{err, ok};
use crate::ipc::helpers::{optional_date, required_date, required_level};
use crate::ipc::types::{AppState, Request};
use crate::schedule::Topic;

const DEFAULT_HORIZON_DAYS: u32 = 7;
const MAX_HORIZON_DAYS: u32 = 366;

fn topic_json(topic: &Topic) -> serde_json::Value {
    serde_json::to_value(topic).unwrap_or(serde_json::Value::Null)
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

fn iso(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

fn handle_resolve(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_level(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let date = match required_date(req, "date") {
        Ok(v) => v,
        Err(resp) => return resp,
    };

    // None is a normal outcome (Sunday or pre-anchor date), not an error.
    let topic = state.schedule.resolve(date, level);
    ok(
        &req.id,
        json!({
            "date": iso(date),
            "level": level.as_str(),
            "topic": topic.map(topic_json),
        }),
    )
}

fn handle_upcoming(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_level(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let from = match optional_date(req, "from") {
        Ok(v) => v.unwrap_or_else(today),
        Err(resp) => return resp,
    };
    let horizon = match req.params.get("horizonDays") {
        None => DEFAULT_HORIZON_DAYS,
        Some(v) if v.is_null() => DEFAULT_HORIZON_DAYS,
        Some(v) => match v
            .as_u64()
            .filter(|n| *n >= 1 && *n <= MAX_HORIZON_DAYS as u64)
        {
            Some(n) => n as u32,
            None => {
                return err(
                    &req.id,
                    "bad_params",
                    format!("horizonDays must be an integer in 1..={}", MAX_HORIZON_DAYS),
                    None,
                )
            }
        },
    };

    let topics: Vec<serde_json::Value> = state
        .schedule
        .upcoming(level, from, horizon)
        .map(topic_json)
        .collect();
    ok(
        &req.id,
        json!({
            "level": level.as_str(),
            "from": iso(from),
            "horizonDays": horizon,
            "topics": topics,
        }),
    )
}

fn handle_week(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_level(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let from = match optional_date(req, "from") {
        Ok(v) => v.unwrap_or_else(today),
        Err(resp) => return resp,
    };

    let mut days = Vec::with_capacity(7);
    for offset in 0..7 {
        let date = from + ChronoDuration::days(offset);
        let topic = state.schedule.resolve(date, level);
        days.push(json!({
            "date": iso(date),
            "dayOfWeek": date.format("%A").to_string().to_ascii_lowercase(),
            "topicId": topic.map(|t| t.id.clone()),
            "topicName": topic.map(|t| t.name.clone()),
        }));
    }
    ok(
        &req.id,
        json!({ "level": level.as_str(), "from": iso(from), "days": days }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "schedule.resolve" => Some(handle_resolve(state, req)),
        "schedule.upcoming" => Some(handle_upcoming(state, req)),
        "schedule.week" => Some(handle_week(state, req)),
        _ => None,
    }
}
