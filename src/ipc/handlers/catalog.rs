use std::path::PathBuf;

use serde_json::json;

use crate::catalog;
use crate::ipc::error::{err, ok};
use crate::ipc::helpers::required_level;
use crate::ipc::types::{AppState, Request};
use crate::schedule::Level;

fn handle_load(state: &mut AppState, req: &Request) -> serde_json::Value {
    let path = req
        .params
        .get("path")
        .and_then(|v| v.as_str())
        .map(PathBuf::from);
    let Some(path) = path else {
        return err(&req.id, "bad_params", "missing params.path", None);
    };

    match catalog::load_catalog_file(&path) {
        Ok(schedule) => {
            state.schedule = schedule;
            state.catalog_path = Some(path.clone());
            ok(
                &req.id,
                json!({
                    "catalogPath": path.to_string_lossy(),
                    "anchor": state.schedule.anchor().format("%Y-%m-%d").to_string(),
                }),
            )
        }
        // The schedule that was active before the load stays in force.
        Err(e) => err(&req.id, "catalog_load_failed", format!("{e:#}"), None),
    }
}

fn handle_levels(state: &mut AppState, req: &Request) -> serde_json::Value {
    let levels: Vec<serde_json::Value> = Level::ALL
        .into_iter()
        .map(|level| {
            json!({
                "level": level.as_str(),
                "courseType": serde_json::to_value(level.course_type())
                    .unwrap_or(serde_json::Value::Null),
                "cycleLength": level.cycle_length(),
                "topicCount": state.schedule.catalog(level).len(),
            })
        })
        .collect();
    ok(&req.id, json!({ "levels": levels }))
}

fn handle_list(state: &mut AppState, req: &Request) -> serde_json::Value {
    let level = match required_level(req) {
        Ok(v) => v,
        Err(resp) => return resp,
    };
    let topics =
        serde_json::to_value(state.schedule.catalog(level)).unwrap_or_else(|_| json!([]));
    ok(
        &req.id,
        json!({ "level": level.as_str(), "topics": topics }),
    )
}

pub fn try_handle(state: &mut AppState, req: &Request) -> Option<serde_json::Value> {
    match req.method.as_str() {
        "catalog.load" => Some(handle_load(state, req)),
        "catalog.levels" => Some(handle_levels(state, req)),
        "catalog.list" => Some(handle_list(state, req)),
        _ => None,
    }
}
