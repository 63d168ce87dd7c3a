use std::path::PathBuf;

use serde::Deserialize;

use crate::schedule::Schedule;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

pub struct AppState {
    /// Active scheduling configuration. Starts as the built-in schedule;
    /// `catalog.load` swaps in a validated replacement wholesale.
    pub schedule: Schedule,
    /// Path of the loaded override file, if any.
    pub catalog_path: Option<PathBuf>,
}
