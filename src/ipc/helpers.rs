use chrono::NaiveDate;

use crate::ipc::error::err;
use crate::ipc::types::Request;
use crate::schedule::Level;

pub fn required_level(req: &Request) -> Result<Level, serde_json::Value> {
    req.params
        .get("level")
        .and_then(|v| v.as_str())
        .and_then(Level::parse)
        .ok_or_else(|| {
            err(
                &req.id,
                "bad_params",
                "missing or unknown params.level (starter|survivor|explorer|expert)",
                None,
            )
        })
}

pub fn required_date(req: &Request, key: &str) -> Result<NaiveDate, serde_json::Value> {
    let Some(raw) = req.params.get(key).and_then(|v| v.as_str()) else {
        return Err(err(&req.id, "bad_params", format!("missing {}", key), None));
    };
    parse_iso_date(req, key, raw)
}

pub fn optional_date(req: &Request, key: &str) -> Result<Option<NaiveDate>, serde_json::Value> {
    match req.params.get(key) {
        None => Ok(None),
        Some(v) if v.is_null() => Ok(None),
        Some(v) => {
            let Some(raw) = v.as_str() else {
                return Err(err(
                    &req.id,
                    "bad_params",
                    format!("{} must be a YYYY-MM-DD string", key),
                    None,
                ));
            };
            parse_iso_date(req, key, raw).map(Some)
        }
    }
}

fn parse_iso_date(req: &Request, key: &str, raw: &str) -> Result<NaiveDate, serde_json::Value> {
    NaiveDate::parse_from_str(raw.trim(), "%Y-%m-%d").map_err(|_| {
        err(
            &req.id,
            "bad_params",
            format!("{} must be a YYYY-MM-DD date", key),
            None,
        )
    })
}
