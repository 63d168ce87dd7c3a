use chrono::{Datelike, Duration as ChronoDuration, NaiveDate, Weekday};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

/// Proficiency tiers, ordered by learner progression. The tier decides which
/// catalog and cycle length apply; there is no runtime "unknown level".
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Level {
    Starter,
    Survivor,
    Explorer,
    Expert,
}

impl Level {
    pub const ALL: [Level; 4] = [
        Level::Starter,
        Level::Survivor,
        Level::Explorer,
        Level::Expert,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Level::Starter => "starter",
            Level::Survivor => "survivor",
            Level::Explorer => "explorer",
            Level::Expert => "expert",
        }
    }

    pub fn parse(raw: &str) -> Option<Level> {
        let t = raw.trim();
        Level::ALL
            .into_iter()
            .find(|l| l.as_str().eq_ignore_ascii_case(t))
    }

    /// Consecutive teaching days a topic stays current before the catalog
    /// advances. Starter moves slower than the other tiers.
    pub fn cycle_length(self) -> i64 {
        match self {
            Level::Starter => 3,
            _ => 2,
        }
    }

    pub fn course_type(self) -> CourseType {
        match self {
            Level::Starter | Level::Survivor => CourseType::SmartLearning,
            Level::Explorer | Level::Expert => CourseType::SmartConversation,
        }
    }
}

/// Teaching track. Starter/Survivor follow the structured track,
/// Explorer/Expert the discussion track.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum CourseType {
    SmartLearning,
    SmartConversation,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Topic {
    pub id: String,
    pub name: String,
    pub level: Level,
    pub course_type: CourseType,
    /// Authoring bookkeeping only. Scheduling follows catalog array order;
    /// this field is never read when resolving a date.
    pub day_index: i64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub objectives: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub materials: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScheduleError {
    pub code: String,
    pub message: String,
}

impl ScheduleError {
    pub fn new(code: &str, message: impl Into<String>) -> Self {
        Self {
            code: code.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ScheduleError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.code, self.message)
    }
}

impl std::error::Error for ScheduleError {}

/// The full scheduling configuration: one anchor date plus the four ordered
/// per-level catalogs. Immutable once constructed; `resolve` is a pure
/// function of `(date, level)` and this data.
#[derive(Debug, Clone)]
pub struct Schedule {
    anchor: NaiveDate,
    catalogs: [Vec<Topic>; 4],
}

fn catalog_slot(level: Level) -> usize {
    match level {
        Level::Starter => 0,
        Level::Survivor => 1,
        Level::Explorer => 2,
        Level::Expert => 3,
    }
}

/// Day-of-week under the Monday=1 .. Saturday=6, Sunday=0 convention the
/// cycle math uses. Sunday is the only non-teaching day.
fn day_of_week(date: NaiveDate) -> i64 {
    match date.weekday() {
        Weekday::Sun => 0,
        w => w.num_days_from_monday() as i64 + 1,
    }
}

impl Schedule {
    pub fn new(
        anchor: NaiveDate,
        starter: Vec<Topic>,
        survivor: Vec<Topic>,
        explorer: Vec<Topic>,
        expert: Vec<Topic>,
    ) -> Result<Schedule, ScheduleError> {
        let catalogs = [starter, survivor, explorer, expert];
        let mut seen_ids: HashSet<&str> = HashSet::new();
        for level in Level::ALL {
            let catalog = &catalogs[catalog_slot(level)];
            if catalog.is_empty() {
                return Err(ScheduleError::new(
                    "empty_catalog",
                    format!("{} catalog has no topics", level.as_str()),
                ));
            }
            for topic in catalog {
                if topic.level != level {
                    return Err(ScheduleError::new(
                        "level_mismatch",
                        format!(
                            "topic '{}' is tagged {} but sits in the {} catalog",
                            topic.id,
                            topic.level.as_str(),
                            level.as_str()
                        ),
                    ));
                }
                if !seen_ids.insert(topic.id.as_str()) {
                    return Err(ScheduleError::new(
                        "duplicate_topic_id",
                        format!("topic id '{}' appears more than once", topic.id),
                    ));
                }
            }
        }
        Ok(Schedule { anchor, catalogs })
    }

    pub fn anchor(&self) -> NaiveDate {
        self.anchor
    }

    pub fn catalog(&self, level: Level) -> &[Topic] {
        &self.catalogs[catalog_slot(level)]
    }

    /// Which topic is taught on `date` for `level`, or `None` when there is
    /// no lesson that day (Sunday, or a date before the anchor).
    ///
    /// Teaching days are counted cumulatively from the anchor, six per week;
    /// every `cycle_length` teaching days the catalog advances one entry and
    /// wraps around once exhausted. A cycle block can straddle a week
    /// boundary: Sunday is skipped but does not reset the block.
    pub fn resolve(&self, date: NaiveDate, level: Level) -> Option<&Topic> {
        let catalog = self.catalog(level);
        if catalog.is_empty() {
            return None;
        }
        let dow = day_of_week(date);
        if dow == 0 {
            return None;
        }
        let days_since_start = (date - self.anchor).num_days();
        if days_since_start < 0 {
            return None;
        }
        let week_number = days_since_start / 7;
        let teaching_days = week_number * 6 + (dow - 1);
        let topic_index = (teaching_days / level.cycle_length()) % catalog.len() as i64;
        catalog.get(topic_index as usize)
    }

    /// Distinct topics coming up for `level`, scanning `horizon_days`
    /// calendar days starting at `from` (inclusive). Lazy and restartable;
    /// cloning the iterator restarts the scan. Days that resolve to a topic
    /// already seen are dropped, so output order is chronological first
    /// occurrence, not catalog order.
    pub fn upcoming(&self, level: Level, from: NaiveDate, horizon_days: u32) -> Upcoming<'_> {
        Upcoming {
            schedule: self,
            level,
            next_date: from,
            remaining: horizon_days,
            seen: HashSet::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Upcoming<'a> {
    schedule: &'a Schedule,
    level: Level,
    next_date: NaiveDate,
    remaining: u32,
    seen: HashSet<&'a str>,
}

impl<'a> Iterator for Upcoming<'a> {
    type Item = &'a Topic;

    fn next(&mut self) -> Option<&'a Topic> {
        while self.remaining > 0 {
            let date = self.next_date;
            self.next_date = date + ChronoDuration::days(1);
            self.remaining -= 1;
            if let Some(topic) = self.schedule.resolve(date, self.level) {
                if self.seen.insert(topic.id.as_str()) {
                    return Some(topic);
                }
            }
        }
        None
    }
}
