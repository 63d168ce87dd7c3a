use crate::schedule::{Level, Schedule, Topic};
use anyhow::{anyhow, Context};
use chrono::NaiveDate;
use serde::Deserialize;
use std::path::Path;

/// Epoch for all cycle computation. Every catalog counts teaching days from
/// this one Monday; moving it retroactively shifts every level's assignment.
pub const BUILTIN_ANCHOR: (i32, u32, u32) = (2025, 9, 1);

fn topic(level: Level, id: &str, name: &str, day_index: i64) -> Topic {
    Topic {
        id: id.to_string(),
        name: name.to_string(),
        level,
        course_type: level.course_type(),
        day_index,
        description: None,
        objectives: Vec::new(),
        materials: None,
    }
}

// Note on dayIndex: the values below are authored bookkeeping carried over
// from the curriculum sheets and are not evenly spaced by the level's cycle
// length (starter jumps by 3 or 4). The scheduler follows array order and
// never reads them; they are kept as-is rather than silently renumbered.
fn starter_catalog() -> Vec<Topic> {
    let l = Level::Starter;
    vec![
        Topic {
            description: Some(
                "First survival vocabulary: activities you can do on a trip.".to_string(),
            ),
            objectives: vec![
                "Name five common holiday activities".to_string(),
                "Use 'I want to ...' with activity verbs".to_string(),
            ],
            ..topic(l, "starter-things-to-do", "Travel: Things to Do", 1)
        },
        topic(l, "starter-going-places", "Travel: Going Places", 4),
        topic(l, "starter-getting-around", "Travel: Getting Around", 7),
        Topic {
            materials: Some("menu handout, role-play cards".to_string()),
            ..topic(l, "starter-restaurant", "Food: Ordering at a Restaurant", 10)
        },
        topic(l, "starter-market", "Food: At the Market", 14),
        topic(l, "starter-my-routine", "Daily Life: My Routine", 17),
        topic(l, "starter-around-the-house", "Daily Life: Around the House", 20),
        topic(l, "starter-clothes-colors", "Shopping: Clothes and Colors", 23),
        topic(l, "starter-money-prices", "Shopping: Money and Prices", 27),
        topic(l, "starter-family-friends", "People: Family and Friends", 30),
        topic(l, "starter-describing-someone", "People: Describing Someone", 33),
        topic(l, "starter-jobs", "Work: Jobs and Workplaces", 36),
    ]
}

fn survivor_catalog() -> Vec<Topic> {
    let l = Level::Survivor;
    vec![
        topic(l, "survivor-pharmacy", "Health: At the Pharmacy", 1),
        topic(l, "survivor-doctor", "Health: Seeing a Doctor", 3),
        topic(l, "survivor-asking-the-way", "Directions: Asking the Way", 5),
        topic(l, "survivor-public-transport", "Directions: Public Transport", 7),
        topic(l, "survivor-renting", "Housing: Renting a Room", 9),
        Topic {
            objectives: vec![
                "Report a fault to a landlord politely".to_string(),
                "Understand a repair appointment by phone".to_string(),
            ],
            ..topic(l, "survivor-repairs", "Housing: Problems and Repairs", 12)
        },
        topic(l, "survivor-bank", "Services: At the Bank", 14),
        topic(l, "survivor-post", "Services: Post and Parcels", 16),
        topic(l, "survivor-weather", "Weather and Seasons", 18),
        topic(l, "survivor-appointments", "Plans: Making Appointments", 20),
        topic(l, "survivor-invitations", "Plans: Invitations", 22),
        topic(l, "survivor-emergencies", "Emergencies: Getting Help", 24),
    ]
}

fn explorer_catalog() -> Vec<Topic> {
    let l = Level::Explorer;
    vec![
        topic(l, "explorer-culture-shock", "Culture Shock", 1),
        topic(l, "explorer-social-media", "Social Media and Friendship", 3),
        topic(l, "explorer-city-country", "City Life versus Country Life", 5),
        topic(l, "explorer-food-cultures", "Food Cultures Around the World", 7),
        Topic {
            description: Some(
                "Meta-discussion: what has and has not worked for the class so far.".to_string(),
            ),
            ..topic(l, "explorer-learning-language", "Learning a Language", 9)
        },
        topic(l, "explorer-travel-stories", "Travel Stories", 11),
        topic(l, "explorer-work-life", "Work-Life Balance", 13),
        topic(l, "explorer-festivals", "Festivals and Traditions", 15),
        topic(l, "explorer-sports", "Sports and Competition", 17),
        topic(l, "explorer-music-memory", "Music and Memory", 19),
    ]
}

fn expert_catalog() -> Vec<Topic> {
    let l = Level::Expert;
    vec![
        topic(l, "expert-ai-work", "Artificial Intelligence and Work", 1),
        topic(l, "expert-climate-choices", "Climate and Consumer Choices", 3),
        topic(l, "expert-advertising", "The Ethics of Advertising", 5),
        topic(l, "expert-globalization", "Globalization and Identity", 7),
        topic(l, "expert-future-cities", "The Future of Cities", 9),
        topic(l, "expert-privacy", "Privacy in a Connected World", 11),
        topic(l, "expert-education-systems", "Education Systems Compared", 13),
        Topic {
            materials: Some("two short reviews of the same exhibition".to_string()),
            ..topic(l, "expert-art-criticism", "Art, Taste, and Criticism", 15)
        },
        topic(l, "expert-migration", "Migration and Belonging", 17),
        topic(l, "expert-science-news", "Science in the News", 19),
    ]
}

/// The schedule the daemon starts with. The authored catalogs above satisfy
/// every `Schedule::new` invariant, which `builtin_catalogs_validate` locks
/// down; a failure here means the static data itself was edited badly.
pub fn builtin() -> Schedule {
    let (y, m, d) = BUILTIN_ANCHOR;
    let anchor = NaiveDate::from_ymd_opt(y, m, d).expect("built-in anchor is a valid date");
    Schedule::new(
        anchor,
        starter_catalog(),
        survivor_catalog(),
        explorer_catalog(),
        expert_catalog(),
    )
    .expect("built-in catalogs are valid")
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
struct CatalogFile {
    anchor: String,
    catalogs: CatalogSet,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogSet {
    starter: Vec<Topic>,
    survivor: Vec<Topic>,
    explorer: Vec<Topic>,
    expert: Vec<Topic>,
}

/// Load a catalog override file. The file carries the whole configuration
/// surface (anchor plus all four catalogs) so a load replaces the schedule
/// atomically or not at all.
pub fn load_catalog_file(path: &Path) -> anyhow::Result<Schedule> {
    let raw = std::fs::read_to_string(path)
        .with_context(|| format!("read catalog file {}", path.display()))?;
    let file: CatalogFile = serde_json::from_str(&raw)
        .with_context(|| format!("parse catalog file {}", path.display()))?;
    let anchor = NaiveDate::parse_from_str(file.anchor.trim(), "%Y-%m-%d")
        .context("anchor must be an ISO date (YYYY-MM-DD)")?;
    Schedule::new(
        anchor,
        file.catalogs.starter,
        file.catalogs.survivor,
        file.catalogs.explorer,
        file.catalogs.expert,
    )
    .map_err(|e| anyhow!("invalid catalog: {}", e))
}
