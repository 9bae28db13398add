use std::path::PathBuf;

use chrono::FixedOffset;

use crate::error::{CadenceError, Result};
use crate::srs::IntervalTable;

const DEFAULT_DB_NAME: &str = "cadence.db";
const DEFAULT_OWNER: &str = "local";
// Due-state rolls over at IST midnight unless overridden.
const DEFAULT_ZONE: &str = "+05:30";

/// Runtime configuration, resolved once at startup from the environment with
/// fixed defaults. Interval tables live here so the schedule ladders are
/// tunable without touching call sites.
#[derive(Debug, Clone)]
pub struct Config {
    pub db_path: PathBuf,
    pub owner_id: String,
    pub zone: FixedOffset,
    pub problem_intervals: IntervalTable,
    pub topic_intervals: IntervalTable,
    pub api_key: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let db_path = match std::env::var("CADENCE_DB") {
            Ok(path) => PathBuf::from(path),
            Err(_) => default_db_path(),
        };

        let owner_id = std::env::var("CADENCE_OWNER").unwrap_or_else(|_| DEFAULT_OWNER.to_string());

        let zone = match std::env::var("CADENCE_TZ") {
            Ok(s) => parse_offset(&s)?,
            Err(_) => parse_offset(DEFAULT_ZONE)?,
        };

        let problem_intervals = match std::env::var("CADENCE_PROBLEM_INTERVALS") {
            Ok(s) => IntervalTable::parse(&s)?,
            Err(_) => IntervalTable::PROBLEMS,
        };
        let topic_intervals = match std::env::var("CADENCE_TOPIC_INTERVALS") {
            Ok(s) => IntervalTable::parse(&s)?,
            Err(_) => IntervalTable::TOPICS,
        };

        let api_key = std::env::var("GEMINI_API_KEY").ok().filter(|k| !k.is_empty());

        Ok(Config {
            db_path,
            owner_id,
            zone,
            problem_intervals,
            topic_intervals,
            api_key,
        })
    }
}

fn default_db_path() -> PathBuf {
    let config_dir = dirs::config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("cadence");

    std::fs::create_dir_all(&config_dir).ok();
    config_dir.join(DEFAULT_DB_NAME)
}

/// Parses a UTC offset like `+05:30`, `-08:00`, or `+0530`.
pub fn parse_offset(s: &str) -> Result<FixedOffset> {
    let s = s.trim();
    let bad = || CadenceError::Config(format!("'{}' is not a UTC offset like +05:30", s));

    let (sign, rest) = match s.as_bytes().first() {
        Some(b'+') => (1, &s[1..]),
        Some(b'-') => (-1, &s[1..]),
        _ => return Err(bad()),
    };

    let digits: String = rest.chars().filter(|c| *c != ':').collect();
    if digits.len() != 4 || !digits.chars().all(|c| c.is_ascii_digit()) {
        return Err(bad());
    }
    let hours: i32 = digits[..2].parse().map_err(|_| bad())?;
    let minutes: i32 = digits[2..].parse().map_err(|_| bad())?;
    if hours > 23 || minutes > 59 {
        return Err(bad());
    }

    FixedOffset::east_opt(sign * (hours * 3600 + minutes * 60)).ok_or_else(bad)
}
