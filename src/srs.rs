//! Spaced-repetition scheduling.
//!
//! Everything here is a pure computation over a [`ReviewCard`]: recording a
//! review outcome produces a new card, and due-state is derived from the
//! card and a clock. Callers own the collections; this module never mutates
//! shared state.

use chrono::{DateTime, Duration, FixedOffset, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use crate::error::{CadenceError, Result};

pub const MIN_STAGE: u8 = 1;
pub const MAX_STAGE: u8 = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewOutcome {
    Success,
    Failure,
}

impl ReviewOutcome {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewOutcome::Success => "success",
            ReviewOutcome::Failure => "failure",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "success" | "s" | "yes" | "y" | "reviewed" | "1" => Some(ReviewOutcome::Success),
            "failure" | "fail" | "f" | "no" | "n" | "forgot" | "0" => Some(ReviewOutcome::Failure),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ReviewStatus {
    Learning,
    Mastered,
}

impl ReviewStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReviewStatus::Learning => "Learning",
            ReviewStatus::Mastered => "Mastered",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DueState {
    Due,
    NotDue,
    Mastered,
}

/// Stage -> days until the next review. Strictly increasing, one entry per
/// stage.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalTable([u16; MAX_STAGE as usize]);

impl IntervalTable {
    /// Default ladder for coding problems.
    pub const PROBLEMS: IntervalTable = IntervalTable([1, 3, 7, 14, 30]);

    /// Default ladder for general topics, which resurface more slowly.
    pub const TOPICS: IntervalTable = IntervalTable([5, 15, 30, 45, 60]);

    pub fn new(days: [u16; MAX_STAGE as usize]) -> Result<Self> {
        if days[0] == 0 {
            return Err(CadenceError::Config(
                "interval table entries must be at least 1 day".to_string(),
            ));
        }
        if !days.windows(2).all(|w| w[0] < w[1]) {
            return Err(CadenceError::Config(format!(
                "interval table must be strictly increasing, got {:?}",
                days
            )));
        }
        Ok(IntervalTable(days))
    }

    /// Parses a comma-separated override like `"1,3,7,14,30"`.
    pub fn parse(s: &str) -> Result<Self> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();
        if parts.len() != MAX_STAGE as usize {
            return Err(CadenceError::Config(format!(
                "expected {} interval entries, got {}",
                MAX_STAGE,
                parts.len()
            )));
        }
        let mut days = [0u16; MAX_STAGE as usize];
        for (slot, part) in days.iter_mut().zip(&parts) {
            *slot = part.parse().map_err(|_| {
                CadenceError::Config(format!("'{}' is not a valid interval in days", part))
            })?;
        }
        Self::new(days)
    }

    pub fn days(&self, stage: u8) -> i64 {
        let stage = stage.clamp(MIN_STAGE, MAX_STAGE);
        i64::from(self.0[(stage - 1) as usize])
    }

    fn interval(&self, stage: u8) -> Duration {
        Duration::days(self.days(stage))
    }
}

/// Scheduling fields shared by every reviewable item.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReviewCard {
    pub learned_on: DateTime<Utc>,
    pub last_reviewed: DateTime<Utc>,
    pub next_review: DateTime<Utc>,
    pub stage: u8,
    pub status: ReviewStatus,
}

impl ReviewCard {
    /// A fresh card. `last_reviewed` starts equal to `learned_on`, and the
    /// first review falls one interval after that. Cards created directly at
    /// the top stage start out mastered.
    pub fn new(learned_on: DateTime<Utc>, stage: u8, table: &IntervalTable) -> Self {
        let stage = stage.clamp(MIN_STAGE, MAX_STAGE);
        let status = if stage >= MAX_STAGE {
            ReviewStatus::Mastered
        } else {
            ReviewStatus::Learning
        };
        ReviewCard {
            learned_on,
            last_reviewed: learned_on,
            next_review: learned_on + table.interval(stage),
            stage,
            status,
        }
    }
}

/// Records a review outcome, returning the updated card.
///
/// Success climbs one stage (capped at the max). An item becomes mastered
/// only when a successful review is recorded while *already* at the top
/// stage; reaching the top stage for the first time is not enough. The item
/// has to survive one full top-stage interval before it retires.
///
/// Failure resets the ladder to stage 1 regardless of prior progress.
pub fn review(
    card: &ReviewCard,
    outcome: ReviewOutcome,
    now: DateTime<Utc>,
    table: &IntervalTable,
) -> ReviewCard {
    match outcome {
        ReviewOutcome::Success => {
            let new_stage = (card.stage + 1).min(MAX_STAGE);
            let mastered = card.stage == MAX_STAGE && new_stage == MAX_STAGE;
            ReviewCard {
                learned_on: card.learned_on,
                last_reviewed: now,
                next_review: now + table.interval(new_stage),
                stage: new_stage,
                status: if mastered {
                    ReviewStatus::Mastered
                } else {
                    ReviewStatus::Learning
                },
            }
        }
        ReviewOutcome::Failure => ReviewCard {
            learned_on: card.learned_on,
            last_reviewed: now,
            next_review: now + table.interval(MIN_STAGE),
            stage: MIN_STAGE,
            status: ReviewStatus::Learning,
        },
    }
}

/// Due-state of a card at `now`, normalized to civil days in `zone` so the
/// answer only changes at local midnight.
pub fn classify(card: &ReviewCard, now: DateTime<Utc>, zone: FixedOffset) -> DueState {
    if card.status == ReviewStatus::Mastered {
        return DueState::Mastered;
    }
    if local_date(card.next_review, zone) <= local_date(now, zone) {
        DueState::Due
    } else {
        DueState::NotDue
    }
}

pub fn local_date(ts: DateTime<Utc>, zone: FixedOffset) -> NaiveDate {
    ts.with_timezone(&zone).date_naive()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn kolkata() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn card_at_stage(stage: u8) -> ReviewCard {
        let mut card = ReviewCard::new(at(2024, 1, 1, 6), 1, &IntervalTable::PROBLEMS);
        card.stage = stage;
        card.next_review = card.last_reviewed + IntervalTable::PROBLEMS.interval(stage);
        card
    }

    mod interval_table_tests {
        use super::*;

        #[test]
        fn stock_tables_lookup() {
            assert_eq!(IntervalTable::PROBLEMS.days(1), 1);
            assert_eq!(IntervalTable::PROBLEMS.days(3), 7);
            assert_eq!(IntervalTable::PROBLEMS.days(5), 30);
            assert_eq!(IntervalTable::TOPICS.days(1), 5);
            assert_eq!(IntervalTable::TOPICS.days(5), 60);
        }

        #[test]
        fn days_clamps_out_of_range_stages() {
            assert_eq!(IntervalTable::PROBLEMS.days(0), 1);
            assert_eq!(IntervalTable::PROBLEMS.days(99), 30);
        }

        #[test]
        fn stock_tables_are_monotonic() {
            for table in [IntervalTable::PROBLEMS, IntervalTable::TOPICS] {
                for stage in MIN_STAGE..MAX_STAGE {
                    assert!(table.days(stage) < table.days(stage + 1));
                }
            }
        }

        #[test]
        fn parse_valid() {
            let table = IntervalTable::parse("1, 2, 4, 8, 16").unwrap();
            assert_eq!(table.days(4), 8);
        }

        #[test]
        fn parse_rejects_wrong_arity() {
            assert!(IntervalTable::parse("1,2,3").is_err());
            assert!(IntervalTable::parse("1,2,3,4,5,6").is_err());
        }

        #[test]
        fn parse_rejects_non_numeric() {
            assert!(IntervalTable::parse("1,2,x,4,5").is_err());
        }

        #[test]
        fn parse_rejects_non_increasing() {
            assert!(IntervalTable::parse("1,3,3,14,30").is_err());
            assert!(IntervalTable::parse("5,4,3,2,1").is_err());
        }

        #[test]
        fn parse_rejects_zero_first_entry() {
            assert!(IntervalTable::parse("0,1,2,3,4").is_err());
        }
    }

    mod card_creation_tests {
        use super::*;

        #[test]
        fn new_card_schedules_one_interval_out() {
            let learned = at(2024, 1, 1, 0);
            let card = ReviewCard::new(learned, 1, &IntervalTable::PROBLEMS);
            assert_eq!(card.learned_on, learned);
            assert_eq!(card.last_reviewed, learned);
            assert_eq!(card.next_review, learned + Duration::days(1));
            assert_eq!(card.stage, 1);
            assert_eq!(card.status, ReviewStatus::Learning);
        }

        #[test]
        fn new_card_uses_its_tables_interval() {
            let learned = at(2024, 1, 1, 0);
            let card = ReviewCard::new(learned, 2, &IntervalTable::TOPICS);
            assert_eq!(card.next_review, learned + Duration::days(15));
        }

        #[test]
        fn new_card_at_top_stage_starts_mastered() {
            let card = ReviewCard::new(at(2024, 1, 1, 0), 5, &IntervalTable::PROBLEMS);
            assert_eq!(card.status, ReviewStatus::Mastered);
        }

        #[test]
        fn new_card_clamps_stage() {
            let card = ReviewCard::new(at(2024, 1, 1, 0), 0, &IntervalTable::PROBLEMS);
            assert_eq!(card.stage, 1);
            let card = ReviewCard::new(at(2024, 1, 1, 0), 9, &IntervalTable::PROBLEMS);
            assert_eq!(card.stage, 5);
        }
    }

    mod review_tests {
        use super::*;

        #[test]
        fn success_advances_each_stage_below_max() {
            for stage in 1..=4u8 {
                let card = card_at_stage(stage);
                let now = at(2024, 2, 1, 9);
                let updated = review(&card, ReviewOutcome::Success, now, &IntervalTable::PROBLEMS);
                assert_eq!(updated.stage, stage + 1);
                assert_eq!(updated.status, ReviewStatus::Learning, "stage {}", stage);
                assert_eq!(updated.last_reviewed, now);
            }
        }

        #[test]
        fn success_at_max_stage_stays_at_max() {
            let card = card_at_stage(5);
            let updated = review(
                &card,
                ReviewOutcome::Success,
                at(2024, 2, 1, 9),
                &IntervalTable::PROBLEMS,
            );
            assert_eq!(updated.stage, 5);
        }

        // Mastery requires a successful review recorded while already at the
        // top stage. Reaching stage 5 for the first time is not enough; the
        // next success at stage 5 retires the item.
        #[test]
        fn first_arrival_at_top_stage_is_not_mastery() {
            let card = card_at_stage(4);
            let updated = review(
                &card,
                ReviewOutcome::Success,
                at(2024, 2, 1, 9),
                &IntervalTable::PROBLEMS,
            );
            assert_eq!(updated.stage, 5);
            assert_eq!(updated.status, ReviewStatus::Learning);
        }

        #[test]
        fn success_while_already_at_top_stage_masters() {
            let card = card_at_stage(5);
            let updated = review(
                &card,
                ReviewOutcome::Success,
                at(2024, 2, 1, 9),
                &IntervalTable::PROBLEMS,
            );
            assert_eq!(updated.status, ReviewStatus::Mastered);
        }

        #[test]
        fn mastery_takes_two_successes_from_stage_four() {
            let table = IntervalTable::PROBLEMS;
            let card = card_at_stage(4);
            let first = review(&card, ReviewOutcome::Success, at(2024, 2, 1, 9), &table);
            assert_eq!(first.status, ReviewStatus::Learning);
            let second = review(&first, ReviewOutcome::Success, at(2024, 3, 3, 9), &table);
            assert_eq!(second.status, ReviewStatus::Mastered);
        }

        #[test]
        fn failure_resets_to_stage_one_from_any_stage() {
            for stage in 1..=5u8 {
                let card = card_at_stage(stage);
                let now = at(2024, 2, 1, 9);
                let updated = review(&card, ReviewOutcome::Failure, now, &IntervalTable::PROBLEMS);
                assert_eq!(updated.stage, 1, "stage {}", stage);
                assert_eq!(updated.status, ReviewStatus::Learning);
                assert_eq!(updated.last_reviewed, now);
                assert_eq!(updated.next_review, now + Duration::days(1));
            }
        }

        #[test]
        fn failure_at_stage_four_reschedules_at_first_interval() {
            let card = card_at_stage(4);
            let now = at(2024, 5, 10, 12);
            let updated = review(&card, ReviewOutcome::Failure, now, &IntervalTable::TOPICS);
            assert_eq!(updated.stage, 1);
            assert_eq!(updated.next_review, now + Duration::days(5));
        }

        #[test]
        fn next_review_is_last_reviewed_plus_interval_after_any_review() {
            let table = IntervalTable::PROBLEMS;
            for stage in 1..=5u8 {
                for outcome in [ReviewOutcome::Success, ReviewOutcome::Failure] {
                    let card = card_at_stage(stage);
                    let updated = review(&card, outcome, at(2024, 6, 1, 3), &table);
                    assert_eq!(
                        updated.next_review,
                        updated.last_reviewed + table.interval(updated.stage)
                    );
                }
            }
        }

        #[test]
        fn review_does_not_touch_learned_on() {
            let card = card_at_stage(3);
            let updated = review(
                &card,
                ReviewOutcome::Success,
                at(2024, 2, 1, 9),
                &IntervalTable::PROBLEMS,
            );
            assert_eq!(updated.learned_on, card.learned_on);
        }
    }

    mod classify_tests {
        use super::*;

        #[test]
        fn mastered_wins_over_due() {
            let mut card = card_at_stage(5);
            card.status = ReviewStatus::Mastered;
            card.next_review = at(2020, 1, 1, 0);
            assert_eq!(
                classify(&card, at(2024, 1, 1, 0), kolkata()),
                DueState::Mastered
            );
        }

        #[test]
        fn due_on_the_same_local_day() {
            // Learned 2024-01-01, interval(1) = 1 day => next review
            // 2024-01-02. Due at any instant of that local day.
            let card = ReviewCard::new(at(2024, 1, 1, 6), 1, &IntervalTable::PROBLEMS);
            assert_eq!(
                classify(&card, at(2024, 1, 2, 0), kolkata()),
                DueState::Due
            );
        }

        #[test]
        fn not_due_before_the_local_day() {
            let card = ReviewCard::new(at(2024, 1, 1, 6), 1, &IntervalTable::PROBLEMS);
            assert_eq!(
                classify(&card, at(2024, 1, 1, 8), kolkata()),
                DueState::NotDue
            );
        }

        #[test]
        fn due_when_overdue_by_days() {
            let card = ReviewCard::new(at(2024, 1, 1, 6), 1, &IntervalTable::PROBLEMS);
            assert_eq!(
                classify(&card, at(2024, 3, 15, 0), kolkata()),
                DueState::Due
            );
        }

        #[test]
        fn due_state_flips_at_local_midnight_not_utc() {
            // next_review at 2024-01-02 00:30 UTC is already 2024-01-02
            // 06:00 in +05:30, so the card is due at 2024-01-01 19:00 UTC,
            // which is 2024-01-02 00:30 local.
            let mut card = ReviewCard::new(at(2024, 1, 1, 0), 1, &IntervalTable::PROBLEMS);
            card.next_review = Utc.with_ymd_and_hms(2024, 1, 2, 0, 30, 0).unwrap();

            let before_local_midnight = Utc.with_ymd_and_hms(2024, 1, 1, 18, 0, 0).unwrap();
            let after_local_midnight = Utc.with_ymd_and_hms(2024, 1, 1, 19, 0, 0).unwrap();

            assert_eq!(
                classify(&card, before_local_midnight, kolkata()),
                DueState::NotDue
            );
            assert_eq!(
                classify(&card, after_local_midnight, kolkata()),
                DueState::Due
            );
        }

        #[test]
        fn classify_is_monotonic_in_time() {
            let card = ReviewCard::new(at(2024, 1, 1, 6), 1, &IntervalTable::PROBLEMS);
            let mut due_seen = false;
            for hour in 0..72 {
                let now = at(2024, 1, 1, 0) + Duration::hours(hour);
                match classify(&card, now, kolkata()) {
                    DueState::Due => due_seen = true,
                    DueState::NotDue => {
                        assert!(!due_seen, "card went due and then not-due at hour {}", hour)
                    }
                    DueState::Mastered => unreachable!(),
                }
            }
            assert!(due_seen);
        }
    }

    mod outcome_parsing_tests {
        use super::*;

        #[test]
        fn from_str_success_variants() {
            for v in ["success", "s", "S", "yes", "y", "reviewed", "1"] {
                assert_eq!(
                    ReviewOutcome::from_str(v),
                    Some(ReviewOutcome::Success),
                    "{}",
                    v
                );
            }
        }

        #[test]
        fn from_str_failure_variants() {
            for v in ["failure", "fail", "f", "no", "n", "forgot", "FORGOT", "0"] {
                assert_eq!(
                    ReviewOutcome::from_str(v),
                    Some(ReviewOutcome::Failure),
                    "{}",
                    v
                );
            }
        }

        #[test]
        fn from_str_invalid() {
            assert!(ReviewOutcome::from_str("").is_none());
            assert!(ReviewOutcome::from_str("maybe").is_none());
        }
    }
}
