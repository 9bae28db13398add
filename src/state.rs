use chrono::{DateTime, FixedOffset, NaiveDate, Utc};
use log::{debug, warn};
use serde::Serialize;
use uuid::Uuid;

use crate::models::{AppState, Problem, Task, TaskStatus, Theme, Topic, UserSettings};
use crate::srs::{self, DueState, IntervalTable, ReviewOutcome};
use crate::store::StateStore;

/// Which slice of a review collection a caller wants to see.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReviewFilter {
    Due,
    All,
    Mastered,
}

impl ReviewFilter {
    pub fn matches(&self, due_state: DueState) -> bool {
        match self {
            ReviewFilter::All => true,
            ReviewFilter::Due => due_state == DueState::Due,
            ReviewFilter::Mastered => due_state == DueState::Mastered,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ReviewFilter::Due => "Due",
            ReviewFilter::All => "All",
            ReviewFilter::Mastered => "Mastered",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ReviewFilter::Due => ReviewFilter::All,
            ReviewFilter::All => ReviewFilter::Mastered,
            ReviewFilter::Mastered => ReviewFilter::Due,
        }
    }
}

/// Scope for the stochastic next-review pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickScope {
    All,
    Problems,
    Topics,
}

/// A due item selected for review.
#[derive(Debug, Clone, Copy)]
pub enum DuePick<'a> {
    Problem(&'a Problem),
    Topic(&'a Topic),
}

/// Partial settings update; `None` leaves a field untouched.
#[derive(Debug, Clone, Default)]
pub struct SettingsUpdate {
    pub name: Option<String>,
    pub target_date: Option<Option<NaiveDate>>,
    pub theme: Option<Theme>,
}

#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub total_tasks: usize,
    pub open_tasks: usize,
    pub completed_tasks: usize,
    pub blocked_tasks: usize,
    pub total_problems: usize,
    pub due_problems: usize,
    pub mastered_problems: usize,
    pub total_topics: usize,
    pub due_topics: usize,
    pub mastered_topics: usize,
    pub days_to_target: Option<i64>,
}

/// The one owner of application state. Every mutation flows through here,
/// and every mutation re-saves the snapshot; a failed save is logged and the
/// in-memory state stays authoritative.
pub struct Session {
    state: AppState,
    store: Box<dyn StateStore>,
}

enum Lookup {
    Unique(usize),
    Ambiguous,
    Absent,
}

fn resolve(ids: impl Iterator<Item = Uuid>, needle: &str) -> Lookup {
    let needle = needle.to_lowercase();
    let mut found = None;
    for (i, id) in ids.enumerate() {
        if id.to_string().starts_with(&needle) {
            if found.is_some() {
                return Lookup::Ambiguous;
            }
            found = Some(i);
        }
    }
    match found {
        Some(i) => Lookup::Unique(i),
        None => Lookup::Absent,
    }
}

impl Session {
    /// Loads the owner's snapshot, or starts from defaults when the store is
    /// empty or unreadable. A bad snapshot is reported, never a crash.
    pub fn open(store: Box<dyn StateStore>) -> Self {
        let state = match store.load() {
            Ok(Some(state)) => state,
            Ok(None) => AppState::default(),
            Err(e) => {
                warn!("could not load snapshot, starting fresh: {}", e);
                AppState::default()
            }
        };
        Session { state, store }
    }

    pub fn state(&self) -> &AppState {
        &self.state
    }

    pub fn settings(&self) -> &UserSettings {
        &self.state.settings
    }

    fn persist(&self) {
        match self.store.save(&self.state) {
            Ok(()) => debug!("snapshot saved"),
            Err(e) => warn!("snapshot save failed, state kept in memory: {}", e),
        }
    }

    // --- tasks ---

    pub fn add_task(&mut self, task: Task) -> &Task {
        let idx = self.state.tasks.len();
        self.state.tasks.push(task);
        self.persist();
        &self.state.tasks[idx]
    }

    pub fn remove_task(&mut self, needle: &str) -> bool {
        match resolve(self.state.tasks.iter().map(|t| t.id), needle) {
            Lookup::Unique(i) => {
                self.state.tasks.remove(i);
                self.persist();
                true
            }
            _ => false,
        }
    }

    /// Any status is reachable from any other; the board enforces no
    /// transition graph.
    pub fn set_task_status(&mut self, needle: &str, status: TaskStatus) -> bool {
        match resolve(self.state.tasks.iter().map(|t| t.id), needle) {
            Lookup::Unique(i) => {
                self.state.tasks[i].status = status;
                self.persist();
                true
            }
            _ => false,
        }
    }

    /// Checkbox semantics: completed goes back to todo, anything else
    /// completes.
    pub fn toggle_task(&mut self, needle: &str) -> Option<TaskStatus> {
        match resolve(self.state.tasks.iter().map(|t| t.id), needle) {
            Lookup::Unique(i) => {
                let task = &mut self.state.tasks[i];
                task.status = if task.status == TaskStatus::Completed {
                    TaskStatus::Todo
                } else {
                    TaskStatus::Completed
                };
                let status = task.status;
                self.persist();
                Some(status)
            }
            _ => None,
        }
    }

    pub fn clear_tasks(&mut self) -> usize {
        let removed = self.state.tasks.len();
        self.state.tasks.clear();
        self.persist();
        removed
    }

    // --- problems ---

    pub fn add_problem(&mut self, problem: Problem) -> &Problem {
        let idx = self.state.problems.len();
        self.state.problems.push(problem);
        self.persist();
        &self.state.problems[idx]
    }

    pub fn remove_problem(&mut self, needle: &str) -> bool {
        match resolve(self.state.problems.iter().map(|p| p.id), needle) {
            Lookup::Unique(i) => {
                self.state.problems.remove(i);
                self.persist();
                true
            }
            _ => false,
        }
    }

    pub fn find_problem(&self, needle: &str) -> Option<&Problem> {
        match resolve(self.state.problems.iter().map(|p| p.id), needle) {
            Lookup::Unique(i) => Some(&self.state.problems[i]),
            _ => None,
        }
    }

    pub fn review_problem(
        &mut self,
        needle: &str,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
        table: &IntervalTable,
    ) -> Option<&Problem> {
        match resolve(self.state.problems.iter().map(|p| p.id), needle) {
            Lookup::Unique(i) => {
                let card = srs::review(&self.state.problems[i].card, outcome, now, table);
                self.state.problems[i].card = card;
                self.persist();
                Some(&self.state.problems[i])
            }
            _ => None,
        }
    }

    /// Restartable filtered view; the underlying collection is untouched.
    pub fn filtered_problems(
        &self,
        filter: ReviewFilter,
        now: DateTime<Utc>,
        zone: FixedOffset,
    ) -> impl Iterator<Item = &Problem> {
        self.state
            .problems
            .iter()
            .filter(move |p| filter.matches(srs::classify(&p.card, now, zone)))
    }

    // --- topics ---

    pub fn add_topic(&mut self, topic: Topic) -> &Topic {
        let idx = self.state.topics.len();
        self.state.topics.push(topic);
        self.persist();
        &self.state.topics[idx]
    }

    pub fn remove_topic(&mut self, needle: &str) -> bool {
        match resolve(self.state.topics.iter().map(|t| t.id), needle) {
            Lookup::Unique(i) => {
                self.state.topics.remove(i);
                self.persist();
                true
            }
            _ => false,
        }
    }

    pub fn review_topic(
        &mut self,
        needle: &str,
        outcome: ReviewOutcome,
        now: DateTime<Utc>,
        table: &IntervalTable,
    ) -> Option<&Topic> {
        match resolve(self.state.topics.iter().map(|t| t.id), needle) {
            Lookup::Unique(i) => {
                let card = srs::review(&self.state.topics[i].card, outcome, now, table);
                self.state.topics[i].card = card;
                self.persist();
                Some(&self.state.topics[i])
            }
            _ => None,
        }
    }

    pub fn filtered_topics(
        &self,
        filter: ReviewFilter,
        now: DateTime<Utc>,
        zone: FixedOffset,
    ) -> impl Iterator<Item = &Topic> {
        self.state
            .topics
            .iter()
            .filter(move |t| filter.matches(srs::classify(&t.card, now, zone)))
    }

    // --- settings ---

    pub fn update_settings(&mut self, update: SettingsUpdate) -> &UserSettings {
        if let Some(name) = update.name {
            self.state.settings.name = name;
        }
        if let Some(target_date) = update.target_date {
            self.state.settings.target_date = target_date;
        }
        if let Some(theme) = update.theme {
            self.state.settings.theme = theme;
        }
        self.persist();
        &self.state.settings
    }

    // --- derived views ---

    /// Weighted-random pick among due items: the longer overdue and the
    /// lower the stage, the likelier the pick.
    pub fn pick_next(
        &self,
        scope: PickScope,
        now: DateTime<Utc>,
        zone: FixedOffset,
    ) -> Option<DuePick<'_>> {
        use rand::Rng;

        let mut candidates: Vec<DuePick> = Vec::new();
        if scope != PickScope::Topics {
            candidates.extend(
                self.filtered_problems(ReviewFilter::Due, now, zone)
                    .map(DuePick::Problem),
            );
        }
        if scope != PickScope::Problems {
            candidates.extend(
                self.filtered_topics(ReviewFilter::Due, now, zone)
                    .map(DuePick::Topic),
            );
        }
        if candidates.is_empty() {
            return None;
        }

        let today = srs::local_date(now, zone);
        let weights: Vec<f64> = candidates
            .iter()
            .map(|pick| {
                let card = match pick {
                    DuePick::Problem(p) => &p.card,
                    DuePick::Topic(t) => &t.card,
                };
                let overdue_days = (today - srs::local_date(card.next_review, zone))
                    .num_days()
                    .max(0) as f64
                    + 1.0;
                let stage_weight = f64::from(6 - card.stage.min(5));
                overdue_days * stage_weight
            })
            .collect();

        let total_weight: f64 = weights.iter().sum();
        let mut rng = rand::thread_rng();
        let mut random_point = rng.gen::<f64>() * total_weight;

        for (pick, weight) in candidates.iter().zip(&weights) {
            random_point -= weight;
            if random_point <= 0.0 {
                return Some(*pick);
            }
        }

        candidates.first().copied()
    }

    pub fn stats(&self, now: DateTime<Utc>, zone: FixedOffset) -> Stats {
        let tasks = &self.state.tasks;
        let completed_tasks = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Completed)
            .count();
        let blocked_tasks = tasks
            .iter()
            .filter(|t| t.status == TaskStatus::Blocked)
            .count();

        let classify_counts = |cards: Vec<DueState>| {
            let due = cards.iter().filter(|s| **s == DueState::Due).count();
            let mastered = cards.iter().filter(|s| **s == DueState::Mastered).count();
            (due, mastered)
        };
        let (due_problems, mastered_problems) = classify_counts(
            self.state
                .problems
                .iter()
                .map(|p| srs::classify(&p.card, now, zone))
                .collect(),
        );
        let (due_topics, mastered_topics) = classify_counts(
            self.state
                .topics
                .iter()
                .map(|t| srs::classify(&t.card, now, zone))
                .collect(),
        );

        let days_to_target = self
            .state
            .settings
            .target_date
            .map(|target| (target - srs::local_date(now, zone)).num_days());

        Stats {
            total_tasks: tasks.len(),
            open_tasks: tasks.len() - completed_tasks,
            completed_tasks,
            blocked_tasks,
            total_problems: self.state.problems.len(),
            due_problems,
            mastered_problems,
            total_topics: self.state.topics.len(),
            due_topics,
            mastered_topics,
            days_to_target,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Difficulty, ProblemDraft, TaskCategory, TopicDraft};
    use crate::srs::ReviewStatus;
    use crate::store::MemStore;
    use chrono::TimeZone;

    fn kolkata() -> FixedOffset {
        FixedOffset::east_opt(5 * 3600 + 1800).unwrap()
    }

    fn at(y: i32, m: u32, d: u32, h: u32) -> DateTime<Utc> {
        Utc.with_ymd_and_hms(y, m, d, h, 0, 0).unwrap()
    }

    fn session() -> Session {
        Session::open(Box::new(MemStore::new()))
    }

    fn sample_task(title: &str) -> Task {
        Task::new(title, TaskCategory::Personal, None, at(2024, 1, 1, 9)).unwrap()
    }

    fn sample_problem(title: &str, learned_on: DateTime<Utc>, stage: u8) -> Problem {
        ProblemDraft {
            title: title.to_string(),
            link: "https://leetcode.com/problems/two-sum/".to_string(),
            topics: vec!["Array".to_string()],
            difficulty: Difficulty::Easy,
            learned_on,
            stage,
            notes: None,
        }
        .build(&IntervalTable::PROBLEMS)
        .unwrap()
    }

    fn sample_topic(title: &str, learned_on: DateTime<Utc>) -> Topic {
        TopicDraft {
            title: title.to_string(),
            area: None,
            tags: vec![],
            learned_on,
            stage: 1,
            notes: None,
        }
        .build(&IntervalTable::TOPICS)
        .unwrap()
    }

    mod task_board_tests {
        use super::*;

        #[test]
        fn add_preserves_insertion_order() {
            let mut s = session();
            s.add_task(sample_task("first"));
            s.add_task(sample_task("second"));
            s.add_task(sample_task("third"));
            let titles: Vec<&str> = s.state().tasks.iter().map(|t| t.title.as_str()).collect();
            assert_eq!(titles, vec!["first", "second", "third"]);
        }

        #[test]
        fn remove_by_id_prefix() {
            let mut s = session();
            let id = s.add_task(sample_task("only")).id.to_string();
            assert!(s.remove_task(&id[..8]));
            assert!(s.state().tasks.is_empty());
        }

        #[test]
        fn remove_nonexistent_is_a_noop() {
            let mut s = session();
            s.add_task(sample_task("keep me"));
            assert!(!s.remove_task("ffffffff"));
            assert_eq!(s.state().tasks.len(), 1);
        }

        #[test]
        fn any_status_transition_is_allowed() {
            let mut s = session();
            let id = s.add_task(sample_task("free")).id.to_string();
            for status in [
                TaskStatus::Blocked,
                TaskStatus::Completed,
                TaskStatus::InProgress,
                TaskStatus::Todo,
                TaskStatus::Completed,
            ] {
                assert!(s.set_task_status(&id, status));
                assert_eq!(s.state().tasks[0].status, status);
            }
        }

        #[test]
        fn toggle_flips_between_todo_and_completed() {
            let mut s = session();
            let id = s.add_task(sample_task("toggle")).id.to_string();
            assert_eq!(s.toggle_task(&id), Some(TaskStatus::Completed));
            assert_eq!(s.toggle_task(&id), Some(TaskStatus::Todo));

            s.set_task_status(&id, TaskStatus::Blocked);
            assert_eq!(s.toggle_task(&id), Some(TaskStatus::Completed));
        }

        #[test]
        fn clear_removes_everything() {
            let mut s = session();
            s.add_task(sample_task("a"));
            s.add_task(sample_task("b"));
            assert_eq!(s.clear_tasks(), 2);
            assert!(s.state().tasks.is_empty());
        }

        #[test]
        fn ambiguous_prefix_is_a_noop() {
            let mut s = session();
            s.add_task(sample_task("a"));
            s.add_task(sample_task("b"));
            // Every v4 uuid string matches the empty prefix.
            assert!(!s.remove_task(""));
            assert_eq!(s.state().tasks.len(), 2);
        }
    }

    mod review_store_tests {
        use super::*;

        #[test]
        fn review_replaces_item_in_place() {
            let mut s = session();
            s.add_problem(sample_problem("first", at(2024, 1, 1, 6), 1));
            let id = s
                .add_problem(sample_problem("second", at(2024, 1, 1, 6), 2))
                .id
                .to_string();
            s.add_problem(sample_problem("third", at(2024, 1, 1, 6), 3));

            let updated = s
                .review_problem(
                    &id,
                    ReviewOutcome::Success,
                    at(2024, 1, 5, 9),
                    &IntervalTable::PROBLEMS,
                )
                .unwrap();
            assert_eq!(updated.card.stage, 3);

            // Order intact, others untouched.
            let titles: Vec<&str> = s
                .state()
                .problems
                .iter()
                .map(|p| p.title.as_str())
                .collect();
            assert_eq!(titles, vec!["first", "second", "third"]);
            assert_eq!(s.state().problems[0].card.stage, 1);
            assert_eq!(s.state().problems[2].card.stage, 3);
        }

        #[test]
        fn review_absent_id_is_a_noop() {
            let mut s = session();
            s.add_problem(sample_problem("p", at(2024, 1, 1, 6), 1));
            let before = s.state().problems[0].card.clone();
            assert!(s
                .review_problem(
                    "ffffffff",
                    ReviewOutcome::Failure,
                    at(2024, 2, 1, 9),
                    &IntervalTable::PROBLEMS,
                )
                .is_none());
            assert_eq!(s.state().problems[0].card, before);
        }

        #[test]
        fn failure_resets_topic_to_learning() {
            let mut s = session();
            let id = s
                .add_topic(sample_topic("CAP theorem", at(2024, 1, 1, 6)))
                .id
                .to_string();
            s.review_topic(
                &id,
                ReviewOutcome::Success,
                at(2024, 1, 6, 9),
                &IntervalTable::TOPICS,
            );
            let updated = s
                .review_topic(
                    &id,
                    ReviewOutcome::Failure,
                    at(2024, 1, 21, 9),
                    &IntervalTable::TOPICS,
                )
                .unwrap();
            assert_eq!(updated.card.stage, 1);
            assert_eq!(updated.card.status, ReviewStatus::Learning);
        }

        #[test]
        fn filters_partition_the_collection() {
            let mut s = session();
            // Due: learned long ago.
            s.add_problem(sample_problem("due", at(2023, 1, 1, 6), 1));
            // Not due: learned just now, next review in the future.
            s.add_problem(sample_problem("fresh", at(2024, 6, 1, 6), 3));
            // Mastered: created at top stage.
            s.add_problem(sample_problem("done", at(2023, 1, 1, 6), 5));

            let now = at(2024, 6, 1, 9);
            let due: Vec<&str> = s
                .filtered_problems(ReviewFilter::Due, now, kolkata())
                .map(|p| p.title.as_str())
                .collect();
            assert_eq!(due, vec!["due"]);

            let mastered: Vec<&str> = s
                .filtered_problems(ReviewFilter::Mastered, now, kolkata())
                .map(|p| p.title.as_str())
                .collect();
            assert_eq!(mastered, vec!["done"]);

            assert_eq!(
                s.filtered_problems(ReviewFilter::All, now, kolkata()).count(),
                3
            );
        }

        #[test]
        fn filtered_view_is_restartable_and_non_mutating() {
            let mut s = session();
            s.add_problem(sample_problem("due", at(2023, 1, 1, 6), 1));
            let now = at(2024, 6, 1, 9);
            let first: usize = s.filtered_problems(ReviewFilter::Due, now, kolkata()).count();
            let second: usize = s.filtered_problems(ReviewFilter::Due, now, kolkata()).count();
            assert_eq!(first, second);
            assert_eq!(s.state().problems.len(), 1);
        }

        #[test]
        fn remove_topic_absent_is_a_noop() {
            let mut s = session();
            assert!(!s.remove_topic("ffffffff"));
        }
    }

    mod persistence_tests {
        use super::*;
        use std::rc::Rc;

        #[test]
        fn mutations_write_through_to_the_store() {
            let store = Rc::new(MemStore::new());
            let mut s = Session::open(Box::new(Rc::clone(&store)));
            assert!(store.snapshot().is_none());

            s.add_task(sample_task("persist me"));
            let snapshot = store.snapshot().expect("snapshot written");
            assert!(snapshot.contains("persist me"));
        }

        #[test]
        fn failed_saves_leave_memory_state_authoritative() {
            let store = Rc::new(MemStore::new());
            let mut s = Session::open(Box::new(Rc::clone(&store)));
            store.fail_saves.set(true);

            s.add_task(sample_task("still here"));
            assert_eq!(s.state().tasks.len(), 1);
            assert!(store.snapshot().is_none());

            // A later mutation retries the save and lands the full state.
            store.fail_saves.set(false);
            s.add_task(sample_task("second"));
            let snapshot = store.snapshot().unwrap();
            assert!(snapshot.contains("still here"));
            assert!(snapshot.contains("second"));
        }

        #[test]
        fn reopening_restores_state() {
            let store = Rc::new(MemStore::new());
            let mut s = Session::open(Box::new(Rc::clone(&store)));
            s.add_task(sample_task("durable"));
            let snapshot = store.snapshot().unwrap();

            let s2 = Session::open(Box::new(MemStore::with_snapshot(&snapshot)));
            assert_eq!(s2.state().tasks.len(), 1);
            assert_eq!(s2.state().tasks[0].title, "durable");
        }

        #[test]
        fn corrupt_snapshot_falls_back_to_defaults() {
            let s = Session::open(Box::new(MemStore::with_snapshot("{broken")));
            assert!(s.state().tasks.is_empty());
        }
    }

    mod settings_tests {
        use super::*;

        #[test]
        fn partial_update_touches_only_given_fields() {
            let mut s = session();
            s.update_settings(SettingsUpdate {
                name: Some("Aditya".to_string()),
                ..Default::default()
            });
            s.update_settings(SettingsUpdate {
                theme: Some(Theme::Light),
                ..Default::default()
            });
            assert_eq!(s.settings().name, "Aditya");
            assert_eq!(s.settings().theme, Theme::Light);
            assert!(s.settings().target_date.is_none());
        }

        #[test]
        fn target_date_can_be_cleared() {
            let mut s = session();
            s.update_settings(SettingsUpdate {
                target_date: Some(NaiveDate::from_ymd_opt(2025, 6, 1)),
                ..Default::default()
            });
            assert!(s.settings().target_date.is_some());
            s.update_settings(SettingsUpdate {
                target_date: Some(None),
                ..Default::default()
            });
            assert!(s.settings().target_date.is_none());
        }
    }

    mod pick_tests {
        use super::*;

        #[test]
        fn nothing_due_yields_none() {
            let mut s = session();
            s.add_problem(sample_problem("fresh", at(2024, 6, 1, 6), 3));
            assert!(s
                .pick_next(PickScope::All, at(2024, 6, 1, 9), kolkata())
                .is_none());
        }

        #[test]
        fn pick_returns_a_due_item() {
            let mut s = session();
            s.add_problem(sample_problem("due", at(2023, 1, 1, 6), 1));
            match s.pick_next(PickScope::All, at(2024, 6, 1, 9), kolkata()) {
                Some(DuePick::Problem(p)) => assert_eq!(p.title, "due"),
                other => panic!("expected the due problem, got {:?}", other.is_some()),
            }
        }

        #[test]
        fn scope_restricts_the_pool() {
            let mut s = session();
            s.add_problem(sample_problem("due problem", at(2023, 1, 1, 6), 1));
            s.add_topic(sample_topic("due topic", at(2023, 1, 1, 6)));

            for _ in 0..20 {
                match s.pick_next(PickScope::Topics, at(2024, 6, 1, 9), kolkata()) {
                    Some(DuePick::Topic(_)) => {}
                    _ => panic!("topics scope must only yield topics"),
                }
            }
        }
    }

    mod stats_tests {
        use super::*;

        #[test]
        fn counts_by_status_and_due_state() {
            let mut s = session();
            let id = s.add_task(sample_task("done")).id.to_string();
            s.set_task_status(&id, TaskStatus::Completed);
            s.add_task(sample_task("open"));

            s.add_problem(sample_problem("due", at(2023, 1, 1, 6), 1));
            s.add_problem(sample_problem("mastered", at(2023, 1, 1, 6), 5));
            s.add_topic(sample_topic("fresh", at(2024, 6, 1, 6)));

            let stats = s.stats(at(2024, 6, 1, 9), kolkata());
            assert_eq!(stats.total_tasks, 2);
            assert_eq!(stats.completed_tasks, 1);
            assert_eq!(stats.open_tasks, 1);
            assert_eq!(stats.total_problems, 2);
            assert_eq!(stats.due_problems, 1);
            assert_eq!(stats.mastered_problems, 1);
            assert_eq!(stats.total_topics, 1);
            assert_eq!(stats.due_topics, 0);
        }

        #[test]
        fn countdown_to_target_date() {
            let mut s = session();
            s.update_settings(SettingsUpdate {
                target_date: Some(NaiveDate::from_ymd_opt(2024, 6, 11)),
                ..Default::default()
            });
            let stats = s.stats(at(2024, 6, 1, 9), kolkata());
            assert_eq!(stats.days_to_target, Some(10));
        }

        #[test]
        fn no_target_date_means_no_countdown() {
            let s = session();
            let stats = s.stats(at(2024, 6, 1, 9), kolkata());
            assert!(stats.days_to_target.is_none());
        }
    }
}
