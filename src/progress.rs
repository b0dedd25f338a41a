//! Tutorial progress tracking.
//!
//! The store is owned by the caller and passed around explicitly; there is no
//! process-wide state. Single-threaded use is assumed.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashMap};
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProgressError {
    /// Update or completion of a tutorial that was never started
    #[error("Tutorial progress not found: {0}")]
    NotFound(String),
}

/// Progress of one learner through one tutorial
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TutorialProgress {
    pub tutorial_id: String,
    pub current_step: usize,
    /// Indices of every step visited so far
    pub completed_steps: BTreeSet<usize>,
    pub started_at: DateTime<Utc>,
    pub last_accessed_at: DateTime<Utc>,
    pub completed: bool,
    /// Cumulative score across recorded steps
    pub score: i64,
}

impl TutorialProgress {
    fn new(tutorial_id: &str) -> Self {
        let now = Utc::now();
        Self {
            tutorial_id: tutorial_id.to_string(),
            current_step: 0,
            completed_steps: BTreeSet::new(),
            started_at: now,
            last_accessed_at: now,
            completed: false,
            score: 0,
        }
    }
}

/// Keyed table of tutorial progress records
#[derive(Debug, Default, Clone)]
pub struct ProgressStore {
    records: HashMap<String, TutorialProgress>,
}

impl ProgressStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start (or restart) a tutorial with a fresh record
    pub fn start(&mut self, tutorial_id: &str) -> TutorialProgress {
        let progress = TutorialProgress::new(tutorial_id);
        if self
            .records
            .insert(tutorial_id.to_string(), progress.clone())
            .is_some()
        {
            log::debug!("restarted tutorial {}", tutorial_id);
        }
        progress
    }

    /// Mark `step_index` visited, make it current and add `score_delta`
    pub fn record_step(
        &mut self,
        tutorial_id: &str,
        step_index: usize,
        score_delta: i64,
    ) -> Result<TutorialProgress, ProgressError> {
        let progress = self.get_mut(tutorial_id)?;
        progress.current_step = step_index;
        progress.completed_steps.insert(step_index);
        progress.last_accessed_at = Utc::now();
        progress.score = progress.score.saturating_add(score_delta);
        Ok(progress.clone())
    }

    pub fn complete(&mut self, tutorial_id: &str) -> Result<TutorialProgress, ProgressError> {
        let progress = self.get_mut(tutorial_id)?;
        progress.completed = true;
        progress.last_accessed_at = Utc::now();
        Ok(progress.clone())
    }

    pub fn get(&self, tutorial_id: &str) -> Option<&TutorialProgress> {
        self.records.get(tutorial_id)
    }

    /// Every record, ordered by tutorial id
    pub fn all(&self) -> Vec<&TutorialProgress> {
        let mut all: Vec<&TutorialProgress> = self.records.values().collect();
        all.sort_by(|a, b| a.tutorial_id.cmp(&b.tutorial_id));
        all
    }

    fn get_mut(&mut self, tutorial_id: &str) -> Result<&mut TutorialProgress, ProgressError> {
        self.records
            .get_mut(tutorial_id)
            .ok_or_else(|| ProgressError::NotFound(tutorial_id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn start_creates_fresh_record() {
        let mut store = ProgressStore::new();
        let p = store.start("js-basics");
        assert_eq!(p.tutorial_id, "js-basics");
        assert_eq!(p.current_step, 0);
        assert!(p.completed_steps.is_empty());
        assert!(!p.completed);
        assert_eq!(p.score, 0);
        assert_eq!(store.get("js-basics"), Some(&p));
    }

    #[test]
    fn record_step_accumulates() {
        let mut store = ProgressStore::new();
        store.start("js-basics");
        store.record_step("js-basics", 0, 10).unwrap();
        store.record_step("js-basics", 2, 15).unwrap();
        let p = store.record_step("js-basics", 0, 0).unwrap();
        assert_eq!(p.current_step, 0);
        assert_eq!(p.completed_steps.iter().copied().collect::<Vec<_>>(), vec![0, 2]);
        assert_eq!(p.score, 25);
        assert!(p.last_accessed_at >= p.started_at);
    }

    #[test]
    fn unknown_tutorial_fails_loudly() {
        let mut store = ProgressStore::new();
        let err = store.record_step("ghost", 1, 5).unwrap_err();
        assert_eq!(err, ProgressError::NotFound("ghost".to_string()));
        assert!(err.to_string().contains("ghost"));
        assert!(store.get("ghost").is_none());
        assert!(store.complete("ghost").is_err());
        assert!(store.get("ghost").is_none());
    }

    #[test]
    fn complete_sets_flag_and_keeps_steps() {
        let mut store = ProgressStore::new();
        store.start("react-basics");
        store.record_step("react-basics", 1, 50).unwrap();
        let p = store.complete("react-basics").unwrap();
        assert!(p.completed);
        assert!(p.completed_steps.contains(&1));
        assert_eq!(p.score, 50);
    }

    #[test]
    fn score_saturates_at_extremes() {
        let mut store = ProgressStore::new();
        store.start("js-basics");
        store.record_step("js-basics", 0, i64::MAX).unwrap();
        let p = store.record_step("js-basics", 1, 1).unwrap();
        assert_eq!(p.score, i64::MAX);
        store.start("js-basics");
        store.record_step("js-basics", 0, i64::MIN).unwrap();
        let p = store.record_step("js-basics", 1, -1).unwrap();
        assert_eq!(p.score, i64::MIN);
    }

    #[test]
    fn restart_resets_record() {
        let mut store = ProgressStore::new();
        store.start("js-basics");
        store.record_step("js-basics", 3, 30).unwrap();
        let p = store.start("js-basics");
        assert_eq!(p.score, 0);
        assert!(p.completed_steps.is_empty());
    }

    #[test]
    fn all_is_sorted_by_id() {
        let mut store = ProgressStore::new();
        store.start("b");
        store.start("a");
        let ids: Vec<&str> = store.all().iter().map(|p| p.tutorial_id.as_str()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn stores_are_isolated() {
        let mut one = ProgressStore::new();
        let two = ProgressStore::new();
        one.start("js-basics");
        assert!(two.get("js-basics").is_none());
    }

    #[test]
    fn serializes_camel_case() {
        let mut store = ProgressStore::new();
        let p = store.start("js-basics");
        let json = serde_json::to_value(&p).unwrap();
        assert!(json.get("tutorialId").is_some());
        assert!(json.get("completedSteps").is_some());
        assert!(json.get("lastAccessedAt").is_some());
    }
}
