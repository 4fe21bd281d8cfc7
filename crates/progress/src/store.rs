//! Session-scoped progress store.

use std::collections::BTreeMap;

use burndown_core::{Observation, ProjectPlan, ValidationError};
use chrono::NaiveDate;
use tracing::debug;

/// Ordered store of actual-progress observations for one session.
///
/// Append-only; the sorted view resolves duplicate dates last-write-wins,
/// so re-entering a date replaces the earlier value.
#[derive(Debug, Clone)]
pub struct ProgressStore {
    start: NaiveDate,
    end: NaiveDate,
    total_scope: f64,
    entries: Vec<Observation>,
}

impl ProgressStore {
    /// Create an empty store validating against the plan's window and scope.
    pub fn for_plan(plan: &ProjectPlan) -> Self {
        Self {
            start: plan.start_date,
            end: plan.end_date,
            total_scope: plan.total_scope,
            entries: Vec::new(),
        }
    }

    /// Record an observation.
    ///
    /// Fails if the remaining work is negative, exceeds the total scope,
    /// or the date falls outside the project window.
    pub fn append(
        &mut self,
        date: NaiveDate,
        remaining: f64,
        note: Option<String>,
    ) -> Result<(), ValidationError> {
        if remaining < 0.0 {
            return Err(ValidationError::NegativeRemaining(remaining));
        }
        if remaining > self.total_scope {
            return Err(ValidationError::ScopeExceeded {
                remaining,
                total_scope: self.total_scope,
            });
        }
        if date < self.start || date > self.end {
            return Err(ValidationError::OutOfWindow {
                date,
                start: self.start,
                end: self.end,
            });
        }

        debug!(%date, remaining, "observation recorded");
        self.entries.push(Observation::new(date, remaining, note));
        Ok(())
    }

    /// All observations sorted ascending by date.
    ///
    /// When several entries share a date, the later-entered one is kept.
    pub fn observations(&self) -> Vec<Observation> {
        let mut by_date: BTreeMap<NaiveDate, &Observation> = BTreeMap::new();
        for obs in &self.entries {
            by_date.insert(obs.date, obs);
        }
        by_date.into_values().cloned().collect()
    }

    /// The observation with the latest date, if any.
    pub fn latest(&self) -> Option<Observation> {
        self.observations().pop()
    }

    /// Number of raw entries, duplicates included.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether anything has been recorded yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn store() -> ProgressStore {
        let plan = ProjectPlan::new("p", day(1), day(31), 100.0).unwrap();
        ProgressStore::for_plan(&plan)
    }

    #[test]
    fn test_append_rejects_negative_remaining() {
        let mut store = store();
        let err = store.append(day(5), -1.0, None).unwrap_err();
        assert_eq!(err, ValidationError::NegativeRemaining(-1.0));
        assert!(store.is_empty());
    }

    #[test]
    fn test_append_rejects_scope_exceeded() {
        let mut store = store();
        let err = store.append(day(5), 150.0, None).unwrap_err();
        assert_eq!(
            err,
            ValidationError::ScopeExceeded {
                remaining: 150.0,
                total_scope: 100.0,
            }
        );
    }

    #[test]
    fn test_append_rejects_out_of_window_date() {
        let mut store = store();
        assert!(matches!(
            store.append(day(1) - chrono::Days::new(1), 50.0, None),
            Err(ValidationError::OutOfWindow { .. })
        ));
        assert!(matches!(
            store.append(day(31) + chrono::Days::new(1), 50.0, None),
            Err(ValidationError::OutOfWindow { .. })
        ));
    }

    #[test]
    fn test_observations_sorted_by_date() {
        let mut store = store();
        store.append(day(20), 40.0, None).unwrap();
        store.append(day(5), 80.0, None).unwrap();
        store.append(day(12), 60.0, None).unwrap();

        let dates: Vec<_> = store.observations().iter().map(|o| o.date).collect();
        assert_eq!(dates, vec![day(5), day(12), day(20)]);
    }

    #[test]
    fn test_duplicate_date_last_write_wins() {
        let mut store = store();
        store.append(day(5), 80.0, None).unwrap();
        store.append(day(5), 70.0, Some("corrected".into())).unwrap();

        let observations = store.observations();
        assert_eq!(observations.len(), 1);
        assert_eq!(observations[0].remaining, 70.0);
        assert_eq!(observations[0].note.as_deref(), Some("corrected"));
        // raw entries are append-only
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_latest_picks_max_date() {
        let mut store = store();
        assert!(store.latest().is_none());

        store.append(day(12), 60.0, None).unwrap();
        store.append(day(5), 80.0, None).unwrap();
        assert_eq!(store.latest().unwrap().date, day(12));
    }

    #[test]
    fn test_window_bounds_are_inclusive() {
        let mut store = store();
        store.append(day(1), 100.0, None).unwrap();
        store.append(day(31), 0.0, None).unwrap();
        assert_eq!(store.observations().len(), 2);
    }
}
