//! Project plan - the fixed frame a burndown is measured against.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;
use crate::id::ProjectId;
use crate::Time;

/// The agreed project frame: window and total scope.
///
/// Immutable once built; every derived value (ideal line, summary, chart)
/// is recomputed from it on each render.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectPlan {
    /// Unique identifier
    pub id: ProjectId,

    /// Project name, shown as the chart caption
    pub name: String,

    /// First day of the project window
    pub start_date: NaiveDate,

    /// Last day of the project window
    pub end_date: NaiveDate,

    /// Total work at project start, in whatever unit the team burns
    pub total_scope: f64,

    /// When the plan was created
    pub created_at: Time,
}

impl ProjectPlan {
    /// Build a validated plan.
    ///
    /// Fails if the name is empty, the end date precedes the start date,
    /// or the total scope is not positive.
    pub fn new(
        name: impl Into<String>,
        start_date: NaiveDate,
        end_date: NaiveDate,
        total_scope: f64,
    ) -> Result<Self, ValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(ValidationError::EmptyName);
        }
        if end_date < start_date {
            return Err(ValidationError::EndBeforeStart {
                start: start_date,
                end: end_date,
            });
        }
        if total_scope <= 0.0 {
            return Err(ValidationError::NonPositiveScope(total_scope));
        }

        Ok(Self {
            id: ProjectId::new(),
            name,
            start_date,
            end_date,
            total_scope,
            created_at: chrono::Utc::now(),
        })
    }

    /// Number of days between start and end.
    pub fn duration_days(&self) -> i64 {
        (self.end_date - self.start_date).num_days()
    }

    /// Whether a date falls inside the project window (inclusive).
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start_date && date <= self.end_date
    }
}

/// One sample of the ideal burndown line.
///
/// Derived, never persisted; recomputed from the plan on each render.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct IdealPoint {
    /// Sample date
    pub date: NaiveDate,

    /// Work that should remain on that date if the project burns evenly
    pub remaining: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    #[test]
    fn test_plan_rejects_empty_name() {
        let err = ProjectPlan::new("  ", day(1), day(10), 100.0).unwrap_err();
        assert_eq!(err, ValidationError::EmptyName);
    }

    #[test]
    fn test_plan_rejects_end_before_start() {
        let err = ProjectPlan::new("p", day(10), day(1), 100.0).unwrap_err();
        assert_eq!(
            err,
            ValidationError::EndBeforeStart {
                start: day(10),
                end: day(1),
            }
        );
    }

    #[test]
    fn test_plan_rejects_non_positive_scope() {
        let err = ProjectPlan::new("p", day(1), day(10), 0.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveScope(0.0));

        let err = ProjectPlan::new("p", day(1), day(10), -5.0).unwrap_err();
        assert_eq!(err, ValidationError::NonPositiveScope(-5.0));
    }

    #[test]
    fn test_plan_window() {
        let plan = ProjectPlan::new("p", day(1), day(10), 100.0).unwrap();
        assert_eq!(plan.duration_days(), 9);
        assert!(plan.contains(day(1)));
        assert!(plan.contains(day(10)));
        assert!(!plan.contains(day(11)));
    }

    #[test]
    fn test_plan_serde_round_trip() {
        let plan = ProjectPlan::new("p", day(1), day(10), 100.0).unwrap();
        let json = serde_json::to_string(&plan).unwrap();
        let back: ProjectPlan = serde_json::from_str(&json).unwrap();
        assert_eq!(back.name, plan.name);
        assert_eq!(back.start_date, plan.start_date);
        assert_eq!(back.end_date, plan.end_date);
        assert_eq!(back.total_scope, plan.total_scope);
    }
}
