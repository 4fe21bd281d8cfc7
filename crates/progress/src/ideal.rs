//! Ideal burndown line derived from the project plan.

use burndown_core::{IdealPoint, ProjectPlan, ValidationError};
use chrono::NaiveDate;

/// Straight-line target trajectory from full scope at start to zero at end.
#[derive(Debug, Clone)]
pub struct IdealLine {
    start: NaiveDate,
    end: NaiveDate,
    total_scope: f64,
}

impl IdealLine {
    /// Derive the ideal line for a plan.
    ///
    /// Fails when the scope is not positive or the window spans zero days;
    /// both would make the interpolation meaningless.
    pub fn new(plan: &ProjectPlan) -> Result<Self, ValidationError> {
        if plan.total_scope <= 0.0 {
            return Err(ValidationError::NonPositiveScope(plan.total_scope));
        }
        if plan.start_date == plan.end_date {
            return Err(ValidationError::ZeroDuration(plan.start_date));
        }

        Ok(Self {
            start: plan.start_date,
            end: plan.end_date,
            total_scope: plan.total_scope,
        })
    }

    /// Ideal remaining work on a date.
    ///
    /// Linear between the endpoints, zero after the end date.
    pub fn remaining_on(&self, date: NaiveDate) -> f64 {
        let span = (self.end - self.start).num_days() as f64;
        let left = (self.end - date).num_days() as f64;
        self.total_scope * (left / span).max(0.0)
    }

    /// Daily samples from start to end, inclusive.
    ///
    /// Lazy and restartable: each call yields a fresh iterator.
    pub fn points(&self) -> IdealPoints {
        IdealPoints {
            line: self.clone(),
            cursor: Some(self.start),
        }
    }
}

/// Iterator over daily [`IdealPoint`] samples.
#[derive(Debug, Clone)]
pub struct IdealPoints {
    line: IdealLine,
    cursor: Option<NaiveDate>,
}

impl Iterator for IdealPoints {
    type Item = IdealPoint;

    fn next(&mut self) -> Option<IdealPoint> {
        let date = self.cursor?;
        self.cursor = if date < self.line.end {
            date.succ_opt()
        } else {
            None
        };
        Some(IdealPoint {
            date,
            remaining: self.line.remaining_on(date),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 1, d).unwrap()
    }

    fn plan() -> ProjectPlan {
        // ten-day window: day 0 = Jan 1, day 10 = Jan 11
        ProjectPlan::new("p", day(1), day(11), 100.0).unwrap()
    }

    #[test]
    fn test_endpoints() {
        let line = IdealLine::new(&plan()).unwrap();
        assert_eq!(line.remaining_on(day(1)), 100.0);
        assert_eq!(line.remaining_on(day(11)), 0.0);
    }

    #[test]
    fn test_midpoint_interpolation() {
        let line = IdealLine::new(&plan()).unwrap();
        // day 5 of 10 leaves half the scope
        assert_eq!(line.remaining_on(day(6)), 50.0);
    }

    #[test]
    fn test_zero_after_end() {
        let line = IdealLine::new(&plan()).unwrap();
        assert_eq!(line.remaining_on(day(20)), 0.0);
    }

    #[test]
    fn test_monotone_non_increasing() {
        let line = IdealLine::new(&plan()).unwrap();
        let points: Vec<_> = line.points().collect();
        for pair in points.windows(2) {
            assert!(pair[1].remaining <= pair[0].remaining);
        }
    }

    #[test]
    fn test_daily_sampling_covers_window() {
        let line = IdealLine::new(&plan()).unwrap();
        let points: Vec<_> = line.points().collect();
        assert_eq!(points.len(), 11);
        assert_eq!(points[0].date, day(1));
        assert_eq!(points[10].date, day(11));
    }

    #[test]
    fn test_restartable() {
        let line = IdealLine::new(&plan()).unwrap();
        let first: Vec<_> = line.points().collect();
        let second: Vec<_> = line.points().collect();
        assert_eq!(first, second);
    }

    #[test]
    fn test_zero_duration_rejected() {
        let plan = ProjectPlan::new("p", day(1), day(1), 100.0).unwrap();
        let err = IdealLine::new(&plan).unwrap_err();
        assert_eq!(err, ValidationError::ZeroDuration(day(1)));
    }
}
