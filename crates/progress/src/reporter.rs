//! Summary derivation over the plan and recorded observations.

use burndown_core::{ProjectPlan, Summary, Task, TrackingStatus};
use chrono::NaiveDate;

use crate::ideal::IdealLine;
use crate::store::ProgressStore;

/// Comparison slack between actual and ideal remaining work.
pub const TOLERANCE: f64 = 1e-9;

/// Derives scalar summaries from the current store contents.
///
/// Never fails: an empty store yields a no-data placeholder.
pub struct SummaryReporter;

impl SummaryReporter {
    /// Summarize progress as of a date.
    pub fn report(plan: &ProjectPlan, store: &ProgressStore, as_of: NaiveDate) -> Summary {
        Self::report_with_tasks(plan, store, &[], as_of)
    }

    /// Summarize progress, deriving estimate variance from the task list.
    pub fn report_with_tasks(
        plan: &ProjectPlan,
        store: &ProgressStore,
        tasks: &[Task],
        as_of: NaiveDate,
    ) -> Summary {
        let days_elapsed = (as_of - plan.start_date).num_days();
        let days_remaining = (plan.end_date - as_of).num_days().max(0);

        let Some(latest) = store.latest() else {
            return Summary::no_data(plan.total_scope, days_elapsed, days_remaining);
        };

        let percent_complete = (1.0 - latest.remaining / plan.total_scope).clamp(0.0, 1.0);

        // A zero-duration plan has no ideal line; on its single day
        // everything should already be done.
        let ideal_remaining = IdealLine::new(plan)
            .map(|line| line.remaining_on(latest.date))
            .unwrap_or(0.0);

        let status = if latest.remaining > ideal_remaining + TOLERANCE {
            TrackingStatus::Behind
        } else if latest.remaining < ideal_remaining - TOLERANCE {
            TrackingStatus::Ahead
        } else {
            TrackingStatus::OnTrack
        };

        Summary {
            percent_complete,
            days_elapsed,
            days_remaining,
            latest_remaining: Some(latest.remaining),
            total_scope: plan.total_scope,
            status,
            estimate_variance: estimate_variance(tasks),
        }
    }
}

/// Percent deviation of actual task points from the estimates.
fn estimate_variance(tasks: &[Task]) -> Option<f64> {
    let estimated: f64 = tasks.iter().map(|t| t.estimated_points).sum();
    if tasks.is_empty() || estimated == 0.0 {
        return None;
    }
    let actual: f64 = tasks
        .iter()
        .map(|t| t.actual_points.unwrap_or(t.estimated_points))
        .sum();
    Some((estimated - actual).abs() / estimated * 100.0)
}
