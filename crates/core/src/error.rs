//! Validation errors surfaced to the user.

use chrono::NaiveDate;

/// Errors raised while validating project plans and progress input.
///
/// Every variant is user-correctable; the message says what to fix.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Project name was empty
    #[error("project name must not be empty")]
    EmptyName,

    /// End date precedes start date
    #[error("end date {end} is before start date {start}")]
    EndBeforeStart {
        /// Planned start
        start: NaiveDate,
        /// Planned end
        end: NaiveDate,
    },

    /// Total scope must be a positive number
    #[error("total scope must be positive, got {0}")]
    NonPositiveScope(f64),

    /// Start and end fall on the same day, the ideal line is undefined
    #[error("project starts and ends on {0}, cannot interpolate an ideal line")]
    ZeroDuration(NaiveDate),

    /// Remaining work below zero
    #[error("remaining work must be non-negative, got {0}")]
    NegativeRemaining(f64),

    /// Remaining work larger than the project scope
    #[error("remaining work {remaining} exceeds total scope {total_scope}")]
    ScopeExceeded {
        /// Reported remaining work
        remaining: f64,
        /// Planned total scope
        total_scope: f64,
    },

    /// Observation date outside the project window
    #[error("date {date} is outside the project window {start}..={end}")]
    OutOfWindow {
        /// Observation date
        date: NaiveDate,
        /// Window start
        start: NaiveDate,
        /// Window end
        end: NaiveDate,
    },
}
