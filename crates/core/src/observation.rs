//! Actual-progress observations entered during a session.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::Time;

/// A single actual-progress data point.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Observation {
    /// Date the remaining work was measured
    pub date: NaiveDate,

    /// Work still remaining on that date
    pub remaining: f64,

    /// Free-form note on what happened
    pub note: Option<String>,

    /// When the observation was entered
    pub recorded_at: Time,
}

impl Observation {
    /// Create an observation stamped with the current time.
    pub fn new(date: NaiveDate, remaining: f64, note: Option<String>) -> Self {
        Self {
            date,
            remaining,
            note,
            recorded_at: chrono::Utc::now(),
        }
    }
}
