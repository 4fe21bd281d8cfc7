//! Summary - scalar progress view derived on every render.

use serde::{Deserialize, Serialize};

/// Scalar progress summary over the current observations and plan.
///
/// Read-only; recomputed on every render, never mutated in place.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Summary {
    /// Fraction of the scope burned, in [0, 1]
    pub percent_complete: f64,

    /// Days since the project started (negative before the start date)
    pub days_elapsed: i64,

    /// Days until the project ends, floored at 0
    pub days_remaining: i64,

    /// Remaining work at the latest observation, if any
    pub latest_remaining: Option<f64>,

    /// Planned total scope
    pub total_scope: f64,

    /// Where the project stands against the ideal line
    pub status: TrackingStatus,

    /// Percent deviation of actual vs estimated task points, if tasks exist
    pub estimate_variance: Option<f64>,
}

impl Summary {
    /// Placeholder summary for a store with no observations yet.
    pub fn no_data(total_scope: f64, days_elapsed: i64, days_remaining: i64) -> Self {
        Self {
            percent_complete: 0.0,
            days_elapsed,
            days_remaining,
            latest_remaining: None,
            total_scope,
            status: TrackingStatus::NoData,
            estimate_variance: None,
        }
    }
}

/// Where actual progress stands relative to the ideal line.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TrackingStatus {
    /// Less work remains than the ideal line predicts
    Ahead,
    /// Actual remaining matches the ideal line
    OnTrack,
    /// More work remains than the ideal line predicts
    Behind,
    /// No observations recorded yet
    NoData,
}

impl TrackingStatus {
    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            TrackingStatus::Ahead => "ahead",
            TrackingStatus::OnTrack => "on-track",
            TrackingStatus::Behind => "behind",
            TrackingStatus::NoData => "no data",
        }
    }
}

impl std::fmt::Display for TrackingStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}
