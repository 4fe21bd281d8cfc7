//! Burndown core data models.
//!
//! This crate defines the data structures shared by the progress,
//! chart, and import layers.

#![warn(missing_docs)]

// Core identities
mod id;

// Plan and progress input
mod plan;
mod observation;

// Task tracking
mod task;

// Derived views
mod summary;

// Validation
mod error;

// Re-exports
pub use id::*;

pub use plan::{IdealPoint, ProjectPlan};
pub use observation::Observation;
pub use task::{Complexity, Task, TaskStatus};
pub use summary::{Summary, TrackingStatus};
pub use error::ValidationError;

/// Timestamp type
pub type Time = chrono::DateTime<chrono::Utc>;
