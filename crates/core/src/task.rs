//! Task model - units of work that make up the project scope.

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::id::TaskId;
use crate::Time;

/// A unit of work tracked against the project scope.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: TaskId,

    /// Task name
    pub name: String,

    /// Points estimated for the task
    pub estimated_points: f64,

    /// Points it actually took, known once completed
    pub actual_points: Option<f64>,

    /// Rough complexity bucket, if assessed
    pub complexity: Option<Complexity>,

    /// Task status
    pub status: TaskStatus,

    /// When the task was completed
    pub completed_at: Option<Time>,
}

impl Task {
    /// Create a new task in the not-started state.
    pub fn new(name: impl Into<String>, estimated_points: f64) -> Self {
        Self {
            id: TaskId::new(),
            name: name.into(),
            estimated_points,
            actual_points: None,
            complexity: None,
            status: TaskStatus::NotStarted,
            completed_at: None,
        }
    }

    /// Set the complexity bucket.
    pub fn with_complexity(mut self, complexity: Complexity) -> Self {
        self.complexity = Some(complexity);
        self
    }

    /// Mark the task completed.
    ///
    /// When no actual point count is given the estimate stands in for it.
    pub fn complete(&mut self, actual_points: Option<f64>, when: Time) {
        self.status = TaskStatus::Completed;
        self.actual_points = Some(actual_points.unwrap_or(self.estimated_points));
        self.completed_at = Some(when);
    }
}

/// Task status.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TaskStatus {
    /// Work has not begun
    NotStarted,
    /// Work is underway
    InProgress,
    /// Work is done
    Completed,
}

/// Rough complexity buckets used to estimate story points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Complexity {
    /// 1-3 points
    Easy,
    /// 3-8 points
    Medium,
    /// 8-13 points
    Hard,
}

impl Complexity {
    /// Inclusive point range for this bucket.
    pub fn point_range(&self) -> (u32, u32) {
        match self {
            Complexity::Easy => (1, 3),
            Complexity::Medium => (3, 8),
            Complexity::Hard => (8, 13),
        }
    }

    /// Draw a point estimate from this bucket's range.
    pub fn estimate_points(&self) -> f64 {
        let (min, max) = self.point_range();
        rand::thread_rng().gen_range(min..=max) as f64
    }

    /// Get string representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            Complexity::Easy => "easy",
            Complexity::Medium => "medium",
            Complexity::Hard => "hard",
        }
    }
}

impl std::str::FromStr for Complexity {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "easy" => Ok(Complexity::Easy),
            "medium" => Ok(Complexity::Medium),
            "hard" => Ok(Complexity::Hard),
            other => Err(format!(
                "invalid complexity '{other}', choose from: easy, medium, hard"
            )),
        }
    }
}
