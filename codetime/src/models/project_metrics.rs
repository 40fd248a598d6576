// src/models/project_metrics.rs
use crate::models::ProjectRecord;
use std::fmt;

/// Complexity tier derived from a project's non-blank line count.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Complexity {
    Low,
    Medium,
    High,
}

impl Complexity {
    /// Fixed threshold rule: under 500 lines is Low, up to and including
    /// 2000 is Medium, anything above is High.
    #[must_use]
    pub const fn from_sloc(sloc: u64) -> Self {
        if sloc < 500 {
            Self::Low
        } else if sloc <= 2000 {
            Self::Medium
        } else {
            Self::High
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "Low",
            Self::Medium => "Medium",
            Self::High => "High",
        }
    }
}

impl fmt::Display for Complexity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A scanned record augmented with derived time columns.
///
/// The `_min` fields use the slow-speed constants, so they hold the larger
/// (pessimistic) durations. Naming follows the speed constant that produced
/// the value, not the size of the value.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectMetrics {
    pub record: ProjectRecord,
    pub writing_hours_min: f64,
    pub writing_hours_max: f64,
    pub writing_days_min: f64,
    pub writing_days_max: f64,
    pub reading_hours_min: f64,
    pub reading_hours_max: f64,
    pub reading_days_min: f64,
    pub reading_days_max: f64,
    pub complexity: Complexity,
}
