// src/models/totals.rs

/// Fleet-wide sums across every scanned project.
///
/// Only the day-level metrics are summed directly; weeks, months and years
/// are converted from these via `Rates` when reported.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Totals {
    pub sloc: u64,
    pub word_count: u64,
    pub file_count: u64,
    pub writing_days_min: f64,
    pub writing_days_max: f64,
    pub reading_days_min: f64,
    pub reading_days_max: f64,
}

impl Totals {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            sloc: 0,
            word_count: 0,
            file_count: 0,
            writing_days_min: 0.0,
            writing_days_max: 0.0,
            reading_days_min: 0.0,
            reading_days_max: 0.0,
        }
    }
}
