// src/core/projector.rs
use crate::config::Rates;
use crate::models::{Complexity, ProjectMetrics, ProjectRecord, Totals};

/// Derives the time columns and complexity tier for one scanned record.
///
/// The formulas divide by the like-named speed constant: `_min` columns use
/// the slow speed and therefore hold the larger duration. Every derived
/// value is a pure function of the line count and the rates.
#[must_use]
#[expect(clippy::as_conversions, reason = "Precision not critical")]
#[expect(clippy::cast_precision_loss, reason = "Precision not critical")]
pub fn project(record: ProjectRecord, rates: &Rates) -> ProjectMetrics {
    let sloc = record.sloc as f64;

    let writing_hours_min = sloc / rates.write_speed_min;
    let writing_hours_max = sloc / rates.write_speed_max;
    let reading_hours_min = sloc / rates.read_speed_min;
    let reading_hours_max = sloc / rates.read_speed_max;

    let complexity = Complexity::from_sloc(record.sloc);

    ProjectMetrics {
        writing_hours_min,
        writing_hours_max,
        writing_days_min: writing_hours_min / rates.work_hours_per_day,
        writing_days_max: writing_hours_max / rates.work_hours_per_day,
        reading_hours_min,
        reading_hours_max,
        reading_days_min: reading_hours_min / rates.work_hours_per_day,
        reading_days_max: reading_hours_max / rates.work_hours_per_day,
        complexity,
        record,
    }
}

/// Derives metrics for every record, preserving input order.
#[must_use]
pub fn project_all(records: Vec<ProjectRecord>, rates: &Rates) -> Vec<ProjectMetrics> {
    records
        .into_iter()
        .map(|record| project(record, rates))
        .collect()
}

/// Sums the counts and day metrics across the whole fleet.
#[must_use]
pub fn totals(metrics: &[ProjectMetrics]) -> Totals {
    let mut sums = Totals::new();
    for m in metrics {
        sums.sloc = sums.sloc.saturating_add(m.record.sloc);
        sums.word_count = sums.word_count.saturating_add(m.record.word_count);
        sums.file_count = sums.file_count.saturating_add(m.record.file_count);
        sums.writing_days_min += m.writing_days_min;
        sums.writing_days_max += m.writing_days_max;
        sums.reading_days_min += m.reading_days_min;
        sums.reading_days_max += m.reading_days_max;
    }
    sums
}
