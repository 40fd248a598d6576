// src/report/csv.rs
use crate::models::ProjectMetrics;
use anyhow::{Context as _, Result};
use std::fs::File;
use std::io::{BufWriter, Write as _};
use std::path::Path;

/// Column order of the exported table. Changing this breaks downstream
/// consumers of the file.
pub const CSV_COLUMNS: [&str; 13] = [
    "microservice",
    "sloc",
    "word_count",
    "file",
    "writing_hours_min",
    "writing_hours_max",
    "writing_days_min",
    "writing_days_max",
    "reading_hours_min",
    "reading_hours_max",
    "reading_days_min",
    "reading_days_max",
    "complexity",
];

/// Writes the full metrics table as a comma-delimited file, header first.
///
/// Floats are written with `Display`, which round-trips through `parse`
/// without precision loss.
///
/// # Errors
///
/// This function may return an error if the file cannot be created or
/// written.
pub fn export_csv(path: &Path, metrics: &[ProjectMetrics]) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("Failed to create output file: {}", path.display()))?;
    let mut out = BufWriter::new(file);

    writeln!(out, "{}", CSV_COLUMNS.join(","))?;
    for m in metrics {
        writeln!(
            out,
            "{},{},{},{},{},{},{},{},{},{},{},{},{}",
            m.record.name,
            m.record.sloc,
            m.record.word_count,
            m.record.file_count,
            m.writing_hours_min,
            m.writing_hours_max,
            m.writing_days_min,
            m.writing_days_max,
            m.reading_hours_min,
            m.reading_hours_max,
            m.reading_days_min,
            m.reading_days_max,
            m.complexity
        )?;
    }

    out.flush()
        .with_context(|| format!("Failed to write output file: {}", path.display()))?;
    Ok(())
}
