// src/report/table.rs
use crate::models::ProjectMetrics;
use crate::utils::format_thousands;

/// Prints the compact per-project summary table.
pub fn print_summary_table(metrics: &[ProjectMetrics]) {
    println!("\nPer-project summary:\n");
    println!(
        "{:<24} {:>12} {:>12} {:>8}  {:<8}",
        "Microservice", "SLOC", "Words", "Files", "Complexity"
    );
    println!("{:-<70}", "");
    for m in metrics {
        println!(
            "{:<24} {:>12} {:>12} {:>8}  {:<8}",
            m.record.name,
            format_thousands(m.record.sloc),
            format_thousands(m.record.word_count),
            format_thousands(m.record.file_count),
            m.complexity.as_str()
        );
    }
}
