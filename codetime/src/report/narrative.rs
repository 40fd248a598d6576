// src/report/narrative.rs
use crate::config::Rates;
use crate::models::{ProjectMetrics, Totals};
use crate::utils::format_thousands;

/// Prints the assumptions the estimates are based on.
pub fn print_banner(rates: &Rates) {
    println!("Developer effort analysis.");
    println!("What are the estimates based on?\n");
    println!(
        "  WORK_HOURS_PER_DAY = {}: a standard 8-hour day minus lunch and short breaks.",
        rates.work_hours_per_day
    );
    println!(
        "  WRITE_SPEED = {}-{} lines/hour: productivity studies put new-code output in",
        rates.write_speed_min, rates.write_speed_max
    );
    println!("    this range depending on project complexity, design and testing overhead.");
    println!("    Source: McConnell, S. (2004). Code Complete.");
    println!(
        "  READ_SPEED = {}-{} lines/hour: reading is faster than writing; experienced",
        rates.read_speed_min, rates.read_speed_max
    );
    println!("    developers review 100-200 lines/hour including architecture analysis.");
    println!("    Source: Lettner, D. (2018). Measuring developer productivity.\n");
}

/// Prints the writing-time breakdown for every project, then fleet totals
/// for both writing and reading under each scenario.
pub fn print_time_breakdown(metrics: &[ProjectMetrics], totals: &Totals, rates: &Rates) {
    println!("\nTime analysis per project:\n");

    for m in metrics {
        println!("Microservice: {}", m.record.name);
        println!("  - Pessimistic (slow writing speed):");
        println!(
            "    * Years: {:.2} ({:.2} months, {:.0} days)",
            rates.years(m.writing_days_min),
            rates.months(m.writing_days_min),
            m.writing_days_min
        );
        println!("  - Optimistic (fast writing speed):");
        println!(
            "    * Years: {:.2} ({:.2} months, {:.0} days)",
            rates.years(m.writing_days_max),
            rates.months(m.writing_days_max),
            m.writing_days_max
        );
        println!();
    }

    println!("\nOverall analysis for the whole fleet:");
    println!("  - Total lines of code (SLOC): {}", format_thousands(totals.sloc));
    println!("  - Total words: {}", format_thousands(totals.word_count));
    println!(
        "  - Writing time (pessimistic): {:.2} years ({:.2} months, {:.0} days)",
        rates.years(totals.writing_days_min),
        rates.months(totals.writing_days_min),
        totals.writing_days_min
    );
    println!(
        "  - Writing time (optimistic): {:.2} years ({:.2} months, {:.0} days)",
        rates.years(totals.writing_days_max),
        rates.months(totals.writing_days_max),
        totals.writing_days_max
    );
    println!(
        "  - Reading time (pessimistic): {:.2} years ({:.2} months, {:.0} days)",
        rates.years(totals.reading_days_min),
        rates.months(totals.reading_days_min),
        totals.reading_days_min
    );
    println!(
        "  - Reading time (optimistic): {:.2} years ({:.2} months, {:.0} days)\n",
        rates.years(totals.reading_days_max),
        rates.months(totals.reading_days_max),
        totals.reading_days_max
    );
}
