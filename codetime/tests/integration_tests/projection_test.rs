// tests/integration_tests/projection_test.rs
use super::common::create_test_file;
use anyhow::Result;
use codetime::{Complexity, Rates, ScanFilter, project_all, scan_projects, totals};
use tempfile::TempDir;

#[test]
fn test_seventy_lines_is_one_slow_day() -> Result<()> {
    let base = TempDir::new()?;
    create_test_file(base.path(), "svc/gen.py", &"x = 1\n".repeat(70))?;

    let records = scan_projects(base.path(), &[String::from("svc")], &ScanFilter::new())?;
    let metrics = project_all(records, &Rates::default());

    let m = &metrics[0];
    assert_eq!(m.record.sloc, 70);
    // 70 lines / 10 lines per hour = 7 hours = one 7-hour day
    assert!((m.writing_hours_min - 7.0).abs() < f64::EPSILON);
    assert!((m.writing_days_min - 1.0).abs() < f64::EPSILON);
    Ok(())
}

#[test]
fn test_fleet_totals_are_additive() -> Result<()> {
    let base = TempDir::new()?;
    create_test_file(base.path(), "a/one.rs", &"line\n".repeat(600))?;
    create_test_file(base.path(), "b/two.rs", &"line\n".repeat(2500))?;
    create_test_file(base.path(), "c/three.rs", "line\n")?;

    let names = [String::from("a"), String::from("b"), String::from("c")];
    let records = scan_projects(base.path(), &names, &ScanFilter::new())?;
    let metrics = project_all(records, &Rates::default());
    let sums = totals(&metrics);

    let sloc_sum: u64 = metrics.iter().map(|m| m.record.sloc).sum();
    assert_eq!(sums.sloc, sloc_sum);
    assert_eq!(sums.sloc, 3101);

    let days_sum: f64 = metrics.iter().map(|m| m.reading_days_min).sum();
    assert!((sums.reading_days_min - days_sum).abs() < f64::EPSILON);

    assert_eq!(metrics[0].complexity, Complexity::Medium);
    assert_eq!(metrics[1].complexity, Complexity::High);
    assert_eq!(metrics[2].complexity, Complexity::Low);
    Ok(())
}

#[test]
fn test_pessimistic_scenario_dominates() -> Result<()> {
    let base = TempDir::new()?;
    create_test_file(base.path(), "svc/main.go", &"fmt.Println(1)\n".repeat(33))?;

    let records = scan_projects(base.path(), &[String::from("svc")], &ScanFilter::new())?;
    let metrics = project_all(records, &Rates::default());

    let m = &metrics[0];
    assert!(m.writing_days_min > m.writing_days_max);
    assert!(m.reading_hours_min > m.reading_hours_max);
    assert!(
        m.writing_hours_min > m.reading_hours_min,
        "Writing is always slower than reading"
    );
    Ok(())
}
