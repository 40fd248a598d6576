// tests/integration_tests/export_test.rs
use super::common::setup_fleet;
use anyhow::Result;
use codetime::{CSV_COLUMNS, Rates, ScanFilter, export_csv, project_all, scan_projects};
use std::fs;

#[test]
fn test_full_pipeline_round_trip() -> Result<()> {
    let base = setup_fleet()?;
    let names = [String::from("api"), String::from("app")];

    let records = scan_projects(base.path(), &names, &ScanFilter::new())?;
    let metrics = project_all(records, &Rates::default());

    let out = base.path().join("analysis.csv");
    export_csv(&out, &metrics)?;

    let content = fs::read_to_string(&out)?;
    let mut lines = content.lines();
    assert_eq!(lines.next(), Some(CSV_COLUMNS.join(",").as_str()));

    for (line, m) in lines.zip(&metrics) {
        let fields: Vec<&str> = line.split(',').collect();
        assert_eq!(fields.len(), 13);

        assert_eq!(fields[0], m.record.name);
        assert_eq!(fields[1].parse::<u64>()?, m.record.sloc);
        assert_eq!(fields[2].parse::<u64>()?, m.record.word_count);
        assert_eq!(fields[3].parse::<u64>()?, m.record.file_count);

        // Every float column must survive the trip exactly
        let floats = [
            m.writing_hours_min,
            m.writing_hours_max,
            m.writing_days_min,
            m.writing_days_max,
            m.reading_hours_min,
            m.reading_hours_max,
            m.reading_days_min,
            m.reading_days_max,
        ];
        for (field, expected) in fields[4..12].iter().zip(floats) {
            assert_eq!(field.parse::<f64>()?, expected);
        }

        assert_eq!(fields[12], m.complexity.to_string());
    }
    Ok(())
}
