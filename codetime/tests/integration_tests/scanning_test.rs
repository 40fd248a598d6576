// tests/integration_tests/scanning_test.rs
use super::common::setup_fleet;
use anyhow::Result;
use codetime::{ScanFilter, scan_projects};

#[test]
fn test_fleet_scan() -> Result<()> {
    let base = setup_fleet()?;
    let names = [String::from("api"), String::from("app")];

    let records = scan_projects(base.path(), &names, &ScanFilter::new())?;
    assert_eq!(records.len(), 2, "One record per existing project");

    let api = &records[0];
    assert_eq!(api.name, "api");
    assert_eq!(api.file_count, 2, "The .svg file never qualifies");
    assert_eq!(api.sloc, 4);
    assert_eq!(api.word_count, 8);

    let app = &records[1];
    assert_eq!(app.name, "app");
    assert_eq!(app.file_count, 2);
    assert_eq!(app.sloc, 3);
    assert_eq!(app.word_count, 4);

    Ok(())
}

#[test]
fn test_missing_projects_shrink_the_table() -> Result<()> {
    let base = setup_fleet()?;
    let names = [
        String::from("api"),
        String::from("billing"),
        String::from("app"),
        String::from("search"),
    ];

    let records = scan_projects(base.path(), &names, &ScanFilter::new())?;
    assert_eq!(
        records.len(),
        2,
        "Table length is input count minus missing roots"
    );
    let order: Vec<&str> = records.iter().map(|r| r.name.as_str()).collect();
    assert_eq!(order, ["api", "app"], "Input order is preserved");
    Ok(())
}

#[test]
fn test_word_count_never_below_sloc() -> Result<()> {
    let base = setup_fleet()?;
    let names = [String::from("api"), String::from("app")];

    for record in scan_projects(base.path(), &names, &ScanFilter::new())? {
        assert!(
            record.word_count >= record.sloc,
            "Every non-blank line has at least one token"
        );
    }
    Ok(())
}

#[test]
fn test_scan_with_exclusions() -> Result<()> {
    let base = setup_fleet()?;
    let names = [String::from("api")];

    let mut filter = ScanFilter::new();
    filter.add_skip_pattern("*.sql")?;

    let records = scan_projects(base.path(), &names, &filter)?;
    assert_eq!(records[0].file_count, 1, "Skip pattern removes routes.sql");
    assert_eq!(records[0].sloc, 2);
    Ok(())
}
