
use crate::core::extensions::classify;
use crate::core::filter::ScanFilter;
use crate::models::ProjectRecord;
use anyhow::Result;
use std::env;
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Scans one project subtree and accumulates its counts.
///
/// Every qualifying file (recognized code or document extension, not caught
/// by the filter) is read as UTF-8 text; non-blank lines and
/// whitespace-delimited words are tallied across the whole subtree. A file
/// that cannot be read or decoded is skipped and the scan continues.
///
/// # Arguments
///
/// * `base` - The directory containing the project folders
/// * `name` - The project folder name, also used as the record identifier
/// * `filter` - Exclusions to apply during the walk
///
/// # Returns
///
/// * `Ok(Some(ProjectRecord))` - Counts for the subtree under `base/name`
/// * `Ok(None)` - The project folder does not exist (skipped, by design)
///
/// # Errors
///
/// This function may return an error if the current directory cannot be
/// resolved while absolutizing a relative base path.
pub fn scan_project(base: &Path, name: &str, filter: &ScanFilter) -> Result<Option<ProjectRecord>> {
    let root = if base.is_absolute() {
        base.join(name)
    } else {
        env::current_dir()?.join(base).join(name)
    };

    if !root.exists() {
        return Ok(None);
    }

    let mut record = ProjectRecord::new(name.to_owned());

    for entry in WalkDir::new(&root)
        .follow_links(true)
        .into_iter()
        .filter_entry(|e| !filter.excludes(e))
    {
        // Unreadable directories must not abort the run
        let Ok(entry) = entry else { continue };
        if !entry.file_type().is_file() {
            continue;
        }

        let Some(file_name) = entry.file_name().to_str() else {
            continue;
        };
        if classify(file_name).is_none() {
            continue;
        }

        // Undecodable or unreadable files are skipped, never fatal
        let Ok(content) = fs::read_to_string(entry.path()) else {
            continue;
        };

        let (sloc, words) = count_lines_and_words(&content);
        record.add_file(sloc, words);
    }

    Ok(Some(record))
}

/// Scans every named project under `base`, in input order.
///
/// Projects whose folder does not exist produce no record, so the output
/// may be shorter than `names`.
///
/// # Errors
///
/// This function may return an error if the current directory cannot be
/// resolved while absolutizing a relative base path.
pub fn scan_projects(
    base: &Path,
    names: &[String],
    filter: &ScanFilter,
) -> Result<Vec<ProjectRecord>> {
    let mut records = Vec::with_capacity(names.len());
    for name in names {
        if let Some(record) = scan_project(base, name, filter)? {
            records.push(record);
        }
    }
    Ok(records)
}

/// Counts non-blank lines and whitespace-separated words in one file's text.
fn count_lines_and_words(content: &str) -> (u64, u64) {
    let mut sloc: u64 = 0;
    let mut words: u64 = 0;
    for line in content.lines() {
        if !line.trim().is_empty() {
            sloc = sloc.saturating_add(1);
        }
        let line_words = u64::try_from(line.split_whitespace().count()).unwrap_or(u64::MAX);
        words = words.saturating_add(line_words);
    }
    (sloc, words)
}
