// src/core/filter.rs
use crate::utils::is_hidden;
use anyhow::{Context as _, Result};
use glob::Pattern;

/// Optional exclusions applied during a scan.
///
/// Everything here defaults to off: a fresh filter lets every file through,
/// which is the behavior the estimates are calibrated against.
#[derive(Debug, Default)]
pub struct ScanFilter {
    exclude_dirs: Vec<String>,
    skip_patterns: Vec<Pattern>,
    skip_hidden: bool,
}

impl ScanFilter {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            exclude_dirs: Vec::new(),
            skip_patterns: Vec::new(),
            skip_hidden: false,
        }
    }

    /// Adds directory names to exclude wherever they appear in the tree.
    pub fn exclude_dirs<I, S>(&mut self, dirs: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        for dir in dirs {
            let dir = dir.into();
            if !dir.is_empty() {
                self.exclude_dirs.push(dir);
            }
        }
    }

    /// Compiles and adds a glob pattern; matching paths are skipped.
    ///
    /// # Errors
    ///
    /// Returns an error if the pattern is not valid glob syntax.
    pub fn add_skip_pattern(&mut self, pattern: &str) -> Result<()> {
        let compiled =
            Pattern::new(pattern).with_context(|| format!("Invalid skip pattern: {pattern}"))?;
        self.skip_patterns.push(compiled);
        Ok(())
    }

    /// Also skip hidden files and directories (dotfiles).
    pub const fn skip_hidden(&mut self, skip: bool) {
        self.skip_hidden = skip;
    }

    /// Whether a walk entry should be left out of the scan.
    #[must_use]
    pub fn excludes(&self, entry: &walkdir::DirEntry) -> bool {
        if self.skip_hidden && is_hidden(entry) {
            return true;
        }

        if let Some(path_str) = entry.path().to_str() {
            for dir in &self.exclude_dirs {
                if entry.file_type().is_dir() && entry.file_name().to_str() == Some(dir.as_str()) {
                    return true;
                }
                if path_str.contains(&format!("/{dir}/")) {
                    return true;
                }
            }
        }

        let file_name = entry.file_name().to_string_lossy();
        let path_str = entry.path().to_string_lossy();
        self.skip_patterns
            .iter()
            .any(|p| p.matches(&path_str) || p.matches(&file_name))
    }
}
