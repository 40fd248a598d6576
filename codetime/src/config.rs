// src/config.rs
use anyhow::{Context as _, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

/// Productivity assumptions used by the time projection.
///
/// Speeds are lines of code per hour. The `_min` constants are the slow
/// scenario, so dividing by them yields the larger (pessimistic) duration.
/// Defaults follow McConnell's 10-50 lines/hour writing range and the
/// 100-200 lines/hour reading range for experienced developers.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Rates {
    pub work_hours_per_day: f64,
    pub work_days_per_week: f64,
    pub work_weeks_per_year: f64,
    pub write_speed_min: f64,
    pub write_speed_max: f64,
    pub read_speed_min: f64,
    pub read_speed_max: f64,
}

impl Default for Rates {
    fn default() -> Self {
        Self {
            work_hours_per_day: 7.0,
            work_days_per_week: 5.0,
            work_weeks_per_year: 52.0,
            write_speed_min: 10.0,
            write_speed_max: 50.0,
            read_speed_min: 100.0,
            read_speed_max: 200.0,
        }
    }
}

impl Rates {
    #[must_use]
    pub fn weeks(&self, days: f64) -> f64 {
        days / self.work_days_per_week
    }

    #[must_use]
    pub fn years(&self, days: f64) -> f64 {
        days / (self.work_days_per_week * self.work_weeks_per_year)
    }

    #[must_use]
    pub fn months(&self, days: f64) -> f64 {
        self.years(days) * 12.0
    }
}

/// A run profile loaded from a TOML file: where to scan, which project
/// folders to include, and optional overrides for the productivity rates.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Profile {
    pub base_path: PathBuf,
    pub projects: Vec<String>,
    #[serde(default)]
    pub rates: Rates,
}

/// Loads a run profile from a TOML file.
///
/// # Errors
///
/// This function may return an error if:
/// * The file cannot be read
/// * The file is not valid TOML or is missing required keys
pub fn load_profile(path: &Path) -> Result<Profile> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read profile: {}", path.display()))?;
    toml::from_str(&content)
        .with_context(|| format!("Failed to parse profile: {}", path.display()))
}
