// src/lib.rs
pub mod cli;
pub mod config;
pub mod core;
pub mod models;
pub mod report;
pub mod utils;

pub use cli::{Args, run};
pub use config::{Profile, Rates, load_profile};
pub use crate::core::extensions::{FileKind, classify};
pub use crate::core::filter::ScanFilter;
pub use crate::core::projector::{project, project_all, totals};
pub use crate::core::scanner::{scan_project, scan_projects};
pub use models::{Complexity, ProjectMetrics, ProjectRecord, Totals};
pub use report::csv::{CSV_COLUMNS, export_csv};
