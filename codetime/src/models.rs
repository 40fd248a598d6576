// src/models.rs
mod project_metrics;
mod project_record;
mod totals;

pub use project_metrics::{Complexity, ProjectMetrics};
pub use project_record::ProjectRecord;
pub use totals::Totals;
