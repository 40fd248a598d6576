// src/report.rs
pub mod csv;
pub mod narrative;
pub mod table;
