// src/core.rs
pub mod extensions;
pub mod filter;
pub mod projector;
pub mod scanner;
