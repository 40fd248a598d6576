// src/main.rs
use anyhow::Result;
use clap::Parser as _;

use codetime::cli::{Args, run};

fn main() -> Result<()> {
    let args = Args::parse();
    run(&args)
}
