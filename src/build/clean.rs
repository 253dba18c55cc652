//! Build artifact cleanup.
//!
//! This module provides the `cf clean` command for removing build outputs.

use anyhow::{Context, Result};
use colored::*;

use std::fs;
use std::path::Path;

use super::BUILD_DIR;

pub fn clean() -> Result<()> {
    if Path::new(BUILD_DIR).exists() {
        fs::remove_dir_all(BUILD_DIR).context("Failed to remove build directory")?;
        println!("{} Build directory cleaned", "✓".green());
    } else {
        println!("{} Nothing to clean", "!".yellow());
    }
    Ok(())
}
