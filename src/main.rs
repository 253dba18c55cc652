//! # cforge CLI Entry Point
//!
//! This is the main executable for the `cf` command-line tool.
//! It parses CLI arguments using clap and routes commands to the build
//! drivers and utilities in the library.
//!
//! ## Command Structure
//!
//! - **Build**: `build`, `shared`, `static`, `obj`
//! - **Project**: `init`, `clean`
//! - **Utility**: `copy`

use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};

use cforge::build;
use cforge::config;
use cforge::copy;
use cforge::env::BuildEnv;

#[derive(Parser)]
#[command(name = "cf")]
#[command(about = "The minimal C build orchestrator", version = env!("CARGO_PKG_VERSION"))]
#[command(long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build an executable from the configured project
    Build {
        /// Build with optimizations instead of debug info
        #[arg(long)]
        release: bool,
        /// Output name (defaults to the package name)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Build a shared library
    Shared {
        #[arg(long)]
        release: bool,
        /// Output name (defaults to lib<package>.so)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Build a static archive, compiling each source separately
    Static {
        #[arg(long)]
        release: bool,
        /// Output name (defaults to lib<package>.a)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Compile a single relocatable object file
    Obj {
        #[arg(long)]
        release: bool,
        /// Output name (defaults to <package>.o)
        #[arg(long, short)]
        output: Option<String>,
    },
    /// Mirror a directory tree, byte for byte
    Copy {
        src: PathBuf,
        dest: PathBuf,
    },
    /// Remove the Build directory
    Clean,
    /// Initialize a new cforge.toml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match &cli.command {
        Commands::Build { release, output } => {
            let (mut env, name) = load_project(output)?;
            finish(build::build_executable(&mut env, &name, *release))
        }
        Commands::Shared { release, output } => {
            let (mut env, name) = load_project_with(output, |pkg| format!("lib{}.so", pkg))?;
            finish(build::build_shared(&mut env, &name, *release))
        }
        Commands::Static { release, output } => {
            let (mut env, name) = load_project_with(output, |pkg| format!("lib{}.a", pkg))?;
            finish(build::build_static(&mut env, &name, *release))
        }
        Commands::Obj { release, output } => {
            let (mut env, name) = load_project_with(output, |pkg| format!("{}.o", pkg))?;
            finish(build::build_object(&mut env, &name, *release))
        }
        Commands::Copy { src, dest } => {
            copy::copy_dir(src, dest)?;
            println!(
                "{} Copied {} -> {}",
                "✓".green(),
                src.display(),
                dest.display()
            );
            Ok(())
        }
        Commands::Clean => build::clean(),
        Commands::Init => init_project(),
    }
}

fn load_project(output: &Option<String>) -> Result<(BuildEnv, String)> {
    load_project_with(output, |pkg| pkg.to_string())
}

fn load_project_with(
    output: &Option<String>,
    default_name: impl Fn(&str) -> String,
) -> Result<(BuildEnv, String)> {
    let config = config::load_config()?;
    let name = output
        .clone()
        .unwrap_or_else(|| default_name(&config.package.name));
    Ok((config.to_env(), name))
}

fn finish(result: Result<(), build::BuildError>) -> Result<()> {
    match result {
        Ok(()) => {
            println!("{} Build finished", "✓".green());
            Ok(())
        }
        Err(e) => {
            println!("{} {}", "x".red(), e);
            std::process::exit(1);
        }
    }
}

fn init_project() -> Result<()> {
    if Path::new(config::CONFIG_FILE).exists() {
        println!(
            "{} Error: Project already initialized ({} exists).",
            "x".red(),
            config::CONFIG_FILE
        );
        return Ok(());
    }

    let dir_name = std::env::current_dir()?
        .file_name()
        .map(|n| n.to_string_lossy().to_string())
        .unwrap_or_else(|| "app".to_string());

    let toml_content = format!(
        r#"[package]
name = "{dir_name}"
version = "0.1.0"

[build]
compiler = "cc"
source_dir = "src"
include_dirs = []
flags = []
"#
    );
    fs::write(config::CONFIG_FILE, toml_content)?;

    println!(
        "{} Initialized cforge project in current directory.",
        "✓".green()
    );
    Ok(())
}
