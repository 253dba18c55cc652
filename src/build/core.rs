//! The four build mode drivers.
//!
//! Every driver follows the same skeleton: ensure the output directory
//! exists, apply mode flags, discover sources if a source directory is
//! configured, synthesize the invocation, print it, run it, and map the exit
//! status. The external process is waited on synchronously with no timeout.
//!
//! Flags and discovered sources accumulate across repeated driver calls on
//! one environment; start a fresh [`BuildEnv`] to reset between targets.

use crate::env::BuildEnv;
use colored::*;
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Output root for every artifact, relative to the working directory.
pub const BUILD_DIR: &str = "Build";

/// Error taxonomy for the build drivers.
#[derive(Debug)]
pub enum BuildError {
    /// The compiler or archiver exited non-zero. Carries the command that
    /// failed; diagnostics are whatever the process printed itself.
    Compiler(String),
    /// Internal failure: the process could not be spawned, or the build
    /// directory could not be created or read.
    BuildSystem(String),
}

impl std::fmt::Display for BuildError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            BuildError::Compiler(cmd) => write!(f, "Compiler failed: {}", cmd),
            BuildError::BuildSystem(msg) => write!(f, "Build system error: {}", msg),
        }
    }
}

impl std::error::Error for BuildError {}

impl From<std::io::Error> for BuildError {
    fn from(e: std::io::Error) -> Self {
        BuildError::BuildSystem(e.to_string())
    }
}

/// Builds an executable at `Build/<output_name>`.
pub fn build_executable(
    env: &mut BuildEnv,
    output_name: &str,
    release: bool,
) -> Result<(), BuildError> {
    run_synthesized(env, output_name, release, &[], "executable")
}

/// Builds a shared library at `Build/<output_name>`.
pub fn build_shared(env: &mut BuildEnv, output_name: &str, release: bool) -> Result<(), BuildError> {
    run_synthesized(env, output_name, release, &["-shared"], "shared library")
}

/// Compiles a relocatable object file at `Build/<output_name>`.
pub fn build_object(env: &mut BuildEnv, output_name: &str, release: bool) -> Result<(), BuildError> {
    run_synthesized(env, output_name, release, &["-c"], "object file")
}

/// Builds a static archive at `Build/<output_name>`.
///
/// Unlike the single-command modes, every accumulated argument is treated as
/// a source file and compiled individually to `Build/file<index>.o`; the
/// first failing compile aborts and the archiver never runs. The archive then
/// collects every `.o` present in the build directory, not just the ones
/// produced by this call, so objects left by an earlier build in the same
/// directory end up in the archive too.
pub fn build_static(env: &mut BuildEnv, output_name: &str, release: bool) -> Result<(), BuildError> {
    ensure_build_dir()?;
    if let Some(dir) = env.source_dir().map(Path::to_path_buf) {
        env.add_sources_from_dir(&dir);
    }

    let mode_flags = mode_flags(release);
    for (index, src) in env.args().iter().enumerate() {
        let obj = Path::new(BUILD_DIR).join(format!("file{}.o", index));
        let rendered = format!(
            "{} {} -c {} -o {}",
            env.compiler(),
            mode_flags.join(" "),
            src,
            obj.display()
        );
        println!("   {} Compiling: {}", "⚙".blue(), rendered);

        let status = Command::new(env.compiler())
            .args(mode_flags)
            .arg("-c")
            .arg(src)
            .arg("-o")
            .arg(&obj)
            .status()?;
        if !status.success() {
            return Err(BuildError::Compiler(rendered));
        }
    }

    let archive = Path::new(BUILD_DIR).join(output_name);
    let objects = collect_objects()?;
    let rendered = format!(
        "ar rcs {} {}",
        archive.display(),
        objects
            .iter()
            .map(|o| o.display().to_string())
            .collect::<Vec<_>>()
            .join(" ")
    );
    println!("{} Creating static library: {}", "📦".blue(), rendered);

    let status = Command::new("ar")
        .arg("rcs")
        .arg(&archive)
        .args(&objects)
        .status()?;
    if status.success() {
        Ok(())
    } else {
        Err(BuildError::Compiler(rendered))
    }
}

/// Idempotent creation of the output root. Existing contents are untouched.
fn ensure_build_dir() -> Result<(), BuildError> {
    fs::create_dir_all(BUILD_DIR)?;
    Ok(())
}

fn mode_flags(release: bool) -> &'static [&'static str] {
    if release { &["-O2"] } else { &["-g", "-O0"] }
}

/// Appends debug/optimization flags for the selected mode.
pub fn apply_build_mode(env: &mut BuildEnv, release: bool) {
    for flag in mode_flags(release) {
        env.add_arg(*flag);
    }
}

/// Common skeleton for the single-command modes.
fn run_synthesized(
    env: &mut BuildEnv,
    output_name: &str,
    release: bool,
    extra_flags: &[&str],
    label: &str,
) -> Result<(), BuildError> {
    ensure_build_dir()?;
    apply_build_mode(env, release);
    for flag in extra_flags {
        env.add_arg(*flag);
    }
    if let Some(dir) = env.source_dir().map(Path::to_path_buf) {
        env.add_sources_from_dir(&dir);
    }

    let output = Path::new(BUILD_DIR).join(output_name);
    let rendered = env.render_command(&output);
    println!("{} Building {}: {}", "⚙".blue(), label, rendered);

    let status = env.command(&output).status()?;
    if status.success() {
        Ok(())
    } else {
        Err(BuildError::Compiler(rendered))
    }
}

/// Every `.o` currently in the build directory, stale ones included.
fn collect_objects() -> Result<Vec<PathBuf>, BuildError> {
    let mut objects = Vec::new();
    for entry in fs::read_dir(BUILD_DIR)? {
        let path = entry?.path();
        if path.extension().is_some_and(|ext| ext == "o") {
            objects.push(path);
        }
    }
    objects.sort();
    Ok(objects)
}
