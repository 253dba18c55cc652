//! Build environment: the argument accumulator and command synthesizer.
//!
//! A [`BuildEnv`] holds everything one build session needs: the compiler to
//! invoke, an ordered list of argument tokens, and an optional directory whose
//! sources are discovered automatically. Argument order is significant and
//! preserved exactly as appended - it determines the textual order of the
//! final command, which matters for compilers sensitive to library/object
//! ordering.
//!
//! ## Example
//!
//! ```rust
//! use cforge::env::BuildEnv;
//! use std::path::Path;
//!
//! let mut env = BuildEnv::new("cc");
//! env.add_arg("-Wall");
//! env.add_include_dir("include");
//! assert_eq!(env.render_command(Path::new("Build/app")), "cc -Wall -Iinclude -o Build/app");
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

/// File extension recognized as a compiler source during directory scans.
pub const SOURCE_EXT: &str = "c";

/// Mutable state of one build session.
///
/// Exclusively owned by the caller; the drivers in [`crate::build`] take it
/// by `&mut` so a single session can never be shared between threads.
#[derive(Debug, Default)]
pub struct BuildEnv {
    compiler: String,
    source_dir: Option<PathBuf>,
    args: Vec<String>,
    last_cmd: String,
}

impl BuildEnv {
    pub fn new(compiler: impl Into<String>) -> Self {
        Self {
            compiler: compiler.into(),
            ..Default::default()
        }
    }

    /// Replaces the compiler program for subsequent builds.
    pub fn select_compiler(&mut self, compiler: impl Into<String>) {
        self.compiler = compiler.into();
    }

    pub fn compiler(&self) -> &str {
        &self.compiler
    }

    /// Sets the directory scanned for sources by the build drivers.
    pub fn set_source_dir(&mut self, dir: impl Into<PathBuf>) {
        self.source_dir = Some(dir.into());
    }

    pub fn source_dir(&self) -> Option<&Path> {
        self.source_dir.as_deref()
    }

    /// Appends one token. Tokens are never reordered or deduplicated.
    pub fn add_arg(&mut self, arg: impl Into<String>) {
        self.args.push(arg.into());
    }

    /// Appends an include directory as a single `-I<path>` token.
    pub fn add_include_dir(&mut self, path: impl AsRef<Path>) {
        self.add_arg(format!("-I{}", path.as_ref().display()));
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn arg_count(&self) -> usize {
        self.args.len()
    }

    /// The most recently synthesized invocation, for introspection.
    /// Empty until a command has been rendered.
    pub fn last_command(&self) -> &str {
        &self.last_cmd
    }

    /// Scans the immediate entries of `dir` (no recursion) and appends every
    /// regular file carrying the source extension, in the filesystem's native
    /// enumeration order. The order is unstable; callers must not depend on it.
    ///
    /// An unreadable directory appends nothing - builds without a source
    /// directory still proceed using only explicitly-added files.
    pub fn add_sources_from_dir(&mut self, dir: &Path) {
        let Ok(entries) = fs::read_dir(dir) else {
            return;
        };
        for entry in entries.filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.is_file() && path.extension().is_some_and(|ext| ext == SOURCE_EXT) {
                self.add_arg(path.to_string_lossy());
            }
        }
    }

    /// Renders `<compiler> <args...> -o <output>` with single spaces, in exact
    /// append order, and records it for [`Self::last_command`].
    ///
    /// The string is for logging and inspection. No quoting is applied; tokens
    /// are caller-trusted. Execution goes through [`Self::command`], which
    /// passes the argument vector to the process directly, so whitespace in
    /// tokens never splits or injects at the shell level.
    pub fn render_command(&mut self, output: &Path) -> String {
        let mut cmd = self.compiler.clone();
        for arg in &self.args {
            cmd.push(' ');
            cmd.push_str(arg);
        }
        cmd.push_str(" -o ");
        cmd.push_str(&output.to_string_lossy());
        self.last_cmd = cmd.clone();
        cmd
    }

    /// Builds the equivalent [`Command`], ready to spawn.
    pub fn command(&self, output: &Path) -> Command {
        let mut cmd = Command::new(&self.compiler);
        cmd.args(&self.args);
        cmd.arg("-o").arg(output);
        cmd
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    #[test]
    fn test_args_keep_append_order() {
        let mut env = BuildEnv::new("cc");
        env.add_arg("-Wall");
        env.add_arg("b.c");
        env.add_arg("a.c");
        env.add_arg("-lm");
        assert_eq!(env.args(), ["-Wall", "b.c", "a.c", "-lm"]);
        assert_eq!(env.arg_count(), 4);

        let cmd = env.render_command(Path::new("Build/app"));
        assert_eq!(cmd, "cc -Wall b.c a.c -lm -o Build/app");
    }

    #[test]
    fn test_include_dir_matches_raw_flag() {
        let mut with_helper = BuildEnv::new("cc");
        with_helper.add_include_dir("foo");

        let mut with_raw = BuildEnv::new("cc");
        with_raw.add_arg("-Ifoo");

        assert_eq!(with_helper.args(), with_raw.args());
    }

    #[test]
    fn test_render_with_no_args() {
        let mut env = BuildEnv::new("cc");
        let out = Path::new("Build").join("app");
        let cmd = env.render_command(&out);
        assert_eq!(cmd, format!("cc -o {}", out.display()));
        assert_eq!(env.last_command(), cmd);
    }

    #[test]
    fn test_render_overwrites_last_command() {
        let mut env = BuildEnv::new("cc");
        env.render_command(Path::new("Build/one"));
        let second = env.render_command(Path::new("Build/two"));
        assert_eq!(env.last_command(), second);
    }

    #[test]
    fn test_structured_command_mirrors_rendered_string() {
        let mut env = BuildEnv::new("cc");
        env.add_arg("main.c");
        env.add_include_dir("inc");

        let cmd = env.command(Path::new("Build/app"));
        let args: Vec<String> = cmd
            .get_args()
            .map(|a| a.to_string_lossy().to_string())
            .collect();
        assert_eq!(cmd.get_program(), "cc");
        assert_eq!(args, ["main.c", "-Iinc", "-o", "Build/app"]);
    }

    #[test]
    fn test_discovery_filters_by_extension() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("a.c"), "int main(){return 0;}").unwrap();
        fs::write(dir.path().join("b.h"), "").unwrap();
        fs::write(dir.path().join("a.txt"), "notes").unwrap();

        let mut env = BuildEnv::new("cc");
        env.add_sources_from_dir(dir.path());

        assert_eq!(env.arg_count(), 1);
        assert!(env.args()[0].ends_with("a.c"));
    }

    #[test]
    fn test_discovery_skips_subdirectories() {
        let dir = tempfile::tempdir().unwrap();
        fs::write(dir.path().join("top.c"), "").unwrap();
        fs::create_dir(dir.path().join("nested")).unwrap();
        fs::write(dir.path().join("nested").join("deep.c"), "").unwrap();

        let mut env = BuildEnv::new("cc");
        env.add_sources_from_dir(dir.path());

        assert_eq!(env.arg_count(), 1);
        assert!(env.args()[0].ends_with("top.c"));
    }

    #[test]
    fn test_discovery_on_missing_dir_is_a_no_op() {
        let mut env = BuildEnv::new("cc");
        env.add_arg("explicit.c");
        env.add_sources_from_dir(Path::new("/nonexistent/for/sure"));
        assert_eq!(env.args(), ["explicit.c"]);
    }
}
