//! Configuration file parsing (`cforge.toml`).
//!
//! The config file is optional sugar over the [`crate::env::BuildEnv`] API:
//! the CLI loads it, seeds an environment, and dispatches a build driver. The
//! library stays fully usable without one.

use crate::env::BuildEnv;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::Path;

pub const CONFIG_FILE: &str = "cforge.toml";

#[derive(Deserialize, Debug, Default)]
pub struct ForgeConfig {
    pub package: PackageConfig,
    pub build: Option<BuildConfig>,
}

#[derive(Deserialize, Debug, Default)]
pub struct PackageConfig {
    pub name: String,
    #[allow(dead_code)]
    pub version: String,
}

#[derive(Deserialize, Debug, Default)]
pub struct BuildConfig {
    /// Compiler program. Falls back to `$CC`, then `cc`.
    pub compiler: Option<String>,
    /// Directory scanned (non-recursively) for `.c` sources at build time.
    pub source_dir: Option<String>,
    /// Include directories, each emitted as one `-I<path>` token.
    pub include_dirs: Option<Vec<String>>,
    /// Extra tokens passed through verbatim, in order.
    pub flags: Option<Vec<String>>,
}

pub fn load_config() -> Result<ForgeConfig> {
    if !Path::new(CONFIG_FILE).exists() {
        return Err(anyhow::anyhow!(
            "{} not found in current directory.\n\n\
            💡 Tip: Run 'cf init' to create one.",
            CONFIG_FILE
        ));
    }
    let config_str = fs::read_to_string(CONFIG_FILE)
        .with_context(|| format!("Failed to read {} - check file permissions", CONFIG_FILE))?;
    let config: ForgeConfig = toml::from_str(&config_str)
        .with_context(|| format!("Failed to parse {}", CONFIG_FILE))?;
    Ok(config)
}

impl ForgeConfig {
    /// Seeds a fresh build environment: compiler, then include directories,
    /// then verbatim flags, in config order.
    pub fn to_env(&self) -> BuildEnv {
        let compiler = self
            .build
            .as_ref()
            .and_then(|b| b.compiler.clone())
            .or_else(|| std::env::var("CC").ok())
            .unwrap_or_else(|| "cc".to_string());

        let mut env = BuildEnv::new(compiler);
        if let Some(build) = &self.build {
            if let Some(dirs) = &build.include_dirs {
                for dir in dirs {
                    env.add_include_dir(dir);
                }
            }
            if let Some(flags) = &build.flags {
                for flag in flags {
                    env.add_arg(flag);
                }
            }
            if let Some(dir) = &build.source_dir {
                env.set_source_dir(dir);
            }
        }
        env
    }
}
