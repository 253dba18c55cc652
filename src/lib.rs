//! # cforge - Minimal C Build Orchestrator
//!
//! cforge is a small helper that turns a pile of compiler arguments into one
//! build invocation. It does not parse compiler output, track dependencies
//! between targets, or rebuild incrementally - it is a command synthesizer
//! and process launcher, nothing more.
//!
//! ## Quick Start
//!
//! ```bash
//! # Create a cforge.toml
//! cf init
//!
//! # Build an executable from the configured sources
//! cf build
//! ```
//!
//! ## Module Organization
//!
//! - [`env`] - Argument accumulator, source discovery, command synthesis
//! - [`build`] - The four build mode drivers (exe, shared, static, object)
//! - [`config`] - Configuration parsing (`cforge.toml`)
//! - [`copy`] - Recursive directory mirroring

/// Build mode drivers and artifact cleanup.
pub mod build;

/// Configuration file parsing (`cforge.toml`).
pub mod config;

/// Recursive directory mirroring.
pub mod copy;

/// Build environment: argument accumulation and command synthesis.
pub mod env;
