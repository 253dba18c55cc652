//! Recursive directory mirroring.
//!
//! Used to stage source trees and vendored files next to the build output.
//! Copies are byte-for-byte; no text transcoding happens anywhere.

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;
use walkdir::WalkDir;

/// Mirrors every regular file and subdirectory of `src` into `dest`.
///
/// `dest` and intermediate directories are created as needed; a directory
/// that already exists is not an error. Sibling traversal order is
/// unspecified.
///
/// An unreadable `src` fails before anything is written, `dest` included.
/// A failure partway through the tree aborts the operation; files copied up
/// to that point remain on disk.
pub fn copy_dir(src: &Path, dest: &Path) -> Result<()> {
    for entry in WalkDir::new(src) {
        let entry = entry.with_context(|| format!("Failed to read {}", src.display()))?;
        let rel = entry
            .path()
            .strip_prefix(src)
            .expect("walkdir yields paths under its root");
        let target = dest.join(rel);

        let file_type = entry.file_type();
        if file_type.is_dir() {
            fs::create_dir_all(&target)
                .with_context(|| format!("Failed to create {}", target.display()))?;
        } else if file_type.is_file() {
            fs::copy(entry.path(), &target).with_context(|| {
                format!(
                    "Failed to copy {} -> {}",
                    entry.path().display(),
                    target.display()
                )
            })?;
        }
    }
    Ok(())
}
