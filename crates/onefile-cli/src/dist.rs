//! Dist directory ↔ bundle conversion.
//!
//! The inliner core is pure text-in/text-out; this module is the I/O
//! boundary. A dist directory is read once into a [`Bundle`] (names relative
//! to the dist root, using `/` separators like bundler output names), and the
//! mutated bundle is written back afterwards.

use std::fs;
use std::path::Path;

use onefile::{AssetKind, Bundle, BundleEntry, InlineReport};
use tracing::debug;
use walkdir::WalkDir;

use crate::error::Result;

/// Read every file under `dist` into a bundle.
///
/// Entries are collected in path-sorted order so repeated runs see the same
/// bundle iteration order. Files that are not valid UTF-8 can only be
/// `Other`-kind assets; they are carried with lossy content and are never
/// rewritten.
pub fn read_bundle(dist: &Path) -> Result<Bundle> {
    let mut entries: Vec<BundleEntry> = Vec::new();
    for entry in WalkDir::new(dist).sort_by_file_name() {
        let entry = entry.map_err(std::io::Error::from)?;
        if !entry.file_type().is_file() {
            continue;
        }
        let name = entry
            .path()
            .strip_prefix(dist)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .replace('\\', "/");
        let bytes = fs::read(entry.path())?;
        let content = String::from_utf8_lossy(&bytes).into_owned();
        debug!(asset = %name, bytes = bytes.len(), "read dist entry");
        entries.push(BundleEntry::new(name, content));
    }
    Ok(onefile::bundle_of(entries))
}

/// Write the mutated bundle back to the dist directory.
///
/// Rewrites the HTML entries the inliner touched and deletes files for the
/// inlined entries the core removed from the bundle.
pub fn write_back(dist: &Path, bundle: &Bundle, report: &InlineReport) -> Result<()> {
    for entry in bundle.values() {
        if entry.kind == AssetKind::Html {
            debug!(asset = %entry.name, "writing rewritten page");
            fs::write(dist.join(&entry.name), &entry.content)?;
        }
    }
    for name in &report.inlined {
        if !bundle.contains_key(name) {
            let path = dist.join(name);
            if path.exists() {
                debug!(asset = %name, "deleting inlined file");
                fs::remove_file(path)?;
            }
        }
    }
    Ok(())
}
