//! Inline run report.
//!
//! The report is observability only — it never alters control flow. Hosts can
//! serialize it (e.g. to JSON) for build logs.

use serde::Serialize;

/// Why an asset was not inlined.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum SkipReason {
    /// `inline_pattern` was non-empty and the name matched no pattern.
    PatternExcluded,
    /// No matching tag and no free placeholder was found for the asset.
    NoInsertionPoint,
    /// The asset is neither HTML, CSS, nor script.
    OtherKind,
}

/// One asset that was left in place.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Skipped {
    /// Bundle name of the asset.
    pub name: String,
    /// Why it was skipped.
    pub reason: SkipReason,
}

/// Which assets one inliner invocation consumed and which it left alone.
#[derive(Debug, Default, Clone, Serialize)]
pub struct InlineReport {
    /// Names successfully inlined, in placement order.
    pub inlined: Vec<String>,
    /// Names left untouched, with the reason.
    pub skipped: Vec<Skipped>,
}

impl InlineReport {
    pub(crate) fn mark_inlined(&mut self, name: &str) {
        if !self.inlined.iter().any(|n| n == name) {
            self.inlined.push(name.to_string());
        }
    }

    pub(crate) fn mark_skipped(&mut self, name: &str, reason: SkipReason) {
        if !self.skipped.iter().any(|s| s.name == name) {
            self.skipped.push(Skipped {
                name: name.to_string(),
                reason,
            });
        }
    }

    /// Whether the named asset was inlined during this run.
    pub fn is_inlined(&self, name: &str) -> bool {
        self.inlined.iter().any(|n| n == name)
    }
}
