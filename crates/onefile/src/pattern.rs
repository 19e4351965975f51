//! Glob filter for the `inline_pattern` option.

use globset::{Glob, GlobSet, GlobSetBuilder};

use crate::error::{Error, Result};

/// Compiled form of `InlineConfig::inline_pattern`.
///
/// An empty pattern list means "everything is eligible". Compiled once per
/// invocation and shared by the main pipeline and the template assembler.
#[derive(Debug)]
pub struct PatternFilter(Option<GlobSet>);

impl PatternFilter {
    /// Compile the configured glob patterns.
    pub fn new(patterns: &[String]) -> Result<Self> {
        if patterns.is_empty() {
            return Ok(Self(None));
        }
        let mut builder = GlobSetBuilder::new();
        for pattern in patterns {
            let glob = Glob::new(pattern).map_err(|source| Error::Pattern {
                pattern: pattern.clone(),
                source,
            })?;
            builder.add(glob);
        }
        let set = builder.build().map_err(|source| Error::Pattern {
            pattern: patterns.join(", "),
            source,
        })?;
        Ok(Self(Some(set)))
    }

    /// Whether the named asset is eligible for inlining.
    pub fn is_match(&self, name: &str) -> bool {
        match &self.0 {
            Some(set) => set.is_match(name),
            None => true,
        }
    }
}
