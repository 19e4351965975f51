//! Error types for the inliner core.
//!
//! Only genuinely fatal conditions surface here: an invalid glob in the
//! inline filter, or a template that violates the marker contract. Per-asset
//! failures (no insertion point, pattern-excluded) are never errors — they
//! land in the [`InlineReport`](crate::InlineReport) instead.

use thiserror::Error;

/// Fatal inliner errors.
#[derive(Debug, Error)]
pub enum Error {
    /// An entry of `inline_pattern` is not a valid glob.
    #[error("invalid inline pattern '{pattern}': {source}\n\nHint: patterns use glob syntax, e.g. 'assets/*.js'")]
    Pattern {
        /// The offending pattern as configured.
        pattern: String,
        /// The underlying glob parse error.
        #[source]
        source: globset::Error,
    },

    /// A web-component template does not carry a required marker exactly once.
    #[error("template marker `{marker}` found {count} times, expected exactly once\n\nHint: the template must contain one CSS marker and one JS marker")]
    TemplateMarker {
        /// The marker token that was miscounted.
        marker: &'static str,
        /// How many times it actually occurred.
        count: usize,
    },
}

/// Result type alias using [`Error`] as the default error type.
pub type Result<T, E = Error> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn template_marker_message_names_marker_and_count() {
        let err = Error::TemplateMarker {
            marker: "/* MINCSS */",
            count: 0,
        };
        let msg = err.to_string();
        assert!(msg.contains("/* MINCSS */"));
        assert!(msg.contains("found 0 times"));
        assert!(msg.contains("Hint:"));
    }
}
