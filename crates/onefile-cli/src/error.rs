//! CLI error type.

use std::path::PathBuf;

use thiserror::Error;

/// Top-level CLI error.
#[derive(Debug, Error)]
pub enum CliError {
    /// Dist directory missing or not a directory.
    #[error("dist directory not found: {}\n\nHint: pass the bundler's output directory, e.g. 'onefile dist'", .0.display())]
    DistNotFound(PathBuf),

    /// `--target web-component` without `--template`.
    #[error("--target web-component requires --template <path>")]
    TemplateRequired,

    /// Errors from the inliner core (bad pattern, malformed template).
    #[error(transparent)]
    Core(#[from] onefile::Error),

    /// I/O errors from reading the dist dir, the template, or writing output.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Report serialization for `--report-json`.
    #[error("failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias using [`CliError`] as the default error type.
pub type Result<T, E = CliError> = std::result::Result<T, E>;
