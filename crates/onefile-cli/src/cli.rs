//! Command-line interface definition.

use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use onefile::Target;

/// Collapse bundler output into a single self-contained HTML document.
#[derive(Parser, Debug)]
#[command(
    name = "onefile",
    version,
    about = "Collapse bundler output into a single self-contained document",
    long_about = "Onefile post-processes a finished bundler build: it inlines the\n\
                  emitted scripts and stylesheets into the HTML entry (or into a\n\
                  hand-authored web component template) so the result is a single\n\
                  self-contained file."
)]
pub struct Cli {
    /// Directory containing the finished build output
    pub dist: PathBuf,

    /// Output flavor
    #[arg(long, value_enum, default_value_t = TargetArg::Iframe)]
    pub target: TargetArg,

    /// Shell template with CSS/JS markers (required for --target web-component)
    #[arg(long, required_if_eq("target", "web-component"))]
    pub template: Option<PathBuf>,

    /// Where to write the assembled web component artifact
    ///
    /// Defaults to `<dist>/index.embed.html`. Ignored for other targets,
    /// which rewrite the HTML entries in place.
    #[arg(long)]
    pub output: Option<PathBuf>,

    /// Only inline assets matching at least one of these glob patterns
    #[arg(long = "inline-pattern", value_name = "GLOB")]
    pub inline_pattern: Vec<String>,

    /// Keep consumed asset files on disk instead of deleting them
    #[arg(long)]
    pub keep_inlined_files: bool,

    /// Excise the generated module-loader bootstrap (best-effort)
    #[arg(long)]
    pub remove_module_loader: bool,

    /// Mount-point opening-tag prefix for embed-mode attribute stripping
    #[arg(long, value_name = "PREFIX")]
    pub mount_signature: Option<String>,

    /// Print the inline report as JSON on stdout
    #[arg(long)]
    pub report_json: bool,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress all output except errors
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

/// CLI-facing spelling of [`Target`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    Default,
    Iframe,
    Embed,
    WebComponent,
}

impl From<TargetArg> for Target {
    fn from(value: TargetArg) -> Self {
        match value {
            TargetArg::Default => Target::Default,
            TargetArg::Iframe => Target::Iframe,
            TargetArg::Embed => Target::Embed,
            TargetArg::WebComponent => Target::WebComponent,
        }
    }
}
