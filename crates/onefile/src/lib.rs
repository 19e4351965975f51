//! # onefile
//!
//! Post-processes the output of a web application bundler so that a
//! multi-file build (HTML plus separate script/style assets) collapses into a
//! single self-contained document.
//!
//! The host bundler invokes the core exactly once per build, synchronously,
//! with the complete finalized [`Bundle`] and an [`InlineConfig`]. The core
//! classifies entries, locates insertion points, substitutes asset content in
//! place, optionally excises the generated module loader, optionally reduces
//! the page to an embeddable fragment, mutates the bundle, and returns an
//! [`InlineReport`].
//!
//! ## Quick Start
//!
//! ### Single-file page
//!
//! ```
//! use onefile::{BundleEntry, InlineConfig, bundle_of, inline_bundle};
//!
//! # fn main() -> onefile::Result<()> {
//! let mut bundle = bundle_of([
//!     BundleEntry::new("index.html", r#"<body><script src="main.js"></script></body>"#),
//!     BundleEntry::generated("main.js", "console.log(1)"),
//! ]);
//!
//! let report = inline_bundle(&mut bundle, &InlineConfig::new())?;
//! assert!(report.is_inlined("main.js"));
//! assert!(bundle["index.html"].content.contains("(()=>{console.log(1)})()"));
//! # Ok(()) }
//! ```
//!
//! ### Web component artifact
//!
//! ```
//! use onefile::{BundleEntry, InlineConfig, Target, bundle_of, template};
//!
//! # fn main() -> onefile::Result<()> {
//! let shell = "<style>/* MINCSS */</style><script>/* MINJS */</script>";
//! let mut bundle = bundle_of([BundleEntry::generated("app.js", "boot();")]);
//!
//! let config = InlineConfig::new().with_target(Target::WebComponent);
//! let assembled = template::assemble(shell, &mut bundle, &config)?;
//! assert!(assembled.text.contains("boot();"));
//! # Ok(()) }
//! ```
//!
//! The library emits `tracing` events; install your own subscriber to see
//! them. Reading templates and writing artifacts is the host's concern — the
//! core is pure text-in/text-out.

pub mod bundle;
pub mod config;
pub mod embed;
pub mod error;
pub mod inline;
pub mod loader;
pub mod pattern;
pub mod report;
pub mod template;

pub use bundle::{AssetKind, Bundle, BundleEntry, Partitions, bundle_of, classify};
pub use config::{BuildTweaks, InlineConfig, Target};
pub use embed::{DEFAULT_MOUNT_SIGNATURE, to_embed_fragment};
pub use error::{Error, Result};
pub use inline::{
    CSS_PLACEHOLDER, JS_PLACEHOLDER, Inliner, inline_bundle, replace_css, replace_script,
};
pub use loader::strip_module_loader;
pub use report::{InlineReport, SkipReason, Skipped};
pub use template::{Assembled, CSS_MARKER, JS_MARKER, assemble};
