//! Template-driven web component assembly — the alternate pipeline.
//!
//! Instead of rewriting a bundled HTML entry, this mode splices compiled CSS
//! and JS into a hand-authored shell template at explicit marker tokens. The
//! template defines exactly one marker per kind, so only the first CSS entry
//! and the first script entry are spliced; later chunks are logged and
//! reported, not spliced. HTML entries in the bundle are ignored — the
//! template, not a bundled page, is the output shell.
//!
//! Assembly is pure text-in/text-out; reading the template and writing the
//! artifact are the caller's responsibility.

use regex::Regex;
use tracing::{debug, warn};

use crate::bundle::{Bundle, classify};
use crate::config::InlineConfig;
use crate::error::{Error, Result};
use crate::inline::{splice_at, strip_charset};
use crate::pattern::PatternFilter;
use crate::report::{InlineReport, SkipReason};

/// Marker token replaced by the compiled CSS.
pub const CSS_MARKER: &str = "/* MINCSS */";

/// Marker token replaced by the compiled JS.
pub const JS_MARKER: &str = "/* MINJS */";

/// Result of one template assembly.
#[derive(Debug)]
pub struct Assembled {
    /// The assembled document, sole output artifact of this mode.
    pub text: String,
    /// Which bundle entries were spliced or skipped.
    pub report: InlineReport,
}

/// Splice the bundle's compiled CSS/JS into the template.
///
/// The template must contain [`CSS_MARKER`] and [`JS_MARKER`] each exactly
/// once; anything else is a configuration error surfaced as
/// [`Error::TemplateMarker`]. Consumed entries are removed from the bundle
/// when `delete_inlined_files` is set.
pub fn assemble(
    template: &str,
    bundle: &mut Bundle,
    config: &InlineConfig,
) -> Result<Assembled> {
    for marker in [CSS_MARKER, JS_MARKER] {
        let count = template.matches(marker).count();
        if count != 1 {
            return Err(Error::TemplateMarker { marker, count });
        }
    }

    let filter = PatternFilter::new(&config.inline_pattern)?;
    let parts = classify(bundle);
    let mut text = template.to_string();
    let mut report = InlineReport::default();
    let mut consumed: Vec<String> = Vec::new();

    for name in &parts.css {
        if !filter.is_match(name) {
            debug!(asset = %name, "not spliced: excluded by inline pattern");
            report.mark_skipped(name, SkipReason::PatternExcluded);
            continue;
        }
        let Some(entry) = bundle.get(name) else {
            continue;
        };
        // Minified CSS arrives with a trailing newline; drop the first one
        // along with the standalone-file charset declaration.
        let css = strip_charset(&entry.content).replacen('\n', "", 1);
        match splice_at(&text, CSS_MARKER, &css) {
            Some(next) => {
                debug!(asset = %name, "spliced stylesheet into template");
                text = next;
                consumed.push(name.clone());
                report.mark_inlined(name);
            }
            None => {
                warn!(asset = %name, "CSS marker already consumed, chunk not spliced");
                report.mark_skipped(name, SkipReason::NoInsertionPoint);
            }
        }
    }

    for name in &parts.scripts {
        if !filter.is_match(name) {
            debug!(asset = %name, "not spliced: excluded by inline pattern");
            report.mark_skipped(name, SkipReason::PatternExcluded);
            continue;
        }
        let Some(entry) = bundle.get(name) else {
            continue;
        };
        let code = rewrite_leading_var(&entry.content);
        match splice_at(&text, JS_MARKER, &code) {
            Some(next) => {
                debug!(asset = %name, "spliced script into template");
                text = next;
                consumed.push(name.clone());
                report.mark_inlined(name);
            }
            None => {
                warn!(asset = %name, "JS marker already consumed, chunk not spliced");
                report.mark_skipped(name, SkipReason::NoInsertionPoint);
            }
        }
    }

    for name in &parts.other {
        debug!(asset = %name, "asset not spliced");
        report.mark_skipped(name, SkipReason::OtherKind);
    }

    if config.delete_inlined_files {
        for name in &consumed {
            bundle.shift_remove(name);
        }
    }

    Ok(Assembled { text, report })
}

/// Rewrite a leading `var` declaration to a block-scoped `let`.
///
/// The template splices the code into a shared page context; a top-level
/// `var` would collide with any same-named global the host page defines.
fn rewrite_leading_var(code: &str) -> String {
    match Regex::new(r"^var\s") {
        Ok(re) => re.replace(code, "let ").into_owned(),
        Err(_) => code.to_string(),
    }
}
