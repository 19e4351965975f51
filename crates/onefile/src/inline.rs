//! Marker location and script/style substitution — the main pipeline.
//!
//! The document is treated as text with marker positions, not parsed HTML:
//! substitution is split-and-concatenate, which keeps every byte outside the
//! substituted regions intact. A marker is either a structural tag pointing
//! at a known asset name (`<script src=...>`, `<link href=...>`) or an
//! explicit sentinel reserved purely for insertion. Sentinels are the
//! fallback for host documents that cannot carry a literal asset-name tag,
//! e.g. when templating strips comments or attributes.

use regex::Regex;
use tracing::{debug, warn};

use crate::bundle::{Bundle, classify};
use crate::config::InlineConfig;
use crate::embed::to_embed_fragment;
use crate::error::Result;
use crate::loader::strip_module_loader;
use crate::pattern::PatternFilter;
use crate::report::{InlineReport, SkipReason};

/// Sentinel element reserved for script insertion.
///
/// A custom element rather than an HTML comment: comments may be stripped by
/// the host's templating, and an unknown element neither inherits properties
/// nor takes up layout space.
pub const JS_PLACEHOLDER: &str = "<js-placeholder></js-placeholder>";

/// Sentinel element reserved for style insertion.
pub const CSS_PLACEHOLDER: &str = "<css-placeholder></css-placeholder>";

/// Per-invocation inliner state: the configuration plus the compiled inline
/// filter. Construct once per build invocation.
#[derive(Debug)]
pub struct Inliner<'cfg> {
    config: &'cfg InlineConfig,
    filter: PatternFilter,
}

impl<'cfg> Inliner<'cfg> {
    /// Compile the configuration into a runnable inliner.
    ///
    /// Fails only on an invalid `inline_pattern` glob.
    pub fn new(config: &'cfg InlineConfig) -> Result<Self> {
        let filter = PatternFilter::new(&config.inline_pattern)?;
        Ok(Self { config, filter })
    }

    /// Run the inliner over the bundle.
    ///
    /// Every HTML entry is processed in bundle order; scripts are substituted
    /// before styles within one entry, and all substitutions for one entry
    /// happen in a single left-to-right pass over its text. Assets that find
    /// no insertion point anywhere are reported and retained — never an
    /// error.
    pub fn run(&self, bundle: &mut Bundle) -> InlineReport {
        let parts = classify(bundle);
        let mut report = InlineReport::default();

        // Eligibility is a property of the asset name alone; settle it once.
        let (scripts, excluded_scripts): (Vec<String>, Vec<String>) = parts
            .scripts
            .iter()
            .cloned()
            .partition(|name| self.filter.is_match(name));
        let (styles, excluded_styles): (Vec<String>, Vec<String>) = parts
            .css
            .iter()
            .cloned()
            .partition(|name| self.filter.is_match(name));
        for name in excluded_scripts.iter().chain(excluded_styles.iter()) {
            debug!(asset = %name, "not inlined: excluded by inline pattern");
            report.mark_skipped(name, SkipReason::PatternExcluded);
        }

        let embed = self.config.target.is_embed();
        let mut placed: Vec<String> = Vec::new();

        for html_name in &parts.html {
            let Some(entry) = bundle.get(html_name) else {
                continue;
            };
            let mut html = entry.content.clone();

            for name in &scripts {
                let Some(asset) = bundle.get(name) else {
                    continue;
                };
                match replace_script(&html, name, &asset.content) {
                    Some(next) => {
                        debug!(asset = %name, into = %html_name, "inlined script");
                        html = next;
                        if !placed.contains(name) {
                            placed.push(name.clone());
                        }
                    }
                    None => {
                        debug!(asset = %name, into = %html_name, "no script tag or placeholder");
                    }
                }
            }

            for name in &styles {
                let Some(asset) = bundle.get(name) else {
                    continue;
                };
                match replace_css(&html, name, &asset.content, embed) {
                    Some(next) => {
                        debug!(asset = %name, into = %html_name, "inlined stylesheet");
                        html = next;
                        if !placed.contains(name) {
                            placed.push(name.clone());
                        }
                    }
                    None => {
                        debug!(asset = %name, into = %html_name, "no link tag or placeholder");
                    }
                }
            }

            if self.config.remove_module_loader {
                html = strip_module_loader(&html).into_owned();
            }
            if embed {
                html = to_embed_fragment(&html, &self.config.mount_signature);
            }

            if let Some(entry) = bundle.get_mut(html_name) {
                entry.content = html;
            }
        }

        for name in scripts.iter().chain(styles.iter()) {
            if placed.contains(name) {
                report.mark_inlined(name);
            } else {
                warn!(asset = %name, "asset not inlined: no insertion point found");
                report.mark_skipped(name, SkipReason::NoInsertionPoint);
            }
        }
        for name in &parts.other {
            debug!(asset = %name, "asset not inlined");
            report.mark_skipped(name, SkipReason::OtherKind);
        }

        if self.config.delete_inlined_files {
            for name in &placed {
                bundle.shift_remove(name);
            }
        }

        report
    }
}

/// Classify, substitute, and mutate the bundle in one call.
///
/// Convenience wrapper over [`Inliner::new`] + [`Inliner::run`] for hosts
/// that invoke the core exactly once per build.
///
/// Template-driven assembly lives in [`crate::template::assemble`]; this
/// function always runs the page pipeline, so a
/// [`Target::WebComponent`](crate::config::Target::WebComponent) config
/// behaves exactly like [`Target::Default`](crate::config::Target::Default)
/// here. Hosts route on the target before calling in.
pub fn inline_bundle(bundle: &mut Bundle, config: &InlineConfig) -> Result<InlineReport> {
    Ok(Inliner::new(config)?.run(bundle))
}

/// Substitute one script asset into the document.
///
/// The tag match (`<script ... src="NAME">`, tolerating a leading relative
/// path prefix) takes precedence; the placeholder is the fallback so it stays
/// available for another asset. Returns `None` when neither exists. The
/// inserted body is the code wrapped in an IIFE so top-level `var`/`let`
/// bindings cannot leak into the host page, with the dynamic-import-preload
/// marker neutralized.
pub fn replace_script(html: &str, asset_name: &str, code: &str) -> Option<String> {
    let block = format!("<script>{}</script>", iife(&neutralize_bundler_markers(code)));

    let pattern = format!(
        r#"<script([^>]*?) src="[./]*{}"([^>]*)></script>"#,
        regex::escape(asset_name)
    );
    if let Ok(tag) = Regex::new(&pattern) {
        if let Some(found) = tag.find(html) {
            return Some(splice(html, found.start(), found.end(), &block));
        }
    }

    splice_at(html, JS_PLACEHOLDER, &block)
}

/// Substitute one stylesheet asset into the document.
///
/// With `placeholder_only` (embed mode) the CSS sentinel is always used and
/// link tags are never matched, since embed documents carry placeholders
/// exclusively. Otherwise the matching `<link href=...>` tag is replaced,
/// falling back to the sentinel. A leading legacy charset declaration is
/// stripped from the CSS first; it is only valid in a standalone file.
pub fn replace_css(
    html: &str,
    asset_name: &str,
    css: &str,
    placeholder_only: bool,
) -> Option<String> {
    let block = format!("<style>\n{}</style>", strip_charset(css));

    if placeholder_only {
        return splice_at(html, CSS_PLACEHOLDER, &block);
    }

    let pattern = format!(
        r#"<link([^>]*?) href="[./]*{}"([^>]*?)>"#,
        regex::escape(asset_name)
    );
    if let Ok(tag) = Regex::new(&pattern) {
        if let Some(found) = tag.find(html) {
            return Some(splice(html, found.start(), found.end(), &block));
        }
    }

    splice_at(html, CSS_PLACEHOLDER, &block)
}

/// Wrap code in an immediately-invoked isolating closure.
fn iife(code: &str) -> String {
    format!("(()=>{{{code}}})()")
}

/// Rewrite bundler bootstrap markers that are meaningless once inlined.
///
/// The preload marker (optionally quoted) becomes a no-op expression, and an
/// `(import.meta)` argument list becomes `()` — `import.meta` only exists in
/// module scope and would throw in the inlined, non-modular script.
fn neutralize_bundler_markers(code: &str) -> String {
    let preload = match Regex::new(r#""?__VITE_PRELOAD__"?"#) {
        Ok(re) => re,
        Err(_) => return code.to_string(),
    };
    preload
        .replace_all(code, "void 0")
        .replacen("(import.meta)", "()", 1)
}

/// Strip the legacy charset declaration and any whitespace after it.
pub(crate) fn strip_charset(css: &str) -> String {
    match Regex::new(r#"@charset "UTF-8";\s*"#) {
        Ok(re) => re.replace(css, "").into_owned(),
        Err(_) => css.to_string(),
    }
}

/// Replace the first occurrence of `marker`, or `None` if absent.
pub(crate) fn splice_at(text: &str, marker: &str, replacement: &str) -> Option<String> {
    let at = text.find(marker)?;
    Some(splice(text, at, at + marker.len(), replacement))
}

fn splice(text: &str, start: usize, end: usize, replacement: &str) -> String {
    let mut out = String::with_capacity(text.len() - (end - start) + replacement.len());
    out.push_str(&text[..start]);
    out.push_str(replacement);
    out.push_str(&text[end..]);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bundle::{BundleEntry, bundle_of};
    use crate::config::Target;

    #[test]
    fn script_tag_match_takes_precedence_over_placeholder() {
        let html = format!(
            r#"<body><script src="main.js"></script>{JS_PLACEHOLDER}</body>"#
        );
        let out = replace_script(&html, "main.js", "console.log(1)").unwrap();
        assert!(out.contains("<script>(()=>{console.log(1)})()</script>"));
        assert!(!out.contains(r#"src="main.js""#));
        // The placeholder stays available for another asset.
        assert!(out.contains(JS_PLACEHOLDER));
    }

    #[test]
    fn script_tag_tolerates_relative_prefix_and_attributes() {
        let html = r#"<script type="module" crossorigin src="./assets/main.js"></script>"#;
        let out = replace_script(html, "assets/main.js", "run()").unwrap();
        assert!(out.contains("(()=>{run()})()"));
        assert!(!out.contains("src="));
    }

    #[test]
    fn script_falls_back_to_placeholder() {
        let html = format!("<body>{JS_PLACEHOLDER}</body>");
        let out = replace_script(&html, "chunk.js", "x()").unwrap();
        assert_eq!(out, "<body><script>(()=>{x()})()</script></body>");
    }

    #[test]
    fn script_without_tag_or_placeholder_is_none() {
        assert!(replace_script("<body></body>", "main.js", "x()").is_none());
    }

    #[test]
    fn preload_marker_is_neutralized() {
        let html = r#"<script src="main.js"></script>"#;
        let code = r#"load("__VITE_PRELOAD__");load(__VITE_PRELOAD__)"#;
        let out = replace_script(html, "main.js", code).unwrap();
        assert!(out.contains("load(void 0);load(void 0)"));
        assert!(!out.contains("__VITE_PRELOAD__"));
    }

    #[test]
    fn import_meta_argument_is_emptied() {
        let html = r#"<script src="main.js"></script>"#;
        let out = replace_script(html, "main.js", "boot(import.meta);").unwrap();
        assert!(out.contains("boot();"));
    }

    #[test]
    fn css_link_tag_is_replaced() {
        let html = r#"<head><link rel="stylesheet" href="main.css"></head>"#;
        let out = replace_css(html, "main.css", "body{color:red}", false).unwrap();
        assert_eq!(out, "<head><style>\nbody{color:red}</style></head>");
    }

    #[test]
    fn css_charset_declaration_is_stripped() {
        let html = r#"<link href="main.css">"#;
        let out = replace_css(html, "main.css", "@charset \"UTF-8\"; body{color:red}", false)
            .unwrap();
        assert_eq!(out, "<style>\nbody{color:red}</style>");
    }

    #[test]
    fn embed_mode_ignores_link_tags() {
        let html = format!(r#"<link href="main.css">{CSS_PLACEHOLDER}"#);
        let out = replace_css(&html, "main.css", "a{}", true).unwrap();
        // The link tag survives; only the placeholder was consumed.
        assert!(out.contains(r#"<link href="main.css">"#));
        assert!(!out.contains(CSS_PLACEHOLDER));
    }

    #[test]
    fn pattern_excluded_assets_leave_html_untouched() {
        let html = r#"<body><script src="vendor.js"></script></body>"#;
        let mut bundle = bundle_of([
            BundleEntry::new("index.html", html),
            BundleEntry::generated("vendor.js", "v()"),
        ]);
        let config = InlineConfig::new().with_inline_pattern(["app-*.js"]);
        let report = inline_bundle(&mut bundle, &config).unwrap();

        assert_eq!(bundle["index.html"].content, html);
        assert!(bundle.contains_key("vendor.js"));
        assert!(report.inlined.is_empty());
        assert_eq!(report.skipped[0].reason, SkipReason::PatternExcluded);
    }

    #[test]
    fn unmatched_asset_is_reported_and_retained() {
        let mut bundle = bundle_of([
            BundleEntry::new("index.html", "<body></body>"),
            BundleEntry::generated("main.js", "x()"),
        ]);
        let config = InlineConfig::new();
        let report = inline_bundle(&mut bundle, &config).unwrap();

        assert!(bundle.contains_key("main.js"));
        assert_eq!(report.skipped[0].reason, SkipReason::NoInsertionPoint);
    }

    #[test]
    fn scripts_are_inlined_into_every_html_entry() {
        let page = r#"<script src="main.js"></script>"#;
        let mut bundle = bundle_of([
            BundleEntry::new("a.html", page),
            BundleEntry::new("b.html", page),
            BundleEntry::generated("main.js", "x()"),
        ]);
        let config = InlineConfig::new().with_delete_inlined_files(false);
        let report = inline_bundle(&mut bundle, &config).unwrap();

        assert!(bundle["a.html"].content.contains("(()=>{x()})()"));
        assert!(bundle["b.html"].content.contains("(()=>{x()})()"));
        assert_eq!(report.inlined, vec!["main.js"]);
    }

    #[test]
    fn web_component_target_runs_the_page_pipeline() {
        let page = r#"<body><script src="main.js"></script></body>"#;
        let entries = || {
            bundle_of([
                BundleEntry::new("index.html", page),
                BundleEntry::generated("main.js", "x()"),
            ])
        };

        let mut as_component = entries();
        let config = InlineConfig::new().with_target(Target::WebComponent);
        let report = inline_bundle(&mut as_component, &config).unwrap();

        let mut as_default = entries();
        let baseline = InlineConfig::new().with_target(Target::Default);
        inline_bundle(&mut as_default, &baseline).unwrap();

        assert_eq!(
            as_component["index.html"].content,
            as_default["index.html"].content
        );
        assert_eq!(report.inlined, vec!["main.js"]);
    }
}
