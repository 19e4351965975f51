//! Embed fragment normalization.
//!
//! Reduces a full HTML document to a bare fragment suitable for insertion
//! into a host page's body: no doctype, no head, no body wrapper. Body
//! content outside the stripped regions is preserved byte-for-byte.

use regex::Regex;

/// Default opening-tag prefix of the framework mount-point element.
///
/// Overridable via `InlineConfig::mount_signature` for shells that name their
/// wrapper differently.
pub const DEFAULT_MOUNT_SIGNATURE: &str = r#"<div class="app-shell" data-type="app""#;

/// Strip doctype-through-head, body tags, and dev-only mount-point
/// attributes from a full document.
///
/// The mount-point element is identified by its fixed class/data-type
/// signature; any trailing attributes on its opening tag (development-only
/// markers such as data-params) are dropped so they cannot leak into the
/// embedded fragment.
pub fn to_embed_fragment(html: &str, mount_signature: &str) -> String {
    let mut out = html.to_string();

    // Doctype through </head> inclusive, plus trailing newlines.
    if let Ok(head) = Regex::new(r"(?mi)<!DOCTYPE.+(?:\r?\n)*(?:\s*.+(?:\r?\n))*</head>(\r?\n)*") {
        out = head.replace_all(&out, "").into_owned();
    }

    // Opening and closing body tags, but not body content.
    if let Ok(body) = Regex::new(r"(?i)<body[^>]*>|</body>") {
        out = body.replace_all(&out, "").into_owned();
    }

    // Mount-point opening tag: keep the signature, drop the rest of the tag.
    // Bounded at the tag's own closing `>` so content following the tag on
    // the same line is untouched.
    let mount = format!(r"\s*({})[^>]*>", regex::escape(mount_signature));
    if let Ok(re) = Regex::new(&mount) {
        out = re.replace(&out, "${1}>").into_owned();
    }

    out
}
