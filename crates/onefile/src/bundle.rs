//! Bundle model and asset classification.
//!
//! A [`Bundle`] is the finalized set of build artifacts the external bundler
//! hands to the inliner: an ordered map from output name to entry. The map is
//! an `IndexMap` on purpose — iteration order is the bundler's emit order, and
//! that order decides which HTML entries are processed first when several
//! exist.

use indexmap::IndexMap;

/// Category of a build output, determined purely from its name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AssetKind {
    /// `.html` / `.htm`
    Html,
    /// `.css`
    Css,
    /// `.js` / `.mjs` / `.cjs`
    Script,
    /// Everything else (images, fonts, source maps, ...)
    Other,
}

impl AssetKind {
    /// Classify an output name by its suffix.
    pub fn from_name(name: &str) -> Self {
        if name.ends_with(".html") || name.ends_with(".htm") {
            AssetKind::Html
        } else if name.ends_with(".css") {
            AssetKind::Css
        } else if name.ends_with(".js") || name.ends_with(".mjs") || name.ends_with(".cjs") {
            AssetKind::Script
        } else {
            AssetKind::Other
        }
    }
}

/// One build output artifact.
///
/// Produced once by the external bundler. The inliner rewrites or removes
/// entries; it never creates them.
#[derive(Debug, Clone)]
pub struct BundleEntry {
    /// Output file name, relative to the dist root (e.g. `assets/main.js`).
    pub name: String,
    /// Category derived from `name`.
    pub kind: AssetKind,
    /// Text content of the artifact.
    pub content: String,
    /// Whether the bundler generated this entry (a chunk) as opposed to
    /// passing a static asset through.
    pub is_generated: bool,
}

impl BundleEntry {
    /// A pass-through asset entry; the kind is derived from the name.
    pub fn new(name: impl Into<String>, content: impl Into<String>) -> Self {
        let name = name.into();
        let kind = AssetKind::from_name(&name);
        Self {
            name,
            kind,
            content: content.into(),
            is_generated: false,
        }
    }

    /// A bundler-generated chunk entry.
    pub fn generated(name: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            is_generated: true,
            ..Self::new(name, content)
        }
    }
}

/// Ordered map of output name → entry, keys unique.
pub type Bundle = IndexMap<String, BundleEntry>;

/// Build a [`Bundle`] from entries, keyed by each entry's name.
pub fn bundle_of(entries: impl IntoIterator<Item = BundleEntry>) -> Bundle {
    entries
        .into_iter()
        .map(|entry| (entry.name.clone(), entry))
        .collect()
}

/// Name lists for each asset kind, in bundle iteration order.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Partitions {
    pub html: Vec<String>,
    pub css: Vec<String>,
    pub scripts: Vec<String>,
    pub other: Vec<String>,
}

/// Partition a bundle's names by asset kind.
///
/// Pure and stable: each list preserves the bundle's iteration order, and
/// classifying the same bundle twice yields identical partitions.
pub fn classify(bundle: &Bundle) -> Partitions {
    let mut parts = Partitions::default();
    for name in bundle.keys() {
        match AssetKind::from_name(name) {
            AssetKind::Html => parts.html.push(name.clone()),
            AssetKind::Css => parts.css.push(name.clone()),
            AssetKind::Script => parts.scripts.push(name.clone()),
            AssetKind::Other => parts.other.push(name.clone()),
        }
    }
    parts
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn kind_from_suffix() {
        assert_eq!(AssetKind::from_name("index.html"), AssetKind::Html);
        assert_eq!(AssetKind::from_name("page.htm"), AssetKind::Html);
        assert_eq!(AssetKind::from_name("style.css"), AssetKind::Css);
        assert_eq!(AssetKind::from_name("main.js"), AssetKind::Script);
        assert_eq!(AssetKind::from_name("main.mjs"), AssetKind::Script);
        assert_eq!(AssetKind::from_name("main.cjs"), AssetKind::Script);
        assert_eq!(AssetKind::from_name("logo.svg"), AssetKind::Other);
        assert_eq!(AssetKind::from_name("main.js.map"), AssetKind::Other);
    }

    #[test]
    fn classify_preserves_insertion_order() {
        let bundle = bundle_of([
            BundleEntry::generated("b.js", ""),
            BundleEntry::new("z.html", ""),
            BundleEntry::generated("a.js", ""),
            BundleEntry::new("a.html", ""),
            BundleEntry::new("style.css", ""),
        ]);
        let parts = classify(&bundle);
        assert_eq!(parts.scripts, vec!["b.js", "a.js"]);
        assert_eq!(parts.html, vec!["z.html", "a.html"]);
        assert_eq!(parts.css, vec!["style.css"]);
        assert!(parts.other.is_empty());
    }

    #[test]
    fn classify_is_idempotent() {
        let bundle = bundle_of([
            BundleEntry::new("index.html", "<html></html>"),
            BundleEntry::generated("main.js", "console.log(1)"),
            BundleEntry::new("font.woff2", ""),
        ]);
        assert_eq!(classify(&bundle), classify(&bundle));
    }
}
