//! Best-effort removal of the bundler's module-bootstrap snippet.
//!
//! Once every chunk is inlined there is nothing left for the generated module
//! loader to load, so it can be excised and the remaining code run as plain
//! top-level module code. The match is deliberately narrow and structural,
//! not a parser: it assumes the bootstrap is the first declared function in
//! the inlined code, an immediately-invoked expression, inside the first
//! script tag carrying the module/crossorigin attribute pair. When the shape
//! of the generated bootstrap drifts, the match simply fails and the document
//! passes through unchanged — this pass is optional, never required.

use std::borrow::Cow;

use regex::Regex;
use tracing::debug;

/// Loader bootstrap inside the module script tag, first match only. The
/// `polyfill` variant appears when the bundler targets older browsers.
const LOADER_PATTERN: &str =
    r#"(<script type="module" crossorigin>\s*)\(function(?: polyfill)?\(\)\s*\{[\s\S]*?\}\)\(\);"#;

/// Excise the module-loader bootstrap from the document, keeping the script
/// tag's type attribute. Returns the document unchanged when the pattern does
/// not match.
pub fn strip_module_loader(html: &str) -> Cow<'_, str> {
    let Ok(re) = Regex::new(LOADER_PATTERN) else {
        return Cow::Borrowed(html);
    };
    let stripped = re.replace(html, r#"<script type="module">"#);
    if let Cow::Owned(_) = &stripped {
        debug!("removed module loader bootstrap");
    }
    stripped
}
