//! Inliner configuration.
//!
//! [`InlineConfig`] is supplied by the host build configuration, either
//! programmatically through the builder methods or deserialized from a config
//! file. Unrecognized keys are ignored on deserialization.

use serde::{Deserialize, Serialize};

use crate::embed::DEFAULT_MOUNT_SIGNATURE;

/// Output flavor of a run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Target {
    /// Standalone single-file page.
    Default,
    /// Same as [`Target::Default`]; named for hosts that load the page into
    /// an iframe.
    #[default]
    Iframe,
    /// Embeddable fragment: placeholder-only CSS insertion plus fragment
    /// normalization (no doctype/head/body wrapper).
    Embed,
    /// Template-driven web component artifact (see [`crate::template`]).
    WebComponent,
}

impl Target {
    /// Whether this target produces an embeddable fragment.
    pub fn is_embed(self) -> bool {
        matches!(self, Target::Embed)
    }
}

/// Configuration for one inliner invocation.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct InlineConfig {
    /// Whether the host may apply the advisory bundler settings from
    /// [`BuildTweaks::recommended`] before building.
    pub use_recommended_build_config: bool,

    /// Whether to excise the generated module-bootstrap snippet from the
    /// emitted script tag (best-effort, see [`crate::loader`]).
    pub remove_module_loader: bool,

    /// If non-empty, only assets whose name matches at least one glob are
    /// inlined; others are left untouched and reported.
    pub inline_pattern: Vec<String>,

    /// Whether consumed entries are removed from the bundle after inlining.
    pub delete_inlined_files: bool,

    /// Output flavor.
    pub target: Target,

    /// Opening-tag prefix identifying the framework mount-point element whose
    /// trailing dev-only attributes are stripped in embed mode.
    pub mount_signature: String,
}

impl Default for InlineConfig {
    fn default() -> Self {
        Self {
            use_recommended_build_config: true,
            remove_module_loader: false,
            inline_pattern: Vec::new(),
            delete_inlined_files: true,
            target: Target::default(),
            mount_signature: DEFAULT_MOUNT_SIGNATURE.to_string(),
        }
    }
}

impl InlineConfig {
    /// Default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the output target.
    pub fn with_target(mut self, target: Target) -> Self {
        self.target = target;
        self
    }

    /// Enable or disable the loader-removal heuristic.
    pub fn with_remove_module_loader(mut self, enabled: bool) -> Self {
        self.remove_module_loader = enabled;
        self
    }

    /// Restrict inlining to names matching the given glob patterns.
    pub fn with_inline_pattern(
        mut self,
        patterns: impl IntoIterator<Item = impl Into<String>>,
    ) -> Self {
        self.inline_pattern = patterns.into_iter().map(Into::into).collect();
        self
    }

    /// Keep or delete consumed bundle entries.
    pub fn with_delete_inlined_files(mut self, enabled: bool) -> Self {
        self.delete_inlined_files = enabled;
        self
    }

    /// Override the embed-mode mount-point signature.
    pub fn with_mount_signature(mut self, signature: impl Into<String>) -> Self {
        self.mount_signature = signature.into();
        self
    }

    /// Advisory bundler settings, if the host opted in.
    ///
    /// The host applies these to its own build configuration before building;
    /// the inliner never enforces them.
    pub fn build_tweaks(&self) -> Option<BuildTweaks> {
        self.use_recommended_build_config
            .then(BuildTweaks::recommended)
    }
}

/// Advisory bundler settings that make the inliner work well.
///
/// These are requested, not enforced: the host build process decides whether
/// to apply them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildTweaks {
    /// Inline every asset into the generated code regardless of size.
    pub inline_all_assets: bool,
    /// Chunk size above which the bundler would warn; raised so single-file
    /// output stays quiet.
    pub chunk_size_warning_limit: u64,
    /// Emit all CSS as a single file instead of per-chunk splits.
    pub css_code_split: bool,
    /// Use a relative base path so static assets resolve next to the page.
    pub relative_base: bool,
    /// Emit generated files at the dist root instead of an assets subfolder.
    pub flat_assets_dir: bool,
    /// Collapse dynamic imports into the entry chunk.
    pub inline_dynamic_imports: bool,
}

impl BuildTweaks {
    /// The settings the inliner would like the bundler to use.
    pub fn recommended() -> Self {
        Self {
            inline_all_assets: true,
            chunk_size_warning_limit: 100_000_000,
            css_code_split: false,
            relative_base: true,
            flat_assets_dir: true,
            inline_dynamic_imports: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_matches_plugin_defaults() {
        let config = InlineConfig::default();
        assert!(config.use_recommended_build_config);
        assert!(!config.remove_module_loader);
        assert!(config.inline_pattern.is_empty());
        assert!(config.delete_inlined_files);
        assert_eq!(config.target, Target::Iframe);
    }

    #[test]
    fn build_tweaks_only_when_opted_in() {
        let config = InlineConfig::new();
        assert_eq!(config.build_tweaks(), Some(BuildTweaks::recommended()));

        let config = InlineConfig {
            use_recommended_build_config: false,
            ..InlineConfig::new()
        };
        assert_eq!(config.build_tweaks(), None);
    }

    #[test]
    fn deserialize_ignores_unknown_keys() {
        let json = r#"{
            "target": "embed",
            "removeModuleLoader": true,
            "someFutureOption": 42
        }"#;
        let config: InlineConfig = serde_json::from_str(json).unwrap();
        assert_eq!(config.target, Target::Embed);
        assert!(config.remove_module_loader);
        // Unlisted keys fall back to defaults.
        assert!(config.delete_inlined_files);
    }

    #[test]
    fn builder_round_trip() {
        let config = InlineConfig::new()
            .with_target(Target::WebComponent)
            .with_inline_pattern(["*.js", "*.css"])
            .with_delete_inlined_files(false)
            .with_remove_module_loader(true);
        assert_eq!(config.target, Target::WebComponent);
        assert_eq!(config.inline_pattern, vec!["*.js", "*.css"]);
        assert!(!config.delete_inlined_files);
        assert!(config.remove_module_loader);
    }
}
