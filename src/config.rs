//! Rewriter configuration describing which files count as manifests.

use std::fs;
use std::path::Path;

use serde::Deserialize;

const DEFAULT_CONFIG_FILE: &str = "manifest_bundler.config.json";

/// Discoverable configuration controlling asset classification.
///
/// Host bundlers sometimes route manifests under non-standard names (for
/// example a templated `manifest.webapp`); this configuration lets a project
/// widen the match set without code changes.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct RewriterConfig {
    /// File names (exact basename match) treated as rewritable manifests.
    pub manifest_file_names: Vec<String>,
    /// File extensions treated as PWA web manifests.
    pub webmanifest_extensions: Vec<String>,
}

impl Default for RewriterConfig {
    fn default() -> Self {
        Self {
            manifest_file_names: vec!["manifest.json".into()],
            webmanifest_extensions: vec!["webmanifest".into()],
        }
    }
}

impl RewriterConfig {
    /// Attempt to load configuration from the provided directory.
    ///
    /// When the configuration file does not exist or fails to parse we fall
    /// back to default values so downstream callers can continue operating
    /// with sensible assumptions.
    pub fn discover(dir: &Path) -> Self {
        let candidate = dir.join(DEFAULT_CONFIG_FILE);
        Self::from_path(&candidate).unwrap_or_default()
    }

    /// Read configuration from a specific JSON file.
    pub fn from_path(path: &Path) -> Option<Self> {
        let content = fs::read_to_string(path).ok()?;
        serde_json::from_str(&content).ok()
    }

    /// Whether the given path names a manifest under this configuration.
    pub fn matches_manifest(&self, path: &Path) -> bool {
        let by_name = path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| self.manifest_file_names.iter().any(|known| known == name));
        let by_extension = path
            .extension()
            .and_then(|extension| extension.to_str())
            .is_some_and(|extension| {
                self.webmanifest_extensions
                    .iter()
                    .any(|known| known == extension)
            });
        by_name || by_extension
    }
}
