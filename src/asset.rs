//! Classifying incoming assets before any manifest-specific work happens.
//!
//! Whether a file is actually a manifest is decided from its name alone,
//! up front; the rewrite pass itself never has to ask.

use std::path::Path;

use crate::config::RewriterConfig;
use crate::error::RewriteError;
use crate::resolve::DependencyResolver;
use crate::rewrite::{RewriteOutcome, rewrite_manifest};

/// How a JSON-ish asset should be treated by the host bundler.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AssetKind {
    /// A rewritable PWA or WebExtension manifest.
    Manifest,
    /// Any other JSON document, passed through untouched.
    Json,
}

impl AssetKind {
    /// Classify a file path using the default configuration.
    pub fn for_path(path: &Path) -> Self {
        Self::for_path_with(path, &RewriterConfig::default())
    }

    /// Classify a file path against an explicit configuration.
    pub fn for_path_with(path: &Path, config: &RewriterConfig) -> Self {
        if config.matches_manifest(path) {
            AssetKind::Manifest
        } else {
            AssetKind::Json
        }
    }
}

/// Process one asset: rewrite it when `path` names a manifest, otherwise
/// return the source untouched with `dirty = false`.
pub fn rewrite_asset<R: DependencyResolver>(
    path: &Path,
    source: &str,
    resolver: &mut R,
) -> Result<RewriteOutcome, RewriteError> {
    rewrite_asset_with(path, source, resolver, &RewriterConfig::default())
}

/// [`rewrite_asset`] with an explicit classification configuration.
pub fn rewrite_asset_with<R: DependencyResolver>(
    path: &Path,
    source: &str,
    resolver: &mut R,
    config: &RewriterConfig,
) -> Result<RewriteOutcome, RewriteError> {
    match AssetKind::for_path_with(path, config) {
        AssetKind::Manifest => rewrite_manifest(source, resolver),
        AssetKind::Json => Ok(RewriteOutcome {
            output: source.to_owned(),
            dirty: false,
        }),
    }
}
