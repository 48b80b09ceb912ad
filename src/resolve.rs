//! The injected dependency-resolution capability and its supporting types.

use std::fmt;

use serde_json::Value;

/// Options forwarded to the resolver for a single referenced path.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DependencyOptions {
    /// Whether the referenced file is a standalone entry point rather than an
    /// imported module.
    pub is_entry_point: bool,
}

impl Default for DependencyOptions {
    fn default() -> Self {
        Self {
            is_entry_point: true,
        }
    }
}

impl DependencyOptions {
    /// Options for a path bundled as its own entry point (WebExtension
    /// scripts, pages and icons).
    pub fn entry() -> Self {
        Self {
            is_entry_point: true,
        }
    }

    /// Options for a path bundled as a plain asset (PWA icons, screenshots
    /// and service workers).
    pub fn asset() -> Self {
        Self {
            is_entry_point: false,
        }
    }
}

/// Opaque token standing in for a resolved manifest path.
///
/// The host build system decides what the token looks like; this crate only
/// splices it back into the manifest as a JSON string value. The token
/// typically serializes to a final URL or output path at bundle time, not
/// immediately.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyReference(String);

impl DependencyReference {
    /// Wrap a resolved token produced by the host build system.
    pub fn new(token: impl Into<String>) -> Self {
        Self(token.into())
    }

    /// The token as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Convert the token into the JSON value embedded in the manifest.
    pub(crate) fn into_value(self) -> Value {
        Value::String(self.0)
    }
}

impl fmt::Display for DependencyReference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Host-supplied capability resolving relative manifest paths into
/// build-graph dependency tokens.
///
/// Implementations are expected to register the path as a build input as a
/// side effect. Calls happen sequentially in manifest order, so registration
/// order matches the order paths appear in the source document.
pub trait DependencyResolver {
    /// Resolve `path` (relative to the manifest's own location) into an
    /// opaque reference usable as a JSON string in the output manifest.
    fn resolve(
        &mut self,
        path: &str,
        options: DependencyOptions,
    ) -> anyhow::Result<DependencyReference>;
}
