//! Error types surfaced by the manifest rewrite pass.

use thiserror::Error;

/// Errors that can occur while rewriting a manifest.
///
/// Absent or wrong-typed schema fields are never errors; walkers skip those
/// silently. Only malformed JSON and resolver failures abort a pass.
#[derive(Debug, Error)]
pub enum RewriteError {
    /// The manifest source was not valid JSON.
    #[error("failed to parse manifest JSON: {0}")]
    Parse(#[source] serde_json::Error),

    /// The manifest parsed to something other than a JSON object.
    #[error("manifest root is not a JSON object")]
    NotAnObject,

    /// Re-serializing the rewritten manifest failed.
    #[error("failed to serialize rewritten manifest: {0}")]
    Serialize(#[source] serde_json::Error),

    /// The injected resolver failed for a referenced path.
    ///
    /// Resolution is fail-fast: the first failing path aborts the remainder
    /// of the pass and no partial output is produced.
    #[error("failed to resolve manifest reference `{path}`")]
    Resolution {
        /// The relative path that could not be resolved.
        path: String,
        /// Underlying error reported by the resolver.
        #[source]
        source: anyhow::Error,
    },
}
