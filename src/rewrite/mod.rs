//! The manifest rewrite pass and its flavor-specific field walkers.

mod pwa;
mod webext;

use serde_json::{Map, Value};
use tracing::{debug, trace};

use crate::error::RewriteError;
use crate::flavor::ManifestFlavor;
use crate::resolve::{DependencyOptions, DependencyResolver};

/// Output of a single rewrite pass over one manifest.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RewriteOutcome {
    /// The resulting manifest text. When `dirty` is false this is the input
    /// source byte-for-byte; otherwise it is a compact re-serialization of
    /// the mutated tree.
    pub output: String,
    /// Whether any dependency substitution occurred.
    pub dirty: bool,
}

/// Rewrite the file references of a single manifest document.
///
/// Parses `source`, detects the manifest flavor, runs the matching field
/// walkers against the injected `resolver`, and re-serializes the tree only
/// when something was rewritten. A manifest with no rewritable references
/// comes back verbatim so its original formatting survives.
///
/// Malformed JSON and resolver failures abort the whole pass; see
/// [`RewriteError`] for the failure modes.
pub fn rewrite_manifest<R: DependencyResolver>(
    source: &str,
    resolver: &mut R,
) -> Result<RewriteOutcome, RewriteError> {
    let mut manifest: Value = serde_json::from_str(source).map_err(RewriteError::Parse)?;
    let Some(root) = manifest.as_object_mut() else {
        return Err(RewriteError::NotAnObject);
    };

    let flavor = ManifestFlavor::detect(root);
    debug!("detected manifest flavor: {flavor:?}");

    let dirty = match flavor {
        ManifestFlavor::WebExtension => webext::rewrite_web_extension(root, resolver)?,
        ManifestFlavor::Pwa => pwa::rewrite_pwa(root, resolver)?,
    };

    if dirty {
        let output = serde_json::to_string(&manifest).map_err(RewriteError::Serialize)?;
        debug!("re-serialized rewritten manifest ({} bytes)", output.len());
        Ok(RewriteOutcome {
            output,
            dirty: true,
        })
    } else {
        debug!("no references rewritten; passing manifest through verbatim");
        Ok(RewriteOutcome {
            output: source.to_owned(),
            dirty: false,
        })
    }
}

/// Resolve one referenced path into the JSON value that replaces it.
///
/// Resolver failures are wrapped with the offending path and abort the pass.
fn resolve_reference(
    resolver: &mut dyn DependencyResolver,
    path: &str,
    options: DependencyOptions,
) -> Result<Value, RewriteError> {
    match resolver.resolve(path, options) {
        Ok(reference) => {
            trace!("resolved manifest reference {path} -> {reference}");
            Ok(reference.into_value())
        }
        Err(source) => Err(RewriteError::Resolution {
            path: path.to_owned(),
            source,
        }),
    }
}

/// Resolve every string element of `values` in place, preserving order.
///
/// Non-string elements are left untouched. Returns whether any element was
/// replaced.
fn resolve_paths_in_array(
    values: &mut [Value],
    resolver: &mut dyn DependencyResolver,
    options: DependencyOptions,
) -> Result<bool, RewriteError> {
    let mut changed = false;
    for value in values.iter_mut() {
        if let Value::String(path) = value {
            let resolved = resolve_reference(resolver, path, options)?;
            *value = resolved;
            changed = true;
        }
    }
    Ok(changed)
}

/// Resolve a single string-valued field of `object` in place.
///
/// No-ops (returning false) when the field is absent, empty or not a string.
fn resolve_path_field(
    object: &mut Map<String, Value>,
    key: &str,
    resolver: &mut dyn DependencyResolver,
    options: DependencyOptions,
) -> Result<bool, RewriteError> {
    let Some(path) = object
        .get(key)
        .and_then(Value::as_str)
        .filter(|path| !path.is_empty())
        .map(str::to_owned)
    else {
        return Ok(false);
    };
    let resolved = resolve_reference(resolver, &path, options)?;
    object.insert(key.to_owned(), resolved);
    Ok(true)
}

#[cfg(test)]
pub(crate) mod testing {
    use anyhow::{anyhow, Result};

    use crate::resolve::{DependencyOptions, DependencyReference, DependencyResolver};

    /// Test resolver that prefixes every path with `/build/` and records the
    /// order and options of each call.
    #[derive(Debug, Default)]
    pub(crate) struct RecordingResolver {
        pub(crate) calls: Vec<(String, DependencyOptions)>,
        pub(crate) fail_on: Option<String>,
    }

    impl RecordingResolver {
        pub(crate) fn failing_on(path: &str) -> Self {
            Self {
                calls: Vec::new(),
                fail_on: Some(path.to_owned()),
            }
        }

        pub(crate) fn paths(&self) -> Vec<&str> {
            self.calls.iter().map(|(path, _)| path.as_str()).collect()
        }
    }

    impl DependencyResolver for RecordingResolver {
        fn resolve(
            &mut self,
            path: &str,
            options: DependencyOptions,
        ) -> Result<DependencyReference> {
            self.calls.push((path.to_owned(), options));
            if self.fail_on.as_deref() == Some(path) {
                return Err(anyhow!("file not found: {path}"));
            }
            Ok(DependencyReference::new(format!("/build/{path}")))
        }
    }
}
