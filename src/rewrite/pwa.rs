//! Field walkers for PWA web-app manifests.

use serde_json::{Map, Value};

use super::resolve_path_field;
use crate::error::RewriteError;
use crate::resolve::{DependencyOptions, DependencyResolver};

/// Rewrite the three known PWA fields: `icons`, `screenshots` and
/// `serviceworker`.
///
/// All three are always attempted; there is no per-field dispatch here. The
/// dirty flag reports structural eligibility: an `icons` or `screenshots`
/// array counts as a rewrite as soon as it exists, even when resolution
/// leaves every path string unchanged, because the entries' values change
/// from raw paths to dependency references.
pub(super) fn rewrite_pwa(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let mut dirty = walk_image_list(root, "icons", resolver)?;
    dirty |= walk_image_list(root, "screenshots", resolver)?;
    dirty |= walk_serviceworker(root, resolver)?;
    Ok(dirty)
}

/// Resolve the `src` of every image object in the named array field.
///
/// Sibling fields (`sizes`, `type`, ...) pass through untouched, as do
/// entries without a string `src`.
fn walk_image_list(
    root: &mut Map<String, Value>,
    key: &str,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(images) = root.get_mut(key).and_then(Value::as_array_mut) else {
        return Ok(false);
    };
    for image in images.iter_mut() {
        if let Some(image) = image.as_object_mut() {
            resolve_path_field(image, "src", resolver, DependencyOptions::asset())?;
        }
    }
    Ok(true)
}

fn walk_serviceworker(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(worker) = root.get_mut("serviceworker").and_then(Value::as_object_mut) else {
        return Ok(false);
    };
    resolve_path_field(worker, "src", resolver, DependencyOptions::asset())
}
