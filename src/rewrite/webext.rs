//! Field walkers for WebExtension `manifest.json` documents.

use serde_json::{Map, Value};

use super::{resolve_path_field, resolve_paths_in_array, resolve_reference};
use crate::error::RewriteError;
use crate::resolve::{DependencyOptions, DependencyResolver};

/// Known WebExtension schema fields that can reference bundled files.
///
/// The walk dispatches over this fixed table; top-level keys that are not
/// listed here (`permissions`, `version`, ...) are never touched.
#[derive(Debug, Clone, Copy)]
enum WebExtensionField {
    Background,
    ContentScripts,
    WebAccessibleResources,
    /// `browser_action` / `page_action`, a mutually exclusive pair.
    Action,
    Icons,
}

const FIELDS: [WebExtensionField; 5] = [
    WebExtensionField::Background,
    WebExtensionField::ContentScripts,
    WebExtensionField::WebAccessibleResources,
    WebExtensionField::Action,
    WebExtensionField::Icons,
];

/// Run every registered field walker over a WebExtension manifest.
///
/// Returns whether any walker performed a substitution. Absent or
/// wrong-typed fields degrade to per-field no-ops rather than errors.
pub(super) fn rewrite_web_extension(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let mut dirty = false;
    for field in FIELDS {
        let changed = match field {
            WebExtensionField::Background => walk_background(root, resolver)?,
            WebExtensionField::ContentScripts => walk_content_scripts(root, resolver)?,
            WebExtensionField::WebAccessibleResources => {
                walk_web_accessible_resources(root, resolver)?
            }
            WebExtensionField::Action => walk_action(root, resolver)?,
            WebExtensionField::Icons => walk_icons(root, resolver)?,
        };
        dirty |= changed;
    }
    Ok(dirty)
}

/// `background.scripts` is an array of entry scripts, `background.page` a
/// single entry page. The schema allows both at once; each is processed
/// independently.
fn walk_background(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(background) = root.get_mut("background").and_then(Value::as_object_mut) else {
        return Ok(false);
    };
    let mut changed = false;
    if let Some(Value::Array(scripts)) = background.get_mut("scripts") {
        changed |= resolve_paths_in_array(scripts, resolver, DependencyOptions::entry())?;
    }
    changed |= resolve_path_field(background, "page", resolver, DependencyOptions::entry())?;
    Ok(changed)
}

/// Each `content_scripts` entry may carry `js` and `css` path arrays; the
/// two are rewritten independently per entry and missing fields stay absent.
fn walk_content_scripts(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(entries) = root.get_mut("content_scripts").and_then(Value::as_array_mut) else {
        return Ok(false);
    };
    let mut changed = false;
    for entry in entries.iter_mut() {
        let Some(entry) = entry.as_object_mut() else {
            continue;
        };
        if let Some(Value::Array(js)) = entry.get_mut("js") {
            changed |= resolve_paths_in_array(js, resolver, DependencyOptions::entry())?;
        }
        if let Some(Value::Array(css)) = entry.get_mut("css") {
            changed |= resolve_paths_in_array(css, resolver, DependencyOptions::entry())?;
        }
    }
    Ok(changed)
}

fn walk_web_accessible_resources(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(resources) = root
        .get_mut("web_accessible_resources")
        .and_then(Value::as_array_mut)
    else {
        return Ok(false);
    };
    resolve_paths_in_array(resources, resolver, DependencyOptions::entry())
}

/// `browser_action` and `page_action` are alternative action definitions;
/// when both appear only `browser_action` is processed.
fn walk_action(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(key) = ["browser_action", "page_action"]
        .into_iter()
        .find(|key| root.get(*key).is_some_and(Value::is_object))
    else {
        return Ok(false);
    };
    let Some(action) = root.get_mut(key).and_then(Value::as_object_mut) else {
        return Ok(false);
    };
    let mut changed =
        resolve_path_field(action, "default_popup", resolver, DependencyOptions::entry())?;
    changed |= resolve_path_field(action, "default_icon", resolver, DependencyOptions::entry())?;
    Ok(changed)
}

/// WebExtension `icons` maps size labels ("16", "48", ...) to paths; every
/// string value is resolved in place with its key preserved.
fn walk_icons(
    root: &mut Map<String, Value>,
    resolver: &mut dyn DependencyResolver,
) -> Result<bool, RewriteError> {
    let Some(icons) = root.get_mut("icons").and_then(Value::as_object_mut) else {
        return Ok(false);
    };
    let mut changed = false;
    for value in icons.values_mut() {
        if let Value::String(path) = value {
            let path = path.clone();
            *value = resolve_reference(resolver, &path, DependencyOptions::entry())?;
            changed = true;
        }
    }
    Ok(changed)
}
