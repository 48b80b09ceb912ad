//! Detecting which manifest schema governs field interpretation.

use serde_json::{Map, Value};

/// Top-level keys a WebExtension manifest is required to carry.
const WEB_EXTENSION_KEYS: [&str; 3] = ["manifest_version", "name", "version"];

/// Which of the two known manifest schemas governs field interpretation.
///
/// Detected once per manifest and immutable for the rewrite pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ManifestFlavor {
    /// WebExtension `manifest.json`.
    WebExtension,
    /// PWA web-app manifest (`manifest.json` or `.webmanifest`).
    Pwa,
}

impl ManifestFlavor {
    /// Detect the flavor from the top level of a parsed manifest.
    ///
    /// WebExtension is selected iff all of `manifest_version`, `name` and
    /// `version` are present with truthy values; anything else is handled as
    /// a PWA manifest. Malformed documents are not an error here, they simply
    /// fall through to the PWA branch.
    pub fn detect(root: &Map<String, Value>) -> Self {
        let required_present = WEB_EXTENSION_KEYS
            .iter()
            .all(|key| root.get(*key).is_some_and(is_truthy));
        if required_present {
            ManifestFlavor::WebExtension
        } else {
            ManifestFlavor::Pwa
        }
    }
}

/// JavaScript-style truthiness for a JSON value.
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(flag) => *flag,
        Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
        Value::String(text) => !text.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn root(value: Value) -> Map<String, Value> {
        value.as_object().unwrap().clone()
    }

    #[test]
    fn detects_web_extension_when_required_keys_are_truthy() {
        let manifest = root(json!({
            "manifest_version": 2,
            "name": "extension",
            "version": "1.0.0"
        }));
        assert_eq!(
            ManifestFlavor::detect(&manifest),
            ManifestFlavor::WebExtension
        );
    }

    #[test]
    fn missing_any_required_key_selects_pwa() {
        for key in ["manifest_version", "name", "version"] {
            let mut manifest = root(json!({
                "manifest_version": 2,
                "name": "extension",
                "version": "1.0.0"
            }));
            manifest.remove(key);
            assert_eq!(ManifestFlavor::detect(&manifest), ManifestFlavor::Pwa);
        }
    }

    #[test]
    fn falsy_required_values_select_pwa() {
        for falsy in [json!(0), json!(""), json!(false), json!(null)] {
            let manifest = root(json!({
                "manifest_version": falsy,
                "name": "extension",
                "version": "1.0.0"
            }));
            assert_eq!(ManifestFlavor::detect(&manifest), ManifestFlavor::Pwa);
        }
    }

    #[test]
    fn plain_web_app_manifest_selects_pwa() {
        let manifest = root(json!({
            "name": "app",
            "icons": [{"src": "icon.png", "sizes": "48x48"}]
        }));
        assert_eq!(ManifestFlavor::detect(&manifest), ManifestFlavor::Pwa);
    }
}
