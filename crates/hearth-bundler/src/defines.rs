//! Compile-time constant substitutions for a build variant.

use hearth_config::AmbientConfig;
use indexmap::IndexMap;

use crate::variant::BuildVariant;

/// Mapping from constant name to the replacement source literal.
///
/// Values are spliced into module source verbatim, so string replacements
/// carry their quotes (`"\"latest\""`) while booleans do not (`"false"`).
pub type VariableOverlay = IndexMap<String, String>;

/// Build the merged variable definition table for `variant`.
///
/// The base set is derived from the build mode and js-level. Entries from
/// the ambient per-target defines are applied next, and `overlay` (the
/// factory-supplied per-target overlay) last. Later entries strictly
/// override earlier ones sharing a key; replacement is whole-value, never
/// a deep merge.
pub fn defined_vars(
    variant: &BuildVariant,
    ambient: &AmbientConfig,
    overlay: &VariableOverlay,
) -> VariableOverlay {
    let mut vars = VariableOverlay::new();

    vars.insert("__DEV__".to_string(), (!variant.is_prod()).to_string());
    vars.insert("__DEMO__".to_string(), "false".to_string());
    vars.insert(
        "__BUILD__".to_string(),
        js_string(variant.js_level.as_str()),
    );
    vars.insert("__VERSION__".to_string(), js_string(&ambient.version));
    vars.insert(
        "__STATIC_PATH__".to_string(),
        js_string(&ambient.static_path),
    );
    vars.insert(
        "process.env.NODE_ENV".to_string(),
        js_string(variant.mode.as_str()),
    );

    for (key, value) in ambient.target_defines(variant.target.as_str()) {
        vars.insert(key, value);
    }
    for (key, value) in overlay {
        vars.insert(key.clone(), value.clone());
    }

    vars
}

/// Quote a value as a JS string literal.
fn js_string(value: &str) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| format!("{value:?}"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::{BuildMode, JsLevel, TargetApp};

    fn variant(mode: BuildMode, js_level: JsLevel) -> BuildVariant {
        BuildVariant::new(TargetApp::App, mode, js_level)
    }

    #[test]
    fn base_set_tracks_mode_and_js_level() {
        let ambient = AmbientConfig::default();
        let vars = defined_vars(
            &variant(BuildMode::Development, JsLevel::Latest),
            &ambient,
            &VariableOverlay::new(),
        );

        assert_eq!(vars["__DEV__"], "true");
        assert_eq!(vars["__BUILD__"], "\"latest\"");
        assert_eq!(vars["process.env.NODE_ENV"], "\"development\"");

        let vars = defined_vars(
            &variant(BuildMode::Production, JsLevel::Legacy),
            &ambient,
            &VariableOverlay::new(),
        );
        assert_eq!(vars["__DEV__"], "false");
        assert_eq!(vars["__BUILD__"], "\"es5\"");
        assert_eq!(vars["process.env.NODE_ENV"], "\"production\"");
    }

    #[test]
    fn overlay_strictly_overrides_base() {
        let ambient = AmbientConfig::default();
        let mut overlay = VariableOverlay::new();
        overlay.insert("__DEMO__".to_string(), "true".to_string());

        let vars = defined_vars(
            &variant(BuildMode::Production, JsLevel::Latest),
            &ambient,
            &overlay,
        );

        // O[k], never B[k].
        assert_eq!(vars["__DEMO__"], "true");
    }

    #[test]
    fn factory_overlay_overrides_ambient_defines() {
        let mut ambient = AmbientConfig::default();
        ambient.defines.insert(
            "app".to_string(),
            IndexMap::from([("__FLAG__".to_string(), "1".to_string())]),
        );
        let mut overlay = VariableOverlay::new();
        overlay.insert("__FLAG__".to_string(), "2".to_string());

        let vars = defined_vars(
            &variant(BuildMode::Development, JsLevel::Latest),
            &ambient,
            &overlay,
        );
        assert_eq!(vars["__FLAG__"], "2");
    }

    #[test]
    fn version_is_a_quoted_literal() {
        let mut ambient = AmbientConfig::default();
        ambient.version = "2026.8.0".to_string();
        let vars = defined_vars(
            &variant(BuildMode::Production, JsLevel::Latest),
            &ambient,
            &VariableOverlay::new(),
        );
        assert_eq!(vars["__VERSION__"], "\"2026.8.0\"");
    }
}
