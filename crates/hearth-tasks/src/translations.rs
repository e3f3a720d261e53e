//! Translation catalog merging and building.
//!
//! Backend-provided fragments are merged into the frontend catalogs
//! before any bundle configuration is constructed (entry points may
//! reference the generated bundles). Catalogs are JSON objects nested by
//! category; merging is recursive with the fragment winning on leaf
//! conflicts.

use std::path::Path;

use serde_json::Value;

use crate::Result;

/// Merge backend fragments into the frontend catalogs.
///
/// For every `<locale>.json` in `catalog_dir`, the matching fragment from
/// `backend_dir` (if any) is merged in and the result written to
/// `work_dir/merged/<locale>.json`. Returns the merged locale names in
/// sorted order.
pub fn merge_backend_translations(
    catalog_dir: &Path,
    backend_dir: &Path,
    work_dir: &Path,
) -> Result<Vec<String>> {
    let merged_dir = work_dir.join("merged");
    std::fs::create_dir_all(&merged_dir)?;

    let mut locales = Vec::new();
    if !catalog_dir.is_dir() {
        tracing::warn!(dir = %catalog_dir.display(), "no translation catalogs found");
        return Ok(locales);
    }

    for entry in std::fs::read_dir(catalog_dir)? {
        let entry = entry?;
        let path = entry.path();
        if path.extension().and_then(|e| e.to_str()) != Some("json") {
            continue;
        }
        let locale = match path.file_stem().and_then(|s| s.to_str()) {
            Some(stem) => stem.to_string(),
            None => continue,
        };

        let mut catalog: Value = serde_json::from_str(&std::fs::read_to_string(&path)?)?;

        let fragment_path = backend_dir.join(format!("{locale}.json"));
        if fragment_path.is_file() {
            let fragment: Value =
                serde_json::from_str(&std::fs::read_to_string(&fragment_path)?)?;
            merge_values(&mut catalog, &fragment);
            tracing::debug!(%locale, "merged backend fragment");
        }

        std::fs::write(
            merged_dir.join(format!("{locale}.json")),
            serde_json::to_string(&catalog)?,
        )?;
        locales.push(locale);
    }

    locales.sort();
    Ok(locales)
}

/// Build the merged catalogs into the output consumed by entry points.
///
/// Writes each merged catalog to `work_dir/output/<locale>.json` along
/// with a `translationMetadata.json` listing the available locales.
pub fn build_translations(work_dir: &Path) -> Result<Vec<String>> {
    let merged_dir = work_dir.join("merged");
    let output_dir = work_dir.join("output");
    std::fs::create_dir_all(&output_dir)?;

    let mut locales = Vec::new();
    if merged_dir.is_dir() {
        for entry in std::fs::read_dir(&merged_dir)? {
            let entry = entry?;
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("json") {
                continue;
            }
            if let Some(name) = path.file_name().and_then(|n| n.to_str()) {
                std::fs::copy(&path, output_dir.join(name))?;
                if let Some(stem) = path.file_stem().and_then(|s| s.to_str()) {
                    locales.push(stem.to_string());
                }
            }
        }
    }
    locales.sort();

    let metadata = serde_json::json!({ "locales": locales });
    std::fs::write(
        output_dir.join("translationMetadata.json"),
        serde_json::to_string_pretty(&metadata)?,
    )?;

    tracing::info!(count = locales.len(), "built translations");
    Ok(locales)
}

/// Recursive JSON merge: objects merge key by key, anything else is
/// replaced by the overlay value.
fn merge_values(base: &mut Value, overlay: &Value) {
    match (base, overlay) {
        (Value::Object(base_map), Value::Object(overlay_map)) => {
            for (key, overlay_value) in overlay_map {
                match base_map.get_mut(key) {
                    Some(base_value) => merge_values(base_value, overlay_value),
                    None => {
                        base_map.insert(key.clone(), overlay_value.clone());
                    }
                }
            }
        }
        (base, overlay) => *base = overlay.clone(),
    }
}
