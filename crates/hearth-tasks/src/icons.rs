//! Icon JSON generation.
//!
//! Scans an SVG icon directory and emits a single JSON file mapping icon
//! name to its path data, consumed at runtime by the icon elements.

use std::collections::BTreeMap;
use std::path::Path;

use regex::Regex;
use walkdir::WalkDir;

use crate::Result;

/// Extract the drawing path from one SVG source.
fn extract_path(svg: &str, pattern: &Regex) -> Option<String> {
    pattern
        .captures(svg)
        .and_then(|caps| caps.get(1))
        .map(|m| m.as_str().to_string())
}

/// Generate the icon JSON from `svg_dir` into `out_file`.
///
/// Icons whose path data cannot be extracted are skipped with a warning.
/// Returns the number of icons written.
pub fn gen_icons_json(svg_dir: &Path, out_file: &Path) -> Result<usize> {
    let pattern = Regex::new(r#"\bd="([^"]+)""#)?;
    let mut icons = BTreeMap::new();

    if svg_dir.is_dir() {
        for entry in WalkDir::new(svg_dir).into_iter().filter_map(|e| e.ok()) {
            let path = entry.path();
            if path.extension().and_then(|e| e.to_str()) != Some("svg") {
                continue;
            }
            let name = match path.file_stem().and_then(|s| s.to_str()) {
                Some(stem) => stem.to_string(),
                None => continue,
            };
            let svg = std::fs::read_to_string(path)?;
            match extract_path(&svg, &pattern) {
                Some(d) => {
                    icons.insert(name, d);
                }
                None => tracing::warn!(icon = %name, "no path data found, skipping"),
            }
        }
    } else {
        tracing::warn!(dir = %svg_dir.display(), "icon directory missing");
    }

    if let Some(parent) = out_file.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out_file, serde_json::to_string(&icons)?)?;

    tracing::info!(count = icons.len(), "generated icon JSON");
    Ok(icons.len())
}
