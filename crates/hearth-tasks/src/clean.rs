//! Output cleaning.

use std::path::Path;

use hearth_bundler::TargetApp;
use hearth_config::AmbientConfig;

use crate::Result;

/// Remove a target's output root and the shared scratch directories.
///
/// Runs first in every sequence so each build starts from an empty
/// output tree.
pub fn clean_target(root: &Path, target: TargetApp, ambient: &AmbientConfig) -> Result<()> {
    let paths = ambient
        .target(target.as_str())
        .map(|t| t.output_root.clone());

    let mut dirs = vec![
        ambient.build_dir.clone(),
        ambient.translations.work_dir.clone(),
    ];
    if let Some(output_root) = paths {
        dirs.insert(0, output_root);
    }

    for dir in dirs {
        let path = root.join(&dir);
        if path.exists() {
            tracing::debug!(path = %path.display(), "removing");
            std::fs::remove_dir_all(&path)?;
        }
    }
    Ok(())
}
