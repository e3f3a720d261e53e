//! Environment resolution: output layout and public base URL for a variant.

use std::path::PathBuf;

use hearth_config::{AmbientConfig, TargetPaths};

use crate::variant::{BuildVariant, JsLevel, TargetApp};
use crate::{Error, Result};

/// Resolved build environment for one variant.
///
/// Pure given the variant and the ambient configuration; resolution never
/// mutates the configuration it reads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildEnv {
    pub is_prod_build: bool,
    pub latest_build: bool,
    /// Directory bundle output is written to, relative to the project root.
    pub output_path: PathBuf,
    /// Public base URL emitted filenames are served under. Always ends
    /// with `/`.
    pub public_path: String,
}

impl BuildEnv {
    /// Resolve the environment for `variant`.
    ///
    /// Fails fast with [`Error::MissingPublicPath`] when the target has no
    /// public base URL for the requested js-level; nothing downstream can
    /// proceed without one.
    pub fn resolve(variant: &BuildVariant, ambient: &AmbientConfig) -> Result<Self> {
        let paths = target_paths(ambient, variant.target);
        let latest_build = variant.is_latest();

        let (output_path, public_path) = match variant.js_level {
            JsLevel::Latest => (&paths.output_latest, &paths.public_latest),
            JsLevel::Legacy => (&paths.output_legacy, &paths.public_legacy),
        };

        let public_path = public_path.clone().ok_or(Error::MissingPublicPath {
            target: variant.target,
            js_level: variant.js_level,
        })?;

        Ok(Self {
            is_prod_build: variant.is_prod(),
            latest_build,
            output_path: output_path.clone(),
            public_path,
        })
    }
}

/// Total lookup of a target's path table.
pub fn target_paths(ambient: &AmbientConfig, target: TargetApp) -> &TargetPaths {
    match target {
        TargetApp::App => &ambient.targets.app,
        TargetApp::Demo => &ambient.targets.demo,
        TargetApp::Cast => &ambient.targets.cast,
        TargetApp::Hassio => &ambient.targets.hassio,
        TargetApp::Gallery => &ambient.targets.gallery,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::variant::BuildMode;

    #[test]
    fn app_splits_output_per_js_level() {
        let ambient = AmbientConfig::default();
        let latest = BuildEnv::resolve(
            &BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Latest),
            &ambient,
        )
        .expect("resolve latest");
        let legacy = BuildEnv::resolve(
            &BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Legacy),
            &ambient,
        )
        .expect("resolve legacy");

        assert!(latest.latest_build);
        assert!(!legacy.latest_build);
        assert_ne!(latest.output_path, legacy.output_path);
        assert_eq!(latest.public_path, "/frontend_latest/");
        assert_eq!(legacy.public_path, "/frontend_es5/");
    }

    #[test]
    fn missing_public_path_aborts_resolution() {
        let mut ambient = AmbientConfig::default();
        ambient.targets.cast.public_legacy = None;

        let err = BuildEnv::resolve(
            &BuildVariant::new(TargetApp::Cast, BuildMode::Production, JsLevel::Legacy),
            &ambient,
        )
        .unwrap_err();

        assert!(matches!(
            err,
            Error::MissingPublicPath {
                target: TargetApp::Cast,
                js_level: JsLevel::Legacy
            }
        ));
    }

    #[test]
    fn resolution_reads_but_never_mutates_ambient_config() {
        let ambient = AmbientConfig::default();
        let before = ambient.clone();
        let variant = BuildVariant::new(TargetApp::Gallery, BuildMode::Development, JsLevel::Latest);
        let _ = BuildEnv::resolve(&variant, &ambient).expect("resolve");
        assert_eq!(ambient, before);
    }
}
