//! # hearth-bundler
//!
//! Build-variant resolution and bundle configuration for the hearth
//! frontend suite.
//!
//! The core of this crate is a pure function of (target application, build
//! mode, JS language level): given a [`BuildVariant`] and an ambient
//! [`AmbientConfig`](hearth_config::AmbientConfig), the variant
//! configuration factories in [`variants`] deterministically produce a
//! [`BundleConfig`]: entry points, an ordered [`PipelineSpec`], chunk
//! groups, and an output layout. The same variant always yields a
//! structurally equal configuration.
//!
//! Actual module resolution, transpilation and minification are delegated
//! to a bundling engine behind the [`BundleEngine`] trait; this crate only
//! decides *what* that engine should do and tracks the resulting output in
//! an [`AssetManifest`].
//!
//! ```no_run
//! use hearth_bundler::{create_config, BuildMode, BuildVariant, JsLevel, TargetApp};
//! use hearth_config::AmbientConfig;
//!
//! # fn main() -> hearth_bundler::Result<()> {
//! let ambient = AmbientConfig::default();
//! let variant = BuildVariant::new(TargetApp::Cast, BuildMode::Development, JsLevel::Latest);
//! let config = create_config(&variant, &ambient)?;
//! assert!(!config.input.pipeline.has_minify());
//! # Ok(()) }
//! ```

pub mod defines;
pub mod env;
pub mod executor;
pub mod interop;
pub mod manifest;
pub mod pipeline;
pub mod variant;
pub mod variants;

mod config;

pub use config::{BundleConfig, ChunkGroup, InputOptions, ModuleFormat, OutputOptions};
pub use defines::{defined_vars, VariableOverlay};
pub use env::{target_paths, BuildEnv};
pub use executor::{run_bundle, BundleEngine, EmittedChunk, ReferenceEngine};
pub use interop::NamedExportTable;
pub use manifest::AssetManifest;
pub use pipeline::{build_pipeline, PipelineSpec, PluginSpec};
pub use variant::{BuildMode, BuildVariant, JsLevel, TargetApp};
pub use variants::{
    create_app_config, create_cast_config, create_config, create_demo_config,
    create_gallery_config, create_hassio_config,
};

/// Error types for bundle configuration and execution.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// No public base URL configured for a target/js-level pair.
    #[error("no public path configured for target {target} ({js_level})")]
    MissingPublicPath { target: TargetApp, js_level: JsLevel },

    /// An entry point does not exist on disk.
    #[error("entry point {entry:?} for variant {variant} not found: {}", .path.display())]
    EntryNotFound {
        variant: String,
        entry: String,
        path: std::path::PathBuf,
    },

    /// The interop named-export table references a package the suite does
    /// not declare as a dependency.
    #[error("named-export interop table references unknown package: {0}")]
    UnknownInteropPackage(String),

    /// The constructed pipeline violates the stage ordering contract.
    #[error("plugin ordering violation: {0}")]
    PipelineOrder(String),

    /// An asset was resolved before it was recorded.
    #[error("asset not recorded in manifest: {0}")]
    AssetNotRecorded(String),

    /// The manifest was written to after bundling completed.
    #[error("manifest already sealed, refusing to record {0}")]
    ManifestSealed(String),

    /// The bundling engine failed. Propagated unchanged; builds are
    /// deterministic so there is no retry policy.
    #[error("bundling engine failed: {0}")]
    Engine(String),

    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Ambient configuration error.
    #[error(transparent)]
    Config(#[from] hearth_config::ConfigError),
}

/// Result type alias for bundle configuration operations.
pub type Result<T> = std::result::Result<T, Error>;

impl miette::Diagnostic for Error {
    fn code(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        Some(Box::new(match self {
            Error::MissingPublicPath { .. } => "MISSING_PUBLIC_PATH",
            Error::EntryNotFound { .. } => "ENTRY_NOT_FOUND",
            Error::UnknownInteropPackage(_) => "UNKNOWN_INTEROP_PACKAGE",
            Error::PipelineOrder(_) => "PIPELINE_ORDER",
            Error::AssetNotRecorded(_) => "ASSET_NOT_RECORDED",
            Error::ManifestSealed(_) => "MANIFEST_SEALED",
            Error::Engine(_) => "ENGINE_ERROR",
            Error::Io(_) => "IO_ERROR",
            Error::Config(_) => "CONFIG_ERROR",
        }))
    }

    fn severity(&self) -> Option<miette::Severity> {
        Some(miette::Severity::Error)
    }

    fn help(&self) -> Option<Box<dyn std::fmt::Display + '_>> {
        match self {
            Error::MissingPublicPath { target, js_level } => Some(Box::new(format!(
                "Set targets.{target}.public_{} in hearth.toml.",
                match js_level {
                    JsLevel::Latest => "latest",
                    JsLevel::Legacy => "legacy",
                }
            ))),
            Error::EntryNotFound { path, .. } => Some(Box::new(format!(
                "Check that {} exists relative to the project root.",
                path.display()
            ))),
            Error::UnknownInteropPackage(package) => Some(Box::new(format!(
                "Add {package:?} to the packages list in hearth.toml or remove its interop entry."
            ))),
            Error::AssetNotRecorded(name) => Some(Box::new(format!(
                "{name:?} was resolved before bundling recorded it. Generators must run after the bundle step completes."
            ))),
            _ => None,
        }
    }
}
