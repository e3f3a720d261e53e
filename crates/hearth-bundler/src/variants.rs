//! Variant configuration factories: one pure function per target
//! application.
//!
//! Each factory supplies entry points, a per-target define overlay and the
//! shared chunk declarations, then defers to [`create_bundle_config`] for
//! the pieces every target shares. Factories never mutate ambient state
//! and are safely callable multiple times per process (once per js-level).

use std::path::PathBuf;

use hearth_config::AmbientConfig;
use indexmap::IndexMap;

use crate::config::{BundleConfig, ChunkGroup, InputOptions, ModuleFormat, OutputOptions};
use crate::defines::{defined_vars, VariableOverlay};
use crate::env::BuildEnv;
use crate::interop::NamedExportTable;
use crate::pipeline::build_pipeline;
use crate::variant::{BuildVariant, TargetApp};
use crate::Result;

type Entries = IndexMap<String, PathBuf>;

fn entries<const N: usize>(pairs: [(&str, &str); N]) -> Entries {
    pairs
        .into_iter()
        .map(|(name, path)| (name.to_string(), PathBuf::from(path)))
        .collect()
}

/// Shared-library chunks extracted for every target.
fn shared_chunk_groups() -> Vec<ChunkGroup> {
    // The rendering library is imported by every entry point; one chunk
    // keeps it from being duplicated per entry.
    vec![ChunkGroup::new("lit", ["lit-html", "lit-element"])]
}

/// The shared half of every factory: resolve the environment, merge the
/// defines, assemble the pipeline, and lay out the output.
fn create_bundle_config(
    variant: &BuildVariant,
    ambient: &AmbientConfig,
    entries: Entries,
    overlay: VariableOverlay,
) -> Result<BundleConfig> {
    let env = BuildEnv::resolve(variant, ambient)?;
    let defines = defined_vars(variant, ambient, &overlay);

    let named_exports = NamedExportTable::builtin();
    named_exports.validate(&ambient.packages)?;

    let pipeline = build_pipeline(variant, &env, defines, named_exports)?;

    let output = OutputOptions {
        dir: env.output_path.clone(),
        format: if env.latest_build {
            ModuleFormat::Esm
        } else {
            ModuleFormat::Iife
        },
        entry_file_names: if env.is_prod_build {
            "[name]-[hash].js".to_string()
        } else {
            "[name].js".to_string()
        },
    };

    tracing::debug!(
        variant = %variant,
        output = %output.dir.display(),
        stages = ?pipeline.names(),
        "created bundle configuration"
    );

    Ok(BundleConfig {
        variant: *variant,
        input: InputOptions {
            entries,
            pipeline,
            chunk_groups: shared_chunk_groups(),
        },
        output,
    })
}

/// Configuration for the main dashboard application.
pub fn create_app_config(variant: &BuildVariant, ambient: &AmbientConfig) -> Result<BundleConfig> {
    let mut app_entries = entries([
        ("app", "src/entrypoints/app.ts"),
        ("authorize", "src/entrypoints/authorize.ts"),
        ("onboarding", "src/entrypoints/onboarding.ts"),
        ("core", "src/entrypoints/core.ts"),
    ]);
    if !variant.is_latest() {
        // Polyfill entry only shipped to legacy runtimes.
        app_entries.insert(
            "compatibility".to_string(),
            PathBuf::from("src/entrypoints/compatibility.ts"),
        );
    }
    create_bundle_config(variant, ambient, app_entries, VariableOverlay::new())
}

/// Configuration for the public demo.
pub fn create_demo_config(variant: &BuildVariant, ambient: &AmbientConfig) -> Result<BundleConfig> {
    let mut overlay = VariableOverlay::new();
    overlay.insert("__DEMO__".to_string(), "true".to_string());
    create_bundle_config(
        variant,
        ambient,
        entries([("main", "demo/src/entrypoint.ts")]),
        overlay,
    )
}

/// Configuration for the cast launcher and receiver.
///
/// Cast bundles read static assets from the copy destination, so the
/// static-file copy must complete before this configuration is executed.
pub fn create_cast_config(variant: &BuildVariant, ambient: &AmbientConfig) -> Result<BundleConfig> {
    create_bundle_config(
        variant,
        ambient,
        entries([
            ("launcher", "cast/src/launcher/entrypoint.ts"),
            ("receiver", "cast/src/receiver/entrypoint.ts"),
        ]),
        VariableOverlay::new(),
    )
}

/// Configuration for the hardware-supervisor panel.
pub fn create_hassio_config(
    variant: &BuildVariant,
    ambient: &AmbientConfig,
) -> Result<BundleConfig> {
    create_bundle_config(
        variant,
        ambient,
        entries([("entrypoint", "hassio/src/entrypoint.ts")]),
        VariableOverlay::new(),
    )
}

/// Configuration for the component gallery.
pub fn create_gallery_config(
    variant: &BuildVariant,
    ambient: &AmbientConfig,
) -> Result<BundleConfig> {
    create_bundle_config(
        variant,
        ambient,
        entries([("entrypoint", "gallery/src/entrypoint.js")]),
        VariableOverlay::new(),
    )
}

/// Dispatch to the factory for the variant's target.
pub fn create_config(variant: &BuildVariant, ambient: &AmbientConfig) -> Result<BundleConfig> {
    match variant.target {
        TargetApp::App => create_app_config(variant, ambient),
        TargetApp::Demo => create_demo_config(variant, ambient),
        TargetApp::Cast => create_cast_config(variant, ambient),
        TargetApp::Hassio => create_hassio_config(variant, ambient),
        TargetApp::Gallery => create_gallery_config(variant, ambient),
    }
}
