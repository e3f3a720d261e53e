//! Develop/build sequences.
//!
//! Each sequence is a cooperative pipeline of independently-awaitable
//! steps: clean, translation merge, icons and translation build in
//! parallel, static copy, bundle, post-process. Bundling-engine failures abort
//! the sequence and propagate without partial recovery.

use std::path::PathBuf;
use std::sync::Arc;

use hearth_bundler::{
    create_config, run_bundle, target_paths, AssetManifest, BundleEngine, BuildMode, BuildVariant,
    JsLevel, TargetApp,
};
use hearth_config::AmbientConfig;

use crate::{clean, entry_html, icons, service_worker, statics, translations, Result};

/// Everything a sequence needs: the project root, the resolved ambient
/// configuration, and the bundling engine.
pub struct BuildContext {
    pub root: PathBuf,
    pub ambient: AmbientConfig,
    pub engine: Arc<dyn BundleEngine>,
}

impl BuildContext {
    pub fn new(root: impl Into<PathBuf>, ambient: AmbientConfig, engine: Arc<dyn BundleEngine>) -> Self {
        Self {
            root: root.into(),
            ambient,
            engine,
        }
    }
}

/// Steps shared by every sequence, up to and including the static copy.
///
/// Translation merging completes before any configuration factory runs
/// because entry points may reference the generated bundles. Icon
/// generation and translation building have no data dependency and write
/// to disjoint locations, so they run concurrently. The static copy
/// finishes before bundling because the cast target reads bundle inputs
/// from the copy destination.
async fn prepare(ctx: &BuildContext, target: TargetApp) -> Result<()> {
    clean::clean_target(&ctx.root, target, &ctx.ambient)?;

    let t = &ctx.ambient.translations;
    translations::merge_backend_translations(
        &ctx.root.join(&t.catalog_dir),
        &ctx.root.join(&t.backend_dir),
        &ctx.root.join(&t.work_dir),
    )?;

    let svg_dir = ctx.root.join(&ctx.ambient.icons.svg_dir);
    let icons_out = ctx.root.join(&ctx.ambient.icons.out_file);
    let work_dir = ctx.root.join(&t.work_dir);
    let icons_task = tokio::task::spawn_blocking(move || icons::gen_icons_json(&svg_dir, &icons_out));
    let translations_task =
        tokio::task::spawn_blocking(move || translations::build_translations(&work_dir));
    let (icons_result, translations_result) = tokio::try_join!(icons_task, translations_task)?;
    icons_result?;
    translations_result?;

    let paths = target_paths(&ctx.ambient, target);
    statics::copy_static_sources(&ctx.root, &paths.statics, &paths.output_root.join("static"))?;

    Ok(())
}

/// Bundle one variant into a fresh manifest and export `manifest.json`
/// alongside the emitted files.
pub(crate) async fn bundle_level(ctx: &BuildContext, variant: BuildVariant) -> Result<AssetManifest> {
    let config = create_config(&variant, &ctx.ambient)?;
    let manifest = AssetManifest::new();
    run_bundle(&ctx.root, &config, ctx.engine.as_ref(), &manifest).await?;
    manifest.write_json(&ctx.root.join(&config.output.dir).join("manifest.json"))?;
    Ok(manifest)
}

/// Post-bundle generation. Both generators consume the sealed manifests
/// read-only.
fn post_process(
    ctx: &BuildContext,
    target: TargetApp,
    latest: &AssetManifest,
    legacy: Option<&AssetManifest>,
    is_prod_build: bool,
) -> Result<()> {
    let out_root = ctx.root.join(&target_paths(&ctx.ambient, target).output_root);
    match target {
        TargetApp::App => {
            entry_html::generate_index_html(
                "Hearth",
                &["core.js", "app.js"],
                latest,
                legacy,
                &out_root.join("index.html"),
            )?;
            service_worker::generate_service_worker(latest, &out_root, is_prod_build)?;
        }
        TargetApp::Cast => {
            entry_html::generate_index_html(
                "Hearth Cast",
                &["launcher.js"],
                latest,
                legacy,
                &out_root.join("index.html"),
            )?;
        }
        TargetApp::Demo => {
            entry_html::generate_index_html(
                "Hearth Demo",
                &["main.js"],
                latest,
                legacy,
                &out_root.join("index.html"),
            )?;
        }
        TargetApp::Hassio | TargetApp::Gallery => {}
    }
    Ok(())
}

/// Production build of one target.
///
/// Bundles the modern js-level first, then the legacy one; stats builds
/// analyze the modern bundle only and skip the legacy pass.
pub async fn build(ctx: &BuildContext, target: TargetApp, stats_build: bool) -> Result<()> {
    tracing::info!(%target, "starting production build");
    prepare(ctx, target).await?;

    let latest = BuildVariant::new(target, BuildMode::Production, JsLevel::Latest)
        .with_stats(stats_build);
    let latest_manifest = bundle_level(ctx, latest).await?;

    let legacy_manifest = if stats_build {
        None
    } else {
        let legacy = BuildVariant::new(target, BuildMode::Production, JsLevel::Legacy);
        Some(bundle_level(ctx, legacy).await?)
    };

    post_process(ctx, target, &latest_manifest, legacy_manifest.as_ref(), true)?;
    tracing::info!(%target, "production build finished");
    Ok(())
}

/// One development build of one target (modern js-level only).
///
/// Returns the sealed manifest so a watch loop can hand it to further
/// readers.
pub async fn develop(ctx: &BuildContext, target: TargetApp) -> Result<AssetManifest> {
    tracing::info!(%target, "starting development build");
    prepare(ctx, target).await?;

    let variant = BuildVariant::new(target, BuildMode::Development, JsLevel::Latest);
    let manifest = bundle_level(ctx, variant).await?;

    post_process(ctx, target, &manifest, None, false)?;
    tracing::info!(%target, "development build finished");
    Ok(manifest)
}
