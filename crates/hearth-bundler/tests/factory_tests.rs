//! Properties of the variant configuration factories.

use hearth_bundler::{
    create_app_config, create_cast_config, create_config, create_demo_config, BuildMode,
    BuildVariant, JsLevel, ModuleFormat, PluginSpec, TargetApp,
};
use hearth_config::AmbientConfig;

fn all_variants() -> Vec<BuildVariant> {
    let mut variants = Vec::new();
    for target in TargetApp::all() {
        for mode in [BuildMode::Development, BuildMode::Production] {
            for js_level in [JsLevel::Latest, JsLevel::Legacy] {
                variants.push(BuildVariant::new(target, mode, js_level));
            }
        }
    }
    variants
}

#[test]
fn minify_is_terminal_iff_production() {
    let ambient = AmbientConfig::default();
    for variant in all_variants() {
        let config = create_config(&variant, &ambient).expect("config");
        let pipeline = &config.input.pipeline;
        if variant.is_prod() {
            assert!(
                matches!(pipeline.last(), Some(PluginSpec::Minify { .. })),
                "{variant}: production pipeline must end in minification"
            );
        } else {
            assert!(
                !pipeline.has_minify(),
                "{variant}: development pipeline must not minify"
            );
        }
    }
}

#[test]
fn filenames_hash_iff_production() {
    let ambient = AmbientConfig::default();
    for variant in all_variants() {
        let config = create_config(&variant, &ambient).expect("config");
        assert_eq!(
            config.output.hashes_filenames(),
            variant.is_prod(),
            "{variant}: hash placeholder presence must track production"
        );
    }
}

#[test]
fn module_format_tracks_js_level() {
    let ambient = AmbientConfig::default();
    for variant in all_variants() {
        let config = create_config(&variant, &ambient).expect("config");
        let expected = if variant.is_latest() {
            ModuleFormat::Esm
        } else {
            ModuleFormat::Iife
        };
        assert_eq!(config.output.format, expected, "{variant}");
    }
}

#[test]
fn factories_are_deterministic() {
    let ambient = AmbientConfig::default();
    for variant in all_variants() {
        let first = create_config(&variant, &ambient).expect("config");
        let second = create_config(&variant, &ambient).expect("config");
        assert_eq!(first, second, "{variant}: structurally equal configs");
    }
}

#[test]
fn cast_development_latest_example() {
    let ambient = AmbientConfig::default();
    let variant = BuildVariant::new(TargetApp::Cast, BuildMode::Development, JsLevel::Latest);
    let config = create_cast_config(&variant, &ambient).expect("config");

    assert!(!config.input.pipeline.has_minify());
    assert_eq!(config.output.format, ModuleFormat::Esm);
    assert_eq!(
        config.output.filename_for("receiver", b"code"),
        "receiver.js"
    );
}

#[test]
fn app_production_legacy_example() {
    let ambient = AmbientConfig::default();
    let variant = BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Legacy);
    let config = create_app_config(&variant, &ambient).expect("config");

    assert!(matches!(
        config.input.pipeline.last(),
        Some(PluginSpec::Minify { module: false })
    ));
    assert_eq!(config.output.format, ModuleFormat::Iife);
    let name = config.output.filename_for("app", b"code");
    assert!(name.starts_with("app-") && name.ends_with(".js"));
    assert_ne!(name, "app.js");
}

#[test]
fn legacy_app_gains_the_compatibility_entry() {
    let ambient = AmbientConfig::default();
    let latest = create_app_config(
        &BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Latest),
        &ambient,
    )
    .expect("latest");
    let legacy = create_app_config(
        &BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Legacy),
        &ambient,
    )
    .expect("legacy");

    assert!(!latest.input.entries.contains_key("compatibility"));
    assert!(legacy.input.entries.contains_key("compatibility"));
}

#[test]
fn demo_overlay_flips_the_demo_flag() {
    let ambient = AmbientConfig::default();
    let variant = BuildVariant::new(TargetApp::Demo, BuildMode::Production, JsLevel::Latest);
    let config = create_demo_config(&variant, &ambient).expect("config");

    let defines = config
        .input
        .pipeline
        .replace_defines()
        .expect("replace stage present");
    assert_eq!(defines["__DEMO__"], "true");
    assert_eq!(defines["__DEV__"], "false");
}

#[test]
fn chunk_groups_are_statically_declared() {
    let ambient = AmbientConfig::default();
    let variant = BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Latest);
    let config = create_config(&variant, &ambient).expect("config");

    let lit = config
        .input
        .chunk_groups
        .iter()
        .find(|g| g.name == "lit")
        .expect("lit chunk group");
    assert_eq!(lit.packages, ["lit-html", "lit-element"]);
}

#[test]
fn undeclared_interop_package_is_a_config_error() {
    let mut ambient = AmbientConfig::default();
    ambient.packages.retain(|p| p != "js-yaml");
    let variant = BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Latest);
    let err = create_config(&variant, &ambient).unwrap_err();
    assert!(matches!(
        err,
        hearth_bundler::Error::UnknownInteropPackage(p) if p == "js-yaml"
    ));
}

#[test]
fn pipeline_public_path_matches_the_resolved_environment() {
    let ambient = AmbientConfig::default();
    let variant = BuildVariant::new(TargetApp::Hassio, BuildMode::Development, JsLevel::Latest);
    let config = create_config(&variant, &ambient).expect("config");
    assert_eq!(
        config.input.pipeline.manifest_public_path(),
        Some("/api/hassio/app/")
    );
}
