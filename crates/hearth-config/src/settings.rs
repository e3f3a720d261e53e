//! The ambient configuration consumed by the bundle configuration engine
//! and the task runner.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::error::{ConfigError, Result};

/// Default configuration file name, discovered at the project root.
pub const CONFIG_FILE_NAME: &str = "hearth.toml";

/// Process-wide build configuration.
///
/// An `AmbientConfig` is resolved once per invocation and then treated as
/// read-only by every consumer. The configuration engine only ever reads
/// from it; it never mutates it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AmbientConfig {
    /// Suite version, substituted into bundles as `__VERSION__`.
    pub version: String,

    /// Public URL under which unbundled static files are served.
    pub static_path: String,

    /// Scratch directory for generated intermediates (icon JSON, merged
    /// translations).
    pub build_dir: PathBuf,

    /// Translation catalog locations.
    pub translations: TranslationPaths,

    /// Icon set locations.
    pub icons: IconPaths,

    /// Per-target output layout and public base URLs.
    pub targets: TargetTable,

    /// Extra compile-time constants per target, keyed by target name.
    ///
    /// These are merged on top of the mode/js-level derived base set;
    /// an entry here wins over a base entry sharing the same key.
    pub defines: BTreeMap<String, IndexMap<String, String>>,

    /// Packages the suite declares as dependencies. Interop tables are
    /// validated against this set at configuration time.
    pub packages: Vec<String>,
}

impl Default for AmbientConfig {
    fn default() -> Self {
        Self {
            version: "0.0.0".to_string(),
            static_path: "/static/".to_string(),
            build_dir: PathBuf::from("build"),
            translations: TranslationPaths::default(),
            icons: IconPaths::default(),
            targets: TargetTable::default(),
            defines: BTreeMap::new(),
            packages: vec![
                "lit-html".to_string(),
                "lit-element".to_string(),
                "js-yaml".to_string(),
            ],
        }
    }
}

impl AmbientConfig {
    /// Load configuration for a project rooted at `root`.
    ///
    /// Layering, lowest precedence first: built-in defaults, `hearth.toml`
    /// (or `config_path` when given), `HEARTH_*` environment variables
    /// (`__` separates nesting, e.g. `HEARTH_TARGETS__CAST__OUTPUT_ROOT`).
    pub fn load(root: &Path, config_path: Option<&Path>) -> Result<Self> {
        let path = config_path
            .map(Path::to_path_buf)
            .unwrap_or_else(|| root.join(CONFIG_FILE_NAME));

        tracing::debug!(path = %path.display(), "loading ambient configuration");

        let config: AmbientConfig = Figment::from(Serialized::defaults(AmbientConfig::default()))
            .merge(Toml::file(path))
            .merge(Env::prefixed("HEARTH_").split("__"))
            .extract()?;

        config.validate()?;
        Ok(config)
    }

    /// Check invariants that serde cannot express.
    pub fn validate(&self) -> Result<()> {
        if self.version.is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "version".to_string(),
                hint: "version must not be empty".to_string(),
            });
        }
        for (name, target) in self.targets.iter() {
            for public in [&target.public_latest, &target.public_legacy]
                .into_iter()
                .flatten()
            {
                if !public.ends_with('/') {
                    return Err(ConfigError::InvalidValue {
                        field: format!("targets.{name}.public path"),
                        hint: format!("public path {public:?} must end with '/'"),
                    });
                }
            }
        }
        Ok(())
    }

    /// Paths for a target, looked up by name.
    pub fn target(&self, name: &str) -> Option<&TargetPaths> {
        self.targets.get(name)
    }

    /// Extra defines configured for a target, empty if none.
    pub fn target_defines(&self, name: &str) -> IndexMap<String, String> {
        self.defines.get(name).cloned().unwrap_or_default()
    }
}

/// Translation catalog locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TranslationPaths {
    /// Frontend translation catalogs, one JSON file per locale.
    pub catalog_dir: PathBuf,
    /// Backend-provided fragments merged into the catalogs.
    pub backend_dir: PathBuf,
    /// Working directory for merged and built catalogs.
    pub work_dir: PathBuf,
}

impl Default for TranslationPaths {
    fn default() -> Self {
        Self {
            catalog_dir: PathBuf::from("src/translations"),
            backend_dir: PathBuf::from("translations/backend"),
            work_dir: PathBuf::from("build-translations"),
        }
    }
}

/// Icon set locations.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct IconPaths {
    /// Directory scanned for `*.svg` sources.
    pub svg_dir: PathBuf,
    /// Output file for the generated icon JSON.
    pub out_file: PathBuf,
}

impl Default for IconPaths {
    fn default() -> Self {
        Self {
            svg_dir: PathBuf::from("node_modules/@mdi/svg/svg"),
            out_file: PathBuf::from("build/mdi/icons.json"),
        }
    }
}

/// Output layout and public base URLs for every deliverable application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetTable {
    pub app: TargetPaths,
    pub demo: TargetPaths,
    pub cast: TargetPaths,
    pub hassio: TargetPaths,
    pub gallery: TargetPaths,
}

impl TargetTable {
    pub fn get(&self, name: &str) -> Option<&TargetPaths> {
        match name {
            "app" => Some(&self.app),
            "demo" => Some(&self.demo),
            "cast" => Some(&self.cast),
            "hassio" => Some(&self.hassio),
            "gallery" => Some(&self.gallery),
            _ => None,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'static str, &TargetPaths)> {
        [
            ("app", &self.app),
            ("demo", &self.demo),
            ("cast", &self.cast),
            ("hassio", &self.hassio),
            ("gallery", &self.gallery),
        ]
        .into_iter()
    }
}

impl Default for TargetTable {
    fn default() -> Self {
        Self {
            app: TargetPaths {
                output_root: PathBuf::from("hearth_frontend"),
                output_latest: PathBuf::from("hearth_frontend/frontend_latest"),
                output_legacy: PathBuf::from("hearth_frontend/frontend_es5"),
                public_latest: Some("/frontend_latest/".to_string()),
                public_legacy: Some("/frontend_es5/".to_string()),
                statics: vec![PathBuf::from("public")],
            },
            demo: TargetPaths::single("demo/dist", "/", &["demo/public"]),
            cast: TargetPaths::single("cast/dist", "/", &["cast/public"]),
            hassio: TargetPaths::single("hassio/build", "/api/hassio/app/", &[]),
            gallery: TargetPaths::single("gallery/dist", "/", &["gallery/public"]),
        }
    }
}

/// Output layout for one target.
///
/// Targets that ship a single js-level build share one output directory
/// and public path across levels; the main app splits per level.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TargetPaths {
    /// Root removed by the clean task.
    pub output_root: PathBuf,
    /// Output directory for modern (latest) builds.
    pub output_latest: PathBuf,
    /// Output directory for legacy builds.
    pub output_legacy: PathBuf,
    /// Public base URL for modern builds. Absence is a fatal
    /// configuration error when the target is built.
    pub public_latest: Option<String>,
    /// Public base URL for legacy builds.
    pub public_legacy: Option<String>,
    /// Static source directories copied into the output root.
    pub statics: Vec<PathBuf>,
}

impl TargetPaths {
    fn single(dir: &str, public: &str, statics: &[&str]) -> Self {
        Self {
            output_root: PathBuf::from(dir),
            output_latest: PathBuf::from(dir),
            output_legacy: PathBuf::from(dir),
            public_latest: Some(public.to_string()),
            public_legacy: Some(public.to_string()),
            statics: statics.iter().map(PathBuf::from).collect(),
        }
    }
}

impl Default for TargetPaths {
    fn default() -> Self {
        TargetPaths::single("dist", "/", &[])
    }
}
