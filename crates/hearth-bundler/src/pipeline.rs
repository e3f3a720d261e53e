//! Bundle plugin pipeline builder.
//!
//! The pipeline is an ordered, statically inspectable list of plugin
//! descriptors. Conditional inclusion is expressed as an explicit list of
//! (predicate, plugin) pairs evaluated once at construction time, not as
//! branching scattered through configuration code; the resulting
//! [`PipelineSpec`] is a plain value that can be inspected and tested.

use crate::defines::VariableOverlay;
use crate::env::BuildEnv;
use crate::interop::NamedExportTable;
use crate::variant::BuildVariant;
use crate::{Error, Result};

/// One ordered transformation applied to module content during bundling.
#[derive(Debug, Clone, PartialEq)]
pub enum PluginSpec {
    /// Resolve bare module specifiers to filesystem locations.
    /// Browser-oriented resolution takes precedence over generic runtime
    /// resolution.
    Resolve {
        extensions: Vec<String>,
        browser: bool,
        prefer_builtins: bool,
    },
    /// Wrap legacy-module-format dependencies into a uniform module
    /// shape, with an explicit named-export allow-list for packages whose
    /// interop cannot be inferred.
    CommonJs { named_exports: NamedExportTable },
    /// Import structured data files as native values.
    Json,
    /// Transpile to the variant's target JS level.
    Transpile { latest: bool },
    /// Inline matching non-code assets as string literals.
    StringInline { include: Vec<String> },
    /// Replace compile-time constants with the merged variable overlay.
    /// Must run after transpilation and before minification.
    Replace { defines: VariableOverlay },
    /// Record final emitted filenames into the asset manifest.
    ManifestRecord { public_path: String },
    /// Minify output. Production only; always the terminal stage.
    Minify { module: bool },
}

impl PluginSpec {
    /// Name of the stage, by what it does.
    pub fn name(&self) -> &'static str {
        match self {
            PluginSpec::Resolve { .. } => "resolve",
            PluginSpec::CommonJs { .. } => "commonjs",
            PluginSpec::Json => "json",
            PluginSpec::Transpile { .. } => "transpile",
            PluginSpec::StringInline { .. } => "string",
            PluginSpec::Replace { .. } => "replace",
            PluginSpec::ManifestRecord { .. } => "manifest",
            PluginSpec::Minify { .. } => "minify",
        }
    }

    /// Canonical position in the stage ordering.
    fn rank(&self) -> u8 {
        match self {
            PluginSpec::Resolve { .. } => 0,
            PluginSpec::CommonJs { .. } => 1,
            PluginSpec::Json => 2,
            PluginSpec::Transpile { .. } => 3,
            PluginSpec::StringInline { .. } => 4,
            PluginSpec::Replace { .. } => 5,
            PluginSpec::ManifestRecord { .. } => 6,
            PluginSpec::Minify { .. } => 7,
        }
    }
}

/// Ordered sequence of plugin descriptors. Order is semantically
/// significant; see [`PipelineSpec::validate`].
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PipelineSpec {
    stages: Vec<PluginSpec>,
}

impl PipelineSpec {
    /// Evaluate an ordered (predicate, plugin) list into a pipeline.
    pub fn from_conditional(stages: Vec<(bool, PluginSpec)>) -> Self {
        Self {
            stages: stages
                .into_iter()
                .filter_map(|(include, stage)| include.then_some(stage))
                .collect(),
        }
    }

    pub fn stages(&self) -> &[PluginSpec] {
        &self.stages
    }

    pub fn iter(&self) -> impl Iterator<Item = &PluginSpec> {
        self.stages.iter()
    }

    pub fn last(&self) -> Option<&PluginSpec> {
        self.stages.last()
    }

    /// Stage names in order, for inspection and assertions.
    pub fn names(&self) -> Vec<&'static str> {
        self.stages.iter().map(PluginSpec::name).collect()
    }

    pub fn has_minify(&self) -> bool {
        self.stages
            .iter()
            .any(|s| matches!(s, PluginSpec::Minify { .. }))
    }

    /// Public path carried by the manifest recording stage, if present.
    pub fn manifest_public_path(&self) -> Option<&str> {
        self.stages.iter().find_map(|s| match s {
            PluginSpec::ManifestRecord { public_path } => Some(public_path.as_str()),
            _ => None,
        })
    }

    /// The merged defines carried by the constant replacement stage.
    pub fn replace_defines(&self) -> Option<&VariableOverlay> {
        self.stages.iter().find_map(|s| match s {
            PluginSpec::Replace { defines } => Some(defines),
            _ => None,
        })
    }

    /// Check the ordering contract:
    ///
    /// - stages appear in canonical order (resolution before interop
    ///   before transpilation before replacement before minification);
    /// - constant replacement runs after transpilation and before
    ///   minification;
    /// - a manifest recording stage is present;
    /// - minification, when present, is the terminal stage.
    pub fn validate(&self) -> Result<()> {
        let mut last_rank = None;
        for stage in &self.stages {
            let rank = stage.rank();
            if let Some(prev) = last_rank {
                if rank <= prev {
                    return Err(Error::PipelineOrder(format!(
                        "stage {:?} out of order",
                        stage.name()
                    )));
                }
            }
            last_rank = Some(rank);
        }

        let position = |name: &str| self.stages.iter().position(|s| s.name() == name);
        match (position("replace"), position("transpile")) {
            (Some(replace), Some(transpile)) if replace < transpile => {
                return Err(Error::PipelineOrder(
                    "constant replacement must run after transpilation".to_string(),
                ));
            }
            _ => {}
        }

        if self.manifest_public_path().is_none() {
            return Err(Error::PipelineOrder(
                "manifest recording stage missing".to_string(),
            ));
        }

        if self.has_minify() && !matches!(self.last(), Some(PluginSpec::Minify { .. })) {
            return Err(Error::PipelineOrder(
                "minification must be the terminal stage".to_string(),
            ));
        }

        Ok(())
    }
}

/// Source extensions the resolution stage considers.
const EXTENSIONS: [&str; 2] = [".js", ".ts"];

/// Extensions imported as string literals.
const STRING_INCLUDE: [&str; 1] = ["**/*.css"];

/// Assemble the plugin pipeline for a variant.
///
/// Deterministic: the same variant, environment, defines and interop
/// table always produce an equal [`PipelineSpec`]. Minification is
/// included exactly when the environment is a production build.
pub fn build_pipeline(
    variant: &BuildVariant,
    env: &BuildEnv,
    defines: VariableOverlay,
    named_exports: NamedExportTable,
) -> Result<PipelineSpec> {
    let stages = vec![
        (
            true,
            PluginSpec::Resolve {
                extensions: EXTENSIONS.iter().map(|e| e.to_string()).collect(),
                browser: true,
                prefer_builtins: false,
            },
        ),
        (true, PluginSpec::CommonJs { named_exports }),
        (true, PluginSpec::Json),
        (
            true,
            PluginSpec::Transpile {
                latest: env.latest_build,
            },
        ),
        (
            true,
            PluginSpec::StringInline {
                include: STRING_INCLUDE.iter().map(|e| e.to_string()).collect(),
            },
        ),
        (true, PluginSpec::Replace { defines }),
        (
            true,
            PluginSpec::ManifestRecord {
                public_path: env.public_path.clone(),
            },
        ),
        (
            env.is_prod_build,
            PluginSpec::Minify {
                module: env.latest_build,
            },
        ),
    ];

    let pipeline = PipelineSpec::from_conditional(stages);
    pipeline.validate()?;
    tracing::trace!(%variant, stages = ?pipeline.names(), "assembled pipeline");
    Ok(pipeline)
}
