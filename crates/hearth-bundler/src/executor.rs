//! Bundle execution seam.
//!
//! The engine that performs module resolution, transpilation and
//! minification is an external collaborator behind the [`BundleEngine`]
//! trait. [`run_bundle`] owns everything around it: entry validation,
//! output naming, writing emitted chunks, and manifest recording.

use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::config::BundleConfig;
use crate::manifest::AssetManifest;
use crate::{Error, Result};

/// One chunk emitted by the bundling engine, prior to output naming.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmittedChunk {
    /// Logical chunk name (entry name or shared chunk group name).
    pub name: String,
    pub code: String,
}

impl EmittedChunk {
    pub fn new(name: impl Into<String>, code: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
        }
    }
}

/// The bundling engine. Executes a pipeline over the configured entry
/// points and returns the emitted chunks.
///
/// Engine failures (syntax errors, unresolved imports) abort the overall
/// task sequence and propagate unchanged; builds are deterministic, so
/// there is no retry policy.
#[async_trait]
pub trait BundleEngine: Send + Sync {
    async fn bundle(&self, config: &BundleConfig) -> Result<Vec<EmittedChunk>>;
}

/// Execute one bundle invocation.
///
/// Validates that every entry point exists (a missing entry is a fatal
/// configuration error naming the offending variant), dispatches the
/// engine, applies the output naming pattern to each emitted chunk,
/// writes it under the configured output directory, records its public
/// path in `manifest`, and finally seals the manifest.
///
/// Returns the written file paths.
pub async fn run_bundle(
    root: &Path,
    config: &BundleConfig,
    engine: &dyn BundleEngine,
    manifest: &AssetManifest,
) -> Result<Vec<PathBuf>> {
    for (name, entry) in &config.input.entries {
        let path = root.join(entry);
        if !path.is_file() {
            return Err(Error::EntryNotFound {
                variant: config.variant.to_string(),
                entry: name.clone(),
                path,
            });
        }
    }

    let public_path = config
        .input
        .pipeline
        .manifest_public_path()
        .ok_or_else(|| Error::PipelineOrder("manifest recording stage missing".to_string()))?
        .to_string();

    tracing::info!(variant = %config.variant, "bundling");
    let chunks = engine.bundle(config).await?;

    let out_dir = root.join(&config.output.dir);
    std::fs::create_dir_all(&out_dir)?;

    let mut written = Vec::with_capacity(chunks.len());
    for chunk in &chunks {
        let filename = config.output.filename_for(&chunk.name, chunk.code.as_bytes());
        let path = out_dir.join(&filename);
        std::fs::write(&path, &chunk.code)?;
        manifest.record(format!("{}.js", chunk.name), format!("{public_path}{filename}"))?;
        tracing::debug!(chunk = %chunk.name, file = %filename, "emitted");
        written.push(path);
    }

    manifest.seal();
    Ok(written)
}

/// Minimal in-process engine for development and tests.
///
/// Reads each entry verbatim and applies the constant-replacement stage
/// textually. It performs no module resolution, transpilation or
/// minification (those stages are consumed by a real engine adapter),
/// but it exercises the full configuration surface: entries, defines,
/// output naming and manifest recording.
#[derive(Debug, Clone)]
pub struct ReferenceEngine {
    root: PathBuf,
}

impl ReferenceEngine {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

#[async_trait]
impl BundleEngine for ReferenceEngine {
    async fn bundle(&self, config: &BundleConfig) -> Result<Vec<EmittedChunk>> {
        let defines = config.input.pipeline.replace_defines();
        let mut chunks = Vec::with_capacity(config.input.entries.len());
        for (name, entry) in &config.input.entries {
            let mut code = std::fs::read_to_string(self.root.join(entry))?;
            if let Some(defines) = defines {
                for (key, value) in defines {
                    code = code.replace(key.as_str(), value);
                }
            }
            chunks.push(EmittedChunk::new(name.clone(), code));
        }
        Ok(chunks)
    }
}
