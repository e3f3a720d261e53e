//! Bundle configuration types: what a variant configuration factory
//! hands to the bundling engine.

use std::path::PathBuf;

use indexmap::IndexMap;

use crate::pipeline::PipelineSpec;
use crate::variant::BuildVariant;

/// Module format of the emitted bundles.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModuleFormat {
    /// Module-preserving ES output for modern runtimes.
    Esm,
    /// Single self-executing bundle for legacy runtimes, which lack
    /// native module loading with ordering guarantees.
    Iife,
}

impl ModuleFormat {
    pub fn as_str(self) -> &'static str {
        match self {
            ModuleFormat::Esm => "es",
            ModuleFormat::Iife => "iife",
        }
    }
}

/// Placeholder substituted with the entry name in output filenames.
pub const NAME_PLACEHOLDER: &str = "[name]";
/// Placeholder substituted with the content hash in output filenames.
pub const HASH_PLACEHOLDER: &str = "[hash]";

/// Output layout for one bundle invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputOptions {
    /// Directory emitted files are written to.
    pub dir: PathBuf,
    pub format: ModuleFormat,
    /// Naming pattern for emitted entry files, e.g. `[name]-[hash].js`.
    pub entry_file_names: String,
}

impl OutputOptions {
    /// Whether filenames embed a content hash (cache busting is a
    /// production-only concern).
    pub fn hashes_filenames(&self) -> bool {
        self.entry_file_names.contains(HASH_PLACEHOLDER)
    }

    /// Apply the naming pattern to one emitted chunk.
    pub fn filename_for(&self, name: &str, content: &[u8]) -> String {
        let mut filename = self.entry_file_names.replace(NAME_PLACEHOLDER, name);
        if filename.contains(HASH_PLACEHOLDER) {
            let digest = blake3::hash(content);
            filename = filename.replace(HASH_PLACEHOLDER, &digest.to_hex()[..8]);
        }
        filename
    }
}

/// A statically declared shared-library chunk.
///
/// Entry points referencing the same heavy dependency share one chunk
/// instead of duplicating it. A fixed declaration, not a dynamic
/// heuristic, trading flexibility for build reproducibility.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChunkGroup {
    pub name: String,
    pub packages: Vec<String>,
}

impl ChunkGroup {
    pub fn new(name: impl Into<String>, packages: impl IntoIterator<Item = impl Into<String>>) -> Self {
        Self {
            name: name.into(),
            packages: packages.into_iter().map(Into::into).collect(),
        }
    }
}

/// Input side of a bundle configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct InputOptions {
    /// Entry points, logical name to source path. Ordered; order is part
    /// of the configuration identity.
    pub entries: IndexMap<String, PathBuf>,
    pub pipeline: PipelineSpec,
    pub chunk_groups: Vec<ChunkGroup>,
}

/// Complete input/output configuration for one bundle invocation.
///
/// Owned exclusively by the caller that requested it; never shared
/// across variants.
#[derive(Debug, Clone, PartialEq)]
pub struct BundleConfig {
    pub variant: BuildVariant,
    pub input: InputOptions,
    pub output: OutputOptions,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hashed_pattern_embeds_content_digest() {
        let output = OutputOptions {
            dir: "dist".into(),
            format: ModuleFormat::Esm,
            entry_file_names: "[name]-[hash].js".to_string(),
        };
        let a = output.filename_for("entrypoint", b"const a = 1;");
        let b = output.filename_for("entrypoint", b"const a = 2;");

        assert!(a.starts_with("entrypoint-"));
        assert!(a.ends_with(".js"));
        assert_ne!(a, b, "different content yields different names");
        // Deterministic for identical content.
        assert_eq!(a, output.filename_for("entrypoint", b"const a = 1;"));
    }

    #[test]
    fn unhashed_pattern_is_stable() {
        let output = OutputOptions {
            dir: "dist".into(),
            format: ModuleFormat::Iife,
            entry_file_names: "[name].js".to_string(),
        };
        assert!(!output.hashes_filenames());
        assert_eq!(output.filename_for("entrypoint", b"anything"), "entrypoint.js");
    }
}
