//! Asset manifest tracker.
//!
//! Maps logical asset names to their final, possibly content-hashed,
//! public paths. Populated by the bundle executor while chunks are
//! emitted, sealed when bundling completes, and consumed read-only by the
//! HTML entry and service-worker generators afterwards.

use std::path::Path;
use std::sync::Arc;

use indexmap::IndexMap;
use parking_lot::RwLock;

use crate::{Error, Result};

/// Thread-safe asset manifest, scoped to a single bundle invocation.
///
/// Cloning shares the underlying map (single-writer-then-many-readers
/// discipline: only the bundle executor records, and only after it seals
/// do the generators resolve). A development watch session creates a
/// logically fresh manifest per rebuild via [`AssetManifest::reset`];
/// re-recording a known logical name overwrites the previous entry so
/// stale hashes never leak.
#[derive(Debug, Clone, Default)]
pub struct AssetManifest {
    inner: Arc<RwLock<ManifestInner>>,
}

#[derive(Debug, Default)]
struct ManifestInner {
    entries: IndexMap<String, String>,
    sealed: bool,
}

impl AssetManifest {
    /// Create a new, empty manifest.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the public path for a logical asset name.
    ///
    /// Overwrites any previous entry for the same name. Fails with
    /// [`Error::ManifestSealed`] once the manifest has been sealed.
    pub fn record(&self, logical: impl Into<String>, public: impl Into<String>) -> Result<()> {
        let logical = logical.into();
        let mut inner = self.inner.write();
        if inner.sealed {
            return Err(Error::ManifestSealed(logical));
        }
        let public = public.into();
        tracing::trace!(%logical, %public, "manifest record");
        inner.entries.insert(logical, public);
        Ok(())
    }

    /// Resolve a logical name to its recorded public path.
    ///
    /// A resolve before the corresponding record is an ordering violation
    /// and fails with [`Error::AssetNotRecorded`], never a guessed path,
    /// since serving a wrong hashed URL is worse than failing the build.
    pub fn resolve(&self, logical: &str) -> Result<String> {
        let inner = self.inner.read();
        inner
            .entries
            .get(logical)
            .cloned()
            .ok_or_else(|| Error::AssetNotRecorded(logical.to_string()))
    }

    /// Mark the manifest complete. Readers may only rely on it afterwards.
    pub fn seal(&self) {
        self.inner.write().sealed = true;
    }

    pub fn is_sealed(&self) -> bool {
        self.inner.read().sealed
    }

    /// Discard all entries and unseal, starting the next build generation.
    pub fn reset(&self) {
        let mut inner = self.inner.write();
        inner.entries.clear();
        inner.sealed = false;
    }

    /// Snapshot of all entries in recording order.
    pub fn entries(&self) -> Vec<(String, String)> {
        let inner = self.inner.read();
        inner
            .entries
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.inner.read().entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Export the manifest as pretty-printed JSON.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let inner = self.inner.read();
        let json = serde_json::to_string_pretty(&inner.entries)
            .map_err(|e| Error::Engine(format!("manifest serialization failed: {e}")))?;
        std::fs::write(path, json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_then_resolve_round_trips() {
        let manifest = AssetManifest::new();
        manifest
            .record("main.js", "/frontend_latest/main-a1b2c3d4.js")
            .expect("record");
        assert_eq!(
            manifest.resolve("main.js").expect("resolve"),
            "/frontend_latest/main-a1b2c3d4.js"
        );
    }

    #[test]
    fn resolve_before_record_fails_loudly() {
        let manifest = AssetManifest::new();
        let err = manifest.resolve("missing.js").unwrap_err();
        assert!(matches!(err, Error::AssetNotRecorded(name) if name == "missing.js"));
    }

    #[test]
    fn rebuild_overwrites_known_names() {
        let manifest = AssetManifest::new();
        manifest.record("app.js", "/app-old.js").expect("record");
        manifest.record("app.js", "/app-new.js").expect("re-record");
        assert_eq!(manifest.resolve("app.js").expect("resolve"), "/app-new.js");
        assert_eq!(manifest.len(), 1);
    }

    #[test]
    fn sealed_manifest_rejects_writes() {
        let manifest = AssetManifest::new();
        manifest.record("a.js", "/a.js").expect("record");
        manifest.seal();
        let err = manifest.record("b.js", "/b.js").unwrap_err();
        assert!(matches!(err, Error::ManifestSealed(_)));
        // Existing entries stay resolvable.
        assert_eq!(manifest.resolve("a.js").expect("resolve"), "/a.js");
    }

    #[test]
    fn reset_starts_a_fresh_generation() {
        let manifest = AssetManifest::new();
        manifest.record("a.js", "/a.js").expect("record");
        manifest.seal();
        manifest.reset();
        assert!(!manifest.is_sealed());
        assert!(manifest.is_empty());
        assert!(manifest.resolve("a.js").is_err());
        manifest.record("a.js", "/a2.js").expect("record after reset");
    }

    #[test]
    fn entries_preserve_recording_order() {
        let manifest = AssetManifest::new();
        manifest.record("b.js", "/b.js").expect("record");
        manifest.record("a.js", "/a.js").expect("record");
        let names: Vec<_> = manifest.entries().into_iter().map(|(k, _)| k).collect();
        assert_eq!(names, ["b.js", "a.js"]);
    }

    #[test]
    fn write_json_exports_the_map() {
        let manifest = AssetManifest::new();
        manifest.record("a.js", "/a-1234.js").expect("record");
        let dir = tempfile::tempdir().expect("tempdir");
        let path = dir.path().join("manifest.json");
        manifest.write_json(&path).expect("write");
        let parsed: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).expect("read")).expect("parse");
        assert_eq!(parsed["a.js"], "/a-1234.js");
    }
}
