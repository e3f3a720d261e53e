//! Static file gathering.
//!
//! Copies declared static source directories into a target's output root.
//! The copy runs before bundling: the cast target treats files from the
//! copy destination as bundle inputs.

use std::path::Path;

use path_clean::PathClean;
use walkdir::WalkDir;

use crate::Result;

/// Copy every file under each of `sources` into `dest_root`, preserving
/// relative layout. Missing sources are skipped with a warning.
///
/// Returns the number of files copied.
pub fn copy_static_sources(root: &Path, sources: &[std::path::PathBuf], dest_root: &Path) -> Result<u64> {
    let dest_root = root.join(dest_root).clean();
    let mut copied = 0u64;

    for source in sources {
        let source = root.join(source).clean();
        if !source.is_dir() {
            tracing::warn!(source = %source.display(), "static source missing, skipping");
            continue;
        }

        for entry in WalkDir::new(&source) {
            let entry = entry.map_err(std::io::Error::from)?;
            if !entry.file_type().is_file() {
                continue;
            }
            let rel = entry
                .path()
                .strip_prefix(&source)
                .unwrap_or(entry.path());
            let dest = dest_root.join(rel);
            if let Some(parent) = dest.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::copy(entry.path(), &dest)?;
            copied += 1;
        }
    }

    tracing::debug!(count = copied, dest = %dest_root.display(), "copied static files");
    Ok(copied)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn copies_files_preserving_layout() {
        let dir = tempfile::tempdir().expect("tempdir");
        let root = dir.path();
        std::fs::create_dir_all(root.join("public/fonts")).expect("mkdir");
        std::fs::write(root.join("public/favicon.ico"), b"icon").expect("write");
        std::fs::write(root.join("public/fonts/roboto.woff2"), b"font").expect("write");

        let copied = copy_static_sources(
            root,
            &[PathBuf::from("public")],
            Path::new("out/static"),
        )
        .expect("copy");

        assert_eq!(copied, 2);
        assert!(root.join("out/static/favicon.ico").is_file());
        assert!(root.join("out/static/fonts/roboto.woff2").is_file());
    }

    #[test]
    fn missing_source_is_skipped() {
        let dir = tempfile::tempdir().expect("tempdir");
        let copied = copy_static_sources(
            dir.path(),
            &[PathBuf::from("nope")],
            Path::new("out"),
        )
        .expect("copy");
        assert_eq!(copied, 0);
    }
}
