//! Service worker generation.
//!
//! Enumerates the sealed asset manifest into a precache list. Runs
//! strictly after bundling completes; development builds get a no-op
//! worker so a previously installed one releases its caches.

use std::path::{Path, PathBuf};

use hearth_bundler::AssetManifest;

use crate::Result;

const DEV_WORKER: &str = "\
console.debug(\"Service worker disabled in development.\");
self.addEventListener(\"install\", () => self.skipWaiting());
";

/// Write `service_worker.js` into `out_dir`.
///
/// Production workers precache every manifest entry; the cache name
/// embeds a digest of the precache list so a changed build invalidates
/// the previous cache.
pub fn generate_service_worker(
    manifest: &AssetManifest,
    out_dir: &Path,
    is_prod_build: bool,
) -> Result<PathBuf> {
    std::fs::create_dir_all(out_dir)?;
    let out_path = out_dir.join("service_worker.js");

    if !is_prod_build {
        std::fs::write(&out_path, DEV_WORKER)?;
        return Ok(out_path);
    }

    let urls: Vec<String> = manifest
        .entries()
        .into_iter()
        .map(|(_, public)| public)
        .collect();
    let url_list = urls
        .iter()
        .map(|u| format!("  {:?}", u))
        .collect::<Vec<_>>()
        .join(",\n");
    let digest = blake3_hex(url_list.as_bytes());

    let worker = format!(
        "\
const CACHE_NAME = \"hearth-precache-{digest}\";
const PRECACHE_URLS = [
{url_list}
];

self.addEventListener(\"install\", (event) => {{
  event.waitUntil(
    caches.open(CACHE_NAME).then((cache) => cache.addAll(PRECACHE_URLS))
  );
  self.skipWaiting();
}});

self.addEventListener(\"activate\", (event) => {{
  event.waitUntil(
    caches.keys().then((keys) =>
      Promise.all(
        keys.filter((key) => key !== CACHE_NAME).map((key) => caches.delete(key))
      )
    )
  );
}});

self.addEventListener(\"fetch\", (event) => {{
  event.respondWith(
    caches.match(event.request).then((cached) => cached || fetch(event.request))
  );
}});
"
    );

    std::fs::write(&out_path, worker)?;
    tracing::info!(count = urls.len(), path = %out_path.display(), "generated service worker");
    Ok(out_path)
}

fn blake3_hex(bytes: &[u8]) -> String {
    let hex = blake3::hash(bytes).to_hex();
    hex[..8].to_string()
}
