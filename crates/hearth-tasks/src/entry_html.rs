//! HTML entry generation.
//!
//! Renders the `index.html` for a target, resolving script URLs through
//! the sealed asset manifest. Runs strictly after bundling; a lookup for
//! an unrecorded entry propagates the manifest ordering error rather
//! than emitting a guessed URL.

use std::path::Path;

use hearth_bundler::AssetManifest;
use minijinja::{context, Environment};

use crate::Result;

const INDEX_TEMPLATE: &str = r#"<!DOCTYPE html>
<html>
  <head>
    <meta charset="utf-8" />
    <title>{{ title }}</title>
  </head>
  <body>
{%- for script in module_scripts %}
    <script type="module" src="{{ script }}"></script>
{%- endfor %}
{%- for script in nomodule_scripts %}
    <script nomodule src="{{ script }}"></script>
{%- endfor %}
  </body>
</html>
"#;

/// Render an entry HTML document.
///
/// `entries` are logical asset names (e.g. `app.js`) resolved against the
/// latest-build manifest for `<script type="module">` tags and, when a
/// legacy manifest is given, against it for `<script nomodule>` fallbacks.
pub fn render_index_html(
    title: &str,
    entries: &[&str],
    latest: &AssetManifest,
    legacy: Option<&AssetManifest>,
) -> Result<String> {
    let module_scripts = entries
        .iter()
        .map(|name| latest.resolve(name))
        .collect::<hearth_bundler::Result<Vec<_>>>()?;

    let nomodule_scripts = match legacy {
        Some(manifest) => entries
            .iter()
            .map(|name| manifest.resolve(name))
            .collect::<hearth_bundler::Result<Vec<_>>>()?,
        None => Vec::new(),
    };

    let mut env = Environment::new();
    env.add_template("index.html", INDEX_TEMPLATE)?;
    let rendered = env.get_template("index.html")?.render(context! {
        title,
        module_scripts,
        nomodule_scripts,
    })?;
    Ok(rendered)
}

/// Render and write the entry HTML to `out_path`.
pub fn generate_index_html(
    title: &str,
    entries: &[&str],
    latest: &AssetManifest,
    legacy: Option<&AssetManifest>,
    out_path: &Path,
) -> Result<()> {
    let html = render_index_html(title, entries, latest, legacy)?;
    if let Some(parent) = out_path.parent() {
        std::fs::create_dir_all(parent)?;
    }
    std::fs::write(out_path, html)?;
    tracing::info!(path = %out_path.display(), "generated entry HTML");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::TaskError;

    #[test]
    fn renders_module_and_nomodule_scripts() {
        let latest = AssetManifest::new();
        latest
            .record("app.js", "/frontend_latest/app-abc123.js")
            .expect("record");
        latest.seal();
        let legacy = AssetManifest::new();
        legacy
            .record("app.js", "/frontend_es5/app-def456.js")
            .expect("record");
        legacy.seal();

        let html =
            render_index_html("Hearth", &["app.js"], &latest, Some(&legacy)).expect("render");

        assert!(html.contains(r#"<script type="module" src="/frontend_latest/app-abc123.js">"#));
        assert!(html.contains(r#"<script nomodule src="/frontend_es5/app-def456.js">"#));
        assert!(html.contains("<title>Hearth</title>"));
    }

    #[test]
    fn unrecorded_entry_propagates_the_ordering_error() {
        let latest = AssetManifest::new();
        latest.seal();

        let err = render_index_html("Hearth", &["app.js"], &latest, None).unwrap_err();
        assert!(matches!(
            err,
            TaskError::Bundle(hearth_bundler::Error::AssetNotRecorded(_))
        ));
    }

    #[test]
    fn no_legacy_manifest_means_no_nomodule_tags() {
        let latest = AssetManifest::new();
        latest.record("main.js", "/main.js").expect("record");
        latest.seal();

        let html = render_index_html("Demo", &["main.js"], &latest, None).expect("render");
        assert!(!html.contains("nomodule"));
    }
}
