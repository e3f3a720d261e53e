//! Development watch loop.
//!
//! Holds a persistent watcher over the target's source roots and re-runs
//! the bundle step on changes. Every rebuild starts from a fresh manifest
//! and pipeline state; cancellation is process termination, there is no
//! graceful partial-rebuild cancellation.

use std::path::PathBuf;
use std::time::Duration;

use hearth_bundler::{BuildMode, BuildVariant, JsLevel, TargetApp};
use notify::{Event, EventKind, RecursiveMode, Watcher};
use tokio::sync::mpsc;

use crate::sequence::{bundle_level, develop, BuildContext};
use crate::Result;

/// Source roots watched per target.
fn watch_roots(target: TargetApp) -> Vec<&'static str> {
    match target {
        TargetApp::App => vec!["src"],
        TargetApp::Demo => vec!["src", "demo/src"],
        TargetApp::Cast => vec!["src", "cast/src"],
        TargetApp::Hassio => vec!["src", "hassio/src"],
        TargetApp::Gallery => vec!["src", "gallery/src"],
    }
}

/// Run the full development sequence once, then rebuild the bundle on
/// every source change until the process is terminated.
pub async fn watch(ctx: &BuildContext, target: TargetApp) -> Result<()> {
    develop(ctx, target).await?;

    let (tx, mut rx) = mpsc::channel::<PathBuf>(64);
    let mut watcher = notify::recommended_watcher(move |res: notify::Result<Event>| {
        if let Ok(event) = res {
            if matches!(
                event.kind,
                EventKind::Create(_) | EventKind::Modify(_) | EventKind::Remove(_)
            ) {
                for path in event.paths {
                    let _ = tx.blocking_send(path);
                }
            }
        }
    })?;

    for dir in watch_roots(target) {
        let path = ctx.root.join(dir);
        if path.is_dir() {
            watcher.watch(&path, RecursiveMode::Recursive)?;
            tracing::debug!(dir = %path.display(), "watching");
        }
    }
    tracing::info!(%target, "watching for changes");

    while let Some(changed) = rx.recv().await {
        // Let a save burst settle, then drain it so one rebuild covers it.
        tokio::time::sleep(Duration::from_millis(100)).await;
        while rx.try_recv().is_ok() {}

        tracing::info!(changed = %changed.display(), "rebuilding");
        if let Err(err) = rebuild(ctx, target).await {
            // A failed rebuild keeps the watch alive; the next change
            // retries from scratch.
            tracing::error!(error = %err, "rebuild failed");
        }
    }

    Ok(())
}

/// Re-run only the bundle step with a fresh manifest.
async fn rebuild(ctx: &BuildContext, target: TargetApp) -> Result<()> {
    let variant = BuildVariant::new(target, BuildMode::Development, JsLevel::Latest);
    bundle_level(ctx, variant).await?;
    Ok(())
}
