//! Command implementations.

mod build;
mod develop;

use std::sync::Arc;

use hearth_bundler::ReferenceEngine;
use hearth_config::AmbientConfig;
use hearth_tasks::BuildContext;

use crate::cli::GlobalArgs;
use crate::error::Result;

pub use build::execute as build_execute;
pub use develop::execute as develop_execute;

/// Resolve the project root and ambient configuration into a build
/// context.
///
/// The CLI wires the in-process reference engine; deployments that need
/// real transformation plug an external engine adapter into
/// [`BuildContext`] instead.
pub(crate) fn build_context(globals: &GlobalArgs) -> Result<BuildContext> {
    let root = match &globals.cwd {
        Some(cwd) => cwd.clone(),
        None => std::env::current_dir()?,
    };
    tracing::debug!(root = %root.display(), "resolved project root");
    let ambient = AmbientConfig::load(&root, globals.config.as_deref())?;
    let engine = Arc::new(ReferenceEngine::new(root.clone()));
    Ok(BuildContext::new(root, ambient, engine))
}
