//! Ambient build configuration for the hearth frontend suite.
//!
//! This crate owns everything a build variant cannot derive on its own:
//! per-target output directories and public base URLs, the suite version
//! string, feature-flag overlays, and the declared package set used to
//! validate interop tables.
//!
//! Configuration is layered: built-in defaults, then `hearth.toml`, then
//! `HEARTH_*` environment variables. Missing required values surface as
//! [`ConfigError`] before any bundle configuration is constructed.

mod error;
mod settings;

pub use error::{ConfigError, Result};
pub use settings::{
    AmbientConfig, IconPaths, TargetPaths, TargetTable, TranslationPaths, CONFIG_FILE_NAME,
};
