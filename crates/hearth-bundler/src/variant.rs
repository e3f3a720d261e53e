//! Build variant: the tuple that fully determines a bundle configuration.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Deliverable application of the suite.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetApp {
    /// The main dashboard application.
    App,
    /// The public demo.
    Demo,
    /// The cast receiver and launcher.
    Cast,
    /// The hardware-supervisor panel.
    Hassio,
    /// The component gallery.
    Gallery,
}

impl TargetApp {
    /// Stable lowercase name, matching config-file keys.
    pub fn as_str(self) -> &'static str {
        match self {
            TargetApp::App => "app",
            TargetApp::Demo => "demo",
            TargetApp::Cast => "cast",
            TargetApp::Hassio => "hassio",
            TargetApp::Gallery => "gallery",
        }
    }

    /// All targets, in build order.
    pub fn all() -> [TargetApp; 5] {
        [
            TargetApp::App,
            TargetApp::Demo,
            TargetApp::Cast,
            TargetApp::Hassio,
            TargetApp::Gallery,
        ]
    }
}

impl fmt::Display for TargetApp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Build mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildMode {
    Development,
    Production,
}

impl BuildMode {
    /// The value substituted for `process.env.NODE_ENV`.
    pub fn as_str(self) -> &'static str {
        match self {
            BuildMode::Development => "development",
            BuildMode::Production => "production",
        }
    }
}

impl fmt::Display for BuildMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// JS language level of the emitted bundles.
///
/// `Latest` keeps native ES modules; `Legacy` targets runtimes without
/// module loading and is emitted as a single self-executing bundle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JsLevel {
    Latest,
    Legacy,
}

impl JsLevel {
    /// The value substituted for `__BUILD__`.
    pub fn as_str(self) -> &'static str {
        match self {
            JsLevel::Latest => "latest",
            JsLevel::Legacy => "es5",
        }
    }
}

impl fmt::Display for JsLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// The build variant. Immutable once constructed; referentially
/// transparent with respect to configuration output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct BuildVariant {
    pub target: TargetApp,
    pub mode: BuildMode,
    pub js_level: JsLevel,
    /// Build intended for bundle-size analysis.
    pub stats_build: bool,
}

impl BuildVariant {
    pub fn new(target: TargetApp, mode: BuildMode, js_level: JsLevel) -> Self {
        Self {
            target,
            mode,
            js_level,
            stats_build: false,
        }
    }

    pub fn with_stats(mut self, stats_build: bool) -> Self {
        self.stats_build = stats_build;
        self
    }

    pub fn is_prod(&self) -> bool {
        self.mode == BuildMode::Production
    }

    pub fn is_latest(&self) -> bool {
        self.js_level == JsLevel::Latest
    }
}

impl fmt::Display for BuildVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({}, {})", self.target, self.mode, self.js_level)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_identifies_the_variant() {
        let variant = BuildVariant::new(TargetApp::App, BuildMode::Production, JsLevel::Legacy);
        assert_eq!(variant.to_string(), "app (production, es5)");
    }

    #[test]
    fn stats_flag_defaults_off() {
        let variant = BuildVariant::new(TargetApp::Demo, BuildMode::Development, JsLevel::Latest);
        assert!(!variant.stats_build);
        assert!(variant.with_stats(true).stats_build);
    }
}
