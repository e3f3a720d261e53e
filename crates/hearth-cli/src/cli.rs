//! Command-line interface definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand, ValueEnum};
use hearth_bundler::TargetApp;

#[derive(Debug, Parser)]
#[command(
    name = "hearth",
    version,
    about = "Build orchestrator for the hearth frontend suite"
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Enable debug-level logging
    #[arg(long, global = true)]
    pub verbose: bool,

    /// Only show error-level logs
    #[arg(long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    #[command(flatten)]
    pub globals: GlobalArgs,
}

#[derive(Debug, Args)]
pub struct GlobalArgs {
    /// Path to the configuration file (defaults to <root>/hearth.toml)
    #[arg(long, global = true)]
    pub config: Option<PathBuf>,

    /// Project root (defaults to the current directory)
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Production build of one target
    Build(BuildArgs),
    /// Development build with file watching
    Develop(DevelopArgs),
}

#[derive(Debug, Args)]
pub struct BuildArgs {
    /// Target application to build
    #[arg(value_enum)]
    pub target: TargetArg,

    /// Bundle-size analysis build (modern js-level only)
    #[arg(long)]
    pub stats: bool,
}

#[derive(Debug, Args)]
pub struct DevelopArgs {
    /// Target application to build
    #[arg(value_enum)]
    pub target: TargetArg,

    /// Run a single development build instead of watching
    #[arg(long)]
    pub once: bool,
}

/// CLI-facing target names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TargetArg {
    App,
    Demo,
    Cast,
    Hassio,
    Gallery,
}

/// Convert the CLI enum to the core target type.
pub fn convert_target(target: TargetArg) -> TargetApp {
    match target {
        TargetArg::App => TargetApp::App,
        TargetArg::Demo => TargetApp::Demo,
        TargetArg::Cast => TargetApp::Cast,
        TargetArg::Hassio => TargetApp::Hassio,
        TargetArg::Gallery => TargetApp::Gallery,
    }
}
