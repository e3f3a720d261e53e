//! Entry point for the hearth CLI: argument parsing, logging setup and
//! command dispatch.

use clap::Parser;
use hearth_cli::{cli, commands, logger, ui};
use miette::Result;

#[tokio::main]
async fn main() -> Result<()> {
    let args = cli::Cli::parse();

    logger::init_logger(args.verbose, args.quiet, args.no_color);
    ui::init_colors(args.no_color);

    let result = match args.command {
        cli::Command::Build(build_args) => commands::build_execute(build_args, &args.globals).await,
        cli::Command::Develop(dev_args) => {
            commands::develop_execute(dev_args, &args.globals).await
        }
    };

    result.map_err(miette::Report::new)
}
