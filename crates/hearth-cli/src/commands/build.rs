//! The `hearth build` command: production build of one target.

use std::time::Instant;

use crate::cli::{convert_target, BuildArgs, GlobalArgs};
use crate::commands::build_context;
use crate::error::Result;
use crate::ui;

pub async fn execute(args: BuildArgs, globals: &GlobalArgs) -> Result<()> {
    let start = Instant::now();
    let target = convert_target(args.target);

    let ctx = build_context(globals)?;
    ui::info(&format!("Building {target} (production)"));
    if args.stats {
        ui::info("Stats build: modern js-level only");
    }

    hearth_tasks::build(&ctx, target, args.stats).await?;

    ui::success(&format!(
        "Build completed in {}",
        ui::format_duration(start.elapsed())
    ));
    Ok(())
}
