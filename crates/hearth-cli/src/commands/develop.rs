//! The `hearth develop` command: development build, watching by default.

use crate::cli::{convert_target, DevelopArgs, GlobalArgs};
use crate::commands::build_context;
use crate::error::Result;
use crate::ui;

pub async fn execute(args: DevelopArgs, globals: &GlobalArgs) -> Result<()> {
    let target = convert_target(args.target);
    let ctx = build_context(globals)?;

    if args.once {
        ui::info(&format!("Building {target} (development)"));
        hearth_tasks::develop(&ctx, target).await?;
        ui::success("Development build completed");
        return Ok(());
    }

    ui::info(&format!(
        "Building {target} (development), watching for changes. Ctrl-C to stop."
    ));
    hearth_tasks::watch(&ctx, target).await?;
    Ok(())
}
