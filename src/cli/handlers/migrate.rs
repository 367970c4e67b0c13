use anyhow::Result;
use colored::Colorize;

use super::CommandContext;

pub fn handle_migrate(ctx: CommandContext) -> Result<()> {
    tokio::runtime::Runtime::new()?.block_on(ctx.connect())?;
    println!("{} {}", "Migrated".green(), ctx.config.database_url.cyan());
    Ok(())
}
