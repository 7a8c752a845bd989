mod add;
mod get;
mod list;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::RuleCommands;
use crate::context::AppContext;

/// Handle `counsel rule`.
pub fn handle(
    action: &RuleCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        RuleCommands::List { limit } => list::run(*limit, ctx, flags),
        RuleCommands::Get { id } => get::run(*id, ctx, flags),
        RuleCommands::Add(args) => add::run(args, ctx),
    }
}
