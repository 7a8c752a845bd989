mod add;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientCommands;
use crate::context::AppContext;

/// Handle `counsel client`.
pub fn handle(
    action: &ClientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        ClientCommands::List {
            search,
            status,
            limit,
        } => list::run(search.as_deref(), status.as_deref(), *limit, ctx, flags),
        ClientCommands::Get { id, tab } => get::run(*id, tab, ctx, flags),
        ClientCommands::Add(args) => add::run(args, ctx, flags),
        ClientCommands::Update(args) => update::run(args, ctx, flags),
    }
}
