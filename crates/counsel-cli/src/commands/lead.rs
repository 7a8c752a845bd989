mod add;
mod get;
mod list;
mod status;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadCommands;
use crate::context::AppContext;

/// Handle `counsel lead`.
pub fn handle(
    action: &LeadCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        LeadCommands::List {
            search,
            status,
            priority,
            source,
            practice_area,
            limit,
        } => list::run(
            &list::LeadListArgs {
                search: search.as_deref(),
                status: status.as_deref(),
                priority: priority.as_deref(),
                source: source.as_deref(),
                practice_area: practice_area.as_deref(),
                limit: *limit,
            },
            ctx,
            flags,
        ),
        LeadCommands::Get { id } => get::run(*id, ctx, flags),
        LeadCommands::Add(args) => add::run(args, ctx, flags),
        LeadCommands::Update(args) => update::run(args, ctx, flags),
        LeadCommands::Status { id, status } => status::run(*id, status, ctx, flags),
    }
}
