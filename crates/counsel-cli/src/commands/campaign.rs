mod add;
mod get;
mod list;
mod update;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignCommands;
use crate::context::AppContext;

/// Handle `counsel campaign`.
pub fn handle(
    action: &CampaignCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        CampaignCommands::List {
            search,
            status,
            campaign_type,
            limit,
        } => list::run(
            search.as_deref(),
            status.as_deref(),
            campaign_type.as_deref(),
            *limit,
            ctx,
            flags,
        ),
        CampaignCommands::Get { id, tab } => get::run(*id, tab, ctx, flags),
        CampaignCommands::Add(args) => add::run(args, ctx, flags),
        CampaignCommands::Update(args) => update::run(args, ctx, flags),
    }
}
