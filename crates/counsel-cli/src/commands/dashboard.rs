use counsel_store::views::dashboard;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::output;

/// Handle `counsel dashboard`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let page = dashboard(&ctx.store.snapshot(), ctx.dashboard_limits());
    if flags.format != OutputFormat::Table {
        return output(&page, flags.format);
    }

    output(&page.cards, flags.format)?;
    for (title, rows) in [
        ("Top clients", serde_json::to_value(&page.top_clients)?),
        ("Needs follow-up", serde_json::to_value(&page.follow_up_leads)?),
        ("Recent leads", serde_json::to_value(&page.recent_leads)?),
        ("Campaign performance", serde_json::to_value(&page.campaign_performance)?),
    ] {
        println!("\n{title}");
        output(&rows, flags.format)?;
    }
    Ok(())
}
