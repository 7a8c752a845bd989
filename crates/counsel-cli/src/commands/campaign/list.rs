use counsel_store::views::{CampaignFilter, campaign_rows};

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_facet;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    search: Option<&str>,
    status: Option<&str>,
    campaign_type: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = CampaignFilter {
        search: search.unwrap_or_default().to_string(),
        status: parse_facet(status)?,
        campaign_type: parse_facet(campaign_type)?,
    };
    let mut rows = campaign_rows(&ctx.store.snapshot(), &filter);
    truncate_to(&mut rows, effective_limit(limit, flags.limit, ctx.default_limit()));
    output(&rows, flags.format)
}
