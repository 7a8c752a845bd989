use counsel_core::enums::CampaignTab;
use counsel_core::responses::Detail;
use counsel_store::StoreError;
use counsel_store::views::campaign_detail;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: u32, tab: &str, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab: CampaignTab = parse_label(tab)?;
    match campaign_detail(&ctx.store.snapshot(), id, tab) {
        Detail::Found(detail) => output(&detail, flags.format),
        Detail::NotFound { .. } => Err(StoreError::not_found("campaign", id).into()),
    }
}
