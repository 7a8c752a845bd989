use anyhow::bail;
use counsel_store::StoreError;
use counsel_store::updates::CampaignUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignUpdateArgs;
use crate::commands::shared::parse::{parse_date, parse_label};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &CampaignUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = CampaignUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(client_id) = args.client_id {
        builder = builder.client_id(client_id);
    }
    if let Some(campaign_type) = &args.campaign_type {
        builder = builder.campaign_type(parse_label(campaign_type)?);
    }
    if let Some(status) = &args.status {
        builder = builder.status(parse_label(status)?);
    }
    if let Some(budget) = args.budget {
        builder = builder.budget(budget);
    }
    if let Some(spent) = args.spent {
        builder = builder.spent(spent);
    }
    if let Some(start_date) = &args.start_date {
        builder = builder.start_date(parse_date(start_date, "start date")?);
    }
    if let Some(end_date) = &args.end_date {
        builder = builder.end_date(parse_date(end_date, "end date")?);
    }
    if let Some(checked) = args.compliance_checked {
        builder = builder.compliance_checked(checked);
    }

    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update for campaign {}; pass at least one field flag", args.id);
    }

    let campaign = ctx
        .store
        .update_campaign(args.id, &update)
        .ok_or(StoreError::not_found("campaign", args.id))?;
    output(&*campaign, flags.format)
}
