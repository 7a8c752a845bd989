use counsel_core::forms::CampaignForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::CampaignAddArgs;
use crate::commands::shared::form::submit;
use crate::context::AppContext;
use crate::output::{notice, output};

pub fn run(
    args: &CampaignAddArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let form = CampaignForm {
        name: args.name.clone().unwrap_or_default(),
        client_id: args.client_id.clone().unwrap_or_default(),
        campaign_type: args.campaign_type.clone().unwrap_or_default(),
        budget: args.budget.clone().unwrap_or_default(),
        start_date: args.start_date.clone().unwrap_or_default(),
        end_date: args.end_date.clone().unwrap_or_default(),
    };
    let new = submit(form.validate(), "create campaign")?;

    // Client ids are soft references; a dangling one is stored as given.
    if ctx.store.find_client(new.client_id).is_none() {
        tracing::warn!(client_id = new.client_id, "campaign references an unknown client");
    }

    let campaign = ctx.store.add_campaign(new);
    notice("Campaign created successfully!", flags);
    output(&*campaign, flags.format)
}
