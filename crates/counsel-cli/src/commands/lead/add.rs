use counsel_core::forms::LeadForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadAddArgs;
use crate::commands::shared::form::submit;
use crate::context::AppContext;
use crate::output::{notice, output};

pub fn run(args: &LeadAddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = LeadForm {
        name: args.name.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        phone: args.phone.clone().unwrap_or_default(),
        practice_area: args.practice_area.clone().unwrap_or_default(),
        source: args.source.clone().unwrap_or_default(),
        client_id: args.client_id.clone().unwrap_or_default(),
        campaign_id: args.campaign_id.clone().unwrap_or_default(),
        priority: args.priority.clone().unwrap_or_default(),
        value: args.value.clone().unwrap_or_default(),
        notes: args.notes.clone(),
    };
    let new = submit(form.validate(), "add lead")?;

    let lead = ctx.store.add_lead(new);
    notice("Lead added successfully!", flags);
    output(&*lead, flags.format)
}
