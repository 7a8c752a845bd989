use anyhow::bail;
use chrono::Utc;
use counsel_store::StoreError;
use counsel_store::updates::LeadUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::LeadUpdateArgs;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;

pub fn run(args: &LeadUpdateArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut builder = LeadUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(email) = &args.email {
        builder = builder.email(email);
    }
    if let Some(phone) = &args.phone {
        builder = builder.phone(phone);
    }
    if let Some(source) = &args.source {
        builder = builder.source(parse_label(source)?);
    }
    if let Some(campaign_id) = args.campaign_id {
        builder = builder.campaign_id(campaign_id);
    }
    if let Some(client_id) = args.client_id {
        builder = builder.client_id(client_id);
    }
    if let Some(practice_area) = &args.practice_area {
        builder = builder.practice_area(practice_area);
    }
    if let Some(status) = &args.status {
        builder = builder.status(parse_label(status)?);
    }
    if let Some(priority) = &args.priority {
        builder = builder.priority(parse_label(priority)?);
    }
    if let Some(value) = args.value {
        builder = builder.value(value);
    }
    if let Some(notes) = &args.notes {
        builder = builder.notes(Some(notes.clone()));
    } else if args.clear_notes {
        builder = builder.notes(None);
    }
    if args.touch {
        builder = builder.last_contact(Utc::now());
    }

    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update for lead {}; pass at least one field flag", args.id);
    }

    let lead = ctx
        .store
        .update_lead(args.id, &update)
        .ok_or(StoreError::not_found("lead", args.id))?;
    output(&*lead, flags.format)
}
