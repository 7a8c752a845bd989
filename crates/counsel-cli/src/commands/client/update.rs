use anyhow::bail;
use counsel_store::StoreError;
use counsel_store::updates::ClientUpdateBuilder;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientUpdateArgs;
use crate::commands::shared::parse::{parse_date, parse_label};
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    args: &ClientUpdateArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let mut builder = ClientUpdateBuilder::new();
    if let Some(name) = &args.name {
        builder = builder.name(name);
    }
    if let Some(contact_person) = &args.contact_person {
        builder = builder.contact_person(contact_person);
    }
    if let Some(email) = &args.email {
        builder = builder.email(email);
    }
    if let Some(phone) = &args.phone {
        builder = builder.phone(phone);
    }
    if !args.practice_areas.is_empty() {
        builder = builder.practice_areas(args.practice_areas.clone());
    }
    if let Some(status) = &args.status {
        builder = builder.status(parse_label(status)?);
    }
    if let Some(compliance) = &args.compliance_status {
        builder = builder.compliance_status(parse_label(compliance)?);
    }
    if let Some(retainer_value) = args.retainer_value {
        builder = builder.retainer_value(retainer_value);
    }
    if let Some(monthly_spend) = args.monthly_spend {
        builder = builder.monthly_spend(monthly_spend);
    }
    if let Some(last_contact) = &args.last_contact {
        builder = builder.last_contact(Some(parse_date(last_contact, "last contact")?));
    }
    if let Some(address) = &args.address {
        builder = builder.address(Some(address.clone()));
    }
    if let Some(bar_number) = &args.bar_number {
        builder = builder.bar_number(Some(bar_number.clone()));
    }

    let update = builder.build();
    if update.is_empty() {
        bail!("nothing to update for client {}; pass at least one field flag", args.id);
    }

    let client = ctx
        .store
        .update_client(args.id, &update)
        .ok_or(StoreError::not_found("client", args.id))?;
    output(&*client, flags.format)
}
