use counsel_core::forms::ClientForm;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::ClientAddArgs;
use crate::commands::shared::form::submit;
use crate::context::AppContext;
use crate::output::{notice, output};

pub fn run(args: &ClientAddArgs, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let form = ClientForm {
        name: args.name.clone().unwrap_or_default(),
        contact_person: args.contact_person.clone().unwrap_or_default(),
        email: args.email.clone().unwrap_or_default(),
        phone: args.phone.clone().unwrap_or_default(),
        bar_number: args.bar_number.clone(),
        monthly_spend: args.monthly_spend.clone().unwrap_or_default(),
        retainer_value: args.retainer_value.clone().unwrap_or_default(),
        address: args.address.clone(),
        practice_areas: args.practice_areas.clone(),
    };
    let new = submit(form.validate(), "add law firm")?;

    let client = ctx.store.add_client(new);
    notice("Law firm added successfully!", flags);
    output(&*client, flags.format)
}
