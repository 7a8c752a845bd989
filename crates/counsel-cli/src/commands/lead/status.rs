use counsel_core::enums::LeadStatus;
use counsel_store::StoreError;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: u32, status: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status: LeadStatus = parse_label(status)?;
    let lead = ctx
        .store
        .set_lead_status(id, status)
        .ok_or(StoreError::not_found("lead", id))?;
    output(&*lead, flags.format)
}
