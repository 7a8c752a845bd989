use counsel_core::enums::ComplianceTab;
use counsel_store::views::compliance_page;

use crate::cli::GlobalFlags;
use crate::cli::root_commands::ComplianceArgs;
use crate::commands::shared::parse::parse_label;
use crate::context::AppContext;
use crate::output::output;

/// Handle `counsel compliance`.
pub fn handle(args: &ComplianceArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let tab: ComplianceTab = parse_label(&args.tab)?;
    output(&compliance_page(&ctx.store.snapshot(), tab), flags.format)
}
