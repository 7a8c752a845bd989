use counsel_core::entities::ComplianceRule;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::context::AppContext;
use crate::output::output;

pub fn run(limit: Option<u32>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let mut rules: Vec<ComplianceRule> = ctx
        .store
        .snapshot()
        .rules()
        .iter()
        .map(|rule| ComplianceRule::clone(rule))
        .collect();
    truncate_to(&mut rules, effective_limit(limit, flags.limit, ctx.default_limit()));
    output(&rules, flags.format)
}
