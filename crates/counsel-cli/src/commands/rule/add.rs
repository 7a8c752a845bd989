use anyhow::bail;
use counsel_core::forms::ComplianceRuleForm;

use crate::cli::subcommands::RuleAddArgs;
use crate::commands::shared::form::submit;
use crate::context::AppContext;

/// Validate the rule form; the store has no way to add rules yet.
pub fn run(args: &RuleAddArgs, ctx: &AppContext) -> anyhow::Result<()> {
    let form = ComplianceRuleForm {
        name: args.name.clone().unwrap_or_default(),
        category: args.category.clone().unwrap_or_default(),
        description: args.description.clone().unwrap_or_default(),
        states: args.states.clone(),
        severity: args.severity.clone().unwrap_or_default(),
    };
    let rule = submit(form.validate(), "add compliance rule")?;

    // TODO: persist through a `CrmStore::add_rule` once rules carry severity and states.
    tracing::info!(
        name = %rule.name,
        category = %rule.category,
        severity = %rule.severity,
        existing = ctx.store.snapshot().rules().len(),
        "compliance rule passed validation"
    );
    bail!("adding compliance rules is not supported yet")
}
