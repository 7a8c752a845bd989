use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let rule = ctx.store.rule(id)?;
    output(&*rule, flags.format)
}
