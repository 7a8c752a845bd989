use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: u32, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let lead = ctx.store.lead(id)?;
    output(&*lead, flags.format)
}
