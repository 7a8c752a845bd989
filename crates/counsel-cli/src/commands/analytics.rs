use counsel_store::views::analytics;

use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `counsel analytics`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&analytics(&ctx.store.snapshot()), flags.format)
}
