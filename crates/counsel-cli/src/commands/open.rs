use crate::cli::GlobalFlags;
use crate::cli::root_commands::OpenArgs;
use crate::context::AppContext;
use crate::output::output;
use crate::route::Route;

/// Handle `counsel open <route>`.
pub fn handle(args: &OpenArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let route = Route::parse(&args.route)?;
    tracing::debug!(?route, "resolved route");
    let page = route.render(ctx);
    output(&page, flags.format)
}
