use counsel_store::views::ClientFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_facet;
use crate::context::AppContext;
use crate::output::output;

pub fn run(
    search: Option<&str>,
    status: Option<&str>,
    limit: Option<u32>,
    ctx: &AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let filter = ClientFilter {
        search: search.unwrap_or_default().to_string(),
        status: parse_facet(status)?,
    };
    let mut clients = filter.apply(&ctx.store.snapshot());
    truncate_to(&mut clients, effective_limit(limit, flags.limit, ctx.default_limit()));
    output(&clients, flags.format)
}
