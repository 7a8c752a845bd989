use chrono::Utc;
use counsel_store::views::{Facet, LeadFilter, lead_board};

use crate::cli::{GlobalFlags, OutputFormat};
use crate::commands::shared::limit::{effective_limit, truncate_to};
use crate::commands::shared::parse::parse_facet;
use crate::context::AppContext;
use crate::output::output;

pub struct LeadListArgs<'a> {
    pub search: Option<&'a str>,
    pub status: Option<&'a str>,
    pub priority: Option<&'a str>,
    pub source: Option<&'a str>,
    pub practice_area: Option<&'a str>,
    pub limit: Option<u32>,
}

pub fn run(args: &LeadListArgs<'_>, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let filter = LeadFilter {
        search: args.search.unwrap_or_default().to_string(),
        status: parse_facet(args.status)?,
        priority: parse_facet(args.priority)?,
        source: parse_facet(args.source)?,
        practice_area: Facet::from(
            args.practice_area
                .filter(|area| !area.trim().eq_ignore_ascii_case("all"))
                .map(str::to_string),
        ),
    };

    // Counts cover the whole filtered set; only the cards are limited.
    let mut board = lead_board(&ctx.store.snapshot(), &filter, Utc::now());
    truncate_to(
        &mut board.leads,
        effective_limit(args.limit, flags.limit, ctx.default_limit()),
    );

    if flags.format == OutputFormat::Table {
        output(&board.counts, flags.format)?;
        println!();
        return output(&board.leads, flags.format);
    }
    output(&board, flags.format)
}
