use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Client { action } => commands::client::handle(&action, ctx, flags),
        Commands::Campaign { action } => commands::campaign::handle(&action, ctx, flags),
        Commands::Lead { action } => commands::lead::handle(&action, ctx, flags),
        Commands::Rule { action } => commands::rule::handle(&action, ctx, flags),
        Commands::Dashboard => commands::dashboard::handle(ctx, flags),
        Commands::Analytics => commands::analytics::handle(ctx, flags),
        Commands::Compliance(args) => commands::compliance::handle(&args, ctx, flags),
        Commands::Open(args) => commands::open::handle(&args, ctx, flags),
        Commands::Shell => commands::shell::handle(ctx, flags),
    }
}
