use clap::{Args, Subcommand};

/// Compliance rule commands.
#[derive(Clone, Debug, Subcommand)]
pub enum RuleCommands {
    /// List compliance rules.
    List {
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Get a rule by ID.
    Get { id: u32 },
    /// Add a compliance rule.
    Add(RuleAddArgs),
}

/// Raw "Add Compliance Rule" form fields.
#[derive(Clone, Debug, Default, Args)]
pub struct RuleAddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub category: Option<String>,
    #[arg(long)]
    pub description: Option<String>,
    /// Comma-separated state codes.
    #[arg(long)]
    pub states: Option<String>,
    #[arg(long)]
    pub severity: Option<String>,
}
