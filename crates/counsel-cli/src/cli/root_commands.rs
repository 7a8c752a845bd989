use clap::{Args, Subcommand};

use crate::cli::subcommands::{CampaignCommands, ClientCommands, LeadCommands, RuleCommands};

/// Top-level command groups.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Law-firm clients.
    Client {
        #[command(subcommand)]
        action: ClientCommands,
    },
    /// Marketing campaigns.
    Campaign {
        #[command(subcommand)]
        action: CampaignCommands,
    },
    /// Prospective clients.
    Lead {
        #[command(subcommand)]
        action: LeadCommands,
    },
    /// Compliance rules.
    Rule {
        #[command(subcommand)]
        action: RuleCommands,
    },
    /// Headline metrics, top clients, follow-ups and recent leads.
    Dashboard,
    /// Totals plus monthly, channel and practice-area charts.
    Analytics,
    /// Compliance overview, rules or reports.
    Compliance(ComplianceArgs),
    /// Render a page by its route, e.g. `/leads?filter=new`.
    Open(OpenArgs),
    /// Interactive session that keeps the store between commands.
    Shell,
}

#[derive(Clone, Debug, Args)]
pub struct ComplianceArgs {
    /// overview, rules or reports
    #[arg(long, default_value = "overview")]
    pub tab: String,
}

#[derive(Clone, Debug, Args)]
pub struct OpenArgs {
    /// Route path with optional query string.
    pub route: String,
}
