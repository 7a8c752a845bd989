use clap::{Args, Subcommand};

/// Law-firm client commands.
#[derive(Clone, Debug, Subcommand)]
pub enum ClientCommands {
    /// List clients.
    List {
        /// Matches firm name or contact person.
        #[arg(long)]
        search: Option<String>,
        /// Active, Inactive, Pending or all.
        #[arg(long)]
        status: Option<String>,
        #[arg(long)]
        limit: Option<u32>,
    },
    /// Show a client with its campaigns and leads.
    Get {
        id: u32,
        /// overview, campaigns or leads
        #[arg(long, default_value = "overview")]
        tab: String,
    },
    /// Add a law firm.
    Add(ClientAddArgs),
    /// Update a client.
    Update(ClientUpdateArgs),
}

/// Raw "Add Law Firm" form fields; validation reports what is missing.
#[derive(Clone, Debug, Default, Args)]
pub struct ClientAddArgs {
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub contact_person: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    #[arg(long)]
    pub bar_number: Option<String>,
    #[arg(long)]
    pub monthly_spend: Option<String>,
    #[arg(long)]
    pub retainer_value: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    /// Repeat for each practice area.
    #[arg(long = "practice-area")]
    pub practice_areas: Vec<String>,
}

#[derive(Clone, Debug, Args)]
pub struct ClientUpdateArgs {
    pub id: u32,
    #[arg(long)]
    pub name: Option<String>,
    #[arg(long)]
    pub contact_person: Option<String>,
    #[arg(long)]
    pub email: Option<String>,
    #[arg(long)]
    pub phone: Option<String>,
    /// Replaces the whole list; repeat for each practice area.
    #[arg(long = "practice-area")]
    pub practice_areas: Vec<String>,
    #[arg(long)]
    pub status: Option<String>,
    #[arg(long)]
    pub compliance_status: Option<String>,
    #[arg(long)]
    pub retainer_value: Option<f64>,
    #[arg(long)]
    pub monthly_spend: Option<f64>,
    /// YYYY-MM-DD
    #[arg(long)]
    pub last_contact: Option<String>,
    #[arg(long)]
    pub address: Option<String>,
    #[arg(long)]
    pub bar_number: Option<String>,
}
