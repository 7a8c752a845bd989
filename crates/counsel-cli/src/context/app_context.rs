use counsel_config::CounselConfig;
use counsel_store::CrmStore;
use counsel_store::views::DashboardLimits;

/// Application state shared by every command of one process.
///
/// The store lives here for the lifetime of the process, so `counsel shell`
/// sees its own earlier changes.
pub struct AppContext {
    pub config: CounselConfig,
    pub store: CrmStore,
}

impl AppContext {
    /// Build the context; `empty` overrides `store.seed_sample_data`.
    pub fn init(config: CounselConfig, empty: bool) -> Self {
        let store = if config.store.seed_sample_data && !empty {
            CrmStore::seeded()
        } else {
            CrmStore::empty()
        };
        tracing::debug!(
            clients = store.snapshot().clients().len(),
            "store initialized"
        );
        Self { config, store }
    }

    /// List size used when neither the command nor `--limit` sets one.
    pub const fn default_limit(&self) -> u32 {
        self.config.general.default_limit
    }

    pub const fn dashboard_limits(&self) -> DashboardLimits {
        DashboardLimits {
            top_clients: self.config.dashboard.top_clients,
            follow_up_leads: self.config.dashboard.follow_up_leads,
            recent_leads: self.config.dashboard.recent_leads,
        }
    }
}
