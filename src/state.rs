//! Shared application state injected into all handlers.

use std::sync::Arc;

use sqlx::PgPool;

use crate::application::services::{AnalyticsService, LedgerService, RegistryService};
use crate::config::{Config, DEFAULT_QUIET_PATHS, DEFAULT_REDIRECT_URL};
use crate::infrastructure::persistence::{PgClickRepository, PgRecipientRepository};

pub type Registry = RegistryService<PgRecipientRepository>;
pub type Ledger = LedgerService<PgClickRepository, PgRecipientRepository>;
pub type Analytics = AnalyticsService<PgRecipientRepository, PgClickRepository>;

/// Request-facing settings taken from [`Config`].
#[derive(Debug, Clone)]
pub struct HttpSettings {
    pub redirect_url: String,
    pub public_base_url: Option<String>,
    pub behind_proxy: bool,
    pub quiet_paths: Vec<String>,
}

impl HttpSettings {
    pub fn from_config(config: &Config) -> Self {
        Self {
            redirect_url: config.redirect_url.clone(),
            public_base_url: config.public_base_url.clone(),
            behind_proxy: config.behind_proxy,
            quiet_paths: config.quiet_paths.clone(),
        }
    }

    /// Returns true if access log lines for `path` go to DEBUG.
    pub fn is_quiet_path(&self, path: &str) -> bool {
        self.quiet_paths.iter().any(|prefix| path.starts_with(prefix))
    }
}

impl Default for HttpSettings {
    fn default() -> Self {
        Self {
            redirect_url: DEFAULT_REDIRECT_URL.to_string(),
            public_base_url: None,
            behind_proxy: false,
            quiet_paths: DEFAULT_QUIET_PATHS.split(',').map(str::to_string).collect(),
        }
    }
}

/// Application state shared across all HTTP handlers.
///
/// Cloned for every request; all fields are behind `Arc`.
#[derive(Clone)]
pub struct AppState {
    pub registry_service: Arc<Registry>,
    pub ledger_service: Arc<Ledger>,
    pub analytics_service: Arc<Analytics>,
    pub settings: Arc<HttpSettings>,
}

impl AppState {
    /// Wires repositories and services over one connection pool.
    pub fn new(pool: Arc<PgPool>, settings: HttpSettings) -> Self {
        let recipient_repository = Arc::new(PgRecipientRepository::new(pool.clone()));
        let click_repository = Arc::new(PgClickRepository::new(pool));

        let registry_service = Arc::new(RegistryService::new(recipient_repository.clone()));
        let ledger_service = Arc::new(LedgerService::new(
            click_repository.clone(),
            registry_service.clone(),
        ));
        let analytics_service = Arc::new(AnalyticsService::new(
            recipient_repository,
            click_repository,
        ));

        Self {
            registry_service,
            ledger_service,
            analytics_service,
            settings: Arc::new(settings),
        }
    }
}
