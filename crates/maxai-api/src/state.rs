//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and REST API.
//! Services are generic over repository/provider/hasher traits, but AppState
//! pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;

use maxai_core::assistant::{Assistant, AssistantSettings};
use maxai_core::dispatch::Dispatcher;
use maxai_core::search::SearchService;
use maxai_core::service::account::AccountService;
use maxai_core::service::query::{HistoryLimits, QueryService};
use maxai_infra::config::{ApiKeys, load_global_config};
use maxai_infra::crypto::password::Argon2PasswordHasher;
use maxai_infra::crypto::token::Sha256SessionTokens;
use maxai_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use maxai_infra::llm::create_provider;
use maxai_infra::search::create_search_provider;
use maxai_infra::search::google::GoogleSearchProvider;
use maxai_infra::sqlite::history::SqliteHistoryRepository;
use maxai_infra::sqlite::pool::{DatabasePool, database_url};
use maxai_infra::sqlite::session::SqliteSessionRepository;
use maxai_infra::sqlite::user::SqliteUserRepository;
use maxai_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteQueryService = QueryService<SqliteHistoryRepository, GoogleSearchProvider>;

pub type ConcreteAccountService = AccountService<
    SqliteUserRepository,
    SqliteSessionRepository,
    Argon2PasswordHasher,
    Sha256SessionTokens,
>;

/// Shared application state holding all services.
///
/// Used by both CLI commands and REST API handlers.
#[derive(Clone)]
pub struct AppState {
    pub query_service: Arc<ConcreteQueryService>,
    pub account_service: Arc<ConcreteAccountService>,
    pub config: Arc<GlobalConfig>,
    pub data_dir: PathBuf,
    pub db_pool: DatabasePool,
}

impl AppState {
    /// Initialize from the resolved data directory and environment credentials.
    pub async fn init() -> anyhow::Result<Self> {
        Self::init_with(resolve_data_dir(), ApiKeys::from_env()).await
    }

    /// Connect to the database in `data_dir`, load its config, and wire services.
    pub async fn init_with(data_dir: PathBuf, keys: ApiKeys) -> anyhow::Result<Self> {
        ensure_data_dir(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;

        let llm = create_provider(&config.llm, keys.groq_api_key)?;
        let search = create_search_provider(&config.search, keys.google_api_key, keys.google_cse_id)?;
        tracing::debug!(
            llm = llm.name(),
            search_configured = search.is_configured(),
            "collaborators ready"
        );

        let query_service = QueryService::new(
            SqliteHistoryRepository::new(db_pool.clone()),
            Dispatcher::with_overrides(&config.dispatch),
            Assistant::new(llm, AssistantSettings::from(&config.llm)),
            SearchService::new(search),
            HistoryLimits {
                recent: config.history.recent_limit,
                admin_recent: config.history.admin_recent_limit,
            },
        );

        let account_service = AccountService::new(
            SqliteUserRepository::new(db_pool.clone()),
            SqliteSessionRepository::new(db_pool.clone()),
            Argon2PasswordHasher::new(),
            Sha256SessionTokens::new(),
        );

        Ok(Self {
            query_service: Arc::new(query_service),
            account_service: Arc::new(account_service),
            config: Arc::new(config),
            data_dir,
            db_pool,
        })
    }
}
