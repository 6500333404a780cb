//! Application state wiring all services together.
//!
//! Services in pathwise-core are generic over provider/repository/hasher
//! traits; AppState pins them to the concrete infra implementations.

use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use pathwise_core::advisory::AdvisoryService;
use pathwise_core::llm::box_provider::BoxLlmProvider;
use pathwise_core::persona::PersonaCatalog;
use pathwise_core::service::credential::CredentialService;
use pathwise_infra::config::{load_global_config, load_persona_catalog};
use pathwise_infra::crypto::password::Argon2PasswordHasher;
use pathwise_infra::extract::FileExtractor;
use pathwise_infra::filesystem::{ensure_data_dir, resolve_data_dir};
use pathwise_infra::llm::{create_provider, resolve_api_key};
use pathwise_infra::search::DuckDuckGoSearch;
use pathwise_infra::sqlite::pool::{DatabasePool, database_url};
use pathwise_infra::sqlite::user::SqliteUserRepository;
use pathwise_types::config::GlobalConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteCredentialService = CredentialService<SqliteUserRepository, Argon2PasswordHasher>;

pub type ConcreteAdvisoryService = AdvisoryService<Arc<BoxLlmProvider>, DuckDuckGoSearch>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<GlobalConfig>,
    pub catalog: Arc<PersonaCatalog>,
    pub provider: Arc<BoxLlmProvider>,
    pub credentials: Arc<ConcreteCredentialService>,
    pub advisory: Arc<ConcreteAdvisoryService>,
    pub extractor: FileExtractor,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: load config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();
        ensure_data_dir(&data_dir).await?;

        let config = load_global_config(&data_dir).await;
        let catalog = Arc::new(load_persona_catalog(&data_dir).await?);

        let db_pool = DatabasePool::new(&database_url(&data_dir)).await?;
        let credentials = CredentialService::new(
            SqliteUserRepository::new(db_pool),
            Argon2PasswordHasher::new(),
        );

        let api_key = resolve_api_key(&config.provider);
        let provider = Arc::new(create_provider(&config.provider, api_key)?);

        let search = config
            .search
            .enabled
            .then(|| DuckDuckGoSearch::new(Duration::from_secs(config.search.timeout_secs)));
        let advisory = AdvisoryService::new(
            Arc::clone(&provider),
            search,
            Arc::clone(&catalog),
            config.provider.request_settings(),
            config.search.max_results,
        );

        tracing::debug!(
            data_dir = %data_dir.display(),
            provider = %config.provider.name,
            model = %config.provider.model,
            search = config.search.enabled,
            "application state ready"
        );

        Ok(Self {
            config: Arc::new(config),
            catalog,
            provider,
            credentials: Arc::new(credentials),
            advisory: Arc::new(advisory),
            extractor: FileExtractor::new(),
            data_dir,
        })
    }
}
