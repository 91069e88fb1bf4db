//! Application state wiring all services together.
//!
//! AppState holds the concrete service instances used by both CLI and HTTP.
//! Services are generic over repository/clock traits, but AppState pins them
//! to the concrete infra implementations. It is built once per process,
//! never mutated afterwards, and cloned cheaply into every handler.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use tablepick_core::clock::SystemClock;
use tablepick_core::service::loader::LoaderService;
use tablepick_core::service::recommend::RecommendationService;
use tablepick_infra::config::resolve_service_config;
use tablepick_infra::filesystem::resolve_data_dir;
use tablepick_infra::sqlite::history::SqliteHistoryRepository;
use tablepick_infra::sqlite::pool::{database_url, DatabasePool};
use tablepick_infra::sqlite::restaurant::SqliteRestaurantRepository;
use tablepick_types::config::ServiceConfig;

/// Concrete type aliases for the service generics pinned to infra implementations.
pub type ConcreteRecommendationService =
    RecommendationService<SqliteRestaurantRepository, SqliteHistoryRepository, SystemClock>;

pub type ConcreteLoaderService = LoaderService<SqliteRestaurantRepository>;

/// Shared application state holding all services.
#[derive(Clone)]
pub struct AppState {
    pub recommendation_service: Arc<ConcreteRecommendationService>,
    pub loader_service: Arc<ConcreteLoaderService>,
    pub config: Arc<ServiceConfig>,
    pub data_dir: PathBuf,
}

impl AppState {
    /// Initialize the application state: resolve config, connect to DB, wire services.
    pub async fn init() -> anyhow::Result<Self> {
        let data_dir = resolve_data_dir();

        // Ensure data directory exists
        tokio::fs::create_dir_all(&data_dir).await?;

        let config = resolve_service_config(&data_dir).await;
        Self::with_config(&data_dir, config).await
    }

    /// Wire services for an explicit data directory and config.
    pub async fn with_config(data_dir: &Path, config: ServiceConfig) -> anyhow::Result<Self> {
        let db_url = database_url(data_dir, &config.database_file);
        let db_pool = DatabasePool::new(&db_url).await?;

        let restaurants =
            SqliteRestaurantRepository::init(db_pool.clone(), &config.restaurants_table).await?;
        let history =
            SqliteHistoryRepository::init(db_pool.clone(), &config.history_table).await?;
        let recommendation_service = RecommendationService::new(restaurants, history, SystemClock);

        // The loader gets its own handle on the same collection
        let loader_restaurants =
            SqliteRestaurantRepository::init(db_pool, &config.restaurants_table).await?;
        let loader_service = LoaderService::new(loader_restaurants);

        tracing::debug!(
            data_dir = %data_dir.display(),
            restaurants_table = %config.restaurants_table,
            history_table = %config.history_table,
            "Application state initialized"
        );

        Ok(Self {
            recommendation_service: Arc::new(recommendation_service),
            loader_service: Arc::new(loader_service),
            config: Arc::new(config),
            data_dir: data_dir.to_path_buf(),
        })
    }
}
