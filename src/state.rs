use std::sync::Arc;

use chrono::{NaiveDate, Utc};

use crate::{
    config::{AppConfig, StorageBackend},
    db::{DbPool, MIGRATIONS_DIR, create_orm_conn, create_pool, run_migrations},
    metrics::NoiseMode,
    storage::{DatabaseStore, PharmacyStore},
};

#[derive(Debug, Clone, Copy)]
pub struct ForecastSettings {
    pub horizon_days: u32,
    pub history_days: u32,
    pub noise: NoiseMode,
}

impl Default for ForecastSettings {
    fn default() -> Self {
        Self {
            horizon_days: 14,
            history_days: 30,
            noise: NoiseMode::Random,
        }
    }
}

#[derive(Clone)]
pub struct AppState {
    pub store: PharmacyStore,
    /// Present only when running against Postgres.
    pub pool: Option<DbPool>,
    pub forecast: ForecastSettings,
}

impl AppState {
    pub fn new(store: PharmacyStore, pool: Option<DbPool>, forecast: ForecastSettings) -> Self {
        Self {
            store,
            pool,
            forecast,
        }
    }

    /// Connects the configured backend. Postgres deployments get their
    /// migrations applied before the first request.
    pub async fn from_config(config: &AppConfig) -> anyhow::Result<Self> {
        let forecast = ForecastSettings {
            horizon_days: config.forecast_horizon_days,
            history_days: config.history_days,
            noise: NoiseMode::from_seed(config.forecast_seed),
        };

        match config.storage {
            StorageBackend::Memory => {
                tracing::info!("using in-memory storage");
                Ok(Self::new(PharmacyStore::in_memory(), None, forecast))
            }
            StorageBackend::Postgres => {
                let database_url = config.require_database_url()?;
                let orm = create_orm_conn(database_url).await?;
                run_migrations(&orm, MIGRATIONS_DIR).await?;
                let pool = create_pool(database_url).await?;
                tracing::info!("using postgres storage");
                let store = PharmacyStore::new(Arc::new(DatabaseStore::new(orm)));
                Ok(Self::new(store, Some(pool), forecast))
            }
        }
    }

    /// Memory-backed state with jitter-free forecasts.
    pub fn in_memory() -> Self {
        Self::new(
            PharmacyStore::in_memory(),
            None,
            ForecastSettings {
                noise: NoiseMode::Flat,
                ..ForecastSettings::default()
            },
        )
    }

    pub fn today(&self) -> NaiveDate {
        Utc::now().date_naive()
    }
}
