use std::env;

use anyhow::bail;

pub const MAX_HORIZON_DAYS: u32 = 90;
pub const MAX_HISTORY_DAYS: u32 = 365;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StorageBackend {
    Memory,
    Postgres,
}

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub storage: StorageBackend,
    pub database_url: Option<String>,
    pub host: String,
    pub port: u16,
    pub forecast_horizon_days: u32,
    pub history_days: u32,
    /// Fixed seed for the forecast jitter; unset means fresh entropy per request.
    pub forecast_seed: Option<u64>,
}

impl AppConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        let database_url = env::var("DATABASE_URL").ok().filter(|url| !url.is_empty());
        let storage = match env::var("STORAGE_BACKEND").ok().as_deref() {
            Some("memory") => StorageBackend::Memory,
            Some("postgres") => StorageBackend::Postgres,
            Some(other) => bail!("unknown STORAGE_BACKEND `{other}` (expected memory or postgres)"),
            None if database_url.is_some() => StorageBackend::Postgres,
            None => StorageBackend::Memory,
        };
        if storage == StorageBackend::Postgres && database_url.is_none() {
            bail!("STORAGE_BACKEND=postgres requires DATABASE_URL");
        }

        let host = env::var("APP_HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port = env::var("APP_PORT")
            .ok()
            .and_then(|p| p.parse::<u16>().ok())
            .unwrap_or(3000);
        let forecast_horizon_days = day_count(
            env::var("FORECAST_HORIZON_DAYS").ok().as_deref(),
            14,
            MAX_HORIZON_DAYS,
        );
        let history_days = day_count(
            env::var("HISTORY_DAYS").ok().as_deref(),
            30,
            MAX_HISTORY_DAYS,
        );
        let forecast_seed = env::var("FORECAST_SEED")
            .ok()
            .and_then(|s| s.parse::<u64>().ok());

        Ok(Self {
            storage,
            database_url,
            host,
            port,
            forecast_horizon_days,
            history_days,
            forecast_seed,
        })
    }

    /// The database URL, for binaries that only make sense against Postgres.
    pub fn require_database_url(&self) -> anyhow::Result<&str> {
        match self.database_url.as_deref() {
            Some(url) => Ok(url),
            None => bail!("DATABASE_URL is not set"),
        }
    }
}

/// Parses a day count, falling back to `default` when unset or invalid and
/// clamping the result to `1..=max`.
pub fn day_count(raw: Option<&str>, default: u32, max: u32) -> u32 {
    raw.and_then(|d| d.trim().parse::<u32>().ok())
        .unwrap_or(default)
        .clamp(1, max)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn day_counts_are_clamped() {
        assert_eq!(day_count(None, 14, MAX_HORIZON_DAYS), 14);
        assert_eq!(day_count(Some("21"), 14, MAX_HORIZON_DAYS), 21);
        assert_eq!(day_count(Some("100000"), 14, MAX_HORIZON_DAYS), 90);
        assert_eq!(day_count(Some("0"), 30, MAX_HISTORY_DAYS), 1);
        assert_eq!(day_count(Some("4000"), 30, MAX_HISTORY_DAYS), 365);
    }

    #[test]
    fn unparsable_day_counts_use_the_default() {
        assert_eq!(day_count(Some("two weeks"), 14, MAX_HORIZON_DAYS), 14);
        assert_eq!(day_count(Some("-3"), 30, MAX_HISTORY_DAYS), 30);
    }
}
