//! Durable key-value persistence for the pharmacy collections.
//!
//! Every collection lives under one key as a single JSON document. Backends only
//! move opaque strings; [`PharmacyStore`] owns the schema, the seed fallback and
//! the most-recent-first ordering of appended records.

use async_trait::async_trait;

use crate::error::AppResult;

pub mod database;
pub mod memory;
pub mod repository;

pub use database::DatabaseStore;
pub use memory::MemoryStore;
pub use repository::PharmacyStore;

pub const INVENTORY_KEY: &str = "medilink_inventory";
pub const ALERTS_KEY: &str = "medilink_alerts";
pub const ORDERS_KEY: &str = "medilink_orders";
pub const BILLS_KEY: &str = "medilink_bills";
pub const PHARMACY_NAME_KEY: &str = "medilink_pharmacy_name";
pub const LANGUAGE_KEY: &str = "medilink_language";

/// Pluggable backend: in-memory for tests and demos, Postgres for deployments.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// Overwrites the value stored under `key` in a single write.
    async fn set(&self, key: &str, value: String) -> AppResult<()>;
}
