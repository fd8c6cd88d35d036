use std::sync::Arc;

use chrono::Utc;
use serde::{Serialize, de::DeserializeOwned};
use tokio::sync::Mutex;

use super::{
    ALERTS_KEY, BILLS_KEY, INVENTORY_KEY, KeyValueStore, LANGUAGE_KEY, MemoryStore, ORDERS_KEY,
    PHARMACY_NAME_KEY,
};
use crate::{
    error::AppResult,
    models::{Alert, Bill, Medicine, Order, Settings},
    seed,
};

/// Typed repository over the six storage keys.
///
/// Reads never fail on missing or corrupt payloads: both resolve to the seed
/// collection. Only backend I/O errors propagate.
///
/// Read-modify-write sequences issued through one `PharmacyStore` (and its clones)
/// are serialized. Separate processes sharing a backend are not coordinated.
#[derive(Clone)]
pub struct PharmacyStore {
    backend: Arc<dyn KeyValueStore>,
    writes: Arc<Mutex<()>>,
}

impl PharmacyStore {
    pub fn new(backend: Arc<dyn KeyValueStore>) -> Self {
        Self {
            backend,
            writes: Arc::new(Mutex::new(())),
        }
    }

    pub fn in_memory() -> Self {
        Self::new(Arc::new(MemoryStore::new()))
    }

    pub fn backend(&self) -> &Arc<dyn KeyValueStore> {
        &self.backend
    }

    // inventory

    pub async fn inventory(&self) -> AppResult<Vec<Medicine>> {
        self.load(INVENTORY_KEY, seed::medicines).await
    }

    pub async fn set_inventory(&self, items: &[Medicine]) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        self.save(INVENTORY_KEY, items).await
    }

    /// Applies `mutate` to the current inventory and writes the result back.
    /// Nothing is written when `mutate` fails.
    pub async fn update_inventory<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Medicine>) -> AppResult<R> + Send,
        R: Send,
    {
        self.update(INVENTORY_KEY, seed::medicines, mutate).await
    }

    // alerts

    pub async fn alerts(&self) -> AppResult<Vec<Alert>> {
        self.load(ALERTS_KEY, || seed::alerts(Utc::now())).await
    }

    pub async fn set_alerts(&self, alerts: &[Alert]) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        self.save(ALERTS_KEY, alerts).await
    }

    pub async fn update_alerts<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Alert>) -> AppResult<R> + Send,
        R: Send,
    {
        self.update(ALERTS_KEY, || seed::alerts(Utc::now()), mutate)
            .await
    }

    // orders

    pub async fn orders(&self) -> AppResult<Vec<Order>> {
        self.load(ORDERS_KEY, seed::orders).await
    }

    pub async fn set_orders(&self, orders: &[Order]) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        self.save(ORDERS_KEY, orders).await
    }

    pub async fn add_order(&self, order: Order) -> AppResult<()> {
        self.update_orders(move |orders| {
            orders.insert(0, order);
            Ok(())
        })
        .await
    }

    pub async fn update_orders<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Order>) -> AppResult<R> + Send,
        R: Send,
    {
        self.update(ORDERS_KEY, seed::orders, mutate).await
    }

    // bills

    pub async fn bills(&self) -> AppResult<Vec<Bill>> {
        self.load(BILLS_KEY, Vec::new).await
    }

    pub async fn set_bills(&self, bills: &[Bill]) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        self.save(BILLS_KEY, bills).await
    }

    pub async fn add_bill(&self, bill: Bill) -> AppResult<()> {
        self.update_bills(move |bills| {
            bills.insert(0, bill);
            Ok(())
        })
        .await
    }

    pub async fn update_bills<R, F>(&self, mutate: F) -> AppResult<R>
    where
        F: FnOnce(&mut Vec<Bill>) -> AppResult<R> + Send,
        R: Send,
    {
        self.update(BILLS_KEY, Vec::new, mutate).await
    }

    // settings

    pub async fn pharmacy_name(&self) -> AppResult<String> {
        self.load_scalar(PHARMACY_NAME_KEY, seed::DEFAULT_PHARMACY_NAME)
            .await
    }

    pub async fn set_pharmacy_name(&self, name: &str) -> AppResult<()> {
        self.backend.set(PHARMACY_NAME_KEY, name.to_string()).await
    }

    pub async fn language(&self) -> AppResult<String> {
        self.load_scalar(LANGUAGE_KEY, seed::DEFAULT_LANGUAGE).await
    }

    pub async fn set_language(&self, language: &str) -> AppResult<()> {
        self.backend.set(LANGUAGE_KEY, language.to_string()).await
    }

    pub async fn settings(&self) -> AppResult<Settings> {
        Ok(Settings {
            pharmacy_name: self.pharmacy_name().await?,
            language: self.language().await?,
        })
    }

    /// Restores inventory and alerts to the demo seed. Orders, bills and settings are kept.
    pub async fn reset_demo_data(&self) -> AppResult<()> {
        let _guard = self.writes.lock().await;
        self.save(INVENTORY_KEY, &seed::medicines()).await?;
        self.save(ALERTS_KEY, &seed::alerts(Utc::now())).await?;
        tracing::info!("demo data restored");
        Ok(())
    }

    async fn load<T, S>(&self, key: &str, fallback: S) -> AppResult<Vec<T>>
    where
        T: DeserializeOwned,
        S: FnOnce() -> Vec<T> + Send,
    {
        let Some(raw) = self.backend.get(key).await? else {
            return Ok(fallback());
        };
        match serde_json::from_str(&raw) {
            Ok(items) => Ok(items),
            Err(err) => {
                tracing::warn!(key, error = %err, "stored collection is malformed, using seed data");
                Ok(fallback())
            }
        }
    }

    async fn save<T: Serialize + Sync>(&self, key: &str, items: &[T]) -> AppResult<()> {
        let raw = serde_json::to_string(items)?;
        self.backend.set(key, raw).await?;
        tracing::debug!(key, count = items.len(), "collection written");
        Ok(())
    }

    async fn update<T, R, S, F>(&self, key: &str, fallback: S, mutate: F) -> AppResult<R>
    where
        T: Serialize + DeserializeOwned + Send + Sync,
        S: FnOnce() -> Vec<T> + Send,
        F: FnOnce(&mut Vec<T>) -> AppResult<R> + Send,
        R: Send,
    {
        let _guard = self.writes.lock().await;
        let mut items = self.load(key, fallback).await?;
        let result = mutate(&mut items)?;
        self.save(key, &items).await?;
        Ok(result)
    }

    async fn load_scalar(&self, key: &str, default: &str) -> AppResult<String> {
        Ok(self
            .backend
            .get(key)
            .await?
            .filter(|value| !value.is_empty())
            .unwrap_or_else(|| default.to_string()))
    }
}
