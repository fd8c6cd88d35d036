use async_trait::async_trait;
use chrono::Utc;
use sea_orm::sea_query::OnConflict;
use sea_orm::{EntityTrait, Set};

use super::KeyValueStore;
use crate::{
    db::OrmConn,
    entity::kv_entries::{ActiveModel as KvActive, Column as KvCol, Entity as KvEntries},
    error::AppResult,
};

/// Postgres backend over the `kv_entries` table.
///
/// Several processes pointed at one database behave like several browser tabs on
/// one profile: whoever writes a key last wins.
#[derive(Clone)]
pub struct DatabaseStore {
    conn: OrmConn,
}

impl DatabaseStore {
    pub fn new(conn: OrmConn) -> Self {
        Self { conn }
    }
}

#[async_trait]
impl KeyValueStore for DatabaseStore {
    async fn get(&self, key: &str) -> AppResult<Option<String>> {
        let entry = KvEntries::find_by_id(key.to_string())
            .one(&self.conn)
            .await?;
        Ok(entry.map(|e| e.value))
    }

    async fn set(&self, key: &str, value: String) -> AppResult<()> {
        let active = KvActive {
            key: Set(key.to_string()),
            value: Set(value),
            updated_at: Set(Utc::now().into()),
        };
        KvEntries::insert(active)
            .on_conflict(
                OnConflict::column(KvCol::Key)
                    .update_columns([KvCol::Value, KvCol::UpdatedAt])
                    .to_owned(),
            )
            .exec_without_returning(&self.conn)
            .await?;
        tracing::debug!(key, "stored entry");
        Ok(())
    }
}
