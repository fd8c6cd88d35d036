use std::sync::Arc;

use chrono::Utc;
use rural_pharmacy_api::{
    config::AppConfig,
    db::{MIGRATIONS_DIR, create_orm_conn, run_migrations},
    seed,
    storage::{DatabaseStore, PharmacyStore},
};

/// Writes the demo collections and default settings into Postgres,
/// overwriting whatever is stored under the pharmacy keys.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    let config = AppConfig::from_env()?;

    let orm = create_orm_conn(config.require_database_url()?).await?;
    // Ensure migrations are applied.
    run_migrations(&orm, MIGRATIONS_DIR).await?;

    let store = PharmacyStore::new(Arc::new(DatabaseStore::new(orm)));
    let medicines = seed::medicines();
    let alerts = seed::alerts(Utc::now());
    let orders = seed::orders();

    store.set_inventory(&medicines).await?;
    store.set_alerts(&alerts).await?;
    store.set_orders(&orders).await?;
    store.set_bills(&[]).await?;
    store.set_pharmacy_name(seed::DEFAULT_PHARMACY_NAME).await?;
    store.set_language(seed::DEFAULT_LANGUAGE).await?;

    println!(
        "Seed completed: {} medicines, {} alerts, {} orders",
        medicines.len(),
        alerts.len(),
        orders.len()
    );
    Ok(())
}
