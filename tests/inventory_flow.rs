use rural_pharmacy_api::{
    dto::{
        forecast::Impact,
        inventory::{CreateMedicineRequest, UpdateMedicineRequest},
    },
    error::AppError,
    models::MedicineForm,
    routes::params::{ForecastQuery, InventoryQuery, Pagination},
    services::{forecast_service, inventory_service},
    state::AppState,
};

fn new_medicine(name: &str, quantity: u32, avg_daily_sales: f64) -> CreateMedicineRequest {
    CreateMedicineRequest {
        name: name.into(),
        brand: "Generic".into(),
        form: MedicineForm::Tablet,
        quantity,
        unit: "tablets".into(),
        expiry_date: chrono::NaiveDate::from_ymd_opt(2027, 1, 31).unwrap(),
        batch: "T001".into(),
        last_sold_date: None,
        avg_daily_sales,
        category: "Supplement".into(),
    }
}

#[tokio::test]
async fn add_update_and_delete_medicine() -> anyhow::Result<()> {
    let state = AppState::in_memory();

    let created = inventory_service::create_medicine(&state, new_medicine("Zinc", 10, 2.0))
        .await?
        .data
        .expect("created medicine");
    assert_eq!(created.medicine.medicine_id, "M009");
    assert_eq!(created.medicine.last_sold_date, state.today());
    assert_eq!(created.days_remaining, Some(5));
    assert!(created.low_stock);

    let updated = inventory_service::update_medicine(
        &state,
        "M009",
        UpdateMedicineRequest {
            quantity: Some(200),
            ..Default::default()
        },
    )
    .await?
    .data
    .expect("updated medicine");
    assert_eq!(updated.medicine.quantity, 200);
    assert_eq!(updated.medicine.name, "Zinc");
    assert!(!updated.low_stock);

    inventory_service::delete_medicine(&state, "M009").await?;
    let missing = inventory_service::get_medicine(&state, "M009").await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    assert_eq!(state.store.inventory().await?.len(), 8);
    Ok(())
}

#[tokio::test]
async fn invalid_medicine_is_not_saved() -> anyhow::Result<()> {
    let state = AppState::in_memory();

    let blank = inventory_service::create_medicine(&state, new_medicine("  ", 10, 1.0)).await;
    assert!(matches!(blank, Err(AppError::BadRequest(_))));

    let negative = inventory_service::update_medicine(
        &state,
        "M001",
        UpdateMedicineRequest {
            avg_daily_sales: Some(-1.0),
            ..Default::default()
        },
    )
    .await;
    assert!(matches!(negative, Err(AppError::BadRequest(_))));

    let inventory = state.store.inventory().await?;
    assert_eq!(inventory.len(), 8);
    assert_eq!(inventory[0].avg_daily_sales, 5.0);
    Ok(())
}

#[tokio::test]
async fn non_selling_medicine_never_runs_low() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let created = inventory_service::create_medicine(&state, new_medicine("Gauze", 0, 0.0))
        .await?
        .data
        .expect("created medicine");
    assert_eq!(created.days_remaining, None);
    assert!(!created.low_stock);
    Ok(())
}

#[tokio::test]
async fn low_stock_list_is_sorted_by_days_remaining() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let items = inventory_service::list_low_stock(&state)
        .await?
        .data
        .expect("low stock")
        .items;

    let names: Vec<_> = items.iter().map(|s| s.medicine.name.as_str()).collect();
    assert_eq!(names, ["Ibuprofen", "Dextromethorphan"]);
    assert_eq!(items[0].days_remaining, Some(2));
    assert_eq!(items[1].days_remaining, Some(6));
    Ok(())
}

#[tokio::test]
async fn search_and_pagination() -> anyhow::Result<()> {
    let state = AppState::in_memory();

    let antibiotics = inventory_service::list_inventory(
        &state,
        InventoryQuery {
            q: Some("antibiotic".into()),
            ..Default::default()
        },
    )
    .await?;
    assert_eq!(antibiotics.data.expect("items").items.len(), 2);

    let page = inventory_service::list_inventory(
        &state,
        InventoryQuery {
            q: None,
            page: Some(2),
            per_page: Some(3),
        },
    )
    .await?;
    let meta = page.meta.expect("meta");
    assert_eq!(meta.total, Some(8));
    let ids: Vec<_> = page
        .data
        .expect("items")
        .items
        .into_iter()
        .map(|s| s.medicine.medicine_id)
        .collect();
    assert_eq!(ids, ["M004", "M005", "M006"]);
    Ok(())
}

#[tokio::test]
async fn csv_import_merges_by_id_and_export_has_header() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let csv = "\
medicine_id,name,brand,form,quantity,unit,expiry_date,batch,last_sold_date,avg_daily_sales,category
M001,Paracetamol,Crocin,Tablet,500,tablets,2026-06-30,B999,2025-10-29,5,Antipyretic
M100,ORS,Electral,Liquid,40,sachets,2026-02-01,Z4,2025-10-01,2,Rehydration
,Orphan,X,Tablet,1,tablets,2026-01-01,Z2,2025-10-01,1,Misc
";
    let summary = inventory_service::import_csv(&state, csv)
        .await?
        .data
        .expect("summary");
    assert_eq!(summary.imported, 2);
    assert_eq!(summary.skipped, 1);
    assert_eq!(summary.total, 9);

    let inventory = state.store.inventory().await?;
    assert_eq!(inventory[0].quantity, 500);
    assert_eq!(inventory[0].batch, "B999");
    assert_eq!(inventory[8].medicine_id, "M100");

    let exported = inventory_service::export_csv(&state).await?;
    let mut lines = exported.lines();
    assert_eq!(
        lines.next(),
        Some("medicine_id,name,brand,form,quantity,unit,expiry_date,batch,last_sold_date,avg_daily_sales,category")
    );
    assert_eq!(lines.count(), 9);
    Ok(())
}

#[tokio::test]
async fn dashboard_counts_seed_state() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let summary = inventory_service::dashboard(&state)
        .await?
        .data
        .expect("dashboard");

    assert_eq!(summary.pharmacy_name, "Demo Pharmacy");
    assert_eq!(summary.total_medicines, 8);
    assert_eq!(summary.low_stock_count, 2);
    assert_eq!(summary.unread_alerts, 3);
    assert_eq!(summary.open_orders, 1);
    Ok(())
}

#[tokio::test]
async fn forecast_report_for_low_stock_medicine() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let report = forecast_service::forecast_report(&state, "M004", ForecastQuery::default())
        .await?
        .data
        .expect("report");

    assert_eq!(report.medicine_name, "Ibuprofen");
    assert_eq!(report.history.len(), 30);
    assert_eq!(report.forecast.len(), 14);
    assert_eq!(report.history.last().map(|p| p.date), Some(state.today() - chrono::TimeDelta::days(1)));
    assert_eq!(report.forecast[0].date, state.today() + chrono::TimeDelta::days(1));
    // Flat noise: 6, 7, 7, 7, 7, 7, 7
    assert_eq!(report.predicted_demand_7d, 48.0);
    assert_eq!(report.recommended_reorder, 75);
    assert_eq!(report.depletion_date, Some(state.today() + chrono::TimeDelta::days(3)));
    assert_eq!(report.drivers.len(), 3);
    assert_eq!(report.drivers[2].impact, Impact::Low);

    let clamped = forecast_service::forecast_report(
        &state,
        "M004",
        ForecastQuery {
            horizon: Some(0),
            history: Some(1000),
        },
    )
    .await?
    .data
    .expect("report");
    assert_eq!(clamped.forecast.len(), 1);
    assert_eq!(clamped.history.len(), 365);

    let missing = forecast_service::forecast_report(&state, "M999", ForecastQuery::default()).await;
    assert!(matches!(missing, Err(AppError::NotFound)));
    Ok(())
}

#[tokio::test]
async fn forecast_summary_flags_medicines_to_reorder() -> anyhow::Result<()> {
    let state = AppState::in_memory();
    let summary = forecast_service::forecast_summary(&state, Pagination::default())
        .await?
        .data
        .expect("summary");

    assert_eq!(summary.items.len(), 8);
    let flagged: Vec<&str> = summary
        .items
        .iter()
        .filter(|item| item.needs_reorder)
        .map(|item| item.name.as_str())
        .collect();
    assert_eq!(flagged, vec!["Ibuprofen", "Dextromethorphan"]);

    let ibuprofen = &summary.items[3];
    assert_eq!(ibuprofen.medicine_id, "M004");
    assert_eq!(ibuprofen.unit, "tablets");
    assert_eq!(ibuprofen.days_remaining, Some(2));
    assert_eq!(ibuprofen.predicted_demand_7d, 48.0);

    let report = forecast_service::forecast_report(&state, "M001", ForecastQuery::default())
        .await?
        .data
        .expect("report");
    assert_eq!(report.drivers[2].impact, Impact::High);
    Ok(())
}
