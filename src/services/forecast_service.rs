use crate::{
    config::{MAX_HISTORY_DAYS, MAX_HORIZON_DAYS},
    dto::forecast::{ForecastDriver, ForecastReport, ForecastSummary, ForecastSummaryItem, Impact},
    error::{AppError, AppResult},
    metrics::{
        days_remaining, depletion_date, forecast, historical_sales, is_low_stock,
        predicted_demand, recommend_reorder,
    },
    models::Medicine,
    response::{ApiResponse, Meta},
    routes::params::{ForecastQuery, Pagination},
    state::AppState,
};

pub(crate) const DEMAND_WINDOW_DAYS: usize = 7;
const SUMMARY_HORIZON_DAYS: u32 = 7;
/// Fever medicines track temperature swings.
const WEATHER_SENSITIVE_CATEGORY: &str = "Antipyretic";

/// Demand drivers for one medicine. Only the weather signal depends on the category.
pub fn forecast_drivers(medicine: &Medicine) -> Vec<ForecastDriver> {
    let (weather_impact, weather_note) = if medicine.category == WEATHER_SENSITIVE_CATEGORY {
        (
            Impact::High,
            "Recent temperature changes affect fever medicine demand",
        )
    } else {
        (Impact::Low, "Low correlation with weather patterns")
    };

    vec![
        ForecastDriver {
            name: "Historical Usage".into(),
            impact: Impact::High,
            description: format!(
                "Based on {} daily sales average",
                medicine.avg_daily_sales
            ),
        },
        ForecastDriver {
            name: "Seasonal Pattern".into(),
            impact: Impact::Medium,
            description: "Weekly demand variations detected".into(),
        },
        ForecastDriver {
            name: "Weather Signal".into(),
            impact: weather_impact,
            description: weather_note.into(),
        },
    ]
}

/// Seven-day demand and reorder flag for every medicine, in inventory order.
pub async fn forecast_summary(
    state: &AppState,
    query: Pagination,
) -> AppResult<ApiResponse<ForecastSummary>> {
    let inventory = state.store.inventory().await?;
    let today = state.today();
    let mut noise = state.forecast.noise.source();

    let items: Vec<ForecastSummaryItem> = inventory
        .iter()
        .map(|medicine| {
            let points = forecast(medicine, SUMMARY_HORIZON_DAYS, today, noise.as_mut());
            ForecastSummaryItem {
                medicine_id: medicine.medicine_id.clone(),
                name: medicine.name.clone(),
                unit: medicine.unit.clone(),
                predicted_demand_7d: predicted_demand(&points, DEMAND_WINDOW_DAYS),
                days_remaining: days_remaining(medicine),
                needs_reorder: is_low_stock(medicine),
            }
        })
        .collect();

    let (items, meta) = query.apply(items);
    Ok(ApiResponse::success(
        "Forecast summary",
        ForecastSummary { items },
        Some(meta),
    ))
}

pub async fn forecast_report(
    state: &AppState,
    medicine_id: &str,
    query: ForecastQuery,
) -> AppResult<ApiResponse<ForecastReport>> {
    let medicine = state
        .store
        .inventory()
        .await?
        .into_iter()
        .find(|m| m.medicine_id == medicine_id);
    let medicine = match medicine {
        Some(m) => m,
        None => return Err(AppError::NotFound),
    };

    let horizon = query
        .horizon
        .unwrap_or(state.forecast.horizon_days)
        .clamp(1, MAX_HORIZON_DAYS);
    let lookback = query
        .history
        .unwrap_or(state.forecast.history_days)
        .clamp(1, MAX_HISTORY_DAYS);
    let today = state.today();

    let mut noise = state.forecast.noise.source();
    let history = historical_sales(&medicine, lookback, today, noise.as_mut());
    let points = forecast(&medicine, horizon, today, noise.as_mut());

    let demand = predicted_demand(&points, DEMAND_WINDOW_DAYS);
    let report = ForecastReport {
        medicine_id: medicine.medicine_id.clone(),
        medicine_name: medicine.name.clone(),
        current_stock: medicine.quantity,
        days_remaining: days_remaining(&medicine),
        predicted_demand_7d: demand,
        recommended_reorder: recommend_reorder(&medicine, demand),
        depletion_date: depletion_date(&medicine, &points),
        drivers: forecast_drivers(&medicine),
        history,
        forecast: points,
    };

    tracing::debug!(
        medicine_id = %report.medicine_id,
        horizon,
        reorder = report.recommended_reorder,
        "forecast generated"
    );
    Ok(ApiResponse::success("Forecast", report, Some(Meta::empty())))
}
