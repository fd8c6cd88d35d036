//! Pure computations over entity snapshots: stock depletion, demand forecasts,
//! vendor ranking, and order/bill arithmetic.

pub mod billing;
pub mod forecast;
pub mod noise;
pub mod stock;
pub mod vendor;

pub use billing::{BillTotals, OrderTotals, bill_totals, order_totals, round_currency};
pub use forecast::{forecast, historical_sales, predicted_demand};
pub use noise::{FlatNoise, NoiseMode, NoiseSource, RandomNoise};
pub use stock::{
    LOW_STOCK_DAYS, SAFETY_BUFFER_DAYS, days_remaining, depletion_date, is_low_stock,
    recommend_reorder,
};
pub use vendor::{RankedVendor, rank_vendors, vendor_score};

/// Rounds half away from zero to `places` decimal places.
pub fn round_to(value: f64, places: i32) -> f64 {
    let factor = 10f64.powi(places);
    (value * factor).round() / factor
}
