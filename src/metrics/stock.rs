use chrono::NaiveDate;

use crate::models::{ForecastPoint, Medicine};

/// A medicine is low on stock when it will run out in fewer days than this.
pub const LOW_STOCK_DAYS: u32 = 7;
/// Days of average sales kept on hand on top of forecast demand.
pub const SAFETY_BUFFER_DAYS: f64 = 7.0;

/// Whole days until the stock on hand is sold out at the average sales rate.
///
/// `None` means the medicine is not selling and never depletes.
pub fn days_remaining(medicine: &Medicine) -> Option<u32> {
    if medicine.avg_daily_sales.is_nan() || medicine.avg_daily_sales <= 0.0 {
        return None;
    }
    let days = (f64::from(medicine.quantity) / medicine.avg_daily_sales).floor();
    Some(days.min(f64::from(u32::MAX)) as u32)
}

pub fn is_low_stock(medicine: &Medicine) -> bool {
    days_remaining(medicine).is_some_and(|days| days < LOW_STOCK_DAYS)
}

/// Units to order so that forecast demand plus the safety buffer is covered
/// by stock on hand.
pub fn recommend_reorder(medicine: &Medicine, predicted_demand: f64) -> u32 {
    let buffer = medicine.avg_daily_sales.max(0.0) * SAFETY_BUFFER_DAYS;
    let shortfall = predicted_demand - f64::from(medicine.quantity) + buffer;
    if shortfall.is_nan() || shortfall <= 0.0 {
        return 0;
    }
    shortfall.ceil().min(f64::from(u32::MAX)) as u32
}

/// First forecast day on which cumulative predicted demand reaches the stock on hand.
pub fn depletion_date(medicine: &Medicine, forecast: &[ForecastPoint]) -> Option<NaiveDate> {
    let stock = f64::from(medicine.quantity);
    let mut cumulative = 0.0;
    forecast.iter().find_map(|point| {
        cumulative += point.predicted;
        (cumulative >= stock).then_some(point.date)
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Confidence;
    use crate::seed;

    fn medicine(quantity: u32, avg_daily_sales: f64) -> Medicine {
        Medicine {
            quantity,
            avg_daily_sales,
            ..seed::medicines().remove(0)
        }
    }

    fn point(day: u32, predicted: f64) -> ForecastPoint {
        ForecastPoint {
            date: NaiveDate::from_ymd_opt(2025, 11, day).unwrap(),
            predicted,
            lower: predicted * 0.8,
            upper: predicted * 1.2,
            confidence: Confidence::Medium,
        }
    }

    #[test]
    fn ibuprofen_seed_is_low_stock() {
        let ibuprofen = seed::medicines()
            .into_iter()
            .find(|m| m.name == "Ibuprofen")
            .unwrap();
        assert_eq!(days_remaining(&ibuprofen), Some(2));
        assert!(is_low_stock(&ibuprofen));
    }

    #[test]
    fn days_remaining_floors() {
        assert_eq!(days_remaining(&medicine(120, 5.0)), Some(24));
        assert_eq!(days_remaining(&medicine(45, 4.0)), Some(11));
        assert_eq!(days_remaining(&medicine(0, 3.0)), Some(0));
    }

    #[test]
    fn zero_sales_never_depletes() {
        let idle = medicine(3, 0.0);
        assert_eq!(days_remaining(&idle), None);
        assert!(!is_low_stock(&idle));
    }

    #[test]
    fn low_stock_boundary_is_exclusive() {
        assert!(!is_low_stock(&medicine(35, 5.0)));
        assert!(is_low_stock(&medicine(34, 5.0)));
    }

    #[test]
    fn reorder_covers_demand_and_buffer() {
        // 40 forecast - 15 on hand + 6 * 7 buffer
        assert_eq!(recommend_reorder(&medicine(15, 6.0), 40.0), 67);
        assert_eq!(recommend_reorder(&medicine(15, 6.0), 40.5), 68);
    }

    #[test]
    fn reorder_never_negative() {
        assert_eq!(recommend_reorder(&medicine(1000, 2.0), 14.0), 0);
        assert_eq!(recommend_reorder(&medicine(10, 0.0), 0.0), 0);
    }

    #[test]
    fn depletion_on_first_day_cumulative_reaches_stock() {
        let forecast = vec![point(1, 5.0), point(2, 5.0), point(3, 5.0)];
        assert_eq!(
            depletion_date(&medicine(10, 5.0), &forecast),
            NaiveDate::from_ymd_opt(2025, 11, 2)
        );
        assert_eq!(depletion_date(&medicine(100, 5.0), &forecast), None);
    }
}
