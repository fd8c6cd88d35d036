use chrono::{NaiveDate, TimeDelta};

use super::noise::NoiseSource;
use crate::models::{Confidence, ForecastPoint, Medicine, SalesPoint};

const FORECAST_JITTER: (f64, f64) = (0.8, 1.2);
const FORECAST_SEASONAL_AMPLITUDE: f64 = 0.2;
const FORECAST_SEASONAL_PERIOD: f64 = 3.0;
/// Half-width of the uncertainty band, as a share of the predicted value.
const FORECAST_BAND: f64 = 0.2;

const HISTORY_JITTER: (f64, f64) = (0.7, 1.3);
const HISTORY_SEASONAL_AMPLITUDE: f64 = 0.3;
const HISTORY_SEASONAL_PERIOD: f64 = 4.0;

impl Confidence {
    /// Grades a band half-width against the value it surrounds.
    pub fn from_band(half_width: f64, predicted: f64) -> Self {
        if predicted <= 0.0 {
            return Self::Low;
        }
        let ratio = half_width / predicted;
        if ratio < 0.15 {
            Self::High
        } else if ratio < 0.25 {
            Self::Medium
        } else {
            Self::Low
        }
    }
}

fn seasonal(day: u32, amplitude: f64, period: f64) -> f64 {
    1.0 + amplitude * (f64::from(day) / period).sin()
}

/// Daily demand for the `horizon_days` days after `today`.
///
/// This is a presentation heuristic: the average sales rate with a weekly-ish
/// sinusoid and jitter on top, not a fitted model.
pub fn forecast(
    medicine: &Medicine,
    horizon_days: u32,
    today: NaiveDate,
    noise: &mut dyn NoiseSource,
) -> Vec<ForecastPoint> {
    let base = medicine.avg_daily_sales.max(0.0);
    (1..=horizon_days)
        .map(|day| {
            let jitter = noise.factor(FORECAST_JITTER.0, FORECAST_JITTER.1);
            let predicted = (base
                * jitter
                * seasonal(day, FORECAST_SEASONAL_AMPLITUDE, FORECAST_SEASONAL_PERIOD))
            .round();
            let band = predicted * FORECAST_BAND;
            ForecastPoint {
                date: today + TimeDelta::days(i64::from(day)),
                predicted,
                lower: (predicted - band).round(),
                upper: (predicted + band).round(),
                confidence: Confidence::from_band(band, predicted),
            }
        })
        .collect()
}

/// Simulated daily sales for the `days` days before `today`, oldest first.
pub fn historical_sales(
    medicine: &Medicine,
    days: u32,
    today: NaiveDate,
    noise: &mut dyn NoiseSource,
) -> Vec<SalesPoint> {
    let base = medicine.avg_daily_sales.max(0.0);
    (1..=days)
        .rev()
        .map(|day| {
            let jitter = noise.factor(HISTORY_JITTER.0, HISTORY_JITTER.1);
            let sales =
                (base * jitter * seasonal(day, HISTORY_SEASONAL_AMPLITUDE, HISTORY_SEASONAL_PERIOD))
                    .round()
                    .max(0.0);
            SalesPoint {
                date: today - TimeDelta::days(i64::from(day)),
                sales: sales as u32,
            }
        })
        .collect()
}

/// Sum of predicted demand over the first `days` forecast points.
pub fn predicted_demand(forecast: &[ForecastPoint], days: usize) -> f64 {
    forecast.iter().take(days).map(|p| p.predicted).sum()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::noise::{FlatNoise, RandomNoise};
    use crate::seed;

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 10, 30).unwrap()
    }

    fn paracetamol() -> Medicine {
        seed::medicines().remove(0)
    }

    #[test]
    fn forecast_has_one_point_per_day_after_today() {
        let points = forecast(&paracetamol(), 14, today(), &mut FlatNoise);
        assert_eq!(points.len(), 14);
        assert_eq!(points[0].date, NaiveDate::from_ymd_opt(2025, 10, 31).unwrap());
        assert_eq!(points[13].date, NaiveDate::from_ymd_opt(2025, 11, 13).unwrap());
    }

    #[test]
    fn forecast_band_brackets_prediction() {
        let mut noise = RandomNoise::seeded(11);
        for medicine in seed::medicines() {
            for point in forecast(&medicine, 30, today(), &mut noise) {
                assert!(point.lower <= point.predicted && point.predicted <= point.upper);
                let expected = Confidence::from_band(point.predicted * FORECAST_BAND, point.predicted);
                assert_eq!(point.confidence, expected, "{point:?}");
            }
        }
    }

    #[test]
    fn band_edges_are_whole_units() {
        let medicine = Medicine {
            avg_daily_sales: 13.0,
            ..paracetamol()
        };
        let points = forecast(&medicine, 10, today(), &mut RandomNoise::seeded(5));
        for point in &points {
            assert_eq!(point.lower, point.lower.round(), "{point:?}");
            assert_eq!(point.upper, point.upper.round(), "{point:?}");
        }

        // 5 units: band 1.0 either side
        let flat = forecast(&paracetamol(), 1, today(), &mut FlatNoise);
        let first = &flat[0];
        assert_eq!(first.lower, (first.predicted * 0.8).round());
        assert_eq!(first.upper, (first.predicted * 1.2).round());
    }

    #[test]
    fn forecast_stays_within_jitter_and_seasonal_bounds() {
        let medicine = paracetamol();
        let mut noise = RandomNoise::seeded(3);
        for point in forecast(&medicine, 60, today(), &mut noise) {
            // 5 * [0.8, 1.2] * [0.8, 1.2], then rounded
            assert!((3.0..=8.0).contains(&point.predicted), "{point:?}");
        }
    }

    #[test]
    fn flat_noise_forecast_is_seasonal_base() {
        let points = forecast(&paracetamol(), 3, today(), &mut FlatNoise);
        let expected: Vec<f64> = (1..=3)
            .map(|d| (5.0 * (1.0 + 0.2 * (f64::from(d) / 3.0).sin())).round())
            .collect();
        let predicted: Vec<f64> = points.iter().map(|p| p.predicted).collect();
        assert_eq!(predicted, expected);
        assert!(points.iter().all(|p| p.confidence == Confidence::Medium));
    }

    #[test]
    fn idle_medicine_forecasts_zero_with_low_confidence() {
        let idle = Medicine {
            avg_daily_sales: 0.0,
            ..paracetamol()
        };
        let points = forecast(&idle, 5, today(), &mut RandomNoise::seeded(1));
        assert!(points.iter().all(|p| p.predicted == 0.0 && p.confidence == Confidence::Low));
    }

    #[test]
    fn history_is_oldest_first_and_non_negative() {
        let history = historical_sales(&paracetamol(), 30, today(), &mut RandomNoise::seeded(9));
        assert_eq!(history.len(), 30);
        assert_eq!(history[0].date, today() - TimeDelta::days(30));
        assert_eq!(history[29].date, today() - TimeDelta::days(1));
        assert!(history.windows(2).all(|w| w[0].date < w[1].date));
    }

    #[test]
    fn predicted_demand_sums_leading_days() {
        let points = forecast(&paracetamol(), 14, today(), &mut FlatNoise);
        let week: f64 = points[..7].iter().map(|p| p.predicted).sum();
        assert_eq!(predicted_demand(&points, 7), week);
        assert_eq!(predicted_demand(&points[..3], 7), predicted_demand(&points, 3));
    }

    #[test]
    fn confidence_thresholds() {
        assert_eq!(Confidence::from_band(1.0, 10.0), Confidence::High);
        assert_eq!(Confidence::from_band(2.0, 10.0), Confidence::Medium);
        assert_eq!(Confidence::from_band(2.5, 10.0), Confidence::Low);
        assert_eq!(Confidence::from_band(0.0, 0.0), Confidence::Low);
    }
}
