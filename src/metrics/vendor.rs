use std::cmp::Ordering;

use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Vendor;

/// Distances below this are treated as this, which caps the proximity term at 100.
pub const MIN_VENDOR_DISTANCE_KM: f64 = 0.1;

/// `reliability × 2 + 10 / distance + availability / 100 − cost / 50`. Higher is better.
///
/// The terms are not normalized against each other.
pub fn vendor_score(vendor: &Vendor) -> f64 {
    let distance = vendor.distance.max(MIN_VENDOR_DISTANCE_KM);
    vendor.reliability * 2.0 + 10.0 / distance + f64::from(vendor.availability) / 100.0
        - vendor.cost_per_unit / 50.0
}

#[derive(Debug, Clone, PartialEq, Serialize, ToSchema)]
pub struct RankedVendor {
    #[serde(flatten)]
    pub vendor: Vendor,
    pub score: f64,
}

/// Best score first. Vendors with equal scores keep their input order.
pub fn rank_vendors(vendors: Vec<Vendor>) -> Vec<RankedVendor> {
    let mut ranked: Vec<RankedVendor> = vendors
        .into_iter()
        .map(|vendor| RankedVendor {
            score: vendor_score(&vendor),
            vendor,
        })
        .collect();
    ranked.sort_by(|a, b| b.score.partial_cmp(&a.score).unwrap_or(Ordering::Equal));
    ranked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::seed;

    fn vendor(id: &str, reliability: f64, distance: f64, availability: u32, cost: f64) -> Vendor {
        Vendor {
            id: id.into(),
            reliability,
            distance,
            availability,
            cost_per_unit: cost,
            ..seed::vendors().remove(0)
        }
    }

    #[test]
    fn weighted_formula_regression() {
        let a = vendor("A", 4.5, 10.0, 500, 20.0);
        let b = vendor("B", 4.0, 5.0, 200, 25.0);
        assert!((vendor_score(&a) - 14.6).abs() < 1e-9);
        assert!((vendor_score(&b) - 11.5).abs() < 1e-9);

        let ranked = rank_vendors(vec![b, a]);
        assert_eq!(ranked[0].vendor.id, "A");
        assert_eq!(ranked[1].vendor.id, "B");
    }

    #[test]
    fn zero_distance_is_capped() {
        let here = vendor("H", 0.0, 0.0, 0, 0.0);
        assert!((vendor_score(&here) - 100.0).abs() < 1e-9);
    }

    #[test]
    fn ties_keep_input_order() {
        let first = vendor("first", 4.0, 10.0, 100, 10.0);
        let second = vendor("second", 4.0, 10.0, 100, 10.0);
        let ranked = rank_vendors(vec![first, second]);
        assert_eq!(ranked[0].vendor.id, "first");
        assert_eq!(ranked[1].vendor.id, "second");
    }

    #[test]
    fn seed_vendors_rank_descending() {
        let ranked = rank_vendors(seed::vendors());
        assert_eq!(ranked.len(), 5);
        assert!(ranked.windows(2).all(|w| w[0].score >= w[1].score));
        // HealthCare Wholesale: 9.6 + 0.22 + 12 - 0.36
        assert_eq!(ranked[0].vendor.id, "V003");
    }
}
