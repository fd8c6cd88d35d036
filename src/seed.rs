//! Demo data every collection falls back to when nothing has been stored yet.

use chrono::{DateTime, NaiveDate, TimeDelta, Utc};

use crate::models::{
    Alert, AlertType, Medicine, MedicineForm, Order, OrderStatus, OrderVendorLine, Pharmacy,
    Vendor,
};

pub const DEFAULT_PHARMACY_NAME: &str = "Demo Pharmacy";
pub const DEFAULT_LANGUAGE: &str = "en";

fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or_default()
}

#[allow(clippy::too_many_arguments)]
fn medicine(
    id: &str,
    name: &str,
    brand: &str,
    form: MedicineForm,
    quantity: u32,
    unit: &str,
    expiry_date: NaiveDate,
    batch: &str,
    last_sold_date: NaiveDate,
    avg_daily_sales: f64,
    category: &str,
) -> Medicine {
    Medicine {
        medicine_id: id.into(),
        name: name.into(),
        brand: brand.into(),
        form,
        quantity,
        unit: unit.into(),
        expiry_date,
        batch: batch.into(),
        last_sold_date,
        avg_daily_sales,
        category: category.into(),
    }
}

#[rustfmt::skip]
pub fn medicines() -> Vec<Medicine> {
    use MedicineForm::*;
    vec![
        medicine("M001", "Paracetamol", "Crocin", Tablet, 120, "tablets", date(2026, 6, 30), "B123", date(2025, 10, 28), 5.0, "Antipyretic"),
        medicine("M002", "Amoxicillin", "Mox", Capsule, 45, "capsules", date(2025, 12, 15), "B456", date(2025, 10, 25), 3.0, "Antibiotic"),
        medicine("M003", "Cetirizine", "Zyrtec", Tablet, 80, "tablets", date(2026, 3, 20), "B789", date(2025, 10, 27), 4.0, "Antihistamine"),
        medicine("M004", "Ibuprofen", "Brufen", Tablet, 15, "tablets", date(2025, 11, 30), "B234", date(2025, 10, 26), 6.0, "Anti-inflammatory"),
        medicine("M005", "Azithromycin", "Azee", Tablet, 30, "tablets", date(2026, 8, 15), "B567", date(2025, 10, 24), 2.0, "Antibiotic"),
        medicine("M006", "Omeprazole", "Omez", Capsule, 60, "capsules", date(2026, 5, 10), "B890", date(2025, 10, 28), 3.0, "Antacid"),
        medicine("M007", "Dextromethorphan", "Benadryl", Syrup, 25, "bottles", date(2025, 12, 31), "B345", date(2025, 10, 27), 4.0, "Cough Suppressant"),
        medicine("M008", "Metformin", "Glycomet", Tablet, 100, "tablets", date(2026, 9, 20), "B678", date(2025, 10, 28), 8.0, "Antidiabetic"),
    ]
}

/// Seed alerts, timestamped relative to `now` so they always read as recent.
pub fn alerts(now: DateTime<Utc>) -> Vec<Alert> {
    vec![
        Alert {
            id: "A001".into(),
            alert_type: AlertType::LowStock,
            title: "Low Stock Alert".into(),
            message: "Ibuprofen predicted to run out by Nov 4, 2025".into(),
            timestamp: now - TimeDelta::hours(2),
            read: false,
            medicine: Some("Ibuprofen".into()),
            depletion_date: Some(date(2025, 11, 4)),
            recommended_quantity: Some(100),
        },
        Alert {
            id: "A002".into(),
            alert_type: AlertType::Outbreak,
            title: "Disease Trend Alert".into(),
            message: "Fever medicines usage ↑ 3x in last 3 days - Potential local outbreak".into(),
            timestamp: now - TimeDelta::hours(5),
            read: false,
            medicine: None,
            depletion_date: None,
            recommended_quantity: None,
        },
        Alert {
            id: "A003".into(),
            alert_type: AlertType::Request,
            title: "Stock Request Accepted".into(),
            message: "Health Plus Pharmacy accepted your request for Paracetamol (50 tablets)"
                .into(),
            timestamp: now - TimeDelta::hours(24),
            read: true,
            medicine: None,
            depletion_date: None,
            recommended_quantity: None,
        },
        Alert {
            id: "A004".into(),
            alert_type: AlertType::LowStock,
            title: "Low Stock Warning".into(),
            message: "Dextromethorphan running low - 25 bottles remaining".into(),
            timestamp: now - TimeDelta::hours(12),
            read: false,
            medicine: Some("Dextromethorphan".into()),
            depletion_date: Some(date(2025, 11, 10)),
            recommended_quantity: Some(50),
        },
    ]
}

fn line(vendor_id: &str, vendor_name: &str, quantity: u32, cost: f64) -> OrderVendorLine {
    OrderVendorLine {
        vendor_id: vendor_id.into(),
        vendor_name: vendor_name.into(),
        quantity,
        cost,
    }
}

pub fn orders() -> Vec<Order> {
    vec![
        Order {
            id: "O001".into(),
            date: date(2025, 10, 25),
            medicine: "Paracetamol".into(),
            total_quantity: 300,
            vendors: vec![line("V001", "Medico Distributors", 300, 6600.0)],
            status: OrderStatus::Delivered,
            total_cost: 6600.0,
            estimated_delivery_hrs: 2.5,
        },
        Order {
            id: "O002".into(),
            date: date(2025, 10, 28),
            medicine: "Amoxicillin".into(),
            total_quantity: 500,
            vendors: vec![
                line("V002", "PharmaNet Supplies", 300, 6000.0),
                line("V003", "HealthCare Wholesale", 200, 3600.0),
            ],
            status: OrderStatus::InTransit,
            total_cost: 9600.0,
            estimated_delivery_hrs: 4.0,
        },
        Order {
            id: "O003".into(),
            date: date(2025, 10, 20),
            medicine: "Cetirizine".into(),
            total_quantity: 200,
            vendors: vec![line("V005", "SwiftMed Logistics", 200, 5200.0)],
            status: OrderStatus::Delivered,
            total_cost: 5200.0,
            estimated_delivery_hrs: 3.0,
        },
    ]
}

#[allow(clippy::too_many_arguments)]
fn vendor(
    id: &str,
    name: &str,
    location: &str,
    lat: f64,
    lng: f64,
    distance: f64,
    cost_per_unit: f64,
    availability: u32,
    reliability: f64,
    delivery_time_hrs: f64,
    phone: &str,
) -> Vendor {
    Vendor {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        lat,
        lng,
        distance,
        cost_per_unit,
        availability,
        reliability,
        delivery_time_hrs,
        phone: phone.into(),
    }
}

#[rustfmt::skip]
pub fn vendors() -> Vec<Vendor> {
    vec![
        vendor("V001", "Medico Distributors", "Pune City", 18.5204, 73.8567, 12.5, 22.0, 500, 4.5, 2.5, "+91-9876543210"),
        vendor("V002", "PharmaNet Supplies", "Mumbai", 19.0760, 72.8777, 25.0, 20.0, 800, 4.0, 4.0, "+91-9876543211"),
        vendor("V003", "HealthCare Wholesale", "Nashik", 19.9975, 73.7898, 45.3, 18.0, 1200, 4.8, 6.0, "+91-9876543212"),
        vendor("V004", "MediSource India", "Aurangabad", 19.8762, 75.3433, 32.8, 24.0, 300, 3.8, 5.5, "+91-9876543213"),
        vendor("V005", "SwiftMed Logistics", "Satara", 17.6869, 73.9896, 18.5, 26.0, 450, 4.2, 3.0, "+91-9876543214"),
    ]
}

fn pharmacy(
    id: &str,
    name: &str,
    location: &str,
    lat: f64,
    lng: f64,
    distance: f64,
    rating: f64,
) -> Pharmacy {
    Pharmacy {
        id: id.into(),
        name: name.into(),
        location: location.into(),
        lat,
        lng,
        distance: Some(distance),
        rating,
        inventory: Vec::new(),
    }
}

#[rustfmt::skip]
pub fn pharmacies() -> Vec<Pharmacy> {
    vec![
        pharmacy("P001", "Health Plus Pharmacy", "Pune Rural", 18.5204, 73.8567, 2.5, 4.5),
        pharmacy("P002", "Care Medical Store", "Satara District", 17.6869, 73.9896, 15.3, 4.2),
        pharmacy("P003", "Wellness Pharmacy", "Kolhapur", 16.7050, 74.2433, 8.7, 4.8),
        pharmacy("P004", "Community Health Store", "Sangli", 16.8524, 74.5815, 12.1, 4.3),
    ]
}
