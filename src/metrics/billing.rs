use super::round_to;

/// Sales tax applied to every bill.
pub const TAX_RATE: f64 = 0.05;

/// Currency values are kept at 2 decimal places.
pub fn round_currency(value: f64) -> f64 {
    round_to(value, 2)
}

pub fn line_total(quantity: u32, price_per_unit: f64) -> f64 {
    round_currency(f64::from(quantity) * price_per_unit)
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BillTotals {
    pub subtotal: f64,
    pub tax: f64,
    pub total_amount: f64,
}

/// Totals for `(quantity, price_per_unit)` lines.
pub fn bill_totals(lines: impl IntoIterator<Item = (u32, f64)>) -> BillTotals {
    let subtotal = round_currency(
        lines
            .into_iter()
            .map(|(quantity, price)| line_total(quantity, price))
            .sum(),
    );
    let tax = round_currency(subtotal * TAX_RATE);
    BillTotals {
        subtotal,
        tax,
        total_amount: round_currency(subtotal + tax),
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct OrderTotals {
    pub total_quantity: u32,
    pub total_cost: f64,
    pub estimated_delivery_hrs: f64,
}

/// Totals for `(quantity, cost, delivery_hrs)` vendor lines. Delivery is the mean
/// over vendors, to one decimal.
pub fn order_totals(lines: &[(u32, f64, f64)]) -> OrderTotals {
    let total_quantity = lines.iter().map(|(quantity, _, _)| quantity).sum();
    let total_cost = round_currency(lines.iter().map(|(_, cost, _)| cost).sum());
    let estimated_delivery_hrs = if lines.is_empty() {
        0.0
    } else {
        let hours: f64 = lines.iter().map(|(_, _, hrs)| hrs).sum();
        round_to(hours / lines.len() as f64, 1)
    };
    OrderTotals {
        total_quantity,
        total_cost,
        estimated_delivery_hrs,
    }
}
