use std::collections::HashSet;

use crate::{
    dto::orders::{OrderList, PlaceOrderRequest, VendorList},
    error::{AppError, AppResult},
    metrics::{billing::line_total, order_totals, rank_vendors},
    models::{Order, OrderStatus, OrderVendorLine, Vendor},
    response::{ApiResponse, Meta},
    routes::params::OrderListQuery,
    seed,
    state::AppState,
};

/// Vendors best-first by score.
pub async fn list_vendors(_state: &AppState) -> AppResult<ApiResponse<VendorList>> {
    let items = rank_vendors(seed::vendors());
    let meta = Meta::total(items.len());
    Ok(ApiResponse::success("Vendors", VendorList { items }, Some(meta)))
}

pub async fn list_orders(
    state: &AppState,
    query: OrderListQuery,
) -> AppResult<ApiResponse<OrderList>> {
    let mut orders = state.store.orders().await?;
    if let Some(status) = query.status {
        orders.retain(|o| o.status == status);
    }

    let (items, meta) = query.pagination().apply(orders);
    Ok(ApiResponse::success("Orders", OrderList { items }, Some(meta)))
}

pub async fn get_order(state: &AppState, id: &str) -> AppResult<ApiResponse<Order>> {
    let order = state
        .store
        .orders()
        .await?
        .into_iter()
        .find(|o| o.id == id);
    let order = match order {
        Some(o) => o,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("OK", order, Some(Meta::empty())))
}

fn next_order_id(orders: &[Order]) -> String {
    let mut seq = orders.len() + 1;
    loop {
        let candidate = format!("O{seq:03}");
        if !orders.iter().any(|o| o.id == candidate) {
            return candidate;
        }
        seq += 1;
    }
}

/// Resolves allocations against the vendor catalogue. Zero-quantity
/// allocations are dropped before validation.
fn build_vendor_lines(
    payload: &PlaceOrderRequest,
    vendors: &[Vendor],
) -> AppResult<Vec<(OrderVendorLine, f64)>> {
    let mut seen = HashSet::new();
    let mut lines = Vec::new();
    for allocation in payload.allocations.iter().filter(|a| a.quantity > 0) {
        if !seen.insert(allocation.vendor_id.as_str()) {
            return Err(AppError::BadRequest(format!(
                "vendor {} allocated more than once",
                allocation.vendor_id
            )));
        }
        let vendor = match vendors.iter().find(|v| v.id == allocation.vendor_id) {
            Some(v) => v,
            None => {
                return Err(AppError::BadRequest(format!(
                    "unknown vendor {}",
                    allocation.vendor_id
                )));
            }
        };
        let line = OrderVendorLine {
            vendor_id: vendor.id.clone(),
            vendor_name: vendor.name.clone(),
            quantity: allocation.quantity,
            cost: line_total(allocation.quantity, vendor.cost_per_unit),
        };
        lines.push((line, vendor.delivery_time_hrs));
    }

    if lines.is_empty() {
        return Err(AppError::BadRequest(
            "at least one vendor allocation with a positive quantity is required".into(),
        ));
    }
    Ok(lines)
}

/// Places a multi-vendor order. New orders start Pending and go to the front of the list.
pub async fn place_order(
    state: &AppState,
    payload: PlaceOrderRequest,
) -> AppResult<ApiResponse<Order>> {
    let medicine = payload.medicine.trim().to_string();
    if medicine.is_empty() {
        return Err(AppError::BadRequest("medicine is required".into()));
    }

    let lines = build_vendor_lines(&payload, &seed::vendors())?;
    let totals = order_totals(
        &lines
            .iter()
            .map(|(line, hrs)| (line.quantity, line.cost, *hrs))
            .collect::<Vec<_>>(),
    );
    let vendors: Vec<OrderVendorLine> = lines.into_iter().map(|(line, _)| line).collect();
    let date = state.today();

    let order = state
        .store
        .update_orders(move |orders| {
            let order = Order {
                id: next_order_id(orders),
                date,
                medicine,
                total_quantity: totals.total_quantity,
                vendors,
                status: OrderStatus::Pending,
                total_cost: totals.total_cost,
                estimated_delivery_hrs: totals.estimated_delivery_hrs,
            };
            orders.insert(0, order.clone());
            Ok(order)
        })
        .await?;

    tracing::info!(
        order_id = %order.id,
        medicine = %order.medicine,
        total_quantity = order.total_quantity,
        total_cost = order.total_cost,
        "order placed"
    );
    Ok(ApiResponse::success(
        "Order placed",
        order,
        Some(Meta::empty()),
    ))
}
