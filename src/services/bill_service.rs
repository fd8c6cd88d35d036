use chrono::Utc;

use crate::{
    dto::bills::{BillItemRequest, BillList, CreateBillRequest},
    error::{AppError, AppResult},
    metrics::{bill_totals, billing::line_total},
    models::{Bill, BillItem},
    response::{ApiResponse, Meta},
    routes::params::Pagination,
    state::AppState,
};

pub async fn list_bills(state: &AppState, query: Pagination) -> AppResult<ApiResponse<BillList>> {
    let bills = state.store.bills().await?;
    let (items, meta) = query.apply(bills);
    Ok(ApiResponse::success("Bills", BillList { items }, Some(meta)))
}

pub async fn get_bill(state: &AppState, id: &str) -> AppResult<ApiResponse<Bill>> {
    let bill = state
        .store
        .bills()
        .await?
        .into_iter()
        .find(|b| b.id == id);
    let bill = match bill {
        Some(b) => b,
        None => return Err(AppError::NotFound),
    };
    Ok(ApiResponse::success("OK", bill, Some(Meta::empty())))
}

fn bill_item(index: usize, item: &BillItemRequest) -> AppResult<BillItem> {
    let position = index + 1;
    let name = item.medicine_name.trim();
    if name.is_empty() {
        return Err(AppError::BadRequest(format!(
            "item {position}: medicine name is required"
        )));
    }
    let quantity = match u32::try_from(item.quantity) {
        Ok(q) if q > 0 => q,
        _ => {
            return Err(AppError::BadRequest(format!(
                "item {position}: quantity must be a positive whole number"
            )));
        }
    };
    if !item.price_per_unit.is_finite() || item.price_per_unit <= 0.0 {
        return Err(AppError::BadRequest(format!(
            "item {position}: price per unit must be positive"
        )));
    }

    Ok(BillItem {
        id: format!("item-{index}"),
        medicine_name: name.to_string(),
        quantity,
        price_per_unit: item.price_per_unit,
        total_price: line_total(quantity, item.price_per_unit),
    })
}

/// Builds a bill from the request. Any invalid line rejects the whole bill.
pub fn build_bill(payload: &CreateBillRequest) -> AppResult<Bill> {
    if payload.items.is_empty() {
        return Err(AppError::BadRequest(
            "a bill needs at least one item".into(),
        ));
    }
    let items = payload
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| bill_item(index, item))
        .collect::<AppResult<Vec<_>>>()?;
    let totals = bill_totals(items.iter().map(|i| (i.quantity, i.price_per_unit)));

    let now = Utc::now();
    let mut bill = Bill {
        id: String::new(),
        bill_number: String::new(),
        date: now,
        customer_name: payload
            .customer_name
            .as_deref()
            .map(str::trim)
            .filter(|name| !name.is_empty())
            .map(str::to_string),
        items,
        subtotal: totals.subtotal,
        tax: totals.tax,
        total_amount: totals.total_amount,
    };
    number_bill(&mut bill, now.timestamp_millis());
    Ok(bill)
}

fn number_bill(bill: &mut Bill, millis: i64) {
    bill.id = format!("bill-{millis}");
    bill.bill_number = format!("BILL-{millis}");
}

/// First free millisecond stamp at or after `millis`. Bills created within the
/// same millisecond get consecutive stamps.
fn free_bill_millis(bills: &[Bill], millis: i64) -> i64 {
    let mut candidate = millis;
    while bills.iter().any(|b| b.id == format!("bill-{candidate}")) {
        candidate += 1;
    }
    candidate
}

pub async fn create_bill(
    state: &AppState,
    payload: CreateBillRequest,
) -> AppResult<ApiResponse<Bill>> {
    let mut bill = build_bill(&payload)?;
    let stamp = bill.date.timestamp_millis();
    let bill = state
        .store
        .update_bills(move |bills| {
            let millis = free_bill_millis(bills, stamp);
            number_bill(&mut bill, millis);
            bills.insert(0, bill.clone());
            Ok(bill)
        })
        .await?;

    tracing::info!(
        bill_number = %bill.bill_number,
        items = bill.items.len(),
        total_amount = bill.total_amount,
        "bill generated"
    );
    Ok(ApiResponse::success(
        "Bill generated",
        bill,
        Some(Meta::empty()),
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(name: &str, quantity: i64, price: f64) -> BillItemRequest {
        BillItemRequest {
            medicine_name: name.into(),
            quantity,
            price_per_unit: price,
        }
    }

    #[test]
    fn bill_lines_and_totals() {
        let payload = CreateBillRequest {
            customer_name: Some("  Asha ".into()),
            items: vec![item("Paracetamol", 2, 12.5), item("ORS", 1, 30.0)],
        };
        let bill = build_bill(&payload).unwrap();
        assert_eq!(bill.items[0].id, "item-0");
        assert_eq!(bill.items[1].total_price, 30.0);
        assert_eq!(bill.subtotal, 55.0);
        assert_eq!(bill.tax, 2.75);
        assert_eq!(bill.total_amount, 57.75);
        assert_eq!(bill.customer_name.as_deref(), Some("Asha"));
        assert!(bill.bill_number.starts_with("BILL-"));
    }

    #[test]
    fn bill_numbers_skip_taken_stamps() {
        let payload = CreateBillRequest {
            customer_name: None,
            items: vec![item("ORS", 1, 30.0)],
        };
        let mut taken = Vec::new();
        for millis in [1_000, 1_001] {
            let mut bill = build_bill(&payload).unwrap();
            number_bill(&mut bill, millis);
            taken.push(bill);
        }
        assert_eq!(free_bill_millis(&taken, 1_000), 1_002);
        assert_eq!(free_bill_millis(&taken, 999), 999);
        assert_eq!(free_bill_millis(&[], 1_000), 1_000);
    }

    #[test]
    fn invalid_lines_reject_the_bill() {
        let empty = CreateBillRequest {
            customer_name: None,
            items: vec![],
        };
        assert!(build_bill(&empty).is_err());

        for bad in [item(" ", 1, 1.0), item("A", 0, 1.0), item("A", -2, 1.0), item("A", 1, 0.0)] {
            let payload = CreateBillRequest {
                customer_name: None,
                items: vec![item("Valid", 1, 5.0), bad],
            };
            assert!(build_bill(&payload).is_err());
        }
    }
}
