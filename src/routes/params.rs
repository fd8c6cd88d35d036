use serde::Deserialize;
use utoipa::{IntoParams, ToSchema};

use crate::{models::OrderStatus, response::Meta};

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct Pagination {
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl Pagination {
    pub fn normalize(&self) -> (i64, i64, i64) {
        let page = self.page.unwrap_or(1).max(1);
        let per_page = self.per_page.unwrap_or(20).clamp(1, 100);
        let offset = page.saturating_sub(1).saturating_mul(per_page);
        (page, per_page, offset)
    }

    /// Cuts one page out of an already ordered collection.
    pub fn apply<T>(&self, items: Vec<T>) -> (Vec<T>, Meta) {
        let (page, per_page, offset) = self.normalize();
        let total = items.len() as i64;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(per_page).unwrap_or(0);
        let page_items = items.into_iter().skip(skip).take(take).collect();
        (page_items, Meta::new(page, per_page, total))
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct InventoryQuery {
    /// Case-insensitive match on name, brand or category.
    pub q: Option<String>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl InventoryQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct OrderListQuery {
    pub status: Option<OrderStatus>,
    pub page: Option<i64>,
    pub per_page: Option<i64>,
}

impl OrderListQuery {
    pub fn pagination(&self) -> Pagination {
        Pagination {
            page: self.page,
            per_page: self.per_page,
        }
    }
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AlertListQuery {
    pub unread_only: Option<bool>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct ForecastQuery {
    /// Days to forecast, 1 to 90.
    pub horizon: Option<u32>,
    /// Days of history, 1 to 365.
    pub history: Option<u32>,
}

#[derive(Debug, Default, Deserialize, ToSchema, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct NetworkQuery {
    /// Case-insensitive match on name or location.
    pub q: Option<String>,
}
