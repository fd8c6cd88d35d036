use serde::Serialize;
use utoipa::ToSchema;

use crate::models::Alert;

#[derive(Debug, Serialize, ToSchema)]
pub struct AlertList {
    pub unread: usize,
    pub items: Vec<Alert>,
}

#[derive(Debug, Serialize, ToSchema)]
pub struct ScanResult {
    pub created: Vec<Alert>,
}
