use utoipa::{OpenApi, openapi::OpenApi as OpenApiSpec};
use utoipa_scalar::{Scalar, Servable};

use crate::{
    dto::{
        alerts::{AlertList, ScanResult},
        bills::{BillItemRequest, BillList, CreateBillRequest},
        forecast::{ForecastDriver, ForecastReport, ForecastSummary, ForecastSummaryItem, Impact},
        inventory::{
            CreateMedicineRequest, DashboardSummary, ImportSummary, StockList, StockStatus,
            UpdateMedicineRequest,
        },
        network::{PharmacyList, StockRequest, StockRequestReceipt},
        orders::{OrderList, PlaceOrderRequest, VendorAllocation, VendorList},
        settings::UpdateSettingsRequest,
    },
    metrics::RankedVendor,
    models::{
        Alert, AlertType, Bill, BillItem, Confidence, ForecastPoint, Medicine, MedicineForm,
        Order, OrderStatus, OrderVendorLine, Pharmacy, SalesPoint, Settings, Vendor,
    },
    response::{ApiResponse, Empty, Meta},
    routes::{alerts, bills, forecast, health, inventory, network, orders, settings},
    transfer::Backup,
};

#[derive(OpenApi)]
#[openapi(
    paths(
        health::health_check,
        health::readiness,
        inventory::dashboard,
        inventory::list_inventory,
        inventory::get_medicine,
        inventory::create_medicine,
        inventory::update_medicine,
        inventory::delete_medicine,
        inventory::list_low_stock,
        inventory::import_inventory,
        inventory::export_inventory,
        forecast::list_forecasts,
        forecast::get_forecast,
        alerts::list_alerts,
        alerts::accept_alert,
        alerts::dismiss_alert,
        alerts::scan_alerts,
        orders::list_vendors,
        orders::list_orders,
        orders::get_order,
        orders::place_order,
        bills::list_bills,
        bills::get_bill,
        bills::create_bill,
        network::list_pharmacies,
        network::request_stock,
        settings::get_settings,
        settings::update_settings,
        settings::export_backup,
        settings::reset_demo_data
    ),
    components(
        schemas(
            Medicine,
            MedicineForm,
            Pharmacy,
            Alert,
            AlertType,
            Vendor,
            RankedVendor,
            Order,
            OrderStatus,
            OrderVendorLine,
            Bill,
            BillItem,
            Settings,
            Confidence,
            ForecastPoint,
            SalesPoint,
            StockStatus,
            StockList,
            CreateMedicineRequest,
            UpdateMedicineRequest,
            ImportSummary,
            DashboardSummary,
            ForecastReport,
            ForecastDriver,
            Impact,
            ForecastSummaryItem,
            ForecastSummary,
            AlertList,
            ScanResult,
            VendorAllocation,
            PlaceOrderRequest,
            OrderList,
            VendorList,
            BillItemRequest,
            CreateBillRequest,
            BillList,
            PharmacyList,
            StockRequest,
            StockRequestReceipt,
            UpdateSettingsRequest,
            Backup,
            Empty,
            Meta,
            ApiResponse<StockList>,
            ApiResponse<Order>,
            ApiResponse<Bill>
        )
    ),
    tags(
        (name = "Health", description = "Liveness and readiness probes"),
        (name = "Dashboard", description = "At-a-glance pharmacy summary"),
        (name = "Inventory", description = "Medicine stock and spreadsheet transfer"),
        (name = "Forecast", description = "Sales history and demand forecast"),
        (name = "Alerts", description = "Low stock and network alerts"),
        (name = "Orders", description = "Vendor ranking and multi-vendor orders"),
        (name = "Billing", description = "Customer bills"),
        (name = "Network", description = "Partner pharmacy directory"),
        (name = "Settings", description = "Pharmacy settings, backup and demo reset"),
    )
)]
pub struct ApiDoc;

pub fn scalar_docs() -> Scalar<OpenApiSpec> {
    Scalar::with_url("/docs", ApiDoc::openapi())
}
