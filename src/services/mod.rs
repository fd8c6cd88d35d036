pub mod alert_service;
pub mod bill_service;
pub mod forecast_service;
pub mod inventory_service;
pub mod network_service;
pub mod order_service;
pub mod settings_service;
