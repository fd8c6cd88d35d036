pub mod alerts;
pub mod bills;
pub mod forecast;
pub mod inventory;
pub mod network;
pub mod orders;
pub mod settings;
