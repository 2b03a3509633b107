pub mod client;
pub mod inventory_service;
