pub mod adapters;
pub mod configuration;
pub mod core;
pub mod error;
pub mod order_request;
pub mod utils;
