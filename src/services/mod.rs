pub mod aggregator;
pub mod store_api;
