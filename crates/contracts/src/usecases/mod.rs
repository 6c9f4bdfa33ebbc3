pub mod common;
pub mod u501_historical_data_import;
pub mod u502_store_details;
