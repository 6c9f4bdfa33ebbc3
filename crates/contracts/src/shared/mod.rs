pub mod currency;
pub mod features;
