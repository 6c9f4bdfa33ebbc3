pub mod profile;
pub mod settings;

pub use profile::{Industry, ProfileItems, ProfileItemsUpdate, CBD_INDUSTRY_SLUG};
pub use settings::{GeneralSettings, StoreDetailsValues};

use crate::usecases::common::UseCaseMetadata;

pub struct StoreDetails;

impl UseCaseMetadata for StoreDetails {
    fn usecase_index() -> &'static str {
        "u502"
    }

    fn usecase_name() -> &'static str {
        "store_details"
    }

    fn display_name() -> &'static str {
        "Welcome to WooCommerce"
    }

    fn description() -> &'static str {
        "Tell us about your store and we'll get you set up in no time"
    }
}
