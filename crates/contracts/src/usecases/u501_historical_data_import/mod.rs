pub mod request;
pub mod response;
pub mod status;

pub use request::{format_params, ImportParams, ImportPeriod};
pub use response::ImportActionResponse;
pub use status::{ImportStatusResponse, ImportTotalsResponse, ResourceProgress};

use crate::usecases::common::UseCaseMetadata;

pub struct HistoricalDataImport;

impl UseCaseMetadata for HistoricalDataImport {
    fn usecase_index() -> &'static str {
        "u501"
    }

    fn usecase_name() -> &'static str {
        "historical_data_import"
    }

    fn display_name() -> &'static str {
        "Import Historical Data"
    }

    fn description() -> &'static str {
        "This tool populates historical analytics data by processing customers \
         and orders created prior to activating WooCommerce Admin."
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_full_name() {
        assert_eq!(HistoricalDataImport::full_name(), "u501_historical_data_import");
    }
}
