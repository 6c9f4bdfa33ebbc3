use contracts::shared::currency::{
    country_code, currency_for_region, currency_region, derive_currency_settings,
};
use contracts::usecases::u502_store_details::{
    GeneralSettings, ProfileItems, ProfileItemsUpdate, StoreDetailsValues,
};
use serde::Serialize;
use std::collections::BTreeMap;

pub const CONTINUE_EVENT: &str = "storeprofiler_store_details_continue";

/// Свойства события продолжения мастера
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ContinueEvent {
    pub store_country: String,
    pub derived_currency: String,
    pub setup_client: bool,
}

/// Всё, что нужно отправить после шага «Store details»
#[derive(Debug, Clone, PartialEq)]
pub struct StoreDetailsSubmission {
    pub event: ContinueEvent,
    pub settings: GeneralSettings,
    pub profile: ProfileItemsUpdate,
}

/// Проверить форму и собрать изменения настроек и профиля
pub fn prepare_submission(
    values: &StoreDetailsValues,
    settings: &GeneralSettings,
    profile: &ProfileItems,
) -> Result<StoreDetailsSubmission, BTreeMap<&'static str, &'static str>> {
    let errors = values.validate();
    if !errors.is_empty() {
        return Err(errors);
    }

    let currency = derive_currency_settings(&values.country_state)
        .unwrap_or_else(|| currency_for_region("US"));
    let region = currency_region(&values.country_state);

    Ok(StoreDetailsSubmission {
        event: ContinueEvent {
            store_country: country_code(&values.country_state).to_string(),
            derived_currency: currency.code.clone(),
            setup_client: values.is_client,
        },
        settings: values.apply_to(settings, &currency),
        profile: ProfileItemsUpdate::for_store_details(values.is_client, &region, profile),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled(country_state: &str) -> StoreDetailsValues {
        StoreDetailsValues {
            address_line1: "1 Main St".into(),
            city: "Toronto".into(),
            country_state: country_state.into(),
            post_code: "M5H 2N2".into(),
            is_client: true,
            ..Default::default()
        }
    }

    #[test]
    fn test_invalid_form_is_rejected() {
        let errors = prepare_submission(
            &StoreDetailsValues::default(),
            &GeneralSettings::default(),
            &ProfileItems::default(),
        )
        .unwrap_err();
        assert!(errors.contains_key("addressLine1"));
        assert!(errors.contains_key("postCode"));
    }

    #[test]
    fn test_submission_for_canada() {
        let submission = prepare_submission(
            &filled("CA:ON"),
            &GeneralSettings::default(),
            &ProfileItems::default(),
        )
        .unwrap();
        assert_eq!(
            submission.event,
            ContinueEvent {
                store_country: "CA".into(),
                derived_currency: "CAD".into(),
                setup_client: true,
            }
        );
        assert_eq!(submission.settings.woocommerce_currency.as_deref(), Some("CAD"));
        assert_eq!(submission.settings.woocommerce_default_country.as_deref(), Some("CA:ON"));
        assert_eq!(submission.profile.setup_client, Some(true));
    }

    #[test]
    fn test_unknown_region_falls_back_to_usd() {
        let submission = prepare_submission(
            &filled("KE"),
            &GeneralSettings::default(),
            &ProfileItems::default(),
        )
        .unwrap();
        assert_eq!(submission.event.derived_currency, "USD");
    }
}
