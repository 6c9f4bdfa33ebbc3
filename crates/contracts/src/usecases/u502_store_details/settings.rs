use crate::shared::currency::CurrencyData;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Группа настроек `general` магазина.
/// Неизвестные поля сохраняются как есть и уходят обратно при записи.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct GeneralSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_store_address: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_store_address_2: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_store_city: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_default_country: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_store_postcode: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_currency: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_currency_pos: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_price_thousand_sep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_price_decimal_sep: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub woocommerce_price_num_decimals: Option<String>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Значения формы шага «Store details»
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreDetailsValues {
    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub country_state: String,
    pub post_code: String,
    pub is_client: bool,
}

fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|v| !v.is_empty())
}

impl StoreDetailsValues {
    /// Начальные значения формы.
    /// Страна берётся только если адрес уже задан, иначе WooCommerce
    /// подставил бы свою страну по умолчанию.
    pub fn initial(settings: &GeneralSettings, setup_client: Option<bool>) -> Self {
        let country_state = match (
            non_empty(&settings.woocommerce_store_address),
            non_empty(&settings.woocommerce_default_country),
        ) {
            (Some(_), Some(country)) => country.to_string(),
            _ => String::new(),
        };
        Self {
            address_line1: settings.woocommerce_store_address.clone().unwrap_or_default(),
            address_line2: settings.woocommerce_store_address_2.clone().unwrap_or_default(),
            city: settings.woocommerce_store_city.clone().unwrap_or_default(),
            country_state,
            post_code: settings.woocommerce_store_postcode.clone().unwrap_or_default(),
            is_client: setup_client.unwrap_or(false),
        }
    }

    /// Ошибки валидации по именам полей; пустая карта означает валидную форму
    pub fn validate(&self) -> BTreeMap<&'static str, &'static str> {
        let mut errors = BTreeMap::new();
        if self.address_line1.trim().is_empty() {
            errors.insert("addressLine1", "Please add an address");
        }
        if self.country_state.trim().is_empty() {
            errors.insert("countryState", "Please select a country / region");
        }
        if self.city.trim().is_empty() {
            errors.insert("city", "Please add a city");
        }
        if self.post_code.trim().is_empty() {
            errors.insert("postCode", "Please add a post code");
        }
        errors
    }

    /// Настройки для сохранения: текущие значения группы + адрес + валюта
    pub fn apply_to(&self, settings: &GeneralSettings, currency: &CurrencyData) -> GeneralSettings {
        let position = serde_json::to_value(currency.symbol_position)
            .ok()
            .and_then(|v| v.as_str().map(str::to_string));
        GeneralSettings {
            woocommerce_store_address: Some(self.address_line1.clone()),
            woocommerce_store_address_2: Some(self.address_line2.clone()),
            woocommerce_default_country: Some(self.country_state.clone()),
            woocommerce_store_city: Some(self.city.clone()),
            woocommerce_store_postcode: Some(self.post_code.clone()),
            woocommerce_currency: Some(currency.code.clone()),
            woocommerce_currency_pos: position,
            woocommerce_price_thousand_sep: Some(currency.thousand_separator.clone()),
            woocommerce_price_decimal_sep: Some(currency.decimal_separator.clone()),
            woocommerce_price_num_decimals: Some(currency.precision.to_string()),
            other: settings.other.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::currency::currency_for_region;

    #[test]
    fn test_country_ignored_without_address() {
        let settings = GeneralSettings {
            woocommerce_default_country: Some("GB".into()),
            ..Default::default()
        };
        let values = StoreDetailsValues::initial(&settings, None);
        assert_eq!(values.country_state, "");
        assert!(!values.is_client);

        let settings = GeneralSettings {
            woocommerce_store_address: Some("1 Main St".into()),
            woocommerce_default_country: Some("US:CA".into()),
            ..Default::default()
        };
        let values = StoreDetailsValues::initial(&settings, Some(true));
        assert_eq!(values.country_state, "US:CA");
        assert!(values.is_client);
    }

    #[test]
    fn test_validate_requires_address_fields() {
        let errors = StoreDetailsValues::default().validate();
        assert_eq!(errors.len(), 4);
        assert_eq!(errors.get("city"), Some(&"Please add a city"));

        let values = StoreDetailsValues {
            address_line1: "1 Main St".into(),
            city: "Austin".into(),
            country_state: "US:TX".into(),
            post_code: "73301".into(),
            ..Default::default()
        };
        assert!(values.validate().is_empty());
    }

    #[test]
    fn test_apply_keeps_unknown_settings() {
        let settings: GeneralSettings = serde_json::from_str(
            r#"{"woocommerce_store_city": "Old", "woocommerce_calc_taxes": "yes"}"#,
        )
        .unwrap();
        let values = StoreDetailsValues {
            address_line1: "Hauptstr. 1".into(),
            city: "Berlin".into(),
            country_state: "DE:BE".into(),
            post_code: "10115".into(),
            ..Default::default()
        };
        let saved = values.apply_to(&settings, &currency_for_region("EU"));
        assert_eq!(saved.woocommerce_store_city.as_deref(), Some("Berlin"));
        assert_eq!(saved.woocommerce_currency.as_deref(), Some("EUR"));
        assert_eq!(saved.woocommerce_currency_pos.as_deref(), Some("left"));
        assert_eq!(saved.woocommerce_price_num_decimals.as_deref(), Some("2"));
        assert_eq!(
            saved.other.get("woocommerce_calc_taxes"),
            Some(&Value::String("yes".into()))
        );
    }
}
