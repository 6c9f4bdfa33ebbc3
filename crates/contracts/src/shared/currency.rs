//! Справочник валют по регионам
//!
//! Регион получается из значения `country:state` настройки магазина:
//! страны еврозоны сворачиваются в `EU`, остальные используют код страны.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Положение символа валюты относительно суммы
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SymbolPosition {
    Left,
    Right,
    LeftSpace,
    RightSpace,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CurrencyData {
    pub code: String,
    pub symbol: String,
    pub symbol_position: SymbolPosition,
    pub thousand_separator: String,
    pub decimal_separator: String,
    pub precision: u8,
}

const EURO_COUNTRIES: &[&str] = &[
    "AT", "BE", "CY", "DE", "EE", "ES", "FI", "FR", "GR", "IE", "IT", "LT", "LU", "LV", "MT",
    "NL", "PT", "SI", "SK",
];

fn currency(
    code: &str,
    symbol: &str,
    symbol_position: SymbolPosition,
    thousand_separator: &str,
    decimal_separator: &str,
    precision: u8,
) -> CurrencyData {
    CurrencyData {
        code: code.to_string(),
        symbol: symbol.to_string(),
        symbol_position,
        thousand_separator: thousand_separator.to_string(),
        decimal_separator: decimal_separator.to_string(),
        precision,
    }
}

static CURRENCIES: Lazy<HashMap<&'static str, CurrencyData>> = Lazy::new(|| {
    use SymbolPosition::*;
    HashMap::from([
        ("US", currency("USD", "$", Left, ",", ".", 2)),
        ("EU", currency("EUR", "€", Left, ".", ",", 2)),
        ("GB", currency("GBP", "£", Left, ",", ".", 2)),
        ("CA", currency("CAD", "$", Left, ",", ".", 2)),
        ("AU", currency("AUD", "$", Left, ",", ".", 2)),
        ("NZ", currency("NZD", "$", Left, ",", ".", 2)),
        ("IN", currency("INR", "₹", Left, ",", ".", 2)),
        ("JP", currency("JPY", "¥", Left, ",", ".", 0)),
        ("BR", currency("BRL", "R$", LeftSpace, ".", ",", 2)),
        ("MX", currency("MXN", "$", Left, ",", ".", 2)),
        ("ZA", currency("ZAR", "R", Left, ",", ".", 2)),
        ("CH", currency("CHF", "CHF", LeftSpace, "'", ".", 2)),
        ("SE", currency("SEK", "kr", RightSpace, " ", ",", 2)),
        ("NO", currency("NOK", "kr", LeftSpace, " ", ",", 2)),
        ("DK", currency("DKK", "kr.", LeftSpace, ".", ",", 2)),
        ("PL", currency("PLN", "zł", RightSpace, " ", ",", 2)),
    ])
});

/// Код страны из `US:CA` -> `US`
pub fn country_code(country_state: &str) -> &str {
    country_state.split(':').next().unwrap_or_default()
}

/// Регион валюты для `country:state`
pub fn currency_region(country_state: &str) -> String {
    let country = country_code(country_state);
    if EURO_COUNTRIES.contains(&country) {
        "EU".to_string()
    } else {
        country.to_string()
    }
}

/// Настройки валюты для региона, для неизвестных регионов используется доллар США
pub fn currency_for_region(region: &str) -> CurrencyData {
    CURRENCIES
        .get(region)
        .or_else(|| CURRENCIES.get("US"))
        .cloned()
        .unwrap_or_else(|| currency("USD", "$", SymbolPosition::Left, ",", ".", 2))
}

/// Валюта для выбранной страны; `None`, если страна ещё не выбрана
pub fn derive_currency_settings(country_state: &str) -> Option<CurrencyData> {
    if country_state.is_empty() {
        return None;
    }
    Some(currency_for_region(&currency_region(country_state)))
}
