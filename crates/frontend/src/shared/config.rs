//! Конфигурация, которую хост-страница публикует в глобальных переменных `window`
//!
//! - `window.wcAdminFeatures`: флаги разделов ([`AdminFeatures`])
//! - `window.wcAdminSettings`: настройки навигации и опроса импорта ([`AdminSettings`])
//!
//! Отсутствующие или некорректные значения заменяются значениями по умолчанию.

use crate::usecases::u501_historical_data_import::engine::ImportRequirement;
use contracts::shared::features::AdminFeatures;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use std::time::Duration;
use wasm_bindgen::JsValue;

pub const FEATURES_GLOBAL: &str = "wcAdminFeatures";
pub const SETTINGS_GLOBAL: &str = "wcAdminSettings";

/// Экраны, ссылки на которые не получают сохраняемые параметры запроса
pub const DEFAULT_EXCLUDED_SCREENS: &[&str] = &["devdocs", "stock", "settings", "customers"];

/// Параметры запроса, которые переносятся между страницами (фильтры периода)
pub const DEFAULT_PERSISTED_QUERY_PARAMS: &[&str] =
    &["period", "compare", "before", "after", "interval", "type"];

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct NavigationSettings {
    pub excluded_screens: Vec<String>,
    pub persisted_query_params: Vec<String>,
}

impl Default for NavigationSettings {
    fn default() -> Self {
        Self {
            excluded_screens: DEFAULT_EXCLUDED_SCREENS.iter().map(|s| s.to_string()).collect(),
            persisted_query_params: DEFAULT_PERSISTED_QUERY_PARAMS
                .iter()
                .map(|s| s.to_string())
                .collect(),
        }
    }
}

/// Политика свежести запроса статуса импорта вне активного импорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct ImportSettings {
    pub freshness_ms: u64,
    pub timeout_ms: u64,
}

impl Default for ImportSettings {
    fn default() -> Self {
        Self {
            freshness_ms: 30 * 60 * 1000,
            timeout_ms: 60 * 1000,
        }
    }
}

impl ImportSettings {
    pub fn requirement(&self) -> ImportRequirement {
        ImportRequirement {
            freshness: Duration::from_millis(self.freshness_ms),
            timeout: Duration::from_millis(self.timeout_ms),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct AdminSettings {
    pub navigation: NavigationSettings,
    pub import: ImportSettings,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AdminConfig {
    pub features: AdminFeatures,
    pub settings: AdminSettings,
}

impl AdminConfig {
    pub fn load() -> Self {
        let config = Self {
            features: read_global(FEATURES_GLOBAL),
            settings: read_global(SETTINGS_GLOBAL),
        };
        log::debug!("admin config loaded: {:?}", config);
        config
    }
}

/// Прочитать `window[name]` и десериализовать; при ошибке возвращает значение по умолчанию
pub fn read_global<T: DeserializeOwned + Default>(name: &str) -> T {
    let Some(window) = web_sys::window() else {
        return T::default();
    };
    let value = match js_sys::Reflect::get(&window, &JsValue::from_str(name)) {
        Ok(value) if !value.is_undefined() && !value.is_null() => value,
        _ => return T::default(),
    };
    serde_wasm_bindgen::from_value(value).unwrap_or_else(|e| {
        log::warn!("window.{} is malformed, using defaults: {}", name, e);
        T::default()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_settings_keep_defaults() {
        let settings: AdminSettings =
            serde_json::from_str(r#"{"navigation": {"excludedScreens": ["stock"]}}"#).unwrap();
        assert_eq!(settings.navigation.excluded_screens, vec!["stock".to_string()]);
        assert_eq!(
            settings.navigation.persisted_query_params,
            NavigationSettings::default().persisted_query_params
        );
        assert_eq!(settings.import, ImportSettings::default());
    }

    #[test]
    fn test_default_requirement_is_looser_than_in_progress() {
        let requirement = ImportSettings::default().requirement();
        assert_eq!(requirement.freshness, Duration::from_secs(1800));
        assert!(requirement.timeout > ImportRequirement::IN_PROGRESS.timeout);
    }
}
