use serde::{Deserialize, Serialize};

/// Флаги функциональности, которые хост публикует в `window.wcAdminFeatures`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdminFeatures {
    pub devdocs: bool,
    #[serde(rename = "analytics-dashboard")]
    pub analytics_dashboard: bool,
    pub analytics: bool,
    pub onboarding: bool,
}

impl AdminFeatures {
    /// Все разделы включены (удобно для разработки и тестов)
    pub fn all() -> Self {
        Self {
            devdocs: true,
            analytics_dashboard: true,
            analytics: true,
            onboarding: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_flags_default_to_false() {
        let features: AdminFeatures =
            serde_json::from_str(r#"{"analytics": true, "analytics-dashboard": true}"#).unwrap();
        assert!(features.analytics);
        assert!(features.analytics_dashboard);
        assert!(!features.devdocs);
        assert!(!features.onboarding);
    }
}
