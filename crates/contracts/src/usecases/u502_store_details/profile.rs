use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

pub const CBD_INDUSTRY_SLUG: &str = "cbd-other-hemp-derived-products";

/// Отрасль в профиле: старые профили хранят строку, новые хранят объект со slug
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Industry {
    Slug(String),
    Detailed {
        slug: String,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        detail: Option<String>,
    },
}

impl Industry {
    pub fn slug(&self) -> &str {
        match self {
            Industry::Slug(slug) => slug,
            Industry::Detailed { slug, .. } => slug,
        }
    }
}

/// Профиль онбординга
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileItems {
    #[serde(default)]
    pub setup_client: Option<bool>,
    #[serde(default)]
    pub industry: Option<Vec<Industry>>,
    #[serde(default)]
    pub skipped: Option<bool>,
    #[serde(flatten)]
    pub other: Map<String, Value>,
}

/// Частичное обновление профиля
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ProfileItemsUpdate {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub setup_client: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub industry: Option<Vec<Industry>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub skipped: Option<bool>,
}

impl ProfileItemsUpdate {
    /// Обновление после шага Store details.
    /// CBD-отрасль доступна только магазинам из США, для остальных регионов она убирается.
    pub fn for_store_details(is_client: bool, region: &str, profile: &ProfileItems) -> Self {
        let industry = match &profile.industry {
            Some(industries) if region != "US" && !industries.is_empty() => Some(
                industries
                    .iter()
                    .filter(|industry| industry.slug() != CBD_INDUSTRY_SLUG)
                    .cloned()
                    .collect(),
            ),
            _ => None,
        };
        Self {
            setup_client: Some(is_client),
            industry,
            skipped: None,
        }
    }

    pub fn skipped() -> Self {
        Self {
            skipped: Some(true),
            ..Default::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile() -> ProfileItems {
        serde_json::from_str(
            r#"{"industry": ["fashion-apparel-accessories",
                             {"slug": "cbd-other-hemp-derived-products"},
                             {"slug": "food-drink", "detail": "bakery"}]}"#,
        )
        .unwrap()
    }

    #[test]
    fn test_cbd_removed_outside_us() {
        let update = ProfileItemsUpdate::for_store_details(true, "EU", &profile());
        let industry = update.industry.unwrap();
        assert_eq!(industry.len(), 2);
        assert!(industry.iter().all(|i| i.slug() != CBD_INDUSTRY_SLUG));
        assert_eq!(update.setup_client, Some(true));
    }

    #[test]
    fn test_us_profile_keeps_industries_untouched() {
        let update = ProfileItemsUpdate::for_store_details(false, "US", &profile());
        assert_eq!(update.industry, None);
        assert_eq!(
            serde_json::to_string(&update).unwrap(),
            r#"{"setup_client":false}"#
        );
    }
}
