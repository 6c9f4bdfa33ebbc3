use crate::shared::api_utils::{get_json, post_json};
use contracts::usecases::u502_store_details::{GeneralSettings, ProfileItems, ProfileItemsUpdate};

const GENERAL_SETTINGS_PATH: &str = "/wc-admin/settings/general";
const PROFILE_ITEMS_PATH: &str = "/wc-admin/onboarding/profile";

pub async fn get_general_settings() -> Result<GeneralSettings, String> {
    get_json(GENERAL_SETTINGS_PATH).await
}

/// Сохранить группу настроек `general` целиком
pub async fn save_general_settings(settings: &GeneralSettings) -> Result<GeneralSettings, String> {
    post_json(GENERAL_SETTINGS_PATH, Some(settings)).await
}

pub async fn get_profile_items() -> Result<ProfileItems, String> {
    get_json(PROFILE_ITEMS_PATH).await
}

pub async fn update_profile_items(update: &ProfileItemsUpdate) -> Result<ProfileItems, String> {
    post_json(PROFILE_ITEMS_PATH, Some(update)).await
}
