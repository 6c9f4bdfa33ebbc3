use super::api;
use super::model::{prepare_submission, CONTINUE_EVENT};
use crate::layout::controller::location::Location;
use crate::layout::global_context::AppGlobalContext;
use contracts::usecases::u502_store_details::{
    GeneralSettings, ProfileItems, ProfileItemsUpdate, StoreDetailsValues,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::BTreeMap;

pub const SAVE_ERROR: &str = "There was a problem saving your store details.";

/// Шаг мастера «Store details»: форма адреса, подтверждение и сохранение
#[derive(Clone, Copy)]
pub struct StoreDetailsViewModel {
    pub address_line1: RwSignal<String>,
    pub address_line2: RwSignal<String>,
    pub city: RwSignal<String>,
    pub country_state: RwSignal<String>,
    pub post_code: RwSignal<String>,
    pub is_client: RwSignal<bool>,

    pub settings: RwSignal<GeneralSettings>,
    pub profile: RwSignal<ProfileItems>,
    pub loaded: RwSignal<bool>,
    pub validation_errors: RwSignal<BTreeMap<&'static str, &'static str>>,
    pub show_usage_modal: RwSignal<bool>,
    pub skipping: RwSignal<bool>,
    pub saving: RwSignal<bool>,
    pub error: RwSignal<Option<String>>,
}

impl StoreDetailsViewModel {
    pub fn new() -> Self {
        Self {
            address_line1: RwSignal::new(String::new()),
            address_line2: RwSignal::new(String::new()),
            city: RwSignal::new(String::new()),
            country_state: RwSignal::new(String::new()),
            post_code: RwSignal::new(String::new()),
            is_client: RwSignal::new(false),
            settings: RwSignal::new(GeneralSettings::default()),
            profile: RwSignal::new(ProfileItems::default()),
            loaded: RwSignal::new(false),
            validation_errors: RwSignal::new(BTreeMap::new()),
            show_usage_modal: RwSignal::new(false),
            skipping: RwSignal::new(false),
            saving: RwSignal::new(false),
            error: RwSignal::new(None),
        }
    }

    fn set_values(&self, values: StoreDetailsValues) {
        self.address_line1.set(values.address_line1);
        self.address_line2.set(values.address_line2);
        self.city.set(values.city);
        self.country_state.set(values.country_state);
        self.post_code.set(values.post_code);
        self.is_client.set(values.is_client);
    }

    pub fn values(&self) -> StoreDetailsValues {
        StoreDetailsValues {
            address_line1: self.address_line1.get_untracked(),
            address_line2: self.address_line2.get_untracked(),
            city: self.city.get_untracked(),
            country_state: self.country_state.get_untracked(),
            post_code: self.post_code.get_untracked(),
            is_client: self.is_client.get_untracked(),
        }
    }

    /// Загрузить настройки и профиль, заполнить форму
    pub fn load(&self) {
        let this = *self;
        spawn_local(async move {
            let settings = match api::get_general_settings().await {
                Ok(settings) => settings,
                Err(e) => {
                    log::error!("failed to load general settings: {}", e);
                    GeneralSettings::default()
                }
            };
            let profile = match api::get_profile_items().await {
                Ok(profile) => profile,
                Err(e) => {
                    log::error!("failed to load profile items: {}", e);
                    ProfileItems::default()
                }
            };
            this.set_values(StoreDetailsValues::initial(&settings, profile.setup_client));
            this.settings.set(settings);
            this.profile.set(profile);
            this.loaded.set(true);
        });
    }

    /// Отправка формы: проверка и окно подтверждения
    pub fn submit(&self) {
        let errors = self.values().validate();
        let valid = errors.is_empty();
        self.validation_errors.set(errors);
        if valid {
            self.skipping.set(false);
            self.show_usage_modal.set(true);
        }
    }

    pub fn request_skip(&self) {
        self.skipping.set(true);
        self.show_usage_modal.set(true);
    }

    pub fn close_modal(&self) {
        self.show_usage_modal.set(false);
        self.skipping.set(false);
    }

    /// Подтверждение в окне: пропуск мастера или сохранение шага
    pub fn confirm(&self, ctx: AppGlobalContext) {
        self.show_usage_modal.set(false);
        if self.skipping.get_untracked() {
            self.skip_profiler();
        } else {
            self.continue_command(ctx);
        }
    }

    pub fn continue_command(&self, ctx: AppGlobalContext) {
        let submission = match prepare_submission(
            &self.values(),
            &self.settings.get_untracked(),
            &self.profile.get_untracked(),
        ) {
            Ok(submission) => submission,
            Err(errors) => {
                self.validation_errors.set(errors);
                return;
            }
        };

        log::info!(
            "{}: {}",
            CONTINUE_EVENT,
            serde_json::to_string(&submission.event).unwrap_or_default()
        );

        let this = *self;
        this.saving.set(true);
        this.error.set(None);
        spawn_local(async move {
            let settings_result = api::save_general_settings(&submission.settings).await;
            let profile_result = api::update_profile_items(&submission.profile).await;
            this.saving.set(false);

            match (settings_result, profile_result) {
                (Ok(settings), Ok(profile)) => {
                    this.settings.set(settings);
                    this.profile.set(profile);
                    ctx.navigate(&Location::default());
                }
                (settings, profile) => {
                    if let Err(e) = settings {
                        log::error!("failed to save general settings: {}", e);
                    }
                    if let Err(e) = profile {
                        log::error!("failed to update profile items: {}", e);
                    }
                    this.error.set(Some(SAVE_ERROR.to_string()));
                }
            }
        });
    }

    pub fn skip_profiler(&self) {
        let this = *self;
        spawn_local(async move {
            match api::update_profile_items(&ProfileItemsUpdate::skipped()).await {
                Ok(profile) => {
                    log::info!("store profiler skipped");
                    this.profile.set(profile);
                }
                Err(e) => {
                    log::error!("failed to skip store profiler: {}", e);
                    this.error.set(Some(e));
                }
            }
            this.skipping.set(false);
        });
    }
}

impl Default for StoreDetailsViewModel {
    fn default() -> Self {
        Self::new()
    }
}
