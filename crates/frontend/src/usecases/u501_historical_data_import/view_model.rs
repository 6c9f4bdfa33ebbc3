use super::api;
use super::engine::{
    evaluate, EvaluateInput, Evaluation, ImportEffect, ImportRequirement, PollerCommand,
};
use super::store::ImportDataStore;
use crate::shared::date_utils::parse_input_date;
use chrono::Utc;
use contracts::usecases::u501_historical_data_import::{
    format_params, ImportActionResponse, ImportParams, ImportPeriod,
};
use gloo_timers::callback::Interval;
use leptos::prelude::*;
use leptos::task::spawn_local;

/// Период опроса статуса во время импорта
pub const STATUS_CHECK_INTERVAL_MS: u32 = 3_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

/// Состояние панели импорта и команды. Движок получает его через [`EvaluateInput`].
#[derive(Clone, Copy)]
pub struct HistoricalDataViewModel {
    pub store: ImportDataStore,
    pub active_import: RwSignal<bool>,
    pub in_progress: RwSignal<bool>,
    pub last_import_start_timestamp: RwSignal<Option<i64>>,
    pub period_value: RwSignal<String>,
    pub custom_date: RwSignal<String>,
    pub skip_checked: RwSignal<bool>,
    pub notice: RwSignal<Option<Notice>>,
    default_requirement: ImportRequirement,
    poller: StoredValue<Option<Interval>, LocalStorage>,
}

impl HistoricalDataViewModel {
    pub fn new(default_requirement: ImportRequirement) -> Self {
        let today = Utc::now().date_naive();
        Self {
            store: ImportDataStore::new(),
            active_import: RwSignal::new(false),
            in_progress: RwSignal::new(false),
            last_import_start_timestamp: RwSignal::new(None),
            period_value: RwSignal::new(ImportPeriod::All.value()),
            custom_date: RwSignal::new(today.format("%Y-%m-%d").to_string()),
            skip_checked: RwSignal::new(true),
            notice: RwSignal::new(None),
            default_requirement,
            poller: StoredValue::new_local(None),
        }
    }

    pub fn period(&self) -> ImportPeriod {
        let today = Utc::now().date_naive();
        let custom = parse_input_date(&self.custom_date.get()).unwrap_or(today);
        ImportPeriod::from_value(&self.period_value.get(), custom)
    }

    pub fn params(&self) -> ImportParams {
        format_params(&self.period(), self.skip_checked.get(), Utc::now().date_naive())
    }

    pub fn input(&self) -> EvaluateInput {
        EvaluateInput {
            last_import_start_timestamp: self.last_import_start_timestamp.get(),
            in_progress: self.in_progress.get(),
            active_import: self.active_import.get(),
            params: self.params(),
            default_requirement: self.default_requirement,
        }
    }

    pub fn evaluate(&self) -> Evaluation {
        evaluate(&self.store, &self.input())
    }

    /// Запросить у хранилища устаревшие данные для текущего состояния
    pub fn refresh(&self) {
        let input = self.input();
        let requirement = if input.in_progress {
            ImportRequirement::IN_PROGRESS
        } else {
            input.default_requirement
        };
        self.store.ensure_totals(
            input.params,
            input.last_import_start_timestamp,
            self.default_requirement,
        );
        self.store
            .ensure_status(requirement, input.last_import_start_timestamp);
    }

    /// Выполнить эффекты, которые вернул движок. Опрос останавливается,
    /// как только проход перестаёт его запрашивать.
    pub fn run_effects(&self, effects: &[ImportEffect]) {
        for effect in effects {
            log::debug!("historical data effect: {:?}", effect);
        }
        if effects.contains(&ImportEffect::ImportFinished) {
            log::info!("historical data import complete");
        }
        let mut state = untrack(|| self.input());
        let poller = state.apply_effects(effects, js_sys::Date::now() as i64);
        self.store_state(&state);
        match poller {
            PollerCommand::Run => self.start_status_check_interval(),
            PollerCommand::Stop => self.stop_status_check_interval(),
        }
    }

    /// Записать в сигналы только изменившиеся поля
    fn store_state(&self, state: &EvaluateInput) {
        if self.active_import.get_untracked() != state.active_import {
            self.active_import.set(state.active_import);
        }
        if self.in_progress.get_untracked() != state.in_progress {
            self.in_progress.set(state.in_progress);
        }
        if self.last_import_start_timestamp.get_untracked() != state.last_import_start_timestamp {
            self.last_import_start_timestamp
                .set(state.last_import_start_timestamp);
        }
    }

    pub fn start_status_check_interval(&self) {
        if self.poller.with_value(|p| p.is_some()) {
            return;
        }
        let vm = *self;
        let interval = Interval::new(STATUS_CHECK_INTERVAL_MS, move || vm.poll());
        self.poller.set_value(Some(interval));
    }

    pub fn stop_status_check_interval(&self) {
        // Drop отменяет интервал
        self.poller.set_value(None);
    }

    fn poll(&self) {
        self.store.expire_statuses();
        self.refresh();
    }

    pub fn start_import(&self) {
        let mut state = untrack(|| self.input());
        state.record_started(js_sys::Date::now() as i64);
        self.store_state(&state);
        let params = state.params;
        let vm = *self;
        spawn_local(async move {
            let result = api::start_import(&params).await;
            vm.handle_action(result, "There was a problem rebuilding your report data.");
        });
    }

    pub fn stop_import(&self) {
        self.stop_status_check_interval();
        self.in_progress.set(false);
        let vm = *self;
        spawn_local(async move {
            let result = api::cancel_import().await;
            vm.handle_action(result, "There was a problem stopping your current import.");
        });
    }

    pub fn delete_previous_data(&self) {
        self.active_import.set(false);
        let vm = *self;
        spawn_local(async move {
            let result = api::delete_previous_data().await;
            vm.handle_action(result, "There was a problem deleting your previous data.");
            vm.store.expire_all();
            vm.refresh();
        });
    }

    pub fn reimport_data(&self) {
        self.active_import.set(false);
    }

    fn handle_action(&self, result: Result<ImportActionResponse, String>, error_message: &str) {
        match result {
            Ok(response) if response.is_success() => {
                self.notice.set(Some(Notice {
                    kind: NoticeKind::Success,
                    message: response.message,
                }));
            }
            Ok(response) => {
                log::warn!("import action rejected: {:?}", response);
                self.fail(error_message.to_string());
            }
            Err(e) => {
                log::warn!("import action failed: {}", e);
                self.fail(e);
            }
        }
    }

    fn fail(&self, message: String) {
        self.notice.set(Some(Notice {
            kind: NoticeKind::Error,
            message,
        }));
        self.active_import.set(false);
        self.in_progress.set(false);
    }
}
