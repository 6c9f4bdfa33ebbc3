//! Вычисление состояния импорта исторических данных
//!
//! [`evaluate`] это чистая функция, она читает уже загруженные значения из
//! [`ImportStore`] и возвращает снимок, статус и список эффектов. Таймер
//! опроса и колбэки живут у вызывающей стороны, она же выполняет эффекты.

use super::status::{get_status, HistoricalStatus};
use contracts::usecases::u501_historical_data_import::{
    ImportParams, ImportStatusResponse, ImportTotalsResponse, ResourceProgress,
};
use serde::Serialize;
use std::time::Duration;

/// Политика свежести и таймаута запроса
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ImportRequirement {
    pub freshness: Duration,
    pub timeout: Duration,
}

impl ImportRequirement {
    /// Жёсткая политика на время активного импорта
    pub const IN_PROGRESS: Self = Self {
        freshness: Duration::from_secs(3),
        timeout: Duration::from_secs(3),
    };
}

/// Ключ запроса в хранилище. Метка времени старта импорта входит в ключ,
/// поэтому новый импорт всегда начинает чтение заново.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ImportQueryKey {
    Status {
        requirement: ImportRequirement,
        timestamp: Option<i64>,
    },
    Totals {
        params: ImportParams,
        timestamp: Option<i64>,
    },
}

/// Запросы к хранилищу данных импорта
pub trait ImportStore {
    fn import_totals(&self, params: &ImportParams, timestamp: Option<i64>) -> ImportTotalsResponse;

    fn import_status(
        &self,
        requirement: &ImportRequirement,
        timestamp: Option<i64>,
    ) -> ImportStatusResponse;

    fn import_error(&self, key: &ImportQueryKey) -> Option<String>;

    fn is_resolving(&self, key: &ImportQueryKey) -> bool;
}

/// Состояние, которое ведёт вызывающая сторона
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EvaluateInput {
    pub last_import_start_timestamp: Option<i64>,
    pub in_progress: bool,
    pub active_import: bool,
    pub params: ImportParams,
    pub default_requirement: ImportRequirement,
}

/// Что делать с таймером опроса после прохода
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PollerCommand {
    Run,
    Stop,
}

impl EvaluateInput {
    /// Импорт начался: метка времени не даёт `ImportStarted` сработать повторно
    pub fn record_started(&mut self, now: i64) {
        self.active_import = true;
        self.in_progress = true;
        self.last_import_start_timestamp = Some(now);
    }

    pub fn record_finished(&mut self) {
        self.in_progress = false;
    }

    /// Учесть эффекты прохода в состоянии вызывающей стороны.
    /// Опрос продолжается, только пока проход его запрашивает и импорт не завершён.
    pub fn apply_effects(&mut self, effects: &[ImportEffect], now: i64) -> PollerCommand {
        let mut poller = PollerCommand::Stop;
        for effect in effects {
            match effect {
                ImportEffect::ImportStarted => self.record_started(now),
                ImportEffect::StartStatusCheckInterval => poller = PollerCommand::Run,
                ImportEffect::ImportFinished => {
                    self.record_finished();
                    poller = PollerCommand::Stop;
                }
            }
        }
        poller
    }
}

/// Живой прогресс; есть только у отображаемого активного импорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveProgress {
    pub customers_progress: Option<u64>,
    pub orders_progress: Option<u64>,
    pub in_progress: bool,
}

/// Снимок для отображения; пересобирается при каждом вычислении
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ImportSnapshot {
    pub customers_total: Option<u64>,
    pub orders_total: Option<u64>,
    pub is_error: bool,
    #[serde(flatten)]
    pub live: Option<LiveProgress>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImportEffect {
    ImportStarted,
    StartStatusCheckInterval,
    ImportFinished,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Evaluation {
    pub snapshot: ImportSnapshot,
    pub import_date: Option<String>,
    pub status: HistoricalStatus,
    pub effects: Vec<ImportEffect>,
}

impl Evaluation {
    pub fn has_effect(&self, effect: ImportEffect) -> bool {
        self.effects.contains(&effect)
    }
}

/// Ресурс полностью обработан: imported == total > 0
fn is_drained(progress: &ResourceProgress) -> bool {
    matches!(
        (progress.imported, progress.total),
        (Some(imported), Some(total)) if imported == total && total > 0
    )
}

pub fn evaluate<S: ImportStore + ?Sized>(store: &S, input: &EvaluateInput) -> Evaluation {
    let timestamp = input.last_import_start_timestamp;
    let requirement = if input.in_progress {
        ImportRequirement::IN_PROGRESS
    } else {
        input.default_requirement
    };

    let totals = store.import_totals(&input.params, timestamp);
    let remote = store.import_status(&requirement, timestamp);
    let customers = remote.customers.unwrap_or_default();
    let orders = remote.orders.unwrap_or_default();

    let status_key = ImportQueryKey::Status {
        requirement,
        timestamp,
    };
    let totals_key = ImportQueryKey::Totals {
        params: input.params.clone(),
        timestamp,
    };
    let is_status_loading = store.is_resolving(&status_key);

    // Пока статус грузится, старые ошибки не показываем
    let is_error = !is_status_loading
        && (store.import_error(&status_key).is_some()
            || store.import_error(&totals_key).is_some());

    let is_importing = remote.is_importing;

    // Импорт запущен не отсюда (например, другим клиентом)
    let has_import_started = timestamp.is_none()
        && !is_status_loading
        && !input.in_progress
        && is_importing == Some(true);

    // Достаточно, чтобы был полностью обработан хотя бы один из ресурсов
    let has_import_finished = !is_status_loading
        && input.in_progress
        && is_importing == Some(false)
        && (is_drained(&customers) || is_drained(&orders));

    let snapshot = if input.active_import {
        ImportSnapshot {
            customers_total: customers.total.or(totals.customers),
            orders_total: orders.total.or(totals.orders),
            is_error,
            live: Some(LiveProgress {
                customers_progress: customers.imported,
                orders_progress: orders.imported,
                in_progress: input.in_progress,
            }),
        }
    } else {
        ImportSnapshot {
            customers_total: totals.customers,
            orders_total: totals.orders,
            is_error,
            live: None,
        }
    };

    let status = get_status(&snapshot);
    let activate_interval =
        (input.active_import || is_importing == Some(true)) && input.in_progress;

    let mut effects = Vec::new();
    if has_import_started {
        effects.push(ImportEffect::ImportStarted);
    }
    if activate_interval {
        effects.push(ImportEffect::StartStatusCheckInterval);
    }
    if has_import_finished {
        effects.push(ImportEffect::ImportFinished);
    }

    Evaluation {
        snapshot,
        import_date: remote.imported_from,
        status,
        effects,
    }
}
