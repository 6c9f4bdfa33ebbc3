//! Хранилище данных импорта
//!
//! [`ImportCache`]: кэш ответов по ключу запроса с учётом свежести и таймаута.
//! [`ImportDataStore`] оборачивает кэш в сигнал и сам загружает устаревшие
//! записи через REST API. Движок видит только уже загруженные значения.

use super::api;
use super::engine::{ImportQueryKey, ImportRequirement, ImportStore};
use contracts::usecases::u501_historical_data_import::{
    ImportParams, ImportStatusResponse, ImportTotalsResponse,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use std::collections::HashMap;

/// Состояние одного запроса. Время: миллисекунды `Date.now()`.
#[derive(Debug, Clone, PartialEq)]
pub struct QueryState<T> {
    pub data: Option<T>,
    pub error: Option<String>,
    /// Время отправки запроса, который ещё не вернулся
    pub in_flight_since: Option<f64>,
    pub received_at: Option<f64>,
}

impl<T> Default for QueryState<T> {
    fn default() -> Self {
        Self {
            data: None,
            error: None,
            in_flight_since: None,
            received_at: None,
        }
    }
}

impl<T> QueryState<T> {
    pub fn is_resolving(&self) -> bool {
        self.in_flight_since.is_some()
    }

    /// Нужно ли запросить данные заново.
    /// Запрос, висящий дольше `timeout`, считается потерянным.
    pub fn needs_fetch(&self, now: f64, requirement: &ImportRequirement) -> bool {
        if let Some(requested) = self.in_flight_since {
            return now - requested >= requirement.timeout.as_millis() as f64;
        }
        match self.received_at {
            Some(received) => now - received >= requirement.freshness.as_millis() as f64,
            None => true,
        }
    }

    fn complete(&mut self, result: Result<T, String>, now: f64) {
        match result {
            Ok(data) => {
                self.data = Some(data);
                self.error = None;
            }
            Err(e) => self.error = Some(e),
        }
        self.in_flight_since = None;
        self.received_at = Some(now);
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ImportCache {
    statuses: HashMap<ImportQueryKey, QueryState<ImportStatusResponse>>,
    totals: HashMap<ImportQueryKey, QueryState<ImportTotalsResponse>>,
}

impl ImportCache {
    /// Устарел ли запрос по ключу (отсутствующий считается устаревшим)
    pub fn needs_fetch(
        &self,
        key: &ImportQueryKey,
        requirement: &ImportRequirement,
        now: f64,
    ) -> bool {
        match key {
            ImportQueryKey::Status { .. } => self
                .statuses
                .get(key)
                .map_or(true, |s| s.needs_fetch(now, requirement)),
            ImportQueryKey::Totals { .. } => self
                .totals
                .get(key)
                .map_or(true, |s| s.needs_fetch(now, requirement)),
        }
    }

    /// Пометить запрос отправленным, если он устарел. Возвращает `true`, если нужно грузить.
    pub fn begin_fetch(
        &mut self,
        key: &ImportQueryKey,
        requirement: &ImportRequirement,
        now: f64,
    ) -> bool {
        if !self.needs_fetch(key, requirement, now) {
            return false;
        }
        match key {
            ImportQueryKey::Status { .. } => {
                self.statuses.entry(key.clone()).or_default().in_flight_since = Some(now);
            }
            ImportQueryKey::Totals { .. } => {
                self.totals.entry(key.clone()).or_default().in_flight_since = Some(now);
            }
        }
        true
    }

    pub fn complete_status(
        &mut self,
        key: &ImportQueryKey,
        result: Result<ImportStatusResponse, String>,
        now: f64,
    ) {
        self.statuses.entry(key.clone()).or_default().complete(result, now);
    }

    pub fn complete_totals(
        &mut self,
        key: &ImportQueryKey,
        result: Result<ImportTotalsResponse, String>,
        now: f64,
    ) {
        self.totals.entry(key.clone()).or_default().complete(result, now);
    }

    /// Сбросить свежесть статусов: следующий `begin_fetch` загрузит их заново
    pub fn expire_statuses(&mut self) {
        for state in self.statuses.values_mut() {
            if !state.is_resolving() {
                state.received_at = None;
            }
        }
    }

    pub fn expire_all(&mut self) {
        self.expire_statuses();
        for state in self.totals.values_mut() {
            if !state.is_resolving() {
                state.received_at = None;
            }
        }
    }
}

impl ImportStore for ImportCache {
    fn import_totals(&self, params: &ImportParams, timestamp: Option<i64>) -> ImportTotalsResponse {
        let key = ImportQueryKey::Totals {
            params: params.clone(),
            timestamp,
        };
        self.totals
            .get(&key)
            .and_then(|state| state.data.clone())
            .unwrap_or_default()
    }

    fn import_status(
        &self,
        requirement: &ImportRequirement,
        timestamp: Option<i64>,
    ) -> ImportStatusResponse {
        let key = ImportQueryKey::Status {
            requirement: *requirement,
            timestamp,
        };
        self.statuses
            .get(&key)
            .and_then(|state| state.data.clone())
            .unwrap_or_default()
    }

    fn import_error(&self, key: &ImportQueryKey) -> Option<String> {
        match key {
            ImportQueryKey::Status { .. } => self.statuses.get(key).and_then(|s| s.error.clone()),
            ImportQueryKey::Totals { .. } => self.totals.get(key).and_then(|s| s.error.clone()),
        }
    }

    fn is_resolving(&self, key: &ImportQueryKey) -> bool {
        match key {
            ImportQueryKey::Status { .. } => {
                self.statuses.get(key).is_some_and(|s| s.is_resolving())
            }
            ImportQueryKey::Totals { .. } => self.totals.get(key).is_some_and(|s| s.is_resolving()),
        }
    }
}

fn now_ms() -> f64 {
    js_sys::Date::now()
}

/// Реактивная обёртка над кэшем
#[derive(Clone, Copy)]
pub struct ImportDataStore {
    cache: RwSignal<ImportCache>,
}

impl ImportDataStore {
    pub fn new() -> Self {
        Self {
            cache: RwSignal::new(ImportCache::default()),
        }
    }

    /// Загрузить статус, если он устарел
    pub fn ensure_status(&self, requirement: ImportRequirement, timestamp: Option<i64>) {
        let key = ImportQueryKey::Status {
            requirement,
            timestamp,
        };
        let now = now_ms();
        if !self.begin(&key, &requirement, now) {
            return;
        }
        let cache = self.cache;
        spawn_local(async move {
            let result = api::get_import_status().await;
            if let Err(e) = &result {
                log::warn!("import status fetch failed: {}", e);
            }
            cache.update(|c| c.complete_status(&key, result, now_ms()));
        });
    }

    /// Загрузить totals для параметров, если они устарели
    pub fn ensure_totals(
        &self,
        params: ImportParams,
        timestamp: Option<i64>,
        requirement: ImportRequirement,
    ) {
        let key = ImportQueryKey::Totals {
            params: params.clone(),
            timestamp,
        };
        let now = now_ms();
        if !self.begin(&key, &requirement, now) {
            return;
        }
        let cache = self.cache;
        spawn_local(async move {
            let result = api::get_import_totals(&params).await;
            if let Err(e) = &result {
                log::warn!("import totals fetch failed: {}", e);
            }
            cache.update(|c| c.complete_totals(&key, result, now_ms()));
        });
    }

    fn begin(&self, key: &ImportQueryKey, requirement: &ImportRequirement, now: f64) -> bool {
        let needs_fetch = self
            .cache
            .with_untracked(|c| c.needs_fetch(key, requirement, now));
        if needs_fetch {
            self.cache.update(|c| {
                c.begin_fetch(key, requirement, now);
            });
        }
        needs_fetch
    }

    pub fn expire_statuses(&self) {
        self.cache.update(|c| c.expire_statuses());
    }

    pub fn expire_all(&self) {
        self.cache.update(|c| c.expire_all());
    }
}

impl Default for ImportDataStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ImportStore for ImportDataStore {
    fn import_totals(&self, params: &ImportParams, timestamp: Option<i64>) -> ImportTotalsResponse {
        self.cache.with(|c| c.import_totals(params, timestamp))
    }

    fn import_status(
        &self,
        requirement: &ImportRequirement,
        timestamp: Option<i64>,
    ) -> ImportStatusResponse {
        self.cache.with(|c| c.import_status(requirement, timestamp))
    }

    fn import_error(&self, key: &ImportQueryKey) -> Option<String> {
        self.cache.with(|c| c.import_error(key))
    }

    fn is_resolving(&self, key: &ImportQueryKey) -> bool {
        self.cache.with(|c| c.is_resolving(key))
    }
}
