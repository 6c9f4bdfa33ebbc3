use super::engine::ImportSnapshot;
use crate::shared::date_utils::{format_import_date, ALL_DATA_MARKER};
use serde::Serialize;

/// Фаза активного импорта
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPhase {
    Customers,
    Orders,
    Finalizing,
}

/// Итоговый статус импорта исторических данных
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HistoricalStatus {
    Ready,
    Pending,
    InProgress(ImportPhase),
    Finished,
    Error,
}

impl HistoricalStatus {
    pub fn is_in_progress(&self) -> bool {
        matches!(self, HistoricalStatus::Pending | HistoricalStatus::InProgress(_))
    }
}

/// Классификация снимка. Ошибка важнее всего, затем активный импорт.
pub fn get_status(snapshot: &ImportSnapshot) -> HistoricalStatus {
    if snapshot.is_error {
        return HistoricalStatus::Error;
    }

    let (customers_progress, orders_progress, in_progress) = match snapshot.live {
        Some(live) => (live.customers_progress, live.orders_progress, live.in_progress),
        None => (None, None, false),
    };

    if in_progress {
        let (
            Some(customers_progress),
            Some(orders_progress),
            Some(customers_total),
            Some(orders_total),
        ) = (
            customers_progress,
            orders_progress,
            snapshot.customers_total,
            snapshot.orders_total,
        )
        else {
            return HistoricalStatus::Pending;
        };
        if customers_progress < customers_total {
            return HistoricalStatus::InProgress(ImportPhase::Customers);
        }
        if orders_progress < orders_total {
            return HistoricalStatus::InProgress(ImportPhase::Orders);
        }
        return HistoricalStatus::InProgress(ImportPhase::Finalizing);
    }

    let has_data =
        snapshot.customers_total.unwrap_or(0) > 0 || snapshot.orders_total.unwrap_or(0) > 0;
    if has_data
        && customers_progress == snapshot.customers_total
        && orders_progress == snapshot.orders_total
    {
        return HistoricalStatus::Finished;
    }

    HistoricalStatus::Ready
}

/// Текст строки статуса под формой
pub fn status_label(status: HistoricalStatus, import_date: Option<&str>) -> String {
    match status {
        HistoricalStatus::Ready => "Ready To Import".to_string(),
        HistoricalStatus::Pending => "Initializing".to_string(),
        HistoricalStatus::InProgress(ImportPhase::Customers) => "Importing Customers".to_string(),
        HistoricalStatus::InProgress(ImportPhase::Orders) => "Importing Orders".to_string(),
        HistoricalStatus::InProgress(ImportPhase::Finalizing) => "Finalizing".to_string(),
        HistoricalStatus::Error => "Error".to_string(),
        HistoricalStatus::Finished => match import_date {
            Some(date) if date != ALL_DATA_MARKER => format!(
                "Historical data from {} onward imported",
                format_import_date(date)
            ),
            _ => "All historical data imported".to_string(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::usecases::u501_historical_data_import::engine::LiveProgress;

    fn live(
        customers: Option<u64>,
        orders: Option<u64>,
        totals: (u64, u64),
        in_progress: bool,
    ) -> ImportSnapshot {
        ImportSnapshot {
            customers_total: Some(totals.0),
            orders_total: Some(totals.1),
            is_error: false,
            live: Some(LiveProgress {
                customers_progress: customers,
                orders_progress: orders,
                in_progress,
            }),
        }
    }

    #[test]
    fn test_error_wins() {
        let mut snapshot = live(Some(1), Some(1), (2, 2), true);
        snapshot.is_error = true;
        assert_eq!(get_status(&snapshot), HistoricalStatus::Error);
    }

    #[test]
    fn test_in_progress_phases() {
        assert_eq!(
            get_status(&live(None, Some(0), (5, 5), true)),
            HistoricalStatus::Pending
        );
        assert_eq!(
            get_status(&live(Some(2), Some(0), (5, 5), true)),
            HistoricalStatus::InProgress(ImportPhase::Customers)
        );
        assert_eq!(
            get_status(&live(Some(5), Some(1), (5, 5), true)),
            HistoricalStatus::InProgress(ImportPhase::Orders)
        );
        assert_eq!(
            get_status(&live(Some(5), Some(5), (5, 5), true)),
            HistoricalStatus::InProgress(ImportPhase::Finalizing)
        );
    }

    #[test]
    fn test_finished_requires_both_resources() {
        assert_eq!(
            get_status(&live(Some(5), Some(5), (5, 5), false)),
            HistoricalStatus::Finished
        );
        assert_eq!(
            get_status(&live(Some(5), Some(2), (5, 5), false)),
            HistoricalStatus::Ready
        );
        assert_eq!(
            get_status(&live(Some(0), Some(0), (0, 0), false)),
            HistoricalStatus::Ready
        );
    }

    #[test]
    fn test_not_started_is_ready() {
        let snapshot = ImportSnapshot {
            customers_total: Some(10),
            orders_total: Some(3),
            is_error: false,
            live: None,
        };
        assert_eq!(get_status(&snapshot), HistoricalStatus::Ready);
    }

    #[test]
    fn test_finished_label() {
        assert_eq!(
            status_label(HistoricalStatus::Finished, Some("2019-04-01 00:00:00")),
            "Historical data from 2019-04-01 onward imported"
        );
        assert_eq!(
            status_label(HistoricalStatus::Finished, Some("-1")),
            "All historical data imported"
        );
    }
}
