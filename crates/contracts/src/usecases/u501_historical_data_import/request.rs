use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Период, за который импортируются исторические данные
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ImportPeriod {
    /// Все данные
    #[default]
    All,
    /// Последние N дней
    Days(u32),
    /// С указанной даты
    Custom(NaiveDate),
}

/// Варианты выпадающего списка: (value, label)
pub const PERIOD_OPTIONS: &[(&str, &str)] = &[
    ("all", "All"),
    ("365", "Last 365 days"),
    ("90", "Last 90 days"),
    ("30", "Last 30 days"),
    ("7", "Last 7 days"),
    ("1", "Last 24 hours"),
    ("custom", "Date range"),
];

impl ImportPeriod {
    /// Значение для `<select>`
    pub fn value(&self) -> String {
        match self {
            ImportPeriod::All => "all".to_string(),
            ImportPeriod::Days(days) => days.to_string(),
            ImportPeriod::Custom(_) => "custom".to_string(),
        }
    }

    /// Разбор значения `<select>`; для `custom` используется переданная дата
    pub fn from_value(value: &str, custom_date: NaiveDate) -> Self {
        match value {
            "custom" => ImportPeriod::Custom(custom_date),
            other => other
                .parse::<u32>()
                .map(ImportPeriod::Days)
                .unwrap_or(ImportPeriod::All),
        }
    }
}

/// Параметры запуска импорта и запроса totals
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ImportParams {
    #[serde(default, skip_serializing_if = "std::ops::Not::not")]
    pub skip_existing: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub days: Option<i64>,
}

/// Собрать параметры запроса из состояния формы
pub fn format_params(period: &ImportPeriod, skip_checked: bool, today: NaiveDate) -> ImportParams {
    let days = match period {
        ImportPeriod::All => None,
        ImportPeriod::Days(days) => Some(i64::from(*days)),
        ImportPeriod::Custom(date) => Some((today - *date).num_days()),
    };
    ImportParams {
        skip_existing: skip_checked,
        days,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_all_period_has_no_days() {
        let params = format_params(&ImportPeriod::All, false, date(2024, 3, 15));
        assert_eq!(params, ImportParams::default());
        assert_eq!(serde_json::to_string(&params).unwrap(), "{}");
    }

    #[test]
    fn test_fixed_window_and_skip() {
        let params = format_params(&ImportPeriod::Days(30), true, date(2024, 3, 15));
        assert_eq!(params.days, Some(30));
        assert!(params.skip_existing);
        assert_eq!(
            serde_json::to_string(&params).unwrap(),
            r#"{"skip_existing":true,"days":30}"#
        );
    }

    #[test]
    fn test_custom_date_counts_whole_days() {
        let params = format_params(
            &ImportPeriod::Custom(date(2024, 3, 1)),
            false,
            date(2024, 3, 15),
        );
        assert_eq!(params.days, Some(14));
    }

    #[test]
    fn test_period_select_values() {
        let custom = date(2024, 1, 1);
        assert_eq!(ImportPeriod::from_value("90", custom), ImportPeriod::Days(90));
        assert_eq!(ImportPeriod::from_value("all", custom), ImportPeriod::All);
        assert_eq!(ImportPeriod::from_value("custom", custom), ImportPeriod::Custom(custom));
        assert_eq!(ImportPeriod::Days(7).value(), "7");
    }
}
