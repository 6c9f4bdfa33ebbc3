use serde::{Deserialize, Deserializer, Serialize};

/// Прогресс по одному типу ресурса (покупатели или заказы).
/// `None` означает «ещё не известно».
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourceProgress {
    #[serde(default)]
    pub imported: Option<u64>,
    #[serde(default)]
    pub total: Option<u64>,
}

/// Ответ `GET /wc-analytics/reports/import/status`
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportStatusResponse {
    #[serde(default)]
    pub customers: Option<ResourceProgress>,
    #[serde(default)]
    pub orders: Option<ResourceProgress>,
    /// Дата, с которой были импортированы данные; сервер отдаёт `false`, если импорта не было
    #[serde(default, deserialize_with = "string_or_false")]
    pub imported_from: Option<String>,
    #[serde(default)]
    pub is_importing: Option<bool>,
}

/// Ответ `GET /wc-analytics/reports/import/totals`
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportTotalsResponse {
    #[serde(default)]
    pub customers: Option<u64>,
    #[serde(default)]
    pub orders: Option<u64>,
}

fn string_or_false<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(match value {
        serde_json::Value::String(s) if !s.is_empty() => Some(s),
        _ => None,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_with_false_import_date() {
        let status: ImportStatusResponse = serde_json::from_str(
            r#"{"is_importing": false, "imported_from": false,
                "customers": {"imported": 3, "total": 10}}"#,
        )
        .unwrap();
        assert_eq!(status.imported_from, None);
        assert_eq!(status.is_importing, Some(false));
        assert_eq!(
            status.customers,
            Some(ResourceProgress {
                imported: Some(3),
                total: Some(10)
            })
        );
        assert_eq!(status.orders, None);
    }

    #[test]
    fn test_status_with_import_date() {
        let status: ImportStatusResponse =
            serde_json::from_str(r#"{"imported_from": "2019-04-01 00:00:00"}"#).unwrap();
        assert_eq!(status.imported_from.as_deref(), Some("2019-04-01 00:00:00"));
    }
}
