use crate::shared::api_utils::{get_json, post_json};
use contracts::usecases::u501_historical_data_import::{
    ImportActionResponse, ImportParams, ImportStatusResponse, ImportTotalsResponse,
};

const BASE_PATH: &str = "/wc-analytics/reports/import";

fn with_params(path: &str, params: &ImportParams) -> String {
    let query = serde_qs::to_string(params).unwrap_or_default();
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}

/// Текущий статус импорта
pub async fn get_import_status() -> Result<ImportStatusResponse, String> {
    get_json(&format!("{}/status", BASE_PATH)).await
}

/// Количество покупателей и заказов, которые будут импортированы с параметрами
pub async fn get_import_totals(params: &ImportParams) -> Result<ImportTotalsResponse, String> {
    get_json(&with_params(&format!("{}/totals", BASE_PATH), params)).await
}

/// Запустить импорт
pub async fn start_import(params: &ImportParams) -> Result<ImportActionResponse, String> {
    post_json::<(), _>(&with_params(BASE_PATH, params), None).await
}

/// Остановить импорт
pub async fn cancel_import() -> Result<ImportActionResponse, String> {
    post_json::<(), _>(&format!("{}/cancel", BASE_PATH), None).await
}

/// Удалить ранее импортированные данные
pub async fn delete_previous_data() -> Result<ImportActionResponse, String> {
    post_json::<(), _>(&format!("{}/delete", BASE_PATH), None).await
}
