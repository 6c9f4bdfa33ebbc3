//! Параметры запроса URL
//!
//! Ключ `page`: курсор пагинации. Запрос без него ([`base_query`]) служит
//! для обнаружения смены фильтров и сортировки.

use std::collections::BTreeMap;

pub type Query = BTreeMap<String, String>;

pub const PAGE_CURSOR: &str = "page";

/// Разобрать строку запроса (с `?` или без)
pub fn parse_query(search: &str) -> Query {
    let search = search.trim_start_matches('?');
    if search.is_empty() {
        return Query::new();
    }
    serde_qs::from_str::<Query>(search).unwrap_or_else(|e| {
        // Вложенные ключи вида a[b]=c serde_qs в плоскую карту не разбирает
        log::debug!("falling back to flat query parsing for {:?}: {}", search, e);
        parse_flat(search)
    })
}

fn parse_flat(search: &str) -> Query {
    search
        .split('&')
        .filter(|pair| !pair.is_empty())
        .map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (decode(key), decode(value))
        })
        .collect()
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    urlencoding::decode(&value)
        .map(|v| v.into_owned())
        .unwrap_or(value)
}

pub fn stringify_query(query: &Query) -> String {
    serde_qs::to_string(query).unwrap_or_default()
}

/// Запрос без курсора пагинации
pub fn base_query(query: &Query) -> Query {
    let mut query = query.clone();
    query.remove(PAGE_CURSOR);
    query
}

/// Курсор больше первой страницы; нечисловые значения не считаются
fn is_past_first_page(query: &Query) -> bool {
    query
        .get(PAGE_CURSOR)
        .and_then(|page| page.trim().parse::<f64>().ok())
        .is_some_and(|page| page > 1.0)
}

/// Если курсор предыдущего запроса был дальше первой страницы, а фильтры
/// изменились, возвращает новый запрос со сброшенным на 1 курсором.
pub fn reconcile_pagination(previous: &Query, next: &Query) -> Option<Query> {
    if !is_past_first_page(previous) || base_query(previous) == base_query(next) {
        return None;
    }
    let mut query = next.clone();
    query.insert(PAGE_CURSOR.to_string(), "1".to_string());
    Some(query)
}

/// Параметры, которые переносятся в ссылки меню
pub fn persisted_query(query: &Query, persisted_params: &[String]) -> Query {
    query
        .iter()
        .filter(|(key, _)| persisted_params.iter().any(|p| p == *key))
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect()
}
