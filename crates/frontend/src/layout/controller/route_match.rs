use std::collections::BTreeMap;

/// Результат сопоставления пути с шаблоном маршрута
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteMatch {
    /// Шаблон, с которым совпал путь (`/analytics/:report`)
    pub pattern: &'static str,
    /// Совпавшая часть пути без завершающего слэша
    pub url: String,
    pub params: BTreeMap<String, String>,
}

fn segments(path: &str) -> Vec<&str> {
    path.split('/').filter(|s| !s.is_empty()).collect()
}

/// Точное сопоставление: число сегментов совпадает, `:name` захватывает
/// сегмент, литералы сравниваются без учёта регистра, завершающий слэш
/// допускается.
pub fn match_path(path: &str, pattern: &'static str) -> Option<RouteMatch> {
    let path_segments = segments(path);
    let pattern_segments = segments(pattern);
    if path_segments.len() != pattern_segments.len() {
        return None;
    }

    let mut params = BTreeMap::new();
    for (segment, expected) in path_segments.iter().zip(&pattern_segments) {
        match expected.strip_prefix(':') {
            Some(name) => {
                let value = urlencoding::decode(segment)
                    .map(|v| v.into_owned())
                    .unwrap_or_else(|_| segment.to_string());
                params.insert(name.to_string(), value);
            }
            None if segment.eq_ignore_ascii_case(expected) => {}
            None => return None,
        }
    }

    Some(RouteMatch {
        pattern,
        url: format!("/{}", path_segments.join("/")),
        params,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_capture() {
        let m = match_path("/analytics/orders", "/analytics/:report").unwrap();
        assert_eq!(m.params.get("report").map(String::as_str), Some("orders"));
        assert_eq!(m.url, "/analytics/orders");
        assert_eq!(m.pattern, "/analytics/:report");
    }

    #[test]
    fn test_exact_only() {
        assert!(match_path("/analytics/orders/extra", "/analytics/:report").is_none());
        assert!(match_path("/analytics", "/analytics/:report").is_none());
        assert!(match_path("/analytics", "/").is_none());
        assert!(match_path("/unknown", "/analytics").is_none());
    }

    #[test]
    fn test_root_and_trailing_slash() {
        assert_eq!(match_path("/", "/").unwrap().url, "/");
        assert_eq!(match_path("", "/").unwrap().url, "/");
        assert_eq!(match_path("/analytics/", "/analytics").unwrap().url, "/analytics");
        assert!(match_path("/Analytics", "/analytics").is_some());
    }

    #[test]
    fn test_param_is_decoded() {
        let m = match_path("/devdocs/date%20range", "/devdocs/:component").unwrap();
        assert_eq!(m.params.get("component").map(String::as_str), Some("date range"));
    }
}
