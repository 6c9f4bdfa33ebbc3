use super::query::{parse_query, stringify_query, Query, PAGE_CURSOR};

/// Страница хоста, на которой смонтировано приложение
pub const ADMIN_PAGE: &str = "admin.php";
pub const ADMIN_SLUG: &str = "wc-admin";

/// Клиентский адрес: путь маршрута и параметры запроса.
///
/// В браузере маршрут хранится во фрагменте:
/// `admin.php?page=wc-admin#/analytics/orders?page=2`.
/// Ссылки меню хоста имеют вид `admin.php?page=wc-admin&path=/analytics/orders`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Location {
    pub path: String,
    pub query: Query,
}

impl Default for Location {
    fn default() -> Self {
        Self {
            path: "/".to_string(),
            query: Query::new(),
        }
    }
}

impl Location {
    pub fn new(path: impl Into<String>, query: Query) -> Self {
        let path = path.into();
        Self {
            path: if path.is_empty() { "/".to_string() } else { path },
            query,
        }
    }

    /// Разобрать адрес из href: клиентский фрагмент имеет приоритет над ссылкой хоста
    pub fn from_href(href: &str) -> Self {
        let (before_hash, fragment) = match href.split_once('#') {
            Some((before, fragment)) => (before, Some(fragment)),
            None => (href, None),
        };

        if let Some(fragment) = fragment.filter(|f| f.starts_with('/')) {
            let (path, search) = fragment.split_once('?').unwrap_or((fragment, ""));
            return Self::new(path, parse_query(search));
        }

        let search = before_hash.split_once('?').map(|(_, s)| s).unwrap_or("");
        let mut query = parse_query(search);
        let path = query.remove("path").unwrap_or_default();
        if query.get(PAGE_CURSOR).map(String::as_str) == Some(ADMIN_SLUG) {
            query.remove(PAGE_CURSOR);
        }
        Self::new(path, query)
    }

    /// Строка запроса с ведущим `?` или пустая
    pub fn search(&self) -> String {
        if self.query.is_empty() {
            String::new()
        } else {
            format!("?{}", stringify_query(&self.query))
        }
    }

    pub fn to_href(&self) -> String {
        format!("{}?page={}#{}{}", ADMIN_PAGE, ADMIN_SLUG, self.path, self.search())
    }

    /// Тот же путь с добавленными/заменёнными параметрами
    pub fn with_query(&self, extra: &Query) -> Self {
        let mut query = self.query.clone();
        query.extend(extra.iter().map(|(k, v)| (k.clone(), v.clone())));
        Self::new(self.path.clone(), query)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_fragment() {
        let location = Location::from_href(
            "https://shop.test/wp-admin/admin.php?page=wc-admin#/analytics/orders?page=2&orderby=date",
        );
        assert_eq!(location.path, "/analytics/orders");
        assert_eq!(location.query.get("page").map(String::as_str), Some("2"));
        assert_eq!(location.query.get("orderby").map(String::as_str), Some("date"));
    }

    #[test]
    fn test_from_host_link() {
        let location = Location::from_href(
            "admin.php?page=wc-admin&path=%2Fanalytics%2Fsettings&period=month",
        );
        assert_eq!(location.path, "/analytics/settings");
        assert_eq!(location.query.len(), 1);
        assert_eq!(location.query.get("period").map(String::as_str), Some("month"));

        let root = Location::from_href("admin.php?page=wc-admin");
        assert_eq!(root, Location::default());
    }

    #[test]
    fn test_href_round_trip() {
        let location =
            Location::from_href("admin.php?page=wc-admin#/analytics/revenue?period=week");
        assert_eq!(Location::from_href(&location.to_href()), location);
        assert_eq!(Location::default().to_href(), "admin.php?page=wc-admin#/");
    }
}
