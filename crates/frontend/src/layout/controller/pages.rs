use contracts::shared::features::AdminFeatures;

use super::route_match::{match_path, RouteMatch};

pub const WOOCOMMERCE_MENU: &str = "toplevel_page_woocommerce";
pub const ANALYTICS_MENU: &str = "toplevel_page_wc-admin-path--analytics-revenue";

/// Контейнер, который рендерит страница
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PageContainer {
    DevDocs,
    Dashboard,
    Analytics,
    AnalyticsSettings,
    AnalyticsReport,
    StoreDetails,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub container: PageContainer,
    pub path: &'static str,
    /// Пункт меню хоста, который раскрывается для страницы
    pub wp_open_menu: Option<&'static str>,
    /// Пункт меню хоста, который сворачивается для страницы
    pub wp_closed_menu: Option<&'static str>,
}

impl Page {
    const fn new(
        container: PageContainer,
        path: &'static str,
        open: &'static str,
        closed: &'static str,
    ) -> Self {
        Self {
            container,
            path,
            wp_open_menu: Some(open),
            wp_closed_menu: Some(closed),
        }
    }

    /// Идентификаторы меню хоста, в которых живут ссылки страницы
    pub fn menu_ids(&self) -> impl Iterator<Item = &'static str> {
        self.wp_open_menu.into_iter().chain(self.wp_closed_menu)
    }
}

/// Таблица страниц в порядке приоритета сопоставления
pub fn get_pages(features: &AdminFeatures) -> Vec<Page> {
    use PageContainer::*;
    let mut pages = Vec::new();

    if features.devdocs {
        pages.push(Page::new(DevDocs, "/devdocs", WOOCOMMERCE_MENU, ANALYTICS_MENU));
        pages.push(Page::new(DevDocs, "/devdocs/:component", WOOCOMMERCE_MENU, ANALYTICS_MENU));
    }

    if features.analytics_dashboard {
        pages.push(Page::new(Dashboard, "/", WOOCOMMERCE_MENU, ANALYTICS_MENU));
    }

    if features.analytics {
        pages.push(Page::new(Analytics, "/analytics", ANALYTICS_MENU, WOOCOMMERCE_MENU));
        pages.push(Page::new(
            AnalyticsSettings,
            "/analytics/settings",
            ANALYTICS_MENU,
            WOOCOMMERCE_MENU,
        ));
        pages.push(Page::new(
            AnalyticsReport,
            "/analytics/:report",
            ANALYTICS_MENU,
            WOOCOMMERCE_MENU,
        ));
    }

    if features.onboarding {
        pages.push(Page::new(StoreDetails, "/setup-wizard", WOOCOMMERCE_MENU, ANALYTICS_MENU));
    }

    pages
}

/// Первая страница таблицы, шаблон которой точно совпадает с путём
pub fn resolve<'a>(pages: &'a [Page], path: &str) -> Option<(&'a Page, RouteMatch)> {
    pages
        .iter()
        .find_map(|page| match_path(path, page.path).map(|m| (page, m)))
}
