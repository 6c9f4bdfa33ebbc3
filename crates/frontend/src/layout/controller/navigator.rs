use super::location::Location;
use super::pages::{resolve, Page};
use super::query::{base_query, reconcile_pagination, Query};
use super::route_match::RouteMatch;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RenderedPage {
    pub page: Page,
    pub route: RouteMatch,
    /// Запрос без курсора пагинации, передаётся контейнеру страницы
    pub query: Query,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum NavState {
    #[default]
    Idle,
    Resolving,
    Rendered(RenderedPage),
    NotFound,
}

/// Действие, которое исполняет вызывающий код, в порядке выдачи
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum NavEffect {
    /// Заменить текущую запись истории (без новой записи)
    ReplaceHistory(Location),
    ScrollToTop,
    UpdateMenuLinks { page: Page, query: Query },
    SyncMenuClasses { page: Page, url: String },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationOutcome {
    pub state: NavState,
    pub effects: Vec<NavEffect>,
}

/// Автомат навигации: Idle → Resolving → Rendered | NotFound на каждое
/// изменение адреса
#[derive(Debug, Default)]
pub struct Navigator {
    state: NavState,
    previous: Option<Location>,
    previous_url: Option<String>,
}

impl Navigator {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn state(&self) -> &NavState {
        &self.state
    }

    pub fn on_location_change(&mut self, location: &Location, pages: &[Page]) -> NavigationOutcome {
        self.state = NavState::Resolving;
        let previous = self.previous.replace(location.clone());

        let Some((page, route)) = resolve(pages, &location.path) else {
            log::debug!("no page for {}", location.path);
            self.previous_url = None;
            self.state = NavState::NotFound;
            return NavigationOutcome {
                state: self.state.clone(),
                effects: Vec::new(),
            };
        };

        let mut effects = Vec::new();

        if let Some(query) = previous
            .as_ref()
            .and_then(|prev| reconcile_pagination(&prev.query, &location.query))
        {
            log::debug!("filters changed, resetting pagination on {}", location.path);
            effects.push(NavEffect::ReplaceHistory(Location::new(location.path.clone(), query)));
        }

        if self.previous_url.as_deref() != Some(route.url.as_str()) {
            effects.push(NavEffect::ScrollToTop);
        }
        self.previous_url = Some(route.url.clone());

        let query = base_query(&location.query);
        effects.push(NavEffect::UpdateMenuLinks {
            page: page.clone(),
            query: query.clone(),
        });
        effects.push(NavEffect::SyncMenuClasses {
            page: page.clone(),
            url: route.url.clone(),
        });

        log::debug!("rendering {} as {:?}", route.url, page.container);
        self.state = NavState::Rendered(RenderedPage {
            page: page.clone(),
            route,
            query,
        });
        NavigationOutcome {
            state: self.state.clone(),
            effects,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::layout::controller::pages::{get_pages, PageContainer};
    use crate::layout::controller::query::parse_query;
    use contracts::shared::features::AdminFeatures;

    fn at(path: &str, search: &str) -> Location {
        Location::new(path, parse_query(search))
    }

    fn kinds(effects: &[NavEffect]) -> Vec<&'static str> {
        effects
            .iter()
            .map(|e| match e {
                NavEffect::ReplaceHistory(_) => "replace",
                NavEffect::ScrollToTop => "scroll",
                NavEffect::UpdateMenuLinks { .. } => "links",
                NavEffect::SyncMenuClasses { .. } => "classes",
            })
            .collect()
    }

    #[test]
    fn test_first_render() {
        let pages = get_pages(&AdminFeatures::all());
        let mut navigator = Navigator::new();
        assert_eq!(navigator.state(), &NavState::Idle);

        let outcome = navigator.on_location_change(&at("/analytics/orders", "page=2"), &pages);
        assert_eq!(kinds(&outcome.effects), vec!["scroll", "links", "classes"]);

        let NavState::Rendered(rendered) = outcome.state else {
            panic!("expected rendered page");
        };
        assert_eq!(rendered.page.container, PageContainer::AnalyticsReport);
        assert_eq!(rendered.route.params.get("report").map(String::as_str), Some("orders"));
        assert!(rendered.query.is_empty());
    }

    #[test]
    fn test_filter_change_replaces_history() {
        let pages = get_pages(&AdminFeatures::all());
        let mut navigator = Navigator::new();
        navigator.on_location_change(&at("/analytics/orders", "page=3&filter=A"), &pages);

        let outcome =
            navigator.on_location_change(&at("/analytics/orders", "page=3&filter=B"), &pages);
        assert_eq!(kinds(&outcome.effects), vec!["replace", "links", "classes"]);
        assert_eq!(
            outcome.effects[0],
            NavEffect::ReplaceHistory(at("/analytics/orders", "page=1&filter=B"))
        );

        // Замена истории приходит следующим событием и уже ничего не сбрасывает
        let outcome =
            navigator.on_location_change(&at("/analytics/orders", "page=1&filter=B"), &pages);
        assert_eq!(kinds(&outcome.effects), vec!["links", "classes"]);
    }

    #[test]
    fn test_same_filters_keep_history() {
        let pages = get_pages(&AdminFeatures::all());
        let mut navigator = Navigator::new();
        navigator.on_location_change(&at("/analytics/orders", "page=3&filter=A"), &pages);
        let outcome =
            navigator.on_location_change(&at("/analytics/orders", "page=3&filter=A"), &pages);
        assert!(!outcome
            .effects
            .iter()
            .any(|e| matches!(e, NavEffect::ReplaceHistory(_))));
    }

    #[test]
    fn test_url_change_scrolls() {
        let pages = get_pages(&AdminFeatures::all());
        let mut navigator = Navigator::new();
        navigator.on_location_change(&at("/analytics/orders", ""), &pages);
        let outcome = navigator.on_location_change(&at("/analytics/revenue", ""), &pages);
        assert_eq!(outcome.effects.first(), Some(&NavEffect::ScrollToTop));
    }

    #[test]
    fn test_not_found_has_no_effects() {
        let pages = get_pages(&AdminFeatures::all());
        let mut navigator = Navigator::new();
        navigator.on_location_change(&at("/analytics/orders", ""), &pages);

        let outcome = navigator.on_location_change(&at("/unknown", ""), &pages);
        assert_eq!(outcome.state, NavState::NotFound);
        assert!(outcome.effects.is_empty());

        // Возврат на ту же страницу снова прокручивает наверх
        let outcome = navigator.on_location_change(&at("/analytics/orders", ""), &pages);
        assert_eq!(outcome.effects.first(), Some(&NavEffect::ScrollToTop));
    }
}
