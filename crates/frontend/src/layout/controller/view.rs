use super::dom;
use super::navigator::{NavEffect, NavState, Navigator, RenderedPage};
use super::pages::{get_pages, PageContainer};
use super::query::persisted_query;
use crate::dashboards::{Analytics, AnalyticsReport, AnalyticsSettings, Dashboard, DevDocs};
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::NavigationSettings;
use crate::usecases::u502_store_details::StoreDetailsStep;
use leptos::prelude::*;

fn run_effects(ctx: &AppGlobalContext, settings: &NavigationSettings, effects: Vec<NavEffect>) {
    for effect in effects {
        match effect {
            NavEffect::ReplaceHistory(location) => ctx.replace(&location),
            NavEffect::ScrollToTop => dom::scroll_to_top(),
            NavEffect::UpdateMenuLinks { page, query } => {
                let next_query = persisted_query(&query, &settings.persisted_query_params);
                dom::update_menu_links(&page, &next_query, &settings.excluded_screens);
            }
            NavEffect::SyncMenuClasses { page, url } => dom::sync_menu_classes(&page, &url),
        }
    }
}

fn render_page(rendered: RenderedPage) -> AnyView {
    let RenderedPage { page, route, query } = rendered;
    let param = |name: &str| route.params.get(name).cloned().unwrap_or_default();
    match page.container {
        PageContainer::DevDocs => view! { <DevDocs component=param("component") /> }.into_any(),
        PageContainer::Dashboard => view! { <Dashboard query=query /> }.into_any(),
        PageContainer::Analytics => view! { <Analytics /> }.into_any(),
        PageContainer::AnalyticsSettings => view! { <AnalyticsSettings /> }.into_any(),
        PageContainer::AnalyticsReport => {
            view! { <AnalyticsReport report=param("report") query=query /> }.into_any()
        }
        PageContainer::StoreDetails => view! { <StoreDetailsStep /> }.into_any(),
    }
}

/// Выбирает страницу по текущему адресу и синхронизирует с ней меню хоста
#[component]
pub fn Controller() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let pages = ctx.config.with_value(|c| get_pages(&c.features));
    let settings = ctx.config.with_value(|c| c.settings.navigation.clone());

    let navigator = StoredValue::new(Navigator::new());
    let state = RwSignal::new(NavState::Idle);

    Effect::new(move |_| {
        let location = ctx.location.get();
        let Some(outcome) = navigator.try_update_value(|n| n.on_location_change(&location, &pages))
        else {
            return;
        };
        state.set(outcome.state);
        run_effects(&ctx, &settings, outcome.effects);
    });

    move || match state.get() {
        NavState::Rendered(rendered) => render_page(rendered),
        // Для неизвестного адреса ничего не рендерим
        NavState::Idle | NavState::Resolving | NavState::NotFound => ().into_any(),
    }
}
