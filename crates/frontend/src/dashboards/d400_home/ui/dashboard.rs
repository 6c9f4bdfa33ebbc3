use crate::layout::controller::query::Query;
use leptos::prelude::*;

/// Период по умолчанию, если фильтр не задан
const DEFAULT_PERIOD: &str = "month";

/// Главная страница аналитики магазина
#[component]
pub fn Dashboard(query: Query) -> impl IntoView {
    let period = query
        .get("period")
        .cloned()
        .unwrap_or_else(|| DEFAULT_PERIOD.to_string());
    let compare = query.get("compare").cloned();

    view! {
        <div class="woocommerce-dashboard__container">
            <h2 class="woocommerce-section-header">"Dashboard"</h2>
            <div class="woocommerce-dashboard__filters">
                <span>"Date range: " {period}</span>
                {compare.map(|c| view! { <span>" compared to " {c}</span> })}
            </div>
        </div>
    }
}
