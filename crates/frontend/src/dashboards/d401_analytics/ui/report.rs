use crate::layout::controller::query::Query;
use leptos::prelude::*;

/// Заголовок отчёта по его slug из адреса `/analytics/:report`
pub fn report_title(report: &str) -> Option<&'static str> {
    let title = match report {
        "revenue" => "Revenue",
        "orders" => "Orders",
        "products" => "Products",
        "categories" => "Categories",
        "coupons" => "Coupons",
        "taxes" => "Taxes",
        "downloads" => "Downloads",
        "stock" => "Stock",
        "customers" => "Customers",
        _ => return None,
    };
    Some(title)
}

#[component]
pub fn AnalyticsReport(report: String, query: Query) -> impl IntoView {
    let filters: Vec<String> = query.iter().map(|(k, v)| format!("{}: {}", k, v)).collect();

    match report_title(&report) {
        Some(title) => view! {
            <div class="woocommerce-report">
                <h2 class="woocommerce-section-header">{title}</h2>
                <ul class="woocommerce-report__filters">
                    {filters.into_iter().map(|f| view! { <li>{f}</li> }).collect_view()}
                </ul>
            </div>
        }
        .into_any(),
        None => {
            log::warn!("unknown report: {}", report);
            view! {
                <div class="woocommerce-report woocommerce-report--empty">
                    "There is no report named " {report}
                </div>
            }
            .into_any()
        }
    }
}
