use crate::usecases::u501_historical_data_import::HistoricalDataSettings;
use leptos::prelude::*;

#[component]
pub fn AnalyticsSettings() -> impl IntoView {
    view! {
        <div class="woocommerce-settings">
            <h2 class="woocommerce-section-header">"Analytics Settings"</h2>
            <HistoricalDataSettings />
        </div>
    }
}
