use leptos::prelude::*;

#[component]
pub fn Analytics() -> impl IntoView {
    view! {
        <div class="woocommerce-analytics">
            <h2 class="woocommerce-section-header">"Analytics"</h2>
        </div>
    }
}
