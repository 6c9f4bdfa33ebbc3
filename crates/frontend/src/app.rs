use crate::layout::controller::Controller;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::config::AdminConfig;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация хоста читается один раз при старте
    let ctx = AppGlobalContext::new(AdminConfig::load());
    provide_context(ctx);
    ctx.init_router_integration();

    view! {
        <div class="woocommerce-layout">
            <Controller />
        </div>
    }
}
