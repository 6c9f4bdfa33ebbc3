use leptos::prelude::*;

/// Компоненты, у которых есть страница документации
pub const DOCUMENTED_COMPONENTS: &[&str] = &["historical-data", "store-details", "navigation"];

/// Документация для разработчиков: список компонентов или страница одного из них
#[component]
pub fn DevDocs(component: String) -> impl IntoView {
    if component.is_empty() {
        return view! {
            <div class="woocommerce_devdocs">
                <h2 class="woocommerce-section-header">"Developer documentation"</h2>
                <ul>
                    {DOCUMENTED_COMPONENTS
                        .iter()
                        .map(|name| {
                            let href = format!("admin.php?page=wc-admin#/devdocs/{}", name);
                            view! { <li><a href=href>{*name}</a></li> }
                        })
                        .collect_view()}
                </ul>
            </div>
        }
        .into_any();
    }

    view! {
        <div class="woocommerce_devdocs woocommerce_devdocs__component">
            <h2 class="woocommerce-section-header">{component}</h2>
        </div>
    }
    .into_any()
}
