use super::view_model::StoreDetailsViewModel;
use crate::layout::global_context::AppGlobalContext;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_store_details::StoreDetails;
use leptos::prelude::*;
use thaw::*;

/// Страны и штаты, доступные в форме (`country:state`)
const COUNTRY_OPTIONS: &[(&str, &str)] = &[
    ("US:CA", "United States (US) : California"),
    ("US:NY", "United States (US) : New York"),
    ("US:TX", "United States (US) : Texas"),
    ("CA:ON", "Canada : Ontario"),
    ("CA:QC", "Canada : Quebec"),
    ("GB", "United Kingdom (UK)"),
    ("DE:BE", "Germany : Berlin"),
    ("FR", "France"),
    ("ES", "Spain"),
    ("IT", "Italy"),
    ("NL", "Netherlands"),
    ("AU:NSW", "Australia : New South Wales"),
    ("NZ", "New Zealand"),
    ("IN:MH", "India : Maharashtra"),
    ("JP", "Japan"),
    ("BR:SP", "Brazil : São Paulo"),
    ("MX", "Mexico"),
    ("ZA", "South Africa"),
    ("CH", "Switzerland"),
    ("SE", "Sweden"),
    ("NO", "Norway"),
    ("DK", "Denmark"),
    ("PL", "Poland"),
];

const CONFIGURE_CURRENCY_TEXT: &str = "Your store address will help us configure currency options and \
    shipping rules automatically. This information will not be publicly visible and can easily be \
    changed later.";

#[component]
fn TextField(
    label: &'static str,
    field: &'static str,
    value: RwSignal<String>,
    vm: StoreDetailsViewModel,
) -> impl IntoView {
    let error = move || vm.validation_errors.with(|e| e.get(field).copied());
    view! {
        <div class="woocommerce-profile-wizard__field">
            <label>{label}</label>
            <input
                type="text"
                prop:value=move || value.get()
                on:input=move |ev| value.set(event_target_value(&ev))
            />
            {move || error().map(|e| view! { <span class="components-base-control__help">{e}</span> })}
        </div>
    }
}

#[component]
fn UsageModal(vm: StoreDetailsViewModel, ctx: AppGlobalContext) -> impl IntoView {
    view! {
        <div class="woocommerce-profile-wizard__usage-modal">
            <h3>"Build a better WooCommerce"</h3>
            <p>
                "Get improved features and faster fixes by sharing non-sensitive data via usage \
                 tracking that shows us how WooCommerce is used."
            </p>
            <Space>
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.close_modal()>
                    "Cancel"
                </Button>
                <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.confirm(ctx)>
                    "Continue"
                </Button>
            </Space>
        </div>
    }
}

/// Шаг мастера настройки: адрес магазина
#[component]
pub fn StoreDetailsStep() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let vm = StoreDetailsViewModel::new();
    vm.load();

    view! {
        <div class="woocommerce-profile-wizard__store-details">
            <h2 class="woocommerce-profile-wizard__header-title">{StoreDetails::display_name()}</h2>
            <h3 class="woocommerce-profile-wizard__header-subtitle" title=CONFIGURE_CURRENCY_TEXT>
                {StoreDetails::description()}
            </h3>

            <Show when=move || vm.show_usage_modal.get()>
                <UsageModal vm=vm ctx=ctx />
            </Show>

            <Show
                when=move || vm.loaded.get()
                fallback=|| view! { <div class="woocommerce-profile-wizard__loading">"Loading..."</div> }
            >
                <div class="woocommerce-card">
                    <div class="woocommerce-card__body">
                        <TextField label="Address line 1" field="addressLine1" value=vm.address_line1 vm=vm />
                        <TextField label="Address line 2 (optional)" field="addressLine2" value=vm.address_line2 vm=vm />
                        <div class="woocommerce-profile-wizard__field">
                            <label>"Country / Region"</label>
                            <select
                                prop:value=move || vm.country_state.get()
                                on:change=move |ev| vm.country_state.set(event_target_value(&ev))
                            >
                                <option value="">"Select a country / region"</option>
                                {COUNTRY_OPTIONS
                                    .iter()
                                    .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                                    .collect_view()}
                            </select>
                            {move || {
                                vm.validation_errors
                                    .with(|e| e.get("countryState").copied())
                                    .map(|e| view! { <span class="components-base-control__help">{e}</span> })
                            }}
                        </div>
                        <TextField label="City" field="city" value=vm.city vm=vm />
                        <TextField label="Post code" field="postCode" value=vm.post_code vm=vm />
                    </div>
                    <div class="woocommerce-card__footer">
                        <label class="woocommerce-profile-wizard__client">
                            <input
                                type="checkbox"
                                prop:checked=move || vm.is_client.get()
                                on:change=move |ev| vm.is_client.set(event_target_checked(&ev))
                            />
                            " I'm setting up a store for a client"
                        </label>
                        <Button
                            appearance=ButtonAppearance::Primary
                            disabled=Signal::derive(move || vm.saving.get())
                            on_click=move |_| vm.submit()
                        >
                            "Continue"
                        </Button>
                    </div>
                </div>
            </Show>

            {move || vm.error.get().map(|e| view! { <div class="notice notice-error">{e}</div> })}

            <div class="woocommerce-profile-wizard__footer">
                <p>"Manual setup is only recommended for experienced WooCommerce users or developers."</p>
                <Button appearance=ButtonAppearance::Subtle on_click=move |_| vm.request_skip()>
                    "Skip setup wizard"
                </Button>
            </div>
        </div>
    }
}
