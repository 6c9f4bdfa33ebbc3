use super::engine::Evaluation;
use super::status::{status_label, HistoricalStatus};
use super::view_model::{HistoricalDataViewModel, NoticeKind};
use crate::layout::global_context::AppGlobalContext;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_historical_data_import::request::PERIOD_OPTIONS;
use contracts::usecases::u501_historical_data_import::HistoricalDataImport;
use leptos::prelude::*;
use thaw::*;

#[component]
pub fn HistoricalDataSettings() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext context not found");
    let requirement = ctx.config.with_value(|c| c.settings.import.requirement());
    let vm = HistoricalDataViewModel::new(requirement);

    // Догружаем устаревшие данные при любом изменении состояния формы
    Effect::new(move |_| vm.refresh());

    let evaluation = Memo::new(move |_| vm.evaluate());

    // Эффекты движка выполняются здесь, сам движок ничего не меняет
    Effect::new(move |_| {
        let effects = evaluation.with(|e| e.effects.clone());
        vm.run_effects(&effects);
    });

    on_cleanup(move || vm.stop_status_check_interval());

    let status = Signal::derive(move || evaluation.with(|e| e.status));

    view! {
        <div class="woocommerce-settings__historical-data">
            <h2 class="woocommerce-section-header">{HistoricalDataImport::display_name()}</h2>
            <div class="woocommerce-settings__wrapper">
                <div class="woocommerce-setting">
                    <div class="woocommerce-setting__input">
                        <span class="woocommerce-setting__help">
                            {HistoricalDataImport::description()}
                        </span>
                        <Show when=move || status.get() != HistoricalStatus::Finished>
                            <PeriodSelector vm=vm />
                            <SkipCheckbox vm=vm />
                            <ImportProgressBar
                                label="Registered Customers"
                                progress=Signal::derive(move || {
                                    evaluation.with(|e| e.snapshot.live.and_then(|l| l.customers_progress))
                                })
                                total=Signal::derive(move || evaluation.with(|e| e.snapshot.customers_total))
                            />
                            <ImportProgressBar
                                label="Orders and Refunds"
                                progress=Signal::derive(move || {
                                    evaluation.with(|e| e.snapshot.live.and_then(|l| l.orders_progress))
                                })
                                total=Signal::derive(move || evaluation.with(|e| e.snapshot.orders_total))
                            />
                        </Show>
                        <span class="woocommerce-settings-historical-data__status">
                            {move || evaluation.with(|e| status_label(e.status, e.import_date.as_deref()))}
                        </span>
                    </div>
                </div>
            </div>

            {move || {
                vm.notice.get().map(|notice| {
                    let class = match notice.kind {
                        NoticeKind::Success => "notice notice-success",
                        NoticeKind::Error => "notice notice-error",
                    };
                    view! { <div class=class>{notice.message}</div> }
                })
            }}

            <HistoricalDataActions vm=vm evaluation=evaluation />
        </div>
    }
}

#[component]
fn PeriodSelector(vm: HistoricalDataViewModel) -> impl IntoView {
    view! {
        <div class="woocommerce-settings-historical-data__columns">
            <div class="woocommerce-settings-historical-data__column">
                <label class="woocommerce-settings-historical-data__label">"Import historical data:"</label>
                <select
                    prop:value=move || vm.period_value.get()
                    prop:disabled=move || vm.in_progress.get()
                    on:change=move |ev| vm.period_value.set(event_target_value(&ev))
                >
                    {PERIOD_OPTIONS
                        .iter()
                        .map(|(value, label)| view! { <option value=*value>{*label}</option> })
                        .collect_view()}
                </select>
            </div>
            <Show when=move || vm.period_value.get() == "custom">
                <div class="woocommerce-settings-historical-data__column">
                    <label class="woocommerce-settings-historical-data__label">"Beginning on"</label>
                    <input
                        type="date"
                        prop:value=move || vm.custom_date.get()
                        prop:disabled=move || vm.in_progress.get()
                        on:input=move |ev| vm.custom_date.set(event_target_value(&ev))
                    />
                </div>
            </Show>
        </div>
    }
}

#[component]
fn SkipCheckbox(vm: HistoricalDataViewModel) -> impl IntoView {
    view! {
        <label class="woocommerce-settings-historical-data__skip-checkbox">
            <input
                type="checkbox"
                prop:checked=move || vm.skip_checked.get()
                prop:disabled=move || vm.in_progress.get()
                on:change=move |ev| vm.skip_checked.set(event_target_checked(&ev))
            />
            " Skip previously imported customers and orders"
        </label>
    }
}

fn progress_text(label: &str, progress: Option<u64>, total: Option<u64>) -> String {
    match (progress, total) {
        (Some(progress), Some(total)) => format!("Imported {}: {} of {}", label, progress, total),
        (None, Some(total)) => format!("{}: {}", label, total),
        _ => format!("{}: …", label),
    }
}

#[component]
fn ImportProgressBar(
    label: &'static str,
    #[prop(into)] progress: Signal<Option<u64>>,
    #[prop(into)] total: Signal<Option<u64>>,
) -> impl IntoView {
    view! {
        <div class="woocommerce-settings-historical-data__progress">
            <span class="woocommerce-settings-historical-data__progress-label">
                {move || progress_text(label, progress.get(), total.get())}
            </span>
            <progress
                class="woocommerce-settings-historical-data__progress-bar"
                max=move || total.get().unwrap_or(0).max(1).to_string()
                value=move || progress.get().unwrap_or(0).to_string()
            />
        </div>
    }
}

#[component]
fn HistoricalDataActions(
    vm: HistoricalDataViewModel,
    evaluation: Memo<Evaluation>,
) -> impl IntoView {
    let status = move || evaluation.with(|e| e.status);
    let has_import_date = move || evaluation.with(|e| e.import_date.is_some());

    let delete_button = move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.delete_previous_data()>
                "Delete Previously Imported Data"
            </Button>
        }
    };
    let reimport_button = move || {
        view! {
            <Button appearance=ButtonAppearance::Secondary on_click=move |_| vm.reimport_data()>
                "Re-import Data"
            </Button>
        }
    };

    view! {
        <div class="woocommerce-settings__actions woocommerce-settings-historical-data__actions">
            {move || match status() {
                HistoricalStatus::Pending | HistoricalStatus::InProgress(_) => view! {
                    <Space>
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.stop_import()>
                            "Stop Import"
                        </Button>
                        <span class="woocommerce-settings-historical-data__action-help">
                            "Imported data will not be lost if the import is stopped. \
                             Navigating away from this page will not affect the import."
                        </span>
                    </Space>
                }
                .into_any(),
                HistoricalStatus::Ready => view! {
                    <Space>
                        {move || has_import_date().then(delete_button)}
                        <Button appearance=ButtonAppearance::Primary on_click=move |_| vm.start_import()>
                            "Start"
                        </Button>
                    </Space>
                }
                .into_any(),
                HistoricalStatus::Finished => view! {
                    <Space>
                        {delete_button()}
                        {reimport_button()}
                    </Space>
                }
                .into_any(),
                HistoricalStatus::Error => view! {
                    <Space>
                        <span class="woocommerce-settings-historical-data__action-error">
                            "Something went wrong with the importation process."
                        </span>
                        {reimport_button()}
                    </Space>
                }
                .into_any(),
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_progress_text() {
        assert_eq!(
            progress_text("Orders and Refunds", Some(3), Some(10)),
            "Imported Orders and Refunds: 3 of 10"
        );
        assert_eq!(progress_text("Registered Customers", None, Some(7)), "Registered Customers: 7");
        assert_eq!(progress_text("Registered Customers", None, None), "Registered Customers: …");
    }
}
