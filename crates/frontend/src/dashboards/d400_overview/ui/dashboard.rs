use crate::dashboards::d400_overview::api;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::stat_card::{CardValue, StatCard};
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_DASHBOARD};
use contracts::dashboards::d400_overview::dto::OverviewMetric;
use contracts::shared::action::Lifetime;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

fn metric_icon(metric: OverviewMetric) -> &'static str {
    match metric {
        OverviewMetric::Users => "users",
        OverviewMetric::Orders => "shopping-cart",
        OverviewMetric::Leads => "user-plus",
    }
}

/// Overview Dashboard component
///
/// One card per metric; each card loads on its own so a failing endpoint
/// only marks its own card.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let values: Vec<(OverviewMetric, RwSignal<CardValue>)> = OverviewMetric::ALL
        .iter()
        .map(|metric| (*metric, RwSignal::new(CardValue::Loading)))
        .collect();
    let values = StoredValue::new(values);

    let lifetime = Lifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.cancel());
    let lifetime = StoredValue::new(lifetime);

    let refresh = move || {
        for (metric, value) in values.get_value() {
            value.set(CardValue::Loading);
            let lifetime = lifetime.get_value();
            spawn_local(async move {
                let result = api::fetch_metric(metric).await;
                if !lifetime.is_active() {
                    return;
                }
                match result {
                    Ok(count) => value.set(CardValue::Ready(count)),
                    Err(err) => {
                        log::error!("Failed to load {}: {}", metric.label(), err);
                        value.set(CardValue::Failed);
                    }
                }
            });
        }
    };
    refresh();

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <PageHeader title="Overview">
                <Button appearance=ButtonAppearance::Secondary on_click=move |_| refresh()>
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <div class="stat-grid">
                    {values
                        .get_value()
                        .into_iter()
                        .map(|(metric, value)| view! {
                            <StatCard label=metric.label() icon_name=metric_icon(metric) value=value />
                        })
                        .collect_view()}
                </div>
            </div>
        </PageFrame>
    }
}
