//! Filter inputs bound to a `TableState`.
//!
//! Each input is addressed by the filter name declared in the dataset's
//! `filter_specs()`; labels come from the spec.

use crate::shared::components::filter_panel::FilterTag;
use crate::shared::table_state::TableState;
use contracts::domain::common::Record;
use contracts::shared::table_view::{FilterKind, FilterValue};
use gloo_timers::callback::Timeout;
use leptos::prelude::*;

/// Delay before a typed search term is applied
const SEARCH_DEBOUNCE_MS: u32 = 300;

fn spec_label<R>(table: TableState<R>, name: &str) -> &'static str
where
    R: Record + Send + Sync + 'static,
{
    table.view.with_untracked(|v| {
        v.specs()
            .iter()
            .find(|s| s.name == name)
            .map(|s| s.label)
            .unwrap_or("")
    })
}

/// Text search box for a `Text` filter.
#[component]
pub fn SearchFilter<R>(table: TableState<R>, name: &'static str) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let text = RwSignal::new(String::new());
    // Dropping a pending `Timeout` cancels it
    let pending = StoredValue::new_local(None::<Timeout>);
    on_cleanup(move || {
        pending.try_update_value(|timeout| *timeout = None);
    });

    // "Clear filters" empties the box
    Effect::new(move |was_active: Option<bool>| {
        let active = table.view.with(|v| v.filter_value(name).is_some());
        if was_active == Some(true) && !active {
            pending.set_value(None);
            text.set(String::new());
        }
        active
    });

    view! {
        <div class="form__group">
            <input
                type="search"
                class="form__input"
                placeholder=spec_label(table, name)
                prop:value=move || text.get()
                on:input=move |ev| {
                    let value = event_target_value(&ev);
                    text.set(value.clone());
                    let timeout = Timeout::new(SEARCH_DEBOUNCE_MS, move || {
                        table.set_term(name, value);
                    });
                    pending.set_value(Some(timeout));
                }
            />
        </div>
    }
}

/// Dropdown for an `Exact` filter.
///
/// Options are the fixed list when given, otherwise the distinct values of
/// the filtered field in the loaded rows.
#[component]
pub fn SelectFilter<R>(
    table: TableState<R>,
    name: &'static str,
    #[prop(optional)] options: Option<&'static [&'static str]>,
) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let field = table.view.with_untracked(|v| {
        v.specs().iter().find(|s| s.name == name).and_then(|s| match &s.kind {
            FilterKind::Exact { field, .. } => Some(*field),
            _ => None,
        })
    });

    let option_list = move || -> Vec<String> {
        match (options, field) {
            (Some(fixed), _) => fixed.iter().map(|s| s.to_string()).collect(),
            (None, Some(field)) => table.view.with(|v| v.distinct_values(field)),
            (None, None) => Vec::new(),
        }
    };

    let selected = move || {
        table.view.with(|v| match v.filter_value(name) {
            Some(FilterValue::Term(term)) => term.clone(),
            _ => String::new(),
        })
    };

    view! {
        <div class="form__group">
            <select
                class="form__select"
                on:change=move |ev| table.set_term(name, event_target_value(&ev))
                prop:value=selected
            >
                <option value="">{spec_label(table, name)}</option>
                {move || {
                    let current = selected();
                    option_list()
                        .into_iter()
                        .map(|option| {
                            let is_selected = option == current;
                            view! {
                                <option value=option.clone() selected=is_selected>
                                    {option.clone()}
                                </option>
                            }
                        })
                        .collect_view()
                }}
            </select>
        </div>
    }
}

/// From / to date inputs for a `DateRange` filter.
#[component]
pub fn DateRangeFilter<R>(table: TableState<R>, name: &'static str) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let from = RwSignal::new(String::new());
    let to = RwSignal::new(String::new());

    let apply = move || {
        let value = FilterValue::range_from_inputs(&from.get_untracked(), &to.get_untracked());
        table.set_filter(name, value);
    };

    Effect::new(move |_| {
        let active = table.view.with(|v| v.filter_value(name).is_some());
        if !active {
            if !from.get_untracked().is_empty() {
                from.set(String::new());
            }
            if !to.get_untracked().is_empty() {
                to.set(String::new());
            }
        }
    });

    view! {
        <div class="form__group form__group--range">
            <label class="form__label">{spec_label(table, name)}</label>
            <input
                type="date"
                class="form__input"
                prop:value=move || from.get()
                on:change=move |ev| {
                    from.set(event_target_value(&ev));
                    apply();
                }
            />
            <span>"-"</span>
            <input
                type="date"
                class="form__input"
                prop:value=move || to.get()
                on:change=move |ev| {
                    to.set(event_target_value(&ev));
                    apply();
                }
            />
        </div>
    }
}

/// Chips for the active filters plus "Clear all".
#[component]
pub fn ActiveFilterTags<R>(table: TableState<R>) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let tags = move || {
        table.view.with(|v| {
            v.specs()
                .iter()
                .filter_map(|spec| {
                    v.filter_value(spec.name)
                        .map(|value| (spec.name, format!("{}: {}", spec.label, value.summary())))
                })
                .collect::<Vec<_>>()
        })
    };

    view! {
        <Show when=move || table.view.with(|v| v.has_active_filters())>
            <div class="filter-tags">
                {move || tags().into_iter().map(|(name, label)| view! {
                    <FilterTag
                        label=label
                        on_remove=Callback::new(move |_| {
                            table.view.maybe_update(|v| v.clear_filter(name));
                        })
                    />
                }).collect_view()}
                <button class="button button--ghost" on:click=move |_| table.clear_filters()>
                    "Clear all"
                </button>
            </div>
        </Show>
    }
}

/// Count of active filters for the panel badge.
pub fn active_filter_count<R>(table: TableState<R>) -> Signal<usize>
where
    R: Record + Send + Sync + 'static,
{
    Signal::derive(move || {
        table.view.with(|v| {
            v.specs()
                .iter()
                .filter(|s| v.filter_value(s.name).is_some())
                .count()
        })
    })
}
