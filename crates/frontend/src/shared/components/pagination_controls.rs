use crate::shared::icons::icon;
use crate::shared::table_state::TableState;
use contracts::domain::common::Record;
use contracts::shared::table_view::{PageItem, PageNav};
use leptos::prelude::*;

/// PaginationControls - first / prev / numbered window / next / last + page size
///
/// Page numbers are 1-based. The numbered window is `2 * radius + 1` buttons
/// around the current page with anchors to the first and last page.
#[component]
pub fn PaginationControls<R>(table: TableState<R>) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let view_signal = table.view;
    let radius = table.window_radius;

    let page = move || view_signal.with(|v| v.paginator().page());
    let has_prev = move || view_signal.with(|v| v.paginator().has_prev());
    let has_next = move || view_signal.with(|v| v.paginator().has_next());
    let page_size = move || view_signal.with(|v| v.paginator().page_size());

    view! {
        <div class="pagination-controls">
            <button
                class="pagination-btn"
                on:click=move |_| table.navigate(PageNav::First)
                disabled=move || !has_prev()
                title="First page"
            >
                {icon("chevrons-left")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| table.navigate(PageNav::Prev)
                disabled=move || !has_prev()
                title="Previous page"
            >
                {icon("chevron-left")}
            </button>

            {move || {
                let current = page();
                view_signal
                    .with(|v| v.paginator().window(radius))
                    .into_iter()
                    .map(|item| match item {
                        PageItem::Page(n) => view! {
                            <button
                                class="pagination-btn pagination-btn--number"
                                class:pagination-btn--active={n == current}
                                on:click=move |_| table.navigate(PageNav::To(n))
                            >
                                {n.to_string()}
                            </button>
                        }
                        .into_any(),
                        PageItem::Gap => view! { <span class="pagination-gap">"…"</span> }.into_any(),
                    })
                    .collect_view()
            }}

            <button
                class="pagination-btn"
                on:click=move |_| table.navigate(PageNav::Next)
                disabled=move || !has_next()
                title="Next page"
            >
                {icon("chevron-right")}
            </button>
            <button
                class="pagination-btn"
                on:click=move |_| table.navigate(PageNav::Last)
                disabled=move || !has_next()
                title="Last page"
            >
                {icon("chevrons-right")}
            </button>

            <span class="pagination-info">
                {move || view_signal.with(|v| {
                    let p = v.paginator();
                    format!("Page {} of {} ({})", p.page(), p.display_total(), v.filtered_len())
                })}
            </span>

            <select
                class="page-size-select"
                on:change=move |ev| {
                    if let Ok(size) = event_target_value(&ev).parse::<usize>() {
                        table.set_page_size(size);
                    }
                }
                prop:value=move || page_size().to_string()
            >
                {table.page_size_options.get_value().into_iter().map(|size| {
                    view! {
                        <option value=size.to_string() selected=move || page_size() == size>
                            {size.to_string()}
                        </option>
                    }
                }).collect_view()}
            </select>
        </div>
    }
}
