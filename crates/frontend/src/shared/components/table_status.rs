use crate::shared::table_state::TableState;
use contracts::domain::common::Record;
use leptos::prelude::*;

/// Placeholder row for an empty page: "Loading..." during the first load,
/// "No records" otherwise.
#[component]
pub fn TableStatusRow<R>(table: TableState<R>, colspan: u32) -> impl IntoView
where
    R: Record + Send + Sync + 'static,
{
    let is_empty = move || table.view.with(|v| v.filtered_len() == 0);
    let text = move || {
        table.view.with(|v| {
            if v.is_loading() && v.raw_len() == 0 {
                "Loading..."
            } else {
                "No records"
            }
        })
    };

    view! {
        <Show when=is_empty>
            <tr class="table__row table__row--empty">
                <td class="table__cell table__cell--empty" colspan=colspan>{text}</td>
            </tr>
        </Show>
    }
}
