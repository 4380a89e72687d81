use crate::domain::a002_lead::api::{fetch_leads, update_lead};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{
    active_filter_count, ActiveFilterTags, DateRangeFilter, SelectFilter,
};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::{use_table_state, TableState};
use contracts::domain::a002_lead::aggregate::{filter_specs, Lead, LEAD_STATUSES};
use contracts::domain::common::Record;
use contracts::shared::action::ActionKind;
use contracts::shared::date_utils::format_readable;
use contracts::shared::table_view::PagePolicy;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn LeadList() -> impl IntoView {
    let table = use_table_state::<Lead>(filter_specs(), PagePolicy::ResetToFirst);
    let filters_expanded = RwSignal::new(true);

    let reload = move || table.load(fetch_leads());
    reload();

    view! {
        <PageFrame page_id="a002_lead--list" category=PAGE_CAT_LIST>
            <PageHeader title=Lead::list_name() subtitle=table.count_label()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| reload()
                    disabled=Signal::derive(move || table.is_loading())
                >
                    {icon("refresh")}
                    " Refresh"
                </Button>
            </PageHeader>

            <div class="page__content">
                <FilterPanel
                    is_expanded=filters_expanded
                    active_filters_count=active_filter_count(table)
                    pagination_controls=view! { <PaginationControls table=table /> }.into_any()
                    filter_tags=view! { <ActiveFilterTags table=table /> }.into_any()
                >
                    <Flex gap=FlexGap::Small align=FlexAlign::End>
                        <SelectFilter table=table name="program" />
                        <SelectFilter table=table name="city" />
                        <SelectFilter table=table name="state" />
                        <SelectFilter table=table name="status" />
                        <DateRangeFilter table=table name="submitted" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1400px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"State"</TableHeaderCell>
                                <TableHeaderCell>"City"</TableHeaderCell>
                                <TableHeaderCell>"Program"</TableHeaderCell>
                                <TableHeaderCell>"Query"</TableHeaderCell>
                                <TableHeaderCell>"Submitted At"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Comment"</TableHeaderCell>
                                <TableHeaderCell>"Action"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || table.page_keys()
                                key=|(serial, id)| format!("{}:{}", serial, id)
                                children=move |(serial, id)| view! {
                                    <LeadRow table=table serial=serial row_key=id />
                                }
                            />
                            <TableStatusRow table=table colspan=12 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

/// One lead with editable status and comment.
#[component]
fn LeadRow(table: TableState<Lead>, serial: usize, row_key: String) -> impl IntoView {
    let row_key = StoredValue::new(row_key);
    let read = move |f: fn(&Lead) -> String| {
        row_key
            .with_value(|k| table.row(k, f))
            .unwrap_or_default()
    };
    let is_ask_me = move || row_key.with_value(|k| table.row(k, Lead::is_ask_me)).unwrap_or(false);
    let busy = move || row_key.with_value(|k| table.is_busy(k, ActionKind::UpdateLead));

    // Status options: the known workflow plus whatever the lead already has
    let status_options = move || {
        let current = read(|l| l.status.clone());
        let mut options: Vec<String> = LEAD_STATUSES.iter().map(|s| s.to_string()).collect();
        if !current.is_empty() && !options.contains(&current) {
            options.insert(0, current);
        }
        options
    };

    let on_update = move |_| {
        let key = row_key.get_value();
        table.dispatch(
            &key,
            ActionKind::UpdateLead,
            |lead: &Lead| {
                let body = lead.to_update_dto();
                Ok(async move { update_lead(&body).await })
            },
            |_lead: &mut Lead, ()| Ok("Status updated successfully!".to_string()),
        );
    };

    view! {
        <TableRow>
            <TableCell>{serial}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|l| l.name.clone())}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|l| l.email.clone())}</TableCellLayout>
            </TableCell>
            <TableCell>{move || read(|l| l.phone.clone())}</TableCell>
            <TableCell>{move || read(|l| l.state.clone())}</TableCell>
            <TableCell>{move || read(|l| l.city.clone())}</TableCell>
            <TableCell>{move || read(|l| l.program.clone())}</TableCell>
            <TableCell>
                <span class:text-danger=is_ask_me>{move || read(|l| l.query.clone())}</span>
            </TableCell>
            <TableCell>{move || format_readable(&read(|l| l.submitted_at.clone()))}</TableCell>
            <TableCell>
                <select
                    class="form__select"
                    prop:value=move || read(|l| l.status.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        row_key.with_value(|k| table.edit(k, |l| l.status = value));
                    }
                >
                    <option value="">"-"</option>
                    {move || {
                        let current = read(|l| l.status.clone());
                        status_options()
                            .into_iter()
                            .map(|status| {
                                let selected = status == current;
                                view! {
                                    <option value=status.clone() selected=selected>{status.clone()}</option>
                                }
                            })
                            .collect_view()
                    }}
                </select>
            </TableCell>
            <TableCell>
                <input
                    type="text"
                    class="form__input"
                    placeholder="Enter comment"
                    prop:value=move || read(|l| l.sales_person_comment.clone())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        row_key.with_value(|k| table.edit(k, |l| l.sales_person_comment = value));
                    }
                />
            </TableCell>
            <TableCell>
                <button
                    class="button button--primary button--small"
                    disabled=busy
                    on:click=on_update
                >
                    {move || {
                        if busy() {
                            ActionKind::UpdateLead.pending_label()
                        } else {
                            ActionKind::UpdateLead.label()
                        }
                    }}
                </button>
            </TableCell>
        </TableRow>
    }
}
