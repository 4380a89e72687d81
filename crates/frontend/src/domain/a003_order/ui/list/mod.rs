use crate::domain::a003_order::api::fetch_orders;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{
    active_filter_count, ActiveFilterTags, DateRangeFilter, SearchFilter, SelectFilter,
};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table_state;
use contracts::domain::a003_order::aggregate::{export_columns, filter_specs, Order, StatusTone};
use contracts::domain::common::Record;
use contracts::shared::date_utils::format_readable;
use contracts::shared::table_view::{ExportScope, PagePolicy};
use leptos::prelude::*;
use thaw::*;

fn tone_class(tone: StatusTone) -> &'static str {
    match tone {
        StatusTone::Success => "badge badge--success",
        StatusTone::Warning => "badge badge--warning",
        StatusTone::Danger => "badge badge--error",
    }
}

fn format_money(value: f64) -> String {
    format!("{:.2}", value)
}

#[component]
#[allow(non_snake_case)]
pub fn OrderList() -> impl IntoView {
    // Orders keep the current page when filters change
    let table = use_table_state::<Order>(filter_specs(), PagePolicy::PreserveCurrent);
    let filters_expanded = RwSignal::new(true);
    let columns = StoredValue::new(export_columns());

    let reload = move || table.load(fetch_orders());
    reload();

    let export = move |scope: ExportScope| {
        columns.with_value(|cols| table.export(scope, cols));
    };
    let export_disabled = Signal::derive(move || {
        table.exporting.get() || table.view.with(|v| v.raw_len() == 0)
    });

    view! {
        <PageFrame page_id="a003_order--list" category=PAGE_CAT_LIST>
            <PageHeader title=Order::list_name() subtitle=table.count_label()>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| export(ExportScope::Filtered)
                    disabled=export_disabled
                >
                    {icon("download")}
                    " Export filtered"
                </Button>
                <Button
                    appearance=ButtonAppearance::Secondary
                    on_click=move |_| export(ExportScope::All)
                    disabled=export_disabled
                >
                    {icon("download")}
                    " Export all"
                </Button>
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
                        <div style="flex: 1; max-width: 320px;">
                            <SearchFilter table=table name="search" />
                        </div>
                        <SelectFilter table=table name="course" />
                        <SelectFilter table=table name="payment_type" />
                        <SelectFilter table=table name="status" />
                        <DateRangeFilter table=table name="created" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1200px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Course"</TableHeaderCell>
                                <TableHeaderCell>"Amount Received"</TableHeaderCell>
                                <TableHeaderCell>"Total Amount"</TableHeaderCell>
                                <TableHeaderCell>"Pending"</TableHeaderCell>
                                <TableHeaderCell>"Payment Type"</TableHeaderCell>
                                <TableHeaderCell>"Status"</TableHeaderCell>
                                <TableHeaderCell>"Created At"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.view.with(|v| {
                                v.page_rows()
                                    .into_iter()
                                    .map(|(serial, order)| {
                                        let name = order.name.clone();
                                        let email = order.email.clone();
                                        let course = order.course_label().to_string();
                                        let received = format_money(order.received());
                                        let total = format_money(order.total());
                                        let pending = format_money(order.pending_amount());
                                        let payment_type = order.payment_type.clone();
                                        let status_class = tone_class(order.status_tone());
                                        let status = order.status.clone();
                                        let created_at = format_readable(&order.created_at);
                                        view! {
                                        <TableRow>
                                            <TableCell>{serial}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{course}</TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell--number">{received}</TableCell>
                                            <TableCell class="table__cell--number">{total}</TableCell>
                                            <TableCell class="table__cell--number">{pending}</TableCell>
                                            <TableCell>{payment_type}</TableCell>
                                            <TableCell>
                                                <span class=status_class>{status}</span>
                                            </TableCell>
                                            <TableCell>{created_at}</TableCell>
                                        </TableRow>
                                    }})
                                    .collect_view()
                            })}
                            <TableStatusRow table=table colspan=10 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
