use crate::domain::a001_user::api::fetch_users;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{active_filter_count, ActiveFilterTags, SearchFilter};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table_state;
use contracts::domain::a001_user::aggregate::{filter_specs, RegisteredUser};
use contracts::domain::common::Record;
use contracts::shared::table_view::PagePolicy;
use leptos::prelude::*;
use thaw::*;

#[component]
#[allow(non_snake_case)]
pub fn UserList() -> impl IntoView {
    let table = use_table_state::<RegisteredUser>(filter_specs(), PagePolicy::ResetToFirst);
    let filters_expanded = RwSignal::new(true);

    let reload = move || table.load(fetch_users());
    reload();

    view! {
        <PageFrame page_id="a001_user--list" category=PAGE_CAT_LIST>
            <PageHeader title=RegisteredUser::list_name() subtitle=table.count_label()>
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
                    <SearchFilter table=table name="search" />
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Phone"</TableHeaderCell>
                                <TableHeaderCell>"City"</TableHeaderCell>
                                <TableHeaderCell>"State"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.view.with(|v| {
                                v.page_rows()
                                    .into_iter()
                                    .map(|(serial, user)| {
                                        let name = user.name.clone();
                                        let email = user.email.clone();
                                        let phone = user.display_phone().to_string();
                                        let city = user.city.clone();
                                        let state = user.state.clone();
                                        view! {
                                        <TableRow>
                                            <TableCell>{serial}</TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{name}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{email}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>{phone}</TableCell>
                                            <TableCell>{city}</TableCell>
                                            <TableCell>{state}</TableCell>
                                        </TableRow>
                                    }})
                                    .collect_view()
                            })}
                            <TableStatusRow table=table colspan=6 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
