use crate::domain::a004_student::api::{fetch_students, send_password};
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{
    active_filter_count, ActiveFilterTags, SearchFilter, SelectFilter,
};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::{use_table_state, TableState};
use contracts::domain::a004_student::aggregate::{filter_specs, Student};
use contracts::domain::a004_student::password::generate_password;
use contracts::shared::action::ActionKind;
use contracts::shared::table_view::PagePolicy;
use leptos::prelude::*;
use thaw::*;

/// Student login passwords: generate, edit and mail them.
#[component]
#[allow(non_snake_case)]
pub fn StudentPasswordList() -> impl IntoView {
    let table = use_table_state::<Student>(filter_specs(), PagePolicy::ResetToFirst);
    let filters_expanded = RwSignal::new(false);

    let reload = move || table.load(fetch_students());
    reload();

    view! {
        <PageFrame page_id="a004_student_password--list" category=PAGE_CAT_LIST>
            <PageHeader title="Student Passwords" subtitle=table.count_label()>
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
                        <SearchFilter table=table name="search" />
                        <SelectFilter table=table name="course" />
                    </Flex>
                </FilterPanel>

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Student UID"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Password"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || table.page_keys()
                                key=|(serial, uid)| format!("{}:{}", serial, uid)
                                children=move |(_, uid)| view! {
                                    <PasswordRow table=table row_key=uid />
                                }
                            />
                            <TableStatusRow table=table colspan=5 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn PasswordRow(table: TableState<Student>, row_key: String) -> impl IntoView {
    let row_key = StoredValue::new(row_key);
    let read = move |f: fn(&Student) -> String| {
        row_key
            .with_value(|k| table.row(k, f))
            .unwrap_or_default()
    };
    let sending = move || row_key.with_value(|k| table.is_busy(k, ActionKind::SendCredentials));

    let on_generate = move |_| {
        let password = generate_password(&mut rand::thread_rng());
        row_key.with_value(|k| table.edit(k, |s| s.draft_password = password));
    };

    let on_send = move |_| {
        let key = row_key.get_value();
        table.dispatch(
            &key,
            ActionKind::SendCredentials,
            |student: &Student| {
                let request = student.password_request()?;
                Ok(async move { send_password(&request).await })
            },
            |student: &mut Student, ()| Ok(format!("Password sent to {}", student.email)),
        );
    };

    view! {
        <TableRow>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|s| s.user_uid.clone())}</TableCellLayout>
            </TableCell>
            <TableCell>{move || read(|s| s.name.clone())}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|s| s.email.clone())}</TableCellLayout>
            </TableCell>
            <TableCell>
                <input
                    type="text"
                    class="form__input"
                    prop:value=move || read(|s| s.credentials_password().unwrap_or_default().to_string())
                    on:input=move |ev| {
                        let value = event_target_value(&ev);
                        row_key.with_value(|k| table.edit(k, |s| s.draft_password = value));
                    }
                />
            </TableCell>
            <TableCell>
                <div class="table__actions">
                    <button class="button button--secondary button--small" on:click=on_generate>
                        "Generate"
                    </button>
                    <button
                        class="button button--primary button--small"
                        disabled=sending
                        on:click=on_send
                    >
                        {icon("mail")}
                        {move || {
                            if sending() {
                                ActionKind::SendCredentials.pending_label()
                            } else {
                                ActionKind::SendCredentials.label()
                            }
                        }}
                    </button>
                </div>
            </TableCell>
        </TableRow>
    }
}
