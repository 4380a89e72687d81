use crate::domain::a004_student::api::{
    certificate_pdf_url, fetch_students, generate_certificate, send_certificate,
};
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
use contracts::domain::a004_student::aggregate::{
    filter_specs, GenerateCertificateResponse, Student, DURATION_OPTIONS, YEAR_OPTIONS,
};
use contracts::shared::action::ActionKind;
use contracts::shared::error::ApiError;
use contracts::shared::table_view::PagePolicy;
use leptos::prelude::*;
use thaw::*;

/// Course completion certificates: generate, preview and mail.
#[component]
#[allow(non_snake_case)]
pub fn CertificateList() -> impl IntoView {
    let table = use_table_state::<Student>(filter_specs(), PagePolicy::ResetToFirst);
    let filters_expanded = RwSignal::new(false);

    let reload = move || table.load(fetch_students());
    reload();

    view! {
        <PageFrame page_id="a004_student_certificate--list" category=PAGE_CAT_LIST>
            <PageHeader title="Certificates" subtitle=table.count_label()>
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
                    <Table attr:style="width: 100%; min-width: 1300px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"#"</TableHeaderCell>
                                <TableHeaderCell>"Name"</TableHeaderCell>
                                <TableHeaderCell>"Email"</TableHeaderCell>
                                <TableHeaderCell>"Course"</TableHeaderCell>
                                <TableHeaderCell>"Student ID / Score"</TableHeaderCell>
                                <TableHeaderCell>"Certificate"</TableHeaderCell>
                                <TableHeaderCell>"Academic Year"</TableHeaderCell>
                                <TableHeaderCell>"Duration"</TableHeaderCell>
                                <TableHeaderCell>"Actions"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || table.page_keys()
                                key=|(serial, uid)| format!("{}:{}", serial, uid)
                                children=move |(serial, uid)| view! {
                                    <CertificateRow table=table serial=serial row_key=uid />
                                }
                            />
                            <TableStatusRow table=table colspan=9 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

#[component]
fn CertificateRow(table: TableState<Student>, serial: usize, row_key: String) -> impl IntoView {
    let row_key = StoredValue::new(row_key);
    let read = move |f: fn(&Student) -> String| {
        row_key
            .with_value(|k| table.row(k, f))
            .unwrap_or_default()
    };
    let edit = move |patch: Box<dyn FnOnce(&mut Student)>| {
        row_key.with_value(|k| table.edit(k, patch));
    };
    let generating = move || row_key.with_value(|k| table.is_busy(k, ActionKind::GenerateCertificate));
    let sending = move || row_key.with_value(|k| table.is_busy(k, ActionKind::SendCertificate));

    let on_generate = move |_| {
        let key = row_key.get_value();
        table.dispatch(
            &key,
            ActionKind::GenerateCertificate,
            |student: &Student| {
                let request = student.certificate_request()?;
                Ok(async move { generate_certificate(&request).await })
            },
            |student: &mut Student, response: GenerateCertificateResponse| {
                if let Some(url) = response.url.clone() {
                    student.certificate_url = url;
                }
                // The returned URL is kept even when the server reports a duplicate
                if response.already_generated() {
                    return Err(ApiError::Business(response.message.unwrap_or_default()));
                }
                Ok(format!("Certificate generated for {}", student.name))
            },
        );
    };

    let on_send = move |_| {
        let key = row_key.get_value();
        table.dispatch(
            &key,
            ActionKind::SendCertificate,
            |student: &Student| {
                let request = student.send_certificate_request();
                Ok(async move { send_certificate(&request).await })
            },
            |student: &mut Student, ()| Ok(format!("Certificate sent to {}", student.name)),
        );
    };

    let has_certificate = move || row_key.with_value(|k| table.row(k, Student::has_certificate)).unwrap_or(false);

    view! {
        <TableRow>
            <TableCell>{serial}</TableCell>
            <TableCell>{move || read(|s| s.name.clone())}</TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|s| s.email.clone())}</TableCellLayout>
            </TableCell>
            <TableCell>
                <TableCellLayout truncate=true>{move || read(|s| s.course_label().to_string())}</TableCellLayout>
            </TableCell>
            <TableCell>
                <div class="table__stack">
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Enter ID"
                        required
                        prop:value=move || read(|s| s.student_id.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(Box::new(move |s| s.student_id = value));
                        }
                    />
                    <input
                        type="text"
                        class="form__input"
                        placeholder="Enter Score"
                        prop:value=move || read(|s| s.score.clone())
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            edit(Box::new(move |s| s.score = value));
                        }
                    />
                </div>
            </TableCell>
            <TableCell>
                <Show
                    when=has_certificate
                    fallback=|| view! { <span class="text-muted">"Not Generated"</span> }
                >
                    <a
                        class="table__link"
                        href=move || certificate_pdf_url(&read(|s| s.certificate_url.clone()))
                        target="_blank"
                        rel="noopener noreferrer"
                    >
                        {icon("file-text")}
                        " View PDF"
                    </a>
                </Show>
            </TableCell>
            <TableCell>
                <select
                    class="form__select"
                    prop:value=move || read(|s| s.academic_year.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        edit(Box::new(move |s| s.academic_year = value));
                    }
                >
                    {YEAR_OPTIONS
                        .iter()
                        .map(|year| view! { <option value=*year>{*year}</option> })
                        .collect_view()}
                </select>
            </TableCell>
            <TableCell>
                <select
                    class="form__select"
                    prop:value=move || read(|s| s.duration.clone())
                    on:change=move |ev| {
                        let value = event_target_value(&ev);
                        edit(Box::new(move |s| s.duration = value));
                    }
                >
                    {DURATION_OPTIONS
                        .iter()
                        .map(|duration| view! { <option value=*duration>{*duration}</option> })
                        .collect_view()}
                </select>
            </TableCell>
            <TableCell>
                <div class="table__actions">
                    <button
                        class="button button--primary button--small"
                        disabled=generating
                        on:click=on_generate
                    >
                        {move || {
                            if generating() {
                                ActionKind::GenerateCertificate.pending_label()
                            } else {
                                ActionKind::GenerateCertificate.label()
                            }
                        }}
                    </button>
                    <button
                        class="button button--secondary button--small"
                        disabled=sending
                        on:click=on_send
                    >
                        {icon("mail")}
                        {move || {
                            if sending() {
                                ActionKind::SendCertificate.pending_label()
                            } else {
                                ActionKind::SendCertificate.label()
                            }
                        }}
                    </button>
                </div>
            </TableCell>
        </TableRow>
    }
}
