use crate::domain::a007_meeting::api::{fetch_meetings, fetch_zoom_timings};
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::filter_panel::FilterPanel;
use crate::shared::components::page_header::PageHeader;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::table_filters::{active_filter_count, ActiveFilterTags, SearchFilter};
use crate::shared::components::table_status::TableStatusRow;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_LIST};
use crate::shared::table_state::use_table_state;
use contracts::domain::a007_meeting::aggregate::{
    filter_specs, Meeting, Participant, ZoomLookupRequest,
};
use contracts::domain::common::Record;
use contracts::shared::table_view::PagePolicy;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const COPIED_RESET_MS: u32 = 2000;

#[component]
#[allow(non_snake_case)]
pub fn MeetingList() -> impl IntoView {
    let table = use_table_state::<Meeting>(filter_specs(), PagePolicy::ResetToFirst);
    let filters_expanded = RwSignal::new(true);
    let copied = RwSignal::new(None::<String>);
    let participants = RwSignal::new(None::<(String, Vec<Participant>)>);

    let reload = move || {
        table.load_then(fetch_meetings(), move |ticket, meetings| {
            if let Some(request) = ZoomLookupRequest::for_meetings(meetings) {
                table.enrich(
                    ticket,
                    fetch_zoom_timings(request),
                    "Failed to load meeting data",
                    |meeting, timings| meeting.apply_zoom_timing(timings),
                );
            }
        })
    };
    reload();

    let copy_link = move |link: String, what: &'static str| {
        let toasts = table.toasts();
        let copied_link = link.clone();
        copy_to_clipboard_with_callback(&link, move |ok| {
            if !ok {
                toasts.error(format!("Could not copy the {} link", what));
                return;
            }
            copied.set(Some(copied_link.clone()));
            toasts.success(format!("{} link copied", what));
            spawn_local(async move {
                TimeoutFuture::new(COPIED_RESET_MS).await;
                // A later copy owns the marker
                copied.maybe_update(|current| {
                    if current.as_deref() == Some(copied_link.as_str()) {
                        *current = None;
                        true
                    } else {
                        false
                    }
                });
            });
        });
    };
    let copy_label = move |link: &str| {
        let link = link.to_string();
        move || {
            if copied.with(|c| c.as_deref() == Some(link.as_str())) {
                "Copied"
            } else {
                "Copy"
            }
        }
    };

    view! {
        <PageFrame page_id="a007_meeting--list" category=PAGE_CAT_LIST>
            <PageHeader title=Meeting::list_name() subtitle=table.count_label()>
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
                        <SearchFilter table=table name="title" />
                        <SearchFilter table=table name="course" />
                        <SearchFilter table=table name="batch" />
                        <SearchFilter table=table name="date" />
                    </Flex>
                </FilterPanel>

                {move || participants.get().map(|(title, people)| view! {
                    <div class="details-panel">
                        <div class="details-panel__header">
                            <h3 class="details-panel__title">{format!("Participants: {}", title)}</h3>
                            <button class="button button--ghost" on:click=move |_| participants.set(None)>
                                {icon("x")}
                            </button>
                        </div>
                        <ul class="details-panel__list">
                            {people
                                .into_iter()
                                .map(|p| view! {
                                    <li>
                                        <span class="details-panel__name">{p.name}</span>
                                        " "
                                        <span class="text-muted">{p.email}</span>
                                    </li>
                                })
                                .collect_view()}
                        </ul>
                    </div>
                })}

                <div class="table-wrapper">
                    <Table attr:style="width: 100%; min-width: 1200px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell>"Title"</TableHeaderCell>
                                <TableHeaderCell>"Course"</TableHeaderCell>
                                <TableHeaderCell>"Batch No."</TableHeaderCell>
                                <TableHeaderCell>"Date & Time"</TableHeaderCell>
                                <TableHeaderCell>"Duration"</TableHeaderCell>
                                <TableHeaderCell>"Zoom Link (Student)"</TableHeaderCell>
                                <TableHeaderCell>"Host Link (Trainer)"</TableHeaderCell>
                                <TableHeaderCell>"Participants"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            {move || table.view.with(|v| {
                                v.page_rows()
                                    .into_iter()
                                    .map(|(_, meeting)| {
                                        let join = meeting.zoomlink.clone();
                                        let host = meeting.host_link.clone();
                                        let title = meeting.meeting_title.clone();
                                        let people = meeting.course_participants.clone();
                                        let count = meeting.participant_count();
                                        let meeting_title = meeting.meeting_title.clone();
                                        let course_name = meeting.course_name.clone();
                                        let batch_number = meeting.batch_number.clone();
                                        let display_time = meeting.display_time();
                                        let duration = meeting.duration.clone();
                                        view! {
                                            <TableRow>
                                                <TableCell>
                                                    <TableCellLayout truncate=true>{meeting_title}</TableCellLayout>
                                                </TableCell>
                                                <TableCell>{course_name}</TableCell>
                                                <TableCell>{batch_number}</TableCell>
                                                <TableCell>{display_time}</TableCell>
                                                <TableCell>{duration}</TableCell>
                                                <TableCell>
                                                    <div class="table__actions">
                                                        <a class="table__link" href=join.clone() target="_blank" rel="noopener noreferrer">
                                                            "Share with Students"
                                                        </a>
                                                        <button
                                                            class="button button--ghost button--small"
                                                            on:click={
                                                                let join = join.clone();
                                                                move |_| copy_link(join.clone(), "Join")
                                                            }
                                                        >
                                                            {icon("copy")}
                                                            {copy_label(&join)}
                                                        </button>
                                                    </div>
                                                </TableCell>
                                                <TableCell>
                                                    {if host.trim().is_empty() {
                                                        view! { <span class="text-muted">"-"</span> }.into_any()
                                                    } else {
                                                        view! {
                                                            <div class="table__actions">
                                                                <a class="table__link" href=host.clone() target="_blank" rel="noopener noreferrer">
                                                                    "Start as Trainer"
                                                                </a>
                                                                <button
                                                                    class="button button--ghost button--small"
                                                                    on:click={
                                                                        let host = host.clone();
                                                                        move |_| copy_link(host.clone(), "Host")
                                                                    }
                                                                >
                                                                    {icon("copy")}
                                                                    {copy_label(&host)}
                                                                </button>
                                                            </div>
                                                        }.into_any()
                                                    }}
                                                </TableCell>
                                                <TableCell>
                                                    {if count == 0 {
                                                        view! { <span class="text-muted">"No participants"</span> }.into_any()
                                                    } else {
                                                        view! {
                                                            <button
                                                                class="button button--ghost button--small"
                                                                title="View participants"
                                                                on:click=move |_| participants.set(Some((title.clone(), people.clone())))
                                                            >
                                                                {icon("users")}
                                                                {format!(" {} participant(s)", count)}
                                                            </button>
                                                        }.into_any()
                                                    }}
                                                </TableCell>
                                            </TableRow>
                                        }
                                    })
                                    .collect_view()
                            })}
                            <TableStatusRow table=table colspan=8 />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}
