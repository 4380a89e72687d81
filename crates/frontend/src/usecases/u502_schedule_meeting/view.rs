use super::api;
use crate::shared::clipboard::copy_to_clipboard_with_callback;
use crate::shared::components::page_header::PageHeader;
use crate::shared::icons::icon;
use crate::shared::page_frame::{PageFrame, PAGE_CAT_USECASE};
use crate::shared::toast::{use_toasts, Toasts};
use chrono::Local;
use contracts::domain::a006_course::aggregate::{course_title, Course};
use contracts::shared::action::{ActionState, Lifetime};
use contracts::shared::error::ApiError;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u502_schedule_meeting::{
    MeetingDraft, ScheduleMeeting, StudentByCourse, ZoomLink, BATCH_OPTIONS, TIME_ZONES,
};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

const GENERATE_FAILED: &str = "Failed to generate Zoom link";
const PUBLISH_FAILED: &str = "Failed to publish meeting";

fn course_name(courses: &[Course], draft: &MeetingDraft) -> String {
    draft
        .course_id
        .as_deref()
        .and_then(|id| course_title(courses, id))
        .unwrap_or("Unknown Course")
        .to_string()
}

#[component]
#[allow(non_snake_case)]
pub fn ScheduleMeetingView() -> impl IntoView {
    let toasts = use_toasts();
    let courses = RwSignal::new(Vec::<Course>::new());
    let students = RwSignal::new(Vec::<StudentByCourse>::new());
    let students_loading = RwSignal::new(false);
    let draft = RwSignal::new(MeetingDraft::new(Local::now().naive_local()));
    let link_state = RwSignal::new(ActionState::<ZoomLink>::Idle);
    let publish_state = RwSignal::new(ActionState::<()>::Idle);

    let lifetime = Lifetime::new();
    let on_unmount = lifetime.clone();
    on_cleanup(move || on_unmount.cancel());
    let lifetime = StoredValue::new(lifetime);

    {
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = api::fetch_courses().await;
            if !lifetime.is_active() {
                return;
            }
            match result {
                Ok(list) => {
                    log::info!("Loaded {} courses", list.len());
                    courses.set(list);
                }
                Err(err) => {
                    log::error!("Failed to load courses: {}", err);
                    toasts.api_error(&err, "Failed to load courses");
                }
            }
        });
    }

    let on_course_change = move |ev: leptos::ev::Event| {
        let value = event_target_value(&ev);
        let course_id = (!value.is_empty()).then_some(value);
        draft.update(|d| d.select_course(course_id.clone()));
        students.set(Vec::new());

        let Some(course_id) = course_id else {
            students_loading.set(false);
            return;
        };
        students_loading.set(true);
        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = api::fetch_students_by_course(&course_id).await;
            if !lifetime.is_active() {
                return;
            }
            // The course may have changed while this request was in flight
            let current = draft.with_untracked(|d| d.course_id.as_deref() == Some(course_id.as_str()));
            if !current {
                log::debug!("Students of course {} arrived late, dropped", course_id);
                return;
            }
            students_loading.set(false);
            match result {
                Ok(list) => {
                    log::info!("Course {}: {} students", course_id, list.len());
                    students.set(list);
                }
                Err(err) => {
                    log::error!("Failed to load students of course {}: {}", course_id, err);
                    toasts.api_error(&err, "Failed to load students");
                }
            }
        });
    };

    let generate_link = move |_| {
        let now = Local::now().naive_local();
        let prepared = draft.with_untracked(|d| {
            let name = courses.with_untracked(|c| course_name(c, d));
            students.with_untracked(|s| d.link_request(&name, s, now))
        });
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                toasts.api_error(&err, GENERATE_FAILED);
                return;
            }
        };
        if !link_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = api::generate_zoom_link(&request).await.and_then(|link| {
                if link.is_generated() {
                    Ok(link)
                } else {
                    Err(ApiError::Business(GENERATE_FAILED.to_string()))
                }
            });
            if !lifetime.is_active() {
                return;
            }
            link_state.update(|s| s.finish(result.clone().map_err(|e| e.to_string())));
            match result {
                Ok(link) => {
                    log::info!("Zoom meeting {} created", link.meeting_id);
                    toasts.success("Zoom link generated successfully!");
                }
                Err(err) => {
                    log::error!("Zoom link generation failed: {}", err);
                    toasts.api_error(&err, GENERATE_FAILED);
                }
            }
        });
    };

    let publish = move |_| {
        let link = link_state.with_untracked(|s| s.value().cloned().unwrap_or_default());
        let prepared = draft.with_untracked(|d| {
            let name = courses.with_untracked(|c| course_name(c, d));
            students.with_untracked(|s| d.publish_request(&name, s, &link))
        });
        let request = match prepared {
            Ok(request) => request,
            Err(err) => {
                toasts.api_error(&err, PUBLISH_FAILED);
                return;
            }
        };
        if !publish_state.try_update(|s| s.begin()).unwrap_or(false) {
            return;
        }

        let lifetime = lifetime.get_value();
        spawn_local(async move {
            let result = api::publish_meeting(&request).await;
            if !lifetime.is_active() {
                return;
            }
            publish_state.update(|s| s.finish(result.clone().map_err(|e| e.to_string())));
            match result {
                Ok(()) => {
                    log::info!(
                        "Meeting '{}' published for {} participants",
                        request.meeting_title,
                        request.course_participants.len()
                    );
                    toasts.success("Meeting published successfully! Notifications sent to participants.");
                    draft.set(MeetingDraft::new(Local::now().naive_local()));
                    students.set(Vec::new());
                    link_state.update(|s| s.reset());
                }
                Err(err) => {
                    log::error!("Publishing meeting failed: {}", err);
                    toasts.api_error(&err, PUBLISH_FAILED);
                }
            }
        });
    };

    let generating = move || link_state.with(ActionState::is_pending);
    let publishing = move || publish_state.with(ActionState::is_pending);
    let has_link = move || link_state.with(|s| s.value().is_some());

    view! {
        <PageFrame page_id="u502_schedule_meeting--usecase" category=PAGE_CAT_USECASE>
            <PageHeader title=ScheduleMeeting::display_name()>
                {icon("video")}
            </PageHeader>

            <div class="page__content">
                <div class="form-card">
                    <h3 class="form-card__title">"Schedule New Meeting"</h3>

                    <div class="form__group">
                        <label class="form__label">"Select Course"</label>
                        <select
                            class="form__select"
                            prop:value=move || draft.with(|d| d.course_id.clone().unwrap_or_default())
                            on:change=on_course_change
                        >
                            <option value="">"Choose a course"</option>
                            <For
                                each=move || courses.get()
                                key=|course| course.id.clone()
                                children=move |course| view! {
                                    <option value=course.id.clone()>{course.title.clone()}</option>
                                }
                            />
                        </select>
                    </div>

                    <div class="form__group">
                        <label class="form__label">"Select Batch"</label>
                        <select
                            class="form__select"
                            prop:value=move || draft.with(|d| d.batch.clone())
                            on:change=move |ev| draft.update(|d| d.batch = event_target_value(&ev))
                        >
                            <option value="">"Select Batch"</option>
                            {BATCH_OPTIONS
                                .iter()
                                .map(|batch| view! {
                                    <option value=*batch>{format!("Batch {}", batch)}</option>
                                })
                                .collect_view()}
                        </select>
                    </div>

                    <Show when=move || draft.with(|d| d.course_id.is_some())>
                        <ParticipantPicker students=students loading=students_loading draft=draft />
                    </Show>

                    <h3 class="form-card__title">"Meeting Details"</h3>
                    <div class="form__grid">
                        <div class="form__group">
                            <label class="form__label">"Meeting Title"</label>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Enter Module title"
                                prop:value=move || draft.with(|d| d.title.clone())
                                on:input=move |ev| draft.update(|d| d.title = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Date & Time"</label>
                            <input
                                type="datetime-local"
                                class="form__input"
                                prop:value=move || draft.with(|d| d.date_time.clone())
                                on:input=move |ev| draft.update(|d| d.date_time = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Duration (minutes)"</label>
                            <input
                                type="number"
                                min="1"
                                class="form__input"
                                prop:value=move || draft.with(|d| d.duration.clone())
                                on:input=move |ev| draft.update(|d| d.duration = event_target_value(&ev))
                            />
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Time Zone"</label>
                            <select
                                class="form__select"
                                prop:value=move || draft.with(|d| d.time_zone.clone())
                                on:change=move |ev| draft.update(|d| d.time_zone = event_target_value(&ev))
                            >
                                {TIME_ZONES
                                    .iter()
                                    .map(|zone| view! { <option value=*zone>{*zone}</option> })
                                    .collect_view()}
                            </select>
                        </div>
                        <div class="form__group">
                            <label class="form__label">"Instructor Name"</label>
                            <input
                                type="text"
                                class="form__input"
                                placeholder="Enter instructor name"
                                prop:value=move || draft.with(|d| d.instructor_name.clone())
                                on:input=move |ev| draft.update(|d| d.instructor_name = event_target_value(&ev))
                            />
                        </div>
                    </div>

                    {move || link_state.with(|s| s.value().cloned()).map(|link| view! {
                        <ZoomLinkDetails link=link toasts=toasts />
                    })}

                    <Flex gap=FlexGap::Small>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=generate_link
                            disabled=Signal::derive(generating)
                        >
                            {icon("video")}
                            {move || if generating() { " Generating..." } else { " Generate Zoom Link" }}
                        </Button>
                        <Button
                            appearance=ButtonAppearance::Primary
                            on_click=publish
                            disabled=Signal::derive(move || !has_link() || publishing())
                        >
                            {icon("mail")}
                            {move || if publishing() { " Publishing..." } else { " Publish Meeting" }}
                        </Button>
                    </Flex>
                </div>
            </div>
        </PageFrame>
    }
}

/// Students of the selected course with selection checkboxes.
#[component]
#[allow(non_snake_case)]
fn ParticipantPicker(
    students: RwSignal<Vec<StudentByCourse>>,
    loading: RwSignal<bool>,
    draft: RwSignal<MeetingDraft>,
) -> impl IntoView {
    let select_all = move |selected: bool| {
        students.with_untracked(|list| draft.update(|d| d.select_all(list, selected)));
    };
    let selected_count = move || draft.with(|d| d.selected.len());

    view! {
        <div class="form__group">
            <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                <label class="form__label">
                    "Course Participants "
                    <span class="text-muted">{move || format!("({} selected)", selected_count())}</span>
                </label>
                <Flex gap=FlexGap::Small>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| select_all(true)>
                        "Select All"
                    </Button>
                    <Button appearance=ButtonAppearance::Secondary on_click=move |_| select_all(false)>
                        "Deselect All"
                    </Button>
                </Flex>
            </Flex>

            <div class="table-wrapper table-wrapper--scroll">
                <Table attr:style="width: 100%;">
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell class="table__header-cell table__header-cell--checkbox">""</TableHeaderCell>
                            <TableHeaderCell class="table__header-cell">"Name (Email)"</TableHeaderCell>
                            <TableHeaderCell class="table__header-cell">"Purchased Date"</TableHeaderCell>
                            <TableHeaderCell class="table__header-cell">"Payment"</TableHeaderCell>
                            <TableHeaderCell class="table__header-cell">"Pending"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        {move || {
                            if loading.get() {
                                return view! {
                                    <tr class="table__row table__row--empty">
                                        <td class="table__cell table__cell--empty" colspan="5">"Loading..."</td>
                                    </tr>
                                }
                                .into_any();
                            }
                            if students.with(Vec::is_empty) {
                                return view! {
                                    <tr class="table__row table__row--empty">
                                        <td class="table__cell table__cell--empty" colspan="5">
                                            "No users have purchased this course yet."
                                        </td>
                                    </tr>
                                }
                                .into_any();
                            }
                            students
                                .get()
                                .into_iter()
                                .map(|student| {
                                    let id = student.id.clone();
                                    let checked_id = id.clone();
                                    let badge = if student.is_paid() {
                                        "badge badge--success"
                                    } else {
                                        "badge badge--warning"
                                    };
                                    let name_email = format!("{} ({})", student.name, student.email);
                                    let purchased_on = student.purchased_on();
                                    let status_label = student.status_label();
                                    let pending = format!("{:.2}", student.pending());
                                    view! {
                                        <TableRow class="table__row">
                                            <TableCell class="table__cell table__cell--checkbox">
                                                <input
                                                    type="checkbox"
                                                    prop:checked=move || draft.with(|d| d.is_selected(&checked_id))
                                                    on:change=move |ev| {
                                                        let selected = event_target_checked(&ev);
                                                        draft.update(|d| d.set_selected(&id, selected));
                                                    }
                                                />
                                            </TableCell>
                                            <TableCell class="table__cell">
                                                <TableCellLayout truncate=true>
                                                    {name_email}
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell class="table__cell">{purchased_on}</TableCell>
                                            <TableCell class="table__cell">
                                                <span class=badge>{status_label}</span>
                                            </TableCell>
                                            <TableCell class="table__cell table__cell--number">
                                                {pending}
                                            </TableCell>
                                        </TableRow>
                                    }
                                })
                                .collect_view()
                                .into_any()
                        }}
                    </TableBody>
                </Table>
            </div>
        </div>
    }
}

/// Read-only Zoom details with copy buttons.
#[component]
#[allow(non_snake_case)]
fn ZoomLinkDetails(link: ZoomLink, toasts: Toasts) -> impl IntoView {
    let fields = [
        ("Link", link.zoom_link, "Meeting link copied!"),
        ("Meeting ID", link.meeting_id, "Meeting ID copied!"),
        ("Passcode", link.password, "Passcode copied!"),
        ("Host Link", link.start_url, "Host link copied!"),
    ];

    view! {
        <div class="info-box">
            <h4 class="info-box__title">"Meeting Details"</h4>
            {fields
                .into_iter()
                .map(|(label, value, copied_message)| {
                    let copy_value = value.clone();
                    view! {
                        <div class="info-box__row">
                            <span class="info-box__label">{format!("{}:", label)}</span>
                            <input type="text" class="form__input" readonly prop:value=value />
                            <Button
                                appearance=ButtonAppearance::Subtle
                                on_click=move |_| {
                                    copy_to_clipboard_with_callback(&copy_value, move |ok| {
                                        if ok {
                                            toasts.success(copied_message);
                                        } else {
                                            toasts.error("Could not copy to clipboard");
                                        }
                                    });
                                }
                            >
                                {icon("copy")}
                            </Button>
                        </div>
                    }
                })
                .collect_view()}
        </div>
    }
}
