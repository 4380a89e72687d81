//! Sidebar component with collapsible menu groups

use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::tab_label_for_key;
use crate::shared::icons::icon;
use leptos::prelude::*;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str, &'static str)>, // (id, label, icon)
}

fn get_menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: "dashboards",
            label: "Dashboard",
            icon: "bar-chart",
            items: vec![("d400_overview", tab_label_for_key("d400_overview"), "bar-chart")],
        },
        MenuGroup {
            id: "people",
            label: "Users & Leads",
            icon: "users",
            items: vec![
                ("a001_user", tab_label_for_key("a001_user"), "users"),
                ("a002_lead", tab_label_for_key("a002_lead"), "user-plus"),
            ],
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "shopping-cart",
            items: vec![
                ("a003_order", tab_label_for_key("a003_order"), "shopping-cart"),
                ("a005_coupon", tab_label_for_key("a005_coupon"), "tag"),
            ],
        },
        MenuGroup {
            id: "students",
            label: "Students",
            icon: "award",
            items: vec![
                ("a004_student_password", tab_label_for_key("a004_student_password"), "key"),
                ("a004_student_certificate", tab_label_for_key("a004_student_certificate"), "award"),
            ],
        },
        MenuGroup {
            id: "meetings",
            label: "Meetings",
            icon: "video",
            items: vec![
                ("a007_meeting", tab_label_for_key("a007_meeting"), "video"),
                ("u502_schedule_meeting", tab_label_for_key("u502_schedule_meeting"), "calendar"),
            ],
        },
        MenuGroup {
            id: "data",
            label: "Data",
            icon: "database",
            items: vec![(
                "u501_upload_users_orders",
                tab_label_for_key("u501_upload_users_orders"),
                "upload",
            )],
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let groups = get_menu_groups();
    let expanded_groups = RwSignal::new(groups.iter().map(|g| g.id).collect::<Vec<_>>());

    view! {
        <div class="app-sidebar__content">
            {groups.into_iter().map(|group| {
                let group_id = group.id;
                let items_stored = StoredValue::new(group.items.clone());

                view! {
                    <div>
                        <div
                            class="app-sidebar__item"
                            style:padding-left="12px"
                            on:click=move |_| {
                                expanded_groups.update(|items| {
                                    if let Some(pos) = items.iter().position(|x| *x == group_id) {
                                        items.remove(pos);
                                    } else {
                                        items.push(group_id);
                                    }
                                });
                            }
                        >
                            <div class="app-sidebar__item-content">
                                {icon(group.icon)}
                                <span>{group.label}</span>
                            </div>
                            <div
                                class="app-sidebar__chevron"
                                class:app-sidebar__chevron--expanded=move || expanded_groups.get().contains(&group_id)
                            >
                                {icon("chevron-right")}
                            </div>
                        </div>

                        <Show when=move || expanded_groups.get().contains(&group_id)>
                            <div class="app-sidebar__children">
                                {items_stored.get_value().into_iter().map(|(id, label, icon_name)| {
                                    view! {
                                        <div
                                            class="app-sidebar__item"
                                            class:app-sidebar__item--active=move || {
                                                ctx.active.get().as_deref() == Some(id)
                                            }
                                            style:padding-left="10px"
                                            on:click=move |_| ctx.open_tab(id, label)
                                        >
                                            <div class="app-sidebar__item-content">
                                                {icon(icon_name)}
                                                <span>{label}</span>
                                            </div>
                                        </div>
                                    }
                                }).collect_view()}
                            </div>
                        </Show>
                    </div>
                }
            }).collect_view()}
        </div>
    }
}
