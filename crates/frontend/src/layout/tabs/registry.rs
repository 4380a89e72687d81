//! Tab content registry - the single mapping from tab.key to its View

use crate::dashboards::d400_overview::ui::OverviewDashboard;
use crate::domain::a001_user::ui::list::UserList;
use crate::domain::a002_lead::ui::list::LeadList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::domain::a004_student::ui::certificate::CertificateList;
use crate::domain::a004_student::ui::password::StudentPasswordList;
use crate::domain::a005_coupon::ui::CouponPage;
use crate::domain::a007_meeting::ui::list::MeetingList;
use crate::usecases::u501_upload_users_orders::UploadView;
use crate::usecases::u502_schedule_meeting::ScheduleMeetingView;
use leptos::prelude::*;

/// Renders the content of a tab by its key.
///
/// Unknown keys (e.g. a stale `?active=` link) get a placeholder.
pub fn render_tab_content(key: &str) -> AnyView {
    match key {
        // Dashboards
        "d400_overview" => view! { <OverviewDashboard /> }.into_any(),

        // Datasets
        "a001_user" => view! { <UserList /> }.into_any(),
        "a002_lead" => view! { <LeadList /> }.into_any(),
        "a003_order" => view! { <OrderList /> }.into_any(),
        "a004_student_password" => view! { <StudentPasswordList /> }.into_any(),
        "a004_student_certificate" => view! { <CertificateList /> }.into_any(),
        "a005_coupon" => view! { <CouponPage /> }.into_any(),
        "a007_meeting" => view! { <MeetingList /> }.into_any(),

        // Use cases
        "u501_upload_users_orders" => view! { <UploadView /> }.into_any(),
        "u502_schedule_meeting" => view! { <ScheduleMeetingView /> }.into_any(),

        _ => {
            log::warn!("Unknown tab type: {}", key);
            view! { <div class="placeholder">{"Page not found"}</div> }.into_any()
        }
    }
}
