//! Tab labels - the single source of tab titles.
//!
//! Dataset tabs take `list_name` from their record type, use cases their
//! `display_name`.

use contracts::domain::a001_user::aggregate::RegisteredUser;
use contracts::domain::a002_lead::aggregate::Lead;
use contracts::domain::a003_order::aggregate::Order;
use contracts::domain::a005_coupon::aggregate::Coupon;
use contracts::domain::a007_meeting::aggregate::Meeting;
use contracts::domain::common::Record;
use contracts::usecases::common::UseCaseMetadata;
use contracts::usecases::u501_upload_users_orders::UploadUsersOrders;
use contracts::usecases::u502_schedule_meeting::ScheduleMeeting;

/// Readable tab title for a key. Fallback: "Page".
pub fn tab_label_for_key(key: &str) -> &'static str {
    match key {
        "d400_overview" => "Overview",

        "a001_user" => RegisteredUser::list_name(),
        "a002_lead" => Lead::list_name(),
        "a003_order" => Order::list_name(),
        "a004_student_password" => "Student Passwords",
        "a004_student_certificate" => "Certificates",
        "a005_coupon" => Coupon::list_name(),
        "a007_meeting" => Meeting::list_name(),

        "u501_upload_users_orders" => UploadUsersOrders::display_name(),
        "u502_schedule_meeting" => ScheduleMeeting::display_name(),

        _ => "Page",
    }
}
