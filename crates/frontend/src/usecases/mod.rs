pub mod u501_upload_users_orders;
pub mod u502_schedule_meeting;
