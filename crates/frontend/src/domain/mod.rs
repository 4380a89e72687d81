pub mod a001_user;
pub mod a002_lead;
pub mod a003_order;
pub mod a004_student;
pub mod a005_coupon;
pub mod a007_meeting;
