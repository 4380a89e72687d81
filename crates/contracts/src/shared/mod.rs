pub mod action;
pub mod config;
pub mod date_utils;
pub mod error;
pub mod table_view;
pub mod toast;
