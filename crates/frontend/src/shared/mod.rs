pub mod api_utils;
pub mod clipboard;
pub mod components;
pub mod config;
pub mod export;
pub mod http;
pub mod icons;
pub mod page_frame;
pub mod table_state;
pub mod toast;
