pub mod dto;

pub use dto::{count_items, OverviewMetric};
