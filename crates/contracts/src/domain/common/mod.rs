//! Common types and traits for all datasets

pub mod lenient;
pub mod record;

// Re-exports
pub use record::Record;
