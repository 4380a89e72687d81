pub mod aggregate;
pub mod generator;
