pub mod aggregate;
pub mod password;
