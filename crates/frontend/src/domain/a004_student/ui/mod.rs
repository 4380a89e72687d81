pub mod certificate;
pub mod password;
