pub mod error;
pub mod standard_error;
pub mod user;
