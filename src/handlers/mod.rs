pub mod path_not_found;
pub mod user;
