pub mod catalog;
pub mod users;
