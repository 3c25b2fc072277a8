//! HTTP request handlers organized by functionality

pub mod catalog;
pub mod users;
