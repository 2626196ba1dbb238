pub mod admin;
pub mod auth;
pub mod entry;
pub mod export;
pub mod session;
