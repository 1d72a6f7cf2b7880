pub mod account;
pub mod api;
pub mod chat;
