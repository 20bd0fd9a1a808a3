pub mod app;
pub mod chat_page;
pub mod config_error;
pub mod navbar;
pub mod room;
pub mod user_permission;
