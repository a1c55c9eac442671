pub mod ask;
pub mod auth;
pub mod delete;
pub mod dispatch;
pub mod get;
pub mod list;
