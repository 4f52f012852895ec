pub mod auth;
pub mod call;
pub mod create;
pub mod dispatch;
pub mod list;
pub mod mine;
pub mod status;
