pub mod dispatch;
pub mod list;
pub mod login;
pub mod profile;
pub mod register;
pub mod schema;
pub mod shell;
mod shared;
