//! CLI command implementations

pub mod context;
pub mod family;
pub mod home;
pub mod init;
pub mod login;
pub mod logout;
pub mod notifications;
pub mod probe;
pub mod profile;
pub mod render;
pub mod reports;
pub mod validate;
