pub mod config;
pub mod issues;
pub mod logging;
pub mod view;
pub mod web;

pub const TARGET_WEB_REQUEST: &str = "web_request";
pub const TARGET_SNAPSHOT: &str = "snapshot";
