//! GitHub v3 REST API adapters, one catalog per endpoint category.

pub mod gists;
pub mod issues;
pub mod pulls;
pub mod users;

pub const API_BASE_URL: &str = "https://api.github.com";
