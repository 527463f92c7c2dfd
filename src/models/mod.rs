//! Request-scoped and process-wide models used by the HTTP layer.

pub mod auth;
pub mod config;
