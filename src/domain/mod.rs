//! Backend entities and the value objects the portal validates before calling the API.

pub mod abac;
pub mod action;
pub mod analytics;
pub mod audit;
pub mod auth;
pub mod branding;
pub mod email_template;
pub mod identity_provider;
pub mod security_alert;
pub mod service;
pub mod session;
pub mod tenant;
pub mod types;
pub mod webhook;
