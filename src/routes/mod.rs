//! HTTP handlers for the dashboard pages.
//!
//! Loaders answer `GET` with the page document as JSON. Actions answer
//! `POST` with `{success, message}`, `{error}` or a redirect.

use actix_web::HttpResponse;
use actix_web::http::header;
use actix_web_flash_messages::{FlashMessage, IncomingFlashMessages, Level};
use serde::Serialize;
use serde_json::{Value, json};

use crate::dto::PageData;
use crate::services::{ActionReply, ServiceError, ServiceResult};

pub mod account;
pub mod auth;
pub mod reports;
pub mod services;
pub mod settings;
pub mod tenants;

/// Flash message as rendered in page documents.
#[derive(Debug, Serialize)]
pub struct Alert<'a> {
    pub level: &'static str,
    pub message: &'a str,
}

/// Maps flash levels to the alert classes used by the UI.
pub fn alert_level_to_str(level: &Level) -> &'static str {
    match level {
        Level::Error => "danger",
        Level::Warning => "warning",
        Level::Success => "success",
        _ => "info",
    }
}

pub fn redirect(location: &str) -> HttpResponse {
    HttpResponse::Found()
        .insert_header((header::LOCATION, location))
        .finish()
}

/// Renders a loader result together with pending flash messages.
pub fn render_page<T: PageData>(
    result: ServiceResult<T>,
    flash_messages: &IncomingFlashMessages,
) -> HttpResponse {
    match result {
        Ok(page) => {
            let alerts = flash_messages
                .iter()
                .map(|f| Alert {
                    level: alert_level_to_str(&f.level()),
                    message: f.content(),
                })
                .collect::<Vec<_>>();

            match serde_json::to_value(&page) {
                Ok(Value::Object(mut body)) => {
                    body.insert("alerts".to_string(), json!(alerts));
                    HttpResponse::Ok().json(body)
                }
                Ok(body) => HttpResponse::Ok().json(body),
                Err(err) => {
                    log::error!("Failed to serialize page: {err}");
                    HttpResponse::InternalServerError().finish()
                }
            }
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(ServiceError::Form(message)) => HttpResponse::BadRequest().json(T::failed(message)),
        Err(err) => {
            log::error!("Failed to render page: {err}");
            HttpResponse::InternalServerError().finish()
        }
    }
}

/// Renders an action result.
pub fn render_action(result: ServiceResult<ActionReply>) -> HttpResponse {
    match result {
        Ok(ActionReply::Success { message, mut data }) => {
            data.insert("success".to_string(), Value::Bool(true));
            if let Some(message) = message {
                data.insert("message".to_string(), Value::String(message));
            }
            HttpResponse::Ok().json(data)
        }
        Ok(ActionReply::Redirect { location, message }) => {
            if let Some(message) = message {
                FlashMessage::success(message).send();
            }
            redirect(&location)
        }
        Err(ServiceError::Unauthorized) => HttpResponse::Unauthorized().finish(),
        Err(err) => HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    }
}
