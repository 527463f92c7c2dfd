use std::time::Duration;

use actix_cors::Cors;
use actix_identity::IdentityMiddleware;
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::middleware::Logger;
use actix_web::{App, HttpServer, web};
use actix_web_flash_messages::{FlashMessagesFramework, storage::CookieMessageStore};

use crate::api::HttpApi;
use crate::middleware::RedirectUnauthorized;
use crate::models::config::ServerConfig;
use crate::routes::account::{
    post_linked_identities, post_sessions, show_linked_identities, show_sessions,
};
use crate::routes::auth::{callback, index, login, logout};
use crate::routes::reports::{
    post_security_alerts, show_analytics, show_audit_logs, show_security_alerts,
};
use crate::routes::services::{post_actions, post_services, show_actions, show_services};
use crate::routes::settings::{
    post_branding, post_email_template, post_identity_providers, show_branding,
    show_email_template, show_email_templates, show_identity_providers,
};
use crate::routes::tenants::{
    post_abac, post_tenant_services, post_tenants, post_webhooks, show_abac,
    show_tenant_services, show_tenants, show_webhooks,
};

pub mod api;
pub mod domain;
pub mod dto;
pub mod error_conversions;
pub mod forms;
pub mod middleware;
pub mod models;
pub mod pagination;
pub mod routes;
pub mod services;

/// Registers every dashboard page; mounted under `/dashboard`.
pub fn configure_dashboard(cfg: &mut web::ServiceConfig) {
    cfg.service(show_tenants)
        .service(post_tenants)
        .service(show_tenant_services)
        .service(post_tenant_services)
        .service(show_webhooks)
        .service(post_webhooks)
        .service(show_abac)
        .service(post_abac)
        .service(show_services)
        .service(post_services)
        .service(show_actions)
        .service(post_actions)
        .service(show_identity_providers)
        .service(post_identity_providers)
        .service(show_branding)
        .service(post_branding)
        .service(show_email_templates)
        .service(show_email_template)
        .service(post_email_template)
        .service(show_linked_identities)
        .service(post_linked_identities)
        .service(show_sessions)
        .service(post_sessions)
        .service(show_analytics)
        .service(show_audit_logs)
        .service(show_security_alerts)
        .service(post_security_alerts);
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let api = HttpApi::new(
        &server_config.api_base_url,
        Some(Duration::from_secs(server_config.api_timeout_secs)),
    )
    .map_err(|e| std::io::Error::other(format!("Failed to build API client: {e}")))?;
    let api = web::Data::new(api);

    // Keys and stores for identity, sessions, and flash messages.
    let secret_key = Key::try_from(server_config.secret.as_bytes())
        .map_err(|e| std::io::Error::other(format!("Invalid session secret: {e}")))?;

    let message_store = CookieMessageStore::builder(secret_key.clone()).build();
    let message_framework = FlashMessagesFramework::builder(message_store).build();

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!(
        "Starting dashboard on {}:{} against {}",
        bind_address.0,
        bind_address.1,
        api.base_url()
    );

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(message_framework.clone())
            .wrap(IdentityMiddleware::default())
            .wrap(
                SessionMiddleware::builder(CookieSessionStore::default(), secret_key.clone())
                    .cookie_secure(server_config.cookie_secure)
                    .cookie_domain(Some(server_config.domain.clone()))
                    .build(),
            )
            .wrap(Logger::default())
            .service(index)
            .service(login)
            .service(callback)
            .service(logout)
            .service(
                web::scope("/dashboard")
                    .wrap(RedirectUnauthorized::new(&server_config.login_path))
                    .configure(configure_dashboard),
            )
            .app_data(api.clone())
            .app_data(web::Data::new(server_config.clone()))
    })
    .bind(bind_address)?
    .run()
    .await
}
