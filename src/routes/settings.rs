use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api::HttpApi;
use crate::models::auth::AccessContext;
use crate::routes::{render_action, render_page};
use crate::services::{branding, email_templates, identity_providers};

#[get("/settings/identity-providers")]
pub async fn show_identity_providers(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = identity_providers::load_identity_providers_page(api.get_ref(), &ctx.token).await;
    render_page(result, &flash_messages)
}

#[post("/settings/identity-providers")]
pub async fn post_identity_providers(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(
        identity_providers::identity_providers_action(api.get_ref(), &ctx.token, &body).await,
    )
}

#[get("/settings/branding")]
pub async fn show_branding(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = branding::load_branding_page(api.get_ref(), &ctx.token).await;
    render_page(result, &flash_messages)
}

#[post("/settings/branding")]
pub async fn post_branding(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(branding::branding_action(api.get_ref(), &ctx.token, &body).await)
}

#[get("/settings/email-templates")]
pub async fn show_email_templates(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = email_templates::load_email_templates_page(api.get_ref(), &ctx.token).await;
    render_page(result, &flash_messages)
}

#[get("/settings/email-templates/{template_type}")]
pub async fn show_email_template(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    template_type: web::Path<String>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result =
        email_templates::load_email_template_page(api.get_ref(), &ctx.token, &template_type)
            .await;
    render_page(result, &flash_messages)
}

#[post("/settings/email-templates/{template_type}")]
pub async fn post_email_template(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    template_type: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    render_action(
        email_templates::email_template_action(api.get_ref(), &ctx.token, &template_type, &body)
            .await,
    )
}
