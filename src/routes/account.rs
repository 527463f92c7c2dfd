use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api::HttpApi;
use crate::models::auth::AccessContext;
use crate::routes::{render_action, render_page};
use crate::services::{linked_identities, sessions};

#[get("/account/identities")]
pub async fn show_linked_identities(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = linked_identities::load_linked_identities_page(api.get_ref(), &ctx.token).await;
    render_page(result, &flash_messages)
}

#[post("/account/identities")]
pub async fn post_linked_identities(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(
        linked_identities::linked_identities_action(api.get_ref(), &ctx.token, &body).await,
    )
}

#[get("/account/sessions")]
pub async fn show_sessions(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = sessions::load_sessions_page(api.get_ref(), &ctx.token).await;
    render_page(result, &flash_messages)
}

#[post("/account/sessions")]
pub async fn post_sessions(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(sessions::sessions_action(api.get_ref(), &ctx.token, &body).await)
}
