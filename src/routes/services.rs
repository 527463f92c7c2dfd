use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api::HttpApi;
use crate::models::auth::AccessContext;
use crate::pagination::PageQuery;
use crate::routes::{render_action, render_page};
use crate::services::{actions, services};

#[get("/services")]
pub async fn show_services(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    query: web::Query<PageQuery>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = services::load_services_page(api.get_ref(), &ctx.token, query.into_inner()).await;
    render_page(result, &flash_messages)
}

#[post("/services")]
pub async fn post_services(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(services::services_action(api.get_ref(), &ctx.token, &body).await)
}

#[get("/services/{service_id}/actions")]
pub async fn show_actions(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    service_id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = actions::load_actions_page(api.get_ref(), &ctx.token, &service_id).await;
    render_page(result, &flash_messages)
}

#[post("/services/{service_id}/actions")]
pub async fn post_actions(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    service_id: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    render_action(actions::actions_action(api.get_ref(), &ctx.token, &service_id, &body).await)
}
