use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api::HttpApi;
use crate::dto::tenants::TenantsQuery;
use crate::models::auth::AccessContext;
use crate::routes::{render_action, render_page};
use crate::services::{abac, tenant_services, tenants, webhooks};

#[get("/tenants")]
pub async fn show_tenants(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    query: web::Query<TenantsQuery>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = tenants::load_tenants_page(api.get_ref(), &ctx.token, query.into_inner()).await;
    render_page(result, &flash_messages)
}

#[post("/tenants")]
pub async fn post_tenants(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(tenants::tenants_action(api.get_ref(), &ctx.token, &body).await)
}

#[get("/tenants/{tenant_id}/services")]
pub async fn show_tenant_services(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result =
        tenant_services::load_tenant_services_page(api.get_ref(), &ctx.token, &tenant_id).await;
    render_page(result, &flash_messages)
}

#[post("/tenants/{tenant_id}/services")]
pub async fn post_tenant_services(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    render_action(
        tenant_services::tenant_services_action(api.get_ref(), &ctx.token, &tenant_id, &body)
            .await,
    )
}

#[get("/tenants/{tenant_id}/webhooks")]
pub async fn show_webhooks(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = webhooks::load_webhooks_page(api.get_ref(), &ctx.token, &tenant_id).await;
    render_page(result, &flash_messages)
}

#[post("/tenants/{tenant_id}/webhooks")]
pub async fn post_webhooks(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    render_action(webhooks::webhooks_action(api.get_ref(), &ctx.token, &tenant_id, &body).await)
}

#[get("/tenants/{tenant_id}/abac")]
pub async fn show_abac(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result = abac::load_abac_page(api.get_ref(), &ctx.token, &tenant_id).await;
    render_page(result, &flash_messages)
}

#[post("/tenants/{tenant_id}/abac")]
pub async fn post_abac(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    tenant_id: web::Path<String>,
    body: web::Bytes,
) -> impl Responder {
    render_action(abac::abac_action(api.get_ref(), &ctx.token, &tenant_id, &body).await)
}
