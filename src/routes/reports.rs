use actix_web::{Responder, get, post, web};
use actix_web_flash_messages::IncomingFlashMessages;

use crate::api::HttpApi;
use crate::dto::reports::{AnalyticsQuery, AuditLogsQuery, SecurityAlertsQuery};
use crate::models::auth::AccessContext;
use crate::routes::{render_action, render_page};
use crate::services::{analytics, audit_logs, security_alerts};

#[get("/analytics")]
pub async fn show_analytics(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    query: web::Query<AnalyticsQuery>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result =
        analytics::load_analytics_page(api.get_ref(), &ctx.token, query.into_inner()).await;
    render_page(result, &flash_messages)
}

#[get("/audit-logs")]
pub async fn show_audit_logs(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    query: web::Query<AuditLogsQuery>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result =
        audit_logs::load_audit_logs_page(api.get_ref(), &ctx.token, query.into_inner()).await;
    render_page(result, &flash_messages)
}

#[get("/security/alerts")]
pub async fn show_security_alerts(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    query: web::Query<SecurityAlertsQuery>,
    flash_messages: IncomingFlashMessages,
) -> impl Responder {
    let result =
        security_alerts::load_security_alerts_page(api.get_ref(), &ctx.token, query.into_inner())
            .await;
    render_page(result, &flash_messages)
}

#[post("/security/alerts")]
pub async fn post_security_alerts(
    ctx: AccessContext,
    api: web::Data<HttpApi>,
    body: web::Bytes,
) -> impl Responder {
    render_action(security_alerts::security_alerts_action(api.get_ref(), &ctx.token, &body).await)
}
