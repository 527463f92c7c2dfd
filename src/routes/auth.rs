//! Login, OAuth callback and logout.

use actix_identity::Identity;
use actix_session::Session;
use actix_web::{HttpMessage, HttpRequest, HttpResponse, Responder, get, post, web};
use serde::Deserialize;
use serde_json::json;

use crate::api::HttpApi;
use crate::models::config::ServerConfig;
use crate::routes::redirect;
use crate::services::auth::{self, OAUTH_STATE_KEY};

pub const HOME_PATH: &str = "/dashboard/tenants";

#[get("/")]
pub async fn index() -> impl Responder {
    redirect(HOME_PATH)
}

#[get("/login")]
pub async fn login(
    session: Session,
    api: web::Data<HttpApi>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let state = auth::new_state();
    if let Err(err) = session.insert(OAUTH_STATE_KEY, &state) {
        log::error!("Failed to store OAuth state: {err}");
        return HttpResponse::InternalServerError().finish();
    }

    match auth::authorize_redirect(&api.authorize_url(), &server_config, &state) {
        Ok(location) => redirect(&location),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

#[derive(Debug, Deserialize)]
pub struct CallbackQuery {
    pub code: Option<String>,
    pub state: Option<String>,
}

#[get("/auth/callback")]
pub async fn callback(
    req: HttpRequest,
    session: Session,
    query: web::Query<CallbackQuery>,
    api: web::Data<HttpApi>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    let expected_state = session
        .remove_as::<String>(OAUTH_STATE_KEY)
        .and_then(Result::ok);

    let result = auth::complete_login(
        api.get_ref(),
        &server_config,
        query.code.as_deref(),
        query.state.as_deref(),
        expected_state.as_deref(),
    )
    .await;

    match result {
        Ok(token) => match Identity::login(&req.extensions(), token.as_str().to_string()) {
            Ok(_) => redirect(HOME_PATH),
            Err(err) => {
                log::error!("Failed to attach identity: {err}");
                HttpResponse::InternalServerError().finish()
            }
        },
        Err(err) => HttpResponse::BadRequest().json(json!({ "error": err.to_string() })),
    }
}

#[post("/logout")]
pub async fn logout(
    user: Option<Identity>,
    server_config: web::Data<ServerConfig>,
) -> impl Responder {
    if let Some(user) = user {
        user.logout();
    }
    redirect(&server_config.login_path)
}
