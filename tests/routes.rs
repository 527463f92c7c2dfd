use std::time::Duration;

use actix_identity::{Identity, IdentityMiddleware};
use actix_session::{SessionMiddleware, storage::CookieSessionStore};
use actix_web::cookie::Key;
use actix_web::http::{StatusCode, header};
use actix_web::{App, HttpMessage, HttpRequest, HttpResponse, test, web};
use actix_web_flash_messages::{FlashMessagesFramework, Level, storage::CookieMessageStore};
use serde_json::{Map, Value, json};

use auth9_portal::api::HttpApi;
use auth9_portal::configure_dashboard;
use auth9_portal::middleware::RedirectUnauthorized;
use auth9_portal::routes::{alert_level_to_str, render_action};
use auth9_portal::services::{ActionReply, ServiceError};

/// Backend address nobody listens on, so every upstream call fails fast.
const DEAD_BACKEND: &str = "http://127.0.0.1:9";

async fn fake_login(req: HttpRequest) -> HttpResponse {
    match Identity::login(&req.extensions(), "test-token".to_string()) {
        Ok(_) => HttpResponse::Ok().finish(),
        Err(_) => HttpResponse::InternalServerError().finish(),
    }
}

macro_rules! dashboard_app {
    () => {{
        let key = Key::from(&[7u8; 64]);
        let flash = FlashMessagesFramework::builder(CookieMessageStore::builder(key.clone()).build())
            .build();
        let api = HttpApi::new(DEAD_BACKEND, Some(Duration::from_secs(2))).unwrap();
        test::init_service(
            App::new()
                .wrap(flash)
                .wrap(IdentityMiddleware::default())
                .wrap(
                    SessionMiddleware::builder(CookieSessionStore::default(), key)
                        .cookie_secure(false)
                        .build(),
                )
                .app_data(web::Data::new(api))
                .route("/test-login", web::get().to(fake_login))
                .service(
                    web::scope("/dashboard")
                        .wrap(RedirectUnauthorized::default())
                        .configure(configure_dashboard),
                ),
        )
        .await
    }};
}

macro_rules! signed_in_cookies {
    ($app:expr) => {{
        let resp =
            test::call_service(&$app, test::TestRequest::get().uri("/test-login").to_request())
                .await;
        assert_eq!(resp.status(), StatusCode::OK);
        // Only the session cookie carries the identity; the flash removal cookie must not be replayed.
        resp.response()
            .cookies()
            .filter(|cookie| cookie.name() == "id")
            .map(|cookie| cookie.into_owned())
            .collect::<Vec<_>>()
    }};
}

#[actix_web::test]
async fn signed_in_cookies_skip_the_flash_removal() {
    let app = dashboard_app!();
    let cookies = signed_in_cookies!(app);

    assert_eq!(cookies.len(), 1);
    assert!(!cookies[0].value().is_empty());
}

#[actix_web::test]
async fn test_alert_level_to_str_mappings() {
    assert_eq!(alert_level_to_str(&Level::Error), "danger");
    assert_eq!(alert_level_to_str(&Level::Warning), "warning");
    assert_eq!(alert_level_to_str(&Level::Success), "success");
    assert_eq!(alert_level_to_str(&Level::Info), "info");
    assert_eq!(alert_level_to_str(&Level::Debug), "info");
}

#[actix_web::test]
async fn success_reply_is_flattened() {
    let reply = ActionReply::success("Tenant created successfully").with("id", &7);
    let resp = render_action(Ok(reply));

    assert_eq!(resp.status(), StatusCode::OK);
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let body: Value = serde_json::from_slice(&body).unwrap();
    assert_eq!(
        body,
        json!({"success": true, "message": "Tenant created successfully", "id": 7})
    );
}

#[actix_web::test]
async fn failures_render_error_object() {
    let resp = render_action(Err(ServiceError::Unexpected));
    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body = actix_web::body::to_bytes(resp.into_body()).await.unwrap();
    let body: Map<String, Value> = serde_json::from_slice(&body).unwrap();
    assert_eq!(body.get("error"), Some(&json!("Operation failed")));

    let resp = render_action(Err(ServiceError::Unauthorized));
    assert_eq!(resp.status(), StatusCode::UNAUTHORIZED);
}

#[actix_web::test]
async fn anonymous_dashboard_request_redirects_to_login() {
    let app = dashboard_app!();

    let req = test::TestRequest::get().uri("/dashboard/tenants").to_request();
    let resp = test::call_service(&app, req).await;

    assert_eq!(resp.status(), StatusCode::FOUND);
    assert_eq!(resp.headers().get(header::LOCATION).unwrap(), "/login");
}

#[actix_web::test]
async fn unreachable_backend_yields_error_page() {
    let app = dashboard_app!();
    let cookies = signed_in_cookies!(app);

    let mut req = test::TestRequest::get().uri("/dashboard/tenants?page=2");
    for cookie in cookies {
        req = req.cookie(cookie);
    }
    let body: Value = test::call_and_read_body_json(&app, req.to_request()).await;

    assert_eq!(body["error"], "Failed to load tenants");
    assert_eq!(body["tenants"], json!([]));
    assert_eq!(body["pagination"]["page"], 2);
    assert_eq!(body["pagination"]["total"], 0);
    assert_eq!(body["alerts"], json!([]));
}

#[actix_web::test]
async fn invalid_route_parameter_is_a_bad_request() {
    let app = dashboard_app!();
    let cookies = signed_in_cookies!(app);

    let mut req = test::TestRequest::get().uri("/dashboard/tenants/not-a-uuid/webhooks");
    for cookie in cookies {
        req = req.cookie(cookie);
    }
    let resp = test::call_service(&app, req.to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body["error"], "Invalid tenant ID");
    assert_eq!(body["webhooks"], json!([]));
}

#[actix_web::test]
async fn unknown_intent_is_rejected() {
    let app = dashboard_app!();
    let cookies = signed_in_cookies!(app);

    let mut req = test::TestRequest::post()
        .uri("/dashboard/tenants")
        .insert_header((header::CONTENT_TYPE, "application/x-www-form-urlencoded"))
        .set_payload("intent=explode");
    for cookie in cookies {
        req = req.cookie(cookie);
    }
    let resp = test::call_service(&app, req.to_request()).await;

    assert_eq!(resp.status(), StatusCode::BAD_REQUEST);
    let body: Value = test::read_body_json(resp).await;
    assert_eq!(body, json!({"error": "Invalid action"}));
}
