//! Middleware sending unauthenticated visitors to the login page.

use std::future::{Future, Ready, ready};
use std::pin::Pin;
use std::rc::Rc;

use actix_web::body::EitherBody;
use actix_web::dev::{Service, ServiceRequest, ServiceResponse, Transform, forward_ready};
use actix_web::http::{StatusCode, header};
use actix_web::{Error, HttpResponse};

/// Rewrites any `401 Unauthorized` response into a `302` to the login path.
#[derive(Clone)]
pub struct RedirectUnauthorized {
    login_path: Rc<str>,
}

impl RedirectUnauthorized {
    pub fn new(login_path: &str) -> Self {
        Self {
            login_path: Rc::from(login_path),
        }
    }
}

impl Default for RedirectUnauthorized {
    fn default() -> Self {
        Self::new("/login")
    }
}

impl<S, B> Transform<S, ServiceRequest> for RedirectUnauthorized
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Transform = RedirectUnauthorizedMiddleware<S>;
    type InitError = ();
    type Future = Ready<Result<Self::Transform, Self::InitError>>;

    fn new_transform(&self, service: S) -> Self::Future {
        ready(Ok(RedirectUnauthorizedMiddleware {
            service: Rc::new(service),
            login_path: self.login_path.clone(),
        }))
    }
}

pub struct RedirectUnauthorizedMiddleware<S> {
    service: Rc<S>,
    login_path: Rc<str>,
}

impl<S, B> Service<ServiceRequest> for RedirectUnauthorizedMiddleware<S>
where
    S: Service<ServiceRequest, Response = ServiceResponse<B>, Error = Error> + 'static,
    B: 'static,
{
    type Response = ServiceResponse<EitherBody<B>>;
    type Error = Error;
    type Future = Pin<Box<dyn Future<Output = Result<Self::Response, Self::Error>>>>;

    forward_ready!(service);

    fn call(&self, req: ServiceRequest) -> Self::Future {
        let service = self.service.clone();
        let login_path = self.login_path.clone();

        Box::pin(async move {
            let res = service.call(req).await?;

            if res.status() != StatusCode::UNAUTHORIZED {
                return Ok(res.map_into_left_body());
            }

            log::debug!("Redirecting unauthenticated request for {}", res.request().path());

            let (req, _) = res.into_parts();
            let redirect = HttpResponse::Found()
                .insert_header((header::LOCATION, login_path.as_ref()))
                .finish()
                .map_into_right_body();

            Ok(ServiceResponse::new(req, redirect))
        })
    }
}
