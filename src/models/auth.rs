//! Access context resolved from the identity cookie.

use std::future::{Ready, ready};

use actix_identity::IdentityExt;
use actix_web::dev::Payload;
use actix_web::{FromRequest, HttpRequest, error::ErrorUnauthorized};

use crate::domain::types::AccessToken;

/// Bearer token of the signed-in administrator.
///
/// Extraction fails with `401 Unauthorized` when no identity is attached to
/// the request, which `RedirectUnauthorized` turns into a login redirect.
#[derive(Debug, Clone)]
pub struct AccessContext {
    pub token: AccessToken,
}

impl AccessContext {
    pub fn new(token: AccessToken) -> Self {
        Self { token }
    }
}

impl FromRequest for AccessContext {
    type Error = actix_web::Error;
    type Future = Ready<Result<Self, Self::Error>>;

    fn from_request(req: &HttpRequest, _: &mut Payload) -> Self::Future {
        let token = req
            .get_identity()
            .ok()
            .and_then(|identity| identity.id().ok())
            .and_then(|id| AccessToken::new(id).ok());

        match token {
            Some(token) => ready(Ok(AccessContext { token })),
            None => ready(Err(ErrorUnauthorized("Unauthorized"))),
        }
    }
}
