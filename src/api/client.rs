//! `reqwest` based implementation of the API traits.

use std::time::Duration;

use reqwest::{Client, Method, RequestBuilder, Response, StatusCode};
use serde::Serialize;
use serde::de::DeserializeOwned;
use serde::Deserialize;

use crate::api::Paged;
use crate::api::errors::{ApiError, ApiResult};
use crate::domain::types::AccessToken;
use crate::pagination::PaginationMeta;

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// `{ "data": ... }` envelope used by most endpoints.
#[derive(Deserialize)]
struct DataEnvelope<T> {
    data: T,
}

/// `{ "data": [...], "pagination": {...} }` envelope of paged listings.
#[derive(Deserialize)]
struct PageEnvelope<T> {
    data: Vec<T>,
    pagination: PaginationMeta,
}

/// Error body `{ "error": "...", "message": "..." }`.
#[derive(Deserialize, Default)]
struct ErrorBody {
    #[serde(default)]
    error: Option<String>,
    #[serde(default)]
    message: Option<String>,
}

/// HTTP client for the auth9-core REST API.
#[derive(Debug, Clone)]
pub struct HttpApi {
    client: Client,
    base_url: String,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>, timeout: Option<Duration>) -> ApiResult<Self> {
        let client = Client::builder()
            .timeout(timeout.unwrap_or(DEFAULT_TIMEOUT))
            .build()
            .map_err(|e| ApiError::Transport(e.to_string()))?;

        Ok(Self::with_client(client, base_url))
    }

    /// Wraps an existing `reqwest::Client`.
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub(crate) fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    fn request(&self, method: Method, token: Option<&AccessToken>, path: &str) -> RequestBuilder {
        let req = self.client.request(method, self.url(path));
        match token {
            Some(token) => req.bearer_auth(token.as_str()),
            None => req,
        }
    }

    /// Maps non-success statuses to [`ApiError`] using the backend's error body.
    async fn check(response: Response) -> ApiResult<Response> {
        let status = response.status();
        if status.is_success() {
            return Ok(response);
        }

        let body = response.text().await.unwrap_or_default();
        let parsed: ErrorBody = serde_json::from_str(&body).unwrap_or_default();
        let message = parsed
            .message
            .or(parsed.error)
            .filter(|message| !message.trim().is_empty())
            .unwrap_or_else(|| {
                status
                    .canonical_reason()
                    .unwrap_or("Request failed")
                    .to_string()
            });

        log::warn!("auth9-core answered {status}: {message}");

        Err(match status {
            StatusCode::UNAUTHORIZED => ApiError::Unauthorized,
            StatusCode::NOT_FOUND => ApiError::NotFound(message),
            _ => ApiError::Status {
                status: status.as_u16(),
                message,
            },
        })
    }

    async fn decode<T: DeserializeOwned>(response: Response) -> ApiResult<T> {
        let bytes = response.bytes().await?;
        Ok(serde_json::from_slice(&bytes)?)
    }

    /// GET returning the `data` field.
    pub(crate) async fn get_data<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<T> {
        let response = self
            .request(Method::GET, Some(token), path)
            .query(query)
            .send()
            .await?;
        let envelope: DataEnvelope<T> = Self::decode(Self::check(response).await?).await?;
        Ok(envelope.data)
    }

    /// GET of a paged listing.
    pub(crate) async fn get_page<T: DeserializeOwned>(
        &self,
        token: &AccessToken,
        path: &str,
        query: &[(&str, String)],
    ) -> ApiResult<Paged<T>> {
        let response = self
            .request(Method::GET, Some(token), path)
            .query(query)
            .send()
            .await?;
        let envelope: PageEnvelope<T> = Self::decode(Self::check(response).await?).await?;
        Ok(Paged {
            items: envelope.data,
            pagination: envelope.pagination,
        })
    }

    /// Sends a JSON body and returns the `data` field of the answer.
    pub(crate) async fn send_data<B, T>(
        &self,
        method: Method,
        token: &AccessToken,
        path: &str,
        body: &B,
    ) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .request(method, Some(token), path)
            .json(body)
            .send()
            .await?;
        let envelope: DataEnvelope<T> = Self::decode(Self::check(response).await?).await?;
        Ok(envelope.data)
    }

    /// Bodiless request returning the `data` field.
    pub(crate) async fn call_data<T: DeserializeOwned>(
        &self,
        method: Method,
        token: &AccessToken,
        path: &str,
    ) -> ApiResult<T> {
        let response = self.request(method, Some(token), path).send().await?;
        let envelope: DataEnvelope<T> = Self::decode(Self::check(response).await?).await?;
        Ok(envelope.data)
    }

    /// Sends a JSON body; only the status matters.
    pub(crate) async fn send_json<B>(
        &self,
        method: Method,
        token: &AccessToken,
        path: &str,
        body: &B,
    ) -> ApiResult<()>
    where
        B: Serialize + ?Sized + Sync,
    {
        let response = self
            .request(method, Some(token), path)
            .json(body)
            .send()
            .await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Bodiless request (DELETE, POST verbs); only the status matters.
    pub(crate) async fn send_empty(
        &self,
        method: Method,
        token: &AccessToken,
        path: &str,
    ) -> ApiResult<()> {
        let response = self.request(method, Some(token), path).send().await?;
        Self::check(response).await?;
        Ok(())
    }

    /// Unauthenticated JSON POST whose answer is not wrapped in an envelope.
    pub(crate) async fn post_public<B, T>(&self, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, None, path)
            .json(body)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }

    /// Authenticated JSON POST whose answer is not wrapped in an envelope.
    pub(crate) async fn post_raw<B, T>(&self, token: &AccessToken, path: &str, body: &B) -> ApiResult<T>
    where
        B: Serialize + ?Sized + Sync,
        T: DeserializeOwned,
    {
        let response = self
            .request(Method::POST, Some(token), path)
            .json(body)
            .send()
            .await?;
        Self::decode(Self::check(response).await?).await
    }
}

/// Appends pagination query pairs.
pub(crate) fn page_pairs(pagination: crate::pagination::Pagination) -> Vec<(&'static str, String)> {
    vec![
        ("page", pagination.page.to_string()),
        ("per_page", pagination.per_page.to_string()),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_is_trimmed() {
        let api = HttpApi::with_client(Client::new(), "http://localhost:8080/");
        assert_eq!(api.base_url(), "http://localhost:8080");
        assert_eq!(
            api.url("/api/v1/tenants"),
            "http://localhost:8080/api/v1/tenants"
        );
    }

    #[test]
    fn page_envelope_decodes() {
        let json = r#"{"data":[1,2],"pagination":{"page":2,"per_page":2,"total":4,"total_pages":2}}"#;
        let envelope: PageEnvelope<u8> = serde_json::from_str(json).unwrap();
        assert_eq!(envelope.data, vec![1, 2]);
        assert_eq!(envelope.pagination.page, 2);
    }

    #[test]
    fn error_body_tolerates_partial_fields() {
        let body: ErrorBody = serde_json::from_str(r#"{"error":"conflict"}"#).unwrap();
        assert_eq!(body.error.as_deref(), Some("conflict"));
        assert!(body.message.is_none());
    }
}
