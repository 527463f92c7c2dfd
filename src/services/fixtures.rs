//! Sample values shared by the service tests.

use chrono::{TimeZone, Utc};

use crate::domain::service::{Service, ServiceStatus};
use crate::domain::tenant::{Tenant, TenantStatus};
use crate::domain::types::{AccessToken, ServiceId, TenantId};

pub const TENANT_ID: &str = "3f2504e0-4f89-41d3-9a0c-0305e82c3301";
pub const SERVICE_ID: &str = "9b2c1d4e-5f60-4718-8a9b-0c1d2e3f4a5b";

pub fn token() -> AccessToken {
    AccessToken::new("test-token").expect("valid token")
}

pub fn tenant_id() -> TenantId {
    TenantId::new(TENANT_ID).expect("valid tenant id")
}

pub fn service_id() -> ServiceId {
    ServiceId::new(SERVICE_ID).expect("valid service id")
}

pub fn tenant(name: &str) -> Tenant {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Tenant {
        id: tenant_id(),
        name: name.to_string(),
        slug: name.to_lowercase(),
        logo_url: None,
        settings: serde_json::Value::Null,
        status: TenantStatus::Active,
        created_at: at,
        updated_at: at,
    }
}

pub fn service(name: &str) -> Service {
    let at = Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap();
    Service {
        id: service_id(),
        tenant_id: None,
        name: name.to_string(),
        client_id: Some(format!("{}-client", name.to_lowercase())),
        base_url: None,
        redirect_uris: vec!["https://app.example.com/callback".to_string()],
        logout_uris: Vec::new(),
        status: ServiceStatus::Active,
        created_at: at,
        updated_at: at,
    }
}
