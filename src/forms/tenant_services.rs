use serde::Deserialize;
use validator::Validate;

use crate::domain::types::ServiceId;
use crate::forms::{FormError, required, required_bool};

#[derive(Debug, Default, Deserialize, Validate)]
pub struct TenantServiceForm {
    pub intent: Option<String>,
    pub service_id: Option<String>,
    pub enabled: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TenantServiceIntent {
    Toggle { service_id: ServiceId, enabled: bool },
}

pub(crate) fn parse_service_id(value: Option<&str>) -> Result<ServiceId, FormError> {
    let raw = required(value, "Service ID")?;
    ServiceId::new(&raw).map_err(|_| FormError::Invalid("service ID"))
}

impl TryFrom<TenantServiceForm> for TenantServiceIntent {
    type Error = FormError;

    fn try_from(form: TenantServiceForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("toggle") => Ok(TenantServiceIntent::Toggle {
                service_id: parse_service_id(form.service_id.as_deref())?,
                enabled: required_bool(form.enabled.as_deref(), "enabled")?,
            }),
            _ => Err(FormError::InvalidIntent),
        }
    }
}
