use serde::Deserialize;
use validator::Validate;

use crate::domain::service::{NewService, UpdateService};
use crate::domain::types::{AbsoluteUrl, DisplayName, ServiceId};
use crate::forms::tenant_services::parse_service_id;
use crate::forms::{FormError, optional, parse_list, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from the services listing.
pub struct ServiceForm {
    pub intent: Option<String>,
    pub id: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 255))]
    pub client_id: Option<String>,
    pub base_url: Option<String>,
    /// Newline or comma separated list.
    pub redirect_uris: Option<String>,
    /// Newline or comma separated list.
    pub logout_uris: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ServiceIntent {
    Create(NewService),
    Update { id: ServiceId, updates: UpdateService },
    Delete(ServiceId),
}

fn parse_uris(value: Option<&str>, field: &'static str) -> Result<Vec<String>, FormError> {
    parse_list(value)
        .into_iter()
        .map(|uri| {
            AbsoluteUrl::new(uri)
                .map(AbsoluteUrl::into_inner)
                .map_err(|_| FormError::Invalid(field))
        })
        .collect()
}

fn parse_base_url(value: Option<&str>) -> Result<Option<String>, FormError> {
    optional(value)
        .map(|raw| {
            AbsoluteUrl::new(raw)
                .map(AbsoluteUrl::into_inner)
                .map_err(|_| FormError::Invalid("base URL"))
        })
        .transpose()
}

fn non_empty(uris: Vec<String>) -> Option<Vec<String>> {
    if uris.is_empty() { None } else { Some(uris) }
}

impl TryFrom<ServiceForm> for ServiceIntent {
    type Error = FormError;

    fn try_from(form: ServiceForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => {
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                let redirect_uris = parse_uris(form.redirect_uris.as_deref(), "redirect URI")?;
                if redirect_uris.is_empty() {
                    return Err(FormError::Missing("At least one redirect URI"));
                }
                Ok(ServiceIntent::Create(NewService {
                    name,
                    client_id: optional(form.client_id.as_deref()),
                    base_url: parse_base_url(form.base_url.as_deref())?,
                    redirect_uris,
                    logout_uris: non_empty(parse_uris(
                        form.logout_uris.as_deref(),
                        "logout URI",
                    )?),
                }))
            }
            Some("update") => {
                let id = parse_service_id(form.id.as_deref())?;
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                Ok(ServiceIntent::Update {
                    id,
                    updates: UpdateService {
                        name: Some(name),
                        base_url: parse_base_url(form.base_url.as_deref())?,
                        redirect_uris: non_empty(parse_uris(
                            form.redirect_uris.as_deref(),
                            "redirect URI",
                        )?),
                        logout_uris: non_empty(parse_uris(
                            form.logout_uris.as_deref(),
                            "logout URI",
                        )?),
                        status: None,
                    },
                })
            }
            Some("delete") => Ok(ServiceIntent::Delete(parse_service_id(form.id.as_deref())?)),
            _ => Err(FormError::InvalidIntent),
        }
    }
}
