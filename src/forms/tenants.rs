use serde::Deserialize;
use validator::Validate;

use crate::domain::tenant::{NewTenant, TenantStatus, UpdateTenant};
use crate::domain::types::{AbsoluteUrl, DisplayName, TenantId, TenantSlug};
use crate::forms::{FormError, optional, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from the tenants listing.
pub struct TenantForm {
    pub intent: Option<String>,
    pub id: Option<String>,
    #[validate(length(max = 255))]
    pub name: Option<String>,
    #[validate(length(max = 63))]
    pub slug: Option<String>,
    pub logo_url: Option<String>,
    pub status: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum TenantIntent {
    Create(NewTenant),
    Update { id: TenantId, updates: UpdateTenant },
    Delete(TenantId),
}

pub(crate) fn parse_tenant_id(value: Option<&str>) -> Result<TenantId, FormError> {
    let raw = required(value, "Tenant ID")?;
    TenantId::new(&raw).map_err(|_| FormError::Invalid("tenant ID"))
}

fn parse_logo_url(value: Option<&str>) -> Result<Option<String>, FormError> {
    optional(value)
        .map(|raw| {
            AbsoluteUrl::new(raw)
                .map(AbsoluteUrl::into_inner)
                .map_err(|_| FormError::Invalid("logo URL"))
        })
        .transpose()
}

impl TryFrom<TenantForm> for TenantIntent {
    type Error = FormError;

    fn try_from(form: TenantForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => {
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                let slug = TenantSlug::new(required(form.slug.as_deref(), "Slug")?)
                    .map_err(|_| FormError::Invalid("slug"))?;
                Ok(TenantIntent::Create(NewTenant {
                    name,
                    slug,
                    logo_url: parse_logo_url(form.logo_url.as_deref())?,
                }))
            }
            Some("update") => {
                let id = parse_tenant_id(form.id.as_deref())?;
                let name = DisplayName::new(required(form.name.as_deref(), "Name")?)
                    .map_err(|_| FormError::Missing("Name"))?;
                let status = optional(form.status.as_deref())
                    .map(|raw| raw.parse::<TenantStatus>())
                    .transpose()
                    .map_err(|_| FormError::Invalid("status"))?;
                Ok(TenantIntent::Update {
                    id,
                    updates: UpdateTenant {
                        name: Some(name),
                        logo_url: parse_logo_url(form.logo_url.as_deref())?,
                        status,
                    },
                })
            }
            Some("delete") => Ok(TenantIntent::Delete(parse_tenant_id(form.id.as_deref())?)),
            _ => Err(FormError::InvalidIntent),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::forms::parse_form;

    const TENANT_ID: &str = "5f0c6f3e-8a43-4c4e-9a8e-3f1f2f4b6c7d";

    #[test]
    fn create_requires_name_and_valid_slug() {
        let form: TenantForm = parse_form(b"intent=create&name=Acme&slug=acme").unwrap();
        let intent = TenantIntent::try_from(form).unwrap();
        assert!(matches!(intent, TenantIntent::Create(ref t) if t.slug.as_str() == "acme"));

        let form: TenantForm = parse_form(b"intent=create&slug=acme").unwrap();
        assert_eq!(
            TenantIntent::try_from(form),
            Err(FormError::Missing("Name"))
        );

        let form: TenantForm = parse_form(b"intent=create&name=Acme&slug=Not+Valid").unwrap();
        assert_eq!(TenantIntent::try_from(form), Err(FormError::Invalid("slug")));
    }

    #[test]
    fn update_parses_status() {
        let body = format!("intent=update&id={TENANT_ID}&name=Acme&status=suspended");
        let form: TenantForm = parse_form(body.as_bytes()).unwrap();
        match TenantIntent::try_from(form).unwrap() {
            TenantIntent::Update { id, updates } => {
                assert_eq!(id.to_string(), TENANT_ID);
                assert_eq!(updates.status, Some(TenantStatus::Suspended));
                assert!(updates.logo_url.is_none());
            }
            other => panic!("unexpected intent {other:?}"),
        }
    }

    #[test]
    fn delete_rejects_malformed_id() {
        let form: TenantForm = parse_form(b"intent=delete&id=42").unwrap();
        assert_eq!(
            TenantIntent::try_from(form),
            Err(FormError::Invalid("tenant ID"))
        );
    }

    #[test]
    fn unknown_or_missing_intent_is_rejected() {
        let form: TenantForm = parse_form(b"intent=explode").unwrap();
        assert_eq!(TenantIntent::try_from(form), Err(FormError::InvalidIntent));
        let form: TenantForm = parse_form(b"name=Acme").unwrap();
        assert_eq!(TenantIntent::try_from(form), Err(FormError::InvalidIntent));
    }
}
