use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::types::{LinkedIdentityId, ProviderAlias};

/// External identity provider configured for social or enterprise login.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct IdentityProvider {
    pub alias: String,
    #[serde(default)]
    pub display_name: Option<String>,
    pub provider_id: String,
    pub enabled: bool,
    #[serde(default)]
    pub trust_email: bool,
    #[serde(default)]
    pub store_token: bool,
    #[serde(default)]
    pub link_only: bool,
    #[serde(default)]
    pub first_broker_login_flow_alias: Option<String>,
    #[serde(default)]
    pub config: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct NewIdentityProvider {
    pub alias: ProviderAlias,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    pub provider_id: String,
    pub enabled: bool,
    pub trust_email: bool,
    pub store_token: bool,
    pub link_only: bool,
    pub config: BTreeMap<String, String>,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq)]
pub struct UpdateIdentityProvider {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub display_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub enabled: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub trust_email: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub store_token: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub link_only: Option<bool>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub config: Option<BTreeMap<String, String>>,
}

/// External account linked to the current user.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LinkedIdentity {
    pub id: LinkedIdentityId,
    pub provider_type: String,
    pub provider_alias: String,
    #[serde(default)]
    pub provider_display_name: Option<String>,
    #[serde(default)]
    pub external_email: Option<String>,
    pub linked_at: DateTime<Utc>,
}
