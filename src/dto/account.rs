use serde::Serialize;

use crate::domain::identity_provider::LinkedIdentity;
use crate::domain::session::SessionInfo;
use crate::dto::page_data;

#[derive(Debug, Default, Serialize)]
pub struct LinkedIdentitiesPageData {
    pub identities: Vec<LinkedIdentity>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

#[derive(Debug, Default, Serialize)]
pub struct SessionsPageData {
    pub sessions: Vec<SessionInfo>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

page_data!(LinkedIdentitiesPageData, SessionsPageData);
