use serde::Serialize;

use crate::domain::action::{Action, ActionTrigger};
use crate::domain::service::Service;
use crate::domain::types::ServiceId;
use crate::dto::page_data;
use crate::pagination::PaginationMeta;

#[derive(Debug, Default, Serialize)]
pub struct ServicesPageData {
    pub services: Vec<Service>,
    pub pagination: PaginationMeta,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Actions configured on one service and the triggers they can bind to.
#[derive(Debug, Default, Serialize)]
pub struct ActionsPageData {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub service_id: Option<ServiceId>,
    pub actions: Vec<Action>,
    pub triggers: Vec<ActionTrigger>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

page_data!(ServicesPageData, ActionsPageData);
