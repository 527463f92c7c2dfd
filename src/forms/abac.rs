use serde::Deserialize;
use validator::Validate;
use serde_json::Value;

use crate::domain::abac::{
    AbacDraftInput, AbacMode, AbacPolicyDocument, AbacSimulationInput, AbacSimulationRequest,
};
use crate::domain::types::PolicyVersionId;
use crate::forms::{FormError, optional, required};

#[derive(Debug, Default, Deserialize, Validate)]
/// Form posted from a tenant's ABAC policy page.
pub struct AbacForm {
    pub intent: Option<String>,
    pub version_id: Option<String>,
    pub change_note: Option<String>,
    pub policy: Option<String>,
    pub mode: Option<String>,
    pub sim_action: Option<String>,
    pub sim_resource_type: Option<String>,
    pub sim_subject: Option<String>,
    pub sim_resource: Option<String>,
    pub sim_request: Option<String>,
    pub sim_env: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum AbacIntent {
    Create(AbacDraftInput),
    Update {
        version_id: PolicyVersionId,
        input: AbacDraftInput,
    },
    Publish {
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    },
    Rollback {
        version_id: PolicyVersionId,
        mode: Option<AbacMode>,
    },
    Simulate(AbacSimulationRequest),
}

fn parse_version_id(value: Option<&str>) -> Result<PolicyVersionId, FormError> {
    let raw = required(value, "Version ID")?;
    PolicyVersionId::new(&raw).map_err(|_| FormError::Invalid("version ID"))
}

fn parse_policy(value: &str) -> Result<AbacPolicyDocument, FormError> {
    serde_json::from_str(value).map_err(|_| FormError::InvalidJson("Policy"))
}

fn parse_mode(value: Option<&str>) -> Result<Option<AbacMode>, FormError> {
    optional(value)
        .map(|raw| raw.parse::<AbacMode>().map_err(|_| FormError::Invalid("mode")))
        .transpose()
}

/// Optional JSON object; blank input becomes `{}`.
fn parse_object(value: Option<&str>, field: &'static str) -> Result<Value, FormError> {
    let Some(raw) = optional(value) else {
        return Ok(Value::Object(Default::default()));
    };
    match serde_json::from_str::<Value>(&raw) {
        Ok(object @ Value::Object(_)) => Ok(object),
        _ => Err(FormError::InvalidJson(field)),
    }
}

fn draft_input(form: &AbacForm) -> Result<AbacDraftInput, FormError> {
    let policy = required(form.policy.as_deref(), "Policy")?;
    Ok(AbacDraftInput {
        change_note: optional(form.change_note.as_deref()),
        policy: parse_policy(&policy)?,
    })
}

impl TryFrom<AbacForm> for AbacIntent {
    type Error = FormError;

    fn try_from(form: AbacForm) -> Result<Self, Self::Error> {
        match form.intent.as_deref().map(str::trim) {
            Some("create") => Ok(AbacIntent::Create(draft_input(&form)?)),
            Some("update") => Ok(AbacIntent::Update {
                version_id: parse_version_id(form.version_id.as_deref())?,
                input: draft_input(&form)?,
            }),
            Some("publish") => Ok(AbacIntent::Publish {
                version_id: parse_version_id(form.version_id.as_deref())?,
                mode: parse_mode(form.mode.as_deref())?,
            }),
            Some("rollback") => Ok(AbacIntent::Rollback {
                version_id: parse_version_id(form.version_id.as_deref())?,
                mode: parse_mode(form.mode.as_deref())?,
            }),
            Some("simulate") => {
                let simulation = AbacSimulationInput {
                    action: required(form.sim_action.as_deref(), "Action")?,
                    resource_type: required(form.sim_resource_type.as_deref(), "Resource type")?,
                    subject: parse_object(form.sim_subject.as_deref(), "Subject")?,
                    resource: parse_object(form.sim_resource.as_deref(), "Resource")?,
                    request: parse_object(form.sim_request.as_deref(), "Request")?,
                    env: parse_object(form.sim_env.as_deref(), "Environment")?,
                };
                let policy = optional(form.policy.as_deref())
                    .map(|raw| parse_policy(&raw))
                    .transpose()?;
                Ok(AbacIntent::Simulate(AbacSimulationRequest { policy, simulation }))
            }
            _ => Err(FormError::InvalidIntent),
        }
    }
}
