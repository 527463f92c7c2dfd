//! Attribute based access control policy documents and versions.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum AbacMode {
    #[default]
    Disabled,
    Shadow,
    Enforce,
}

impl std::str::FromStr for AbacMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "disabled" => Ok(AbacMode::Disabled),
            "shadow" => Ok(AbacMode::Shadow),
            "enforce" => Ok(AbacMode::Enforce),
            other => Err(format!("Unknown ABAC mode: {other}")),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AbacEffect {
    Allow,
    Deny,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacRule {
    pub id: String,
    pub effect: AbacEffect,
    #[serde(default)]
    pub actions: Vec<String>,
    #[serde(default)]
    pub resource_types: Vec<String>,
    #[serde(default)]
    pub priority: i32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub condition: Option<serde_json::Value>,
}

/// Policy document edited in the dashboard and stored as a version upstream.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacPolicyDocument {
    #[serde(default)]
    pub rules: Vec<AbacRule>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacPolicySetSummary {
    pub policy_set_id: String,
    pub tenant_id: String,
    #[serde(default)]
    pub mode: AbacMode,
    #[serde(default)]
    pub published_version_id: Option<String>,
    #[serde(default)]
    pub published_version_no: Option<i32>,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacPolicyVersionSummary {
    pub id: String,
    pub policy_set_id: String,
    pub version_no: i32,
    pub status: String,
    #[serde(default)]
    pub change_note: Option<String>,
    #[serde(default)]
    pub created_by: Option<String>,
    pub created_at: String,
    #[serde(default)]
    pub published_at: Option<String>,
}

/// Listing returned by `GET /tenants/{id}/abac/policies`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct AbacPolicies {
    #[serde(default)]
    pub policy_set: Option<AbacPolicySetSummary>,
    #[serde(default)]
    pub versions: Vec<AbacPolicyVersionSummary>,
}

/// Identifier data echoed back after creating or updating a draft.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacDraft {
    pub id: String,
    #[serde(default)]
    pub policy_set_id: Option<String>,
    #[serde(default)]
    pub version_no: Option<i32>,
    #[serde(default)]
    pub status: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AbacDraftInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub change_note: Option<String>,
    pub policy: AbacPolicyDocument,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacSimulationInput {
    pub action: String,
    pub resource_type: String,
    pub subject: serde_json::Value,
    pub resource: serde_json::Value,
    pub request: serde_json::Value,
    pub env: serde_json::Value,
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AbacSimulationRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub policy: Option<AbacPolicyDocument>,
    pub simulation: AbacSimulationInput,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct AbacSimulationResult {
    pub decision: String,
    #[serde(default)]
    pub matched_allow_rule_ids: Vec<String>,
    #[serde(default)]
    pub matched_deny_rule_ids: Vec<String>,
}
