use crate::api::{SessionReader, SessionWriter};
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::account::SessionsPageData;
use crate::forms::sessions::{SessionForm, SessionIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

pub const SESSIONS_PATH: &str = "/dashboard/account/sessions";

pub async fn load_sessions_page<A>(api: &A, token: &AccessToken) -> ServiceResult<SessionsPageData>
where
    A: SessionReader + ?Sized,
{
    match api.list_sessions(token).await {
        Ok(sessions) => Ok(SessionsPageData {
            sessions,
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to list sessions", err)?;
            Ok(SessionsPageData::failed("Failed to load sessions"))
        }
    }
}

/// Revocations redirect back to the list so the revoked rows disappear.
pub async fn sessions_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: SessionWriter + ?Sized,
{
    match parse_intent::<SessionForm, SessionIntent>(body)? {
        SessionIntent::Revoke(session_id) => {
            api.revoke_session(token, session_id)
                .await
                .map_err(|err| action_error("Failed to revoke session", err))?;
            Ok(ActionReply::redirect(SESSIONS_PATH, "Session revoked"))
        }
        SessionIntent::RevokeAll => {
            api.revoke_other_sessions(token)
                .await
                .map_err(|err| action_error("Failed to revoke sessions", err))?;
            Ok(ActionReply::redirect(
                SESSIONS_PATH,
                "All other sessions revoked",
            ))
        }
        SessionIntent::ForceLogout(user_id) => {
            api.force_logout_user(token, user_id)
                .await
                .map_err(|err| action_error("Failed to force logout", err))?;
            Ok(ActionReply::success("User logged out from all sessions"))
        }
    }
}
