use crate::api::{BrandingReader, BrandingWriter};
use crate::domain::branding::BrandingConfig;
use crate::domain::types::AccessToken;
use crate::dto::PageData;
use crate::dto::settings::BrandingPageData;
use crate::forms::branding::{BrandingForm, BrandingIntent};
use crate::services::{
    ActionReply, ServiceResult, action_error, loader_error, parse_intent,
};

pub async fn load_branding_page<A>(api: &A, token: &AccessToken) -> ServiceResult<BrandingPageData>
where
    A: BrandingReader + ?Sized,
{
    match api.get_branding(token).await {
        Ok(branding) => Ok(BrandingPageData {
            branding: Some(branding),
            error: None,
        }),
        Err(err) => {
            loader_error("Failed to load branding", err)?;
            Ok(BrandingPageData::failed("Failed to load branding"))
        }
    }
}

/// Saving and resetting both store a full configuration document.
pub async fn branding_action<A>(
    api: &A,
    token: &AccessToken,
    body: &[u8],
) -> ServiceResult<ActionReply>
where
    A: BrandingWriter + ?Sized,
{
    let (config, message) = match parse_intent::<BrandingForm, BrandingIntent>(body)? {
        BrandingIntent::Save(branding) => (BrandingConfig::from(branding), "Branding saved"),
        BrandingIntent::Reset => (BrandingConfig::default(), "Branding reset to defaults"),
    };

    let saved = api
        .update_branding(token, &config)
        .await
        .map_err(|err| action_error("Failed to update branding", err))?;
    Ok(ActionReply::success(message).with("branding", &saved))
}

#[cfg(all(test, feature = "test-mocks"))]
mod tests {
    use super::*;
    use crate::api::mock::MockApi;
    use crate::domain::branding::DEFAULT_PRIMARY_COLOR;
    use crate::services::fixtures::token;

    #[actix_web::test]
    async fn reset_stores_defaults() {
        let mut api = MockApi::new();
        api.expect_update_branding()
            .withf(|_, config| *config == BrandingConfig::default())
            .times(1)
            .returning(|_, config| Ok(config.clone()));

        let reply = branding_action(&api, &token(), b"intent=reset").await.unwrap();

        match reply {
            ActionReply::Success { message, data } => {
                assert_eq!(message.as_deref(), Some("Branding reset to defaults"));
                assert_eq!(data["branding"]["primary_color"], DEFAULT_PRIMARY_COLOR);
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[actix_web::test]
    async fn invalid_color_is_not_saved() {
        let mut api = MockApi::new();
        api.expect_update_branding().times(0);

        let result = branding_action(
            &api,
            &token(),
            b"intent=save&primary_color=red&secondary_color=%23000&background_color=%23fff&text_color=%23000",
        )
        .await;

        assert_eq!(
            result.unwrap_err().to_string(),
            "Invalid primary color".to_string()
        );
    }
}
