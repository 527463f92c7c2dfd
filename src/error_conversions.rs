//! Error conversion glue between the layers.
//!
//! The domain layer must not depend on service or client error types, so the
//! conversions live here.

use crate::api::errors::ApiError;
use crate::domain::types::TypeConstraintError;
use crate::forms::FormError;
use crate::services::ServiceError;

impl From<TypeConstraintError> for ServiceError {
    fn from(val: TypeConstraintError) -> Self {
        ServiceError::Form(val.to_string())
    }
}

impl From<FormError> for ServiceError {
    fn from(val: FormError) -> Self {
        match val {
            FormError::InvalidIntent => ServiceError::InvalidIntent,
            other => ServiceError::Form(other.to_string()),
        }
    }
}

impl From<ApiError> for ServiceError {
    fn from(val: ApiError) -> Self {
        match val {
            ApiError::Unauthorized => ServiceError::Unauthorized,
            ApiError::NotFound(message) | ApiError::Status { message, .. } => {
                ServiceError::Upstream(message)
            }
            ApiError::Transport(_) | ApiError::Decode(_) => ServiceError::Unexpected,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn backend_messages_pass_through_verbatim() {
        let err = ApiError::Status {
            status: 409,
            message: "Slug already taken".to_string(),
        };
        assert_eq!(
            ServiceError::from(err).to_string(),
            "Slug already taken".to_string()
        );
    }

    #[test]
    fn transport_failures_use_generic_message() {
        let err = ServiceError::from(ApiError::Transport("connection refused".to_string()));
        assert_eq!(err, ServiceError::Unexpected);
        assert_eq!(err.to_string(), "Operation failed");

        let err = ServiceError::from(ApiError::Decode("expected value".to_string()));
        assert_eq!(err.to_string(), "Operation failed");
    }

    #[test]
    fn unknown_intent_maps_to_invalid_action() {
        let err = ServiceError::from(FormError::InvalidIntent);
        assert_eq!(err.to_string(), "Invalid action");
    }
}
