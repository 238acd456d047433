use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::de::DeserializeOwned;
use shared::errors::{ErrorResponse, format_validation_errors};
use thiserror::Error;
use tracing::warn;
use validator::{Validate, ValidationErrors};

/// JSON body that has passed its `validator` rules.
pub struct SimpleValidatedJson<T>(pub T);

#[derive(Debug, Error)]
pub enum ValidatedJsonRejection {
    #[error(transparent)]
    Json(#[from] JsonRejection),

    #[error("Validation failed")]
    Invalid(#[from] ValidationErrors),
}

impl IntoResponse for ValidatedJsonRejection {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ValidatedJsonRejection::Json(JsonRejection::MissingJsonContentType(e)) => {
                (StatusCode::UNSUPPORTED_MEDIA_TYPE, e.body_text())
            }
            ValidatedJsonRejection::Json(e) => (StatusCode::BAD_REQUEST, e.body_text()),
            ValidatedJsonRejection::Invalid(errors) => (
                StatusCode::BAD_REQUEST,
                format!(
                    "Validation failed: {}",
                    format_validation_errors(&errors).join("; ")
                ),
            ),
        };

        warn!("⚠️ Rejected request body ({}): {message}", status.as_u16());

        (status, Json(ErrorResponse::new(message))).into_response()
    }
}

impl<T, S> FromRequest<S> for SimpleValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = ValidatedJsonRejection;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(SimpleValidatedJson(value))
    }
}
