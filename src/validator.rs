use anyhow::anyhow;
use axum::{
    Json,
    extract::{FromRequest, Request, rejection::JsonRejection},
    http::StatusCode,
};
use serde::de::DeserializeOwned;
use validator::{Validate, ValidationErrors};

use crate::utils::errors::AppError;

/// Json extractor that validates the payload before the handler runs.
///
/// Every rejection, whether the body could not be parsed or a validation
/// rule failed, answers 400 with a plain-text message naming the problem.
#[derive(Debug, Clone, Copy, Default)]
pub struct ValidatedJson<T>(pub T);

impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate,
    S: Send + Sync,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state)
            .await
            .map_err(bad_request_body)?;

        value.validate().map_err(|errors| {
            AppError::new(StatusCode::BAD_REQUEST, anyhow!("{}", format_errors(&errors)))
        })?;

        Ok(ValidatedJson(value))
    }
}

/// Turns a Json rejection into a 400 with a readable message.
///
/// Serde's errors are parsed for the common cases (missing field, wrong
/// type) so clients see the offending field instead of a deserializer trace.
fn bad_request_body(rejection: JsonRejection) -> AppError {
    if matches!(rejection, JsonRejection::MissingJsonContentType(_)) {
        return AppError::new(
            StatusCode::BAD_REQUEST,
            anyhow!("Missing 'Content-Type: application/json' header"),
        );
    }

    let body_text = rejection.body_text();

    if let Some(field) = body_text
        .split("missing field `")
        .nth(1)
        .and_then(|rest| rest.split('`').next())
    {
        return AppError::new(StatusCode::BAD_REQUEST, anyhow!("{} is required", field));
    }

    if body_text.contains("invalid type") {
        return AppError::new(
            StatusCode::BAD_REQUEST,
            anyhow!("Invalid field type in request"),
        );
    }

    AppError::new(StatusCode::BAD_REQUEST, anyhow!("Invalid request body"))
}

fn format_errors(errors: &ValidationErrors) -> String {
    errors
        .field_errors()
        .iter()
        .flat_map(|(field, errors)| {
            errors.iter().filter_map(move |error| {
                error
                    .message
                    .as_ref()
                    .map(|msg| msg.to_string())
                    .or_else(|| Some(format!("{} is invalid", field)))
            })
        })
        .collect::<Vec<_>>()
        .join(", ")
}
