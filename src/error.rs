use axum::{
    async_trait,
    extract::{rejection::JsonRejection, FromRequest, Request},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde::{de::DeserializeOwned, Serialize};
use tracing::{error, warn};
use validator::{Validate, ValidationErrors};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid request body: {0}")]
    Body(#[from] JsonRejection),
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationErrors),
    #[error("internal error: {0:#}")]
    Internal(#[from] anyhow::Error),
}

#[derive(Debug, Serialize)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

fn field_errors(errors: &ValidationErrors) -> Vec<FieldError> {
    let mut out: Vec<FieldError> = errors
        .field_errors()
        .into_iter()
        .flat_map(|(field, errs)| {
            errs.iter().map(move |e| FieldError {
                field: field.to_string(),
                message: e
                    .message
                    .as_ref()
                    .map(|m| m.to_string())
                    .unwrap_or_else(|| e.code.to_string()),
            })
        })
        .collect();
    out.sort_by(|a, b| a.field.cmp(&b.field));
    out
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::Body(rejection) => {
                warn!(error = %rejection.body_text(), "request body rejected");
                // oversized or unreadable bodies keep their own status
                let status = match &rejection {
                    JsonRejection::BytesRejection(_) => rejection.status(),
                    _ => StatusCode::UNPROCESSABLE_ENTITY,
                };
                let body = serde_json::json!({
                    "error": "validation_failed",
                    "detail": [FieldError {
                        field: "body".into(),
                        message: rejection.body_text(),
                    }],
                });
                (status, Json(body)).into_response()
            }
            ApiError::Validation(errors) => {
                let detail = field_errors(&errors);
                warn!(errors = ?detail, "request validation failed");
                let body = serde_json::json!({
                    "error": "validation_failed",
                    "detail": detail,
                });
                (StatusCode::UNPROCESSABLE_ENTITY, Json(body)).into_response()
            }
            ApiError::Internal(e) => {
                error!(error = %format!("{e:#}"), "request failed");
                let body = serde_json::json!({
                    "error": "internal_error",
                    "message": "failed to record meal plan request",
                });
                (StatusCode::INTERNAL_SERVER_ERROR, Json(body)).into_response()
            }
        }
    }
}

/// `Json<T>` that also runs `T::validate()` before the handler sees it.
pub struct ValidatedJson<T>(pub T);

#[async_trait]
impl<T, S> FromRequest<S> for ValidatedJson<T>
where
    T: DeserializeOwned + Validate + Send,
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let Json(value) = Json::<T>::from_request(req, state).await?;
        value.validate()?;
        Ok(ValidatedJson(value))
    }
}
