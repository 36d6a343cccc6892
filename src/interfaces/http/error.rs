use crate::error::PaymentError;
use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde_json::json;

/// Errors surfaced by the HTTP handlers, each mapped to a status and JSON body.
#[derive(Debug)]
pub enum ApiError {
    /// The body could not be decoded into a charge request.
    MalformedInput(String),
    NotFound,
    Payment(PaymentError),
}

impl From<PaymentError> for ApiError {
    fn from(err: PaymentError) -> Self {
        ApiError::Payment(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, body) = match self {
            ApiError::MalformedInput(message) => {
                (StatusCode::BAD_REQUEST, json!({ "error": message }))
            }
            ApiError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({ "error": "transaction not found" }),
            ),
            ApiError::Payment(PaymentError::ValidationFailed(details)) => (
                StatusCode::BAD_REQUEST,
                json!({ "error": "Invalid card details", "details": details }),
            ),
            ApiError::Payment(err) => {
                tracing::error!(error = %err, "charge processing failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({ "error": err.to_string() }),
                )
            }
        };
        (status, Json(body)).into_response()
    }
}
