use axum::http::{StatusCode, header};
use axum::response::{IntoResponse, Response};

/// API service error variants.
///
/// Absent ids and ownership mismatches are both "not found" on purpose: a 404
/// for someone else's collection does not leak that the record exists.
#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("invalid credentials")]
    InvalidCredentials,
    #[error("collection not found")]
    CollectionNotFound,
    #[error("flashcard not found")]
    FlashcardNotFound,
    #[error("email already registered")]
    EmailAlreadyRegistered,
    #[error("{0}")]
    Validation(&'static str),
    #[error("storage failure")]
    Storage(#[source] anyhow::Error),
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl ApiError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::CollectionNotFound => "COLLECTION_NOT_FOUND",
            Self::FlashcardNotFound => "FLASHCARD_NOT_FOUND",
            Self::EmailAlreadyRegistered => "EMAIL_ALREADY_REGISTERED",
            Self::Validation(_) => "VALIDATION",
            Self::Storage(_) => "STORAGE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::CollectionNotFound | Self::FlashcardNotFound => StatusCode::NOT_FOUND,
            // Duplicate email maps to 400, matching the registration contract.
            Self::EmailAlreadyRegistered | Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Storage(_) | Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        // Log 500s only — tower-http TraceLayer already records method/uri/status for all
        // requests. 4xx are expected client errors; logging them here would be noise.
        match &self {
            Self::Storage(e) | Self::Internal(e) => {
                tracing::error!(error = %e, kind = self.kind(), "request failed");
            }
            _ => {}
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        if matches!(self, Self::InvalidCredentials) {
            // Challenge again: the pair was well-formed but matched nothing.
            return (status, [(header::WWW_AUTHENTICATE, "Basic")], axum::Json(body))
                .into_response();
        }
        (status, axum::Json(body)).into_response()
    }
}
