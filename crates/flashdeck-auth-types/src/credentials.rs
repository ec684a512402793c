//! Basic-auth credential pair extractor.

use axum::extract::FromRequestParts;
use axum::response::{IntoResponse, Response};
use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;
use http::request::Parts;
use http::{StatusCode, header};

/// Username/password pair from an `Authorization: Basic` header.
///
/// Rejects with 401 and a `WWW-Authenticate: Basic` challenge when the header
/// is absent, carries a different scheme, is not valid base64/UTF-8, or has no
/// `:` separator. Whether the pair actually names anyone is decided later by
/// the credential gate; extraction never touches the store.
#[derive(Debug, Clone)]
pub struct BasicCredentials {
    pub username: String,
    pub password: String,
}

impl BasicCredentials {
    fn parse(header_value: &str) -> Option<Self> {
        let encoded = header_value.strip_prefix("Basic ")?;
        let decoded = STANDARD.decode(encoded.trim()).ok()?;
        let decoded = String::from_utf8(decoded).ok()?;
        // split_once keeps any further ':' inside the password.
        let (username, password) = decoded.split_once(':')?;
        Some(Self {
            username: username.to_owned(),
            password: password.to_owned(),
        })
    }
}

/// 401 challenge response advertising that Basic auth is expected.
#[derive(Debug)]
pub struct BasicAuthRejection;

impl IntoResponse for BasicAuthRejection {
    fn into_response(self) -> Response {
        let body = serde_json::json!({
            "kind": "UNAUTHENTICATED",
            "message": "authentication required",
        });
        (
            StatusCode::UNAUTHORIZED,
            [(header::WWW_AUTHENTICATE, "Basic")],
            axum::Json(body),
        )
            .into_response()
    }
}

impl<S> FromRequestParts<S> for BasicCredentials
where
    S: Send + Sync,
{
    type Rejection = BasicAuthRejection;

    // axum-core 0.5 defines this as `fn -> impl Future + Send` (not `async fn`).
    // Extract synchronously, return a 'static async move block.
    fn from_request_parts(
        parts: &mut Parts,
        _state: &S,
    ) -> impl std::future::Future<Output = Result<Self, Self::Rejection>> + Send {
        let credentials = parts
            .headers
            .get(header::AUTHORIZATION)
            .and_then(|v| v.to_str().ok())
            .and_then(Self::parse);

        async move { credentials.ok_or(BasicAuthRejection) }
    }
}
