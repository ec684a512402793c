use anyhow::anyhow;

use flashdeck_auth_types::credentials::BasicCredentials;
use flashdeck_domain::owner::OwnerId;

use crate::config::AdminCredentials;
use crate::domain::repository::UserRepository;
use crate::error::ApiError;
use crate::password;

// ── ResolveIdentity ──────────────────────────────────────────────────────────

/// The credential gate: turns a Basic credential pair into a caller identity.
///
/// Resolution order: the configured administrative pair first (exact match on
/// both fields, no store access), then a case-sensitive email scan of the
/// user records with an Argon2id password check. Read-only; every request is
/// re-authenticated independently.
pub struct ResolveIdentityUseCase<R: UserRepository> {
    pub users: R,
    pub admin: Option<AdminCredentials>,
}

impl<R: UserRepository> ResolveIdentityUseCase<R> {
    pub async fn execute(&self, credentials: &BasicCredentials) -> Result<OwnerId, ApiError> {
        if let Some(admin) = &self.admin {
            if admin.username == credentials.username && admin.password == credentials.password {
                return Ok(OwnerId::Admin);
            }
        }
        if let Some(user) = self.users.find_by_email(&credentials.username).await? {
            let matches = password::verify_password(&credentials.password, &user.password_hash)
                .map_err(|e| ApiError::Internal(anyhow!("verify password: {e}")))?;
            if matches {
                return Ok(OwnerId::User(user.id));
            }
        }
        Err(ApiError::InvalidCredentials)
    }
}
