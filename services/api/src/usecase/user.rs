use anyhow::anyhow;
use uuid::Uuid;

use flashdeck_domain::id::{CollectionId, UserId};
use flashdeck_domain::owner::OwnerId;

use crate::domain::repository::{CollectionRepository, FlashcardRepository, UserRepository};
use crate::domain::types::{User, is_blank};
use crate::error::ApiError;
use crate::password;

// ── RegisterUser ─────────────────────────────────────────────────────────────

pub struct RegisterUserInput {
    pub name: String,
    pub email: String,
    pub password: String,
}

pub struct RegisterUserUseCase<R: UserRepository> {
    pub users: R,
}

impl<R: UserRepository> RegisterUserUseCase<R> {
    pub async fn execute(&self, input: RegisterUserInput) -> Result<User, ApiError> {
        if is_blank(&input.name) {
            return Err(ApiError::Validation("name must not be empty"));
        }
        if is_blank(&input.email) {
            return Err(ApiError::Validation("email must not be empty"));
        }
        if is_blank(&input.password) {
            return Err(ApiError::Validation("password must not be empty"));
        }
        let password_hash = password::hash_password(&input.password)
            .map_err(|e| ApiError::Internal(anyhow!("hash password: {e}")))?;
        let user = User {
            id: UserId(Uuid::now_v7()),
            name: input.name,
            email: input.email,
            password_hash,
        };
        if !self.users.create(&user).await? {
            return Err(ApiError::EmailAlreadyRegistered);
        }
        Ok(user)
    }
}

// ── UserStats ────────────────────────────────────────────────────────────────

#[derive(Debug, PartialEq, Eq)]
pub struct UserStats {
    pub total_collections: u64,
    pub total_flashcards: u64,
    /// Study sessions are not tracked anywhere; always zero.
    pub study_sessions: u64,
    pub public_collections: u64,
}

pub struct UserStatsUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> UserStatsUseCase<C, F> {
    pub async fn execute(&self, caller: &OwnerId) -> Result<UserStats, ApiError> {
        let owned = if caller.is_admin() {
            self.collections.list_all().await?
        } else {
            self.collections.list_by_owner(caller).await?
        };
        let ids: Vec<CollectionId> = owned.iter().map(|c| c.id).collect();
        let total_flashcards = self.flashcards.count_for_collections(&ids).await?;
        Ok(UserStats {
            total_collections: owned.len() as u64,
            total_flashcards,
            study_sessions: 0,
            public_collections: owned.iter().filter(|c| c.is_public).count() as u64,
        })
    }
}
