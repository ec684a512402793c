#![allow(async_fn_in_trait)]

use flashdeck_domain::id::{CardId, CollectionId};
use flashdeck_domain::owner::OwnerId;

use crate::domain::types::{Collection, CollectionPatch, Flashcard, FlashcardPatch, User};
use crate::error::ApiError;

/// Repository for registered users.
pub trait UserRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError>;

    /// Insert a user unless the email is already registered. The uniqueness
    /// check and the insert run under one exclusive lock acquisition.
    /// Returns `false` when the email is taken.
    async fn create(&self, user: &User) -> Result<bool, ApiError>;
}

/// Repository for flashcard collections.
pub trait CollectionRepository: Send + Sync {
    async fn list_all(&self) -> Result<Vec<Collection>, ApiError>;

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>, ApiError>;

    /// Lookup by id alone — the unauthenticated read path.
    async fn find(&self, id: CollectionId) -> Result<Option<Collection>, ApiError>;

    /// Lookup by id, visible to `caller` only (owner match, or admin caller).
    async fn find_accessible(
        &self,
        id: CollectionId,
        caller: &OwnerId,
    ) -> Result<Option<Collection>, ApiError>;

    async fn exists(&self, id: CollectionId) -> Result<bool, ApiError>;

    async fn create(&self, collection: &Collection) -> Result<(), ApiError>;

    /// Apply a patch to the collection matching `id` and the ownership rule,
    /// merging and persisting under one exclusive lock acquisition.
    /// Returns the updated record, or `None` when nothing matched.
    async fn update(
        &self,
        id: CollectionId,
        caller: &OwnerId,
        patch: &CollectionPatch,
    ) -> Result<Option<Collection>, ApiError>;

    /// Delete the collection matching `id` and the ownership rule.
    /// Returns `true` if a record was removed.
    async fn delete(&self, id: CollectionId, caller: &OwnerId) -> Result<bool, ApiError>;
}

/// Repository for flashcards.
///
/// Mutations are id-scoped: no ownership rule is applied at this level (see
/// the service design notes on the card authorization scope).
pub trait FlashcardRepository: Send + Sync {
    async fn list_by_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<Flashcard>, ApiError>;

    /// Count cards whose collection is in `collection_ids`.
    async fn count_for_collections(
        &self,
        collection_ids: &[CollectionId],
    ) -> Result<u64, ApiError>;

    async fn create(&self, card: &Flashcard) -> Result<(), ApiError>;

    async fn create_many(&self, cards: &[Flashcard]) -> Result<(), ApiError>;

    /// Apply a patch to the card matching `id`, merging and persisting under
    /// one exclusive lock acquisition. Returns the updated record, or `None`
    /// when the id is unknown.
    async fn update(&self, id: CardId, patch: &FlashcardPatch)
    -> Result<Option<Flashcard>, ApiError>;

    /// Returns `true` if a record was removed.
    async fn delete(&self, id: CardId) -> Result<bool, ApiError>;

    /// Cascade path for collection deletion: remove every card referencing
    /// the collection. Returns the number removed.
    async fn delete_by_collection(&self, collection_id: CollectionId) -> Result<u64, ApiError>;
}
