use uuid::Uuid;

use flashdeck_domain::id::{CardId, CollectionId};
use flashdeck_domain::owner::OwnerId;

use crate::domain::repository::{CollectionRepository, FlashcardRepository};
use crate::domain::types::{Collection, CollectionPatch, Flashcard, is_blank};
use crate::error::ApiError;

/// A collection together with its cards — the detail-view shape.
#[derive(Debug)]
pub struct CollectionDetails {
    pub collection: Collection,
    pub cards: Vec<Flashcard>,
}

// ── ListPublicCollections ────────────────────────────────────────────────────

/// Every collection is browsable without credentials; "public" means
/// unauthenticated-readable, not a moderation flag.
pub struct ListPublicCollectionsUseCase<C: CollectionRepository> {
    pub collections: C,
}

impl<C: CollectionRepository> ListPublicCollectionsUseCase<C> {
    pub async fn execute(&self) -> Result<Vec<Collection>, ApiError> {
        self.collections.list_all().await
    }
}

// ── GetPublicCollection ──────────────────────────────────────────────────────

pub struct GetPublicCollectionUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> GetPublicCollectionUseCase<C, F> {
    pub async fn execute(&self, id: CollectionId) -> Result<CollectionDetails, ApiError> {
        let collection = self
            .collections
            .find(id)
            .await?
            .ok_or(ApiError::CollectionNotFound)?;
        let cards = self.flashcards.list_by_collection(id).await?;
        Ok(CollectionDetails { collection, cards })
    }
}

// ── ListCollections ──────────────────────────────────────────────────────────

pub struct ListCollectionsUseCase<C: CollectionRepository> {
    pub collections: C,
}

impl<C: CollectionRepository> ListCollectionsUseCase<C> {
    pub async fn execute(&self, caller: &OwnerId) -> Result<Vec<Collection>, ApiError> {
        if caller.is_admin() {
            self.collections.list_all().await
        } else {
            self.collections.list_by_owner(caller).await
        }
    }
}

// ── GetCollection ────────────────────────────────────────────────────────────

pub struct GetCollectionUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> GetCollectionUseCase<C, F> {
    pub async fn execute(
        &self,
        caller: &OwnerId,
        id: CollectionId,
    ) -> Result<CollectionDetails, ApiError> {
        let collection = self
            .collections
            .find_accessible(id, caller)
            .await?
            .ok_or(ApiError::CollectionNotFound)?;
        let cards = self.flashcards.list_by_collection(id).await?;
        Ok(CollectionDetails { collection, cards })
    }
}

// ── CreateCollection ─────────────────────────────────────────────────────────

pub struct CreateCollectionInput {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub topics: Vec<String>,
    pub is_public: bool,
}

pub struct CreateCollectionUseCase<C: CollectionRepository> {
    pub collections: C,
}

impl<C: CollectionRepository> CreateCollectionUseCase<C> {
    pub async fn execute(
        &self,
        caller: &OwnerId,
        input: CreateCollectionInput,
    ) -> Result<Collection, ApiError> {
        if is_blank(&input.title) {
            return Err(ApiError::Validation("title must not be empty"));
        }
        let collection = Collection {
            id: CollectionId(Uuid::now_v7()),
            title: input.title,
            description: input.description,
            subject: input.subject,
            topics: input.topics,
            owner_id: *caller,
            is_public: input.is_public,
        };
        self.collections.create(&collection).await?;
        Ok(collection)
    }
}

// ── UpdateCollection ─────────────────────────────────────────────────────────

pub struct UpdateCollectionUseCase<C: CollectionRepository> {
    pub collections: C,
}

impl<C: CollectionRepository> UpdateCollectionUseCase<C> {
    pub async fn execute(
        &self,
        caller: &OwnerId,
        id: CollectionId,
        patch: CollectionPatch,
    ) -> Result<Collection, ApiError> {
        if let Some(title) = &patch.title {
            if is_blank(title) {
                return Err(ApiError::Validation("title must not be empty"));
            }
        }
        self.collections
            .update(id, caller, &patch)
            .await?
            .ok_or(ApiError::CollectionNotFound)
    }
}

// ── DeleteCollection ─────────────────────────────────────────────────────────

pub struct DeleteCollectionUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> DeleteCollectionUseCase<C, F> {
    /// Removes the collection and cascades to its cards. The two record sets
    /// are persisted independently, collections first.
    pub async fn execute(&self, caller: &OwnerId, id: CollectionId) -> Result<(), ApiError> {
        if !self.collections.delete(id, caller).await? {
            return Err(ApiError::CollectionNotFound);
        }
        self.flashcards.delete_by_collection(id).await?;
        Ok(())
    }
}

// ── CloneCollection ──────────────────────────────────────────────────────────

/// Copy any browsable collection — and its cards — into the caller's account.
/// The copy gets fresh ids, the caller as owner, and starts out private.
pub struct CloneCollectionUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> CloneCollectionUseCase<C, F> {
    pub async fn execute(
        &self,
        caller: &OwnerId,
        source_id: CollectionId,
    ) -> Result<CollectionDetails, ApiError> {
        let source = self
            .collections
            .find(source_id)
            .await?
            .ok_or(ApiError::CollectionNotFound)?;
        let source_cards = self.flashcards.list_by_collection(source_id).await?;

        let collection = Collection {
            id: CollectionId(Uuid::now_v7()),
            title: source.title,
            description: source.description,
            subject: source.subject,
            topics: source.topics,
            owner_id: *caller,
            is_public: false,
        };
        let cards: Vec<Flashcard> = source_cards
            .into_iter()
            .map(|card| Flashcard {
                id: CardId(Uuid::now_v7()),
                collection_id: collection.id,
                question: card.question,
                answer: card.answer,
            })
            .collect();

        self.collections.create(&collection).await?;
        self.flashcards.create_many(&cards).await?;
        Ok(CollectionDetails { collection, cards })
    }
}
