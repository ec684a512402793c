use uuid::Uuid;

use flashdeck_domain::id::{CardId, CollectionId};

use crate::domain::repository::{CollectionRepository, FlashcardRepository};
use crate::domain::types::{Flashcard, FlashcardPatch, is_blank};
use crate::error::ApiError;

// Card operations are id-scoped on purpose: the parent collection's owner is
// not re-derived here. See DESIGN.md for the authorization-scope decision.

// ── ListFlashcards ───────────────────────────────────────────────────────────

pub struct ListFlashcardsUseCase<F: FlashcardRepository> {
    pub flashcards: F,
}

impl<F: FlashcardRepository> ListFlashcardsUseCase<F> {
    /// Unknown collection ids yield an empty list, not an error — the listing
    /// never checks collection existence.
    pub async fn execute(&self, collection_id: CollectionId) -> Result<Vec<Flashcard>, ApiError> {
        self.flashcards.list_by_collection(collection_id).await
    }
}

// ── AddFlashcard ─────────────────────────────────────────────────────────────

pub struct AddFlashcardInput {
    pub question: String,
    pub answer: String,
}

pub struct AddFlashcardUseCase<C: CollectionRepository, F: FlashcardRepository> {
    pub collections: C,
    pub flashcards: F,
}

impl<C: CollectionRepository, F: FlashcardRepository> AddFlashcardUseCase<C, F> {
    /// The card's collection reference must name an existing collection at
    /// creation time; it is never re-validated afterward.
    pub async fn execute(
        &self,
        collection_id: CollectionId,
        input: AddFlashcardInput,
    ) -> Result<Flashcard, ApiError> {
        if is_blank(&input.question) {
            return Err(ApiError::Validation("question must not be empty"));
        }
        if is_blank(&input.answer) {
            return Err(ApiError::Validation("answer must not be empty"));
        }
        if !self.collections.exists(collection_id).await? {
            return Err(ApiError::CollectionNotFound);
        }
        let card = Flashcard {
            id: CardId(Uuid::now_v7()),
            collection_id,
            question: input.question,
            answer: input.answer,
        };
        self.flashcards.create(&card).await?;
        Ok(card)
    }
}

// ── UpdateFlashcard ──────────────────────────────────────────────────────────

pub struct UpdateFlashcardUseCase<F: FlashcardRepository> {
    pub flashcards: F,
}

impl<F: FlashcardRepository> UpdateFlashcardUseCase<F> {
    pub async fn execute(&self, id: CardId, patch: FlashcardPatch) -> Result<Flashcard, ApiError> {
        if let Some(question) = &patch.question {
            if is_blank(question) {
                return Err(ApiError::Validation("question must not be empty"));
            }
        }
        if let Some(answer) = &patch.answer {
            if is_blank(answer) {
                return Err(ApiError::Validation("answer must not be empty"));
            }
        }
        self.flashcards
            .update(id, &patch)
            .await?
            .ok_or(ApiError::FlashcardNotFound)
    }
}

// ── DeleteFlashcard ──────────────────────────────────────────────────────────

pub struct DeleteFlashcardUseCase<F: FlashcardRepository> {
    pub flashcards: F,
}

impl<F: FlashcardRepository> DeleteFlashcardUseCase<F> {
    pub async fn execute(&self, id: CardId) -> Result<(), ApiError> {
        if !self.flashcards.delete(id).await? {
            return Err(ApiError::FlashcardNotFound);
        }
        Ok(())
    }
}
