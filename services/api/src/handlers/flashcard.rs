use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use flashdeck_auth_types::credentials::BasicCredentials;
use flashdeck_domain::id::{CardId, CollectionId};

use crate::domain::types::{Flashcard, FlashcardPatch};
use crate::error::ApiError;
use crate::handlers::authenticate;
use crate::handlers::collection::MessageResponse;
use crate::state::AppState;
use crate::usecase::flashcard::{
    AddFlashcardInput, AddFlashcardUseCase, DeleteFlashcardUseCase, ListFlashcardsUseCase,
    UpdateFlashcardUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlashcardResponse {
    pub id: String,
    pub collection_id: String,
    pub question: String,
    pub answer: String,
}

impl From<Flashcard> for FlashcardResponse {
    fn from(card: Flashcard) -> Self {
        Self {
            id: card.id.to_string(),
            collection_id: card.collection_id.to_string(),
            question: card.question,
            answer: card.answer,
        }
    }
}

// ── GET /collections/{id}/cards ──────────────────────────────────────────────

pub async fn list_cards(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<Vec<FlashcardResponse>>, ApiError> {
    // An unparseable id references nothing, and the listing never checks
    // collection existence: both cases are an empty list.
    let Ok(id) = id.parse::<CollectionId>() else {
        return Ok(Json(Vec::new()));
    };
    let usecase = ListFlashcardsUseCase {
        flashcards: state.flashcard_repo(),
    };
    let cards = usecase.execute(id).await?;
    Ok(Json(cards.into_iter().map(Into::into).collect()))
}

// ── POST /collections/{id}/cards ─────────────────────────────────────────────

#[derive(Deserialize)]
pub struct AddFlashcardRequest {
    pub question: String,
    pub answer: String,
}

pub async fn add_card(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<AddFlashcardRequest>,
) -> Result<(StatusCode, Json<FlashcardResponse>), ApiError> {
    let _caller = authenticate(&state, &credentials).await?;
    let id: CollectionId = id.parse().map_err(|_| ApiError::CollectionNotFound)?;
    let usecase = AddFlashcardUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    let card = usecase
        .execute(
            id,
            AddFlashcardInput {
                question: body.question,
                answer: body.answer,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(card.into())))
}

// ── PUT /cards/{card_id} ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateFlashcardRequest {
    pub question: Option<String>,
    pub answer: Option<String>,
}

pub async fn update_card(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(card_id): Path<String>,
    Json(body): Json<UpdateFlashcardRequest>,
) -> Result<Json<FlashcardResponse>, ApiError> {
    let _caller = authenticate(&state, &credentials).await?;
    let id: CardId = card_id.parse().map_err(|_| ApiError::FlashcardNotFound)?;
    let usecase = UpdateFlashcardUseCase {
        flashcards: state.flashcard_repo(),
    };
    let card = usecase
        .execute(
            id,
            FlashcardPatch {
                question: body.question,
                answer: body.answer,
            },
        )
        .await?;
    Ok(Json(card.into()))
}

// ── DELETE /cards/{card_id} ──────────────────────────────────────────────────

pub async fn delete_card(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(card_id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let _caller = authenticate(&state, &credentials).await?;
    let id: CardId = card_id.parse().map_err(|_| ApiError::FlashcardNotFound)?;
    let usecase = DeleteFlashcardUseCase {
        flashcards: state.flashcard_repo(),
    };
    usecase.execute(id).await?;
    Ok(Json(MessageResponse {
        message: "Flashcard deleted",
    }))
}
