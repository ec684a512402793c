use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use flashdeck_auth_types::credentials::BasicCredentials;
use flashdeck_domain::id::CollectionId;

use crate::domain::types::{Collection, CollectionPatch};
use crate::error::ApiError;
use crate::handlers::authenticate;
use crate::handlers::flashcard::FlashcardResponse;
use crate::state::AppState;
use crate::usecase::collection::{
    CloneCollectionUseCase, CollectionDetails, CreateCollectionInput, CreateCollectionUseCase,
    DeleteCollectionUseCase, GetCollectionUseCase, GetPublicCollectionUseCase,
    ListCollectionsUseCase, ListPublicCollectionsUseCase, UpdateCollectionUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

// Wire field names stay camelCase (`userId`, `isPublic`) for the legacy
// browser client; the persisted store uses the Rust-native names.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CollectionResponse {
    pub id: String,
    pub title: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub subject: Option<String>,
    pub topics: Vec<String>,
    pub user_id: String,
    pub is_public: bool,
}

impl From<Collection> for CollectionResponse {
    fn from(collection: Collection) -> Self {
        Self {
            id: collection.id.to_string(),
            title: collection.title,
            description: collection.description,
            subject: collection.subject,
            topics: collection.topics,
            user_id: collection.owner_id.to_string(),
            is_public: collection.is_public,
        }
    }
}

/// Detail view: the collection's own fields flattened, plus its cards.
#[derive(Serialize)]
pub struct CollectionDetailResponse {
    #[serde(flatten)]
    pub collection: CollectionResponse,
    pub cards: Vec<FlashcardResponse>,
}

impl From<CollectionDetails> for CollectionDetailResponse {
    fn from(details: CollectionDetails) -> Self {
        Self {
            collection: details.collection.into(),
            cards: details.cards.into_iter().map(Into::into).collect(),
        }
    }
}

#[derive(Serialize)]
pub struct MessageResponse {
    pub message: &'static str,
}

/// An id that parses as nothing names nothing — not-found, not bad-request.
fn parse_collection_id(id: &str) -> Result<CollectionId, ApiError> {
    id.parse().map_err(|_| ApiError::CollectionNotFound)
}

// ── GET /collections/public ──────────────────────────────────────────────────

pub async fn list_public_collections(
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let usecase = ListPublicCollectionsUseCase {
        collections: state.collection_repo(),
    };
    let collections = usecase.execute().await?;
    Ok(Json(collections.into_iter().map(Into::into).collect()))
}

// ── GET /collections/public/{id} ─────────────────────────────────────────────

pub async fn get_public_collection(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CollectionDetailResponse>, ApiError> {
    let id = parse_collection_id(&id)?;
    let usecase = GetPublicCollectionUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    let details = usecase.execute(id).await?;
    Ok(Json(details.into()))
}

// ── GET /collections ─────────────────────────────────────────────────────────

pub async fn list_collections(
    credentials: BasicCredentials,
    State(state): State<AppState>,
) -> Result<Json<Vec<CollectionResponse>>, ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let usecase = ListCollectionsUseCase {
        collections: state.collection_repo(),
    };
    let collections = usecase.execute(&caller).await?;
    Ok(Json(collections.into_iter().map(Into::into).collect()))
}

// ── GET /collections/{id} ────────────────────────────────────────────────────

pub async fn get_collection(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<CollectionDetailResponse>, ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let id = parse_collection_id(&id)?;
    let usecase = GetCollectionUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    let details = usecase.execute(&caller, id).await?;
    Ok(Json(details.into()))
}

// ── POST /collections ────────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateCollectionRequest {
    pub title: String,
    pub description: Option<String>,
    pub subject: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    #[serde(default)]
    pub is_public: bool,
}

pub async fn create_collection(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Json(body): Json<CreateCollectionRequest>,
) -> Result<(StatusCode, Json<CollectionResponse>), ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let usecase = CreateCollectionUseCase {
        collections: state.collection_repo(),
    };
    let collection = usecase
        .execute(
            &caller,
            CreateCollectionInput {
                title: body.title,
                description: body.description,
                subject: body.subject,
                topics: body.topics,
                is_public: body.is_public,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(collection.into())))
}

// ── PUT /collections/{id} ────────────────────────────────────────────────────

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateCollectionRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub topics: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

pub async fn update_collection(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(id): Path<String>,
    Json(body): Json<UpdateCollectionRequest>,
) -> Result<Json<CollectionResponse>, ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let id = parse_collection_id(&id)?;
    let usecase = UpdateCollectionUseCase {
        collections: state.collection_repo(),
    };
    let collection = usecase
        .execute(
            &caller,
            id,
            CollectionPatch {
                title: body.title,
                description: body.description,
                subject: body.subject,
                topics: body.topics,
                is_public: body.is_public,
            },
        )
        .await?;
    Ok(Json(collection.into()))
}

// ── DELETE /collections/{id} ─────────────────────────────────────────────────

pub async fn delete_collection(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<MessageResponse>, ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let id = parse_collection_id(&id)?;
    let usecase = DeleteCollectionUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    usecase.execute(&caller, id).await?;
    Ok(Json(MessageResponse {
        message: "Collection deleted",
    }))
}

// ── POST /collections/{id}/clone ─────────────────────────────────────────────

pub async fn clone_collection(
    credentials: BasicCredentials,
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<(StatusCode, Json<CollectionDetailResponse>), ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let id = parse_collection_id(&id)?;
    let usecase = CloneCollectionUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    let details = usecase.execute(&caller, id).await?;
    Ok((StatusCode::CREATED, Json(details.into())))
}
