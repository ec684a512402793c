use axum::{Json, extract::State, http::StatusCode};
use serde::{Deserialize, Serialize};

use flashdeck_auth_types::credentials::BasicCredentials;

use crate::error::ApiError;
use crate::handlers::authenticate;
use crate::state::AppState;
use crate::usecase::user::{RegisterUserInput, RegisterUserUseCase, UserStatsUseCase};

// ── POST /users/register ─────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct RegisteredUser {
    pub name: String,
    pub email: String,
}

#[derive(Serialize)]
pub struct RegisterResponse {
    pub message: &'static str,
    pub user: RegisteredUser,
}

pub async fn register(
    State(state): State<AppState>,
    Json(body): Json<RegisterRequest>,
) -> Result<(StatusCode, Json<RegisterResponse>), ApiError> {
    let usecase = RegisterUserUseCase {
        users: state.user_repo(),
    };
    let user = usecase
        .execute(RegisterUserInput {
            name: body.name,
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok((
        StatusCode::CREATED,
        Json(RegisterResponse {
            message: "User registered",
            user: RegisteredUser {
                name: user.name,
                email: user.email,
            },
        }),
    ))
}

// ── GET /user/stats ──────────────────────────────────────────────────────────

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct StatsResponse {
    pub total_collections: u64,
    pub total_flashcards: u64,
    pub study_sessions: u64,
    pub public_collections: u64,
}

pub async fn user_stats(
    credentials: BasicCredentials,
    State(state): State<AppState>,
) -> Result<Json<StatsResponse>, ApiError> {
    let caller = authenticate(&state, &credentials).await?;
    let usecase = UserStatsUseCase {
        collections: state.collection_repo(),
        flashcards: state.flashcard_repo(),
    };
    let stats = usecase.execute(&caller).await?;
    Ok(Json(StatsResponse {
        total_collections: stats.total_collections,
        total_flashcards: stats.total_flashcards,
        study_sessions: stats.study_sessions,
        public_collections: stats.public_collections,
    }))
}
