use axum::{
    Router,
    routing::{delete, get, post, put},
};
use tower_http::trace::TraceLayer;

use flashdeck_core::health::{healthz, readyz};
use flashdeck_core::middleware::{cors_layer, request_id_layer};

use crate::handlers::{
    collection::{
        clone_collection, create_collection, delete_collection, get_collection,
        get_public_collection, list_collections, list_public_collections, update_collection,
    },
    flashcard::{add_card, delete_card, list_cards, update_card},
    user::{register, user_stats},
};
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        // Health
        .route("/healthz", get(healthz))
        .route("/readyz", get(readyz))
        // Users
        .route("/users/register", post(register))
        .route("/user/stats", get(user_stats))
        // Collections — public surface
        .route("/collections/public", get(list_public_collections))
        .route("/collections/public/{id}", get(get_public_collection))
        // Collections — owner surface
        .route("/collections", get(list_collections))
        .route("/collections", post(create_collection))
        .route("/collections/{id}", get(get_collection))
        .route("/collections/{id}", put(update_collection))
        .route("/collections/{id}", delete(delete_collection))
        .route("/collections/{id}/clone", post(clone_collection))
        // Flashcards
        .route("/collections/{id}/cards", get(list_cards))
        .route("/collections/{id}/cards", post(add_card))
        .route("/cards/{card_id}", put(update_card))
        .route("/cards/{card_id}", delete(delete_card))
        // Middleware (applied bottom-up)
        .layer(TraceLayer::new_for_http())
        .layer(request_id_layer())
        .layer(cors_layer())
        .with_state(state)
}
