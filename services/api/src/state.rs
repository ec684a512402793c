use std::sync::Arc;

use crate::config::AdminCredentials;
use crate::infra::store::{
    JsonStore, StoreCollectionRepository, StoreFlashcardRepository, StoreUserRepository,
};

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<JsonStore>,
    pub admin: Option<AdminCredentials>,
}

impl AppState {
    pub fn user_repo(&self) -> StoreUserRepository {
        StoreUserRepository {
            store: self.store.clone(),
        }
    }

    pub fn collection_repo(&self) -> StoreCollectionRepository {
        StoreCollectionRepository {
            store: self.store.clone(),
        }
    }

    pub fn flashcard_repo(&self) -> StoreFlashcardRepository {
        StoreFlashcardRepository {
            store: self.store.clone(),
        }
    }
}
