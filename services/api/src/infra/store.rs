//! JSON-file record store and the repositories built on it.
//!
//! Three record sets (`users.json`, `collections.json`, `flashcards.json`)
//! are loaded wholesale at startup and rewritten wholesale on every mutation
//! — acceptable for small data volumes, deliberately not built to scale.
//! Each set sits behind its own `RwLock` and every read-modify-write runs
//! under one exclusive acquisition, so concurrent writers to the same set
//! cannot lose updates. Rewrites go through a temp file + atomic rename; a
//! crash mid-write cannot truncate previously durable data.

use std::fs;
use std::io::Write as _;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use anyhow::Context as _;
use serde::Serialize;
use serde::de::DeserializeOwned;
use tokio::sync::RwLock;

use flashdeck_domain::id::{CardId, CollectionId};
use flashdeck_domain::owner::OwnerId;

use crate::domain::repository::{CollectionRepository, FlashcardRepository, UserRepository};
use crate::domain::types::{Collection, CollectionPatch, Flashcard, FlashcardPatch, User};
use crate::error::ApiError;

const USERS_FILE: &str = "users.json";
const COLLECTIONS_FILE: &str = "collections.json";
const FLASHCARDS_FILE: &str = "flashcards.json";

pub struct JsonStore {
    dir: PathBuf,
    users: RwLock<Vec<User>>,
    collections: RwLock<Vec<Collection>>,
    flashcards: RwLock<Vec<Flashcard>>,
}

impl JsonStore {
    /// Load all three record sets. A missing or malformed file is an error —
    /// the process must not start with corrupt state, so callers treat this
    /// as fatal.
    pub fn open(dir: impl AsRef<Path>) -> anyhow::Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        Ok(Self {
            users: RwLock::new(load(&dir, USERS_FILE)?),
            collections: RwLock::new(load(&dir, COLLECTIONS_FILE)?),
            flashcards: RwLock::new(load(&dir, FLASHCARDS_FILE)?),
            dir,
        })
    }
}

fn load<T: DeserializeOwned>(dir: &Path, name: &str) -> anyhow::Result<Vec<T>> {
    let path = dir.join(name);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("read record set {}", path.display()))?;
    serde_json::from_str(&contents)
        .with_context(|| format!("parse record set {}", path.display()))
}

/// Rewrite the whole record set: serialize, write to a temp file in the same
/// directory, rename over the target.
fn save<T: Serialize>(dir: &Path, name: &str, records: &[T]) -> Result<(), ApiError> {
    let path = dir.join(name);
    let write = || -> anyhow::Result<()> {
        let bytes = serde_json::to_vec_pretty(records).context("serialize record set")?;
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .with_context(|| format!("create temp file in {}", dir.display()))?;
        tmp.write_all(&bytes).context("write record set")?;
        tmp.persist(&path)
            .with_context(|| format!("replace record set {}", path.display()))?;
        Ok(())
    };
    write().map_err(ApiError::Storage)
}

// ── User repository ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StoreUserRepository {
    pub store: Arc<JsonStore>,
}

impl UserRepository for StoreUserRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        let users = self.store.users.read().await;
        // Exact, case-sensitive match.
        Ok(users.iter().find(|u| u.email == email).cloned())
    }

    async fn create(&self, user: &User) -> Result<bool, ApiError> {
        let mut users = self.store.users.write().await;
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());
        save(&self.store.dir, USERS_FILE, &users)?;
        Ok(true)
    }
}

// ── Collection repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StoreCollectionRepository {
    pub store: Arc<JsonStore>,
}

impl CollectionRepository for StoreCollectionRepository {
    async fn list_all(&self) -> Result<Vec<Collection>, ApiError> {
        let collections = self.store.collections.read().await;
        Ok(collections.clone())
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>, ApiError> {
        let collections = self.store.collections.read().await;
        Ok(collections
            .iter()
            .filter(|c| c.owner_id == *owner)
            .cloned()
            .collect())
    }

    async fn find(&self, id: CollectionId) -> Result<Option<Collection>, ApiError> {
        let collections = self.store.collections.read().await;
        Ok(collections.iter().find(|c| c.id == id).cloned())
    }

    async fn find_accessible(
        &self,
        id: CollectionId,
        caller: &OwnerId,
    ) -> Result<Option<Collection>, ApiError> {
        let collections = self.store.collections.read().await;
        Ok(collections
            .iter()
            .find(|c| c.id == id && caller.can_access(&c.owner_id))
            .cloned())
    }

    async fn exists(&self, id: CollectionId) -> Result<bool, ApiError> {
        let collections = self.store.collections.read().await;
        Ok(collections.iter().any(|c| c.id == id))
    }

    async fn create(&self, collection: &Collection) -> Result<(), ApiError> {
        let mut collections = self.store.collections.write().await;
        collections.push(collection.clone());
        save(&self.store.dir, COLLECTIONS_FILE, &collections)
    }

    async fn update(
        &self,
        id: CollectionId,
        caller: &OwnerId,
        patch: &CollectionPatch,
    ) -> Result<Option<Collection>, ApiError> {
        let mut collections = self.store.collections.write().await;
        let Some(collection) = collections
            .iter_mut()
            .find(|c| c.id == id && caller.can_access(&c.owner_id))
        else {
            return Ok(None);
        };
        collection.apply(patch);
        let updated = collection.clone();
        save(&self.store.dir, COLLECTIONS_FILE, &collections)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: CollectionId, caller: &OwnerId) -> Result<bool, ApiError> {
        let mut collections = self.store.collections.write().await;
        let before = collections.len();
        collections.retain(|c| !(c.id == id && caller.can_access(&c.owner_id)));
        if collections.len() == before {
            return Ok(false);
        }
        save(&self.store.dir, COLLECTIONS_FILE, &collections)?;
        Ok(true)
    }
}

// ── Flashcard repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct StoreFlashcardRepository {
    pub store: Arc<JsonStore>,
}

impl FlashcardRepository for StoreFlashcardRepository {
    async fn list_by_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<Flashcard>, ApiError> {
        let flashcards = self.store.flashcards.read().await;
        Ok(flashcards
            .iter()
            .filter(|f| f.collection_id == collection_id)
            .cloned()
            .collect())
    }

    async fn count_for_collections(
        &self,
        collection_ids: &[CollectionId],
    ) -> Result<u64, ApiError> {
        let flashcards = self.store.flashcards.read().await;
        Ok(flashcards
            .iter()
            .filter(|f| collection_ids.contains(&f.collection_id))
            .count() as u64)
    }

    async fn create(&self, card: &Flashcard) -> Result<(), ApiError> {
        let mut flashcards = self.store.flashcards.write().await;
        flashcards.push(card.clone());
        save(&self.store.dir, FLASHCARDS_FILE, &flashcards)
    }

    async fn create_many(&self, cards: &[Flashcard]) -> Result<(), ApiError> {
        let mut flashcards = self.store.flashcards.write().await;
        flashcards.extend_from_slice(cards);
        save(&self.store.dir, FLASHCARDS_FILE, &flashcards)
    }

    async fn update(
        &self,
        id: CardId,
        patch: &FlashcardPatch,
    ) -> Result<Option<Flashcard>, ApiError> {
        let mut flashcards = self.store.flashcards.write().await;
        let Some(card) = flashcards.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        card.apply(patch);
        let updated = card.clone();
        save(&self.store.dir, FLASHCARDS_FILE, &flashcards)?;
        Ok(Some(updated))
    }

    async fn delete(&self, id: CardId) -> Result<bool, ApiError> {
        let mut flashcards = self.store.flashcards.write().await;
        let before = flashcards.len();
        flashcards.retain(|f| f.id != id);
        if flashcards.len() == before {
            return Ok(false);
        }
        save(&self.store.dir, FLASHCARDS_FILE, &flashcards)?;
        Ok(true)
    }

    async fn delete_by_collection(&self, collection_id: CollectionId) -> Result<u64, ApiError> {
        let mut flashcards = self.store.flashcards.write().await;
        let before = flashcards.len();
        flashcards.retain(|f| f.collection_id != collection_id);
        let removed = (before - flashcards.len()) as u64;
        save(&self.store.dir, FLASHCARDS_FILE, &flashcards)?;
        Ok(removed)
    }
}
