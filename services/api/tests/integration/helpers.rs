use std::sync::{Arc, Mutex};

use uuid::Uuid;

use flashdeck_api::domain::repository::{
    CollectionRepository, FlashcardRepository, UserRepository,
};
use flashdeck_api::domain::types::{
    Collection, CollectionPatch, Flashcard, FlashcardPatch, User,
};
use flashdeck_api::error::ApiError;
use flashdeck_api::password;
use flashdeck_domain::id::{CardId, CollectionId, UserId};
use flashdeck_domain::owner::OwnerId;

// ── MockUserRepo ─────────────────────────────────────────────────────────────

pub struct MockUserRepo {
    pub users: Arc<Mutex<Vec<User>>>,
}

impl MockUserRepo {
    pub fn new(users: Vec<User>) -> Self {
        Self {
            users: Arc::new(Mutex::new(users)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }
}

impl UserRepository for MockUserRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<User>, ApiError> {
        Ok(self
            .users
            .lock()
            .unwrap()
            .iter()
            .find(|u| u.email == email)
            .cloned())
    }

    async fn create(&self, user: &User) -> Result<bool, ApiError> {
        let mut users = self.users.lock().unwrap();
        if users.iter().any(|u| u.email == user.email) {
            return Ok(false);
        }
        users.push(user.clone());
        Ok(true)
    }
}

// ── MockCollectionRepo ───────────────────────────────────────────────────────

pub struct MockCollectionRepo {
    pub collections: Arc<Mutex<Vec<Collection>>>,
}

impl MockCollectionRepo {
    pub fn new(collections: Vec<Collection>) -> Self {
        Self {
            collections: Arc::new(Mutex::new(collections)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn collections_handle(&self) -> Arc<Mutex<Vec<Collection>>> {
        Arc::clone(&self.collections)
    }
}

impl CollectionRepository for MockCollectionRepo {
    async fn list_all(&self) -> Result<Vec<Collection>, ApiError> {
        Ok(self.collections.lock().unwrap().clone())
    }

    async fn list_by_owner(&self, owner: &OwnerId) -> Result<Vec<Collection>, ApiError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .iter()
            .filter(|c| c.owner_id == *owner)
            .cloned()
            .collect())
    }

    async fn find(&self, id: CollectionId) -> Result<Option<Collection>, ApiError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id)
            .cloned())
    }

    async fn find_accessible(
        &self,
        id: CollectionId,
        caller: &OwnerId,
    ) -> Result<Option<Collection>, ApiError> {
        Ok(self
            .collections
            .lock()
            .unwrap()
            .iter()
            .find(|c| c.id == id && caller.can_access(&c.owner_id))
            .cloned())
    }

    async fn exists(&self, id: CollectionId) -> Result<bool, ApiError> {
        Ok(self.collections.lock().unwrap().iter().any(|c| c.id == id))
    }

    async fn create(&self, collection: &Collection) -> Result<(), ApiError> {
        self.collections.lock().unwrap().push(collection.clone());
        Ok(())
    }

    async fn update(
        &self,
        id: CollectionId,
        caller: &OwnerId,
        patch: &CollectionPatch,
    ) -> Result<Option<Collection>, ApiError> {
        let mut collections = self.collections.lock().unwrap();
        let Some(collection) = collections
            .iter_mut()
            .find(|c| c.id == id && caller.can_access(&c.owner_id))
        else {
            return Ok(None);
        };
        collection.apply(patch);
        Ok(Some(collection.clone()))
    }

    async fn delete(&self, id: CollectionId, caller: &OwnerId) -> Result<bool, ApiError> {
        let mut collections = self.collections.lock().unwrap();
        let before = collections.len();
        collections.retain(|c| !(c.id == id && caller.can_access(&c.owner_id)));
        Ok(collections.len() != before)
    }
}

// ── MockFlashcardRepo ────────────────────────────────────────────────────────

pub struct MockFlashcardRepo {
    pub cards: Arc<Mutex<Vec<Flashcard>>>,
}

impl MockFlashcardRepo {
    pub fn new(cards: Vec<Flashcard>) -> Self {
        Self {
            cards: Arc::new(Mutex::new(cards)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    pub fn cards_handle(&self) -> Arc<Mutex<Vec<Flashcard>>> {
        Arc::clone(&self.cards)
    }
}

impl FlashcardRepository for MockFlashcardRepo {
    async fn list_by_collection(
        &self,
        collection_id: CollectionId,
    ) -> Result<Vec<Flashcard>, ApiError> {
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|f| f.collection_id == collection_id)
            .cloned()
            .collect())
    }

    async fn count_for_collections(
        &self,
        collection_ids: &[CollectionId],
    ) -> Result<u64, ApiError> {
        Ok(self
            .cards
            .lock()
            .unwrap()
            .iter()
            .filter(|f| collection_ids.contains(&f.collection_id))
            .count() as u64)
    }

    async fn create(&self, card: &Flashcard) -> Result<(), ApiError> {
        self.cards.lock().unwrap().push(card.clone());
        Ok(())
    }

    async fn create_many(&self, cards: &[Flashcard]) -> Result<(), ApiError> {
        self.cards.lock().unwrap().extend_from_slice(cards);
        Ok(())
    }

    async fn update(
        &self,
        id: CardId,
        patch: &FlashcardPatch,
    ) -> Result<Option<Flashcard>, ApiError> {
        let mut cards = self.cards.lock().unwrap();
        let Some(card) = cards.iter_mut().find(|f| f.id == id) else {
            return Ok(None);
        };
        card.apply(patch);
        Ok(Some(card.clone()))
    }

    async fn delete(&self, id: CardId) -> Result<bool, ApiError> {
        let mut cards = self.cards.lock().unwrap();
        let before = cards.len();
        cards.retain(|f| f.id != id);
        Ok(cards.len() != before)
    }

    async fn delete_by_collection(&self, collection_id: CollectionId) -> Result<u64, ApiError> {
        let mut cards = self.cards.lock().unwrap();
        let before = cards.len();
        cards.retain(|f| f.collection_id != collection_id);
        Ok((before - cards.len()) as u64)
    }
}

// ── Test fixture helpers ─────────────────────────────────────────────────────

pub fn test_user(email: &str, plaintext: &str) -> User {
    User {
        id: UserId(Uuid::new_v4()),
        name: "Ada".to_owned(),
        email: email.to_owned(),
        password_hash: password::hash_password(plaintext).unwrap(),
    }
}

pub fn test_collection(owner: OwnerId, title: &str) -> Collection {
    Collection {
        id: CollectionId(Uuid::new_v4()),
        title: title.to_owned(),
        description: Some("practice set".to_owned()),
        subject: Some("math".to_owned()),
        topics: vec!["arithmetic".to_owned()],
        owner_id: owner,
        is_public: false,
    }
}

pub fn test_card(collection_id: CollectionId, question: &str, answer: &str) -> Flashcard {
    Flashcard {
        id: CardId(Uuid::new_v4()),
        collection_id,
        question: question.to_owned(),
        answer: answer.to_owned(),
    }
}
