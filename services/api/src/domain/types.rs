use serde::{Deserialize, Serialize};

use flashdeck_domain::id::{CardId, CollectionId, UserId};
use flashdeck_domain::owner::OwnerId;

/// Registered account. The password is stored as an Argon2id PHC string,
/// never as plaintext.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct User {
    pub id: UserId,
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

/// A flashcard collection. Owner is fixed at creation; updates go through
/// [`CollectionPatch`], which has no way to name `id` or `owner_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Collection {
    pub id: CollectionId,
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
    #[serde(default)]
    pub subject: Option<String>,
    #[serde(default)]
    pub topics: Vec<String>,
    pub owner_id: OwnerId,
    #[serde(default)]
    pub is_public: bool,
}

/// A question/answer card inside a collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Flashcard {
    pub id: CardId,
    pub collection_id: CollectionId,
    pub question: String,
    pub answer: String,
}

/// Field-by-field collection update. `None` preserves the current value.
#[derive(Debug, Clone, Default)]
pub struct CollectionPatch {
    pub title: Option<String>,
    pub description: Option<String>,
    pub subject: Option<String>,
    pub topics: Option<Vec<String>>,
    pub is_public: Option<bool>,
}

impl Collection {
    pub fn apply(&mut self, patch: &CollectionPatch) {
        if let Some(title) = &patch.title {
            self.title = title.clone();
        }
        if let Some(description) = &patch.description {
            self.description = Some(description.clone());
        }
        if let Some(subject) = &patch.subject {
            self.subject = Some(subject.clone());
        }
        if let Some(topics) = &patch.topics {
            self.topics = topics.clone();
        }
        if let Some(is_public) = patch.is_public {
            self.is_public = is_public;
        }
    }
}

/// Field-by-field flashcard update. `None` preserves the current value.
#[derive(Debug, Clone, Default)]
pub struct FlashcardPatch {
    pub question: Option<String>,
    pub answer: Option<String>,
}

impl Flashcard {
    pub fn apply(&mut self, patch: &FlashcardPatch) {
        if let Some(question) = &patch.question {
            self.question = question.clone();
        }
        if let Some(answer) = &patch.answer {
            self.answer = answer.clone();
        }
    }
}

/// Required text fields must carry at least one non-whitespace character.
pub fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
