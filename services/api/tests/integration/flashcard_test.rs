use uuid::Uuid;

use flashdeck_api::domain::types::FlashcardPatch;
use flashdeck_api::error::ApiError;
use flashdeck_api::usecase::flashcard::{
    AddFlashcardInput, AddFlashcardUseCase, DeleteFlashcardUseCase, ListFlashcardsUseCase,
    UpdateFlashcardUseCase,
};
use flashdeck_domain::id::{CardId, CollectionId, UserId};
use flashdeck_domain::owner::OwnerId;

use crate::helpers::{MockCollectionRepo, MockFlashcardRepo, test_card, test_collection};

fn input(question: &str, answer: &str) -> AddFlashcardInput {
    AddFlashcardInput {
        question: question.to_owned(),
        answer: answer.to_owned(),
    }
}

#[tokio::test]
async fn should_add_card_to_existing_collection() {
    let owner = OwnerId::User(UserId(Uuid::new_v4()));
    let collection = test_collection(owner, "Math");
    let flashcards = MockFlashcardRepo::empty();
    let cards_handle = flashcards.cards_handle();

    let usecase = AddFlashcardUseCase {
        collections: MockCollectionRepo::new(vec![collection.clone()]),
        flashcards,
    };
    let card = usecase
        .execute(collection.id, input("2+2", "4"))
        .await
        .unwrap();

    assert_eq!(card.collection_id, collection.id);
    assert_eq!(card.question, "2+2");
    assert_eq!(cards_handle.lock().unwrap().len(), 1);
}

#[tokio::test]
async fn should_reject_card_for_unknown_collection() {
    let usecase = AddFlashcardUseCase {
        collections: MockCollectionRepo::empty(),
        flashcards: MockFlashcardRepo::empty(),
    };
    let result = usecase
        .execute(CollectionId(Uuid::new_v4()), input("2+2", "4"))
        .await;
    assert!(
        matches!(result, Err(ApiError::CollectionNotFound)),
        "expected CollectionNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_blank_question_and_answer() {
    let owner = OwnerId::User(UserId(Uuid::new_v4()));
    let collection = test_collection(owner, "Math");
    let usecase = AddFlashcardUseCase {
        collections: MockCollectionRepo::new(vec![collection.clone()]),
        flashcards: MockFlashcardRepo::empty(),
    };

    let result = usecase.execute(collection.id, input("  ", "4")).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));

    let result = usecase.execute(collection.id, input("2+2", "")).await;
    assert!(matches!(result, Err(ApiError::Validation(_))));
}

#[tokio::test]
async fn listing_unknown_collection_yields_empty_not_error() {
    let usecase = ListFlashcardsUseCase {
        flashcards: MockFlashcardRepo::empty(),
    };
    let cards = usecase.execute(CollectionId(Uuid::new_v4())).await.unwrap();
    assert!(cards.is_empty());
}

#[tokio::test]
async fn update_patches_named_fields_and_keeps_the_rest() {
    let collection_id = CollectionId(Uuid::new_v4());
    let card = test_card(collection_id, "2+2", "5");
    let usecase = UpdateFlashcardUseCase {
        flashcards: MockFlashcardRepo::new(vec![card.clone()]),
    };

    let updated = usecase
        .execute(
            card.id,
            FlashcardPatch {
                answer: Some("4".to_owned()),
                ..Default::default()
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.question, "2+2");
    assert_eq!(updated.answer, "4");
    // The patch has no way to re-home a card.
    assert_eq!(updated.collection_id, collection_id);
}

#[tokio::test]
async fn update_of_unknown_card_is_not_found() {
    let usecase = UpdateFlashcardUseCase {
        flashcards: MockFlashcardRepo::empty(),
    };
    let result = usecase
        .execute(
            CardId(Uuid::new_v4()),
            FlashcardPatch {
                answer: Some("4".to_owned()),
                ..Default::default()
            },
        )
        .await;
    assert!(matches!(result, Err(ApiError::FlashcardNotFound)));
}

#[tokio::test]
async fn delete_removes_only_the_named_card() {
    let collection_id = CollectionId(Uuid::new_v4());
    let doomed = test_card(collection_id, "1+1", "2");
    let kept = test_card(collection_id, "2+2", "4");
    let flashcards = MockFlashcardRepo::new(vec![doomed.clone(), kept.clone()]);
    let cards_handle = flashcards.cards_handle();

    let usecase = DeleteFlashcardUseCase { flashcards };
    usecase.execute(doomed.id).await.unwrap();

    let remaining = cards_handle.lock().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].id, kept.id);
}

#[tokio::test]
async fn delete_of_unknown_card_is_not_found() {
    let usecase = DeleteFlashcardUseCase {
        flashcards: MockFlashcardRepo::empty(),
    };
    let result = usecase.execute(CardId(Uuid::new_v4())).await;
    assert!(matches!(result, Err(ApiError::FlashcardNotFound)));
}
