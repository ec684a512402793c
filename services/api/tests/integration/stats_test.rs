use uuid::Uuid;

use flashdeck_api::usecase::user::{UserStats, UserStatsUseCase};
use flashdeck_domain::id::UserId;
use flashdeck_domain::owner::OwnerId;

use crate::helpers::{MockCollectionRepo, MockFlashcardRepo, test_card, test_collection};

#[tokio::test]
async fn stats_count_only_the_callers_collections_and_their_cards() {
    let ada = OwnerId::User(UserId(Uuid::new_v4()));
    let bob = OwnerId::User(UserId(Uuid::new_v4()));

    let mut public_deck = test_collection(ada, "Public deck");
    public_deck.is_public = true;
    let private_deck = test_collection(ada, "Private deck");
    let foreign_deck = test_collection(bob, "Bob's deck");

    let usecase = UserStatsUseCase {
        collections: MockCollectionRepo::new(vec![
            public_deck.clone(),
            private_deck.clone(),
            foreign_deck.clone(),
        ]),
        flashcards: MockFlashcardRepo::new(vec![
            test_card(public_deck.id, "1+1", "2"),
            test_card(private_deck.id, "2+2", "4"),
            test_card(private_deck.id, "3+3", "6"),
            test_card(foreign_deck.id, "4+4", "8"),
        ]),
    };

    let stats = usecase.execute(&ada).await.unwrap();
    assert_eq!(
        stats,
        UserStats {
            total_collections: 2,
            total_flashcards: 3,
            study_sessions: 0,
            public_collections: 1,
        }
    );
}

#[tokio::test]
async fn admin_stats_cover_every_collection() {
    let ada = OwnerId::User(UserId(Uuid::new_v4()));
    let bob = OwnerId::User(UserId(Uuid::new_v4()));
    let a = test_collection(ada, "A");
    let b = test_collection(bob, "B");

    let usecase = UserStatsUseCase {
        collections: MockCollectionRepo::new(vec![a.clone(), b.clone()]),
        flashcards: MockFlashcardRepo::new(vec![
            test_card(a.id, "1+1", "2"),
            test_card(b.id, "2+2", "4"),
        ]),
    };

    let stats = usecase.execute(&OwnerId::Admin).await.unwrap();
    assert_eq!(stats.total_collections, 2);
    assert_eq!(stats.total_flashcards, 2);
    assert_eq!(stats.study_sessions, 0);
}

#[tokio::test]
async fn stats_for_empty_account_are_all_zero() {
    let usecase = UserStatsUseCase {
        collections: MockCollectionRepo::empty(),
        flashcards: MockFlashcardRepo::empty(),
    };
    let stats = usecase
        .execute(&OwnerId::User(UserId(Uuid::new_v4())))
        .await
        .unwrap();
    assert_eq!(
        stats,
        UserStats {
            total_collections: 0,
            total_flashcards: 0,
            study_sessions: 0,
            public_collections: 0,
        }
    );
}
