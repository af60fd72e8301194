use coursehub_backend::error::BackendError;
use coursehub_backend::usecase::contact::{SendContactMessageInput, SendContactMessageUseCase};

use crate::helpers::{MockContactRepo, MockProfileRepo, email_policy, test_profile};

#[tokio::test]
async fn should_link_message_to_sender_profile() {
    let profile = test_profile();
    let repo = MockContactRepo::default();
    let messages = repo.messages.clone();
    let uc = SendContactMessageUseCase {
        profiles: MockProfileRepo::new(vec![profile.clone()]),
        repo,
        email_policy: email_policy(),
    };

    let view = uc
        .execute(SendContactMessageInput {
            email: Some(profile.email.clone()),
            message: Some("  When does the next cohort start?  ".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(view.message, "When does the next cohort start?");
    assert_eq!(view.full_name, profile.full_name);
    assert_eq!(view.phone_number, profile.phone_number);

    let stored = messages.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].user_profile_id, profile.id);
}

#[tokio::test]
async fn should_return_not_found_for_unknown_sender() {
    let uc = SendContactMessageUseCase {
        profiles: MockProfileRepo::empty(),
        repo: MockContactRepo::default(),
        email_policy: email_policy(),
    };

    let result = uc
        .execute(SendContactMessageInput {
            email: Some("nobody@gmail.com".to_owned()),
            message: Some("hello".to_owned()),
        })
        .await;

    assert!(
        matches!(result, Err(BackendError::ProfileNotFound)),
        "expected ProfileNotFound, got {result:?}"
    );
}

#[tokio::test]
async fn should_reject_overlong_message() {
    let profile = test_profile();
    let uc = SendContactMessageUseCase {
        profiles: MockProfileRepo::new(vec![profile.clone()]),
        repo: MockContactRepo::default(),
        email_policy: email_policy(),
    };

    let result = uc
        .execute(SendContactMessageInput {
            email: Some(profile.email),
            message: Some("x".repeat(501)),
        })
        .await;

    assert!(matches!(result, Err(BackendError::InvalidInput(_))));
}
