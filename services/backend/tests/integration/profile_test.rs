use coursehub_backend::error::BackendError;
use coursehub_backend::usecase::profile::{
    SignInInput, SignInUseCase, SignUpInput, SignUpUseCase, UpdateProfileInput,
    UpdateProfileUseCase,
};
use coursehub_domain::validation::Violation;

use crate::helpers::{MockProfileRepo, PlainHasher, email_policy, test_profile};

fn sign_up_input(email: &str) -> SignUpInput {
    SignUpInput {
        full_name: Some("  Grace Hopper ".to_owned()),
        first_name: Some("Grace".to_owned()),
        last_name: Some(" Hopper".to_owned()),
        email: Some(email.to_owned()),
        phone_number: None,
        password: Some("cobol-1959".to_owned()),
    }
}

#[tokio::test]
async fn should_store_trimmed_fields_on_sign_up() {
    let repo = MockProfileRepo::empty();
    let handle = repo.profiles_handle();
    let uc = SignUpUseCase {
        repo,
        hasher: PlainHasher,
        email_policy: email_policy(),
    };

    let profile = uc
        .execute(sign_up_input(" grace@gmail.com "))
        .await
        .unwrap();

    assert_eq!(profile.full_name, "Grace Hopper");
    assert_eq!(profile.last_name.as_deref(), Some("Hopper"));
    assert_eq!(profile.email, "grace@gmail.com");
    assert_eq!(profile.password_hash, "hashed:cobol-1959");

    let stored = handle.lock().unwrap();
    assert_eq!(stored.len(), 1);
    assert_eq!(stored[0].id, profile.id);
}

#[tokio::test]
async fn should_return_conflict_for_duplicate_email() {
    let existing = test_profile();
    let repo = MockProfileRepo::new(vec![existing.clone()]);
    let handle = repo.profiles_handle();
    let uc = SignUpUseCase {
        repo,
        hasher: PlainHasher,
        email_policy: email_policy(),
    };

    let result = uc.execute(sign_up_input(&existing.email)).await;

    assert!(
        matches!(result, Err(BackendError::ProfileAlreadyExists)),
        "expected ProfileAlreadyExists, got {result:?}"
    );
    assert_eq!(handle.lock().unwrap().len(), 1, "no duplicate may be stored");
}

#[tokio::test]
async fn should_reject_email_outside_domain_on_sign_up_and_sign_in() {
    for bad in ["grace.gmail.com", "grace@yahoo.com", "@gmail.com"] {
        let sign_up = SignUpUseCase {
            repo: MockProfileRepo::empty(),
            hasher: PlainHasher,
            email_policy: email_policy(),
        };
        let result = sign_up.execute(sign_up_input(bad)).await;
        assert!(
            matches!(result, Err(BackendError::InvalidInput(_))),
            "sign-up with {bad:?} should be rejected, got {result:?}"
        );

        let sign_in = SignInUseCase {
            repo: MockProfileRepo::new(vec![test_profile()]),
            hasher: PlainHasher,
            email_policy: email_policy(),
        };
        let result = sign_in
            .execute(SignInInput {
                email: Some(bad.to_owned()),
                password: Some("analytical".to_owned()),
            })
            .await;
        assert!(
            matches!(result, Err(BackendError::InvalidInput(_))),
            "sign-in with {bad:?} should be rejected, got {result:?}"
        );
    }
}

#[tokio::test]
async fn should_sign_in_with_matching_password() {
    let profile = test_profile();
    let uc = SignInUseCase {
        repo: MockProfileRepo::new(vec![profile.clone()]),
        hasher: PlainHasher,
        email_policy: email_policy(),
    };

    let signed_in = uc
        .execute(SignInInput {
            email: Some(profile.email.clone()),
            password: Some("analytical".to_owned()),
        })
        .await
        .unwrap();

    assert_eq!(signed_in.id, profile.id);
}

#[tokio::test]
async fn should_not_distinguish_unknown_email_from_wrong_password() {
    let profile = test_profile();
    let uc = SignInUseCase {
        repo: MockProfileRepo::new(vec![profile.clone()]),
        hasher: PlainHasher,
        email_policy: email_policy(),
    };

    let wrong_password = uc
        .execute(SignInInput {
            email: Some(profile.email.clone()),
            password: Some("difference-engine".to_owned()),
        })
        .await;
    let unknown_email = uc
        .execute(SignInInput {
            email: Some("charles@gmail.com".to_owned()),
            password: Some("analytical".to_owned()),
        })
        .await;

    assert!(matches!(wrong_password, Err(BackendError::InvalidCredentials)));
    assert!(matches!(unknown_email, Err(BackendError::InvalidCredentials)));
}

#[tokio::test]
async fn should_leave_row_unchanged_when_update_has_no_names() {
    let profile = test_profile();
    let repo = MockProfileRepo::new(vec![profile.clone()]);
    let handle = repo.profiles_handle();
    let uc = UpdateProfileUseCase {
        repo,
        hasher: PlainHasher,
    };

    let result = uc
        .execute(
            &profile.email,
            UpdateProfileInput {
                full_name: None,
                first_name: Some("   ".to_owned()),
                last_name: None,
                phone_number: Some("+15550100".to_owned()),
                password: None,
            },
        )
        .await;

    assert!(
        matches!(
            result,
            Err(BackendError::InvalidInput(Violation::NoneOf { .. }))
        ),
        "expected missing-data error, got {result:?}"
    );
    let stored = handle.lock().unwrap();
    assert_eq!(stored[0].phone_number, profile.phone_number);
    assert_eq!(stored[0].updated_at, profile.updated_at);
}

#[tokio::test]
async fn should_rehash_password_on_update() {
    let profile = test_profile();
    let repo = MockProfileRepo::new(vec![profile.clone()]);
    let handle = repo.profiles_handle();
    let uc = UpdateProfileUseCase {
        repo,
        hasher: PlainHasher,
    };

    let updated = uc
        .execute(
            &profile.email,
            UpdateProfileInput {
                full_name: Some("Augusta Ada King".to_owned()),
                first_name: None,
                last_name: None,
                phone_number: None,
                password: Some("notes-g".to_owned()),
            },
        )
        .await
        .unwrap();

    assert_eq!(updated.full_name, "Augusta Ada King");
    assert_eq!(updated.first_name, profile.first_name);
    assert_eq!(handle.lock().unwrap()[0].password_hash, "hashed:notes-g");
}
