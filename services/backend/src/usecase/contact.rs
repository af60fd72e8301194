use chrono::Utc;
use uuid::Uuid;

use coursehub_domain::email::EmailPolicy;
use coursehub_domain::pagination::PageRequest;
use coursehub_domain::validation;

use crate::domain::repository::{ContactMessageRepository, ProfileRepository};
use crate::domain::types::{ContactMessage, ContactMessageView};
use crate::error::BackendError;

pub const MAX_MESSAGE_LEN: usize = 500;

// ── SendContactMessage ───────────────────────────────────────────────────────

pub struct SendContactMessageInput {
    pub email: Option<String>,
    pub message: Option<String>,
}

pub struct SendContactMessageUseCase<P: ProfileRepository, C: ContactMessageRepository> {
    pub profiles: P,
    pub repo: C,
    pub email_policy: EmailPolicy,
}

impl<P: ProfileRepository, C: ContactMessageRepository> SendContactMessageUseCase<P, C> {
    pub async fn execute(
        &self,
        input: SendContactMessageInput,
    ) -> Result<ContactMessageView, BackendError> {
        let email = self.email_policy.validate(input.email.as_deref())?;
        let text = validation::required("message", input.message.as_deref(), MAX_MESSAGE_LEN)?;

        let sender = self
            .profiles
            .find_by_email(&email)
            .await?
            .ok_or(BackendError::ProfileNotFound)?;

        let message = ContactMessage {
            id: Uuid::now_v7(),
            user_profile_id: sender.id,
            message: text,
            created_at: Utc::now(),
        };
        self.repo.create(&message).await?;
        Ok(ContactMessageView::new(message, &sender))
    }
}

// ── ListContactMessages ──────────────────────────────────────────────────────

pub struct ListContactMessagesUseCase<C: ContactMessageRepository> {
    pub repo: C,
}

impl<C: ContactMessageRepository> ListContactMessagesUseCase<C> {
    pub async fn execute(
        &self,
        page: PageRequest,
    ) -> Result<Vec<ContactMessageView>, BackendError> {
        self.repo.list(page.clamped()).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use coursehub_domain::validation::Violation;

    use crate::domain::types::Profile;

    struct MockProfileRepo {
        profile: Option<Profile>,
    }

    impl ProfileRepository for MockProfileRepo {
        async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, BackendError> {
            Ok(self.profile.clone().filter(|p| p.email == email))
        }
        async fn create(&self, _profile: &Profile) -> Result<(), BackendError> {
            Ok(())
        }
        async fn update(&self, _profile: &Profile) -> Result<(), BackendError> {
            Ok(())
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, BackendError> {
            Ok(false)
        }
    }

    #[derive(Default)]
    struct MockContactRepo {
        stored: Mutex<Vec<ContactMessage>>,
        last_page: Mutex<Option<PageRequest>>,
    }

    impl ContactMessageRepository for MockContactRepo {
        async fn create(&self, message: &ContactMessage) -> Result<(), BackendError> {
            self.stored.lock().unwrap().push(message.clone());
            Ok(())
        }
        async fn list(&self, page: PageRequest) -> Result<Vec<ContactMessageView>, BackendError> {
            *self.last_page.lock().unwrap() = Some(page);
            Ok(Vec::new())
        }
    }

    fn sender() -> Profile {
        Profile {
            id: Uuid::now_v7(),
            full_name: "Ada Lovelace".into(),
            first_name: None,
            last_name: Some("Lovelace".into()),
            email: "ada@gmail.com".into(),
            phone_number: Some("555-0100".into()),
            password_hash: "x".into(),
            created_at: Utc::now(),
            updated_at: Utc::now(),
        }
    }

    fn usecase(
        profile: Option<Profile>,
    ) -> SendContactMessageUseCase<MockProfileRepo, MockContactRepo> {
        SendContactMessageUseCase {
            profiles: MockProfileRepo { profile },
            repo: MockContactRepo::default(),
            email_policy: EmailPolicy::new("gmail.com"),
        }
    }

    #[tokio::test]
    async fn should_store_message_linked_to_sender() {
        let sender = sender();
        let usecase = usecase(Some(sender.clone()));
        let view = usecase
            .execute(SendContactMessageInput {
                email: Some("ada@gmail.com".into()),
                message: Some("  The engine is ready.  ".into()),
            })
            .await
            .unwrap();
        assert_eq!(view.message, "The engine is ready.");
        assert_eq!(view.full_name, "Ada Lovelace");
        assert_eq!(view.phone_number.as_deref(), Some("555-0100"));

        let stored = usecase.repo.stored.lock().unwrap();
        assert_eq!(stored.len(), 1);
        assert_eq!(stored[0].user_profile_id, sender.id);
    }

    #[tokio::test]
    async fn should_return_profile_not_found_for_unknown_sender() {
        let usecase = usecase(None);
        let result = usecase
            .execute(SendContactMessageInput {
                email: Some("ada@gmail.com".into()),
                message: Some("hello".into()),
            })
            .await;
        assert!(matches!(result, Err(BackendError::ProfileNotFound)));
        assert!(usecase.repo.stored.lock().unwrap().is_empty());
    }

    #[tokio::test]
    async fn should_reject_overlong_message() {
        let usecase = usecase(Some(sender()));
        let result = usecase
            .execute(SendContactMessageInput {
                email: Some("ada@gmail.com".into()),
                message: Some("x".repeat(MAX_MESSAGE_LEN + 1)),
            })
            .await;
        assert!(matches!(
            result,
            Err(BackendError::InvalidInput(Violation::TooLong {
                field: "message",
                ..
            }))
        ));
    }

    #[tokio::test]
    async fn should_clamp_page_before_listing() {
        let usecase = ListContactMessagesUseCase {
            repo: MockContactRepo::default(),
        };
        usecase
            .execute(PageRequest {
                per_page: 1000,
                page: 0,
            })
            .await
            .unwrap();
        let page = usecase.repo.last_page.lock().unwrap().unwrap();
        assert_eq!(page.per_page, 100);
        assert_eq!(page.page, 1);
    }
}
