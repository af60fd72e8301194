use chrono::{DateTime, Utc};
use uuid::Uuid;

use coursehub_domain::pagination::PageRequest;
use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::AuthorRepository;
use crate::domain::types::{Author, AuthorDetails};
use crate::error::BackendError;

pub const MAX_AUTHOR_NAME_LEN: usize = 64;
const MAX_PROFILE_TEXT_LEN: usize = 256;
const MAX_LOCATION_LEN: usize = 32;
const MAX_CONTACT_NUMBER_LEN: usize = 12;

#[derive(Debug, Clone, Default)]
pub struct AuthorInput {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub expertise: Vec<String>,
    pub qualification: Option<String>,
    pub experience_years: Option<i32>,
    pub certifications: Vec<String>,
    pub location: Option<String>,
    pub languages: Vec<String>,
    pub contact_number: Option<String>,
    pub last_active: Option<DateTime<Utc>>,
}

impl AuthorInput {
    pub fn validate(self) -> Result<AuthorDetails, Violation> {
        use validation::optional;

        let email = optional("email", self.email.as_deref(), MAX_PROFILE_TEXT_LEN)?
            .map(|e| validation::email_shape("email", &e))
            .transpose()?;
        let experience_years = self
            .experience_years
            .map(|y| validation::bounded("experience_years", y, 0, 100))
            .transpose()?;

        Ok(AuthorDetails {
            name: validation::required("name", self.name.as_deref(), MAX_AUTHOR_NAME_LEN)?,
            bio: optional("bio", self.bio.as_deref(), MAX_PROFILE_TEXT_LEN)?,
            email,
            website: optional("website", self.website.as_deref(), MAX_PROFILE_TEXT_LEN)?,
            expertise: validation::string_list(self.expertise),
            qualification: optional(
                "qualification",
                self.qualification.as_deref(),
                MAX_PROFILE_TEXT_LEN,
            )?,
            experience_years,
            certifications: validation::string_list(self.certifications),
            location: optional("location", self.location.as_deref(), MAX_LOCATION_LEN)?,
            languages: validation::string_list(self.languages),
            contact_number: optional(
                "contact_number",
                self.contact_number.as_deref(),
                MAX_CONTACT_NUMBER_LEN,
            )?,
            last_active: self.last_active,
        })
    }
}

// ── CreateAuthor ─────────────────────────────────────────────────────────────

pub struct CreateAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> CreateAuthorUseCase<R> {
    pub async fn execute(&self, input: AuthorInput) -> Result<Author, BackendError> {
        let author = Author {
            id: Uuid::now_v7(),
            details: input.validate()?,
            join_date: Utc::now(),
        };
        self.repo.create(&author).await?;
        Ok(author)
    }
}

// ── GetAuthor ────────────────────────────────────────────────────────────────

pub struct GetAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> GetAuthorUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Author, BackendError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BackendError::AuthorNotFound)
    }
}

// ── ListAuthors ──────────────────────────────────────────────────────────────

pub struct ListAuthorsUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> ListAuthorsUseCase<R> {
    pub async fn execute(&self, page: PageRequest) -> Result<Vec<Author>, BackendError> {
        self.repo.list(page.clamped()).await
    }
}

// ── UpdateAuthor ─────────────────────────────────────────────────────────────

pub struct UpdateAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> UpdateAuthorUseCase<R> {
    pub async fn execute(&self, id: Uuid, input: AuthorInput) -> Result<Author, BackendError> {
        let details = input.validate()?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BackendError::AuthorNotFound)?;
        let author = Author {
            id,
            details,
            join_date: existing.join_date,
        };
        self.repo.update(&author).await?;
        Ok(author)
    }
}

// ── DeleteAuthor ─────────────────────────────────────────────────────────────

pub struct DeleteAuthorUseCase<R: AuthorRepository> {
    pub repo: R,
}

impl<R: AuthorRepository> DeleteAuthorUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::AuthorNotFound);
        }
        Ok(())
    }
}
