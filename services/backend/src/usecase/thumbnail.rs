use chrono::Utc;
use uuid::Uuid;

use coursehub_domain::validation;

use crate::domain::repository::{CourseRepository, ThumbnailRepository};
use crate::domain::types::Thumbnail;
use crate::error::BackendError;

pub const MAX_THUMBNAIL_URL_LEN: usize = 255;
const MAX_DESCRIPTION_LEN: usize = 255;

pub struct ThumbnailInput {
    pub url: Option<String>,
    pub description: Option<String>,
}

// ── CreateThumbnail ──────────────────────────────────────────────────────────

pub struct CreateThumbnailUseCase<C: CourseRepository, T: ThumbnailRepository> {
    pub courses: C,
    pub repo: T,
}

impl<C: CourseRepository, T: ThumbnailRepository> CreateThumbnailUseCase<C, T> {
    pub async fn execute(
        &self,
        course_id: Uuid,
        input: ThumbnailInput,
    ) -> Result<Thumbnail, BackendError> {
        let url = validation::required("url", input.url.as_deref(), MAX_THUMBNAIL_URL_LEN)?;
        let description = validation::optional(
            "description",
            input.description.as_deref(),
            MAX_DESCRIPTION_LEN,
        )?;
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        let thumbnail = Thumbnail {
            id: Uuid::now_v7(),
            course_id,
            url,
            description,
            uploaded_date: Utc::now(),
        };
        self.repo.create(&thumbnail).await?;
        Ok(thumbnail)
    }
}

// ── ListThumbnails ───────────────────────────────────────────────────────────

pub struct ListThumbnailsUseCase<C: CourseRepository, T: ThumbnailRepository> {
    pub courses: C,
    pub repo: T,
}

impl<C: CourseRepository, T: ThumbnailRepository> ListThumbnailsUseCase<C, T> {
    pub async fn execute(&self, course_id: Uuid) -> Result<Vec<Thumbnail>, BackendError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        self.repo.list_by_course(course_id).await
    }
}

// ── DeleteThumbnail ──────────────────────────────────────────────────────────

pub struct DeleteThumbnailUseCase<T: ThumbnailRepository> {
    pub repo: T,
}

impl<T: ThumbnailRepository> DeleteThumbnailUseCase<T> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::ThumbnailNotFound);
        }
        Ok(())
    }
}
