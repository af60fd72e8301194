use uuid::Uuid;

use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::{ChapterRepository, CourseRepository};
use crate::domain::types::Chapter;
use crate::error::BackendError;

pub const MAX_CHAPTER_TITLE_LEN: usize = 128;

#[derive(Debug, Clone, Default)]
pub struct ChapterInput {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl ChapterInput {
    /// Returns `(title, content, order)`.
    fn validate(self) -> Result<(String, Option<String>, Option<i32>), Violation> {
        let title = validation::required("title", self.title.as_deref(), MAX_CHAPTER_TITLE_LEN)?;
        let content = validation::optional("content", self.content.as_deref(), usize::MAX)?;
        let order = self
            .order
            .map(|o| validation::bounded("order", o, 0, i32::MAX))
            .transpose()?;
        Ok((title, content, order))
    }
}

// ── CreateChapter ────────────────────────────────────────────────────────────

pub struct CreateChapterUseCase<C: CourseRepository, H: ChapterRepository> {
    pub courses: C,
    pub repo: H,
}

impl<C: CourseRepository, H: ChapterRepository> CreateChapterUseCase<C, H> {
    pub async fn execute(
        &self,
        course_id: Uuid,
        input: ChapterInput,
    ) -> Result<Chapter, BackendError> {
        let (title, content, order) = input.validate()?;
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        let chapter = Chapter {
            id: Uuid::now_v7(),
            course_id,
            title,
            content,
            order,
        };
        self.repo.create(&chapter).await?;
        Ok(chapter)
    }
}

// ── ListChapters ─────────────────────────────────────────────────────────────

pub struct ListChaptersUseCase<C: CourseRepository, H: ChapterRepository> {
    pub courses: C,
    pub repo: H,
}

impl<C: CourseRepository, H: ChapterRepository> ListChaptersUseCase<C, H> {
    pub async fn execute(&self, course_id: Uuid) -> Result<Vec<Chapter>, BackendError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        self.repo.list_by_course(course_id).await
    }
}

// ── UpdateChapter ────────────────────────────────────────────────────────────

pub struct UpdateChapterUseCase<H: ChapterRepository> {
    pub repo: H,
}

impl<H: ChapterRepository> UpdateChapterUseCase<H> {
    pub async fn execute(&self, id: Uuid, input: ChapterInput) -> Result<Chapter, BackendError> {
        let (title, content, order) = input.validate()?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BackendError::ChapterNotFound)?;
        let chapter = Chapter {
            title,
            content,
            order,
            ..existing
        };
        self.repo.update(&chapter).await?;
        Ok(chapter)
    }
}

// ── DeleteChapter ────────────────────────────────────────────────────────────

pub struct DeleteChapterUseCase<H: ChapterRepository> {
    pub repo: H,
}

impl<H: ChapterRepository> DeleteChapterUseCase<H> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::ChapterNotFound);
        }
        Ok(())
    }
}
