use uuid::Uuid;

use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::{
    ChapterRepository, CourseResourceRepository, ResourceTypeRepository,
};
use crate::domain::types::{CourseResource, ResourceType};
use crate::error::BackendError;

pub const MAX_TYPE_NAME_LEN: usize = 64;
pub const MAX_RESOURCE_TITLE_LEN: usize = 128;
const MAX_RESOURCE_URL_LEN: usize = 255;

// ── Resource types ───────────────────────────────────────────────────────────

pub struct ResourceTypeInput {
    pub type_name: Option<String>,
    pub description: Option<String>,
}

pub struct CreateResourceTypeUseCase<T: ResourceTypeRepository> {
    pub repo: T,
}

impl<T: ResourceTypeRepository> CreateResourceTypeUseCase<T> {
    pub async fn execute(&self, input: ResourceTypeInput) -> Result<ResourceType, BackendError> {
        let resource_type = ResourceType {
            id: Uuid::now_v7(),
            type_name: validation::required(
                "type_name",
                input.type_name.as_deref(),
                MAX_TYPE_NAME_LEN,
            )?,
            description: validation::optional(
                "description",
                input.description.as_deref(),
                usize::MAX,
            )?,
        };
        self.repo.create(&resource_type).await?;
        Ok(resource_type)
    }
}

pub struct ListResourceTypesUseCase<T: ResourceTypeRepository> {
    pub repo: T,
}

impl<T: ResourceTypeRepository> ListResourceTypesUseCase<T> {
    pub async fn execute(&self) -> Result<Vec<ResourceType>, BackendError> {
        self.repo.list().await
    }
}

pub struct DeleteResourceTypeUseCase<T: ResourceTypeRepository> {
    pub repo: T,
}

impl<T: ResourceTypeRepository> DeleteResourceTypeUseCase<T> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::ResourceTypeNotFound);
        }
        Ok(())
    }
}

// ── Chapter resources ────────────────────────────────────────────────────────

pub struct ResourceInput {
    pub title: Option<String>,
    pub resource_url: Option<String>,
    pub resource_type_id: Option<Uuid>,
}

pub struct CreateResourceUseCase<H, T, R>
where
    H: ChapterRepository,
    T: ResourceTypeRepository,
    R: CourseResourceRepository,
{
    pub chapters: H,
    pub resource_types: T,
    pub repo: R,
}

impl<H, T, R> CreateResourceUseCase<H, T, R>
where
    H: ChapterRepository,
    T: ResourceTypeRepository,
    R: CourseResourceRepository,
{
    /// The resource inherits the chapter's course.
    pub async fn execute(
        &self,
        chapter_id: Uuid,
        input: ResourceInput,
    ) -> Result<CourseResource, BackendError> {
        let title =
            validation::required("title", input.title.as_deref(), MAX_RESOURCE_TITLE_LEN)?;
        let resource_url = validation::optional(
            "resource_url",
            input.resource_url.as_deref(),
            MAX_RESOURCE_URL_LEN,
        )?;
        let resource_type_id = input.resource_type_id.ok_or(Violation::Required {
            field: "resource_type_id",
        })?;

        let chapter = self
            .chapters
            .find_by_id(chapter_id)
            .await?
            .ok_or(BackendError::ChapterNotFound)?;
        if self
            .resource_types
            .find_by_id(resource_type_id)
            .await?
            .is_none()
        {
            return Err(BackendError::ResourceTypeNotFound);
        }

        let resource = CourseResource {
            id: Uuid::now_v7(),
            course_id: chapter.course_id,
            chapter_id,
            resource_type_id,
            title,
            resource_url,
        };
        self.repo.create(&resource).await?;
        Ok(resource)
    }
}

pub struct ListResourcesUseCase<H: ChapterRepository, R: CourseResourceRepository> {
    pub chapters: H,
    pub repo: R,
}

impl<H: ChapterRepository, R: CourseResourceRepository> ListResourcesUseCase<H, R> {
    pub async fn execute(&self, chapter_id: Uuid) -> Result<Vec<CourseResource>, BackendError> {
        if self.chapters.find_by_id(chapter_id).await?.is_none() {
            return Err(BackendError::ChapterNotFound);
        }
        self.repo.list_by_chapter(chapter_id).await
    }
}

pub struct DeleteResourceUseCase<R: CourseResourceRepository> {
    pub repo: R,
}

impl<R: CourseResourceRepository> DeleteResourceUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::ResourceNotFound);
        }
        Ok(())
    }
}
