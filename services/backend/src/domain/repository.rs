#![allow(async_fn_in_trait)]

use uuid::Uuid;

use coursehub_domain::enrollment::EnrollmentStatus;
use coursehub_domain::pagination::PageRequest;

use crate::domain::types::{
    Author, Chapter, ContactMessage, ContactMessageView, Course, CourseResource, CourseSortBy,
    Enrollment, Price, Profile, ResourceType, Thumbnail,
};
use crate::error::BackendError;

/// Repository for user profiles.
pub trait ProfileRepository: Send + Sync {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, BackendError>;

    /// Insert a profile. A taken email is `ProfileAlreadyExists`.
    async fn create(&self, profile: &Profile) -> Result<(), BackendError>;

    /// Overwrite names, phone number, password hash and `updated_at`.
    /// A missing row is `ProfileNotFound`.
    async fn update(&self, profile: &Profile) -> Result<(), BackendError>;

    /// Delete a profile together with its contact messages and enrollments, releasing
    /// the enrolled courses' seats. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// One-way password hashing.
pub trait PasswordHasher: Send + Sync {
    async fn hash(&self, password: &str) -> Result<String, BackendError>;
    async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError>;
}

/// Repository for contact-form messages.
pub trait ContactMessageRepository: Send + Sync {
    async fn create(&self, message: &ContactMessage) -> Result<(), BackendError>;

    /// Newest first, joined with the sender's profile.
    async fn list(&self, page: PageRequest) -> Result<Vec<ContactMessageView>, BackendError>;
}

/// Repository for profile/course enrollments.
pub trait EnrollmentRepository: Send + Sync {
    async fn get(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, BackendError>;

    /// Newest first.
    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, BackendError>;

    /// Insert the pair and increment the course's `enrollment_count` atomically.
    /// An existing pair is `EnrollmentAlreadyExists`.
    async fn create(&self, enrollment: &Enrollment) -> Result<(), BackendError>;

    /// Returns `true` if the pair existed.
    async fn update_status(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        status: EnrollmentStatus,
    ) -> Result<bool, BackendError>;

    /// Delete the pair and decrement the course's `enrollment_count` atomically.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for courses.
pub trait CourseRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, BackendError>;

    async fn list(
        &self,
        sort_by: CourseSortBy,
        page: PageRequest,
    ) -> Result<Vec<Course>, BackendError>;

    async fn create(&self, course: &Course) -> Result<(), BackendError>;

    /// Overwrite the editable fields and `last_update`. `enrollment_count` is untouched.
    /// A missing row is `CourseNotFound`.
    async fn update(&self, course: &Course) -> Result<(), BackendError>;

    /// Delete a course and everything it owns. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for authors.
pub trait AuthorRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, BackendError>;

    /// Ordered by name.
    async fn list(&self, page: PageRequest) -> Result<Vec<Author>, BackendError>;

    async fn create(&self, author: &Author) -> Result<(), BackendError>;

    /// A missing row is `AuthorNotFound`.
    async fn update(&self, author: &Author) -> Result<(), BackendError>;

    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for the course/author link table.
pub trait CourseAuthorRepository: Send + Sync {
    /// Authors linked to a course, ordered by name.
    async fn list_authors(&self, course_id: Uuid) -> Result<Vec<Author>, BackendError>;

    /// Returns `false` if the pair was already linked.
    async fn link(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError>;

    /// Returns `true` if a link was removed.
    async fn unlink(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for course prices.
pub trait PriceRepository: Send + Sync {
    async fn create(&self, price: &Price) -> Result<(), BackendError>;
    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Price>, BackendError>;
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for course chapters.
pub trait ChapterRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chapter>, BackendError>;

    /// Ordered by `order` (unordered chapters last), then title.
    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Chapter>, BackendError>;

    async fn create(&self, chapter: &Chapter) -> Result<(), BackendError>;

    /// A missing row is `ChapterNotFound`.
    async fn update(&self, chapter: &Chapter) -> Result<(), BackendError>;

    /// Delete a chapter and its resources. Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for course thumbnails.
pub trait ThumbnailRepository: Send + Sync {
    async fn create(&self, thumbnail: &Thumbnail) -> Result<(), BackendError>;

    /// Newest first.
    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Thumbnail>, BackendError>;

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for resource types.
pub trait ResourceTypeRepository: Send + Sync {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResourceType>, BackendError>;

    /// Ordered by type name.
    async fn list(&self) -> Result<Vec<ResourceType>, BackendError>;

    async fn create(&self, resource_type: &ResourceType) -> Result<(), BackendError>;

    /// A type still referenced by a resource is `ResourceTypeInUse`.
    /// Returns `true` if a row was deleted.
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}

/// Repository for chapter resources.
pub trait CourseResourceRepository: Send + Sync {
    async fn list_by_chapter(&self, chapter_id: Uuid)
    -> Result<Vec<CourseResource>, BackendError>;
    async fn create(&self, resource: &CourseResource) -> Result<(), BackendError>;
    async fn delete(&self, id: Uuid) -> Result<bool, BackendError>;
}
