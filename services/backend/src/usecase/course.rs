use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use uuid::Uuid;

use coursehub_domain::pagination::PageRequest;
use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::{AuthorRepository, CourseAuthorRepository, CourseRepository};
use crate::domain::types::{Author, Course, CourseDetails, CourseSortBy};
use crate::error::BackendError;

pub const MAX_COURSE_NAME_LEN: usize = 128;
const MAX_SHORT_TEXT_LEN: usize = 255;
const MAX_LEVEL_LEN: usize = 64;
const MAX_COURSE_RESOURCE_LEN: usize = 500;
const MAX_URL_LEN: usize = 2048;
const MAX_LONG_TEXT_LEN: usize = 2000;

/// Submitted course fields, shared by create and full update.
#[derive(Debug, Clone, Default)]
pub struct CourseInput {
    pub course_name: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    pub categories: Vec<String>,
    pub content: Vec<BTreeMap<String, String>>,
    pub duration: Option<i32>,
    pub level: Option<String>,
    pub released_date: Option<DateTime<Utc>>,
    pub certification: Option<bool>,
    pub discount_offers: Option<String>,
    pub syllabus: Option<String>,
    pub progress_tracking: Option<bool>,
    pub course_resource: Option<String>,
    pub faqs: Option<String>,
    pub accessibility_features: Option<String>,
    pub course_preview: Option<String>,
    pub interactive_features: Option<String>,
    pub video_quality_option: Option<String>,
}

impl CourseInput {
    pub fn validate(self) -> Result<CourseDetails, Violation> {
        use validation::optional;

        let rating = self
            .rating
            .map(|r| validation::bounded("rating", r, 0.0, 5.0))
            .transpose()?;
        let duration = self
            .duration
            .map(|d| validation::bounded("duration", d, 0, i32::MAX))
            .transpose()?;

        Ok(CourseDetails {
            course_name: validation::required(
                "course_name",
                self.course_name.as_deref(),
                MAX_COURSE_NAME_LEN,
            )?,
            description: optional(
                "description",
                self.description.as_deref(),
                MAX_SHORT_TEXT_LEN,
            )?,
            thumbnail_url: optional("thumbnail_url", self.thumbnail_url.as_deref(), MAX_URL_LEN)?,
            rating,
            categories: validation::string_list(self.categories),
            content: self.content,
            duration,
            level: optional("level", self.level.as_deref(), MAX_LEVEL_LEN)?,
            released_date: self.released_date,
            certification: self.certification.unwrap_or(false),
            discount_offers: optional(
                "discount_offers",
                self.discount_offers.as_deref(),
                MAX_SHORT_TEXT_LEN,
            )?,
            syllabus: optional(
                "syllabus",
                self.syllabus.as_deref(),
                MAX_LONG_TEXT_LEN,
            )?,
            progress_tracking: self.progress_tracking.unwrap_or(false),
            course_resource: optional(
                "course_resource",
                self.course_resource.as_deref(),
                MAX_COURSE_RESOURCE_LEN,
            )?,
            faqs: optional("faqs", self.faqs.as_deref(), MAX_LONG_TEXT_LEN)?,
            accessibility_features: optional(
                "accessibility_features",
                self.accessibility_features.as_deref(),
                MAX_SHORT_TEXT_LEN,
            )?,
            course_preview: optional(
                "course_preview",
                self.course_preview.as_deref(),
                MAX_URL_LEN,
            )?,
            interactive_features: optional(
                "interactive_features",
                self.interactive_features.as_deref(),
                MAX_SHORT_TEXT_LEN,
            )?,
            video_quality_option: optional(
                "video_quality_option",
                self.video_quality_option.as_deref(),
                MAX_SHORT_TEXT_LEN,
            )?,
        })
    }
}

// ── CreateCourse ─────────────────────────────────────────────────────────────

pub struct CreateCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> CreateCourseUseCase<R> {
    pub async fn execute(&self, input: CourseInput) -> Result<Course, BackendError> {
        let course = Course {
            id: Uuid::now_v7(),
            details: input.validate()?,
            last_update: Utc::now(),
            enrollment_count: 0,
        };
        self.repo.create(&course).await?;
        tracing::info!(course_id = %course.id, "course created");
        Ok(course)
    }
}

// ── GetCourse ────────────────────────────────────────────────────────────────

pub struct GetCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> GetCourseUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<Course, BackendError> {
        self.repo
            .find_by_id(id)
            .await?
            .ok_or(BackendError::CourseNotFound)
    }
}

// ── ListCourses ──────────────────────────────────────────────────────────────

pub struct ListCoursesUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> ListCoursesUseCase<R> {
    pub async fn execute(
        &self,
        sort_by: CourseSortBy,
        page: PageRequest,
    ) -> Result<Vec<Course>, BackendError> {
        self.repo.list(sort_by, page.clamped()).await
    }
}

// ── UpdateCourse ─────────────────────────────────────────────────────────────

pub struct UpdateCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> UpdateCourseUseCase<R> {
    /// Replaces every editable field. `enrollment_count` carries over.
    pub async fn execute(&self, id: Uuid, input: CourseInput) -> Result<Course, BackendError> {
        let details = input.validate()?;
        let existing = self
            .repo
            .find_by_id(id)
            .await?
            .ok_or(BackendError::CourseNotFound)?;
        let course = Course {
            id,
            details,
            last_update: Utc::now(),
            enrollment_count: existing.enrollment_count,
        };
        self.repo.update(&course).await?;
        Ok(course)
    }
}

// ── DeleteCourse ─────────────────────────────────────────────────────────────

pub struct DeleteCourseUseCase<R: CourseRepository> {
    pub repo: R,
}

impl<R: CourseRepository> DeleteCourseUseCase<R> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::CourseNotFound);
        }
        tracing::info!(course_id = %id, "course deleted");
        Ok(())
    }
}

// ── Course authors ───────────────────────────────────────────────────────────

pub struct ListCourseAuthorsUseCase<C: CourseRepository, L: CourseAuthorRepository> {
    pub courses: C,
    pub repo: L,
}

impl<C: CourseRepository, L: CourseAuthorRepository> ListCourseAuthorsUseCase<C, L> {
    pub async fn execute(&self, course_id: Uuid) -> Result<Vec<Author>, BackendError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        self.repo.list_authors(course_id).await
    }
}

pub struct LinkAuthorUseCase<C, A, L>
where
    C: CourseRepository,
    A: AuthorRepository,
    L: CourseAuthorRepository,
{
    pub courses: C,
    pub authors: A,
    pub repo: L,
}

impl<C, A, L> LinkAuthorUseCase<C, A, L>
where
    C: CourseRepository,
    A: AuthorRepository,
    L: CourseAuthorRepository,
{
    pub async fn execute(&self, course_id: Uuid, author_id: Uuid) -> Result<(), BackendError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        if self.authors.find_by_id(author_id).await?.is_none() {
            return Err(BackendError::AuthorNotFound);
        }
        if !self.repo.link(course_id, author_id).await? {
            return Err(BackendError::AuthorAlreadyLinked);
        }
        Ok(())
    }
}

pub struct UnlinkAuthorUseCase<L: CourseAuthorRepository> {
    pub repo: L,
}

impl<L: CourseAuthorRepository> UnlinkAuthorUseCase<L> {
    pub async fn execute(&self, course_id: Uuid, author_id: Uuid) -> Result<(), BackendError> {
        if !self.repo.unlink(course_id, author_id).await? {
            return Err(BackendError::AuthorLinkNotFound);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    use crate::domain::types::AuthorDetails;

    #[derive(Default)]
    struct MockCourseRepo {
        courses: Mutex<Vec<Course>>,
    }

    impl CourseRepository for MockCourseRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, BackendError> {
            Ok(self
                .courses
                .lock()
                .unwrap()
                .iter()
                .find(|c| c.id == id)
                .cloned())
        }
        async fn list(
            &self,
            _sort_by: CourseSortBy,
            _page: PageRequest,
        ) -> Result<Vec<Course>, BackendError> {
            Ok(self.courses.lock().unwrap().clone())
        }
        async fn create(&self, course: &Course) -> Result<(), BackendError> {
            self.courses.lock().unwrap().push(course.clone());
            Ok(())
        }
        async fn update(&self, course: &Course) -> Result<(), BackendError> {
            let mut courses = self.courses.lock().unwrap();
            let slot = courses
                .iter_mut()
                .find(|c| c.id == course.id)
                .ok_or(BackendError::CourseNotFound)?;
            *slot = course.clone();
            Ok(())
        }
        async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
            let mut courses = self.courses.lock().unwrap();
            let before = courses.len();
            courses.retain(|c| c.id != id);
            Ok(courses.len() < before)
        }
    }

    struct MockAuthorRepo {
        author: Option<Author>,
    }

    impl AuthorRepository for MockAuthorRepo {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, BackendError> {
            Ok(self.author.clone().filter(|a| a.id == id))
        }
        async fn list(&self, _page: PageRequest) -> Result<Vec<Author>, BackendError> {
            Ok(self.author.clone().into_iter().collect())
        }
        async fn create(&self, _author: &Author) -> Result<(), BackendError> {
            Ok(())
        }
        async fn update(&self, _author: &Author) -> Result<(), BackendError> {
            Ok(())
        }
        async fn delete(&self, _id: Uuid) -> Result<bool, BackendError> {
            Ok(true)
        }
    }

    #[derive(Default)]
    struct MockLinkRepo {
        links: Mutex<Vec<(Uuid, Uuid)>>,
    }

    impl CourseAuthorRepository for MockLinkRepo {
        async fn list_authors(&self, _course_id: Uuid) -> Result<Vec<Author>, BackendError> {
            Ok(Vec::new())
        }
        async fn link(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError> {
            let mut links = self.links.lock().unwrap();
            if links.contains(&(course_id, author_id)) {
                return Ok(false);
            }
            links.push((course_id, author_id));
            Ok(true)
        }
        async fn unlink(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError> {
            let mut links = self.links.lock().unwrap();
            let before = links.len();
            links.retain(|l| *l != (course_id, author_id));
            Ok(links.len() < before)
        }
    }

    fn input() -> CourseInput {
        CourseInput {
            course_name: Some("  Rust for Engines ".into()),
            rating: Some(4.5),
            categories: vec![" systems ".into(), "".into()],
            ..Default::default()
        }
    }

    fn author() -> Author {
        Author {
            id: Uuid::now_v7(),
            details: AuthorDetails {
                name: "Ada".into(),
                ..Default::default()
            },
            join_date: Utc::now(),
        }
    }

    #[test]
    fn should_validate_and_normalize_course_input() {
        let details = input().validate().unwrap();
        assert_eq!(details.course_name, "Rust for Engines");
        assert_eq!(details.categories, vec!["systems".to_owned()]);
        assert!(!details.certification);
    }

    #[test]
    fn should_reject_rating_out_of_range() {
        let result = CourseInput {
            rating: Some(5.1),
            ..input()
        }
        .validate();
        assert!(matches!(
            result,
            Err(Violation::OutOfRange {
                field: "rating",
                ..
            })
        ));
    }

    #[test]
    fn should_reject_negative_duration() {
        let result = CourseInput {
            duration: Some(-1),
            ..input()
        }
        .validate();
        assert!(matches!(
            result,
            Err(Violation::OutOfRange {
                field: "duration",
                ..
            })
        ));
    }

    #[test]
    fn should_cap_syllabus_and_faqs_length() {
        let at_limit = CourseInput {
            syllabus: Some("s".repeat(MAX_LONG_TEXT_LEN)),
            faqs: Some("f".repeat(MAX_LONG_TEXT_LEN)),
            ..input()
        }
        .validate();
        assert!(at_limit.is_ok());

        let syllabus = CourseInput {
            syllabus: Some("s".repeat(MAX_LONG_TEXT_LEN + 1)),
            ..input()
        }
        .validate();
        assert_eq!(
            syllabus,
            Err(Violation::TooLong {
                field: "syllabus",
                max: MAX_LONG_TEXT_LEN
            })
        );

        let faqs = CourseInput {
            faqs: Some("f".repeat(MAX_LONG_TEXT_LEN + 1)),
            ..input()
        }
        .validate();
        assert_eq!(
            faqs,
            Err(Violation::TooLong {
                field: "faqs",
                max: MAX_LONG_TEXT_LEN
            })
        );
    }

    #[test]
    fn should_require_course_name() {
        let result = CourseInput {
            course_name: None,
            ..input()
        }
        .validate();
        assert_eq!(
            result,
            Err(Violation::Required {
                field: "course_name"
            })
        );
    }

    #[tokio::test]
    async fn should_create_course_with_zero_enrollments() {
        let usecase = CreateCourseUseCase {
            repo: MockCourseRepo::default(),
        };
        let course = usecase.execute(input()).await.unwrap();
        assert_eq!(course.enrollment_count, 0);
        assert_eq!(usecase.repo.courses.lock().unwrap().len(), 1);
    }

    #[tokio::test]
    async fn should_keep_enrollment_count_on_update() {
        let repo = MockCourseRepo::default();
        let id = Uuid::now_v7();
        repo.courses.lock().unwrap().push(Course {
            id,
            details: input().validate().unwrap(),
            last_update: Utc::now(),
            enrollment_count: 7,
        });
        let usecase = UpdateCourseUseCase { repo };
        let updated = usecase
            .execute(
                id,
                CourseInput {
                    course_name: Some("Rust for Looms".into()),
                    ..Default::default()
                },
            )
            .await
            .unwrap();
        assert_eq!(updated.enrollment_count, 7);
        assert_eq!(updated.details.course_name, "Rust for Looms");
        assert_eq!(updated.details.rating, None);
    }

    #[tokio::test]
    async fn should_return_course_not_found_on_get_update_and_delete() {
        let get = GetCourseUseCase {
            repo: MockCourseRepo::default(),
        };
        assert!(matches!(
            get.execute(Uuid::now_v7()).await,
            Err(BackendError::CourseNotFound)
        ));

        let update = UpdateCourseUseCase {
            repo: MockCourseRepo::default(),
        };
        assert!(matches!(
            update.execute(Uuid::now_v7(), input()).await,
            Err(BackendError::CourseNotFound)
        ));

        let delete = DeleteCourseUseCase {
            repo: MockCourseRepo::default(),
        };
        assert!(matches!(
            delete.execute(Uuid::now_v7()).await,
            Err(BackendError::CourseNotFound)
        ));
    }

    #[tokio::test]
    async fn should_link_author_once() {
        let courses = MockCourseRepo::default();
        let course_id = Uuid::now_v7();
        courses.courses.lock().unwrap().push(Course {
            id: course_id,
            details: input().validate().unwrap(),
            last_update: Utc::now(),
            enrollment_count: 0,
        });
        let author = author();
        let usecase = LinkAuthorUseCase {
            courses,
            authors: MockAuthorRepo {
                author: Some(author.clone()),
            },
            repo: MockLinkRepo::default(),
        };
        usecase.execute(course_id, author.id).await.unwrap();
        let again = usecase.execute(course_id, author.id).await;
        assert!(matches!(again, Err(BackendError::AuthorAlreadyLinked)));
    }

    #[tokio::test]
    async fn should_return_author_not_found_when_linking() {
        let courses = MockCourseRepo::default();
        let course_id = Uuid::now_v7();
        courses.courses.lock().unwrap().push(Course {
            id: course_id,
            details: input().validate().unwrap(),
            last_update: Utc::now(),
            enrollment_count: 0,
        });
        let usecase = LinkAuthorUseCase {
            courses,
            authors: MockAuthorRepo { author: None },
            repo: MockLinkRepo::default(),
        };
        let result = usecase.execute(course_id, Uuid::now_v7()).await;
        assert!(matches!(result, Err(BackendError::AuthorNotFound)));
    }

    #[tokio::test]
    async fn should_return_link_not_found_on_unlink() {
        let usecase = UnlinkAuthorUseCase {
            repo: MockLinkRepo::default(),
        };
        let result = usecase.execute(Uuid::now_v7(), Uuid::now_v7()).await;
        assert!(matches!(result, Err(BackendError::AuthorLinkNotFound)));
    }
}
