use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    JoinType, Order, PaginatorTrait, QueryFilter, QueryOrder, QuerySelect, RelationTrait,
    sea_query::NullOrdering,
};
use uuid::Uuid;

use coursehub_backend_schema::json::{ContentBlocks, TextList};
use coursehub_backend_schema::{
    authors, course_author_links, course_chapters, course_resources, courses, prices,
    resource_types, thumbnails,
};
use coursehub_core::sea_ext::DbErrExt as _;
use coursehub_domain::pagination::{PageRequest, Sort};

use crate::domain::repository::{
    AuthorRepository, ChapterRepository, CourseAuthorRepository, CourseRepository,
    CourseResourceRepository, PriceRepository, ResourceTypeRepository, ThumbnailRepository,
};
use crate::domain::types::{
    Author, AuthorDetails, Chapter, Course, CourseDetails, CourseResource, CourseSortBy, Price,
    ResourceType, Thumbnail,
};
use crate::error::BackendError;
use crate::infra::insert_error;

fn order(sort: Sort) -> Order {
    match sort {
        Sort::Asc => Order::Asc,
        Sort::Desc => Order::Desc,
    }
}

// ── Course repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseRepository {
    pub db: DatabaseConnection,
}

impl CourseRepository for DbCourseRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Course>, BackendError> {
        let model = courses::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find course by id")?;
        Ok(model.map(course_from_model))
    }

    async fn list(
        &self,
        sort_by: CourseSortBy,
        page: PageRequest,
    ) -> Result<Vec<Course>, BackendError> {
        let page = page.clamped();
        let query = match sort_by {
            CourseSortBy::LastUpdate(sort) => {
                courses::Entity::find().order_by(courses::Column::LastUpdate, order(sort))
            }
            CourseSortBy::CourseName(sort) => {
                courses::Entity::find().order_by(courses::Column::CourseName, order(sort))
            }
            CourseSortBy::Rating(sort) => courses::Entity::find().order_by_with_nulls(
                courses::Column::Rating,
                order(sort),
                NullOrdering::Last,
            ),
        };
        let models = query
            .order_by_asc(courses::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list courses")?;
        Ok(models.into_iter().map(course_from_model).collect())
    }

    async fn create(&self, course: &Course) -> Result<(), BackendError> {
        let mut am = courses::ActiveModel {
            id: Set(course.id),
            last_update: Set(course.last_update),
            enrollment_count: Set(course.enrollment_count),
            ..Default::default()
        };
        apply_course_details(&mut am, &course.details);
        am.insert(&self.db).await.context("create course")?;
        Ok(())
    }

    async fn update(&self, course: &Course) -> Result<(), BackendError> {
        let mut am = courses::ActiveModel {
            id: Set(course.id),
            last_update: Set(course.last_update),
            ..Default::default()
        };
        apply_course_details(&mut am, &course.details);
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(BackendError::CourseNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update course").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = courses::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete course")?;
        Ok(result.rows_affected > 0)
    }
}

fn apply_course_details(am: &mut courses::ActiveModel, details: &CourseDetails) {
    am.course_name = Set(details.course_name.clone());
    am.description = Set(details.description.clone());
    am.thumbnail_url = Set(details.thumbnail_url.clone());
    am.rating = Set(details.rating);
    am.categories = Set(TextList(details.categories.clone()));
    am.content = Set(ContentBlocks(details.content.clone()));
    am.duration = Set(details.duration);
    am.level = Set(details.level.clone());
    am.released_date = Set(details.released_date);
    am.certification = Set(details.certification);
    am.discount_offers = Set(details.discount_offers.clone());
    am.syllabus = Set(details.syllabus.clone());
    am.progress_tracking = Set(details.progress_tracking);
    am.course_resource = Set(details.course_resource.clone());
    am.faqs = Set(details.faqs.clone());
    am.accessibility_features = Set(details.accessibility_features.clone());
    am.course_preview = Set(details.course_preview.clone());
    am.interactive_features = Set(details.interactive_features.clone());
    am.video_quality_option = Set(details.video_quality_option.clone());
}

fn course_from_model(model: courses::Model) -> Course {
    Course {
        id: model.id,
        details: CourseDetails {
            course_name: model.course_name,
            description: model.description,
            thumbnail_url: model.thumbnail_url,
            rating: model.rating,
            categories: model.categories.0,
            content: model.content.0,
            duration: model.duration,
            level: model.level,
            released_date: model.released_date,
            certification: model.certification,
            discount_offers: model.discount_offers,
            syllabus: model.syllabus,
            progress_tracking: model.progress_tracking,
            course_resource: model.course_resource,
            faqs: model.faqs,
            accessibility_features: model.accessibility_features,
            course_preview: model.course_preview,
            interactive_features: model.interactive_features,
            video_quality_option: model.video_quality_option,
        },
        last_update: model.last_update,
        enrollment_count: model.enrollment_count,
    }
}

// ── Author repository ────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbAuthorRepository {
    pub db: DatabaseConnection,
}

impl AuthorRepository for DbAuthorRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Author>, BackendError> {
        let model = authors::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find author by id")?;
        Ok(model.map(author_from_model))
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<Author>, BackendError> {
        let page = page.clamped();
        let models = authors::Entity::find()
            .order_by_asc(authors::Column::Name)
            .order_by_asc(authors::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list authors")?;
        Ok(models.into_iter().map(author_from_model).collect())
    }

    async fn create(&self, author: &Author) -> Result<(), BackendError> {
        let mut am = authors::ActiveModel {
            id: Set(author.id),
            join_date: Set(author.join_date),
            ..Default::default()
        };
        apply_author_details(&mut am, &author.details);
        am.insert(&self.db).await.context("create author")?;
        Ok(())
    }

    async fn update(&self, author: &Author) -> Result<(), BackendError> {
        let mut am = authors::ActiveModel {
            id: Set(author.id),
            ..Default::default()
        };
        apply_author_details(&mut am, &author.details);
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(BackendError::AuthorNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update author").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = authors::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete author")?;
        Ok(result.rows_affected > 0)
    }
}

fn apply_author_details(am: &mut authors::ActiveModel, details: &AuthorDetails) {
    am.name = Set(details.name.clone());
    am.bio = Set(details.bio.clone());
    am.email = Set(details.email.clone());
    am.website = Set(details.website.clone());
    am.expertise = Set(TextList(details.expertise.clone()));
    am.qualification = Set(details.qualification.clone());
    am.experience_years = Set(details.experience_years);
    am.certifications = Set(TextList(details.certifications.clone()));
    am.location = Set(details.location.clone());
    am.languages = Set(TextList(details.languages.clone()));
    am.contact_number = Set(details.contact_number.clone());
    am.last_active = Set(details.last_active);
}

fn author_from_model(model: authors::Model) -> Author {
    Author {
        id: model.id,
        details: AuthorDetails {
            name: model.name,
            bio: model.bio,
            email: model.email,
            website: model.website,
            expertise: model.expertise.0,
            qualification: model.qualification,
            experience_years: model.experience_years,
            certifications: model.certifications.0,
            location: model.location,
            languages: model.languages.0,
            contact_number: model.contact_number,
            last_active: model.last_active,
        },
        join_date: model.join_date,
    }
}

// ── Course/author links ──────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseAuthorRepository {
    pub db: DatabaseConnection,
}

impl CourseAuthorRepository for DbCourseAuthorRepository {
    async fn list_authors(&self, course_id: Uuid) -> Result<Vec<Author>, BackendError> {
        let models = authors::Entity::find()
            .join(JoinType::InnerJoin, authors::Relation::CourseAuthorLinks.def())
            .filter(course_author_links::Column::CourseId.eq(course_id))
            .order_by_asc(authors::Column::Name)
            .order_by_asc(authors::Column::Id)
            .all(&self.db)
            .await
            .context("list course authors")?;
        Ok(models.into_iter().map(author_from_model).collect())
    }

    async fn link(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError> {
        let result = course_author_links::Entity::insert(course_author_links::ActiveModel {
            course_id: Set(course_id),
            author_id: Set(author_id),
        })
        .exec_without_returning(&self.db)
        .await;
        match result {
            Ok(_) => Ok(true),
            Err(e) if e.is_unique_violation() => Ok(false),
            Err(e) => Err(anyhow::Error::new(e).context("link course author").into()),
        }
    }

    async fn unlink(&self, course_id: Uuid, author_id: Uuid) -> Result<bool, BackendError> {
        let result = course_author_links::Entity::delete_by_id((course_id, author_id))
            .exec(&self.db)
            .await
            .context("unlink course author")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Price repository ─────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbPriceRepository {
    pub db: DatabaseConnection,
}

impl PriceRepository for DbPriceRepository {
    async fn create(&self, price: &Price) -> Result<(), BackendError> {
        prices::Entity::insert(prices::ActiveModel {
            id: Set(price.id),
            course_id: Set(price.course_id),
            amount: Set(price.amount),
            currency: Set(price.currency.clone()),
            discount: Set(price.discount),
            start_date: Set(price.start_date),
            end_date: Set(price.end_date),
            description: Set(price.description.clone()),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| insert_error(e, BackendError::CourseNotFound, "create price"))?;
        Ok(())
    }

    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Price>, BackendError> {
        let models = prices::Entity::find()
            .filter(prices::Column::CourseId.eq(course_id))
            .order_by_asc(prices::Column::Id)
            .all(&self.db)
            .await
            .context("list prices by course")?;
        Ok(models.into_iter().map(price_from_model).collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = prices::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete price")?;
        Ok(result.rows_affected > 0)
    }
}

fn price_from_model(model: prices::Model) -> Price {
    Price {
        id: model.id,
        course_id: model.course_id,
        amount: model.amount,
        currency: model.currency,
        discount: model.discount,
        start_date: model.start_date,
        end_date: model.end_date,
        description: model.description,
    }
}

// ── Chapter repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbChapterRepository {
    pub db: DatabaseConnection,
}

impl ChapterRepository for DbChapterRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<Chapter>, BackendError> {
        let model = course_chapters::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find chapter by id")?;
        Ok(model.map(chapter_from_model))
    }

    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Chapter>, BackendError> {
        let models = course_chapters::Entity::find()
            .filter(course_chapters::Column::CourseId.eq(course_id))
            .order_by_with_nulls(
                course_chapters::Column::Position,
                Order::Asc,
                NullOrdering::Last,
            )
            .order_by_asc(course_chapters::Column::Title)
            .all(&self.db)
            .await
            .context("list chapters by course")?;
        Ok(models.into_iter().map(chapter_from_model).collect())
    }

    async fn create(&self, chapter: &Chapter) -> Result<(), BackendError> {
        course_chapters::Entity::insert(course_chapters::ActiveModel {
            id: Set(chapter.id),
            course_id: Set(chapter.course_id),
            title: Set(chapter.title.clone()),
            content: Set(chapter.content.clone()),
            position: Set(chapter.order),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| insert_error(e, BackendError::CourseNotFound, "create chapter"))?;
        Ok(())
    }

    async fn update(&self, chapter: &Chapter) -> Result<(), BackendError> {
        let am = course_chapters::ActiveModel {
            id: Set(chapter.id),
            title: Set(chapter.title.clone()),
            content: Set(chapter.content.clone()),
            position: Set(chapter.order),
            ..Default::default()
        };
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(BackendError::ChapterNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update chapter").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = course_chapters::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete chapter")?;
        Ok(result.rows_affected > 0)
    }
}

fn chapter_from_model(model: course_chapters::Model) -> Chapter {
    Chapter {
        id: model.id,
        course_id: model.course_id,
        title: model.title,
        content: model.content,
        order: model.position,
    }
}

// ── Thumbnail repository ─────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbThumbnailRepository {
    pub db: DatabaseConnection,
}

impl ThumbnailRepository for DbThumbnailRepository {
    async fn create(&self, thumbnail: &Thumbnail) -> Result<(), BackendError> {
        thumbnails::Entity::insert(thumbnails::ActiveModel {
            id: Set(thumbnail.id),
            course_id: Set(thumbnail.course_id),
            url: Set(thumbnail.url.clone()),
            description: Set(thumbnail.description.clone()),
            uploaded_date: Set(thumbnail.uploaded_date),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| insert_error(e, BackendError::CourseNotFound, "create thumbnail"))?;
        Ok(())
    }

    async fn list_by_course(&self, course_id: Uuid) -> Result<Vec<Thumbnail>, BackendError> {
        let models = thumbnails::Entity::find()
            .filter(thumbnails::Column::CourseId.eq(course_id))
            .order_by_desc(thumbnails::Column::UploadedDate)
            .order_by_desc(thumbnails::Column::Id)
            .all(&self.db)
            .await
            .context("list thumbnails by course")?;
        Ok(models
            .into_iter()
            .map(|model| Thumbnail {
                id: model.id,
                course_id: model.course_id,
                url: model.url,
                description: model.description,
                uploaded_date: model.uploaded_date,
            })
            .collect())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = thumbnails::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete thumbnail")?;
        Ok(result.rows_affected > 0)
    }
}

// ── Resource type repository ─────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbResourceTypeRepository {
    pub db: DatabaseConnection,
}

impl ResourceTypeRepository for DbResourceTypeRepository {
    async fn find_by_id(&self, id: Uuid) -> Result<Option<ResourceType>, BackendError> {
        let model = resource_types::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .context("find resource type by id")?;
        Ok(model.map(resource_type_from_model))
    }

    async fn list(&self) -> Result<Vec<ResourceType>, BackendError> {
        let models = resource_types::Entity::find()
            .order_by_asc(resource_types::Column::TypeName)
            .order_by_asc(resource_types::Column::Id)
            .all(&self.db)
            .await
            .context("list resource types")?;
        Ok(models.into_iter().map(resource_type_from_model).collect())
    }

    async fn create(&self, resource_type: &ResourceType) -> Result<(), BackendError> {
        resource_types::ActiveModel {
            id: Set(resource_type.id),
            type_name: Set(resource_type.type_name.clone()),
            description: Set(resource_type.description.clone()),
        }
        .insert(&self.db)
        .await
        .context("create resource type")?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let references = course_resources::Entity::find()
            .filter(course_resources::Column::ResourceTypeId.eq(id))
            .count(&self.db)
            .await
            .context("count resources of type")?;
        if references > 0 {
            return Err(BackendError::ResourceTypeInUse);
        }
        // The restrict constraint still guards a resource inserted after the count.
        match resource_types::Entity::delete_by_id(id).exec(&self.db).await {
            Ok(result) => Ok(result.rows_affected > 0),
            Err(e) if e.is_foreign_key_violation() => Err(BackendError::ResourceTypeInUse),
            Err(e) => Err(anyhow::Error::new(e).context("delete resource type").into()),
        }
    }
}

fn resource_type_from_model(model: resource_types::Model) -> ResourceType {
    ResourceType {
        id: model.id,
        type_name: model.type_name,
        description: model.description,
    }
}

// ── Course resource repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbCourseResourceRepository {
    pub db: DatabaseConnection,
}

impl CourseResourceRepository for DbCourseResourceRepository {
    async fn list_by_chapter(
        &self,
        chapter_id: Uuid,
    ) -> Result<Vec<CourseResource>, BackendError> {
        let models = course_resources::Entity::find()
            .filter(course_resources::Column::ChapterId.eq(chapter_id))
            .order_by_asc(course_resources::Column::Title)
            .order_by_asc(course_resources::Column::Id)
            .all(&self.db)
            .await
            .context("list resources by chapter")?;
        Ok(models
            .into_iter()
            .map(|model| CourseResource {
                id: model.id,
                course_id: model.course_id,
                chapter_id: model.chapter_id,
                resource_type_id: model.resource_type_id,
                title: model.title,
                resource_url: model.resource_url,
            })
            .collect())
    }

    async fn create(&self, resource: &CourseResource) -> Result<(), BackendError> {
        course_resources::Entity::insert(course_resources::ActiveModel {
            id: Set(resource.id),
            course_id: Set(resource.course_id),
            chapter_id: Set(resource.chapter_id),
            resource_type_id: Set(resource.resource_type_id),
            title: Set(resource.title.clone()),
            resource_url: Set(resource.resource_url.clone()),
        })
        .exec_without_returning(&self.db)
        .await
        .map_err(|e| insert_error(e, BackendError::ChapterNotFound, "create resource"))?;
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let result = course_resources::Entity::delete_by_id(id)
            .exec(&self.db)
            .await
            .context("delete resource")?;
        Ok(result.rows_affected > 0)
    }
}
