use anyhow::Context as _;
use sea_orm::{
    ActiveModelTrait, ActiveValue::Set, ColumnTrait, DatabaseConnection, DbErr, EntityTrait,
    QueryFilter, QueryOrder, QuerySelect, TransactionError, TransactionTrait, sea_query::Expr,
};
use uuid::Uuid;

use coursehub_backend_schema::{contact_messages, courses, user_enrollments, user_profiles};
use coursehub_core::sea_ext::DbErrExt as _;
use coursehub_domain::enrollment::EnrollmentStatus;
use coursehub_domain::pagination::PageRequest;

use crate::domain::repository::{
    ContactMessageRepository, EnrollmentRepository, ProfileRepository,
};
use crate::domain::types::{ContactMessage, ContactMessageView, Enrollment, Profile};
use crate::error::BackendError;
use crate::infra::insert_error;

// ── Profile repository ───────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbProfileRepository {
    pub db: DatabaseConnection,
}

impl ProfileRepository for DbProfileRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, BackendError> {
        let model = user_profiles::Entity::find()
            .filter(user_profiles::Column::Email.eq(email))
            .one(&self.db)
            .await
            .context("find profile by email")?;
        Ok(model.map(profile_from_model))
    }

    async fn create(&self, profile: &Profile) -> Result<(), BackendError> {
        let result = user_profiles::ActiveModel {
            id: Set(profile.id),
            full_name: Set(profile.full_name.clone()),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            email: Set(profile.email.clone()),
            phone_number: Set(profile.phone_number.clone()),
            password_hash: Set(profile.password_hash.clone()),
            created_at: Set(profile.created_at),
            updated_at: Set(profile.updated_at),
        }
        .insert(&self.db)
        .await;
        match result {
            Ok(_) => Ok(()),
            Err(e) if e.is_unique_violation() => Err(BackendError::ProfileAlreadyExists),
            Err(e) => Err(anyhow::Error::new(e).context("create profile").into()),
        }
    }

    async fn update(&self, profile: &Profile) -> Result<(), BackendError> {
        let am = user_profiles::ActiveModel {
            id: Set(profile.id),
            full_name: Set(profile.full_name.clone()),
            first_name: Set(profile.first_name.clone()),
            last_name: Set(profile.last_name.clone()),
            phone_number: Set(profile.phone_number.clone()),
            password_hash: Set(profile.password_hash.clone()),
            updated_at: Set(profile.updated_at),
            ..Default::default()
        };
        match am.update(&self.db).await {
            Ok(_) => Ok(()),
            Err(DbErr::RecordNotUpdated) => Err(BackendError::ProfileNotFound),
            Err(e) => Err(anyhow::Error::new(e).context("update profile").into()),
        }
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let course_ids: Vec<Uuid> = user_enrollments::Entity::find()
                        .select_only()
                        .column(user_enrollments::Column::CourseId)
                        .filter(user_enrollments::Column::UserId.eq(id))
                        .into_tuple()
                        .all(txn)
                        .await?;

                    if !course_ids.is_empty() {
                        courses::Entity::update_many()
                            .col_expr(
                                courses::Column::EnrollmentCount,
                                Expr::col(courses::Column::EnrollmentCount).sub(1),
                            )
                            .filter(courses::Column::Id.is_in(course_ids))
                            .filter(courses::Column::EnrollmentCount.gt(0))
                            .exec(txn)
                            .await?;
                    }

                    user_enrollments::Entity::delete_many()
                        .filter(user_enrollments::Column::UserId.eq(id))
                        .exec(txn)
                        .await?;
                    contact_messages::Entity::delete_many()
                        .filter(contact_messages::Column::UserProfileId.eq(id))
                        .exec(txn)
                        .await?;
                    let result = user_profiles::Entity::delete_by_id(id).exec(txn).await?;
                    Ok(result.rows_affected > 0)
                })
            })
            .await
            .context("delete profile")?;
        Ok(deleted)
    }
}

fn profile_from_model(model: user_profiles::Model) -> Profile {
    Profile {
        id: model.id,
        full_name: model.full_name,
        first_name: model.first_name,
        last_name: model.last_name,
        email: model.email,
        phone_number: model.phone_number,
        password_hash: model.password_hash,
        created_at: model.created_at,
        updated_at: model.updated_at,
    }
}

// ── Contact message repository ───────────────────────────────────────────────

#[derive(Clone)]
pub struct DbContactMessageRepository {
    pub db: DatabaseConnection,
}

impl ContactMessageRepository for DbContactMessageRepository {
    async fn create(&self, message: &ContactMessage) -> Result<(), BackendError> {
        contact_messages::ActiveModel {
            id: Set(message.id),
            user_profile_id: Set(message.user_profile_id),
            message: Set(message.message.clone()),
            created_at: Set(message.created_at),
        }
        .insert(&self.db)
        .await
        .map_err(|e| {
            insert_error(e, BackendError::ProfileNotFound, "create contact message")
        })?;
        Ok(())
    }

    async fn list(&self, page: PageRequest) -> Result<Vec<ContactMessageView>, BackendError> {
        let page = page.clamped();
        let rows = contact_messages::Entity::find()
            .find_also_related(user_profiles::Entity)
            .order_by_desc(contact_messages::Column::CreatedAt)
            .order_by_desc(contact_messages::Column::Id)
            .offset(page.offset())
            .limit(page.limit())
            .all(&self.db)
            .await
            .context("list contact messages")?;

        // The foreign key guarantees a sender; a missing one means the row raced a delete.
        let views = rows
            .into_iter()
            .filter_map(|(message, sender)| {
                let sender = sender?;
                Some(ContactMessageView {
                    id: message.id,
                    message: message.message,
                    created_at: message.created_at,
                    full_name: sender.full_name,
                    first_name: sender.first_name,
                    last_name: sender.last_name,
                    email: sender.email,
                    phone_number: sender.phone_number,
                })
            })
            .collect();
        Ok(views)
    }
}

// ── Enrollment repository ────────────────────────────────────────────────────

#[derive(Clone)]
pub struct DbEnrollmentRepository {
    pub db: DatabaseConnection,
}

impl EnrollmentRepository for DbEnrollmentRepository {
    async fn get(
        &self,
        user_id: Uuid,
        course_id: Uuid,
    ) -> Result<Option<Enrollment>, BackendError> {
        let model = user_enrollments::Entity::find_by_id((user_id, course_id))
            .one(&self.db)
            .await
            .context("find enrollment")?;
        Ok(model.map(enrollment_from_model))
    }

    async fn list_by_user(&self, user_id: Uuid) -> Result<Vec<Enrollment>, BackendError> {
        let models = user_enrollments::Entity::find()
            .filter(user_enrollments::Column::UserId.eq(user_id))
            .order_by_desc(user_enrollments::Column::EnrollmentDate)
            .all(&self.db)
            .await
            .context("list enrollments by user")?;
        Ok(models.into_iter().map(enrollment_from_model).collect())
    }

    async fn create(&self, enrollment: &Enrollment) -> Result<(), BackendError> {
        let user_id = enrollment.user_id;
        let enrollment = enrollment.clone();
        let result = self
            .db
            .transaction::<_, (), DbErr>(|txn| {
                Box::pin(async move {
                    user_enrollments::Entity::insert(user_enrollments::ActiveModel {
                        user_id: Set(enrollment.user_id),
                        course_id: Set(enrollment.course_id),
                        enrollment_date: Set(enrollment.enrollment_date),
                        status: Set(enrollment.status.as_str().to_owned()),
                    })
                    .exec_without_returning(txn)
                    .await?;

                    courses::Entity::update_many()
                        .col_expr(
                            courses::Column::EnrollmentCount,
                            Expr::col(courses::Column::EnrollmentCount).add(1),
                        )
                        .filter(courses::Column::Id.eq(enrollment.course_id))
                        .exec(txn)
                        .await?;
                    Ok(())
                })
            })
            .await;
        match result {
            Ok(()) => Ok(()),
            Err(TransactionError::Transaction(e)) if e.is_unique_violation() => {
                Err(BackendError::EnrollmentAlreadyExists)
            }
            Err(TransactionError::Transaction(e)) if e.is_foreign_key_violation() => {
                let profile = user_profiles::Entity::find_by_id(user_id)
                    .one(&self.db)
                    .await
                    .context("find enrolling profile")?;
                Err(match profile {
                    Some(_) => BackendError::CourseNotFound,
                    None => BackendError::ProfileNotFound,
                })
            }
            Err(e) => Err(anyhow::Error::new(e).context("create enrollment").into()),
        }
    }

    async fn update_status(
        &self,
        user_id: Uuid,
        course_id: Uuid,
        status: EnrollmentStatus,
    ) -> Result<bool, BackendError> {
        let result = user_enrollments::Entity::update_many()
            .col_expr(
                user_enrollments::Column::Status,
                Expr::value(status.as_str()),
            )
            .filter(user_enrollments::Column::UserId.eq(user_id))
            .filter(user_enrollments::Column::CourseId.eq(course_id))
            .exec(&self.db)
            .await
            .context("update enrollment status")?;
        Ok(result.rows_affected > 0)
    }

    async fn delete(&self, user_id: Uuid, course_id: Uuid) -> Result<bool, BackendError> {
        let deleted = self
            .db
            .transaction::<_, bool, DbErr>(|txn| {
                Box::pin(async move {
                    let result = user_enrollments::Entity::delete_by_id((user_id, course_id))
                        .exec(txn)
                        .await?;
                    if result.rows_affected == 0 {
                        return Ok(false);
                    }
                    courses::Entity::update_many()
                        .col_expr(
                            courses::Column::EnrollmentCount,
                            Expr::col(courses::Column::EnrollmentCount).sub(1),
                        )
                        .filter(courses::Column::Id.eq(course_id))
                        .filter(courses::Column::EnrollmentCount.gt(0))
                        .exec(txn)
                        .await?;
                    Ok(true)
                })
            })
            .await
            .context("delete enrollment")?;
        Ok(deleted)
    }
}

fn enrollment_from_model(model: user_enrollments::Model) -> Enrollment {
    Enrollment {
        user_id: model.user_id,
        course_id: model.course_id,
        enrollment_date: model.enrollment_date,
        // Rows written outside the service may carry legacy values.
        status: EnrollmentStatus::parse(&model.status).unwrap_or_default(),
    }
}
