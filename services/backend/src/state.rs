use sea_orm::DatabaseConnection;

use coursehub_domain::email::EmailPolicy;

use crate::infra::catalog::{
    DbAuthorRepository, DbChapterRepository, DbCourseAuthorRepository, DbCourseRepository,
    DbCourseResourceRepository, DbPriceRepository, DbResourceTypeRepository,
    DbThumbnailRepository,
};
use crate::infra::db::{DbContactMessageRepository, DbEnrollmentRepository, DbProfileRepository};
use crate::infra::password::BcryptHasher;

/// Shared application state passed to every handler via axum `State`.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub email_policy: EmailPolicy,
    pub hasher: BcryptHasher,
}

impl AppState {
    pub fn profile_repo(&self) -> DbProfileRepository {
        DbProfileRepository {
            db: self.db.clone(),
        }
    }

    pub fn contact_repo(&self) -> DbContactMessageRepository {
        DbContactMessageRepository {
            db: self.db.clone(),
        }
    }

    pub fn enrollment_repo(&self) -> DbEnrollmentRepository {
        DbEnrollmentRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_repo(&self) -> DbCourseRepository {
        DbCourseRepository {
            db: self.db.clone(),
        }
    }

    pub fn author_repo(&self) -> DbAuthorRepository {
        DbAuthorRepository {
            db: self.db.clone(),
        }
    }

    pub fn course_author_repo(&self) -> DbCourseAuthorRepository {
        DbCourseAuthorRepository {
            db: self.db.clone(),
        }
    }

    pub fn price_repo(&self) -> DbPriceRepository {
        DbPriceRepository {
            db: self.db.clone(),
        }
    }

    pub fn chapter_repo(&self) -> DbChapterRepository {
        DbChapterRepository {
            db: self.db.clone(),
        }
    }

    pub fn thumbnail_repo(&self) -> DbThumbnailRepository {
        DbThumbnailRepository {
            db: self.db.clone(),
        }
    }

    pub fn resource_type_repo(&self) -> DbResourceTypeRepository {
        DbResourceTypeRepository {
            db: self.db.clone(),
        }
    }

    pub fn resource_repo(&self) -> DbCourseResourceRepository {
        DbCourseResourceRepository {
            db: self.db.clone(),
        }
    }
}
