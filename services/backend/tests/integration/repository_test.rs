use chrono::Utc;
use uuid::Uuid;

use coursehub_backend::domain::repository::{
    ContactMessageRepository, EnrollmentRepository, ProfileRepository,
};
use coursehub_backend::domain::types::{ContactMessage, Enrollment};
use coursehub_backend::error::BackendError;
use coursehub_backend::infra::db::{
    DbContactMessageRepository, DbEnrollmentRepository, DbProfileRepository,
};
use coursehub_domain::enrollment::EnrollmentStatus;

use crate::helpers::{test_db, test_profile};

#[tokio::test]
async fn should_report_missing_sender_when_message_outlives_profile() {
    let db = test_db().await;
    let repo = DbContactMessageRepository { db };

    let result = repo
        .create(&ContactMessage {
            id: Uuid::now_v7(),
            user_profile_id: Uuid::now_v7(),
            message: "hello".to_owned(),
            created_at: Utc::now(),
        })
        .await;

    assert!(matches!(result, Err(BackendError::ProfileNotFound)));
}

#[tokio::test]
async fn should_report_missing_course_when_enrolling_into_deleted_course() {
    let db = test_db().await;
    let profile = test_profile();
    DbProfileRepository { db: db.clone() }
        .create(&profile)
        .await
        .unwrap();
    let repo = DbEnrollmentRepository { db };

    let result = repo
        .create(&Enrollment {
            user_id: profile.id,
            course_id: Uuid::now_v7(),
            enrollment_date: Utc::now(),
            status: EnrollmentStatus::Active,
        })
        .await;

    assert!(matches!(result, Err(BackendError::CourseNotFound)));
    assert!(repo.list_by_user(profile.id).await.unwrap().is_empty());
}

#[tokio::test]
async fn should_report_missing_profile_when_enrolling_deleted_profile() {
    let db = test_db().await;
    let repo = DbEnrollmentRepository { db };

    let result = repo
        .create(&Enrollment {
            user_id: Uuid::now_v7(),
            course_id: Uuid::now_v7(),
            enrollment_date: Utc::now(),
            status: EnrollmentStatus::Active,
        })
        .await;

    assert!(matches!(result, Err(BackendError::ProfileNotFound)));
}
