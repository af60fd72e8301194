use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coursehub_domain::validation::Violation;

use crate::domain::types::Enrollment;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::enrollment::{
    EnrollInput, EnrollUseCase, ListEnrollmentsUseCase, UnenrollUseCase, UpdateEnrollmentUseCase,
};

#[derive(Serialize)]
pub struct EnrollmentResponse {
    pub user_id: String,
    pub course_id: String,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub enrollment_date: chrono::DateTime<chrono::Utc>,
    pub status: &'static str,
}

impl From<Enrollment> for EnrollmentResponse {
    fn from(enrollment: Enrollment) -> Self {
        Self {
            user_id: enrollment.user_id.to_string(),
            course_id: enrollment.course_id.to_string(),
            enrollment_date: enrollment.enrollment_date,
            status: enrollment.status.as_str(),
        }
    }
}

// ── POST /{email}/enrollments ────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct EnrollRequest {
    pub course_id: Option<Uuid>,
    pub status: Option<String>,
}

pub async fn enroll(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<EnrollRequest>,
) -> Result<(StatusCode, Json<EnrollmentResponse>), BackendError> {
    let course_id = body.course_id.ok_or(Violation::Required { field: "course_id" })?;
    let usecase = EnrollUseCase {
        profiles: state.profile_repo(),
        courses: state.course_repo(),
        repo: state.enrollment_repo(),
    };
    let enrollment = usecase
        .execute(
            &email,
            EnrollInput {
                course_id,
                status: body.status,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(enrollment.into())))
}

// ── GET /{email}/enrollments ─────────────────────────────────────────────────

pub async fn list_enrollments(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<Vec<EnrollmentResponse>>, BackendError> {
    let usecase = ListEnrollmentsUseCase {
        profiles: state.profile_repo(),
        repo: state.enrollment_repo(),
    };
    let enrollments = usecase.execute(&email).await?;
    Ok(Json(enrollments.into_iter().map(Into::into).collect()))
}

// ── PUT /{email}/enrollments/{course_id} ─────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateEnrollmentRequest {
    pub status: Option<String>,
}

pub async fn update_enrollment(
    State(state): State<AppState>,
    Path((email, course_id)): Path<(String, Uuid)>,
    Json(body): Json<UpdateEnrollmentRequest>,
) -> Result<Json<EnrollmentResponse>, BackendError> {
    let usecase = UpdateEnrollmentUseCase {
        profiles: state.profile_repo(),
        repo: state.enrollment_repo(),
    };
    let enrollment = usecase.execute(&email, course_id, body.status).await?;
    Ok(Json(enrollment.into()))
}

// ── DELETE /{email}/enrollments/{course_id} ──────────────────────────────────

pub async fn unenroll(
    State(state): State<AppState>,
    Path((email, course_id)): Path<(String, Uuid)>,
) -> Result<StatusCode, BackendError> {
    let usecase = UnenrollUseCase {
        profiles: state.profile_repo(),
        repo: state.enrollment_repo(),
    };
    usecase.execute(&email, course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
