use chrono::Utc;
use uuid::Uuid;

use coursehub_domain::email::normalize as normalize_email;
use coursehub_domain::enrollment::EnrollmentStatus;
use coursehub_domain::validation::Violation;

use crate::domain::repository::{CourseRepository, EnrollmentRepository, ProfileRepository};
use crate::domain::types::{Enrollment, Profile};
use crate::error::BackendError;

async fn profile_by_email<P: ProfileRepository>(
    profiles: &P,
    email: &str,
) -> Result<Profile, BackendError> {
    profiles
        .find_by_email(&normalize_email(email))
        .await?
        .ok_or(BackendError::ProfileNotFound)
}

// ── Enroll ───────────────────────────────────────────────────────────────────

pub struct EnrollInput {
    pub course_id: Uuid,
    pub status: Option<String>,
}

pub struct EnrollUseCase<P, C, E>
where
    P: ProfileRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub profiles: P,
    pub courses: C,
    pub repo: E,
}

impl<P, C, E> EnrollUseCase<P, C, E>
where
    P: ProfileRepository,
    C: CourseRepository,
    E: EnrollmentRepository,
{
    pub async fn execute(
        &self,
        email: &str,
        input: EnrollInput,
    ) -> Result<Enrollment, BackendError> {
        let status = EnrollmentStatus::from_input(input.status.as_deref())?;
        let profile = profile_by_email(&self.profiles, email).await?;
        if self.courses.find_by_id(input.course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        if self.repo.get(profile.id, input.course_id).await?.is_some() {
            return Err(BackendError::EnrollmentAlreadyExists);
        }

        let enrollment = Enrollment {
            user_id: profile.id,
            course_id: input.course_id,
            enrollment_date: Utc::now(),
            status,
        };
        self.repo.create(&enrollment).await?;
        tracing::info!(
            profile_id = %profile.id,
            course_id = %input.course_id,
            "profile enrolled"
        );
        Ok(enrollment)
    }
}

// ── ListEnrollments ──────────────────────────────────────────────────────────

pub struct ListEnrollmentsUseCase<P: ProfileRepository, E: EnrollmentRepository> {
    pub profiles: P,
    pub repo: E,
}

impl<P: ProfileRepository, E: EnrollmentRepository> ListEnrollmentsUseCase<P, E> {
    pub async fn execute(&self, email: &str) -> Result<Vec<Enrollment>, BackendError> {
        let profile = profile_by_email(&self.profiles, email).await?;
        self.repo.list_by_user(profile.id).await
    }
}

// ── UpdateEnrollment ─────────────────────────────────────────────────────────

pub struct UpdateEnrollmentUseCase<P: ProfileRepository, E: EnrollmentRepository> {
    pub profiles: P,
    pub repo: E,
}

impl<P: ProfileRepository, E: EnrollmentRepository> UpdateEnrollmentUseCase<P, E> {
    pub async fn execute(
        &self,
        email: &str,
        course_id: Uuid,
        status: Option<String>,
    ) -> Result<Enrollment, BackendError> {
        let status = match status.as_deref().map(str::trim) {
            None | Some("") => return Err(Violation::Required { field: "status" }.into()),
            Some(raw) => EnrollmentStatus::from_input(Some(raw))?,
        };
        let profile = profile_by_email(&self.profiles, email).await?;
        if !self.repo.update_status(profile.id, course_id, status).await? {
            return Err(BackendError::EnrollmentNotFound);
        }
        self.repo
            .get(profile.id, course_id)
            .await?
            .ok_or(BackendError::EnrollmentNotFound)
    }
}

// ── Unenroll ─────────────────────────────────────────────────────────────────

pub struct UnenrollUseCase<P: ProfileRepository, E: EnrollmentRepository> {
    pub profiles: P,
    pub repo: E,
}

impl<P: ProfileRepository, E: EnrollmentRepository> UnenrollUseCase<P, E> {
    pub async fn execute(&self, email: &str, course_id: Uuid) -> Result<(), BackendError> {
        let profile = profile_by_email(&self.profiles, email).await?;
        if !self.repo.delete(profile.id, course_id).await? {
            return Err(BackendError::EnrollmentNotFound);
        }
        Ok(())
    }
}
