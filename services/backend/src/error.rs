use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};

use coursehub_domain::validation::Violation;

/// Backend service domain error variants.
#[derive(Debug, thiserror::Error)]
pub enum BackendError {
    #[error("{0}")]
    InvalidInput(#[from] Violation),
    #[error("invalid email or password")]
    InvalidCredentials,
    #[error("profile not found")]
    ProfileNotFound,
    #[error("course not found")]
    CourseNotFound,
    #[error("author not found")]
    AuthorNotFound,
    #[error("author is not linked to course")]
    AuthorLinkNotFound,
    #[error("price not found")]
    PriceNotFound,
    #[error("chapter not found")]
    ChapterNotFound,
    #[error("thumbnail not found")]
    ThumbnailNotFound,
    #[error("enrollment not found")]
    EnrollmentNotFound,
    #[error("resource type not found")]
    ResourceTypeNotFound,
    #[error("resource not found")]
    ResourceNotFound,
    #[error("profile already exists")]
    ProfileAlreadyExists,
    #[error("enrollment already exists")]
    EnrollmentAlreadyExists,
    #[error("author already linked to course")]
    AuthorAlreadyLinked,
    #[error("resource type is still referenced by resources")]
    ResourceTypeInUse,
    #[error("internal error")]
    Internal(#[from] anyhow::Error),
}

impl BackendError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::InvalidInput(Violation::NoneOf { .. }) => "MISSING_DATA",
            Self::InvalidInput(_) => "INVALID_INPUT",
            Self::InvalidCredentials => "INVALID_CREDENTIALS",
            Self::ProfileNotFound => "PROFILE_NOT_FOUND",
            Self::CourseNotFound => "COURSE_NOT_FOUND",
            Self::AuthorNotFound => "AUTHOR_NOT_FOUND",
            Self::AuthorLinkNotFound => "AUTHOR_LINK_NOT_FOUND",
            Self::PriceNotFound => "PRICE_NOT_FOUND",
            Self::ChapterNotFound => "CHAPTER_NOT_FOUND",
            Self::ThumbnailNotFound => "THUMBNAIL_NOT_FOUND",
            Self::EnrollmentNotFound => "ENROLLMENT_NOT_FOUND",
            Self::ResourceTypeNotFound => "RESOURCE_TYPE_NOT_FOUND",
            Self::ResourceNotFound => "RESOURCE_NOT_FOUND",
            Self::ProfileAlreadyExists => "PROFILE_ALREADY_EXISTS",
            Self::EnrollmentAlreadyExists => "ENROLLMENT_ALREADY_EXISTS",
            Self::AuthorAlreadyLinked => "AUTHOR_ALREADY_LINKED",
            Self::ResourceTypeInUse => "RESOURCE_TYPE_IN_USE",
            Self::Internal(_) => "INTERNAL",
        }
    }
}

impl IntoResponse for BackendError {
    fn into_response(self) -> Response {
        let status = match &self {
            Self::InvalidInput(_) => StatusCode::BAD_REQUEST,
            Self::InvalidCredentials => StatusCode::UNAUTHORIZED,
            Self::ProfileNotFound
            | Self::CourseNotFound
            | Self::AuthorNotFound
            | Self::AuthorLinkNotFound
            | Self::PriceNotFound
            | Self::ChapterNotFound
            | Self::ThumbnailNotFound
            | Self::EnrollmentNotFound
            | Self::ResourceTypeNotFound
            | Self::ResourceNotFound => StatusCode::NOT_FOUND,
            Self::ProfileAlreadyExists
            | Self::EnrollmentAlreadyExists
            | Self::AuthorAlreadyLinked
            | Self::ResourceTypeInUse => StatusCode::CONFLICT,
            Self::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };
        if let Self::Internal(ref e) = self {
            tracing::error!(error = ?e, kind = "INTERNAL", "internal error");
        }
        let body = serde_json::json!({
            "kind": self.kind(),
            "message": self.to_string(),
        });
        (status, axum::Json(body)).into_response()
    }
}
