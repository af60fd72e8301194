use std::collections::BTreeMap;

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coursehub_domain::pagination::PageRequest;

use crate::domain::types::{Course, CourseSortBy};
use crate::error::BackendError;
use crate::handlers::author::AuthorResponse;
use crate::state::AppState;
use crate::usecase::course::{
    CourseInput, CreateCourseUseCase, DeleteCourseUseCase, GetCourseUseCase,
    LinkAuthorUseCase, ListCourseAuthorsUseCase, ListCoursesUseCase, UnlinkAuthorUseCase,
    UpdateCourseUseCase,
};

// ── Request / response types ─────────────────────────────────────────────────

/// Body of `POST /courses` and `PUT /courses/{course_id}`.
#[derive(Deserialize)]
pub struct CourseRequest {
    pub course_name: Option<String>,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    #[serde(default)]
    pub categories: Vec<String>,
    #[serde(default)]
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

impl From<CourseRequest> for CourseInput {
    fn from(body: CourseRequest) -> Self {
        Self {
            course_name: body.course_name,
            description: body.description,
            thumbnail_url: body.thumbnail_url,
            rating: body.rating,
            categories: body.categories,
            content: body.content,
            duration: body.duration,
            level: body.level,
            released_date: body.released_date,
            certification: body.certification,
            discount_offers: body.discount_offers,
            syllabus: body.syllabus,
            progress_tracking: body.progress_tracking,
            course_resource: body.course_resource,
            faqs: body.faqs,
            accessibility_features: body.accessibility_features,
            course_preview: body.course_preview,
            interactive_features: body.interactive_features,
            video_quality_option: body.video_quality_option,
        }
    }
}

#[derive(Serialize)]
pub struct CourseResponse {
    pub id: String,
    pub course_name: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    pub categories: Vec<String>,
    pub content: Vec<BTreeMap<String, String>>,
    pub duration: Option<i32>,
    pub level: Option<String>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms_opt")]
    pub released_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub last_update: DateTime<Utc>,
    pub enrollment_count: i32,
    pub certification: bool,
    pub discount_offers: Option<String>,
    pub syllabus: Option<String>,
    pub progress_tracking: bool,
    pub course_resource: Option<String>,
    pub faqs: Option<String>,
    pub accessibility_features: Option<String>,
    pub course_preview: Option<String>,
    pub interactive_features: Option<String>,
    pub video_quality_option: Option<String>,
}

impl From<Course> for CourseResponse {
    fn from(course: Course) -> Self {
        let d = course.details;
        Self {
            id: course.id.to_string(),
            course_name: d.course_name,
            description: d.description,
            thumbnail_url: d.thumbnail_url,
            rating: d.rating,
            categories: d.categories,
            content: d.content,
            duration: d.duration,
            level: d.level,
            released_date: d.released_date,
            last_update: course.last_update,
            enrollment_count: course.enrollment_count,
            certification: d.certification,
            discount_offers: d.discount_offers,
            syllabus: d.syllabus,
            progress_tracking: d.progress_tracking,
            course_resource: d.course_resource,
            faqs: d.faqs,
            accessibility_features: d.accessibility_features,
            course_preview: d.course_preview,
            interactive_features: d.interactive_features,
            video_quality_option: d.video_quality_option,
        }
    }
}

// ── Query params ─────────────────────────────────────────────────────────────

#[derive(Deserialize, Default)]
#[serde(rename_all = "kebab-case")]
pub struct CourseListQuery {
    pub per_page: Option<u32>,
    pub page: Option<u32>,
    pub sort_by: Option<String>,
}

// ── POST /courses ────────────────────────────────────────────────────────────

pub async fn create_course(
    State(state): State<AppState>,
    Json(body): Json<CourseRequest>,
) -> Result<(StatusCode, Json<CourseResponse>), BackendError> {
    let usecase = CreateCourseUseCase {
        repo: state.course_repo(),
    };
    let course = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(course.into())))
}

// ── GET /courses ─────────────────────────────────────────────────────────────

pub async fn list_courses(
    State(state): State<AppState>,
    Query(query): Query<CourseListQuery>,
) -> Result<Json<Vec<CourseResponse>>, BackendError> {
    let sort_by = query
        .sort_by
        .as_deref()
        .map(CourseSortBy::from_kebab_case)
        .unwrap_or(Some(CourseSortBy::default()))
        .unwrap_or_default();

    let defaults = PageRequest::default();
    let page = PageRequest {
        per_page: query.per_page.unwrap_or(defaults.per_page),
        page: query.page.unwrap_or(defaults.page),
    };

    let usecase = ListCoursesUseCase {
        repo: state.course_repo(),
    };
    let courses = usecase.execute(sort_by, page).await?;
    Ok(Json(courses.into_iter().map(Into::into).collect()))
}

// ── GET /courses/{course_id} ─────────────────────────────────────────────────

pub async fn get_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<CourseResponse>, BackendError> {
    let usecase = GetCourseUseCase {
        repo: state.course_repo(),
    };
    let course = usecase.execute(course_id).await?;
    Ok(Json(course.into()))
}

// ── PUT /courses/{course_id} ─────────────────────────────────────────────────

pub async fn update_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<CourseRequest>,
) -> Result<Json<CourseResponse>, BackendError> {
    let usecase = UpdateCourseUseCase {
        repo: state.course_repo(),
    };
    let course = usecase.execute(course_id, body.into()).await?;
    Ok(Json(course.into()))
}

// ── DELETE /courses/{course_id} ──────────────────────────────────────────────

pub async fn delete_course(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteCourseUseCase {
        repo: state.course_repo(),
    };
    usecase.execute(course_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── GET /courses/{course_id}/authors ─────────────────────────────────────────

pub async fn list_course_authors(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<AuthorResponse>>, BackendError> {
    let usecase = ListCourseAuthorsUseCase {
        courses: state.course_repo(),
        repo: state.course_author_repo(),
    };
    let authors = usecase.execute(course_id).await?;
    Ok(Json(authors.into_iter().map(Into::into).collect()))
}

// ── PUT /courses/{course_id}/authors/{author_id} ─────────────────────────────

pub async fn link_author(
    State(state): State<AppState>,
    Path((course_id, author_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, BackendError> {
    let usecase = LinkAuthorUseCase {
        courses: state.course_repo(),
        authors: state.author_repo(),
        repo: state.course_author_repo(),
    };
    usecase.execute(course_id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── DELETE /courses/{course_id}/authors/{author_id} ──────────────────────────

pub async fn unlink_author(
    State(state): State<AppState>,
    Path((course_id, author_id)): Path<(Uuid, Uuid)>,
) -> Result<StatusCode, BackendError> {
    let usecase = UnlinkAuthorUseCase {
        repo: state.course_author_repo(),
    };
    usecase.execute(course_id, author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
