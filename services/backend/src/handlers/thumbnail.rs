use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Thumbnail;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::thumbnail::{
    CreateThumbnailUseCase, DeleteThumbnailUseCase, ListThumbnailsUseCase, ThumbnailInput,
};

#[derive(Deserialize)]
pub struct ThumbnailRequest {
    pub url: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct ThumbnailResponse {
    pub id: String,
    pub course_id: String,
    pub url: String,
    pub description: Option<String>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub uploaded_date: chrono::DateTime<chrono::Utc>,
}

impl From<Thumbnail> for ThumbnailResponse {
    fn from(thumbnail: Thumbnail) -> Self {
        Self {
            id: thumbnail.id.to_string(),
            course_id: thumbnail.course_id.to_string(),
            url: thumbnail.url,
            description: thumbnail.description,
            uploaded_date: thumbnail.uploaded_date,
        }
    }
}

// ── POST /courses/{course_id}/thumbnails ─────────────────────────────────────

pub async fn create_thumbnail(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<ThumbnailRequest>,
) -> Result<(StatusCode, Json<ThumbnailResponse>), BackendError> {
    let usecase = CreateThumbnailUseCase {
        courses: state.course_repo(),
        repo: state.thumbnail_repo(),
    };
    let thumbnail = usecase
        .execute(
            course_id,
            ThumbnailInput {
                url: body.url,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(thumbnail.into())))
}

// ── GET /courses/{course_id}/thumbnails ──────────────────────────────────────

pub async fn list_thumbnails(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<ThumbnailResponse>>, BackendError> {
    let usecase = ListThumbnailsUseCase {
        courses: state.course_repo(),
        repo: state.thumbnail_repo(),
    };
    let thumbnails = usecase.execute(course_id).await?;
    Ok(Json(thumbnails.into_iter().map(Into::into).collect()))
}

// ── DELETE /thumbnails/{thumbnail_id} ────────────────────────────────────────

pub async fn delete_thumbnail(
    State(state): State<AppState>,
    Path(thumbnail_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteThumbnailUseCase {
        repo: state.thumbnail_repo(),
    };
    usecase.execute(thumbnail_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
