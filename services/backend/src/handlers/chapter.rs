use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Chapter;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::chapter::{
    ChapterInput, CreateChapterUseCase, DeleteChapterUseCase, ListChaptersUseCase,
    UpdateChapterUseCase,
};

#[derive(Deserialize)]
pub struct ChapterRequest {
    pub title: Option<String>,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl From<ChapterRequest> for ChapterInput {
    fn from(body: ChapterRequest) -> Self {
        Self {
            title: body.title,
            content: body.content,
            order: body.order,
        }
    }
}

#[derive(Serialize)]
pub struct ChapterResponse {
    pub id: String,
    pub course_id: String,
    pub title: String,
    pub content: Option<String>,
    pub order: Option<i32>,
}

impl From<Chapter> for ChapterResponse {
    fn from(chapter: Chapter) -> Self {
        Self {
            id: chapter.id.to_string(),
            course_id: chapter.course_id.to_string(),
            title: chapter.title,
            content: chapter.content,
            order: chapter.order,
        }
    }
}

// ── POST /courses/{course_id}/chapters ───────────────────────────────────────

pub async fn create_chapter(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<ChapterRequest>,
) -> Result<(StatusCode, Json<ChapterResponse>), BackendError> {
    let usecase = CreateChapterUseCase {
        courses: state.course_repo(),
        repo: state.chapter_repo(),
    };
    let chapter = usecase.execute(course_id, body.into()).await?;
    Ok((StatusCode::CREATED, Json(chapter.into())))
}

// ── GET /courses/{course_id}/chapters ────────────────────────────────────────

pub async fn list_chapters(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<ChapterResponse>>, BackendError> {
    let usecase = ListChaptersUseCase {
        courses: state.course_repo(),
        repo: state.chapter_repo(),
    };
    let chapters = usecase.execute(course_id).await?;
    Ok(Json(chapters.into_iter().map(Into::into).collect()))
}

// ── PUT /chapters/{chapter_id} ───────────────────────────────────────────────

pub async fn update_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<Uuid>,
    Json(body): Json<ChapterRequest>,
) -> Result<Json<ChapterResponse>, BackendError> {
    let usecase = UpdateChapterUseCase {
        repo: state.chapter_repo(),
    };
    let chapter = usecase.execute(chapter_id, body.into()).await?;
    Ok(Json(chapter.into()))
}

// ── DELETE /chapters/{chapter_id} ────────────────────────────────────────────

pub async fn delete_chapter(
    State(state): State<AppState>,
    Path(chapter_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteChapterUseCase {
        repo: state.chapter_repo(),
    };
    usecase.execute(chapter_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
