use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use coursehub_domain::pagination::PageRequest;

use crate::domain::types::Author;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::author::{
    AuthorInput, CreateAuthorUseCase, DeleteAuthorUseCase, GetAuthorUseCase, ListAuthorsUseCase,
    UpdateAuthorUseCase,
};

#[derive(Deserialize)]
pub struct AuthorRequest {
    pub name: Option<String>,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    #[serde(default)]
    pub expertise: Vec<String>,
    pub qualification: Option<String>,
    pub experience_years: Option<i32>,
    #[serde(default)]
    pub certifications: Vec<String>,
    pub location: Option<String>,
    #[serde(default)]
    pub languages: Vec<String>,
    pub contact_number: Option<String>,
    pub last_active: Option<DateTime<Utc>>,
}

impl From<AuthorRequest> for AuthorInput {
    fn from(body: AuthorRequest) -> Self {
        Self {
            name: body.name,
            bio: body.bio,
            email: body.email,
            website: body.website,
            expertise: body.expertise,
            qualification: body.qualification,
            experience_years: body.experience_years,
            certifications: body.certifications,
            location: body.location,
            languages: body.languages,
            contact_number: body.contact_number,
            last_active: body.last_active,
        }
    }
}

#[derive(Serialize)]
pub struct AuthorResponse {
    pub id: String,
    pub name: String,
    pub bio: Option<String>,
    pub email: Option<String>,
    pub website: Option<String>,
    pub expertise: Vec<String>,
    pub qualification: Option<String>,
    pub experience_years: Option<i32>,
    pub certifications: Vec<String>,
    pub location: Option<String>,
    pub languages: Vec<String>,
    pub contact_number: Option<String>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub join_date: DateTime<Utc>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms_opt")]
    pub last_active: Option<DateTime<Utc>>,
}

impl From<Author> for AuthorResponse {
    fn from(author: Author) -> Self {
        let d = author.details;
        Self {
            id: author.id.to_string(),
            name: d.name,
            bio: d.bio,
            email: d.email,
            website: d.website,
            expertise: d.expertise,
            qualification: d.qualification,
            experience_years: d.experience_years,
            certifications: d.certifications,
            location: d.location,
            languages: d.languages,
            contact_number: d.contact_number,
            join_date: author.join_date,
            last_active: d.last_active,
        }
    }
}

// ── POST /authors ────────────────────────────────────────────────────────────

pub async fn create_author(
    State(state): State<AppState>,
    Json(body): Json<AuthorRequest>,
) -> Result<(StatusCode, Json<AuthorResponse>), BackendError> {
    let usecase = CreateAuthorUseCase {
        repo: state.author_repo(),
    };
    let author = usecase.execute(body.into()).await?;
    Ok((StatusCode::CREATED, Json(author.into())))
}

// ── GET /authors ─────────────────────────────────────────────────────────────

pub async fn list_authors(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<AuthorResponse>>, BackendError> {
    let usecase = ListAuthorsUseCase {
        repo: state.author_repo(),
    };
    let authors = usecase.execute(page).await?;
    Ok(Json(authors.into_iter().map(Into::into).collect()))
}

// ── GET /authors/{author_id} ─────────────────────────────────────────────────

pub async fn get_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<Json<AuthorResponse>, BackendError> {
    let usecase = GetAuthorUseCase {
        repo: state.author_repo(),
    };
    let author = usecase.execute(author_id).await?;
    Ok(Json(author.into()))
}

// ── PUT /authors/{author_id} ─────────────────────────────────────────────────

pub async fn update_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
    Json(body): Json<AuthorRequest>,
) -> Result<Json<AuthorResponse>, BackendError> {
    let usecase = UpdateAuthorUseCase {
        repo: state.author_repo(),
    };
    let author = usecase.execute(author_id, body.into()).await?;
    Ok(Json(author.into()))
}

// ── DELETE /authors/{author_id} ──────────────────────────────────────────────

pub async fn delete_author(
    State(state): State<AppState>,
    Path(author_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteAuthorUseCase {
        repo: state.author_repo(),
    };
    usecase.execute(author_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
