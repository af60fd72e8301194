use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::{CourseResource, ResourceType};
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::resource::{
    CreateResourceTypeUseCase, CreateResourceUseCase, DeleteResourceTypeUseCase,
    DeleteResourceUseCase, ListResourceTypesUseCase, ListResourcesUseCase, ResourceInput,
    ResourceTypeInput,
};

// ── Resource types ───────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResourceTypeRequest {
    pub type_name: Option<String>,
    pub description: Option<String>,
}

#[derive(Serialize)]
pub struct ResourceTypeResponse {
    pub id: String,
    pub type_name: String,
    pub description: Option<String>,
}

impl From<ResourceType> for ResourceTypeResponse {
    fn from(resource_type: ResourceType) -> Self {
        Self {
            id: resource_type.id.to_string(),
            type_name: resource_type.type_name,
            description: resource_type.description,
        }
    }
}

pub async fn create_resource_type(
    State(state): State<AppState>,
    Json(body): Json<ResourceTypeRequest>,
) -> Result<(StatusCode, Json<ResourceTypeResponse>), BackendError> {
    let usecase = CreateResourceTypeUseCase {
        repo: state.resource_type_repo(),
    };
    let resource_type = usecase
        .execute(ResourceTypeInput {
            type_name: body.type_name,
            description: body.description,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(resource_type.into())))
}

pub async fn list_resource_types(
    State(state): State<AppState>,
) -> Result<Json<Vec<ResourceTypeResponse>>, BackendError> {
    let usecase = ListResourceTypesUseCase {
        repo: state.resource_type_repo(),
    };
    let resource_types = usecase.execute().await?;
    Ok(Json(resource_types.into_iter().map(Into::into).collect()))
}

pub async fn delete_resource_type(
    State(state): State<AppState>,
    Path(resource_type_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteResourceTypeUseCase {
        repo: state.resource_type_repo(),
    };
    usecase.execute(resource_type_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

// ── Chapter resources ────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ResourceRequest {
    pub title: Option<String>,
    pub resource_url: Option<String>,
    pub resource_type_id: Option<Uuid>,
}

#[derive(Serialize)]
pub struct ResourceResponse {
    pub id: String,
    pub course_id: String,
    pub chapter_id: String,
    pub resource_type_id: String,
    pub title: String,
    pub resource_url: Option<String>,
}

impl From<CourseResource> for ResourceResponse {
    fn from(resource: CourseResource) -> Self {
        Self {
            id: resource.id.to_string(),
            course_id: resource.course_id.to_string(),
            chapter_id: resource.chapter_id.to_string(),
            resource_type_id: resource.resource_type_id.to_string(),
            title: resource.title,
            resource_url: resource.resource_url,
        }
    }
}

// ── POST /chapters/{chapter_id}/resources ────────────────────────────────────

pub async fn create_resource(
    State(state): State<AppState>,
    Path(chapter_id): Path<Uuid>,
    Json(body): Json<ResourceRequest>,
) -> Result<(StatusCode, Json<ResourceResponse>), BackendError> {
    let usecase = CreateResourceUseCase {
        chapters: state.chapter_repo(),
        resource_types: state.resource_type_repo(),
        repo: state.resource_repo(),
    };
    let resource = usecase
        .execute(
            chapter_id,
            ResourceInput {
                title: body.title,
                resource_url: body.resource_url,
                resource_type_id: body.resource_type_id,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(resource.into())))
}

// ── GET /chapters/{chapter_id}/resources ─────────────────────────────────────

pub async fn list_resources(
    State(state): State<AppState>,
    Path(chapter_id): Path<Uuid>,
) -> Result<Json<Vec<ResourceResponse>>, BackendError> {
    let usecase = ListResourcesUseCase {
        chapters: state.chapter_repo(),
        repo: state.resource_repo(),
    };
    let resources = usecase.execute(chapter_id).await?;
    Ok(Json(resources.into_iter().map(Into::into).collect()))
}

// ── DELETE /resources/{resource_id} ──────────────────────────────────────────

pub async fn delete_resource(
    State(state): State<AppState>,
    Path(resource_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteResourceUseCase {
        repo: state.resource_repo(),
    };
    usecase.execute(resource_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
