use axum::{
    Json,
    extract::{Query, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use coursehub_domain::pagination::PageRequest;

use crate::domain::types::ContactMessageView;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::contact::{
    ListContactMessagesUseCase, SendContactMessageInput, SendContactMessageUseCase,
};

#[derive(Serialize)]
pub struct ContactMessageResponse {
    pub id: String,
    pub message: String,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
}

impl From<ContactMessageView> for ContactMessageResponse {
    fn from(view: ContactMessageView) -> Self {
        Self {
            id: view.id.to_string(),
            message: view.message,
            created_at: view.created_at,
            full_name: view.full_name,
            first_name: view.first_name,
            last_name: view.last_name,
            email: view.email,
            phone_number: view.phone_number,
        }
    }
}

// ── POST /contactus ──────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct ContactRequest {
    pub email: Option<String>,
    pub message: Option<String>,
}

pub async fn send_contact_message(
    State(state): State<AppState>,
    Json(body): Json<ContactRequest>,
) -> Result<(StatusCode, Json<ContactMessageResponse>), BackendError> {
    let usecase = SendContactMessageUseCase {
        profiles: state.profile_repo(),
        repo: state.contact_repo(),
        email_policy: state.email_policy.clone(),
    };
    let view = usecase
        .execute(SendContactMessageInput {
            email: body.email,
            message: body.message,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(view.into())))
}

// ── GET /contactus ───────────────────────────────────────────────────────────

pub async fn list_contact_messages(
    State(state): State<AppState>,
    Query(page): Query<PageRequest>,
) -> Result<Json<Vec<ContactMessageResponse>>, BackendError> {
    let usecase = ListContactMessagesUseCase {
        repo: state.contact_repo(),
    };
    let messages = usecase.execute(page).await?;
    Ok(Json(messages.into_iter().map(Into::into).collect()))
}
