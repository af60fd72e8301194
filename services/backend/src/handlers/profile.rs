use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use serde::{Deserialize, Serialize};

use crate::domain::types::Profile;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::profile::{
    DeleteProfileUseCase, GetProfileUseCase, SignInInput, SignInUseCase, SignUpInput,
    SignUpUseCase, UpdateProfileInput, UpdateProfileUseCase,
};

// ── Response types ───────────────────────────────────────────────────────────

/// Public view of a profile. The password hash never leaves the service.
#[derive(Serialize)]
pub struct ProfileResponse {
    pub id: String,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub created_at: chrono::DateTime<chrono::Utc>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms")]
    pub updated_at: chrono::DateTime<chrono::Utc>,
}

impl From<Profile> for ProfileResponse {
    fn from(profile: Profile) -> Self {
        Self {
            id: profile.id.to_string(),
            full_name: profile.full_name,
            first_name: profile.first_name,
            last_name: profile.last_name,
            email: profile.email,
            phone_number: profile.phone_number,
            created_at: profile.created_at,
            updated_at: profile.updated_at,
        }
    }
}

// ── POST /sign_up ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignUpRequest {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

pub async fn sign_up(
    State(state): State<AppState>,
    Json(body): Json<SignUpRequest>,
) -> Result<(StatusCode, Json<ProfileResponse>), BackendError> {
    let usecase = SignUpUseCase {
        repo: state.profile_repo(),
        hasher: state.hasher,
        email_policy: state.email_policy.clone(),
    };
    let profile = usecase
        .execute(SignUpInput {
            full_name: body.full_name,
            first_name: body.first_name,
            last_name: body.last_name,
            email: body.email,
            phone_number: body.phone_number,
            password: body.password,
        })
        .await?;
    Ok((StatusCode::CREATED, Json(profile.into())))
}

// ── POST /sign_in ────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct SignInRequest {
    pub email: Option<String>,
    pub password: Option<String>,
}

#[derive(Serialize)]
pub struct SignInResponse {
    pub message: &'static str,
    pub profile: ProfileResponse,
}

pub async fn sign_in(
    State(state): State<AppState>,
    Json(body): Json<SignInRequest>,
) -> Result<Json<SignInResponse>, BackendError> {
    let usecase = SignInUseCase {
        repo: state.profile_repo(),
        hasher: state.hasher,
        email_policy: state.email_policy.clone(),
    };
    let profile = usecase
        .execute(SignInInput {
            email: body.email,
            password: body.password,
        })
        .await?;
    Ok(Json(SignInResponse {
        message: "Successfully signed in",
        profile: profile.into(),
    }))
}

// ── GET /{email} ─────────────────────────────────────────────────────────────

pub async fn get_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let usecase = GetProfileUseCase {
        repo: state.profile_repo(),
    };
    let profile = usecase.execute(&email).await?;
    Ok(Json(profile.into()))
}

// ── PUT /{email} ─────────────────────────────────────────────────────────────

#[derive(Deserialize)]
pub struct UpdateProfileRequest {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

pub async fn update_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(body): Json<UpdateProfileRequest>,
) -> Result<Json<ProfileResponse>, BackendError> {
    let usecase = UpdateProfileUseCase {
        repo: state.profile_repo(),
        hasher: state.hasher,
    };
    let profile = usecase
        .execute(
            &email,
            UpdateProfileInput {
                full_name: body.full_name,
                first_name: body.first_name,
                last_name: body.last_name,
                phone_number: body.phone_number,
                password: body.password,
            },
        )
        .await?;
    Ok(Json(profile.into()))
}

// ── DELETE /{email} ──────────────────────────────────────────────────────────

pub async fn delete_profile(
    State(state): State<AppState>,
    Path(email): Path<String>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeleteProfileUseCase {
        repo: state.profile_repo(),
    };
    usecase.execute(&email).await?;
    Ok(StatusCode::NO_CONTENT)
}
