use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::domain::types::Price;
use crate::error::BackendError;
use crate::state::AppState;
use crate::usecase::price::{
    CreatePriceUseCase, DeletePriceUseCase, ListPricesUseCase, PriceInput,
};

#[derive(Deserialize)]
pub struct PriceRequest {
    /// Accepts a JSON number or a decimal string.
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub discount: Option<i16>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

/// `amount` serializes as a decimal string to keep exact cents.
#[derive(Serialize)]
pub struct PriceResponse {
    pub id: String,
    pub course_id: String,
    pub amount: Decimal,
    pub currency: String,
    pub discount: Option<i16>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms_opt")]
    pub start_date: Option<DateTime<Utc>>,
    #[serde(serialize_with = "coursehub_core::serde::to_rfc3339_ms_opt")]
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl From<Price> for PriceResponse {
    fn from(price: Price) -> Self {
        Self {
            id: price.id.to_string(),
            course_id: price.course_id.to_string(),
            amount: price.amount,
            currency: price.currency,
            discount: price.discount,
            start_date: price.start_date,
            end_date: price.end_date,
            description: price.description,
        }
    }
}

// ── POST /courses/{course_id}/prices ─────────────────────────────────────────

pub async fn create_price(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
    Json(body): Json<PriceRequest>,
) -> Result<(StatusCode, Json<PriceResponse>), BackendError> {
    let usecase = CreatePriceUseCase {
        courses: state.course_repo(),
        repo: state.price_repo(),
    };
    let price = usecase
        .execute(
            course_id,
            PriceInput {
                amount: body.amount,
                currency: body.currency,
                discount: body.discount,
                start_date: body.start_date,
                end_date: body.end_date,
                description: body.description,
            },
        )
        .await?;
    Ok((StatusCode::CREATED, Json(price.into())))
}

// ── GET /courses/{course_id}/prices ──────────────────────────────────────────

pub async fn list_prices(
    State(state): State<AppState>,
    Path(course_id): Path<Uuid>,
) -> Result<Json<Vec<PriceResponse>>, BackendError> {
    let usecase = ListPricesUseCase {
        courses: state.course_repo(),
        repo: state.price_repo(),
    };
    let prices = usecase.execute(course_id).await?;
    Ok(Json(prices.into_iter().map(Into::into).collect()))
}

// ── DELETE /prices/{price_id} ────────────────────────────────────────────────

pub async fn delete_price(
    State(state): State<AppState>,
    Path(price_id): Path<Uuid>,
) -> Result<StatusCode, BackendError> {
    let usecase = DeletePriceUseCase {
        repo: state.price_repo(),
    };
    usecase.execute(price_id).await?;
    Ok(StatusCode::NO_CONTENT)
}
