use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::{CourseRepository, PriceRepository};
use crate::domain::types::Price;
use crate::error::BackendError;

pub const DEFAULT_CURRENCY: &str = "USD";
const MAX_DESCRIPTION_LEN: usize = 255;

#[derive(Debug, Clone, Default)]
pub struct PriceInput {
    pub amount: Option<Decimal>,
    pub currency: Option<String>,
    pub discount: Option<i16>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

/// Validated price fields, before a course and id are attached.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTerms {
    pub amount: Decimal,
    pub currency: String,
    pub discount: Option<i16>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

impl PriceInput {
    pub fn validate(self) -> Result<PriceTerms, Violation> {
        let amount = self.amount.ok_or(Violation::Required { field: "amount" })?;
        if amount <= Decimal::ZERO {
            return Err(Violation::NotPositive { field: "amount" });
        }
        // numeric(12, 2)
        let amount = validation::bounded(
            "amount",
            amount.round_dp(2),
            Decimal::new(1, 2),
            Decimal::new(999_999_999_999, 2),
        )?;

        let currency = match self.currency.as_deref().map(str::trim) {
            None | Some("") => DEFAULT_CURRENCY.to_owned(),
            raw => validation::currency("currency", raw)?,
        };
        let discount = self
            .discount
            .map(|d| validation::bounded("discount", d, 0, 100))
            .transpose()?;
        if let (Some(start), Some(end)) = (self.start_date, self.end_date) {
            if end < start {
                return Err(Violation::InvertedRange {
                    field: "end_date",
                    other: "start_date",
                });
            }
        }

        Ok(PriceTerms {
            amount,
            currency,
            discount,
            start_date: self.start_date,
            end_date: self.end_date,
            description: validation::optional(
                "description",
                self.description.as_deref(),
                MAX_DESCRIPTION_LEN,
            )?,
        })
    }
}

// ── CreatePrice ──────────────────────────────────────────────────────────────

pub struct CreatePriceUseCase<C: CourseRepository, P: PriceRepository> {
    pub courses: C,
    pub repo: P,
}

impl<C: CourseRepository, P: PriceRepository> CreatePriceUseCase<C, P> {
    pub async fn execute(&self, course_id: Uuid, input: PriceInput) -> Result<Price, BackendError> {
        let terms = input.validate()?;
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        let price = Price {
            id: Uuid::now_v7(),
            course_id,
            amount: terms.amount,
            currency: terms.currency,
            discount: terms.discount,
            start_date: terms.start_date,
            end_date: terms.end_date,
            description: terms.description,
        };
        self.repo.create(&price).await?;
        Ok(price)
    }
}

// ── ListPrices ───────────────────────────────────────────────────────────────

pub struct ListPricesUseCase<C: CourseRepository, P: PriceRepository> {
    pub courses: C,
    pub repo: P,
}

impl<C: CourseRepository, P: PriceRepository> ListPricesUseCase<C, P> {
    pub async fn execute(&self, course_id: Uuid) -> Result<Vec<Price>, BackendError> {
        if self.courses.find_by_id(course_id).await?.is_none() {
            return Err(BackendError::CourseNotFound);
        }
        self.repo.list_by_course(course_id).await
    }
}

// ── DeletePrice ──────────────────────────────────────────────────────────────

pub struct DeletePriceUseCase<P: PriceRepository> {
    pub repo: P,
}

impl<P: PriceRepository> DeletePriceUseCase<P> {
    pub async fn execute(&self, id: Uuid) -> Result<(), BackendError> {
        if !self.repo.delete(id).await? {
            return Err(BackendError::PriceNotFound);
        }
        Ok(())
    }
}
