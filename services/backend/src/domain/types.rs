use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use coursehub_domain::enrollment::EnrollmentStatus;
use coursehub_domain::pagination::Sort;

// ── Profiles ─────────────────────────────────────────────────────────────────

/// Registered user profile. `email` is unique and immutable after sign-up.
#[derive(Debug, Clone)]
pub struct Profile {
    pub id: Uuid,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
    pub password_hash: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// A contact-form message as stored.
#[derive(Debug, Clone)]
pub struct ContactMessage {
    pub id: Uuid,
    pub user_profile_id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
}

/// A contact-form message joined with the sender's profile.
#[derive(Debug, Clone)]
pub struct ContactMessageView {
    pub id: Uuid,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub full_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: String,
    pub phone_number: Option<String>,
}

impl ContactMessageView {
    pub fn new(message: ContactMessage, sender: &Profile) -> Self {
        Self {
            id: message.id,
            message: message.message,
            created_at: message.created_at,
            full_name: sender.full_name.clone(),
            first_name: sender.first_name.clone(),
            last_name: sender.last_name.clone(),
            email: sender.email.clone(),
            phone_number: sender.phone_number.clone(),
        }
    }
}

// ── Courses ──────────────────────────────────────────────────────────────────

/// Caller-editable course fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CourseDetails {
    pub course_name: String,
    pub description: Option<String>,
    pub thumbnail_url: Option<String>,
    pub rating: Option<f64>,
    pub categories: Vec<String>,
    pub content: Vec<BTreeMap<String, String>>,
    pub duration: Option<i32>,
    pub level: Option<String>,
    pub released_date: Option<DateTime<Utc>>,
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

/// Catalog course. `enrollment_count` is maintained by enrollment writes only.
#[derive(Debug, Clone)]
pub struct Course {
    pub id: Uuid,
    pub details: CourseDetails,
    pub last_update: DateTime<Utc>,
    pub enrollment_count: i32,
}

/// Sort options for course list queries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CourseSortBy {
    LastUpdate(Sort),
    CourseName(Sort),
    Rating(Sort),
}

impl Default for CourseSortBy {
    fn default() -> Self {
        Self::LastUpdate(Sort::Desc)
    }
}

impl CourseSortBy {
    pub fn from_kebab_case(s: &str) -> Option<Self> {
        match s {
            "last-update-desc" => Some(Self::LastUpdate(Sort::Desc)),
            "last-update-asc" => Some(Self::LastUpdate(Sort::Asc)),
            "course-name-desc" => Some(Self::CourseName(Sort::Desc)),
            "course-name-asc" => Some(Self::CourseName(Sort::Asc)),
            "rating-desc" => Some(Self::Rating(Sort::Desc)),
            "rating-asc" => Some(Self::Rating(Sort::Asc)),
            _ => None,
        }
    }
}

// ── Authors ──────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AuthorDetails {
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
    pub last_active: Option<DateTime<Utc>>,
}

#[derive(Debug, Clone)]
pub struct Author {
    pub id: Uuid,
    pub details: AuthorDetails,
    pub join_date: DateTime<Utc>,
}

// ── Course children ──────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq)]
pub struct Price {
    pub id: Uuid,
    pub course_id: Uuid,
    pub amount: Decimal,
    pub currency: String,
    /// Percent, 0–100.
    pub discount: Option<i16>,
    pub start_date: Option<DateTime<Utc>>,
    pub end_date: Option<DateTime<Utc>>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Chapter {
    pub id: Uuid,
    pub course_id: Uuid,
    pub title: String,
    pub content: Option<String>,
    pub order: Option<i32>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    pub id: Uuid,
    pub course_id: Uuid,
    pub url: String,
    pub description: Option<String>,
    pub uploaded_date: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResourceType {
    pub id: Uuid,
    pub type_name: String,
    pub description: Option<String>,
}

/// Material attached to a chapter. `course_id` always equals the chapter's course.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseResource {
    pub id: Uuid,
    pub course_id: Uuid,
    pub chapter_id: Uuid,
    pub resource_type_id: Uuid,
    pub title: String,
    pub resource_url: Option<String>,
}

// ── Enrollments ──────────────────────────────────────────────────────────────

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Enrollment {
    pub user_id: Uuid,
    pub course_id: Uuid,
    pub enrollment_date: DateTime<Utc>,
    pub status: EnrollmentStatus,
}
