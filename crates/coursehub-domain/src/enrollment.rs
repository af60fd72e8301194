//! Enrollment domain types.

use serde::{Deserialize, Serialize};

use crate::validation::Violation;

/// Progress of a profile through a course.
///
/// Wire and storage format: snake_case string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    #[default]
    Active,
    Completed,
    Dropped,
}

impl EnrollmentStatus {
    pub const ALLOWED: &'static str = "active, completed, dropped";

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Completed => "completed",
            Self::Dropped => "dropped",
        }
    }

    /// Parse a stored or submitted value. Returns `None` for unknown values.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim() {
            "active" => Some(Self::Active),
            "completed" => Some(Self::Completed),
            "dropped" => Some(Self::Dropped),
            _ => None,
        }
    }

    /// Parse an optional submitted value, defaulting to `Active` when absent.
    pub fn from_input(value: Option<&str>) -> Result<Self, Violation> {
        match value.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(v) => Self::parse(v).ok_or(Violation::UnknownValue {
                field: "status",
                allowed: Self::ALLOWED,
            }),
        }
    }
}
