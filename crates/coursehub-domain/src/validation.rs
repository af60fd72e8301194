//! Input validation rules.
//!
//! Every rule trims its input first. Optional strings that are empty after trimming are
//! treated as absent.

use std::fmt::Display;

/// A violated input rule. The `Display` text is returned to the caller as-is.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Violation {
    #[error("{field} is required")]
    Required { field: &'static str },
    #[error("{field} must be at most {max} characters")]
    TooLong { field: &'static str, max: usize },
    #[error("{field} must be at most {max} bytes")]
    TooManyBytes { field: &'static str, max: usize },
    #[error("{field} must contain '@' after a non-empty name")]
    MalformedEmail { field: &'static str },
    #[error("{field} must end with @{domain}")]
    EmailDomain { field: &'static str, domain: String },
    #[error("{field} must be between {min} and {max}")]
    OutOfRange {
        field: &'static str,
        min: String,
        max: String,
    },
    #[error("{field} must be greater than zero")]
    NotPositive { field: &'static str },
    #[error("{field} must be a three-letter currency code")]
    InvalidCurrency { field: &'static str },
    #[error("{field} must not be before {other}")]
    InvertedRange {
        field: &'static str,
        other: &'static str,
    },
    #[error("{field} must be one of {allowed}")]
    UnknownValue {
        field: &'static str,
        allowed: &'static str,
    },
    #[error("at least one of {fields} must be present")]
    NoneOf { fields: &'static str },
}

/// Trim a required string and enforce a character limit.
pub fn required(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<String, Violation> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.is_empty() {
        return Err(Violation::Required { field });
    }
    within_limit(field, trimmed, max)
}

/// Trim an optional string. Blank input becomes `None`.
pub fn optional(
    field: &'static str,
    value: Option<&str>,
    max: usize,
) -> Result<Option<String>, Violation> {
    match value.map(str::trim) {
        None | Some("") => Ok(None),
        Some(trimmed) => within_limit(field, trimmed, max).map(Some),
    }
}

fn within_limit(field: &'static str, value: &str, max: usize) -> Result<String, Violation> {
    if value.chars().count() > max {
        return Err(Violation::TooLong { field, max });
    }
    Ok(value.to_owned())
}

/// A secret taken verbatim (no trimming). Blank input is missing; the limit is in bytes.
pub fn secret(
    field: &'static str,
    value: Option<&str>,
    max_bytes: usize,
) -> Result<String, Violation> {
    match value {
        Some(v) if !v.trim().is_empty() => {
            if v.len() > max_bytes {
                return Err(Violation::TooManyBytes {
                    field,
                    max: max_bytes,
                });
            }
            Ok(v.to_owned())
        }
        _ => Err(Violation::Required { field }),
    }
}

/// Structural email check: a non-empty local part, exactly one `@`, and a non-empty domain.
/// Returns the trimmed address.
pub fn email_shape(field: &'static str, value: &str) -> Result<String, Violation> {
    let trimmed = value.trim();
    match trimmed.split_once('@') {
        Some((local, domain))
            if !local.is_empty() && !domain.is_empty() && !domain.contains('@') =>
        {
            Ok(trimmed.to_owned())
        }
        _ => Err(Violation::MalformedEmail { field }),
    }
}

/// Inclusive range check.
pub fn bounded<T>(field: &'static str, value: T, min: T, max: T) -> Result<T, Violation>
where
    T: PartialOrd + Display + Copy,
{
    if value < min || value > max {
        return Err(Violation::OutOfRange {
            field,
            min: min.to_string(),
            max: max.to_string(),
        });
    }
    Ok(value)
}

/// Three ASCII letters, normalised to upper case.
pub fn currency(field: &'static str, value: Option<&str>) -> Result<String, Violation> {
    let trimmed = value.map(str::trim).unwrap_or_default();
    if trimmed.len() != 3 || !trimmed.chars().all(|c| c.is_ascii_alphabetic()) {
        return Err(Violation::InvalidCurrency { field });
    }
    Ok(trimmed.to_ascii_uppercase())
}

/// Require at least one present value among a group of fields.
pub fn any_present(fields: &'static str, present: &[bool]) -> Result<(), Violation> {
    if present.iter().any(|p| *p) {
        Ok(())
    } else {
        Err(Violation::NoneOf { fields })
    }
}

/// Trim every entry of a list and drop blanks.
pub fn string_list(values: Vec<String>) -> Vec<String> {
    values
        .into_iter()
        .map(|v| v.trim().to_owned())
        .filter(|v| !v.is_empty())
        .collect()
}
