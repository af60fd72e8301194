//! Profile email policy.

use crate::validation::{Violation, email_shape};

/// Longest accepted profile email, matching the `user_profiles.email` column.
pub const MAX_EMAIL_LEN: usize = 64;

/// Trims the address and lowercases everything after the first `@`.
pub fn normalize(email: &str) -> String {
    let email = email.trim();
    match email.split_once('@') {
        Some((local, domain)) => format!("{local}@{}", domain.to_ascii_lowercase()),
        None => email.to_owned(),
    }
}

/// Accepts profile emails that belong to a single domain.
///
/// The returned address keeps the local part as typed and lowercases the domain, so
/// `ada@GMAIL.com` and `ada@gmail.com` name the same profile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailPolicy {
    domain: String,
}

impl EmailPolicy {
    /// `domain` may be given with or without a leading `@`.
    pub fn new(domain: impl AsRef<str>) -> Self {
        Self {
            domain: domain.as_ref().trim().trim_start_matches('@').to_owned(),
        }
    }

    pub fn domain(&self) -> &str {
        &self.domain
    }

    pub fn validate(&self, value: Option<&str>) -> Result<String, Violation> {
        let raw = value.map(str::trim).unwrap_or_default();
        if raw.is_empty() {
            return Err(Violation::Required { field: "email" });
        }
        let email = email_shape("email", raw)?;
        if email.chars().count() > MAX_EMAIL_LEN {
            return Err(Violation::TooLong {
                field: "email",
                max: MAX_EMAIL_LEN,
            });
        }
        let (_, domain) = email
            .split_once('@')
            .ok_or(Violation::MalformedEmail { field: "email" })?;
        if !domain.eq_ignore_ascii_case(&self.domain) {
            return Err(Violation::EmailDomain {
                field: "email",
                domain: self.domain.clone(),
            });
        }
        Ok(normalize(&email))
    }
}
