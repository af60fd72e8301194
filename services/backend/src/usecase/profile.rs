use chrono::Utc;
use uuid::Uuid;

use coursehub_domain::email::{EmailPolicy, normalize as normalize_email};
use coursehub_domain::validation::{self, Violation};

use crate::domain::repository::{PasswordHasher, ProfileRepository};
use crate::domain::types::Profile;
use crate::error::BackendError;

pub const MAX_NAME_LEN: usize = 64;
pub const MAX_PHONE_LEN: usize = 16;
/// bcrypt ignores input past 72 bytes.
pub const MAX_PASSWORD_BYTES: usize = 72;

const NAME_FIELDS: &str = "full_name, first_name, last_name";

// ── SignUp ───────────────────────────────────────────────────────────────────

pub struct SignUpInput {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub email: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

pub struct SignUpUseCase<R: ProfileRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
    pub email_policy: EmailPolicy,
}

impl<R: ProfileRepository, H: PasswordHasher> SignUpUseCase<R, H> {
    pub async fn execute(&self, input: SignUpInput) -> Result<Profile, BackendError> {
        let full_name =
            validation::required("full_name", input.full_name.as_deref(), MAX_NAME_LEN)?;
        let email = self.email_policy.validate(input.email.as_deref())?;
        let first_name =
            validation::optional("first_name", input.first_name.as_deref(), MAX_NAME_LEN)?;
        let last_name =
            validation::optional("last_name", input.last_name.as_deref(), MAX_NAME_LEN)?;
        let phone_number =
            validation::optional("phone_number", input.phone_number.as_deref(), MAX_PHONE_LEN)?;
        let password =
            validation::secret("password", input.password.as_deref(), MAX_PASSWORD_BYTES)?;

        if self.repo.find_by_email(&email).await?.is_some() {
            return Err(BackendError::ProfileAlreadyExists);
        }

        let now = Utc::now();
        let profile = Profile {
            id: Uuid::now_v7(),
            full_name,
            first_name,
            last_name,
            email,
            phone_number,
            password_hash: self.hasher.hash(&password).await?,
            created_at: now,
            updated_at: now,
        };
        self.repo.create(&profile).await?;
        tracing::info!(profile_id = %profile.id, "profile registered");
        Ok(profile)
    }
}

// ── SignIn ───────────────────────────────────────────────────────────────────

pub struct SignInInput {
    pub email: Option<String>,
    pub password: Option<String>,
}

pub struct SignInUseCase<R: ProfileRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
    pub email_policy: EmailPolicy,
}

impl<R: ProfileRepository, H: PasswordHasher> SignInUseCase<R, H> {
    /// Unknown email and wrong password are indistinguishable to the caller.
    pub async fn execute(&self, input: SignInInput) -> Result<Profile, BackendError> {
        let email = self.email_policy.validate(input.email.as_deref())?;
        let password = match input.password.as_deref() {
            Some(p) if !p.trim().is_empty() => p,
            _ => return Err(Violation::Required { field: "password" }.into()),
        };

        let profile = self
            .repo
            .find_by_email(&email)
            .await?
            .ok_or(BackendError::InvalidCredentials)?;
        if !self.hasher.verify(password, &profile.password_hash).await? {
            return Err(BackendError::InvalidCredentials);
        }
        Ok(profile)
    }
}

// ── GetProfile ───────────────────────────────────────────────────────────────

pub struct GetProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> GetProfileUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<Profile, BackendError> {
        self.repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(BackendError::ProfileNotFound)
    }
}

// ── UpdateProfile ────────────────────────────────────────────────────────────

pub struct UpdateProfileInput {
    pub full_name: Option<String>,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
    pub phone_number: Option<String>,
    pub password: Option<String>,
}

pub struct UpdateProfileUseCase<R: ProfileRepository, H: PasswordHasher> {
    pub repo: R,
    pub hasher: H,
}

impl<R: ProfileRepository, H: PasswordHasher> UpdateProfileUseCase<R, H> {
    pub async fn execute(
        &self,
        email: &str,
        input: UpdateProfileInput,
    ) -> Result<Profile, BackendError> {
        let full_name =
            validation::optional("full_name", input.full_name.as_deref(), MAX_NAME_LEN)?;
        let first_name =
            validation::optional("first_name", input.first_name.as_deref(), MAX_NAME_LEN)?;
        let last_name =
            validation::optional("last_name", input.last_name.as_deref(), MAX_NAME_LEN)?;
        validation::any_present(
            NAME_FIELDS,
            &[full_name.is_some(), first_name.is_some(), last_name.is_some()],
        )?;
        // A submitted full_name may not blank out the stored one.
        if input.full_name.is_some() && full_name.is_none() {
            return Err(Violation::Required { field: "full_name" }.into());
        }
        let phone_number =
            validation::optional("phone_number", input.phone_number.as_deref(), MAX_PHONE_LEN)?;
        let password = match input.password.as_deref() {
            None => None,
            Some(p) if p.is_empty() => None,
            raw => Some(validation::secret("password", raw, MAX_PASSWORD_BYTES)?),
        };

        let mut profile = self
            .repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(BackendError::ProfileNotFound)?;

        if let Some(full_name) = full_name {
            profile.full_name = full_name;
        }
        if first_name.is_some() {
            profile.first_name = first_name;
        }
        if last_name.is_some() {
            profile.last_name = last_name;
        }
        if phone_number.is_some() {
            profile.phone_number = phone_number;
        }
        if let Some(password) = password {
            profile.password_hash = self.hasher.hash(&password).await?;
        }
        profile.updated_at = Utc::now();

        self.repo.update(&profile).await?;
        Ok(profile)
    }
}

// ── DeleteProfile ────────────────────────────────────────────────────────────

pub struct DeleteProfileUseCase<R: ProfileRepository> {
    pub repo: R,
}

impl<R: ProfileRepository> DeleteProfileUseCase<R> {
    pub async fn execute(&self, email: &str) -> Result<(), BackendError> {
        let profile = self
            .repo
            .find_by_email(&normalize_email(email))
            .await?
            .ok_or(BackendError::ProfileNotFound)?;
        if !self.repo.delete(profile.id).await? {
            return Err(BackendError::ProfileNotFound);
        }
        tracing::info!(profile_id = %profile.id, "profile deleted");
        Ok(())
    }
}
