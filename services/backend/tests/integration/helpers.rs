use std::sync::{Arc, Mutex};

use axum_test::TestServer;
use chrono::Utc;
use sea_orm::{ConnectOptions, Database, DatabaseConnection};
use sea_orm_migration::MigratorTrait;
use uuid::Uuid;

use coursehub_backend::domain::repository::{
    ContactMessageRepository, PasswordHasher, ProfileRepository,
};
use coursehub_backend::domain::types::{ContactMessage, ContactMessageView, Profile};
use coursehub_backend::error::BackendError;
use coursehub_backend::infra::password::BcryptHasher;
use coursehub_backend::router::build_router;
use coursehub_backend::state::AppState;
use coursehub_backend_migration::Migrator;
use coursehub_domain::email::EmailPolicy;
use coursehub_domain::pagination::PageRequest;

pub const EMAIL_DOMAIN: &str = "gmail.com";

pub fn email_policy() -> EmailPolicy {
    EmailPolicy::new(EMAIL_DOMAIN)
}

// ── MockProfileRepo ──────────────────────────────────────────────────────────

#[derive(Clone)]
pub struct MockProfileRepo {
    pub profiles: Arc<Mutex<Vec<Profile>>>,
}

impl MockProfileRepo {
    pub fn new(profiles: Vec<Profile>) -> Self {
        Self {
            profiles: Arc::new(Mutex::new(profiles)),
        }
    }

    pub fn empty() -> Self {
        Self::new(vec![])
    }

    /// Returns a shared handle to the stored profiles for post-execution inspection.
    pub fn profiles_handle(&self) -> Arc<Mutex<Vec<Profile>>> {
        Arc::clone(&self.profiles)
    }
}

impl ProfileRepository for MockProfileRepo {
    async fn find_by_email(&self, email: &str) -> Result<Option<Profile>, BackendError> {
        Ok(self
            .profiles
            .lock()
            .unwrap()
            .iter()
            .find(|p| p.email == email)
            .cloned())
    }

    async fn create(&self, profile: &Profile) -> Result<(), BackendError> {
        let mut profiles = self.profiles.lock().unwrap();
        if profiles.iter().any(|p| p.email == profile.email) {
            return Err(BackendError::ProfileAlreadyExists);
        }
        profiles.push(profile.clone());
        Ok(())
    }

    async fn update(&self, profile: &Profile) -> Result<(), BackendError> {
        let mut profiles = self.profiles.lock().unwrap();
        let slot = profiles
            .iter_mut()
            .find(|p| p.id == profile.id)
            .ok_or(BackendError::ProfileNotFound)?;
        *slot = profile.clone();
        Ok(())
    }

    async fn delete(&self, id: Uuid) -> Result<bool, BackendError> {
        let mut profiles = self.profiles.lock().unwrap();
        let before = profiles.len();
        profiles.retain(|p| p.id != id);
        Ok(profiles.len() < before)
    }
}

// ── MockContactRepo ──────────────────────────────────────────────────────────

#[derive(Clone, Default)]
pub struct MockContactRepo {
    pub messages: Arc<Mutex<Vec<ContactMessage>>>,
}

impl ContactMessageRepository for MockContactRepo {
    async fn create(&self, message: &ContactMessage) -> Result<(), BackendError> {
        self.messages.lock().unwrap().push(message.clone());
        Ok(())
    }

    async fn list(&self, _page: PageRequest) -> Result<Vec<ContactMessageView>, BackendError> {
        Ok(vec![])
    }
}

// ── PlainHasher ──────────────────────────────────────────────────────────────

/// Reversible stand-in for bcrypt so use-case tests stay fast.
pub struct PlainHasher;

impl PasswordHasher for PlainHasher {
    async fn hash(&self, password: &str) -> Result<String, BackendError> {
        Ok(format!("hashed:{password}"))
    }

    async fn verify(&self, password: &str, hash: &str) -> Result<bool, BackendError> {
        Ok(hash == format!("hashed:{password}"))
    }
}

pub fn test_profile() -> Profile {
    let now = Utc::now();
    Profile {
        id: Uuid::now_v7(),
        full_name: "Ada Lovelace".to_owned(),
        first_name: Some("Ada".to_owned()),
        last_name: Some("Lovelace".to_owned()),
        email: "ada@gmail.com".to_owned(),
        phone_number: Some("+441234567".to_owned()),
        password_hash: "hashed:analytical".to_owned(),
        created_at: now,
        updated_at: now,
    }
}

// ── SQLite-backed server ─────────────────────────────────────────────────────

/// Full router over a freshly migrated in-memory SQLite database.
pub async fn test_db() -> DatabaseConnection {
    let mut options = ConnectOptions::new("sqlite::memory:");
    // Every pooled connection would otherwise open its own empty database.
    options.max_connections(1).min_connections(1).sqlx_logging(false);
    let db = Database::connect(options)
        .await
        .expect("failed to open sqlite");
    Migrator::up(&db, None)
        .await
        .expect("failed to run migrations");
    db
}

pub async fn test_server() -> TestServer {
    test_server_with_db().await.0
}

/// Server plus a handle on the same database, for asserting on rows the API no longer exposes.
pub async fn test_server_with_db() -> (TestServer, DatabaseConnection) {
    let db = test_db().await;
    let state = AppState {
        db: db.clone(),
        email_policy: email_policy(),
        hasher: BcryptHasher { cost: 4 },
    };
    let server = TestServer::new(build_router(state)).expect("failed to build test server");
    (server, db)
}
