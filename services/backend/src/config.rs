use serde::Deserialize;

use coursehub_core::config::Config;

/// Backend service configuration loaded from environment variables.
#[derive(Debug, Clone, Deserialize)]
pub struct BackendConfig {
    /// PostgreSQL connection URL. Env var: `DATABASE_URL`.
    pub database_url: String,
    /// TCP port for the HTTP server (default 3114). Env var: `BACKEND_PORT`.
    #[serde(default = "default_backend_port")]
    pub backend_port: u16,
    /// Domain every profile email must belong to (default `gmail.com`).
    #[serde(default = "default_email_domain")]
    pub email_domain: String,
    /// bcrypt work factor for password hashes (default 12).
    #[serde(default = "default_bcrypt_cost")]
    pub bcrypt_cost: u32,
    /// Apply pending migrations before serving. Env var: `RUN_MIGRATIONS`.
    #[serde(default)]
    pub run_migrations: bool,
}

fn default_backend_port() -> u16 {
    3114
}

fn default_email_domain() -> String {
    "gmail.com".to_owned()
}

fn default_bcrypt_cost() -> u32 {
    bcrypt::DEFAULT_COST
}

impl Config for BackendConfig {}
