use sea_orm::Database;
use sea_orm_migration::MigratorTrait;
use tracing::info;

use coursehub_backend::config::BackendConfig;
use coursehub_backend::infra::password::BcryptHasher;
use coursehub_backend::router::build_router;
use coursehub_backend::state::AppState;
use coursehub_backend_migration::Migrator;
use coursehub_core::config::Config;
use coursehub_core::tracing::init_tracing;
use coursehub_domain::email::EmailPolicy;

#[tokio::main]
async fn main() {
    init_tracing("info,sqlx=warn");

    let config = BackendConfig::from_env();

    let db = Database::connect(&config.database_url)
        .await
        .expect("failed to connect to database");

    if config.run_migrations {
        Migrator::up(&db, None)
            .await
            .expect("failed to run migrations");
        info!("migrations applied");
    }

    let state = AppState {
        db,
        email_policy: EmailPolicy::new(&config.email_domain),
        hasher: BcryptHasher {
            cost: config.bcrypt_cost,
        },
    };

    let router = build_router(state);
    let http_addr = format!("0.0.0.0:{}", config.backend_port);
    let listener = tokio::net::TcpListener::bind(&http_addr)
        .await
        .expect("failed to bind");

    info!(
        email_domain = %config.email_domain,
        "backend listening on {http_addr}"
    );
    axum::serve(listener, router).await.expect("server error");
}
