//! Database connection pool using the OnceCell pattern.

use sqlx::postgres::PgPoolOptions;
use sqlx::PgPool;
use store::Role;
use tokio::sync::OnceCell;

use crate::auth::hash_password;
use crate::config::Database;

static POOL: OnceCell<PgPool> = OnceCell::const_new();

/// Demo accounts: (email, password, full name, role).
pub const DEMO_USERS: [(&str, &str, &str, Role); 2] = [
    ("admin@example.com", "admin123", "Admin User", Role::Admin),
    ("user@example.com", "user123", "Regular User", Role::User),
];

/// Get or initialize the database connection pool.
pub async fn get_pool(database: &Database) -> Result<&'static PgPool, sqlx::Error> {
    POOL.get_or_try_init(|| async {
        PgPoolOptions::new()
            .max_connections(database.max_connections)
            .connect(&database.url)
            .await
    })
    .await
}

pub async fn migrate(pool: &PgPool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}

/// Insert the demo accounts unless an account with that email exists.
pub async fn seed_demo_users(pool: &PgPool) -> Result<(), crate::error::ApiError> {
    for (email, password, full_name, role) in DEMO_USERS {
        if super::users::find_by_email(pool, email).await?.is_some() {
            continue;
        }
        let hash = hash_password(password)?;
        super::users::insert(pool, email, &hash, Some(full_name), role).await?;
        tracing::info!("seeded demo user {}", email);
    }
    Ok(())
}
