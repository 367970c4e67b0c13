use crate::{
    config::ServerConfig,
    error::{Result, UserqlError},
    model::{NewUser, User, UserUpdate},
};
use sqlx::migrate::Migrator;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

static MIGRATOR: Migrator = sqlx::migrate!("./migrations");

/// Generate a new user ID (21-character URL-safe nanoid).
pub fn generate_id() -> String {
    nanoid::nanoid!()
}

/// Data-access client for users.
///
/// Wraps a single connection pool that is created once at startup and
/// cloned into every consumer. Each method issues exactly one statement.
#[derive(Clone, Debug)]
pub struct UserRepository {
    pool: SqlitePool,
}

impl UserRepository {
    pub async fn connect(config: &ServerConfig) -> Result<Self> {
        let options =
            SqliteConnectOptions::from_str(&config.database_url)?.create_if_missing(true);

        // Every connection to an in-memory database is a separate database,
        // so keep exactly one alive for the lifetime of the pool.
        let pool_options = if config.is_in_memory() {
            SqlitePoolOptions::new()
                .max_connections(1)
                .idle_timeout(None)
                .max_lifetime(None)
        } else {
            SqlitePoolOptions::new().max_connections(config.max_connections)
        };

        let pool = pool_options.connect_with(options).await?;
        tracing::debug!(url = %config.database_url, "Connected to database");
        Ok(Self { pool })
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }

    /// Apply the embedded migrations. Safe to call on every startup.
    pub async fn migrate(&self) -> Result<()> {
        MIGRATOR.run(&self.pool).await?;
        Ok(())
    }

    /// Every user, in whatever order the store returns them.
    pub async fn find_many(&self) -> Result<Vec<User>> {
        let users = sqlx::query_as::<_, User>("SELECT id, name, email, password FROM users")
            .fetch_all(&self.pool)
            .await?;
        Ok(users)
    }

    pub async fn find_unique(&self, id: &str) -> Result<Option<User>> {
        let user = sqlx::query_as::<_, User>(
            "SELECT id, name, email, password FROM users WHERE id = ?",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;
        Ok(user)
    }

    pub async fn create(&self, new_user: NewUser) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "INSERT INTO users (id, name, email, password) VALUES (?, ?, ?, ?) \
             RETURNING id, name, email, password",
        )
        .bind(generate_id())
        .bind(&new_user.name)
        .bind(&new_user.email)
        .bind(&new_user.password)
        .fetch_one(&self.pool)
        .await?;

        tracing::debug!(id = %user.id, "Created user");
        Ok(user)
    }

    /// Overwrite the supplied fields of the user whose email matches.
    ///
    /// Emails are not unique; when several rows share one, the earliest
    /// inserted row is the one updated.
    pub async fn update_by_email(&self, email: &str, update: UserUpdate) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "UPDATE users SET name = COALESCE(?, name), password = COALESCE(?, password) \
             WHERE id = (SELECT id FROM users WHERE email = ? ORDER BY rowid LIMIT 1) \
             RETURNING id, name, email, password",
        )
        .bind(update.name)
        .bind(update.password)
        .bind(email)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| UserqlError::NotFound(format!("no user with email '{}'", email)))?;

        tracing::debug!(id = %user.id, "Updated user");
        Ok(user)
    }

    /// Remove a user, returning the record as it was before deletion.
    pub async fn delete(&self, id: &str) -> Result<User> {
        let user = sqlx::query_as::<_, User>(
            "DELETE FROM users WHERE id = ? RETURNING id, name, email, password",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?
        .ok_or_else(|| UserqlError::NotFound(format!("no user with id '{}'", id)))?;

        tracing::debug!(id = %user.id, "Deleted user");
        Ok(user)
    }
}
