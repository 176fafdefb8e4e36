/**
 * User Model and Credential Store
 *
 * This module handles user records and the credential check of the
 * sign-in flow. Users are provisioned out-of-band (see the
 * `tokengate-add-user` binary); the sign-in path only reads them.
 */

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::{SqliteConnection, SqlitePool};

use crate::backend::auth::password::PasswordHasher;
use crate::backend::auth::validation::validate_sign_in;
use crate::backend::error::{AuthError, ProvisionError};

/// Opaque user identifier (UUID-shaped text)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(transparent)]
pub struct UserId(String);

impl UserId {
    /// Fresh random identifier
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<String> for UserId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// User struct representing a user in the database
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct User {
    /// Unique user ID
    pub id: UserId,
    /// Username (unique, 3-21 ASCII letters)
    pub username: String,
    /// bcrypt hash of the password
    pub password_hash: String,
    /// Created at timestamp
    pub created_at: DateTime<Utc>,
}

/// Get user by username
///
/// # Returns
/// User or None if not found
pub async fn get_user_by_username(
    conn: &mut SqliteConnection,
    username: &str,
) -> Result<Option<User>, sqlx::Error> {
    sqlx::query_as::<_, User>(
        r#"
        SELECT id, username, password_hash, created_at
        FROM users
        WHERE username = ?1
        "#,
    )
    .bind(username)
    .fetch_optional(&mut *conn)
    .await
}

/// Find the user a username/password pair belongs to
///
/// Fetches the stored hash for `username` and verifies `password` against
/// it. An unknown username and a wrong password both yield `None`, and both
/// cost one bcrypt verification: an unknown username is checked against the
/// hasher's decoy hash.
///
/// # Errors
///
/// * `Query` - the lookup itself failed
/// * `Verification` - the stored hash is unusable
pub async fn find_user_id(
    conn: &mut SqliteConnection,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<Option<UserId>, AuthError> {
    let Some(user) = get_user_by_username(conn, username)
        .await
        .map_err(AuthError::Query)?
    else {
        hasher
            .verify_decoy(password)
            .await
            .map_err(AuthError::Verification)?;
        return Ok(None);
    };

    let matches = hasher
        .verify(password, &user.password_hash)
        .await
        .map_err(AuthError::Verification)?;

    Ok(matches.then_some(user.id))
}

/// Create a new user
///
/// # Arguments
/// * `conn` - Database connection
/// * `username` - User's chosen username
/// * `password_hash` - Hashed password
///
/// # Returns
/// Created user or error
pub async fn create_user(
    conn: &mut SqliteConnection,
    username: &str,
    password_hash: &str,
) -> Result<User, sqlx::Error> {
    let id = UserId::generate();
    let now = Utc::now();

    sqlx::query_as::<_, User>(
        r#"
        INSERT INTO users (id, username, password_hash, created_at)
        VALUES (?1, ?2, ?3, ?4)
        RETURNING id, username, password_hash, created_at
        "#,
    )
    .bind(&id)
    .bind(username)
    .bind(password_hash)
    .bind(now)
    .fetch_one(&mut *conn)
    .await
}

/// Validate, hash and store a new user
///
/// Applies the same username and password rules as sign-in, so every
/// provisioned user can actually sign in.
pub async fn provision_user(
    pool: &SqlitePool,
    hasher: &PasswordHasher,
    username: &str,
    password: &str,
) -> Result<User, ProvisionError> {
    validate_sign_in(Some(username), Some(password)).map_err(ProvisionError::Invalid)?;

    let password_hash = hasher.hash(password).await?;

    let mut conn = pool.acquire().await.map_err(ProvisionError::Storage)?;
    create_user(&mut conn, username, &password_hash)
        .await
        .map_err(|e| match e {
            sqlx::Error::Database(db) if db.is_unique_violation() => {
                ProvisionError::UserExists(username.to_string())
            }
            other => ProvisionError::Storage(other),
        })
}
