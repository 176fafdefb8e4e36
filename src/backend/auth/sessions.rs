/**
 * Session Token Generation and Issuance
 *
 * This module mints the opaque bearer tokens handed out on sign-in and
 * persists them next to the user they belong to.
 *
 * # Token Format
 *
 * 128 characters, each drawn independently and uniformly from the 62
 * characters `[0-9a-zA-Z]` using the operating system's CSPRNG.
 *
 * # Uniqueness
 *
 * A candidate is checked against the token table before it is inserted, and
 * the table's primary key rejects a concurrent duplicate insert. Both kinds
 * of collision discard the candidate and generate a new one, up to a fixed
 * number of attempts.
 *
 * # Atomicity
 *
 * [`TokenIssuer::issue_pending`] runs the check and the insert inside a
 * `BEGIN IMMEDIATE` transaction and hands back a [`PendingToken`]. The token
 * is persisted only when that is committed. Dropping it, or cancelling the
 * future that would have produced it, queues a rollback behind whatever
 * statement is still running on the connection.
 */

use chrono::Utc;
use rand::distributions::Alphanumeric;
use rand::rngs::OsRng;
use rand::Rng;
use sqlx::{Connection, Sqlite, SqliteConnection, Transaction};

use crate::backend::auth::users::UserId;
use crate::backend::error::AuthError;

pub use crate::shared::config::DEFAULT_MAX_TOKEN_ATTEMPTS;

/// Length of every issued token
pub const TOKEN_LENGTH: usize = 128;

/// Characters a token is drawn from
pub const TOKEN_ALPHABET: &str = "0123456789abcdefghijklmnopqrstuvwxyzABCDEFGHIJKLMNOPQRSTUVWXYZ";

/// Source of candidate tokens
pub trait TokenSource {
    /// Produce the next candidate
    fn generate(&mut self) -> String;
}

/// Cryptographically random token generator
#[derive(Debug, Clone, Copy, Default)]
pub struct TokenGenerator;

impl TokenSource for TokenGenerator {
    fn generate(&mut self) -> String {
        OsRng
            .sample_iter(&Alphanumeric)
            .take(TOKEN_LENGTH)
            .map(char::from)
            .collect()
    }
}

/// Whether `token` has the shape of an issued token
pub fn is_well_formed(token: &str) -> bool {
    token.len() == TOKEN_LENGTH && token.bytes().all(|b| b.is_ascii_alphanumeric())
}

/// Issues unique tokens and persists them
#[derive(Debug, Clone, Copy)]
pub struct TokenIssuer {
    max_attempts: u32,
}

impl Default for TokenIssuer {
    fn default() -> Self {
        Self::new(DEFAULT_MAX_TOKEN_ATTEMPTS)
    }
}

impl TokenIssuer {
    /// `max_attempts` is clamped to at least one
    pub fn new(max_attempts: u32) -> Self {
        Self {
            max_attempts: max_attempts.max(1),
        }
    }

    pub fn max_attempts(&self) -> u32 {
        self.max_attempts
    }

    /// Issue a token bound to `user_id`
    ///
    /// # Process
    ///
    /// 1. Generate a candidate from `source`
    /// 2. Skip it if it is already stored
    /// 3. Insert `(token, user_id)`; a unique violation counts as a collision
    ///
    /// # Errors
    ///
    /// * `TokenCheck` - the existence check failed
    /// * `TokenInsert` - the insert failed for a reason other than a collision
    /// * `TokenExhausted` - every attempt collided
    pub async fn issue<S>(
        &self,
        conn: &mut SqliteConnection,
        source: &mut S,
        user_id: &UserId,
    ) -> Result<String, AuthError>
    where
        S: TokenSource + ?Sized,
    {
        for attempt in 1..=self.max_attempts {
            let candidate = source.generate();

            if token_exists(conn, &candidate)
                .await
                .map_err(AuthError::TokenCheck)?
            {
                tracing::warn!("Token collision on check (attempt {})", attempt);
                continue;
            }

            match insert_token(conn, &candidate, user_id).await {
                Ok(()) => return Ok(candidate),
                Err(sqlx::Error::Database(db)) if db.is_unique_violation() => {
                    tracing::warn!("Token collision on insert (attempt {})", attempt);
                }
                Err(e) => return Err(AuthError::TokenInsert(e)),
            }
        }

        Err(AuthError::TokenExhausted {
            attempts: self.max_attempts,
        })
    }

    /// Issue a token inside a write transaction left open for the caller
    ///
    /// # Errors
    ///
    /// As [`TokenIssuer::issue`]; failing to open the transaction is a
    /// `TokenCheck` error.
    pub async fn issue_pending<'c, S>(
        &self,
        conn: &'c mut SqliteConnection,
        source: &mut S,
        user_id: &UserId,
    ) -> Result<PendingToken<'c>, AuthError>
    where
        S: TokenSource + ?Sized,
    {
        let mut tx = conn
            .begin_with("BEGIN IMMEDIATE")
            .await
            .map_err(AuthError::TokenCheck)?;
        let token = self.issue(&mut tx, source, user_id).await?;
        Ok(PendingToken { token, tx })
    }
}

/// A token inserted but not yet committed
#[must_use = "the token is rolled back unless committed"]
pub struct PendingToken<'c> {
    token: String,
    tx: Transaction<'c, Sqlite>,
}

impl PendingToken<'_> {
    /// Commit the insert and release the token to the caller
    pub async fn commit(self) -> Result<String, AuthError> {
        self.tx.commit().await.map_err(AuthError::TokenInsert)?;
        Ok(self.token)
    }
}

async fn token_exists(conn: &mut SqliteConnection, token: &str) -> Result<bool, sqlx::Error> {
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM tokens WHERE token = ?1")
        .bind(token)
        .fetch_one(&mut *conn)
        .await?;
    Ok(count > 0)
}

async fn insert_token(
    conn: &mut SqliteConnection,
    token: &str,
    user_id: &UserId,
) -> Result<(), sqlx::Error> {
    sqlx::query("INSERT INTO tokens (token, user_id, created_at) VALUES (?1, ?2, ?3)")
        .bind(token)
        .bind(user_id)
        .bind(Utc::now())
        .execute(&mut *conn)
        .await?;
    Ok(())
}

/// Look up the user a token was issued to
///
/// Read path for session validation. Malformed tokens are rejected
/// without touching storage.
pub async fn find_token_owner(
    conn: &mut SqliteConnection,
    token: &str,
) -> Result<Option<UserId>, sqlx::Error> {
    if !is_well_formed(token) {
        return Ok(None);
    }
    sqlx::query_scalar::<_, UserId>("SELECT user_id FROM tokens WHERE token = ?1")
        .bind(token)
        .fetch_optional(&mut *conn)
        .await
}
