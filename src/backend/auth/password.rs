/**
 * Password Hashing
 *
 * Wraps bcrypt. Hashes are self-describing (`$2b$<cost>$<salt><digest>`),
 * so verification reads the cost and salt back out of the stored hash and
 * compares in constant time. Never hash a submitted password and compare
 * the result to a stored hash: the fresh salt makes that always fail.
 *
 * bcrypt is deliberately slow, so both operations run on tokio's blocking
 * thread pool.
 *
 * # Decoy Verification
 *
 * A sign-in for an unknown username must take as long as one with a wrong
 * password. The hasher keeps a decoy hash at its own cost and
 * [`PasswordHasher::verify_decoy`] checks the submitted password against
 * it, so both paths pay for exactly one bcrypt verification.
 */

use std::sync::Arc;

use thiserror::Error;
use tokio::sync::OnceCell;
use tokio::task::JoinError;

pub use crate::shared::config::DEFAULT_PASSWORD_COST;

/// Password hashing or verification failure
#[derive(Debug, Error)]
pub enum PasswordError {
    /// bcrypt rejected the input or the stored hash
    #[error("bcrypt error: {0}")]
    Bcrypt(#[from] bcrypt::BcryptError),

    /// The blocking hash task did not complete
    #[error("hashing task failed: {0}")]
    Task(#[from] JoinError),
}

/// Password the decoy hash is built from; it is never compared for a real user
const DECOY_PASSWORD: &str = "tokengate-decoy-password";

/// bcrypt password hasher with a fixed cost factor
///
/// Clones share one decoy hash.
#[derive(Debug, Clone)]
pub struct PasswordHasher {
    cost: u32,
    decoy: Arc<OnceCell<String>>,
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new(DEFAULT_PASSWORD_COST)
    }
}

impl PasswordHasher {
    pub fn new(cost: u32) -> Self {
        Self {
            cost,
            decoy: Arc::new(OnceCell::new()),
        }
    }

    pub fn cost(&self) -> u32 {
        self.cost
    }

    /// Hash a password with a fresh random salt
    pub async fn hash(&self, password: &str) -> Result<String, PasswordError> {
        let password = password.to_owned();
        let cost = self.cost;
        let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(password, cost)).await??;
        Ok(hashed)
    }

    /// Verify a password against a stored hash
    ///
    /// # Returns
    ///
    /// `Ok(false)` on mismatch. An `Err` means the stored hash itself is
    /// unusable.
    pub async fn verify(&self, password: &str, stored_hash: &str) -> Result<bool, PasswordError> {
        let password = password.to_owned();
        let stored_hash = stored_hash.to_owned();
        let matches =
            tokio::task::spawn_blocking(move || bcrypt::verify(password, &stored_hash)).await??;
        Ok(matches)
    }

    /// Build the decoy hash ahead of the first unknown-user sign-in
    pub async fn prepare_decoy(&self) -> Result<(), PasswordError> {
        self.decoy_hash().await.map(|_| ())
    }

    /// Verify `password` against the decoy hash and discard the outcome
    ///
    /// Spends the same bcrypt work as [`PasswordHasher::verify`] against a
    /// stored hash of this hasher's cost.
    pub async fn verify_decoy(&self, password: &str) -> Result<(), PasswordError> {
        let decoy = self.decoy_hash().await?.to_owned();
        self.verify(password, &decoy).await?;
        Ok(())
    }

    /// Whether the decoy hash has been built
    pub fn decoy_ready(&self) -> bool {
        self.decoy.initialized()
    }

    async fn decoy_hash(&self) -> Result<&str, PasswordError> {
        self.decoy
            .get_or_try_init(|| self.hash(DECOY_PASSWORD))
            .await
            .map(String::as_str)
    }
}
