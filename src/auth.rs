use axum::extract::FromRef;
use sha2::{Digest, Sha256};
use sqlx::SqlitePool;

/// Unsalted SHA-256 digest, hex encoded. Stored digests depend on this exact
/// format, so identical passwords always share a digest.
pub fn hash_password(password: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(password.as_bytes());
    hex::encode(hasher.finalize())
}

pub fn verify_password(password: &str, hash: &str) -> bool {
    hash_password(password) == hash
}

#[derive(Clone)]
pub struct AppState {
    pub pool: SqlitePool,
}

impl FromRef<AppState> for SqlitePool {
    fn from_ref(state: &AppState) -> Self {
        state.pool.clone()
    }
}
