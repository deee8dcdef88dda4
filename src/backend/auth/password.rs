/**
 * Password Hashing
 *
 * One-way salted bcrypt hashing with a fixed cost of 10 rounds. Both
 * operations run on the blocking thread pool so a hash never stalls the
 * async workers serving other requests.
 */

use crate::backend::error::BackendError;

/// bcrypt work factor
pub const HASH_COST: u32 = 10;

/// Hash a plaintext password
pub async fn hash_password(plaintext: &str) -> Result<String, BackendError> {
    let plaintext = plaintext.to_owned();
    let hashed = tokio::task::spawn_blocking(move || bcrypt::hash(plaintext, HASH_COST)).await??;
    Ok(hashed)
}

/// Check a plaintext password against a stored hash
///
/// A malformed stored hash is an error, not a mismatch.
pub async fn verify_password(plaintext: &str, hash: &str) -> Result<bool, BackendError> {
    let plaintext = plaintext.to_owned();
    let hash = hash.to_owned();
    let matched = tokio::task::spawn_blocking(move || bcrypt::verify(plaintext, &hash)).await??;
    Ok(matched)
}
