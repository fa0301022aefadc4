// Password hashing and validation module

use crate::error::{AuthError, AuthResult};
use bcrypt::{hash, verify, DEFAULT_COST};

/// Bcrypt cost factor for password hashing.
pub const BCRYPT_COST: u32 = DEFAULT_COST;

/// Minimum password length
pub const MIN_PASSWORD_LENGTH: usize = 8;

/// Maximum password length (bcrypt has a 72-byte limit)
pub const MAX_PASSWORD_LENGTH: usize = 72;

/// Hash a password using bcrypt, enforcing the length policy first.
///
/// Hashing only happens at bootstrap when the credential directory is
/// seeded, so this stays synchronous; request-path verification goes
/// through [`verify_password`] on the blocking pool.
///
/// # Errors
/// Returns `AuthError::WeakPassword` when the policy is violated and
/// `AuthError::Internal` if bcrypt fails.
pub fn hash_password(password: &str, cost: Option<u32>) -> AuthResult<String> {
    validate_password(password)?;
    hash(password, cost.unwrap_or(BCRYPT_COST)).map_err(|e| AuthError::Internal(e.to_string()))
}

/// Verify a password against a bcrypt hash.
///
/// Runs on a blocking thread pool to avoid stalling the async runtime.
///
/// # Returns
/// `Ok(true)` if password matches, `Ok(false)` if not, `Err` on failure
pub async fn verify_password(password: &str, hash: &str) -> AuthResult<bool> {
    let password = password.to_string();
    let hash = hash.to_string();

    tokio::task::spawn_blocking(move || {
        verify(password, &hash).map_err(|e| AuthError::Internal(e.to_string()))
    })
    .await
    .map_err(|e| AuthError::Internal(format!("Task join error: {}", e)))?
}

/// Validate password meets length requirements.
///
/// # Errors
/// Returns `AuthError::WeakPassword` with the specific reason.
pub fn validate_password(password: &str) -> AuthResult<()> {
    if password.len() < MIN_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at least {} characters",
            MIN_PASSWORD_LENGTH
        )));
    }

    if password.len() > MAX_PASSWORD_LENGTH {
        return Err(AuthError::WeakPassword(format!(
            "Password must be at most {} characters",
            MAX_PASSWORD_LENGTH
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn hash_and_verify_round_trip() {
        // Low cost keeps the test fast
        let hash = hash_password("admin123!", Some(4)).unwrap();
        assert!(hash.starts_with("$2"));
        assert!(verify_password("admin123!", &hash).await.unwrap());
        assert!(!verify_password("admin124!", &hash).await.unwrap());
    }

    #[test]
    fn hashing_rejects_passwords_outside_the_policy() {
        assert!(matches!(
            hash_password("short", Some(4)),
            Err(AuthError::WeakPassword(_))
        ));
    }

    #[test]
    fn length_policy() {
        assert!(validate_password("short").is_err());
        assert!(validate_password(&"x".repeat(MAX_PASSWORD_LENGTH + 1)).is_err());
        assert!(validate_password("long-enough").is_ok());
    }
}
