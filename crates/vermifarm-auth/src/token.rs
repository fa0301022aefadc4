//! Opaque token generation.
//!
//! Tokens are random alphanumeric strings. They are identifiers, not signed
//! credentials; every token is validated against server-side state on use.

use rand::distributions::Alphanumeric;
use rand::Rng;

/// Generate a random alphanumeric token of the given length.
pub fn generate_token(length: usize) -> String {
    rand::thread_rng()
        .sample_iter(&Alphanumeric)
        .take(length)
        .map(char::from)
        .collect()
}
