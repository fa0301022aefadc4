// Vermi-Farm Authentication Library
// Provides password hashing, credential/OTP verification, lockout tracking,
// session management, and the bounded security-event log.

pub mod error;
pub mod login_tracker;
pub mod password;
pub mod security_log;
pub mod service;
pub mod session;
pub mod token;
pub mod user_repo;
pub mod verifier;

// Re-export commonly used types
pub use error::{AuthError, AuthResult};
pub use security_log::SecurityLog;
pub use service::{AuthService, LoginOutcome, OtpChallenge};
pub use session::{Session, SessionManager, SweeperHandle};
pub use user_repo::{InMemoryUserRepo, UserRepository};
pub use verifier::{CredentialVerifier, MockVerifier};
