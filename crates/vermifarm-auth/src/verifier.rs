//! Abstract credential and OTP verification.
//!
//! The dashboard has no real backend: verification is mocked. Putting the
//! checks behind [`CredentialVerifier`] keeps the rest of the flow oblivious
//! to that, so a real backend can be swapped in without touching the login
//! state machine.

use crate::error::AuthResult;
use crate::password;
use vermifarm_commons::PhoneNumber;

/// Verifies first-factor credentials and second-factor OTP codes.
#[async_trait::async_trait]
pub trait CredentialVerifier: Send + Sync {
    /// Check a phone/password pair. `Ok(false)` means a clean mismatch;
    /// `Err` is reserved for infrastructure failures.
    async fn verify_credentials(&self, phone: &PhoneNumber, password: &str) -> AuthResult<bool>;

    /// Check an OTP code for the given phone.
    async fn verify_otp(&self, phone: &PhoneNumber, code: &str) -> AuthResult<bool>;
}

/// Mock verifier holding one fixed credential pair and one fixed OTP code.
///
/// The password is bcrypt-hashed at construction so the verification path is
/// the same one a real backend would use.
pub struct MockVerifier {
    phone: PhoneNumber,
    password_hash: String,
    otp_code: String,
}

impl MockVerifier {
    /// Build a verifier accepting exactly `phone`/`password` and `otp_code`.
    ///
    /// The password must satisfy the length policy and is hashed inline with
    /// a low cost factor; this runs once at bootstrap with mock credentials,
    /// not on a request path.
    pub fn new(phone: PhoneNumber, password: &str, otp_code: &str) -> AuthResult<Self> {
        let password_hash = password::hash_password(password, Some(6))?;
        Ok(Self {
            phone,
            password_hash,
            otp_code: otp_code.to_string(),
        })
    }

    /// The phone number this verifier accepts.
    pub fn phone(&self) -> &PhoneNumber {
        &self.phone
    }

    /// The bcrypt hash of the accepted password, for seeding user records.
    pub fn password_hash(&self) -> &str {
        &self.password_hash
    }
}

#[async_trait::async_trait]
impl CredentialVerifier for MockVerifier {
    async fn verify_credentials(&self, phone: &PhoneNumber, given: &str) -> AuthResult<bool> {
        if phone != &self.phone {
            return Ok(false);
        }
        password::verify_password(given, &self.password_hash).await
    }

    async fn verify_otp(&self, _phone: &PhoneNumber, code: &str) -> AuthResult<bool> {
        Ok(code == self.otp_code)
    }
}
