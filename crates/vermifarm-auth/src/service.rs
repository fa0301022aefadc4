//! The login flow state machine.
//!
//! `AuthService` is the single entry point for the whole authentication
//! flow: password check, lockout tracking, OTP challenge, session creation,
//! and logout. It owns no global state; everything is injected at
//! construction and shared via `Arc`.
//!
//! Flow:
//!
//! ```text
//! begin_login ── invalid phone ──────────────────────► InvalidPhoneFormat
//!      │
//!      ├─ active lockout window ──────────────────────► AccountLocked
//!      ├─ wrong password (3rd failure locks) ─────────► InvalidCredentials
//!      │
//!      ├─ ok, 2FA off ───────────────────────────────► Authenticated
//!      └─ ok, 2FA on ──► OtpRequired {temp_token}
//!                              │
//!                              ├─ wrong code ×3 ──────► OtpMaxAttempts (token discarded)
//!                              ├─ deadline passed ────► OtpExpired
//!                              └─ correct code ───────► Authenticated
//! ```

use crate::error::{AuthError, AuthResult};
use crate::login_tracker::LoginTracker;
use crate::security_log::SecurityLog;
use crate::session::{Session, SessionManager};
use crate::token::generate_token;
use crate::user_repo::UserRepository;
use crate::verifier::CredentialVerifier;
use chrono::Utc;
use moka::sync::Cache;
use std::sync::Arc;
use tracing::Instrument;
use vermifarm_commons::{
    AuthConstants, ConnectionInfo, PhoneNumber, SecurityEvent, SecurityEventKind, User,
};
use vermifarm_configs::AuthSettings;

/// A password-verified login waiting for its OTP step.
#[derive(Debug, Clone)]
struct PendingLogin {
    phone: PhoneNumber,
    attempts: u32,
    /// Wall-clock deadline (ms); the countdown is re-derived on each access.
    code_expires_at: i64,
    /// Earliest wall-clock time (ms) a resend is allowed.
    resend_available_at: i64,
}

/// Outcome of a successful `begin_login`.
#[derive(Debug, Clone)]
pub enum LoginOutcome {
    /// Password accepted; an OTP challenge must be completed.
    OtpRequired(OtpChallenge),
    /// Password accepted and two-factor is disabled for the account.
    Authenticated(Session),
}

/// OTP challenge handed back to the client.
#[derive(Debug, Clone)]
pub struct OtpChallenge {
    pub temp_token: String,
    pub expires_in_seconds: u64,
}

/// The authentication service.
pub struct AuthService {
    verifier: Arc<dyn CredentialVerifier>,
    repo: Arc<dyn UserRepository>,
    tracker: LoginTracker,
    sessions: Arc<SessionManager>,
    security_log: Arc<SecurityLog>,
    pending: Cache<String, PendingLogin>,
    settings: AuthSettings,
}

impl AuthService {
    pub fn new(
        verifier: Arc<dyn CredentialVerifier>,
        repo: Arc<dyn UserRepository>,
        sessions: Arc<SessionManager>,
        security_log: Arc<SecurityLog>,
        settings: AuthSettings,
    ) -> Self {
        // Cache TTL is a backstop; the real deadline lives in the entry and
        // is checked explicitly so a just-expired entry still reports
        // OtpExpired rather than UnknownTempToken.
        let pending = Cache::builder()
            .max_capacity(10_000)
            .time_to_live(settings.otp_ttl() * 2)
            .build();
        Self {
            verifier,
            repo,
            tracker: LoginTracker::new(&settings),
            sessions,
            security_log,
            pending,
            settings,
        }
    }

    /// First step: validate the phone format, enforce lockout, and verify
    /// the password.
    pub async fn begin_login(
        &self,
        phone_raw: &str,
        password: &str,
        conn: &ConnectionInfo,
    ) -> AuthResult<LoginOutcome> {
        let span = tracing::info_span!("auth.login", phone = phone_raw);
        self.begin_login_inner(phone_raw, password, conn)
            .instrument(span)
            .await
    }

    async fn begin_login_inner(
        &self,
        phone_raw: &str,
        password: &str,
        conn: &ConnectionInfo,
    ) -> AuthResult<LoginOutcome> {
        // Format gate: nothing is attempted for a malformed phone.
        let phone = PhoneNumber::parse(phone_raw).map_err(|_| AuthError::InvalidPhoneFormat)?;

        let mut user = match self.repo.get_user_by_phone(&phone).await {
            Ok(user) => user,
            Err(AuthError::UserNotFound(_)) => {
                // Generic message prevents account enumeration.
                log::debug!("Login attempt for unknown phone");
                self.security_log.record(
                    SecurityEvent::now(
                        SecurityEventKind::LoginFailed,
                        None,
                        Some(phone.as_str().to_string()),
                    )
                    .with_connection(conn),
                );
                return Err(AuthError::InvalidCredentials);
            }
            Err(e) => return Err(e),
        };

        let now_ms = Utc::now().timestamp_millis();
        self.tracker
            .clear_expired_lockout(&mut user, &self.repo, now_ms)
            .await?;
        self.tracker.check_lockout(&user, now_ms)?;

        if !self.verifier.verify_credentials(&phone, password).await? {
            tracing::warn!(phone = phone.as_str(), "Password verification failed");
            let locked = self.tracker.record_failed_login(&mut user, &self.repo).await?;
            self.security_log.record(
                SecurityEvent::now(
                    SecurityEventKind::LoginFailed,
                    Some(user.user_id.clone()),
                    Some(phone.as_str().to_string()),
                )
                .with_connection(conn),
            );
            if locked {
                self.security_log.record(
                    SecurityEvent::now(
                        SecurityEventKind::AccountLocked,
                        Some(user.user_id.clone()),
                        Some(phone.as_str().to_string()),
                    )
                    .with_connection(conn),
                );
                let remaining = user
                    .lockout_remaining_ms(Utc::now().timestamp_millis())
                    .unwrap_or(0);
                return Err(AuthError::AccountLocked {
                    retry_after_seconds: (remaining as u64).div_ceil(1000),
                });
            }
            return Err(AuthError::InvalidCredentials);
        }

        if !user.two_factor_enabled {
            return self.complete_login(user, conn).await.map(LoginOutcome::Authenticated);
        }

        // Opaque token linking this password check to the OTP step.
        let temp_token = generate_token(AuthConstants::TEMP_TOKEN_LENGTH);
        let now_ms = Utc::now().timestamp_millis();
        self.pending.insert(
            temp_token.clone(),
            PendingLogin {
                phone,
                attempts: 0,
                code_expires_at: now_ms + self.settings.otp_ttl().as_millis() as i64,
                resend_available_at: now_ms
                    + self.settings.otp_resend_cooldown().as_millis() as i64,
            },
        );
        tracing::debug!("Password accepted, OTP challenge issued");
        Ok(LoginOutcome::OtpRequired(OtpChallenge {
            temp_token,
            expires_in_seconds: self.settings.otp_ttl().as_secs(),
        }))
    }

    /// Second step: verify the OTP code for a pending login.
    pub async fn verify_otp(
        &self,
        temp_token: &str,
        code: &str,
        conn: &ConnectionInfo,
    ) -> AuthResult<Session> {
        let mut pending = self
            .pending
            .get(temp_token)
            .ok_or(AuthError::UnknownTempToken)?;

        let now_ms = Utc::now().timestamp_millis();
        if now_ms >= pending.code_expires_at {
            self.pending.invalidate(temp_token);
            return Err(AuthError::OtpExpired);
        }

        // Anything that is not exactly six digits is ignored without
        // consuming an attempt (mirrors the entry widget rejecting bad
        // pastes before submission).
        if code.len() != AuthConstants::OTP_CODE_LENGTH
            || !code.bytes().all(|b| b.is_ascii_digit())
        {
            let remaining = self.settings.otp_max_attempts - pending.attempts;
            return Err(AuthError::OtpInvalid {
                remaining_attempts: remaining,
            });
        }

        if !self.verifier.verify_otp(&pending.phone, code).await? {
            pending.attempts += 1;
            if pending.attempts >= self.settings.otp_max_attempts {
                // Temporary token is discarded; the flow must restart.
                self.pending.invalidate(temp_token);
                tracing::warn!(phone = pending.phone.as_str(), "OTP attempt limit reached");
                return Err(AuthError::OtpMaxAttempts);
            }
            let remaining = self.settings.otp_max_attempts - pending.attempts;
            self.pending.insert(temp_token.to_string(), pending);
            return Err(AuthError::OtpInvalid {
                remaining_attempts: remaining,
            });
        }

        self.pending.invalidate(temp_token);
        let user = self.repo.get_user_by_phone(&pending.phone).await?;
        self.complete_login(user, conn).await
    }

    /// Re-issue the OTP challenge for a pending login, gated by the resend
    /// cooldown. The attempt counter starts over for the fresh code.
    pub fn resend_otp(&self, temp_token: &str) -> AuthResult<OtpChallenge> {
        let mut pending = self
            .pending
            .get(temp_token)
            .ok_or(AuthError::UnknownTempToken)?;

        let now_ms = Utc::now().timestamp_millis();
        if now_ms < pending.resend_available_at {
            return Err(AuthError::OtpResendCooldown {
                retry_after_seconds: ((pending.resend_available_at - now_ms) as u64)
                    .div_ceil(1000),
            });
        }

        pending.attempts = 0;
        pending.code_expires_at = now_ms + self.settings.otp_ttl().as_millis() as i64;
        pending.resend_available_at =
            now_ms + self.settings.otp_resend_cooldown().as_millis() as i64;
        self.pending.insert(temp_token.to_string(), pending);
        log::info!("OTP re-issued for pending login");
        Ok(OtpChallenge {
            temp_token: temp_token.to_string(),
            expires_in_seconds: self.settings.otp_ttl().as_secs(),
        })
    }

    /// Validate a session token and register activity on it.
    pub fn authenticate_session(&self, session_token: &str) -> AuthResult<Session> {
        self.sessions.authenticate(session_token)
    }

    /// End a session. Returns whether the token was active.
    pub fn logout(&self, session_token: &str, conn: &ConnectionInfo) -> AuthResult<bool> {
        self.sessions.end_session(session_token, conn)
    }

    /// Shared session manager (for the sweeper and diagnostics).
    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    /// Shared security log.
    pub fn security_log(&self) -> &Arc<SecurityLog> {
        &self.security_log
    }

    /// Shared user directory.
    pub fn user_repo(&self) -> &Arc<dyn UserRepository> {
        &self.repo
    }

    async fn complete_login(&self, mut user: User, conn: &ConnectionInfo) -> AuthResult<Session> {
        self.tracker
            .record_successful_login(&mut user, &self.repo)
            .await?;
        let session = self.sessions.create_session(&user)?;
        self.security_log.record(
            SecurityEvent::now(
                SecurityEventKind::LoginSuccess,
                Some(user.user_id.clone()),
                Some(user.phone.as_str().to_string()),
            )
            .with_connection(conn),
        );
        tracing::debug!(phone = user.phone.as_str(), role = ?user.role, "Login completed");
        Ok(session)
    }
}
