//! Failed-login tracking and account lockout.
//!
//! Attempt counts and lockout deadlines live on the user record itself, so
//! the invariant (at most one active window per user, attempts reset on
//! success or on window expiry) is enforced in one place.

use crate::error::{AuthError, AuthResult};
use crate::user_repo::UserRepository;
use chrono::Utc;
use std::sync::Arc;
use vermifarm_configs::AuthSettings;
use vermifarm_commons::User;

/// Tracks failed logins and manages lockout windows.
///
/// Owned by `AuthService`; not a process-wide singleton.
pub struct LoginTracker {
    max_attempts: u32,
    lockout_ms: i64,
}

impl LoginTracker {
    pub fn new(settings: &AuthSettings) -> Self {
        Self {
            max_attempts: settings.max_login_attempts,
            lockout_ms: settings.lockout_duration().as_millis() as i64,
        }
    }

    /// Reject while a lockout window is active.
    ///
    /// The countdown is re-derived from the stored deadline on every call;
    /// nothing ticks in the background.
    pub fn check_lockout(&self, user: &User, now_ms: i64) -> AuthResult<()> {
        if let Some(remaining) = user.lockout_remaining_ms(now_ms) {
            return Err(AuthError::AccountLocked {
                retry_after_seconds: (remaining as u64).div_ceil(1000),
            });
        }
        Ok(())
    }

    /// Clear an expired lockout window, resetting the attempt counter.
    ///
    /// Returns true when a stale window was actually cleared.
    pub async fn clear_expired_lockout(
        &self,
        user: &mut User,
        repo: &Arc<dyn UserRepository>,
        now_ms: i64,
    ) -> AuthResult<bool> {
        match user.locked_until {
            Some(until) if until <= now_ms => {
                user.locked_until = None;
                user.failed_login_attempts = 0;
                user.updated_at = now_ms;
                repo.update_user(user).await?;
                Ok(true)
            }
            _ => Ok(false),
        }
    }

    /// Record a failed attempt. Returns true when this failure locked the
    /// account (the caller emits the `account_locked` security event).
    pub async fn record_failed_login(
        &self,
        user: &mut User,
        repo: &Arc<dyn UserRepository>,
    ) -> AuthResult<bool> {
        let now_ms = Utc::now().timestamp_millis();
        user.failed_login_attempts += 1;
        let locked = user.failed_login_attempts >= self.max_attempts;
        if locked {
            user.locked_until = Some(now_ms + self.lockout_ms);
            log::warn!(
                "Account {} locked after {} failed attempts",
                user.phone,
                user.failed_login_attempts
            );
        }
        user.updated_at = now_ms;
        repo.update_user(user).await?;
        Ok(locked)
    }

    /// Record a successful login: reset the counter, clear any window, and
    /// stamp `last_login_at`.
    pub async fn record_successful_login(
        &self,
        user: &mut User,
        repo: &Arc<dyn UserRepository>,
    ) -> AuthResult<()> {
        let now_ms = Utc::now().timestamp_millis();
        user.failed_login_attempts = 0;
        user.locked_until = None;
        user.last_login_at = Some(now_ms);
        user.updated_at = now_ms;
        repo.update_user(user).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::user_repo::InMemoryUserRepo;
    use vermifarm_commons::{PhoneNumber, Role, UserId};

    fn seed_user() -> User {
        User {
            user_id: UserId::generate(),
            name: "Test Admin".to_string(),
            phone: PhoneNumber::parse("0712345678").unwrap(),
            role: Role::SuperAdmin,
            password_hash: String::new(),
            two_factor_enabled: true,
            email_verified: true,
            failed_login_attempts: 0,
            locked_until: None,
            last_login_at: None,
            created_at: 0,
            updated_at: 0,
        }
    }

    fn tracker() -> LoginTracker {
        LoginTracker::new(&AuthSettings::default())
    }

    #[tokio::test]
    async fn third_failure_locks_the_account() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepo::new(vec![seed_user()]));
        let tracker = tracker();
        let phone = PhoneNumber::parse("0712345678").unwrap();

        let mut user = repo.get_user_by_phone(&phone).await.unwrap();
        assert!(!tracker.record_failed_login(&mut user, &repo).await.unwrap());
        assert!(!tracker.record_failed_login(&mut user, &repo).await.unwrap());
        assert!(tracker.record_failed_login(&mut user, &repo).await.unwrap());

        let user = repo.get_user_by_phone(&phone).await.unwrap();
        let now_ms = Utc::now().timestamp_millis();
        assert!(user.is_locked(now_ms));
        assert!(matches!(
            tracker.check_lockout(&user, now_ms),
            Err(AuthError::AccountLocked { .. })
        ));
    }

    #[tokio::test]
    async fn expired_window_resets_attempts() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepo::new(vec![seed_user()]));
        let tracker = tracker();
        let phone = PhoneNumber::parse("0712345678").unwrap();
        let now_ms = Utc::now().timestamp_millis();

        let mut user = repo.get_user_by_phone(&phone).await.unwrap();
        user.failed_login_attempts = 3;
        user.locked_until = Some(now_ms - 1_000);
        repo.update_user(&user).await.unwrap();

        // Deadline already passed, so the lock check passes and the stale
        // window can be cleared.
        assert!(tracker.check_lockout(&user, now_ms).is_ok());
        assert!(tracker
            .clear_expired_lockout(&mut user, &repo, now_ms)
            .await
            .unwrap());

        let user = repo.get_user_by_phone(&phone).await.unwrap();
        assert_eq!(user.failed_login_attempts, 0);
        assert_eq!(user.locked_until, None);
    }

    #[tokio::test]
    async fn success_clears_counter_and_stamps_last_login() {
        let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepo::new(vec![seed_user()]));
        let tracker = tracker();
        let phone = PhoneNumber::parse("0712345678").unwrap();

        let mut user = repo.get_user_by_phone(&phone).await.unwrap();
        tracker.record_failed_login(&mut user, &repo).await.unwrap();
        tracker
            .record_successful_login(&mut user, &repo)
            .await
            .unwrap();

        let user = repo.get_user_by_phone(&phone).await.unwrap();
        assert_eq!(user.failed_login_attempts, 0);
        assert!(user.last_login_at.is_some());
    }
}
