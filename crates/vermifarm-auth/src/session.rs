//! Session store and inactivity expiry.
//!
//! Any authenticated request counts as activity and pushes the idle deadline
//! out; a background sweeper task evicts sessions that stay idle past the
//! configured timeout. Eviction and explicit logout both remove the session
//! under the write lock, so the logout security event for a session is
//! recorded exactly once.

use crate::error::{AuthError, AuthResult};
use crate::security_log::SecurityLog;
use crate::token;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::{Arc, RwLock};
use std::time::{Duration, Instant};
use tokio::task::JoinHandle;
use vermifarm_commons::{
    AuthConstants, ConnectionInfo, Role, SecurityEvent, SecurityEventKind, User, UserId,
};

/// An authenticated session.
#[derive(Debug, Clone)]
pub struct Session {
    pub token: String,
    pub user_id: UserId,
    pub phone: vermifarm_commons::PhoneNumber,
    pub name: String,
    pub role: Role,
    /// Unix timestamp in milliseconds.
    pub created_at: i64,
    /// Last observed activity, used for idle expiry.
    pub last_seen: Instant,
}

/// Abortable handle for the background session sweeper.
///
/// Held by the server lifecycle and aborted during graceful shutdown so no
/// timer outlives the process teardown.
pub struct SweeperHandle {
    handle: JoinHandle<()>,
}

impl SweeperHandle {
    /// Cancel the sweeper task.
    pub fn abort(&self) {
        self.handle.abort();
    }
}

impl Drop for SweeperHandle {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// In-memory session store with idle-based expiry.
pub struct SessionManager {
    sessions: RwLock<HashMap<String, Session>>,
    idle_timeout: Duration,
    security_log: Arc<SecurityLog>,
}

impl SessionManager {
    pub fn new(idle_timeout: Duration, security_log: Arc<SecurityLog>) -> Self {
        Self {
            sessions: RwLock::new(HashMap::new()),
            idle_timeout,
            security_log,
        }
    }

    /// Create a session for an authenticated user, returning its token.
    pub fn create_session(&self, user: &User) -> AuthResult<Session> {
        let session = Session {
            token: token::generate_token(AuthConstants::SESSION_TOKEN_LENGTH),
            user_id: user.user_id.clone(),
            phone: user.phone.clone(),
            name: user.name.clone(),
            role: user.role,
            created_at: Utc::now().timestamp_millis(),
            last_seen: Instant::now(),
        };
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| AuthError::Internal(format!("session store poisoned: {}", e)))?;
        sessions.insert(session.token.clone(), session.clone());
        Ok(session)
    }

    /// Validate a session token and register activity on it.
    ///
    /// A session that idled past the timeout is removed here (if the sweeper
    /// has not got to it first) and reported as expired.
    pub fn authenticate(&self, session_token: &str) -> AuthResult<Session> {
        let mut sessions = self
            .sessions
            .write()
            .map_err(|e| AuthError::Internal(format!("session store poisoned: {}", e)))?;

        let expired = match sessions.get_mut(session_token) {
            None => return Err(AuthError::SessionExpired),
            Some(session) if session.last_seen.elapsed() >= self.idle_timeout => true,
            Some(session) => {
                session.last_seen = Instant::now();
                return Ok(session.clone());
            }
        };

        debug_assert!(expired);
        // Removal under the same write lock guarantees a single logout event.
        if let Some(session) = sessions.remove(session_token) {
            self.security_log.record(SecurityEvent::now(
                SecurityEventKind::Logout,
                Some(session.user_id),
                Some(session.phone.as_str().to_string()),
            ));
        }
        Err(AuthError::SessionExpired)
    }

    /// End a session explicitly. Records a logout event when the token was
    /// actually active; ending an unknown token is a no-op.
    pub fn end_session(&self, session_token: &str, conn: &ConnectionInfo) -> AuthResult<bool> {
        let removed = {
            let mut sessions = self
                .sessions
                .write()
                .map_err(|e| AuthError::Internal(format!("session store poisoned: {}", e)))?;
            sessions.remove(session_token)
        };
        match removed {
            Some(session) => {
                self.security_log.record(
                    SecurityEvent::now(
                        SecurityEventKind::Logout,
                        Some(session.user_id),
                        Some(session.phone.as_str().to_string()),
                    )
                    .with_connection(conn),
                );
                Ok(true)
            }
            None => Ok(false),
        }
    }

    /// Remove all idle-expired sessions, recording one logout event each.
    /// Returns the number of evicted sessions.
    pub fn sweep_idle(&self) -> usize {
        let mut sessions = match self.sessions.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        let expired: Vec<String> = sessions
            .iter()
            .filter(|(_, s)| s.last_seen.elapsed() >= self.idle_timeout)
            .map(|(token, _)| token.clone())
            .collect();
        for stale in &expired {
            if let Some(session) = sessions.remove(stale) {
                log::info!("Session for {} expired after inactivity", session.phone);
                self.security_log.record(SecurityEvent::now(
                    SecurityEventKind::Logout,
                    Some(session.user_id),
                    Some(session.phone.as_str().to_string()),
                ));
            }
        }
        expired.len()
    }

    /// Number of currently active sessions.
    pub fn active_count(&self) -> usize {
        match self.sessions.read() {
            Ok(guard) => guard.len(),
            Err(poisoned) => poisoned.into_inner().len(),
        }
    }

    /// Spawn the background sweeper task.
    pub fn spawn_sweeper(self: &Arc<Self>, interval: Duration) -> SweeperHandle {
        let manager = Arc::clone(self);
        let handle = tokio::spawn(async move {
            let mut ticker = tokio::time::interval(interval);
            // First tick fires immediately; skip it.
            ticker.tick().await;
            loop {
                ticker.tick().await;
                let evicted = manager.sweep_idle();
                if evicted > 0 {
                    log::debug!("Session sweeper evicted {} idle session(s)", evicted);
                }
            }
        });
        SweeperHandle { handle }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vermifarm_commons::PhoneNumber;

    fn sample_user() -> User {
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

    fn manager(idle: Duration) -> (Arc<SessionManager>, Arc<SecurityLog>) {
        let log = Arc::new(SecurityLog::new(100));
        (
            Arc::new(SessionManager::new(idle, Arc::clone(&log))),
            log,
        )
    }

    #[tokio::test]
    async fn create_and_authenticate() {
        let (manager, _log) = manager(Duration::from_secs(60));
        let session = manager.create_session(&sample_user()).unwrap();

        let seen = manager.authenticate(&session.token).unwrap();
        assert_eq!(seen.user_id, session.user_id);
        assert!(manager.authenticate("not-a-token").is_err());
    }

    #[tokio::test]
    async fn idle_session_expires_exactly_once() {
        let (manager, log) = manager(Duration::from_millis(20));
        let session = manager.create_session(&sample_user()).unwrap();

        tokio::time::sleep(Duration::from_millis(40)).await;

        assert!(matches!(
            manager.authenticate(&session.token),
            Err(AuthError::SessionExpired)
        ));
        // Second touch and a later sweep find nothing left to expire.
        assert!(manager.authenticate(&session.token).is_err());
        assert_eq!(manager.sweep_idle(), 0);
        assert_eq!(log.count_of(SecurityEventKind::Logout), 1);
    }

    #[tokio::test]
    async fn sweeper_evicts_idle_sessions() {
        let (manager, log) = manager(Duration::from_millis(20));
        manager.create_session(&sample_user()).unwrap();
        manager.create_session(&sample_user()).unwrap();

        let sweeper = manager.spawn_sweeper(Duration::from_millis(10));
        tokio::time::sleep(Duration::from_millis(80)).await;
        sweeper.abort();

        assert_eq!(manager.active_count(), 0);
        assert_eq!(log.count_of(SecurityEventKind::Logout), 2);
    }

    #[tokio::test]
    async fn activity_pushes_the_deadline_out() {
        let (manager, _log) = manager(Duration::from_millis(50));
        let session = manager.create_session(&sample_user()).unwrap();

        for _ in 0..4 {
            tokio::time::sleep(Duration::from_millis(25)).await;
            assert!(manager.authenticate(&session.token).is_ok());
        }
    }

    #[tokio::test]
    async fn explicit_logout_is_idempotent() {
        let (manager, log) = manager(Duration::from_secs(60));
        let session = manager.create_session(&sample_user()).unwrap();
        let conn = ConnectionInfo::default();

        assert!(manager.end_session(&session.token, &conn).unwrap());
        assert!(!manager.end_session(&session.token, &conn).unwrap());
        assert_eq!(log.count_of(SecurityEventKind::Logout), 1);
    }
}
