//! Application context: explicit wiring of every shared service.
//!
//! `AppContext::init` is the single place where state is created. Handlers
//! receive the context through `web::Data`; nothing in the workspace reaches
//! for a global.

use chrono::Utc;
use std::sync::Arc;
use vermifarm_auth::{
    AuthService, CredentialVerifier, InMemoryUserRepo, MockVerifier, SecurityLog, SessionManager,
    UserRepository,
};
use vermifarm_commons::{PhoneNumber, Role, User, UserId};
use vermifarm_configs::ServerConfig;

use crate::notifications::NotificationCenter;

/// Mock credential pair accepted by the seeded verifier. Stand-in for a real
/// credential backend; see `CredentialVerifier`.
pub const MOCK_ADMIN_PHONE: &str = "0712345678";
pub const MOCK_ADMIN_PASSWORD: &str = "admin123";
pub const MOCK_OTP_CODE: &str = "123456";

/// Aggregated shared services for the HTTP layer.
pub struct AppContext {
    auth: Arc<AuthService>,
    sessions: Arc<SessionManager>,
    security_log: Arc<SecurityLog>,
    user_repo: Arc<dyn UserRepository>,
    notifications: Arc<NotificationCenter>,
}

impl AppContext {
    /// Build the full context from configuration, seeding the mock user
    /// directory and wiring the mock verifier.
    pub fn init(config: &ServerConfig) -> anyhow::Result<Arc<Self>> {
        let verifier = MockVerifier::new(
            PhoneNumber::parse(MOCK_ADMIN_PHONE)
                .map_err(|e| anyhow::anyhow!("invalid seed phone: {}", e))?,
            MOCK_ADMIN_PASSWORD,
            MOCK_OTP_CODE,
        )
        .map_err(|e| anyhow::anyhow!("failed to build verifier: {}", e))?;

        let users = seed_users(verifier.password_hash());
        log::info!("Seeded {} administrator account(s)", users.len());

        let user_repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepo::new(users));
        let security_log = Arc::new(SecurityLog::new(config.auth.security_log_capacity));
        let sessions = Arc::new(SessionManager::new(
            config.auth.session_idle(),
            Arc::clone(&security_log),
        ));
        let verifier: Arc<dyn CredentialVerifier> = Arc::new(verifier);
        let auth = Arc::new(AuthService::new(
            verifier,
            Arc::clone(&user_repo),
            Arc::clone(&sessions),
            Arc::clone(&security_log),
            config.auth.clone(),
        ));

        Ok(Arc::new(Self {
            auth,
            sessions,
            security_log,
            user_repo,
            notifications: Arc::new(NotificationCenter::new()),
        }))
    }

    pub fn auth(&self) -> &Arc<AuthService> {
        &self.auth
    }

    pub fn sessions(&self) -> &Arc<SessionManager> {
        &self.sessions
    }

    pub fn security_log(&self) -> &Arc<SecurityLog> {
        &self.security_log
    }

    pub fn user_repo(&self) -> &Arc<dyn UserRepository> {
        &self.user_repo
    }

    pub fn notifications(&self) -> &Arc<NotificationCenter> {
        &self.notifications
    }
}

/// The fixed mock directory. Only the super admin pair is accepted by the
/// seeded verifier; the initiator account exists for listings and
/// notification attribution.
fn seed_users(password_hash: &str) -> Vec<User> {
    let now_ms = Utc::now().timestamp_millis();
    let user = |name: &str, phone: &str, role: Role| User {
        user_id: UserId::generate(),
        name: name.to_string(),
        phone: PhoneNumber::parse(phone).expect("seed phone is valid"),
        role,
        password_hash: password_hash.to_string(),
        two_factor_enabled: true,
        email_verified: true,
        failed_login_attempts: 0,
        locked_until: None,
        last_login_at: None,
        created_at: now_ms,
        updated_at: now_ms,
    };

    vec![
        user("Mary Wanjiku", MOCK_ADMIN_PHONE, Role::SuperAdmin),
        user("John Kamau", "0112345678", Role::AdminInitiator),
    ]
}
