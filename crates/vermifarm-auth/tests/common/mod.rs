//! Shared fixtures for auth integration tests.
#![allow(dead_code)]

use std::sync::Arc;
use vermifarm_auth::{
    AuthService, InMemoryUserRepo, MockVerifier, SecurityLog, SessionManager, UserRepository,
};
use vermifarm_commons::{PhoneNumber, Role, User, UserId};
use vermifarm_configs::AuthSettings;

pub const ADMIN_PHONE: &str = "0712345678";
pub const ADMIN_PASSWORD: &str = "admin123";
pub const OTP_CODE: &str = "123456";
pub const INITIATOR_PHONE: &str = "0112345678";

pub struct TestAuth {
    pub service: AuthService,
    pub repo: Arc<dyn UserRepository>,
    pub security_log: Arc<SecurityLog>,
    pub sessions: Arc<SessionManager>,
}

pub fn seed_user(phone: &str, hash: &str, role: Role, two_factor: bool) -> User {
    User {
        user_id: UserId::generate(),
        name: match role {
            Role::SuperAdmin => "Mary Wanjiku".to_string(),
            Role::AdminInitiator => "John Kamau".to_string(),
        },
        phone: PhoneNumber::parse(phone).unwrap(),
        role,
        password_hash: hash.to_string(),
        two_factor_enabled: two_factor,
        email_verified: true,
        failed_login_attempts: 0,
        locked_until: None,
        last_login_at: None,
        created_at: chrono::Utc::now().timestamp_millis(),
        updated_at: chrono::Utc::now().timestamp_millis(),
    }
}

/// Build a service around the mock credentials with the given settings.
pub fn build_auth(settings: AuthSettings) -> TestAuth {
    let verifier = MockVerifier::new(
        PhoneNumber::parse(ADMIN_PHONE).unwrap(),
        ADMIN_PASSWORD,
        OTP_CODE,
    )
    .unwrap();

    let users = vec![
        seed_user(ADMIN_PHONE, verifier.password_hash(), Role::SuperAdmin, true),
        seed_user(
            INITIATOR_PHONE,
            verifier.password_hash(),
            Role::AdminInitiator,
            false,
        ),
    ];

    let repo: Arc<dyn UserRepository> = Arc::new(InMemoryUserRepo::new(users));
    let security_log = Arc::new(SecurityLog::new(settings.security_log_capacity));
    let sessions = Arc::new(SessionManager::new(
        settings.session_idle(),
        Arc::clone(&security_log),
    ));
    let service = AuthService::new(
        Arc::new(verifier),
        Arc::clone(&repo),
        Arc::clone(&sessions),
        Arc::clone(&security_log),
        settings,
    );

    TestAuth {
        service,
        repo,
        security_log,
        sessions,
    }
}

pub fn default_auth() -> TestAuth {
    build_auth(AuthSettings::default())
}
