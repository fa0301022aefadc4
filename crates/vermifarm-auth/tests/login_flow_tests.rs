//! Integration tests for the password step of the login flow:
//! phone format gating, lockout after repeated failures, and recovery
//! once the lockout window passes.

mod common;

use common::{build_auth, default_auth, ADMIN_PASSWORD, ADMIN_PHONE};
use vermifarm_auth::{AuthError, LoginOutcome, MockVerifier};
use vermifarm_commons::{ConnectionInfo, PhoneNumber, Role, SecurityEventKind};
use vermifarm_configs::AuthSettings;

fn conn() -> ConnectionInfo {
    ConnectionInfo::new(Some("203.0.113.7:40112".to_string()), Some("tests".to_string()))
}

#[tokio::test]
async fn malformed_phone_is_rejected_before_any_check() {
    let auth = default_auth();

    for bad in ["0812345678", "071234567", "+254712345678", "not-a-phone"] {
        let result = auth.service.begin_login(bad, ADMIN_PASSWORD, &conn()).await;
        assert!(
            matches!(result, Err(AuthError::InvalidPhoneFormat)),
            "expected format rejection for {:?}",
            bad
        );
    }

    // No failed-login events were recorded and no attempts were counted.
    assert!(auth.security_log.is_empty());
    let user = auth
        .repo
        .get_user_by_phone(&PhoneNumber::parse(ADMIN_PHONE).unwrap())
        .await
        .unwrap();
    assert_eq!(user.failed_login_attempts, 0);
}

#[tokio::test]
async fn valid_credentials_lead_to_otp_challenge() {
    let auth = default_auth();

    let outcome = auth
        .service
        .begin_login(ADMIN_PHONE, ADMIN_PASSWORD, &conn())
        .await
        .unwrap();

    match outcome {
        LoginOutcome::OtpRequired(challenge) => {
            assert_eq!(challenge.temp_token.len(), 32);
            assert_eq!(challenge.expires_in_seconds, 300);
        }
        LoginOutcome::Authenticated(_) => panic!("2FA account must not skip the OTP step"),
    }
}

#[tokio::test]
async fn unknown_phone_gets_generic_credentials_error() {
    let auth = default_auth();

    let result = auth
        .service
        .begin_login("0799999999", ADMIN_PASSWORD, &conn())
        .await;
    assert!(matches!(result, Err(AuthError::InvalidCredentials)));
    assert_eq!(auth.security_log.count_of(SecurityEventKind::LoginFailed), 1);
}

#[tokio::test]
async fn third_failure_locks_and_fourth_is_rejected_even_with_correct_password() {
    let auth = default_auth();

    for attempt in 1..=2 {
        let result = auth.service.begin_login(ADMIN_PHONE, "wrong", &conn()).await;
        assert!(
            matches!(result, Err(AuthError::InvalidCredentials)),
            "attempt {} should fail with generic error",
            attempt
        );
    }

    // Third failure trips the lockout.
    let result = auth.service.begin_login(ADMIN_PHONE, "wrong", &conn()).await;
    assert!(matches!(result, Err(AuthError::AccountLocked { .. })));
    assert_eq!(
        auth.security_log.count_of(SecurityEventKind::AccountLocked),
        1
    );

    // Fourth attempt is rejected before verification, password correctness
    // notwithstanding.
    let result = auth
        .service
        .begin_login(ADMIN_PHONE, ADMIN_PASSWORD, &conn())
        .await;
    assert!(matches!(result, Err(AuthError::AccountLocked { .. })));
    assert_eq!(auth.security_log.count_of(SecurityEventKind::LoginFailed), 3);
}

#[tokio::test]
async fn expired_lockout_clears_attempts_and_allows_login() {
    let auth = default_auth();
    let phone = PhoneNumber::parse(ADMIN_PHONE).unwrap();

    for _ in 0..3 {
        let _ = auth.service.begin_login(ADMIN_PHONE, "wrong", &conn()).await;
    }

    // Rewind the stored deadline instead of waiting 15 minutes.
    let mut user = auth.repo.get_user_by_phone(&phone).await.unwrap();
    user.locked_until = Some(chrono::Utc::now().timestamp_millis() - 1_000);
    auth.repo.update_user(&user).await.unwrap();

    let outcome = auth
        .service
        .begin_login(ADMIN_PHONE, ADMIN_PASSWORD, &conn())
        .await
        .unwrap();
    assert!(matches!(outcome, LoginOutcome::OtpRequired(_)));

    let user = auth.repo.get_user_by_phone(&phone).await.unwrap();
    assert_eq!(user.failed_login_attempts, 0);
    assert_eq!(user.locked_until, None);
}

#[tokio::test]
async fn account_without_two_factor_authenticates_directly() {
    // A dedicated verifier targeting the non-2FA account.
    let phone = "0112345678";
    let verifier = MockVerifier::new(
        PhoneNumber::parse(phone).unwrap(),
        "initiator-pass",
        "123456",
    )
    .unwrap();

    let settings = AuthSettings::default();
    let users = vec![common::seed_user(
        phone,
        verifier.password_hash(),
        Role::AdminInitiator,
        false,
    )];
    let repo: std::sync::Arc<dyn vermifarm_auth::UserRepository> =
        std::sync::Arc::new(vermifarm_auth::InMemoryUserRepo::new(users));
    let security_log = std::sync::Arc::new(vermifarm_auth::SecurityLog::new(100));
    let sessions = std::sync::Arc::new(vermifarm_auth::SessionManager::new(
        settings.session_idle(),
        std::sync::Arc::clone(&security_log),
    ));
    let service = vermifarm_auth::AuthService::new(
        std::sync::Arc::new(verifier),
        std::sync::Arc::clone(&repo),
        sessions,
        std::sync::Arc::clone(&security_log),
        settings,
    );

    let outcome = service
        .begin_login(phone, "initiator-pass", &conn())
        .await
        .unwrap();
    match outcome {
        LoginOutcome::Authenticated(session) => {
            assert_eq!(session.role, Role::AdminInitiator);
            assert!(service.authenticate_session(&session.token).is_ok());
        }
        LoginOutcome::OtpRequired(_) => panic!("2FA-disabled account should skip OTP"),
    }
    assert_eq!(security_log.count_of(SecurityEventKind::LoginSuccess), 1);
}

#[tokio::test]
async fn lockout_threshold_respects_configuration() {
    let settings = AuthSettings {
        max_login_attempts: 2,
        ..AuthSettings::default()
    };
    let auth = build_auth(settings);

    let _ = auth.service.begin_login(ADMIN_PHONE, "wrong", &conn()).await;
    let result = auth.service.begin_login(ADMIN_PHONE, "wrong", &conn()).await;
    assert!(matches!(result, Err(AuthError::AccountLocked { .. })));
}
