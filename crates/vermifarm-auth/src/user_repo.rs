//! User directory abstraction.

use crate::error::{AuthError, AuthResult};
use std::collections::HashMap;
use std::sync::RwLock;
use vermifarm_commons::{PhoneNumber, User};

/// Abstraction over the user directory for authentication flows.
///
/// The shipped implementation is in-memory (the directory is a fixed mock
/// seed), but the flow only talks to this trait, so a persistent store can be
/// slotted in later.
#[async_trait::async_trait]
pub trait UserRepository: Send + Sync {
    async fn get_user_by_phone(&self, phone: &PhoneNumber) -> AuthResult<User>;

    /// Update a full user record. Implementations may persist only changed fields.
    async fn update_user(&self, user: &User) -> AuthResult<()>;

    /// Return all users, for admin listings.
    async fn scan_all_users(&self) -> AuthResult<Vec<User>>;
}

/// In-memory repository seeded from a fixed user list at bootstrap.
pub struct InMemoryUserRepo {
    users: RwLock<HashMap<PhoneNumber, User>>,
}

impl InMemoryUserRepo {
    pub fn new(seed: Vec<User>) -> Self {
        let users = seed.into_iter().map(|u| (u.phone.clone(), u)).collect();
        Self {
            users: RwLock::new(users),
        }
    }
}

#[async_trait::async_trait]
impl UserRepository for InMemoryUserRepo {
    async fn get_user_by_phone(&self, phone: &PhoneNumber) -> AuthResult<User> {
        let users = self
            .users
            .read()
            .map_err(|e| AuthError::Internal(format!("user directory poisoned: {}", e)))?;
        users
            .get(phone)
            .cloned()
            .ok_or_else(|| AuthError::UserNotFound(format!("No account for '{}'", phone)))
    }

    async fn update_user(&self, user: &User) -> AuthResult<()> {
        let mut users = self
            .users
            .write()
            .map_err(|e| AuthError::Internal(format!("user directory poisoned: {}", e)))?;
        match users.get_mut(&user.phone) {
            Some(existing) => {
                *existing = user.clone();
                Ok(())
            }
            None => Err(AuthError::UserNotFound(format!(
                "No account for '{}'",
                user.phone
            ))),
        }
    }

    async fn scan_all_users(&self) -> AuthResult<Vec<User>> {
        let users = self
            .users
            .read()
            .map_err(|e| AuthError::Internal(format!("user directory poisoned: {}", e)))?;
        Ok(users.values().cloned().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use vermifarm_commons::{Role, UserId};

    fn seed_user(phone: &str) -> User {
        User {
            user_id: UserId::generate(),
            name: "Test Admin".to_string(),
            phone: PhoneNumber::parse(phone).unwrap(),
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

    #[tokio::test]
    async fn lookup_update_and_scan() {
        let repo = InMemoryUserRepo::new(vec![seed_user("0712345678")]);
        let phone = PhoneNumber::parse("0712345678").unwrap();

        let mut user = repo.get_user_by_phone(&phone).await.unwrap();
        user.failed_login_attempts = 2;
        repo.update_user(&user).await.unwrap();

        let reread = repo.get_user_by_phone(&phone).await.unwrap();
        assert_eq!(reread.failed_login_attempts, 2);
        assert_eq!(repo.scan_all_users().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn unknown_phone_is_not_found() {
        let repo = InMemoryUserRepo::new(vec![]);
        let phone = PhoneNumber::parse("0799999999").unwrap();
        assert!(matches!(
            repo.get_user_by_phone(&phone).await,
            Err(AuthError::UserNotFound(_))
        ));
    }
}
