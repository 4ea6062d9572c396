//! User service - registration

use std::sync::Arc;

use uuid::Uuid;

use crate::domain::result::{Error, Result};
use crate::domain::{EmailAddress, Password, PersonName, User};
use crate::ports::{PasswordHasher, UserStore};

/// User service for account registration
pub struct UserService {
    users: Arc<dyn UserStore>,
    hasher: Arc<dyn PasswordHasher>,
}

impl UserService {
    pub fn new(users: Arc<dyn UserStore>, hasher: Arc<dyn PasswordHasher>) -> Self {
        Self { users, hasher }
    }

    /// Register a new user and return the created entity.
    ///
    /// Email uniqueness is enforced by a lookup before insert. The password
    /// is validated in raw form and hashed before it reaches the store; the
    /// raw secret is never persisted.
    pub async fn register(&self, name: &str, email: &str, password: &str) -> Result<User> {
        if self.users.find_by_email(email).await?.is_some() {
            return Err(Error::conflict("user already exists"));
        }

        let name = PersonName::new(name)?;
        let email = EmailAddress::new(email)?;
        let password = Password::new(password)?;

        let hash = self.hasher.hash(password.as_str())?;

        let user = User::new(Uuid::new_v4().to_string(), name, email, hash);
        self.users.save(&user).await?;

        Ok(user)
    }
}
