//! User domain model

use std::fmt;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::result::{Error, Result};

const EMAIL_PATTERN: &str = r"^[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}$";

const MIN_PASSWORD_LEN: usize = 8;

/// A user's display name. Must not be empty or whitespace-only.
/// Stored exactly as given, no trimming.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct PersonName(String);

impl PersonName {
    pub fn new(name: &str) -> Result<Self> {
        if name.trim().is_empty() {
            return Err(Error::validation("invalid name"));
        }
        Ok(Self(name.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for PersonName {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl fmt::Display for PersonName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// An email address in `local@domain.tld` form. Kept exactly as given,
/// no case or whitespace normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    pub fn new(email: &str) -> Result<Self> {
        let pattern = Regex::new(EMAIL_PATTERN).unwrap();
        if !pattern.is_match(email) {
            return Err(Error::validation("invalid email"));
        }
        Ok(Self(email.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A raw password accepted at registration.
///
/// Must be at least 8 characters and contain an uppercase letter, a
/// lowercase letter, a digit, and a non-alphanumeric character. The raw
/// secret only lives long enough to be handed to the hashing port; it is
/// never persisted or compared.
#[derive(Clone)]
pub struct Password(String);

impl Password {
    pub fn new(secret: &str) -> Result<Self> {
        let long_enough = secret.chars().count() >= MIN_PASSWORD_LEN;
        let has_upper = secret.chars().any(|c| c.is_ascii_uppercase());
        let has_lower = secret.chars().any(|c| c.is_ascii_lowercase());
        let has_digit = secret.chars().any(|c| c.is_ascii_digit());
        let has_special = secret.chars().any(|c| !c.is_ascii_alphanumeric());

        if !(long_enough && has_upper && has_lower && has_digit && has_special) {
            return Err(Error::validation("invalid password"));
        }
        Ok(Self(secret.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Keep the secret out of debug output
impl fmt::Debug for Password {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Password(..)")
    }
}

/// Opaque output of the one-way hashing port. Carries no validation of
/// its own; the core never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PasswordHash(String);

impl PasswordHash {
    pub fn new(hash: impl Into<String>) -> Self {
        Self(hash.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A registered individual who owns ledger entries.
///
/// Built only from validated value objects; the id is generated at
/// registration. Email uniqueness is enforced by the registration use
/// case, not here.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct User {
    id: String,
    name: PersonName,
    email: EmailAddress,
    password: PasswordHash,
}

impl User {
    pub fn new(
        id: impl Into<String>,
        name: PersonName,
        email: EmailAddress,
        password: PasswordHash,
    ) -> Self {
        Self {
            id: id.into(),
            name,
            email,
            password,
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn name(&self) -> &PersonName {
        &self.name
    }

    pub fn email(&self) -> &EmailAddress {
        &self.email
    }

    pub fn password_hash(&self) -> &PasswordHash {
        &self.password
    }
}
