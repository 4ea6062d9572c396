//! Argon2 password hashing adapter

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::SaltString;
use argon2::{Argon2, PasswordHasher as _};

use crate::domain::result::{Error, Result};
use crate::domain::PasswordHash;
use crate::ports::PasswordHasher;

/// Argon2id implementation of the hashing port
///
/// Produces a salted PHC-format string; the salt is fresh per call, so the
/// same secret never hashes to the same output twice.
#[derive(Default)]
pub struct Argon2Hasher;

impl PasswordHasher for Argon2Hasher {
    fn hash(&self, secret: &str) -> Result<PasswordHash> {
        let salt = SaltString::generate(&mut OsRng);
        let hash = Argon2::default()
            .hash_password(secret.as_bytes(), &salt)
            .map_err(|e| Error::Other(format!("password hashing failed: {}", e)))?;
        Ok(PasswordHash::new(hash.to_string()))
    }
}
