//! Password hashing port

use crate::domain::result::Result;
use crate::domain::PasswordHash;

/// One-way password transformation
///
/// The core validates a password's format and then hands it here; only the
/// resulting hash is ever stored. Nothing in the core reverses or compares
/// hashes.
pub trait PasswordHasher: Send + Sync {
    fn hash(&self, secret: &str) -> Result<PasswordHash>;
}
