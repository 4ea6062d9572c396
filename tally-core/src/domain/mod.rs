//! Core domain model
//!
//! Value objects and entities with their validation logic - no I/O or
//! external dependencies. Every type here is built through a single
//! validated construction path and is immutable afterwards.

mod money;
pub mod result;
mod transaction;
mod user;

pub use money::Amount;
pub use transaction::{Description, Transaction, TransactionKind};
pub use user::{EmailAddress, Password, PasswordHash, PersonName, User};
