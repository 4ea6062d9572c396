//! Adapters - concrete implementations of the ports

mod jsonfile;
mod memory;
mod password;

pub use jsonfile::{JsonFileTransactionStore, JsonFileUserStore};
pub use memory::{MemoryTransactionStore, MemoryUserStore};
pub use password::Argon2Hasher;
