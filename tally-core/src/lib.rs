//! Tally Core - Business logic for a personal finance ledger
//!
//! This crate implements the core domain logic following hexagonal architecture:
//!
//! - **domain**: Value objects and entities (Amount, Transaction, User, etc.)
//! - **ports**: Trait definitions for external dependencies (stores, hashing)
//! - **services**: Use-case orchestration
//! - **adapters**: Concrete implementations (in-memory, JSON file, Argon2)

pub mod adapters;
pub mod config;
pub mod domain;
pub mod ports;
pub mod services;

use std::path::Path;
use std::sync::Arc;

use anyhow::Result;

use adapters::{Argon2Hasher, JsonFileTransactionStore, JsonFileUserStore};
use adapters::{MemoryTransactionStore, MemoryUserStore};
use config::Config;
use ports::{PasswordHasher, TransactionStore, UserStore};
use services::{TransactionService, UserService};

// Re-export commonly used types at crate root
pub use domain::result::Error;
pub use domain::{
    Amount, Description, EmailAddress, Password, PasswordHash, PersonName, Transaction,
    TransactionKind, User,
};
pub use services::TransactionSummary;

/// Main context for ledger operations
///
/// This is the primary entry point. It constructs the stores once and hands
/// shared references to every service; there is no hidden global store.
pub struct TallyContext {
    pub config: Config,
    pub users: Arc<dyn UserStore>,
    pub transactions: Arc<dyn TransactionStore>,
    pub transaction_service: TransactionService,
    pub user_service: UserService,
}

impl TallyContext {
    /// File-backed context rooted at the given data directory
    pub fn new(tally_dir: &Path) -> Result<Self> {
        let config = Config::load(tally_dir)?;
        let users: Arc<dyn UserStore> = Arc::new(JsonFileUserStore::new(tally_dir));
        let transactions: Arc<dyn TransactionStore> =
            Arc::new(JsonFileTransactionStore::new(tally_dir));
        Ok(Self::with_stores(config, users, transactions))
    }

    /// Ephemeral context backed by in-memory stores
    pub fn in_memory() -> Self {
        Self::with_stores(
            Config::default(),
            Arc::new(MemoryUserStore::new()),
            Arc::new(MemoryTransactionStore::new()),
        )
    }

    fn with_stores(
        config: Config,
        users: Arc<dyn UserStore>,
        transactions: Arc<dyn TransactionStore>,
    ) -> Self {
        let hasher: Arc<dyn PasswordHasher> = Arc::new(Argon2Hasher);

        let transaction_service =
            TransactionService::new(Arc::clone(&transactions), Arc::clone(&users));
        let user_service = UserService::new(Arc::clone(&users), hasher);

        Self {
            config,
            users,
            transactions,
            transaction_service,
            user_service,
        }
    }
}
