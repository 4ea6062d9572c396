//! Store ports - persistence abstraction

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Transaction, TransactionKind, User};

/// Transaction persistence abstraction
///
/// Use cases depend only on this contract; adapters provide the actual
/// storage. Operations may fail with a store-level error, which use cases
/// propagate unchanged.
#[async_trait]
pub trait TransactionStore: Send + Sync {
    /// Persist a new transaction. Id uniqueness is this store's concern.
    async fn save(&self, transaction: &Transaction) -> Result<()>;

    /// Look up a transaction by id
    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>>;

    /// All transactions owned by a user
    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>>;

    /// Transactions owned by a user, restricted to one kind
    async fn find_by_user_id_and_kind(
        &self,
        user_id: &str,
        kind: TransactionKind,
    ) -> Result<Vec<Transaction>>;

    /// Replace a stored transaction wholesale (matched by id)
    async fn update(&self, transaction: &Transaction) -> Result<()>;

    /// Remove a transaction by id. Removing an absent id is a no-op.
    async fn delete(&self, id: &str) -> Result<()>;
}

/// User persistence abstraction
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Persist a new user
    async fn save(&self, user: &User) -> Result<()>;

    /// Look up a user by id
    async fn find_by_id(&self, id: &str) -> Result<Option<User>>;

    /// Look up a user by email (the secondary uniqueness key)
    async fn find_by_email(&self, email: &str) -> Result<Option<User>>;
}
