//! In-memory stores
//!
//! List-backed store implementations for tests and ephemeral runs. They
//! satisfy the same contract as any persistent adapter: `delete` of an
//! absent id is a no-op, `update` replaces by id, `save` appends.

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::result::Result;
use crate::domain::{Transaction, TransactionKind, User};
use crate::ports::{TransactionStore, UserStore};

/// Transaction store backed by a plain in-process list
#[derive(Default)]
pub struct MemoryTransactionStore {
    transactions: RwLock<Vec<Transaction>>,
}

impl MemoryTransactionStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Every stored transaction, in insertion order. Test helper.
    pub async fn all(&self) -> Vec<Transaction> {
        self.transactions.read().await.clone()
    }

    /// Drop everything. Test helper.
    pub async fn clear(&self) {
        self.transactions.write().await.clear();
    }
}

#[async_trait]
impl TransactionStore for MemoryTransactionStore {
    async fn save(&self, transaction: &Transaction) -> Result<()> {
        self.transactions.write().await.push(transaction.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .find(|t| t.id() == id)
            .cloned())
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.user_id() == user_id)
            .cloned()
            .collect())
    }

    async fn find_by_user_id_and_kind(
        &self,
        user_id: &str,
        kind: TransactionKind,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .transactions
            .read()
            .await
            .iter()
            .filter(|t| t.user_id() == user_id && t.kind() == kind)
            .cloned()
            .collect())
    }

    async fn update(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.transactions.write().await;
        if let Some(stored) = transactions.iter_mut().find(|t| t.id() == transaction.id()) {
            *stored = transaction.clone();
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        self.transactions.write().await.retain(|t| t.id() != id);
        Ok(())
    }
}

/// User store backed by a plain in-process list
#[derive(Default)]
pub struct MemoryUserStore {
    users: RwLock<Vec<User>>,
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop everything. Test helper.
    pub async fn clear(&self) {
        self.users.write().await.clear();
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn save(&self, user: &User) -> Result<()> {
        self.users.write().await.push(user.clone());
        Ok(())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.users.read().await.iter().find(|u| u.id() == id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self
            .users
            .read()
            .await
            .iter()
            .find(|u| u.email().as_str() == email)
            .cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Description, EmailAddress, PasswordHash, PersonName};

    fn transaction(id: &str, user_id: &str, kind: TransactionKind) -> Transaction {
        Transaction::new(
            id,
            user_id,
            kind,
            Amount::new(25.0).unwrap(),
            Description::new("Lunch").unwrap(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_save_and_find() {
        let store = MemoryTransactionStore::new();
        store
            .save(&transaction("tx-1", "user-1", TransactionKind::Income))
            .await
            .unwrap();

        let found = store.find_by_id("tx-1").await.unwrap();
        assert!(found.is_some());
        assert!(store.find_by_id("tx-2").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_filters_by_user_and_kind() {
        let store = MemoryTransactionStore::new();
        store
            .save(&transaction("tx-1", "user-1", TransactionKind::Income))
            .await
            .unwrap();
        store
            .save(&transaction("tx-2", "user-1", TransactionKind::Expense))
            .await
            .unwrap();
        store
            .save(&transaction("tx-3", "user-2", TransactionKind::Income))
            .await
            .unwrap();

        assert_eq!(store.find_by_user_id("user-1").await.unwrap().len(), 2);

        let incomes = store
            .find_by_user_id_and_kind("user-1", TransactionKind::Income)
            .await
            .unwrap();
        assert_eq!(incomes.len(), 1);
        assert_eq!(incomes[0].id(), "tx-1");
    }

    #[tokio::test]
    async fn test_update_replaces_by_id() {
        let store = MemoryTransactionStore::new();
        store
            .save(&transaction("tx-1", "user-1", TransactionKind::Income))
            .await
            .unwrap();

        let replacement = Transaction::new(
            "tx-1",
            "user-1",
            TransactionKind::Income,
            Amount::new(99.99).unwrap(),
            Description::new("Corrected lunch").unwrap(),
            None,
        )
        .unwrap();
        store.update(&replacement).await.unwrap();

        let stored = store.find_by_id("tx-1").await.unwrap().unwrap();
        assert_eq!(stored.description().as_str(), "Corrected lunch");
        assert_eq!(store.all().await.len(), 1);
    }

    #[tokio::test]
    async fn test_delete_is_idempotent() {
        let store = MemoryTransactionStore::new();
        store
            .save(&transaction("tx-1", "user-1", TransactionKind::Income))
            .await
            .unwrap();

        store.delete("tx-1").await.unwrap();
        assert!(store.find_by_id("tx-1").await.unwrap().is_none());

        // Deleting again must not fail
        store.delete("tx-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_clear_empties_the_store() {
        let store = MemoryTransactionStore::new();
        store
            .save(&transaction("tx-1", "user-1", TransactionKind::Income))
            .await
            .unwrap();

        store.clear().await;
        assert!(store.all().await.is_empty());
    }

    #[tokio::test]
    async fn test_user_store_lookups() {
        let store = MemoryUserStore::new();
        let user = User::new(
            "user-1",
            PersonName::new("Avery Quinn").unwrap(),
            EmailAddress::new("avery@example.com").unwrap(),
            PasswordHash::new("hashed"),
        );
        store.save(&user).await.unwrap();

        assert!(store.find_by_id("user-1").await.unwrap().is_some());
        assert!(store
            .find_by_email("avery@example.com")
            .await
            .unwrap()
            .is_some());
        assert!(store.find_by_email("other@example.com").await.unwrap().is_none());

        store.clear().await;
        assert!(store.find_by_id("user-1").await.unwrap().is_none());
    }
}
