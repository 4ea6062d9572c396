//! JSON-file-backed stores
//!
//! Flat-file persistence for the CLI: one JSON array per collection,
//! read on every call and rewritten wholesale on every mutation. Good
//! enough for a single-process ledger; anything needing more throughput
//! can swap in another adapter behind the same ports.

use std::fs;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::domain::result::Result;
use crate::domain::{Transaction, TransactionKind, User};
use crate::ports::{TransactionStore, UserStore};

const TRANSACTIONS_FILE: &str = "transactions.json";
const USERS_FILE: &str = "users.json";

/// Transaction store persisted as `transactions.json` in the data directory
pub struct JsonFileTransactionStore {
    path: PathBuf,
}

impl JsonFileTransactionStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(TRANSACTIONS_FILE),
        }
    }

    fn load(&self) -> Result<Vec<Transaction>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self, transactions: &[Transaction]) -> Result<()> {
        let content = serde_json::to_string_pretty(transactions)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl TransactionStore for JsonFileTransactionStore {
    async fn save(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.load()?;
        transactions.push(transaction.clone());
        self.persist(&transactions)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Transaction>> {
        Ok(self.load()?.into_iter().find(|t| t.id() == id))
    }

    async fn find_by_user_id(&self, user_id: &str) -> Result<Vec<Transaction>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.user_id() == user_id)
            .collect())
    }

    async fn find_by_user_id_and_kind(
        &self,
        user_id: &str,
        kind: TransactionKind,
    ) -> Result<Vec<Transaction>> {
        Ok(self
            .load()?
            .into_iter()
            .filter(|t| t.user_id() == user_id && t.kind() == kind)
            .collect())
    }

    async fn update(&self, transaction: &Transaction) -> Result<()> {
        let mut transactions = self.load()?;
        if let Some(stored) = transactions.iter_mut().find(|t| t.id() == transaction.id()) {
            *stored = transaction.clone();
            self.persist(&transactions)?;
        }
        Ok(())
    }

    async fn delete(&self, id: &str) -> Result<()> {
        let mut transactions = self.load()?;
        transactions.retain(|t| t.id() != id);
        self.persist(&transactions)
    }
}

/// User store persisted as `users.json` in the data directory
pub struct JsonFileUserStore {
    path: PathBuf,
}

impl JsonFileUserStore {
    pub fn new(dir: &Path) -> Self {
        Self {
            path: dir.join(USERS_FILE),
        }
    }

    fn load(&self) -> Result<Vec<User>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path)?;
        Ok(serde_json::from_str(&content)?)
    }

    fn persist(&self, users: &[User]) -> Result<()> {
        let content = serde_json::to_string_pretty(users)?;
        fs::write(&self.path, content)?;
        Ok(())
    }
}

#[async_trait]
impl UserStore for JsonFileUserStore {
    async fn save(&self, user: &User) -> Result<()> {
        let mut users = self.load()?;
        users.push(user.clone());
        self.persist(&users)
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.id() == id))
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>> {
        Ok(self.load()?.into_iter().find(|u| u.email().as_str() == email))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{Amount, Description, EmailAddress, PasswordHash, PersonName};
    use tempfile::TempDir;

    fn transaction(id: &str) -> Transaction {
        Transaction::new(
            id,
            "user-1",
            TransactionKind::Expense,
            Amount::new(12.34).unwrap(),
            Description::new("Coffee").unwrap(),
            None,
        )
        .unwrap()
    }

    #[tokio::test]
    async fn test_round_trips_through_the_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTransactionStore::new(dir.path());
        store.save(&transaction("tx-1")).await.unwrap();

        // A second store instance over the same directory sees the data
        let reopened = JsonFileTransactionStore::new(dir.path());
        let found = reopened.find_by_id("tx-1").await.unwrap().unwrap();
        assert_eq!(found.id(), "tx-1");
        assert_eq!(found.formatted_amount(), "-$ 12.34");
    }

    #[tokio::test]
    async fn test_missing_file_reads_as_empty() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTransactionStore::new(dir.path());
        assert!(store.find_by_user_id("user-1").await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_delete_rewrites_the_file() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileTransactionStore::new(dir.path());
        store.save(&transaction("tx-1")).await.unwrap();
        store.save(&transaction("tx-2")).await.unwrap();

        store.delete("tx-1").await.unwrap();
        assert!(store.find_by_id("tx-1").await.unwrap().is_none());
        assert!(store.find_by_id("tx-2").await.unwrap().is_some());

        // Absent id stays a no-op
        store.delete("tx-1").await.unwrap();
    }

    #[tokio::test]
    async fn test_user_store_round_trip() {
        let dir = TempDir::new().unwrap();
        let store = JsonFileUserStore::new(dir.path());
        let user = User::new(
            "user-1",
            PersonName::new("Avery Quinn").unwrap(),
            EmailAddress::new("avery@example.com").unwrap(),
            PasswordHash::new("hashed"),
        );
        store.save(&user).await.unwrap();

        let found = store
            .find_by_email("avery@example.com")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id(), "user-1");
        assert_eq!(found.name().as_str(), "Avery Quinn");
    }
}
