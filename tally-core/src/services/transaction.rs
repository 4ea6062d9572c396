//! Transaction service - recording, removing and listing ledger entries

use std::sync::Arc;

use rust_decimal::Decimal;
use serde::Serialize;

use crate::domain::result::{Error, Result};
use crate::domain::{Amount, Description, Transaction, TransactionKind};
use crate::ports::{TransactionStore, UserStore};

/// Transaction service for ledger entry operations
///
/// Each operation is a single linear pipeline: check the owning user,
/// validate input into value objects, then hit the store. Any failing step
/// aborts the call before anything is written.
pub struct TransactionService {
    transactions: Arc<dyn TransactionStore>,
    users: Arc<dyn UserStore>,
}

/// A user's entries plus their running totals
#[derive(Debug, Serialize)]
pub struct TransactionSummary {
    pub transactions: Vec<Transaction>,
    pub total_income: Decimal,
    pub total_expenses: Decimal,
    pub balance: Decimal,
}

impl TransactionService {
    pub fn new(transactions: Arc<dyn TransactionStore>, users: Arc<dyn UserStore>) -> Self {
        Self {
            transactions,
            users,
        }
    }

    /// Record a new entry for an existing user.
    ///
    /// The raw kind, amount and description are validated here; nothing is
    /// persisted unless every input passes.
    pub async fn create(
        &self,
        id: &str,
        user_id: &str,
        kind: &str,
        amount: f64,
        description: &str,
    ) -> Result<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(Error::not_found("user not found"));
        }

        let kind: TransactionKind = kind.parse()?;
        let amount = Amount::new(amount)?;
        let description = Description::new(description)?;

        let transaction = Transaction::new(id, user_id, kind, amount, description, None)?;

        self.transactions.save(&transaction).await
    }

    /// Remove an entry owned by the calling user.
    ///
    /// Existence is checked before ownership so "transaction not found" and
    /// "transaction does not belong to the user" stay distinguishable.
    pub async fn delete(&self, transaction_id: &str, user_id: &str) -> Result<()> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(Error::not_found("user not found"));
        }

        let transaction = self
            .transactions
            .find_by_id(transaction_id)
            .await?
            .ok_or_else(|| Error::not_found("transaction not found"))?;

        if transaction.user_id() != user_id {
            return Err(Error::forbidden("transaction does not belong to the user"));
        }

        self.transactions.delete(transaction_id).await
    }

    /// List a user's entries, optionally restricted to one kind, together
    /// with total income, total expenses and their balance.
    ///
    /// An empty ledger yields zero aggregates, not an error.
    pub async fn list(&self, user_id: &str, kind: Option<&str>) -> Result<TransactionSummary> {
        if self.users.find_by_id(user_id).await?.is_none() {
            return Err(Error::not_found("user not found"));
        }

        let transactions = match kind {
            Some(kind) => {
                self.transactions
                    .find_by_user_id_and_kind(user_id, kind.parse()?)
                    .await?
            }
            None => self.transactions.find_by_user_id(user_id).await?,
        };

        let total_income: Decimal = transactions
            .iter()
            .filter(|t| t.is_income())
            .map(|t| t.amount().value())
            .sum();
        let total_expenses: Decimal = transactions
            .iter()
            .filter(|t| t.is_expense())
            .map(|t| t.amount().value())
            .sum();

        Ok(TransactionSummary {
            transactions,
            total_income,
            total_expenses,
            balance: total_income - total_expenses,
        })
    }
}
