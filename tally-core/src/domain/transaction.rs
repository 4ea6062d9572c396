//! Transaction domain model

use std::fmt;
use std::str::FromStr;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::money::Amount;
use crate::domain::result::{Error, Result};

/// Classification of a ledger entry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TransactionKind {
    Income,
    Expense,
}

impl TransactionKind {
    pub fn is_income(&self) -> bool {
        matches!(self, Self::Income)
    }

    pub fn is_expense(&self) -> bool {
        matches!(self, Self::Expense)
    }
}

impl FromStr for TransactionKind {
    type Err = Error;

    /// Parse a kind from its tag, case-insensitively.
    fn from_str(s: &str) -> Result<Self> {
        match s.to_uppercase().as_str() {
            "INCOME" => Ok(Self::Income),
            "EXPENSE" => Ok(Self::Expense),
            _ => Err(Error::validation("invalid transaction kind")),
        }
    }
}

impl fmt::Display for TransactionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Income => f.write_str("INCOME"),
            Self::Expense => f.write_str("EXPENSE"),
        }
    }
}

/// What a ledger entry was for. Trimmed, non-empty, at most 255 characters.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String")]
pub struct Description(String);

impl Description {
    pub fn new(description: &str) -> Result<Self> {
        let trimmed = description.trim();
        if trimmed.is_empty() {
            return Err(Error::validation("description cannot be empty"));
        }
        if trimmed.chars().count() > 255 {
            return Err(Error::validation(
                "description cannot exceed 255 characters",
            ));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for Description {
    type Error = Error;

    fn try_from(value: String) -> Result<Self> {
        Self::new(&value)
    }
}

impl fmt::Display for Description {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// A single income or expense entry belonging to a user.
///
/// Ownership is carried as the user's id, not a reference to the user
/// object, so entries load independently of their owner. All fields are
/// fixed once built; correcting an entry means replacing it wholesale
/// through the store.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    id: String,
    user_id: String,
    kind: TransactionKind,
    amount: Amount,
    description: Description,
    created_at: DateTime<Utc>,
}

impl Transaction {
    /// Build a new entry from validated parts.
    ///
    /// `id` and `user_id` are trimmed and must be non-empty. `created_at`
    /// defaults to now when not supplied.
    pub fn new(
        id: &str,
        user_id: &str,
        kind: TransactionKind,
        amount: Amount,
        description: Description,
        created_at: Option<DateTime<Utc>>,
    ) -> Result<Self> {
        let id = id.trim();
        if id.is_empty() {
            return Err(Error::validation("transaction id cannot be empty"));
        }
        let user_id = user_id.trim();
        if user_id.is_empty() {
            return Err(Error::validation("user id cannot be empty"));
        }
        Ok(Self {
            id: id.to_string(),
            user_id: user_id.to_string(),
            kind,
            amount,
            description,
            created_at: created_at.unwrap_or_else(Utc::now),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn kind(&self) -> TransactionKind {
        self.kind
    }

    pub fn amount(&self) -> Amount {
        self.amount
    }

    pub fn description(&self) -> &Description {
        &self.description
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn is_income(&self) -> bool {
        self.kind.is_income()
    }

    pub fn is_expense(&self) -> bool {
        self.kind.is_expense()
    }

    /// Render the amount with a leading sign and currency prefix,
    /// e.g. `+$ 1000.00` for income and `-$ 300.50` for an expense.
    pub fn formatted_amount(&self) -> String {
        let sign = if self.is_income() { '+' } else { '-' };
        format!("{}$ {}", sign, self.amount)
    }
}
