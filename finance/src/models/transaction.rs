use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use storage::Record;

use super::{new_id, optional, required};
use crate::dates::parse_br_date;
use crate::error::Result;
use crate::money::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransactionKind {
    Expense,
    Income,
}

impl TransactionKind {
    pub fn label(&self) -> &'static str {
        match self {
            TransactionKind::Expense => "expense",
            TransactionKind::Income => "income",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub date: NaiveDate,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for Transaction {
    fn id(&self) -> &str {
        &self.id
    }
}

/// Raw form input for a new expense or income.
#[derive(Debug, Clone)]
pub struct NewTransaction {
    pub kind: TransactionKind,
    pub category: String,
    pub description: String,
    pub amount: String,
    /// `DD/MM/YYYY`; today when absent.
    pub date: Option<String>,
    pub notes: Option<String>,
}

impl NewTransaction {
    pub fn validate(self, today: NaiveDate) -> Result<Transaction> {
        let description = required("description", &self.description)?;
        let category = required("category", &self.category)?;
        let amount = parse_amount(&self.amount)?;
        let date = match optional(self.date) {
            Some(raw) => parse_br_date(&raw)?,
            None => today,
        };
        Ok(Transaction {
            id: new_id(),
            kind: self.kind,
            category,
            description,
            amount,
            date,
            notes: optional(self.notes),
            created_at: Utc::now(),
        })
    }
}
