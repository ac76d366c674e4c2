use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use storage::Record;

use super::{new_id, optional, required};
use crate::dates::parse_br_date;
use crate::error::{FinanceError, Result};
use crate::money::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Frequency {
    Once,
    #[default]
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl Frequency {
    pub const ALL: [Frequency; 6] = [
        Frequency::Once,
        Frequency::Monthly,
        Frequency::Bimonthly,
        Frequency::Quarterly,
        Frequency::Semiannual,
        Frequency::Annual,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Frequency::Once => "once",
            Frequency::Monthly => "monthly",
            Frequency::Bimonthly => "bimonthly",
            Frequency::Quarterly => "quarterly",
            Frequency::Semiannual => "semiannual",
            Frequency::Annual => "annual",
        }
    }
}

impl fmt::Display for Frequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Frequency {
    type Err = FinanceError;

    fn from_str(s: &str) -> Result<Self> {
        Frequency::ALL
            .into_iter()
            .find(|f| f.as_str().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| FinanceError::validation(format!("unknown frequency '{}'", s)))
    }
}

/// Derived from `paid` and the due date; never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillStatus {
    Pending,
    Paid,
    Overdue,
}

impl fmt::Display for BillStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BillStatus::Pending => write!(f, "pending"),
            BillStatus::Paid => write!(f, "paid"),
            BillStatus::Overdue => write!(f, "overdue"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Bill {
    pub id: String,
    pub name: String,
    pub category: String,
    pub amount: f64,
    pub due_date: NaiveDate,
    pub recurring: bool,
    pub frequency: Frequency,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
    pub paid: bool,
    pub created_at: DateTime<Utc>,
}

impl Bill {
    pub fn is_overdue(&self, today: NaiveDate) -> bool {
        !self.paid && self.due_date < today
    }

    pub fn status(&self, today: NaiveDate) -> BillStatus {
        if self.paid {
            BillStatus::Paid
        } else if self.is_overdue(today) {
            BillStatus::Overdue
        } else {
            BillStatus::Pending
        }
    }
}

impl Record for Bill {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewBill {
    pub name: String,
    pub category: String,
    pub amount: String,
    /// `DD/MM/YYYY`
    pub due_date: String,
    pub recurring: bool,
    pub frequency: Frequency,
    pub payment_method: Option<String>,
    pub notes: Option<String>,
}

impl NewBill {
    pub fn validate(self) -> Result<Bill> {
        let name = required("name", &self.name)?;
        let category = required("category", &self.category)?;
        let amount = parse_amount(&self.amount)?;
        let due_date = parse_br_date(&required("due date", &self.due_date)?)?;
        Ok(Bill {
            id: new_id(),
            name,
            category,
            amount,
            due_date,
            recurring: self.recurring,
            frequency: if self.recurring {
                self.frequency
            } else {
                Frequency::Once
            },
            payment_method: optional(self.payment_method),
            notes: optional(self.notes),
            paid: false,
            created_at: Utc::now(),
        })
    }
}
