//! Stored finance records and the raw form inputs they are validated from.

mod bill;
mod goal;
mod patrimony;
mod profile;
mod transaction;

pub use bill::{Bill, BillStatus, Frequency, NewBill};
pub use goal::{Goal, GoalUpdate, NewGoal};
pub use patrimony::{NewPatrimonyItem, PatrimonyItem, PatrimonyKind};
pub use profile::{Profile, ProfileUpdate};
pub use transaction::{NewTransaction, Transaction, TransactionKind};

use crate::error::{FinanceError, Result};

/// Trimmed value of a required text field.
pub(crate) fn required(field: &str, value: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(FinanceError::validation(format!("{} is required", field)));
    }
    Ok(trimmed.to_string())
}

/// Blank optional text becomes `None`.
pub(crate) fn optional(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

pub(crate) fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}
