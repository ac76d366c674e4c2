use serde::{Deserialize, Serialize};

use super::{optional, required};
use crate::error::{FinanceError, Result};
use crate::money::parse_amount;

/// The single user profile. Absent from the store until first saved.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Profile {
    pub name: String,
    pub email: Option<String>,
    /// Added to recorded incomes on the dashboard.
    pub monthly_net_income: f64,
}

/// `None` leaves the field unchanged. An empty income clears it to zero.
#[derive(Debug, Clone, Default)]
pub struct ProfileUpdate {
    pub name: Option<String>,
    pub email: Option<String>,
    pub monthly_net_income: Option<String>,
}

impl ProfileUpdate {
    pub fn apply(self, profile: &Profile) -> Result<Profile> {
        let mut updated = profile.clone();
        if let Some(name) = self.name {
            updated.name = required("name", &name)?;
        }
        if let Some(email) = self.email {
            let email = optional(Some(email));
            if let Some(address) = &email {
                if !address.contains('@') {
                    return Err(FinanceError::validation(format!(
                        "invalid email '{}'",
                        address
                    )));
                }
            }
            updated.email = email;
        }
        if let Some(raw) = self.monthly_net_income {
            updated.monthly_net_income = if raw.trim().is_empty() {
                0.0
            } else {
                parse_amount(&raw)?
            };
        }
        Ok(updated)
    }
}
