use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use storage::Record;

use super::{new_id, optional, required};
use crate::dates::parse_br_date;
use crate::error::Result;
use crate::money::parse_amount;
use crate::progress::percentage;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub id: String,
    pub title: String,
    pub category: Option<String>,
    pub target_amount: f64,
    pub saved_amount: f64,
    pub target_date: Option<NaiveDate>,
    pub created_at: DateTime<Utc>,
}

impl Goal {
    pub fn progress(&self) -> f64 {
        percentage(self.saved_amount, self.target_amount)
    }

    pub fn remaining(&self) -> f64 {
        (self.target_amount - self.saved_amount).max(0.0)
    }

    pub fn is_reached(&self) -> bool {
        self.target_amount > 0.0 && self.saved_amount >= self.target_amount
    }
}

impl Record for Goal {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewGoal {
    pub title: String,
    pub target_amount: String,
    pub category: Option<String>,
    pub target_date: Option<String>,
}

impl NewGoal {
    pub fn validate(self) -> Result<Goal> {
        let title = required("title", &self.title)?;
        let target_amount = parse_amount(&self.target_amount)?;
        let target_date = optional(self.target_date)
            .map(|raw| parse_br_date(&raw))
            .transpose()?;
        Ok(Goal {
            id: new_id(),
            title,
            category: optional(self.category),
            target_amount,
            saved_amount: 0.0,
            target_date,
            created_at: Utc::now(),
        })
    }
}

/// Edit form. `None` leaves the field unchanged.
#[derive(Debug, Clone, Default)]
pub struct GoalUpdate {
    pub title: Option<String>,
    pub target_amount: Option<String>,
    pub category: Option<String>,
    pub target_date: Option<String>,
}

impl GoalUpdate {
    /// Leaves `goal` untouched if any field is invalid.
    pub fn apply(self, goal: &mut Goal) -> Result<()> {
        let mut updated = goal.clone();
        if let Some(title) = self.title {
            updated.title = required("title", &title)?;
        }
        if let Some(raw) = self.target_amount {
            updated.target_amount = parse_amount(&raw)?;
        }
        if let Some(category) = self.category {
            updated.category = optional(Some(category));
        }
        if let Some(raw) = self.target_date {
            updated.target_date = optional(Some(raw))
                .map(|d| parse_br_date(&d))
                .transpose()?;
        }
        *goal = updated;
        Ok(())
    }
}
