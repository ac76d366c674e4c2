use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use storage::Record;

use super::{new_id, optional, required};
use crate::error::Result;
use crate::money::parse_amount;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PatrimonyKind {
    Asset,
    Liability,
}

impl PatrimonyKind {
    pub fn label(&self) -> &'static str {
        match self {
            PatrimonyKind::Asset => "asset",
            PatrimonyKind::Liability => "liability",
        }
    }
}

/// An asset (property, vehicle, investment) or a liability (loan, financing, card debt).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PatrimonyItem {
    pub id: String,
    pub kind: PatrimonyKind,
    pub category: String,
    pub description: String,
    pub amount: f64,
    pub notes: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Record for PatrimonyItem {
    fn id(&self) -> &str {
        &self.id
    }
}

#[derive(Debug, Clone)]
pub struct NewPatrimonyItem {
    pub kind: PatrimonyKind,
    pub category: String,
    pub description: String,
    pub amount: String,
    pub notes: Option<String>,
}

impl NewPatrimonyItem {
    pub fn validate(self) -> Result<PatrimonyItem> {
        Ok(PatrimonyItem {
            id: new_id(),
            kind: self.kind,
            category: required("category", &self.category)?,
            description: required("description", &self.description)?,
            amount: parse_amount(&self.amount)?,
            notes: optional(self.notes),
            created_at: Utc::now(),
        })
    }
}
