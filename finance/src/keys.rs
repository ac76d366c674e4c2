//! Store keys. One JSON value per key.

pub const PROFILE: &str = "prospera:profile";
pub const EXPENSES: &str = "prospera:expenses";
pub const INCOMES: &str = "prospera:incomes";
pub const BILLS: &str = "prospera:bills";
pub const GOALS: &str = "prospera:goals";
pub const ASSETS: &str = "prospera:assets";
pub const LIABILITIES: &str = "prospera:liabilities";
