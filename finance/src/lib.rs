//! # finance
//!
//! Personal-finance records (transactions, goals, bills, assets and liabilities, profile) kept as JSON
//! lists in a [`storage::KeyValueStore`], plus the small amount of arithmetic the screens need: Brazilian
//! currency and date parsing, goal progress, bill filters and dashboard totals.

pub mod bills;
pub mod book;
pub mod dates;
pub mod error;
pub mod keys;
pub mod models;
pub mod money;
pub mod progress;
pub mod summary;

pub use bills::{bill_totals, filter_bills, BillFilter, BillTotals};
pub use book::FinanceBook;
pub use dates::{format_br_date, mask_date_input, parse_br_date};
pub use error::{FinanceError, Result};
pub use models::{
    Bill, BillStatus, Frequency, Goal, GoalUpdate, NewBill, NewGoal, NewPatrimonyItem,
    NewTransaction, PatrimonyItem, PatrimonyKind, Profile, ProfileUpdate, Transaction,
    TransactionKind,
};
pub use money::{format_brl, format_decimal_br, mask_amount_input, parse_amount};
pub use progress::percentage;
pub use summary::{
    build_summary, net_worth, totals_by_category, CategoryTotal, DashboardSummary, GoalProgress,
    NetWorth,
};
