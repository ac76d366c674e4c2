//! # prospera-cli
//!
//! Argument parsing, store opening and the finance commands behind the `prospera` binary.

pub mod cli;
pub mod commands;
pub mod render;

pub use cli::{
    BillAddArgs, BillCommand, BillFilterArg, Cli, Commands, FrequencyArg, GoalCommand,
    PatrimonyCommand, PatrimonyKindArg, ProfileCommand, TransactionAddArgs, TransactionCommand,
    TransactionKindArg,
};
pub use commands::{execute, open_store};
