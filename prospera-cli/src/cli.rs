//! CLI parser.

use clap::{Args, Parser, Subcommand, ValueEnum};
use dialogue::FlowType;
use finance::{BillFilter, Frequency, PatrimonyKind, TransactionKind};

#[derive(Parser)]
#[command(name = "prospera")]
#[command(about = "Prospera: personal finances and support chat", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Overrides DATABASE_URL.
    #[arg(long, global = true)]
    pub database_url: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the support chat in the terminal.
    Chat {
        /// Start directly on a flow: me_roubaram, denuncias, protecao, atendimento, cancelar_conta.
        #[arg(long)]
        flow: Option<FlowType>,
    },
    /// Expenses and incomes.
    #[command(subcommand)]
    Transaction(TransactionCommand),
    /// Savings goals.
    #[command(subcommand)]
    Goal(GoalCommand),
    /// Bills to pay.
    #[command(subcommand)]
    Bill(BillCommand),
    /// Assets and liabilities.
    #[command(subcommand)]
    Patrimony(PatrimonyCommand),
    #[command(subcommand)]
    Profile(ProfileCommand),
    /// Dashboard totals.
    Summary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum TransactionKindArg {
    Expense,
    Income,
}

impl From<TransactionKindArg> for TransactionKind {
    fn from(arg: TransactionKindArg) -> Self {
        match arg {
            TransactionKindArg::Expense => TransactionKind::Expense,
            TransactionKindArg::Income => TransactionKind::Income,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PatrimonyKindArg {
    Asset,
    Liability,
}

impl From<PatrimonyKindArg> for PatrimonyKind {
    fn from(arg: PatrimonyKindArg) -> Self {
        match arg {
            PatrimonyKindArg::Asset => PatrimonyKind::Asset,
            PatrimonyKindArg::Liability => PatrimonyKind::Liability,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum BillFilterArg {
    Upcoming,
    ThisMonth,
    Overdue,
    All,
}

impl From<BillFilterArg> for BillFilter {
    fn from(arg: BillFilterArg) -> Self {
        match arg {
            BillFilterArg::Upcoming => BillFilter::Upcoming,
            BillFilterArg::ThisMonth => BillFilter::ThisMonth,
            BillFilterArg::Overdue => BillFilter::Overdue,
            BillFilterArg::All => BillFilter::All,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum FrequencyArg {
    Once,
    Monthly,
    Bimonthly,
    Quarterly,
    Semiannual,
    Annual,
}

impl From<FrequencyArg> for Frequency {
    fn from(arg: FrequencyArg) -> Self {
        match arg {
            FrequencyArg::Once => Frequency::Once,
            FrequencyArg::Monthly => Frequency::Monthly,
            FrequencyArg::Bimonthly => Frequency::Bimonthly,
            FrequencyArg::Quarterly => Frequency::Quarterly,
            FrequencyArg::Semiannual => Frequency::Semiannual,
            FrequencyArg::Annual => Frequency::Annual,
        }
    }
}

#[derive(Subcommand)]
pub enum TransactionCommand {
    Add(TransactionAddArgs),
    List {
        #[arg(long, value_enum, default_value = "expense")]
        kind: TransactionKindArg,
    },
    Remove {
        #[arg(long, value_enum)]
        kind: TransactionKindArg,
        id: String,
    },
}

#[derive(Args)]
pub struct TransactionAddArgs {
    #[arg(long, value_enum)]
    pub kind: TransactionKindArg,
    #[arg(long)]
    pub description: String,
    #[arg(long)]
    pub category: String,
    /// Brazilian format, e.g. 1.234,56
    #[arg(long)]
    pub amount: String,
    /// DD/MM/YYYY; defaults to today.
    #[arg(long)]
    pub date: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum GoalCommand {
    Add {
        #[arg(long)]
        title: String,
        #[arg(long)]
        target: String,
        #[arg(long)]
        category: Option<String>,
        /// DD/MM/YYYY
        #[arg(long)]
        date: Option<String>,
    },
    Edit {
        id: String,
        #[arg(long)]
        title: Option<String>,
        #[arg(long)]
        target: Option<String>,
        #[arg(long)]
        category: Option<String>,
        /// DD/MM/YYYY; an empty value clears it.
        #[arg(long)]
        date: Option<String>,
    },
    /// Add money to a goal.
    Deposit { id: String, amount: String },
    List,
    Remove { id: String },
}

#[derive(Subcommand)]
pub enum BillCommand {
    Add(BillAddArgs),
    /// Toggle paid / unpaid.
    Pay { id: String },
    List {
        #[arg(long, value_enum, default_value = "upcoming")]
        filter: BillFilterArg,
    },
    Remove { id: String },
}

#[derive(Args)]
pub struct BillAddArgs {
    #[arg(long)]
    pub name: String,
    #[arg(long)]
    pub category: String,
    #[arg(long)]
    pub amount: String,
    /// DD/MM/YYYY
    #[arg(long)]
    pub due: String,
    #[arg(long)]
    pub recurring: bool,
    #[arg(long, value_enum, default_value = "monthly")]
    pub frequency: FrequencyArg,
    #[arg(long)]
    pub payment_method: Option<String>,
    #[arg(long)]
    pub notes: Option<String>,
}

#[derive(Subcommand)]
pub enum PatrimonyCommand {
    Add {
        #[arg(long, value_enum)]
        kind: PatrimonyKindArg,
        #[arg(long)]
        category: String,
        #[arg(long)]
        description: String,
        #[arg(long)]
        amount: String,
        #[arg(long)]
        notes: Option<String>,
    },
    /// Lists both kinds and the net worth unless a kind is given.
    List {
        #[arg(long, value_enum)]
        kind: Option<PatrimonyKindArg>,
    },
    Remove {
        #[arg(long, value_enum)]
        kind: PatrimonyKindArg,
        id: String,
    },
}

#[derive(Subcommand)]
pub enum ProfileCommand {
    Show,
    Set {
        #[arg(long)]
        name: Option<String>,
        #[arg(long)]
        email: Option<String>,
        /// Monthly net income; empty clears it.
        #[arg(long)]
        income: Option<String>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_chat_with_flow() {
        let cli = Cli::try_parse_from(["prospera", "chat", "--flow", "denuncias"]).unwrap();
        match cli.command {
            Commands::Chat { flow } => assert_eq!(flow, Some(FlowType::Complaint)),
            _ => panic!("expected chat"),
        }
        assert!(Cli::try_parse_from(["prospera", "chat", "--flow", "nope"]).is_err());
    }

    #[test]
    fn test_parse_bill_list_filter() {
        let cli =
            Cli::try_parse_from(["prospera", "bill", "list", "--filter", "this-month"]).unwrap();
        match cli.command {
            Commands::Bill(BillCommand::List { filter }) => {
                assert_eq!(BillFilter::from(filter), BillFilter::ThisMonth)
            }
            _ => panic!("expected bill list"),
        }
    }

    #[test]
    fn test_global_database_url() {
        let cli = Cli::try_parse_from(["prospera", "summary", "--database-url", "sqlite::memory:"])
            .unwrap();
        assert_eq!(cli.database_url.as_deref(), Some("sqlite::memory:"));
    }
}
