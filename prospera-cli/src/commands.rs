//! Finance command execution. Each command returns the text to print.

use anyhow::{Context, Result};
use chrono::NaiveDate;
use finance::{
    BillFilter, FinanceBook, GoalUpdate, NewBill, NewGoal, NewPatrimonyItem, NewTransaction,
    PatrimonyKind, ProfileUpdate,
};
use std::sync::Arc;
use storage::{KeyValueStore, SqliteKeyValueStore};
use tracing::{info, instrument};

use crate::cli::{
    BillCommand, Commands, GoalCommand, PatrimonyCommand, ProfileCommand, TransactionCommand,
};
use crate::render;

/// Opens (creating if needed) the SQLite-backed key-value store.
#[instrument]
pub async fn open_store(database_url: &str) -> Result<Arc<dyn KeyValueStore>> {
    let store = SqliteKeyValueStore::new(database_url)
        .await
        .with_context(|| format!("Open finance store at {}", database_url))?;
    info!(database_url = %database_url, "Finance store ready");
    Ok(Arc::new(store))
}

/// Runs one finance command. `chat` is not a finance command and is rejected.
pub async fn execute(book: &FinanceBook, command: Commands, today: NaiveDate) -> Result<String> {
    match command {
        Commands::Chat { .. } => anyhow::bail!("chat is interactive and not run through execute"),
        Commands::Transaction(cmd) => transaction(book, cmd, today).await,
        Commands::Goal(cmd) => goal(book, cmd).await,
        Commands::Bill(cmd) => bill(book, cmd, today).await,
        Commands::Patrimony(cmd) => patrimony(book, cmd).await,
        Commands::Profile(cmd) => profile(book, cmd).await,
        Commands::Summary => {
            let summary = book.summary(today).await.context("Build summary")?;
            Ok(render::summary(&summary))
        }
    }
}

async fn transaction(book: &FinanceBook, cmd: TransactionCommand, today: NaiveDate) -> Result<String> {
    match cmd {
        TransactionCommand::Add(args) => {
            let tx = book
                .add_transaction(
                    NewTransaction {
                        kind: args.kind.into(),
                        category: args.category,
                        description: args.description,
                        amount: args.amount,
                        date: args.date,
                        notes: args.notes,
                    },
                    today,
                )
                .await
                .context("Add transaction")?;
            Ok(format!("Added {} {}", tx.kind.label(), tx.id))
        }
        TransactionCommand::List { kind } => {
            let items = book.transactions(kind.into()).await?;
            Ok(render::transactions(&items))
        }
        TransactionCommand::Remove { kind, id } => {
            book.remove_transaction(kind.into(), &id)
                .await
                .context("Remove transaction")?;
            Ok(format!("Removed {}", id))
        }
    }
}

async fn goal(book: &FinanceBook, cmd: GoalCommand) -> Result<String> {
    match cmd {
        GoalCommand::Add {
            title,
            target,
            category,
            date,
        } => {
            let goal = book
                .add_goal(NewGoal {
                    title,
                    target_amount: target,
                    category,
                    target_date: date,
                })
                .await
                .context("Add goal")?;
            Ok(format!("Added goal {}", goal.id))
        }
        GoalCommand::Edit {
            id,
            title,
            target,
            category,
            date,
        } => {
            let goal = book
                .update_goal(
                    &id,
                    GoalUpdate {
                        title,
                        target_amount: target,
                        category,
                        target_date: date,
                    },
                )
                .await
                .context("Edit goal")?;
            Ok(render::goal(&goal))
        }
        GoalCommand::Deposit { id, amount } => {
            let goal = book.deposit(&id, &amount).await.context("Deposit")?;
            Ok(render::goal(&goal))
        }
        GoalCommand::List => Ok(render::goals(&book.goals().await?)),
        GoalCommand::Remove { id } => {
            book.remove_goal(&id).await.context("Remove goal")?;
            Ok(format!("Removed {}", id))
        }
    }
}

async fn bill(book: &FinanceBook, cmd: BillCommand, today: NaiveDate) -> Result<String> {
    match cmd {
        BillCommand::Add(args) => {
            let bill = book
                .add_bill(NewBill {
                    name: args.name,
                    category: args.category,
                    amount: args.amount,
                    due_date: args.due,
                    recurring: args.recurring,
                    frequency: args.frequency.into(),
                    payment_method: args.payment_method,
                    notes: args.notes,
                })
                .await
                .context("Add bill")?;
            Ok(format!("Added bill {}", bill.id))
        }
        BillCommand::Pay { id } => {
            let bill = book.toggle_bill_paid(&id).await.context("Toggle bill")?;
            Ok(format!("{}: {}", bill.name, bill.status(today)))
        }
        BillCommand::List { filter } => {
            let filter: BillFilter = filter.into();
            let items = book.bills(filter, today).await?;
            let totals = book.bill_totals(today).await?;
            Ok(render::bills(&items, &totals, today))
        }
        BillCommand::Remove { id } => {
            book.remove_bill(&id).await.context("Remove bill")?;
            Ok(format!("Removed {}", id))
        }
    }
}

async fn patrimony(book: &FinanceBook, cmd: PatrimonyCommand) -> Result<String> {
    match cmd {
        PatrimonyCommand::Add {
            kind,
            category,
            description,
            amount,
            notes,
        } => {
            let item = book
                .add_patrimony_item(NewPatrimonyItem {
                    kind: kind.into(),
                    category,
                    description,
                    amount,
                    notes,
                })
                .await
                .context("Add patrimony item")?;
            Ok(format!("Added {} {}", item.kind.label(), item.id))
        }
        PatrimonyCommand::List { kind: Some(kind) } => {
            Ok(render::patrimony(&book.patrimony(kind.into()).await?))
        }
        PatrimonyCommand::List { kind: None } => {
            let mut items = book.patrimony(PatrimonyKind::Asset).await?;
            items.extend(book.patrimony(PatrimonyKind::Liability).await?);
            let nw = book.net_worth().await?;
            Ok(format!(
                "{}\n{}",
                render::patrimony(&items),
                render::net_worth(&nw)
            ))
        }
        PatrimonyCommand::Remove { kind, id } => {
            book.remove_patrimony_item(kind.into(), &id)
                .await
                .context("Remove patrimony item")?;
            Ok(format!("Removed {}", id))
        }
    }
}

async fn profile(book: &FinanceBook, cmd: ProfileCommand) -> Result<String> {
    match cmd {
        ProfileCommand::Show => Ok(render::profile(&book.profile().await?)),
        ProfileCommand::Set {
            name,
            email,
            income,
        } => {
            let profile = book
                .update_profile(ProfileUpdate {
                    name,
                    email,
                    monthly_net_income: income,
                })
                .await
                .context("Update profile")?;
            Ok(render::profile(&profile))
        }
    }
}
