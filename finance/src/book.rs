//! [`FinanceBook`]: validated CRUD over every finance collection in one key-value store.

use std::sync::Arc;

use chrono::NaiveDate;
use storage::{load_json, save_json, JsonListRepository, KeyValueStore, Repository};
use tracing::{info, instrument};

use crate::bills::{bill_totals, filter_bills, BillFilter, BillTotals};
use crate::error::{FinanceError, Result};
use crate::keys;
use crate::models::{
    Bill, Goal, GoalUpdate, NewBill, NewGoal, NewPatrimonyItem, NewTransaction, PatrimonyItem,
    PatrimonyKind, Profile, ProfileUpdate, Transaction, TransactionKind,
};
use crate::money::parse_amount;
use crate::summary::{build_summary, net_worth, DashboardSummary, NetWorth};

#[derive(Clone)]
pub struct FinanceBook {
    store: Arc<dyn KeyValueStore>,
    expenses: JsonListRepository<Transaction>,
    incomes: JsonListRepository<Transaction>,
    bills: JsonListRepository<Bill>,
    goals: JsonListRepository<Goal>,
    assets: JsonListRepository<PatrimonyItem>,
    liabilities: JsonListRepository<PatrimonyItem>,
}

impl FinanceBook {
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self {
            expenses: JsonListRepository::new(store.clone(), keys::EXPENSES),
            incomes: JsonListRepository::new(store.clone(), keys::INCOMES),
            bills: JsonListRepository::new(store.clone(), keys::BILLS),
            goals: JsonListRepository::new(store.clone(), keys::GOALS),
            assets: JsonListRepository::new(store.clone(), keys::ASSETS),
            liabilities: JsonListRepository::new(store.clone(), keys::LIABILITIES),
            store,
        }
    }

    fn transactions_repo(&self, kind: TransactionKind) -> &JsonListRepository<Transaction> {
        match kind {
            TransactionKind::Expense => &self.expenses,
            TransactionKind::Income => &self.incomes,
        }
    }

    fn patrimony_repo(&self, kind: PatrimonyKind) -> &JsonListRepository<PatrimonyItem> {
        match kind {
            PatrimonyKind::Asset => &self.assets,
            PatrimonyKind::Liability => &self.liabilities,
        }
    }

    // --- transactions ---

    #[instrument(skip(self, input), fields(kind = input.kind.label()))]
    pub async fn add_transaction(
        &self,
        input: NewTransaction,
        today: NaiveDate,
    ) -> Result<Transaction> {
        let tx = input.validate(today)?;
        self.transactions_repo(tx.kind).save(&tx).await?;
        info!(id = %tx.id, amount = tx.amount, category = %tx.category, "transaction added");
        Ok(tx)
    }

    /// Newest first.
    pub async fn transactions(&self, kind: TransactionKind) -> Result<Vec<Transaction>> {
        Ok(self.transactions_repo(kind).find_all().await?)
    }

    pub async fn remove_transaction(&self, kind: TransactionKind, id: &str) -> Result<()> {
        if !self.transactions_repo(kind).delete(id).await? {
            return Err(not_found(kind.label(), id));
        }
        info!(id = %id, kind = kind.label(), "transaction removed");
        Ok(())
    }

    // --- goals ---

    pub async fn add_goal(&self, input: NewGoal) -> Result<Goal> {
        let goal = input.validate()?;
        self.goals.save(&goal).await?;
        info!(id = %goal.id, title = %goal.title, target = goal.target_amount, "goal added");
        Ok(goal)
    }

    pub async fn goals(&self) -> Result<Vec<Goal>> {
        Ok(self.goals.find_all().await?)
    }

    pub async fn update_goal(&self, id: &str, update: GoalUpdate) -> Result<Goal> {
        let mut goal = self.find_goal(id).await?;
        update.apply(&mut goal)?;
        self.goals.save(&goal).await?;
        info!(id = %goal.id, "goal updated");
        Ok(goal)
    }

    /// Adds a positive amount to the goal's saved total.
    pub async fn deposit(&self, id: &str, amount: &str) -> Result<Goal> {
        let amount = parse_amount(amount)?;
        let mut goal = self.find_goal(id).await?;
        goal.saved_amount += amount;
        self.goals.save(&goal).await?;
        info!(
            id = %goal.id,
            amount,
            saved = goal.saved_amount,
            progress = goal.progress(),
            "goal deposit"
        );
        Ok(goal)
    }

    pub async fn remove_goal(&self, id: &str) -> Result<()> {
        if !self.goals.delete(id).await? {
            return Err(not_found("goal", id));
        }
        info!(id = %id, "goal removed");
        Ok(())
    }

    async fn find_goal(&self, id: &str) -> Result<Goal> {
        self.goals
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("goal", id))
    }

    // --- bills ---

    pub async fn add_bill(&self, input: NewBill) -> Result<Bill> {
        let bill = input.validate()?;
        self.bills.save(&bill).await?;
        info!(id = %bill.id, name = %bill.name, due = %bill.due_date, "bill added");
        Ok(bill)
    }

    /// Bills matching `filter`, earliest due first.
    pub async fn bills(&self, filter: BillFilter, today: NaiveDate) -> Result<Vec<Bill>> {
        let all = self.bills.find_all().await?;
        Ok(filter_bills(&all, filter, today))
    }

    pub async fn bill_totals(&self, today: NaiveDate) -> Result<BillTotals> {
        Ok(bill_totals(&self.bills.find_all().await?, today))
    }

    /// Flips paid/unpaid and returns the updated bill.
    pub async fn toggle_bill_paid(&self, id: &str) -> Result<Bill> {
        let mut bill = self
            .bills
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found("bill", id))?;
        bill.paid = !bill.paid;
        self.bills.save(&bill).await?;
        info!(id = %bill.id, paid = bill.paid, "bill toggled");
        Ok(bill)
    }

    pub async fn remove_bill(&self, id: &str) -> Result<()> {
        if !self.bills.delete(id).await? {
            return Err(not_found("bill", id));
        }
        info!(id = %id, "bill removed");
        Ok(())
    }

    // --- patrimony ---

    pub async fn add_patrimony_item(&self, input: NewPatrimonyItem) -> Result<PatrimonyItem> {
        let item = input.validate()?;
        self.patrimony_repo(item.kind).save(&item).await?;
        info!(id = %item.id, kind = item.kind.label(), amount = item.amount, "patrimony item added");
        Ok(item)
    }

    pub async fn patrimony(&self, kind: PatrimonyKind) -> Result<Vec<PatrimonyItem>> {
        Ok(self.patrimony_repo(kind).find_all().await?)
    }

    pub async fn remove_patrimony_item(&self, kind: PatrimonyKind, id: &str) -> Result<()> {
        if !self.patrimony_repo(kind).delete(id).await? {
            return Err(not_found(kind.label(), id));
        }
        info!(id = %id, kind = kind.label(), "patrimony item removed");
        Ok(())
    }

    pub async fn net_worth(&self) -> Result<NetWorth> {
        Ok(net_worth(&self.all_patrimony().await?))
    }

    async fn all_patrimony(&self) -> Result<Vec<PatrimonyItem>> {
        let mut items = self.assets.find_all().await?;
        items.extend(self.liabilities.find_all().await?);
        Ok(items)
    }

    // --- profile ---

    /// The stored profile, or an empty one.
    pub async fn profile(&self) -> Result<Profile> {
        Ok(load_json(self.store.as_ref(), keys::PROFILE)
            .await?
            .unwrap_or_default())
    }

    pub async fn update_profile(&self, update: ProfileUpdate) -> Result<Profile> {
        let profile = update.apply(&self.profile().await?)?;
        save_json(self.store.as_ref(), keys::PROFILE, &profile).await?;
        info!("profile updated");
        Ok(profile)
    }

    // --- dashboard ---

    pub async fn summary(&self, today: NaiveDate) -> Result<DashboardSummary> {
        let profile = self.profile().await?;
        let expenses = self.expenses.find_all().await?;
        let incomes = self.incomes.find_all().await?;
        let bills = self.bills.find_all().await?;
        let goals = self.goals.find_all().await?;
        let patrimony = self.all_patrimony().await?;
        Ok(build_summary(
            &profile, &expenses, &incomes, &bills, &goals, &patrimony, today,
        ))
    }
}

fn not_found(kind: &'static str, id: &str) -> FinanceError {
    FinanceError::NotFound {
        kind,
        id: id.to_string(),
    }
}
