//! Dashboard aggregation: totals, per-category breakdowns, pending bills, goal progress and net worth.

use chrono::NaiveDate;
use serde::Serialize;

use crate::models::{Bill, Goal, PatrimonyItem, PatrimonyKind, Profile, Transaction};

/// Pending bills shown on the dashboard.
pub const DASHBOARD_PENDING_BILLS: usize = 3;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CategoryTotal {
    pub category: String,
    pub amount: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GoalProgress {
    pub id: String,
    pub title: String,
    pub saved: f64,
    pub target: f64,
    pub percentage: f64,
}

impl From<&Goal> for GoalProgress {
    fn from(goal: &Goal) -> Self {
        Self {
            id: goal.id.clone(),
            title: goal.title.clone(),
            saved: goal.saved_amount,
            target: goal.target_amount,
            percentage: goal.progress(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct NetWorth {
    pub assets: f64,
    pub liabilities: f64,
    pub net: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DashboardSummary {
    pub as_of: NaiveDate,
    /// Recorded incomes plus the profile's monthly net income.
    pub total_income: f64,
    pub total_expenses: f64,
    pub balance: f64,
    pub expenses_by_category: Vec<CategoryTotal>,
    pub income_by_category: Vec<CategoryTotal>,
    pub pending_bills: Vec<Bill>,
    pub goals: Vec<GoalProgress>,
    pub net_worth: NetWorth,
}

/// Sums by category in first-seen order. Categories totalling zero or less are dropped.
pub fn totals_by_category(transactions: &[Transaction]) -> Vec<CategoryTotal> {
    let mut totals: Vec<CategoryTotal> = Vec::new();
    for tx in transactions {
        match totals.iter_mut().find(|t| t.category == tx.category) {
            Some(total) => total.amount += tx.amount,
            None => totals.push(CategoryTotal {
                category: tx.category.clone(),
                amount: tx.amount,
            }),
        }
    }
    totals.retain(|t| t.amount > 0.0);
    totals
}

pub fn net_worth(items: &[PatrimonyItem]) -> NetWorth {
    let sum = |kind: PatrimonyKind| -> f64 {
        items
            .iter()
            .filter(|i| i.kind == kind)
            .map(|i| i.amount)
            .sum()
    };
    let assets = sum(PatrimonyKind::Asset);
    let liabilities = sum(PatrimonyKind::Liability);
    NetWorth {
        assets,
        liabilities,
        net: assets - liabilities,
    }
}

/// Builds the dashboard. Pending bills are the first three unpaid bills by due date.
pub fn build_summary(
    profile: &Profile,
    expenses: &[Transaction],
    incomes: &[Transaction],
    bills: &[Bill],
    goals: &[Goal],
    patrimony: &[PatrimonyItem],
    today: NaiveDate,
) -> DashboardSummary {
    let recorded_income: f64 = incomes.iter().map(|t| t.amount).sum();
    let total_income = recorded_income + profile.monthly_net_income;
    let total_expenses: f64 = expenses.iter().map(|t| t.amount).sum();

    let mut pending_bills: Vec<Bill> = bills.iter().filter(|b| !b.paid).cloned().collect();
    pending_bills.sort_by_key(|b| b.due_date);
    pending_bills.truncate(DASHBOARD_PENDING_BILLS);

    DashboardSummary {
        as_of: today,
        total_income,
        total_expenses,
        balance: total_income - total_expenses,
        expenses_by_category: totals_by_category(expenses),
        income_by_category: totals_by_category(incomes),
        pending_bills,
        goals: goals.iter().map(GoalProgress::from).collect(),
        net_worth: net_worth(patrimony),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Frequency, TransactionKind};
    use chrono::Utc;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn tx(kind: TransactionKind, category: &str, amount: f64) -> Transaction {
        Transaction {
            id: format!("{}-{}", category, amount),
            kind,
            category: category.to_string(),
            description: category.to_string(),
            amount,
            date: date(2025, 3, 1),
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn item(kind: PatrimonyKind, amount: f64) -> PatrimonyItem {
        PatrimonyItem {
            id: format!("{:?}-{}", kind, amount),
            kind,
            category: "outros".to_string(),
            description: "item".to_string(),
            amount,
            notes: None,
            created_at: Utc::now(),
        }
    }

    fn bill(id: &str, due: NaiveDate, paid: bool) -> Bill {
        Bill {
            id: id.to_string(),
            name: id.to_string(),
            category: "outros".to_string(),
            amount: 10.0,
            due_date: due,
            recurring: false,
            frequency: Frequency::Once,
            payment_method: None,
            notes: None,
            paid,
            created_at: Utc::now(),
        }
    }

    #[test]
    fn test_totals_by_category_keeps_order_and_drops_zero() {
        let txs = vec![
            tx(TransactionKind::Expense, "mercado", 100.0),
            tx(TransactionKind::Expense, "lazer", 0.0),
            tx(TransactionKind::Expense, "transporte", 30.0),
            tx(TransactionKind::Expense, "mercado", 50.0),
        ];
        let totals = totals_by_category(&txs);
        assert_eq!(totals.len(), 2);
        assert_eq!(totals[0].category, "mercado");
        assert_eq!(totals[0].amount, 150.0);
        assert_eq!(totals[1].category, "transporte");
    }

    #[test]
    fn test_net_worth() {
        let items = vec![
            item(PatrimonyKind::Asset, 200_000.0),
            item(PatrimonyKind::Asset, 50_000.0),
            item(PatrimonyKind::Liability, 80_000.0),
        ];
        let nw = net_worth(&items);
        assert_eq!(nw.assets, 250_000.0);
        assert_eq!(nw.liabilities, 80_000.0);
        assert_eq!(nw.net, 170_000.0);
        assert_eq!(net_worth(&[]), NetWorth::default());
    }

    /// **Test: Summary adds the profile income and keeps three pending bills**
    ///
    /// **Setup:** Monthly net income 3000, one recorded income, two expenses, four unpaid bills and one paid.
    ///
    /// **Expected:** Income 3500, expenses 700, balance 2800, the three earliest unpaid bills.
    #[test]
    fn test_build_summary() {
        let profile = Profile {
            name: "Ana".to_string(),
            email: None,
            monthly_net_income: 3000.0,
        };
        let incomes = vec![tx(TransactionKind::Income, "freela", 500.0)];
        let expenses = vec![
            tx(TransactionKind::Expense, "mercado", 400.0),
            tx(TransactionKind::Expense, "aluguel", 300.0),
        ];
        let bills = vec![
            bill("d", date(2025, 3, 20), false),
            bill("a", date(2025, 3, 1), false),
            bill("paid", date(2025, 2, 1), true),
            bill("c", date(2025, 3, 15), false),
            bill("b", date(2025, 3, 10), false),
        ];
        let today = date(2025, 3, 10);

        let summary = build_summary(&profile, &expenses, &incomes, &bills, &[], &[], today);

        assert_eq!(summary.total_income, 3500.0);
        assert_eq!(summary.total_expenses, 700.0);
        assert_eq!(summary.balance, 2800.0);
        assert_eq!(summary.income_by_category.len(), 1);
        let pending: Vec<&str> = summary.pending_bills.iter().map(|b| b.id.as_str()).collect();
        assert_eq!(pending, vec!["a", "b", "c"]);
        assert!(summary.goals.is_empty());
    }
}
