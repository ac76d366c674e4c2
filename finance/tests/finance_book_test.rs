//! FinanceBook integration tests over the in-memory key-value store.

use std::sync::Arc;

use chrono::NaiveDate;
use finance::{
    BillFilter, FinanceBook, FinanceError, Frequency, GoalUpdate, NewBill, NewGoal,
    NewPatrimonyItem, NewTransaction, PatrimonyKind, ProfileUpdate, TransactionKind,
};
use storage::{InMemoryKeyValueStore, KeyValueStore};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 3, 10).unwrap()
}

fn book() -> (FinanceBook, Arc<InMemoryKeyValueStore>) {
    let store = Arc::new(InMemoryKeyValueStore::new());
    (FinanceBook::new(store.clone()), store)
}

fn expense(description: &str, category: &str, amount: &str) -> NewTransaction {
    NewTransaction {
        kind: TransactionKind::Expense,
        category: category.to_string(),
        description: description.to_string(),
        amount: amount.to_string(),
        date: None,
        notes: None,
    }
}

fn new_bill(name: &str, due: &str, amount: &str) -> NewBill {
    NewBill {
        name: name.to_string(),
        category: "moradia".to_string(),
        amount: amount.to_string(),
        due_date: due.to_string(),
        recurring: true,
        frequency: Frequency::Monthly,
        payment_method: None,
        notes: None,
    }
}

/// **Test: Transactions are stored per kind, newest first, under their own key**
#[tokio::test]
async fn test_transactions_by_kind() {
    let (book, store) = book();
    book.add_transaction(expense("Mercado", "alimentacao", "200,00"), today())
        .await
        .unwrap();
    book.add_transaction(expense("Uber", "transporte", "35,50"), today())
        .await
        .unwrap();

    let expenses = book.transactions(TransactionKind::Expense).await.unwrap();
    assert_eq!(expenses.len(), 2);
    assert_eq!(expenses[0].description, "Uber");
    assert!(book
        .transactions(TransactionKind::Income)
        .await
        .unwrap()
        .is_empty());
    assert!(store.get("prospera:expenses").await.unwrap().is_some());
    assert!(store.get("prospera:incomes").await.unwrap().is_none());
}

/// **Test: Invalid input is rejected without writing anything**
#[tokio::test]
async fn test_invalid_transaction_not_stored() {
    let (book, store) = book();
    let err = book
        .add_transaction(expense("Mercado", "alimentacao", "0"), today())
        .await
        .unwrap_err();
    assert!(matches!(err, FinanceError::Validation(_)));
    assert!(store.get("prospera:expenses").await.unwrap().is_none());
}

#[tokio::test]
async fn test_remove_transaction() {
    let (book, _) = book();
    let tx = book
        .add_transaction(expense("Mercado", "alimentacao", "10"), today())
        .await
        .unwrap();
    book.remove_transaction(TransactionKind::Expense, &tx.id)
        .await
        .unwrap();
    assert!(book
        .transactions(TransactionKind::Expense)
        .await
        .unwrap()
        .is_empty());

    let err = book
        .remove_transaction(TransactionKind::Expense, &tx.id)
        .await
        .unwrap_err();
    assert!(matches!(err, FinanceError::NotFound { .. }));
}

/// **Test: Goal deposit accumulates and progress is reported**
///
/// **Setup:** Goal with target 1.000,00.
///
/// **Action:** Deposit 250,00 twice, then try a zero deposit.
///
/// **Expected:** Saved 500, progress 50%, zero deposit rejected and saved unchanged.
#[tokio::test]
async fn test_goal_deposit() {
    let (book, _) = book();
    let goal = book
        .add_goal(NewGoal {
            title: "Reserva".to_string(),
            target_amount: "1.000,00".to_string(),
            category: None,
            target_date: None,
        })
        .await
        .unwrap();

    book.deposit(&goal.id, "250,00").await.unwrap();
    let updated = book.deposit(&goal.id, "250,00").await.unwrap();
    assert_eq!(updated.saved_amount, 500.0);
    assert_eq!(updated.progress(), 50.0);

    assert!(book.deposit(&goal.id, "0").await.is_err());
    assert_eq!(book.goals().await.unwrap()[0].saved_amount, 500.0);

    let err = book.deposit("missing", "10").await.unwrap_err();
    assert!(matches!(err, FinanceError::NotFound { kind: "goal", .. }));
}

#[tokio::test]
async fn test_goal_edit_and_remove() {
    let (book, _) = book();
    let goal = book
        .add_goal(NewGoal {
            title: "Carro".to_string(),
            target_amount: "30.000,00".to_string(),
            category: Some("veiculo".to_string()),
            target_date: Some("01/12/2026".to_string()),
        })
        .await
        .unwrap();

    let edited = book
        .update_goal(
            &goal.id,
            GoalUpdate {
                title: Some("Carro novo".to_string()),
                ..Default::default()
            },
        )
        .await
        .unwrap();
    assert_eq!(edited.title, "Carro novo");
    assert_eq!(edited.target_amount, 30_000.0);
    assert_eq!(book.goals().await.unwrap().len(), 1);

    book.remove_goal(&goal.id).await.unwrap();
    assert!(book.goals().await.unwrap().is_empty());
}

/// **Test: Toggling paid moves a bill out of the upcoming filter and back**
#[tokio::test]
async fn test_bill_toggle_and_filters() {
    let (book, _) = book();
    let rent = book
        .add_bill(new_bill("Aluguel", "12/03/2025", "1.500,00"))
        .await
        .unwrap();
    book.add_bill(new_bill("Luz", "01/03/2025", "120,00"))
        .await
        .unwrap();

    let upcoming = book.bills(BillFilter::Upcoming, today()).await.unwrap();
    assert_eq!(upcoming.len(), 1);
    assert_eq!(upcoming[0].name, "Aluguel");

    let overdue = book.bills(BillFilter::Overdue, today()).await.unwrap();
    assert_eq!(overdue.len(), 1);
    assert_eq!(overdue[0].name, "Luz");

    let paid = book.toggle_bill_paid(&rent.id).await.unwrap();
    assert!(paid.paid);
    assert!(book
        .bills(BillFilter::Upcoming, today())
        .await
        .unwrap()
        .is_empty());

    let totals = book.bill_totals(today()).await.unwrap();
    assert_eq!(totals.to_pay, 120.0);
    assert_eq!(totals.overdue, 120.0);

    assert!(!book.toggle_bill_paid(&rent.id).await.unwrap().paid);
    book.remove_bill(&rent.id).await.unwrap();
    assert_eq!(book.bills(BillFilter::All, today()).await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_patrimony_net_worth() {
    let (book, _) = book();
    let house = book
        .add_patrimony_item(NewPatrimonyItem {
            kind: PatrimonyKind::Asset,
            category: "imovel".to_string(),
            description: "Apartamento".to_string(),
            amount: "300.000,00".to_string(),
            notes: None,
        })
        .await
        .unwrap();
    book.add_patrimony_item(NewPatrimonyItem {
        kind: PatrimonyKind::Liability,
        category: "financiamento".to_string(),
        description: "Financiamento".to_string(),
        amount: "120.000,00".to_string(),
        notes: None,
    })
    .await
    .unwrap();

    let nw = book.net_worth().await.unwrap();
    assert_eq!(nw.net, 180_000.0);

    // Removing under the wrong kind finds nothing.
    assert!(book
        .remove_patrimony_item(PatrimonyKind::Liability, &house.id)
        .await
        .is_err());
    book.remove_patrimony_item(PatrimonyKind::Asset, &house.id)
        .await
        .unwrap();
    assert_eq!(book.net_worth().await.unwrap().net, -120_000.0);
}

/// **Test: Dashboard summary combines profile income, transactions, bills, goals and patrimony**
#[tokio::test]
async fn test_summary() {
    let (book, _) = book();
    assert_eq!(book.profile().await.unwrap().monthly_net_income, 0.0);

    book.update_profile(ProfileUpdate {
        name: Some("Ana".to_string()),
        monthly_net_income: Some("3.000,00".to_string()),
        ..Default::default()
    })
    .await
    .unwrap();
    book.add_transaction(expense("Mercado", "alimentacao", "500"), today())
        .await
        .unwrap();
    book.add_goal(NewGoal {
        title: "Viagem".to_string(),
        target_amount: "2.000,00".to_string(),
        category: None,
        target_date: None,
    })
    .await
    .unwrap();
    book.add_bill(new_bill("Internet", "15/03/2025", "100"))
        .await
        .unwrap();

    let summary = book.summary(today()).await.unwrap();
    assert_eq!(summary.total_income, 3000.0);
    assert_eq!(summary.total_expenses, 500.0);
    assert_eq!(summary.balance, 2500.0);
    assert_eq!(summary.expenses_by_category[0].category, "alimentacao");
    assert_eq!(summary.pending_bills.len(), 1);
    assert_eq!(summary.goals[0].percentage, 0.0);
    assert_eq!(book.profile().await.unwrap().name, "Ana");
}
