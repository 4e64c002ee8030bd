//! Integration tests for Expense and Budget repositories.

use chrono::NaiveDate;
use nirmaan_core::expense::ExpenseService;
use nirmaan_db::{
    BudgetRepository, ExpenseRepository, connect_in_memory, repositories::ExpenseError,
};
use nirmaan_shared::types::ExpenseId;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

#[tokio::test]
async fn test_expense_list_newest_date_first() {
    let db = connect_in_memory().await.unwrap();
    let repo = ExpenseRepository::new(db);

    for (category, date) in [
        ("Cement", "2024-01-01"),
        ("Steel", "2024-03-15"),
        ("Transport", "2024-02-10"),
    ] {
        let expense = ExpenseService::validate_new_expense(category, dec!(1000), date).unwrap();
        repo.create(expense).await.unwrap();
    }

    let rows = repo.list().await.unwrap();
    let categories: Vec<&str> = rows.iter().map(|row| row.category.as_str()).collect();

    assert_eq!(categories, ["Steel", "Transport", "Cement"]);
    assert_eq!(
        rows[0].expense_date,
        NaiveDate::from_ymd_opt(2024, 3, 15).unwrap()
    );
}

#[tokio::test]
async fn test_expense_total_amount() {
    let db = connect_in_memory().await.unwrap();
    let repo = ExpenseRepository::new(db);

    assert_eq!(repo.total_amount().await.unwrap(), Decimal::ZERO);

    for amount in [dec!(20000), dec!(1250.75), dec!(0.25)] {
        let expense = ExpenseService::validate_new_expense("Misc", amount, "2024-01-01").unwrap();
        repo.create(expense).await.unwrap();
    }

    assert_eq!(repo.total_amount().await.unwrap(), dec!(21251));
}

#[tokio::test]
async fn test_expense_total_beyond_single_amount_range() {
    let db = connect_in_memory().await.unwrap();
    let repo = ExpenseRepository::new(db.clone());

    // Each amount is storable; their sum in paise exceeds i64.
    for _ in 0..2 {
        let expense =
            ExpenseService::validate_new_expense("Steel", dec!(90000000000000000), "2024-01-01")
                .unwrap();
        repo.create(expense).await.unwrap();
    }

    assert_eq!(repo.total_amount().await.unwrap(), dec!(180000000000000000));

    let snapshot = BudgetRepository::new(db).snapshot().await.unwrap();
    assert_eq!(snapshot.summary.total_expenses, dec!(180000000000000000));
    assert_eq!(snapshot.summary.remaining_budget, dec!(-180000000000000000));
}

#[tokio::test]
async fn test_expense_delete_and_missing() {
    let db = connect_in_memory().await.unwrap();
    let repo = ExpenseRepository::new(db);

    let expense = ExpenseService::validate_new_expense("Cement", dec!(500), "2024-01-01").unwrap();
    let id = repo.create(expense).await.unwrap();

    repo.delete(id).await.unwrap();
    assert!(repo.list().await.unwrap().is_empty());

    assert!(matches!(
        repo.delete(id).await,
        Err(ExpenseError::NotFound(missing)) if missing == id
    ));
    assert!(matches!(
        repo.delete(ExpenseId::from_raw(12345)).await,
        Err(ExpenseError::NotFound(_))
    ));
}

#[tokio::test]
async fn test_budget_snapshot_tracks_expenses() {
    let db = connect_in_memory().await.unwrap();
    let budgets = BudgetRepository::new(db.clone());
    let expenses = ExpenseRepository::new(db);

    budgets.set_total(dec!(100000)).await.unwrap();
    let expense =
        ExpenseService::validate_new_expense("Cement", dec!(20000), "2024-01-01").unwrap();
    expenses.create(expense).await.unwrap();

    let snapshot = budgets.snapshot().await.unwrap();
    assert_eq!(snapshot.summary.total_budget, dec!(100000));
    assert_eq!(snapshot.summary.total_expenses, dec!(20000));
    assert_eq!(snapshot.summary.remaining_budget, dec!(80000));
    assert_eq!(snapshot.summary.utilization_percent, dec!(20));
}
