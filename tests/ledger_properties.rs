use expense_tracker::{
    core::services::{ExpenseInput, ExpenseService, SummaryService},
    ledger::ExpenseLedger,
};
use tempfile::TempDir;

fn fresh_ledger() -> (ExpenseLedger, TempDir) {
    let temp = TempDir::new().expect("temp dir");
    let ledger = ExpenseLedger::open(temp.path().join("expenses.csv")).expect("open ledger");
    (ledger, temp)
}

fn record(ledger: &mut ExpenseLedger, name: &str, amount: f64, category: &str, date: &str) -> u64 {
    ExpenseService::record(
        ledger,
        ExpenseInput {
            name: name.into(),
            amount,
            category: category.into(),
            date: Some(date.into()),
            notes: String::new(),
        },
    )
    .expect("record expense")
    .id
}

#[test]
fn ids_are_sequential_without_gaps() {
    let (mut ledger, _temp) = fresh_ledger();
    let ids: Vec<u64> = (0..5)
        .map(|n| record(&mut ledger, &format!("item {n}"), 1.0, "Misc", "2024-01-01"))
        .collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[test]
fn totals_agree_with_category_summary() {
    let (mut ledger, _temp) = fresh_ledger();
    let amounts = [12.5, 0.0, 99.99, 3.01, 40.0];
    let categories = ["Food", "Food", "Bills", "Travel", "Bills"];
    for (amount, category) in amounts.iter().zip(categories) {
        record(&mut ledger, "thing", *amount, category, "2024-06-10");
    }

    let expected: f64 = amounts.iter().sum();
    let total = SummaryService::total(&ledger);
    assert!((total - expected).abs() < 1e-9);

    let by_category: f64 = SummaryService::by_category(&ledger)
        .iter()
        .map(|(_, amount)| amount)
        .sum();
    assert!((by_category - total).abs() < 1e-9);
}

#[test]
fn adding_zero_leaves_total_unchanged() {
    let (mut ledger, _temp) = fresh_ledger();
    record(&mut ledger, "Lunch", 150.5, "Food", "2024-01-15");
    let before = ledger.total_spent();
    record(&mut ledger, "Free sample", 0.0, "Food", "2024-01-15");
    assert_eq!(ledger.total_spent(), before);
}

#[test]
fn list_limits_return_the_newest_records() {
    let (mut ledger, _temp) = fresh_ledger();
    for n in 0..4 {
        record(&mut ledger, &format!("item {n}"), 1.0, "Misc", "2024-01-01");
    }

    let all: Vec<u64> = ledger.list(Some(10)).iter().map(|e| e.id).collect();
    assert_eq!(all, vec![1, 2, 3, 4]);
    let last_two: Vec<u64> = ledger.list(Some(2)).iter().map(|e| e.id).collect();
    assert_eq!(last_two, vec![3, 4]);
}

#[test]
fn single_lunch_scenario() {
    let (mut ledger, _temp) = fresh_ledger();
    let expense = ledger
        .add("Lunch", 150.50, "Food", Some("2024-01-15"), "")
        .expect("add lunch");

    assert_eq!(expense.id, 1);
    assert_eq!(ledger.total_spent(), 150.50);
    assert_eq!(
        SummaryService::by_category(&ledger),
        vec![("Food".to_string(), 150.50)]
    );
    assert_eq!(
        SummaryService::by_month(&ledger),
        vec![("2024-01".to_string(), 150.50)]
    );
}

#[test]
fn repeated_category_accumulates() {
    let (mut ledger, _temp) = fresh_ledger();
    let first = record(&mut ledger, "Breakfast", 10.0, "Food", "2024-01-15");
    let second = record(&mut ledger, "Dinner", 20.0, "Food", "2024-01-15");

    assert_eq!((first, second), (1, 2));
    assert_eq!(ledger.summary_by_category().get("Food"), Some(&30.0));
}
