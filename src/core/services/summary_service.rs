use crate::ledger::ExpenseLedger;

/// Orders ledger aggregates for display.
pub struct SummaryService;

impl SummaryService {
    pub fn total(ledger: &ExpenseLedger) -> f64 {
        ledger.total_spent()
    }

    /// Category totals, largest first; ties fall back to the category name.
    pub fn by_category(ledger: &ExpenseLedger) -> Vec<(String, f64)> {
        let mut totals: Vec<_> = ledger.summary_by_category().into_iter().collect();
        totals.sort_by(|a, b| b.1.total_cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
        totals
    }

    /// Month totals in ascending `YYYY-MM` order.
    pub fn by_month(ledger: &ExpenseLedger) -> Vec<(String, f64)> {
        ledger.summary_by_month().into_iter().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn ledger_with_expenses() -> (ExpenseLedger, TempDir) {
        let temp = TempDir::new().expect("temp dir");
        let mut ledger = ExpenseLedger::open(temp.path().join("expenses.csv")).expect("open");
        let rows = [
            ("Rent", 900.0, "Housing", "2024-02-01"),
            ("Lunch", 12.5, "Food", "2024-01-15"),
            ("Dinner", 30.0, "Food", "2024-02-03"),
            ("Bus", 42.5, "Travel", "2024-01-20"),
        ];
        for (name, amount, category, date) in rows {
            ledger
                .add(name, amount, category, Some(date), "")
                .expect("add expense");
        }
        (ledger, temp)
    }

    #[test]
    fn categories_sorted_by_descending_amount() {
        let (ledger, _guard) = ledger_with_expenses();
        let names: Vec<String> = SummaryService::by_category(&ledger)
            .into_iter()
            .map(|(category, _)| category)
            .collect();
        assert_eq!(names, vec!["Housing", "Food", "Travel"]);
    }

    #[test]
    fn category_ties_sorted_by_name() {
        let (mut ledger, _guard) = ledger_with_expenses();
        ledger
            .add("Museum", 42.5, "Leisure", Some("2024-02-10"), "")
            .expect("add expense");
        let summary = SummaryService::by_category(&ledger);
        assert_eq!(summary[2], ("Leisure".to_string(), 42.5));
        assert_eq!(summary[3], ("Travel".to_string(), 42.5));
    }

    #[test]
    fn months_sorted_ascending() {
        let (ledger, _guard) = ledger_with_expenses();
        assert_eq!(
            SummaryService::by_month(&ledger),
            vec![("2024-01".to_string(), 55.0), ("2024-02".to_string(), 930.0)]
        );
    }

    #[test]
    fn total_matches_ledger() {
        let (ledger, _guard) = ledger_with_expenses();
        assert_eq!(SummaryService::total(&ledger), 985.0);
    }
}
