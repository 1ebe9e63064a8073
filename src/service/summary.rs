use std::collections::HashMap;

use crate::db::Expense;

#[derive(Debug, Clone, PartialEq)]
pub struct Summary {
    pub count: usize,
    pub grand_total: f64,
    pub totals_by_category: HashMap<String, f64>,
    /// Currency of the first matching record, or the configured default if nothing matched.
    pub currency: String,
}

impl Summary {
    pub fn empty(default_currency: &str) -> Self {
        Self {
            count: 0,
            grand_total: 0.0,
            totals_by_category: HashMap::new(),
            currency: default_currency.to_string(),
        }
    }

    pub fn from_expenses(expenses: &[Expense], default_currency: &str) -> Self {
        let Some(first) = expenses.first() else {
            return Self::empty(default_currency);
        };

        let mut totals_by_category: HashMap<String, f64> = HashMap::new();
        for expense in expenses {
            *totals_by_category
                .entry(expense.category.clone())
                .or_insert(0.0) += expense.amount;
        }

        Self {
            count: expenses.len(),
            grand_total: expenses.iter().map(|expense| expense.amount).sum(),
            totals_by_category,
            currency: first.currency.clone(),
        }
    }

    /// Category totals, largest first. Equal totals are ordered by name.
    pub fn sorted_categories(&self) -> Vec<(&str, f64)> {
        let mut categories: Vec<(&str, f64)> = self
            .totals_by_category
            .iter()
            .map(|(category, total)| (category.as_str(), *total))
            .collect();
        categories.sort_by(|lhs, rhs| rhs.1.total_cmp(&lhs.1).then_with(|| lhs.0.cmp(rhs.0)));
        categories
    }

    pub fn percentage_of_total(&self, total: f64) -> f64 {
        if self.grand_total > 0.0 {
            total / self.grand_total * 100.0
        } else {
            0.0
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expense(category: &str, amount: f64, currency: &str) -> Expense {
        Expense {
            id: "EXP-20240501-0001".to_string(),
            date: "2024-05-01".to_string(),
            category: category.to_string(),
            amount,
            note: String::new(),
            currency: currency.to_string(),
            created_at: String::new(),
        }
    }

    #[test]
    fn empty_summary() {
        let summary = Summary::from_expenses(&[], "BDT");
        assert_eq!(0, summary.count);
        assert_eq!(0.0, summary.grand_total);
        assert!(summary.totals_by_category.is_empty());
        assert_eq!("BDT", summary.currency);
        assert_eq!(Vec::<(&str, f64)>::new(), summary.sorted_categories());
    }

    #[test]
    fn totals_by_category() {
        let expenses = vec![
            expense("food", 10.0, "USD"),
            expense("rent", 500.0, "BDT"),
            expense("food", 25.5, "BDT"),
        ];
        let summary = Summary::from_expenses(&expenses, "BDT");
        assert_eq!(3, summary.count);
        assert_eq!(535.5, summary.grand_total);
        assert_eq!("USD", summary.currency);
        assert_eq!(vec![("rent", 500.0), ("food", 35.5)], summary.sorted_categories());
    }

    #[test]
    fn grand_total_is_sum_of_category_totals() {
        let expenses = vec![
            expense("food", 0.25, "BDT"),
            expense("rent", 0.5, "BDT"),
            expense("fun", 1.75, "BDT"),
            expense("food", 2.0, "BDT"),
        ];
        let summary = Summary::from_expenses(&expenses, "BDT");
        let category_sum: f64 = summary.totals_by_category.values().sum();
        assert_eq!(summary.grand_total, category_sum);
    }

    #[test]
    fn equal_totals_sorted_by_name() {
        let expenses = vec![expense("zoo", 5.0, "BDT"), expense("art", 5.0, "BDT")];
        let summary = Summary::from_expenses(&expenses, "BDT");
        assert_eq!(vec![("art", 5.0), ("zoo", 5.0)], summary.sorted_categories());
    }

    #[test]
    fn percentage() {
        let expenses = vec![expense("food", 25.0, "BDT"), expense("rent", 75.0, "BDT")];
        let summary = Summary::from_expenses(&expenses, "BDT");
        assert_eq!(25.0, summary.percentage_of_total(25.0));
        assert_eq!(0.0, Summary::empty("BDT").percentage_of_total(10.0));
    }
}
