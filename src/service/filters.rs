use std::cmp::Ordering;

use crate::db::Expense;

/// Conjunctive set of optional predicates shared by listing and summaries.
/// Empty strings are treated like absent filters.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filters {
    /// Prefix of the date, e.g. `2024-05`.
    pub month: Option<String>,
    /// Inclusive lower bound on the date.
    pub from_date: Option<String>,
    /// Inclusive upper bound on the date.
    pub to_date: Option<String>,
    pub category: Option<String>,
    pub min_amount: Option<f64>,
    pub max_amount: Option<f64>,
}

impl Filters {
    pub fn matches(&self, expense: &Expense) -> bool {
        if let Some(month) = non_empty(&self.month) {
            if !expense.date.starts_with(month) {
                return false;
            }
        }
        if let Some(from_date) = non_empty(&self.from_date) {
            if expense.date.as_str() < from_date {
                return false;
            }
        }
        if let Some(to_date) = non_empty(&self.to_date) {
            if expense.date.as_str() > to_date {
                return false;
            }
        }
        if let Some(category) = non_empty(&self.category) {
            if expense.category != category.to_lowercase() {
                return false;
            }
        }
        // A NaN bound matches nothing
        if let Some(min_amount) = self.min_amount {
            if min_amount.is_nan() || expense.amount < min_amount {
                return false;
            }
        }
        if let Some(max_amount) = self.max_amount {
            if max_amount.is_nan() || expense.amount > max_amount {
                return false;
            }
        }
        true
    }

    pub fn apply(&self, expenses: Vec<Expense>) -> Vec<Expense> {
        expenses
            .into_iter()
            .filter(|expense| self.matches(expense))
            .collect()
    }
}

/// The filter value, unless it is absent or empty.
pub fn non_empty(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum SortField {
    #[default]
    Date,
    Amount,
    Category,
}

impl SortField {
    /// Unknown names fall back to sorting by date.
    pub fn from_name(name: &str) -> Self {
        match name {
            "amount" => Self::Amount,
            "category" => Self::Category,
            _ => Self::Date,
        }
    }

    fn compare(self, lhs: &Expense, rhs: &Expense) -> Ordering {
        match self {
            Self::Date => lhs.date.cmp(&rhs.date),
            Self::Amount => lhs.amount.total_cmp(&rhs.amount),
            Self::Category => lhs.category.cmp(&rhs.category),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct ListOptions {
    pub filters: Filters,
    pub sort_by: SortField,
    pub descending: bool,
    /// Keep at most this many records from the front. `Some(0)` means no limit.
    pub limit: Option<usize>,
}

/// Stable sort: records comparing equal keep their stored order in both directions.
pub fn sort_expenses(expenses: &mut [Expense], sort_by: SortField, descending: bool) {
    if descending {
        expenses.sort_by(|lhs, rhs| sort_by.compare(rhs, lhs));
    } else {
        expenses.sort_by(|lhs, rhs| sort_by.compare(lhs, rhs));
    }
}

#[cfg(test)]
mod tests {
    use rstest::rstest;

    use super::*;

    fn expense(id: &str, date: &str, category: &str, amount: f64) -> Expense {
        Expense {
            id: id.to_string(),
            date: date.to_string(),
            category: category.to_string(),
            amount,
            note: String::new(),
            currency: "BDT".to_string(),
            created_at: String::new(),
        }
    }

    fn some_expenses() -> Vec<Expense> {
        vec![
            expense("EXP-20240415-0001", "2024-04-15", "food", 30.0),
            expense("EXP-20240501-0002", "2024-05-01", "food", 100.0),
            expense("EXP-20240503-0003", "2024-05-03", "transport", 20.0),
            expense("EXP-20240520-0004", "2024-05-20", "rent", 500.0),
            expense("EXP-20240601-0005", "2024-06-01", "food", 100.0),
        ]
    }

    fn ids(expenses: &[Expense]) -> Vec<&str> {
        expenses.iter().map(|expense| expense.id.as_str()).collect()
    }

    #[rstest]
    #[case(Filters::default(), vec!["EXP-20240415-0001", "EXP-20240501-0002", "EXP-20240503-0003", "EXP-20240520-0004", "EXP-20240601-0005"])]
    #[case(Filters { month: Some("2024-05".to_string()), ..Default::default() }, vec!["EXP-20240501-0002", "EXP-20240503-0003", "EXP-20240520-0004"])]
    #[case(Filters { month: Some(String::new()), ..Default::default() }, vec!["EXP-20240415-0001", "EXP-20240501-0002", "EXP-20240503-0003", "EXP-20240520-0004", "EXP-20240601-0005"])]
    #[case(Filters { from_date: Some("2024-05-01".to_string()), to_date: Some("2024-05-20".to_string()), ..Default::default() }, vec!["EXP-20240501-0002", "EXP-20240503-0003", "EXP-20240520-0004"])]
    #[case(Filters { category: Some("FOOD".to_string()), ..Default::default() }, vec!["EXP-20240415-0001", "EXP-20240501-0002", "EXP-20240601-0005"])]
    #[case(Filters { min_amount: Some(30.0), max_amount: Some(100.0), ..Default::default() }, vec!["EXP-20240415-0001", "EXP-20240501-0002", "EXP-20240601-0005"])]
    #[case(Filters { month: Some("2024-05".to_string()), category: Some("food".to_string()), ..Default::default() }, vec!["EXP-20240501-0002"])]
    #[case(Filters { month: Some("2023".to_string()), ..Default::default() }, vec![])]
    #[case(Filters { min_amount: Some(f64::NAN), ..Default::default() }, vec![])]
    #[case(Filters { max_amount: Some(f64::NAN), ..Default::default() }, vec![])]
    fn filter_cases(#[case] filters: Filters, #[case] expected: Vec<&str>) {
        assert_eq!(expected, ids(&filters.apply(some_expenses())));
    }

    #[test]
    fn filters_are_idempotent() {
        let filters = Filters {
            month: Some("2024-05".to_string()),
            min_amount: Some(50.0),
            ..Default::default()
        };
        let once = filters.apply(some_expenses());
        let twice = filters.apply(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn sort_by_amount_is_stable() {
        let mut expenses = some_expenses();
        sort_expenses(&mut expenses, SortField::Amount, false);
        assert_eq!(
            vec![
                "EXP-20240503-0003",
                "EXP-20240415-0001",
                "EXP-20240501-0002",
                "EXP-20240601-0005",
                "EXP-20240520-0004",
            ],
            ids(&expenses)
        );

        let mut expenses = some_expenses();
        sort_expenses(&mut expenses, SortField::Amount, true);
        assert_eq!(
            vec![
                "EXP-20240520-0004",
                "EXP-20240501-0002",
                "EXP-20240601-0005",
                "EXP-20240415-0001",
                "EXP-20240503-0003",
            ],
            ids(&expenses)
        );
    }

    #[test]
    fn sort_by_category() {
        let mut expenses = some_expenses();
        sort_expenses(&mut expenses, SortField::Category, false);
        assert_eq!(
            vec![
                "EXP-20240415-0001",
                "EXP-20240501-0002",
                "EXP-20240601-0005",
                "EXP-20240520-0004",
                "EXP-20240503-0003",
            ],
            ids(&expenses)
        );
    }

    #[test]
    fn sort_by_date_descending() {
        let mut expenses = some_expenses();
        sort_expenses(&mut expenses, SortField::Date, true);
        assert_eq!(
            vec![
                "EXP-20240601-0005",
                "EXP-20240520-0004",
                "EXP-20240503-0003",
                "EXP-20240501-0002",
                "EXP-20240415-0001",
            ],
            ids(&expenses)
        );
    }

    #[rstest]
    #[case("date", SortField::Date)]
    #[case("amount", SortField::Amount)]
    #[case("category", SortField::Category)]
    #[case("note", SortField::Date)]
    fn sort_field_from_name(#[case] name: &str, #[case] expected: SortField) {
        assert_eq!(expected, SortField::from_name(name));
    }
}
