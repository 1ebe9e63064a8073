use chrono::Local;
use serde::{Deserialize, Serialize};
use std::fmt::{self, Display};

pub const DEFAULT_CURRENCY: &str = "BDT";
const CREATED_AT_FORMAT: &str = "%Y-%m-%dT%H:%M:%S%.6f";

fn default_currency() -> String {
    DEFAULT_CURRENCY.to_string()
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Expense {
    pub id: String,
    pub date: String,
    pub category: String,
    pub amount: f64,
    #[serde(default)]
    pub note: String,
    #[serde(default = "default_currency")]
    pub currency: String,
    #[serde(default)]
    pub created_at: String,
}

impl Expense {
    /// Builds a record stamped with the current local time. Callers are expected
    /// to have validated and normalized the fields already.
    pub fn new(
        id: String,
        date: String,
        category: String,
        amount: f64,
        note: String,
        currency: String,
    ) -> Self {
        Self {
            id,
            date,
            category,
            amount,
            note,
            currency,
            created_at: Local::now().format(CREATED_AT_FORMAT).to_string(),
        }
    }
}

impl Display for Expense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} | {} | {} | {:.2} {} | {}",
            self.id, self.date, self.category, self.amount, self.currency, self.note
        )
    }
}

/// Partial update of an [`Expense`]. `None` leaves the field unchanged;
/// `id` and `created_at` can never be changed.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseUpdate {
    pub date: Option<String>,
    pub category: Option<String>,
    pub amount: Option<f64>,
    pub note: Option<String>,
}

impl ExpenseUpdate {
    pub fn is_empty(&self) -> bool {
        self.date.is_none()
            && self.category.is_none()
            && self.amount.is_none()
            && self.note.is_none()
    }

    pub fn apply_to(&self, expense: &mut Expense) {
        if let Some(date) = &self.date {
            expense.date = date.clone();
        }
        if let Some(category) = &self.category {
            expense.category = category.clone();
        }
        if let Some(amount) = self.amount {
            expense.amount = amount;
        }
        if let Some(note) = &self.note {
            expense.note = note.clone();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn some_expense() -> Expense {
        Expense {
            id: "EXP-20240501-0001".to_string(),
            date: "2024-05-01".to_string(),
            category: "food".to_string(),
            amount: 100.0,
            note: "lunch".to_string(),
            currency: "BDT".to_string(),
            created_at: "2024-05-01T12:00:00.000000".to_string(),
        }
    }

    #[test]
    fn display_as_record_line() {
        assert_eq!(
            "EXP-20240501-0001 | 2024-05-01 | food | 100.00 BDT | lunch",
            some_expense().to_string()
        );
    }

    #[test]
    fn serializes_with_plain_field_names() {
        let value = serde_json::to_value(some_expense()).unwrap();
        let mut keys: Vec<&str> = value
            .as_object()
            .unwrap()
            .keys()
            .map(String::as_str)
            .collect();
        keys.sort();
        assert_eq!(
            vec!["amount", "category", "created_at", "currency", "date", "id", "note"],
            keys
        );
    }

    #[test]
    fn missing_optional_fields_get_defaults() {
        let expense: Expense = serde_json::from_str(
            r#"{"id": "EXP-20240501-0001", "date": "2024-05-01", "category": "food", "amount": 100.0}"#,
        )
        .unwrap();
        assert_eq!("", expense.note);
        assert_eq!("BDT", expense.currency);
        assert_eq!("", expense.created_at);
    }

    #[test]
    fn new_stamps_creation_time() {
        let expense = Expense::new(
            "EXP-20240501-0001".to_string(),
            "2024-05-01".to_string(),
            "food".to_string(),
            1.0,
            String::new(),
            "BDT".to_string(),
        );
        assert!(!expense.created_at.is_empty());
    }

    #[test]
    fn update_only_touches_given_fields() {
        let mut expense = some_expense();
        let update = ExpenseUpdate {
            note: Some("dinner".to_string()),
            ..Default::default()
        };
        update.apply_to(&mut expense);
        assert_eq!(
            Expense {
                note: "dinner".to_string(),
                ..some_expense()
            },
            expense
        );
    }

    #[test]
    fn empty_update() {
        assert!(ExpenseUpdate::default().is_empty());
        assert!(!ExpenseUpdate {
            amount: Some(1.0),
            ..Default::default()
        }
        .is_empty());
    }
}
