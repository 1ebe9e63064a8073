use chrono::Local;

use crate::db::{Expense, ExpenseStore, ExpenseUpdate};
use crate::error::{Result, TrackerError};
use crate::validate::{self, DATE_FORMAT};

mod filters;
mod summary;

pub use filters::{non_empty, sort_expenses, Filters, ListOptions, SortField};
pub use summary::Summary;

/// Input of [`ExpenseService::add_expense`]. `date` defaults to today and
/// `currency` to the service's default currency.
#[derive(Debug, Clone, Default)]
pub struct NewExpense {
    pub date: Option<String>,
    pub category: String,
    pub amount: f64,
    pub note: String,
    pub currency: Option<String>,
}

pub struct ExpenseService<S: ExpenseStore> {
    store: S,
    default_currency: String,
}

impl<S: ExpenseStore> ExpenseService<S> {
    pub fn new(store: S, default_currency: impl Into<String>) -> Self {
        Self {
            store,
            default_currency: default_currency.into(),
        }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn add_expense(&mut self, new_expense: NewExpense) -> Result<Expense> {
        let NewExpense {
            date,
            category,
            amount,
            note,
            currency,
        } = new_expense;

        let date = date.unwrap_or_else(|| Local::now().format(DATE_FORMAT).to_string());
        validate::validate_date(&date)?;
        let amount = validate::validate_amount(amount)?;
        let category = validate::normalize_category(&category)?;

        let existing_ids = self.store.all_ids();
        let id = match validate::generate_id(&date, &existing_ids) {
            Ok(id) => id,
            Err(TrackerError::NoExistingRecords) => validate::first_id(&date),
            Err(err) => return Err(err),
        };

        let currency = currency.unwrap_or_else(|| self.default_currency.clone());
        let expense = Expense::new(id, date, category, amount, note, currency);
        self.store.add(expense.clone())?;
        log::info!("Added expense: {}", expense.id);

        Ok(expense)
    }

    pub fn list_expenses(&self, options: &ListOptions) -> Result<Vec<Expense>> {
        let mut expenses = options.filters.apply(self.store.load_all()?);
        sort_expenses(&mut expenses, options.sort_by, options.descending);
        if let Some(limit) = options.limit.filter(|limit| *limit > 0) {
            expenses.truncate(limit);
        }
        log::info!("Listed {} expenses with filters", expenses.len());
        Ok(expenses)
    }

    pub fn summary(&self, filters: &Filters) -> Result<Summary> {
        let expenses = filters.apply(self.store.load_all()?);
        let summary = Summary::from_expenses(&expenses, &self.default_currency);
        log::info!(
            "Generated summary: {} expenses, total {}",
            summary.count,
            summary.grand_total
        );
        Ok(summary)
    }

    pub fn delete_expense(&mut self, id: &str) -> Result<bool> {
        let deleted = self.store.delete(id)?;
        if deleted {
            log::info!("Deleted expense: {}", id);
        } else {
            log::warn!("Expense not found: {}", id);
        }
        Ok(deleted)
    }

    /// Validates the changed fields like [`add_expense`](Self::add_expense) does and
    /// returns the updated record, or `None` if no record has this id.
    pub fn edit_expense(&mut self, id: &str, mut update: ExpenseUpdate) -> Result<Option<Expense>> {
        if update.is_empty() {
            return Err(TrackerError::NoFieldsToUpdate);
        }
        if let Some(date) = &update.date {
            validate::validate_date(date)?;
        }
        if let Some(amount) = update.amount {
            validate::validate_amount(amount)?;
        }
        if let Some(category) = &update.category {
            update.category = Some(validate::normalize_category(category)?);
        }

        let updated = self.store.update(id, &update)?;
        match &updated {
            Some(_) => log::info!("Edited expense: {}", id),
            None => log::warn!("Expense not found: {}", id),
        }
        Ok(updated)
    }
}
