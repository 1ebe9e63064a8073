use std::path::{Path, PathBuf};

use crate::error::Result;

use super::expense::{Expense, ExpenseUpdate};
use super::file;

/// Persistence of the whole expense collection.
///
/// Implementors only provide whole-collection [`load_all`](Self::load_all) and
/// [`save_all`](Self::save_all). Every mutation is a full load, an in-memory
/// change and a full save. There is no locking, so two processes mutating the
/// same store concurrently can lose updates (the last writer wins).
pub trait ExpenseStore {
    fn load_all(&self) -> Result<Vec<Expense>>;

    fn save_all(&mut self, expenses: &[Expense]) -> Result<()>;

    fn add(&mut self, expense: Expense) -> Result<()> {
        let mut expenses = self.load_all()?;
        expenses.push(expense);
        self.save_all(&expenses)
    }

    /// Returns `false` (and leaves the store untouched) if no record has this id.
    fn delete(&mut self, id: &str) -> Result<bool> {
        let mut expenses = self.load_all()?;
        let Some(index) = expenses.iter().position(|expense| expense.id == id) else {
            return Ok(false);
        };
        expenses.remove(index);
        self.save_all(&expenses)?;
        Ok(true)
    }

    fn update(&mut self, id: &str, update: &ExpenseUpdate) -> Result<Option<Expense>> {
        let mut expenses = self.load_all()?;
        let Some(expense) = expenses.iter_mut().find(|expense| expense.id == id) else {
            return Ok(None);
        };
        update.apply_to(expense);
        let updated = expense.clone();
        self.save_all(&expenses)?;
        Ok(Some(updated))
    }

    /// Ids in stored order. Degrades to an empty list if the store can't be read.
    fn all_ids(&self) -> Vec<String> {
        match self.load_all() {
            Ok(expenses) => expenses.into_iter().map(|expense| expense.id).collect(),
            Err(err) => {
                log::warn!("Could not read expense ids, assuming none: {}", err);
                vec![]
            }
        }
    }
}

/// Stores the collection as one pretty-printed JSON array on disk.
#[derive(Debug)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    /// Opens the store, creating the directory and an empty document if needed.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        file::ensure_exists(&path)?;
        Ok(Self { path })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl ExpenseStore for JsonFileStore {
    fn load_all(&self) -> Result<Vec<Expense>> {
        file::load(&self.path)
    }

    fn save_all(&mut self, expenses: &[Expense]) -> Result<()> {
        file::save(expenses, &self.path)
    }
}

#[cfg(test)]
#[derive(Debug, Default)]
pub struct MemoryStore {
    pub expenses: Vec<Expense>,
    pub saves: usize,
}

#[cfg(test)]
impl ExpenseStore for MemoryStore {
    fn load_all(&self) -> Result<Vec<Expense>> {
        Ok(self.expenses.clone())
    }

    fn save_all(&mut self, expenses: &[Expense]) -> Result<()> {
        self.expenses = expenses.to_vec();
        self.saves += 1;
        Ok(())
    }
}
