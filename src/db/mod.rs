mod expense;
mod file;
mod store;

pub use expense::{Expense, ExpenseUpdate, DEFAULT_CURRENCY};
pub use store::{ExpenseStore, JsonFileStore};

#[cfg(test)]
pub use store::MemoryStore;
