use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Record, list, summarize, edit and delete personal expenses.
#[derive(Parser, Debug)]
#[clap(name = "expense-tracker")]
pub struct Args {
    /// YAML config file with data_file, log_file and default_currency keys
    #[clap(long, global = true, env = "EXPENSE_TRACKER_CONFIG")]
    pub config: Option<PathBuf>,

    /// JSON file holding the expenses [default: data/expenses.json]
    #[clap(long, global = true, env = "EXPENSE_TRACKER_DATA")]
    pub data_file: Option<PathBuf>,

    /// Append-only log file [default: logs/tracker.log]
    #[clap(long, global = true, env = "EXPENSE_TRACKER_LOG")]
    pub log_file: Option<PathBuf>,

    #[clap(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Add a new expense
    Add(AddArgs),

    /// List expenses with filters
    List(ListArgs),

    /// Show expense summary
    Summary(SummaryArgs),

    /// Delete an expense
    Delete {
        /// Expense ID to delete
        #[clap(long)]
        id: String,
    },

    /// Edit an expense
    Edit(EditArgs),
}

#[derive(Debug, clap::Args)]
pub struct AddArgs {
    /// Date in YYYY-MM-DD format (default: today)
    #[clap(long)]
    pub date: Option<String>,

    /// Expense category (e.g., food, transport)
    #[clap(long)]
    pub category: String,

    /// Expense amount (must be > 0)
    #[clap(long, allow_negative_numbers = true)]
    pub amount: f64,

    /// Optional note
    #[clap(long, default_value_t = String::new())]
    pub note: String,

    /// Currency code (default: from config, BDT)
    #[clap(long)]
    pub currency: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct ListArgs {
    /// Filter by month (YYYY-MM)
    #[clap(long)]
    pub month: Option<String>,

    /// Filter by category
    #[clap(long)]
    pub category: Option<String>,

    /// Minimum amount
    #[clap(long, allow_negative_numbers = true)]
    pub min: Option<f64>,

    /// Maximum amount
    #[clap(long, allow_negative_numbers = true)]
    pub max: Option<f64>,

    /// Start date (YYYY-MM-DD)
    #[clap(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[clap(long)]
    pub to: Option<String>,

    /// Sort by field
    #[clap(long, default_value = "date", value_parser = ["date", "amount", "category"])]
    pub sort: String,

    /// Sort in descending order
    #[clap(long)]
    pub desc: bool,

    /// Limit number of results
    #[clap(long)]
    pub limit: Option<usize>,
}

#[derive(Debug, clap::Args)]
pub struct SummaryArgs {
    /// Filter by month (YYYY-MM)
    #[clap(long)]
    pub month: Option<String>,

    /// Filter by category
    #[clap(long)]
    pub category: Option<String>,

    /// Start date (YYYY-MM-DD)
    #[clap(long)]
    pub from: Option<String>,

    /// End date (YYYY-MM-DD)
    #[clap(long)]
    pub to: Option<String>,
}

#[derive(Debug, clap::Args)]
pub struct EditArgs {
    /// Expense ID to edit
    #[clap(long)]
    pub id: String,

    /// New amount
    #[clap(long, allow_negative_numbers = true)]
    pub amount: Option<f64>,

    /// New note
    #[clap(long)]
    pub note: Option<String>,

    /// New category
    #[clap(long)]
    pub category: Option<String>,

    /// New date (YYYY-MM-DD)
    #[clap(long)]
    pub date: Option<String>,
}

pub fn parse() -> Args {
    Args::parse()
}
