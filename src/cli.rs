use anyhow::Context as _;
use console::{style, StyledObject};
use std::process::ExitCode;

use crate::args::{AddArgs, Args, Command, EditArgs, ListArgs, SummaryArgs};
use crate::config::Config;
use crate::db::{Expense, ExpenseStore, ExpenseUpdate, JsonFileStore};
use crate::error::{ErrorKind, Result, TrackerError};
use crate::logging;
use crate::service::{
    non_empty, ExpenseService, Filters, ListOptions, NewExpense, SortField, Summary,
};
use crate::terminal::{BulletPointPrinter, LineWriter, StdoutLineWriter};

const LIST_RULE_WIDTH: usize = 80;
const SUMMARY_RULE_WIDTH: usize = 60;

pub fn main(args: Args) -> ExitCode {
    let out = StdoutLineWriter;
    let config = match load_config(&args) {
        Ok(config) => config,
        Err(err) => {
            out.write_line(&format!("Error: {err:#}"));
            return ExitCode::FAILURE;
        }
    };
    logging::init(&config.log_file);

    match run(args.command, &config, &out) {
        Ok(()) => ExitCode::SUCCESS,
        Err(_) => ExitCode::FAILURE,
    }
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let config = match &args.config {
        Some(path) => Config::load(path).context("Failed to load configuration")?,
        None => Config::default(),
    };
    Ok(config.with_overrides(args.data_file.clone(), args.log_file.clone()))
}

/// Runs exactly one command. Any failure is reported as a single `Error: ...` line.
pub fn run(command: Command, config: &Config, out: &impl LineWriter) -> Result<()> {
    let result = execute(command, config, out);
    if let Err(err) = &result {
        match err.kind() {
            ErrorKind::Validation => log::error!("Validation error: {}", err),
            ErrorKind::NotFound => log::warn!("{}", err),
            ErrorKind::StorageCorrupted | ErrorKind::StorageIo => {
                log::error!("Storage error: {}", err)
            }
        }
        out.write_line(&format!("Error: {err}"));
    }
    result
}

fn execute(command: Command, config: &Config, out: &impl LineWriter) -> Result<()> {
    let store = JsonFileStore::open(&config.data_file)?;
    let mut cli = Cli {
        service: ExpenseService::new(store, config.default_currency.as_str()),
        out,
    };
    match command {
        Command::Add(args) => cli.main_add(args),
        Command::List(args) => cli.main_list(args),
        Command::Summary(args) => cli.main_summary(args),
        Command::Delete { id } => cli.main_delete(&id),
        Command::Edit(args) => cli.main_edit(args),
    }
}

struct Cli<'o, S: ExpenseStore, W: LineWriter> {
    service: ExpenseService<S>,
    out: &'o W,
}

impl<S: ExpenseStore, W: LineWriter> Cli<'_, S, W> {
    fn main_add(&mut self, args: AddArgs) -> Result<()> {
        log::info!(
            "Command: add - category={}, amount={}",
            args.category,
            args.amount
        );
        let expense = self.service.add_expense(NewExpense {
            date: args.date,
            category: args.category,
            amount: args.amount,
            note: args.note,
            currency: args.currency,
        })?;
        self.out.write_line(&format!("Added: {}", expense));
        Ok(())
    }

    fn main_list(&self, args: ListArgs) -> Result<()> {
        log::info!(
            "Command: list - filters: month={:?}, category={:?}",
            args.month,
            args.category
        );
        let expenses = self.service.list_expenses(&ListOptions {
            filters: Filters {
                month: args.month,
                from_date: args.from,
                to_date: args.to,
                category: args.category,
                min_amount: args.min,
                max_amount: args.max,
            },
            sort_by: SortField::from_name(&args.sort),
            descending: args.desc,
            limit: args.limit,
        })?;

        if expenses.is_empty() {
            self.out.write_line("No expenses found");
            return Ok(());
        }

        let rule = "-".repeat(LIST_RULE_WIDTH);
        self.out.write_line("");
        self.out.write_line(&format!(
            "{}",
            style_header(&format!("Found {} expense(s):", expenses.len()))
        ));
        self.out.write_line("");
        self.out.write_line(&rule);
        for expense in &expenses {
            self.out.write_line(&format_expense_row(expense));
        }
        self.out.write_line(&rule);
        self.out
            .write_line(&format!("Total: {} expense(s)", expenses.len()));
        Ok(())
    }

    fn main_summary(&self, args: SummaryArgs) -> Result<()> {
        log::info!(
            "Command: summary - filters: month={:?}, category={:?}",
            args.month,
            args.category
        );
        let filters = Filters {
            month: args.month,
            from_date: args.from,
            to_date: args.to,
            category: args.category,
            ..Default::default()
        };
        let summary = self.service.summary(&filters)?;

        if summary.count == 0 {
            self.out.write_line("No expenses found");
            return Ok(());
        }
        self.print_summary(&filters, &summary);
        Ok(())
    }

    fn print_summary(&self, filters: &Filters, summary: &Summary) {
        let banner = "=".repeat(SUMMARY_RULE_WIDTH);
        let rule = "-".repeat(SUMMARY_RULE_WIDTH);

        self.out.write_line("");
        self.out.write_line(&banner);
        self.out
            .write_line(&format!("{}", style_header("EXPENSE SUMMARY")));
        self.out.write_line(&banner);

        let from_date = non_empty(&filters.from_date);
        let to_date = non_empty(&filters.to_date);
        if let Some(month) = non_empty(&filters.month) {
            self.out.write_line(&format!("Period: {month}"));
        } else if from_date.is_some() || to_date.is_some() {
            self.out.write_line(&format!(
                "Period: {} to {}",
                from_date.unwrap_or("start"),
                to_date.unwrap_or("end"),
            ));
        }
        if let Some(category) = non_empty(&filters.category) {
            self.out.write_line(&format!("Category: {category}"));
        }
        self.out.write_line(&rule);

        self.out.write_line("");
        self.out.write_line("Breakdown by Category:");
        self.out.write_line(&rule);
        let printer = BulletPointPrinter::new(self.out);
        for (category, total) in summary.sorted_categories() {
            printer.print_item(format!(
                "{:20}: {} {} ({:5.1}%)",
                category,
                style_amount(total),
                summary.currency,
                summary.percentage_of_total(total),
            ));
        }
        self.out.write_line(&rule);
        self.out.write_line(&format!(
            "{:20}: {} {}",
            "GRAND TOTAL",
            style_amount(summary.grand_total).bold(),
            summary.currency
        ));
        self.out
            .write_line(&format!("{:20}: {}", "Total Expenses", summary.count));
        self.out.write_line(&banner);
        self.out.write_line("");
    }

    fn main_delete(&mut self, id: &str) -> Result<()> {
        log::info!("Command: delete - id={}", id);
        if !self.service.delete_expense(id)? {
            return Err(TrackerError::NotFound(id.to_string()));
        }
        self.out.write_line(&format!("Deleted: {id}"));
        Ok(())
    }

    fn main_edit(&mut self, args: EditArgs) -> Result<()> {
        log::info!("Command: edit - id={}", args.id);
        let update = ExpenseUpdate {
            date: args.date,
            category: args.category,
            amount: args.amount,
            note: args.note,
        };
        let updated = self
            .service
            .edit_expense(&args.id, update)?
            .ok_or_else(|| TrackerError::NotFound(args.id.clone()))?;
        self.out.write_line(&format!("Updated: {}", updated));
        Ok(())
    }
}

fn format_expense_row(expense: &Expense) -> String {
    format!(
        "{} | {} | {} | {} {} | {}",
        style(&expense.id).cyan(),
        expense.date,
        style(&expense.category).magenta(),
        style(format!("{:.2}", expense.amount)).green(),
        expense.currency,
        expense.note
    )
}

fn style_header(header: &str) -> StyledObject<&str> {
    style(header).bold().underlined()
}

fn style_amount(amount: f64) -> StyledObject<String> {
    style(format!("{amount:10.2}")).green()
}
