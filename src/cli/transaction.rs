//! Transaction CLI commands
//!
//! Recording and searching transactions. The allowed-category check lives
//! here: the books only insist that some category is given.

use anyhow::{bail, Result};
use clap::Args;

use crate::book::Book;
use crate::config::Settings;
use crate::display::{format_transaction_details, format_transaction_register};
use crate::models::{find_category, TransactionType};
use crate::services::{CreateTransactionInput, DateParts};

/// Arguments for `add`
#[derive(Args, Debug)]
pub struct AddArgs {
    /// Amount, e.g. "12.50"
    #[arg(allow_hyphen_values = true)]
    pub amount: String,

    /// Category (see `pennywise categories`)
    #[arg(short, long, default_value = "")]
    pub category: String,

    /// Record as income instead of an expense
    #[arg(long)]
    pub income: bool,

    /// Full date as YYYY-MM-DD
    #[arg(short, long, conflicts_with_all = ["year", "month", "day"])]
    pub date: Option<String>,

    /// Year, defaults to this year
    #[arg(long, allow_hyphen_values = true)]
    pub year: Option<String>,

    /// Month, defaults to this month
    #[arg(long, allow_hyphen_values = true)]
    pub month: Option<String>,

    /// Day, defaults to today
    #[arg(long, allow_hyphen_values = true)]
    pub day: Option<String>,

    /// Free-form note
    #[arg(short, long, default_value = "")]
    pub note: String,
}

/// Arguments for `search`
#[derive(Args, Debug)]
pub struct SearchArgs {
    /// Text to look for; empty lists everything
    #[arg(default_value = "")]
    pub query: String,

    /// Only show expenses or only income
    #[arg(short = 't', long = "type", value_parser = parse_transaction_type)]
    pub kind: Option<TransactionType>,

    /// Maximum number of transactions to show
    #[arg(short, long)]
    pub limit: Option<usize>,
}

/// Record a transaction
pub fn handle_add(book: &mut Book, settings: &Settings, args: AddArgs) -> Result<()> {
    let category = if args.category.trim().is_empty() {
        String::new()
    } else {
        match find_category(book.categories(), &args.category) {
            Some(name) => name.to_string(),
            None => bail!(
                "Unknown category '{}'. Run 'pennywise categories' to see the choices",
                args.category
            ),
        }
    };

    let date = resolve_date_parts(book, &args);
    let kind = if args.income {
        TransactionType::Income
    } else {
        TransactionType::Expense
    };

    let input = CreateTransactionInput::new(args.amount, category, kind, date).with_note(args.note);
    let txn = book.add_transaction(input)?;

    println!("Recorded transaction:");
    print!("{}", format_transaction_details(&txn, &settings.currency_symbol));
    Ok(())
}

/// List transactions matching a query, newest first
pub fn handle_search(book: &Book, settings: &Settings, args: SearchArgs) -> Result<()> {
    let limit = args.limit.unwrap_or(usize::MAX);
    let results = book
        .search(&args.query)
        .filter(|txn| args.kind.map_or(true, |kind| txn.kind == kind))
        .take(limit);

    print!(
        "{}",
        format_transaction_register(results, &settings.currency_symbol)
    );
    Ok(())
}

fn parse_transaction_type(s: &str) -> std::result::Result<TransactionType, String> {
    TransactionType::parse(s).ok_or_else(|| {
        let choices: Vec<&str> = TransactionType::all().iter().map(|t| t.label()).collect();
        format!("expected one of: {}", choices.join(", "))
    })
}

/// Missing parts default to today's
fn resolve_date_parts(book: &Book, args: &AddArgs) -> DateParts {
    let today = DateParts::from_date(book.today());

    if let Some(date) = &args.date {
        let mut parts = date.splitn(3, '-');
        let mut next = || parts.next().unwrap_or_default().to_string();
        return DateParts::new(next(), next(), next());
    }

    DateParts::new(
        args.year.clone().unwrap_or(today.year),
        args.month.clone().unwrap_or(today.month),
        args.day.clone().unwrap_or(today.day),
    )
}
