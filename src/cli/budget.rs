//! Budget CLI commands
//!
//! Setting the monthly budget and showing spend against it.

use anyhow::Result;
use clap::Subcommand;

use crate::book::Book;
use crate::config::Settings;
use crate::models::Month;

/// Budget subcommands
#[derive(Subcommand, Debug)]
pub enum BudgetCommands {
    /// Set the monthly budget
    Set {
        /// Amount, e.g. "1500" or "1500.00"
        #[arg(allow_hyphen_values = true)]
        amount: String,
    },

    /// Show the current budget and this month's overview
    Show,
}

/// Handle a budget command
pub fn handle_budget_command(book: &mut Book, settings: &Settings, cmd: BudgetCommands) -> Result<()> {
    match cmd {
        BudgetCommands::Set { amount } => {
            book.set_budget(&amount)?;
            println!(
                "Budget set to {}",
                book.budget().amount().format_with_symbol(&settings.currency_symbol)
            );
            println!();
            print!("{}", book.monthly_summary().format_terminal(&settings.currency_symbol));
        }
        BudgetCommands::Show => {
            print!("{}", book.monthly_summary().format_terminal(&settings.currency_symbol));
        }
    }

    Ok(())
}

/// Show the overview for a month, this month by default
pub fn handle_summary(
    book: &Book,
    settings: &Settings,
    month: Option<String>,
    previous: bool,
) -> Result<()> {
    let summary = match month {
        Some(month) => book.monthly_summary_for(month.parse::<Month>()?),
        None if previous => book.monthly_summary_for(Month::containing(book.today()).prev()),
        None => book.monthly_summary(),
    };

    print!("{}", summary.format_terminal(&settings.currency_symbol));
    Ok(())
}
