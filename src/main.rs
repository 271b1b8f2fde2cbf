use anyhow::Result;
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use pennywise::audit::AuditLogger;
use pennywise::book::Book;
use pennywise::cli::{
    handle_add, handle_budget_command, handle_categories, handle_check_date, handle_history,
    handle_search, handle_summary, AddArgs, BudgetCommands, SearchArgs,
};
use pennywise::clock::SystemClock;
use pennywise::config::{PennywisePaths, Settings};
use pennywise::logging;
use pennywise::storage::JsonStore;

#[derive(Parser)]
#[command(
    name = "pennywise",
    version,
    about = "Personal bookkeeping from the command line",
    long_about = "Pennywise records income and expenses, keeps a single monthly \
                  budget, and shows how this month's spending compares to it."
)]
struct Cli {
    /// Increase log output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Record an expense or income
    Add(AddArgs),

    /// Budget management commands
    #[command(subcommand)]
    Budget(BudgetCommands),

    /// Show spending against the budget for a month
    Summary {
        /// Month as YYYY-MM, defaults to this month
        #[arg(short, long)]
        month: Option<String>,

        /// Show last month instead of this month
        #[arg(short, long, conflicts_with = "month")]
        previous: bool,
    },

    /// Search transactions, newest first
    Search(SearchArgs),

    /// Check whether a date would be accepted
    CheckDate {
        #[arg(allow_hyphen_values = true)]
        year: String,
        #[arg(allow_hyphen_values = true)]
        month: String,
        #[arg(allow_hyphen_values = true)]
        day: String,
    },

    /// List the available categories
    Categories,

    /// Show recent changes from the audit log
    History {
        /// Number of entries to show
        #[arg(short, long, default_value = "20")]
        limit: usize,
    },

    /// Initialize the data directory and settings file
    Init,

    /// Show current configuration and paths
    Config,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    let paths = PennywisePaths::new()?;
    let settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    match cli.command {
        Some(Commands::Init) => {
            println!("Initializing Pennywise at: {}", paths.base_dir().display());
            paths.ensure_directories()?;
            settings.save(&paths)?;
            println!("Initialization complete!");
            println!();
            println!("Categories: {}", settings.categories.join(", "));
            println!("Edit {} to change them.", paths.settings_file().display());
        }
        Some(Commands::Config) => {
            println!("Pennywise Configuration");
            println!("=======================");
            println!("Settings file:  {}", paths.settings_file().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!("  Currency symbol: {}", settings.currency_symbol);
            println!("  Audit enabled:   {}", settings.audit_enabled);
            println!("  Categories:      {}", settings.categories.join(", "));
        }
        Some(Commands::History { limit }) => {
            handle_history(&AuditLogger::new(paths.audit_log()), limit)?;
        }
        Some(Commands::Add(args)) => {
            let mut book = open_book(&paths, &settings)?;
            handle_add(&mut book, &settings, args)?;
        }
        Some(Commands::Budget(cmd)) => {
            let mut book = open_book(&paths, &settings)?;
            handle_budget_command(&mut book, &settings, cmd)?;
        }
        Some(Commands::Summary { month, previous }) => {
            handle_summary(&open_book(&paths, &settings)?, &settings, month, previous)?;
        }
        Some(Commands::Search(args)) => {
            handle_search(&open_book(&paths, &settings)?, &settings, args)?;
        }
        Some(Commands::CheckDate { year, month, day }) => {
            handle_check_date(&open_book(&paths, &settings)?, year, month, day)?;
        }
        Some(Commands::Categories) => {
            handle_categories(&open_book(&paths, &settings)?)?;
        }
        None => {
            println!("Pennywise - personal bookkeeping");
            println!();
            println!("Run 'pennywise --help' for usage information.");
        }
    }

    Ok(())
}

/// Load the books with the configured categories and audit log
fn open_book(paths: &PennywisePaths, settings: &Settings) -> Result<Book> {
    let book = Book::open(Box::new(JsonStore::new(paths)), Box::new(SystemClock))?
        .with_categories(settings.categories.clone());

    Ok(if settings.audit_enabled {
        book.with_audit(AuditLogger::new(paths.audit_log()))
    } else {
        book
    })
}
