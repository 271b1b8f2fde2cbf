//! Small informational commands

use anyhow::Result;

use crate::audit::AuditLogger;
use crate::book::Book;
use crate::services::DateParts;

/// Check a date without recording anything
pub fn handle_check_date(book: &Book, year: String, month: String, day: String) -> Result<()> {
    let date = book.validate_date(&DateParts::new(year, month, day))?;
    println!("{} is a valid date", date.format("%Y-%m-%d"));
    Ok(())
}

/// List the categories a transaction can be filed under
pub fn handle_categories(book: &Book) -> Result<()> {
    for category in book.categories() {
        println!("{}", category);
    }
    Ok(())
}

/// Show the most recent audit entries, oldest first
pub fn handle_history(logger: &AuditLogger, limit: usize) -> Result<()> {
    let entries = logger.read_recent(limit)?;
    if entries.is_empty() {
        println!("No changes recorded yet.");
        return Ok(());
    }

    for entry in entries {
        println!("{}", entry.format_human_readable());
    }
    Ok(())
}
