//! Audit trail for Pennywise
//!
//! Every accepted change to the books (a recorded transaction, a new budget)
//! is appended to a line-delimited JSON log with the value before and after.

mod entry;
mod logger;

pub use entry::{AuditEntry, EntityType, Operation};
pub use logger::AuditLogger;
