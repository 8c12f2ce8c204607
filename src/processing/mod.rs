//! Calculation logic for both engines.
//!
//! This module contains the algorithms on top of the models:
//! - [`range`] - address range enumeration and CIDR decomposition
//! - [`cron_parse`] - cron expression parsing
//! - [`schedule`] - bounded forward search for execution times
//! - [`describe`] - natural-language rendering of expressions

mod cron_parse;
mod describe;
mod range;
mod schedule;

// Re-export public functions
pub use cron_parse::parse_expression;
pub use describe::describe;
pub use range::{ip_range, range_to_cidr, IpRange};
pub use schedule::{matches_at, next_executions, next_executions_after};
