//! Output formatting for calculation results.
//!
//! This module handles rendering results for the terminal:
//! - [`report`] - per-command report printing
//! - [`terminal`] - low-level field and time formatting

mod report;
mod terminal;

pub use report::{
    print_cidr_report, print_contains_report, print_cron_report, print_prefix_table,
    print_range_report,
};
pub use terminal::{format_field, group_thousands, relative_time};
