//! Subnet and cron calculation engines.
//!
//! Two independent, pure-computation libraries behind one crate:
//! - address math: CIDR parsing, derived subnet attributes, range
//!   enumeration, and range-to-CIDR decomposition
//! - cron: 5-field expression parsing, plain-language description, and a
//!   bounded forward search for upcoming execution times
//!
//! No state is shared between calls or between the two engines; every
//! operation takes explicit inputs and returns a fresh value.

pub mod error;
pub mod models;
pub mod output;
pub mod processing;

use std::net::Ipv4Addr;

pub use error::{AddrError, CronError};
pub use models::{CidrBlock, CidrSummary, CronExpression};
pub use processing::{
    describe, matches_at, next_executions, next_executions_after, parse_expression, IpRange,
};

fn parse_addr(ip: &str) -> Result<Ipv4Addr, AddrError> {
    ip.trim()
        .parse()
        .map_err(|_| AddrError::InvalidIp(ip.to_string()))
}

/// Compute the full derived record for a CIDR string.
pub fn summarize_cidr(cidr: &str) -> Result<CidrSummary, AddrError> {
    CidrBlock::new(cidr)?.summarize()
}

/// Decompose a start-end address range into its minimal CIDR cover.
pub fn range_to_cidrs(start_ip: &str, end_ip: &str) -> Result<Vec<CidrBlock>, AddrError> {
    let start = parse_addr(start_ip)?;
    let end = parse_addr(end_ip)?;
    processing::range_to_cidr(start, end)
}

/// Enumerate a start-end address range, realizing at most `limit` addresses.
pub fn expand_range(start_ip: &str, end_ip: &str, limit: usize) -> Result<IpRange, AddrError> {
    let start = parse_addr(start_ip)?;
    let end = parse_addr(end_ip)?;
    processing::ip_range(start, end, limit)
}

/// Whether `ip` falls within `cidr`, network and broadcast inclusive.
pub fn is_ip_in_cidr(ip: &str, cidr: &str) -> Result<bool, AddrError> {
    let addr = parse_addr(ip)?;
    let block = CidrBlock::new(cidr)?;
    Ok(block.contains(addr))
}
