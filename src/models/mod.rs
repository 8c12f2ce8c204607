//! Domain models for the subnet and cron calculators.
//!
//! This module contains the core data structures used throughout the crate:
//! - [`CidrBlock`] and [`CidrSummary`] - CIDR notation and derived attributes
//! - [`CronExpression`] and [`CronField`] - parsed cron expressions
//! - IPv4 primitives (string/integer conversion, mask math)

mod cidr;
mod cron;
mod ipv4;

// Re-export public types
pub use cidr::{
    common_prefixes, is_private, is_valid_cidr, total_addresses, usable_addresses, CidrBlock,
    CidrSummary, IpClass, PrefixInfo,
};
pub use cron::{CronExpression, CronField, FieldKind};
pub use ipv4::{
    alignment_prefix, broadcast_addr, int_to_ip, ip_to_int, is_valid_ip, network_addr,
    subnet_mask, to_dotted_binary, MAX_LENGTH,
};
