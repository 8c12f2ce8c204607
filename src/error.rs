//! Error types for the address and cron engines.
//!
//! All failures are deterministic validation failures, detected synchronously.
//! Callers branch on the variant; `Display` carries the user-facing reason.

use thiserror::Error;

/// Errors from IPv4/CIDR parsing and range operations.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum AddrError {
    #[error("invalid IPv4 address: {0}")]
    InvalidIp(String),

    #[error("invalid CIDR notation: {0}")]
    InvalidCidr(String),

    #[error("prefix length {0} out of range (0-32)")]
    PrefixOutOfRange(u8),

    #[error("Start IP must be less than or equal to end IP")]
    RangeOrder,
}

/// Errors from cron expression parsing.
///
/// Every variant carries the label of the offending field so the caller can
/// surface the reason next to the right input.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CronError {
    #[error("Expected 5 fields, got {0}")]
    FieldCount(usize),

    #[error("{field}: Step value must be at least 1")]
    StepTooSmall { field: &'static str },

    #[error("{field}: Invalid range: {spec}")]
    InvalidRange { field: &'static str, spec: String },

    #[error("{field}: Invalid value: {token}")]
    InvalidValue { field: &'static str, token: String },

    #[error("{field}: Value out of range ({min}-{max})")]
    RangeOutOfBounds {
        field: &'static str,
        min: u8,
        max: u8,
    },

    #[error("{field}: Value {value} out of range ({min}-{max})")]
    ValueOutOfRange {
        field: &'static str,
        value: i64,
        min: u8,
        max: u8,
    },

    #[error("{field}: Range start must be <= end")]
    RangeOrder { field: &'static str },
}
