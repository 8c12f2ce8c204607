//! Address range enumeration and range-to-CIDR decomposition.
//!
//! Both operations are bounded: enumeration realizes at most `limit`
//! addresses, decomposition runs one iteration per emitted block (at most one
//! per possible prefix length per alignment step), never one per address.

use serde::Serialize;
use std::net::Ipv4Addr;

use crate::error::AddrError;
use crate::models::{alignment_prefix, CidrBlock, MAX_LENGTH};

/// A bounded expansion of a start-end address range.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IpRange {
    /// The first `min(total, limit)` addresses of the range.
    pub addresses: Vec<Ipv4Addr>,
    /// Size of the whole range, realized or not.
    pub total: u64,
    /// Whether `addresses` holds fewer than `total` entries.
    pub truncated: bool,
}

/// Enumerate the consecutive addresses from `start` to `end` inclusive,
/// realizing at most `limit` of them.
pub fn ip_range(start: Ipv4Addr, end: Ipv4Addr, limit: usize) -> Result<IpRange, AddrError> {
    if start > end {
        return Err(AddrError::RangeOrder);
    }

    let start = u64::from(u32::from(start));
    let end = u64::from(u32::from(end));
    let total = end - start + 1;

    let realized = total.min(limit as u64) as usize;
    let addresses = (0..realized)
        .map(|i| Ipv4Addr::from((start + i as u64) as u32))
        .collect();

    Ok(IpRange {
        addresses,
        total,
        truncated: total > limit as u64,
    })
}

/// Decompose an inclusive address range into the minimal ordered list of
/// non-overlapping CIDR blocks covering it exactly.
///
/// Greedy: each step takes the largest block that starts at the cursor. The
/// block size is capped both by the cursor's alignment and by the remaining
/// span; the alignment cap always wins when they disagree.
pub fn range_to_cidr(start: Ipv4Addr, end: Ipv4Addr) -> Result<Vec<CidrBlock>, AddrError> {
    if start > end {
        return Err(AddrError::RangeOrder);
    }

    let mut cursor = u64::from(u32::from(start));
    let end = u64::from(u32::from(end));
    let mut blocks = Vec::new();

    while cursor <= end {
        let addr = Ipv4Addr::from(cursor as u32);
        let align = alignment_prefix(addr);
        // Largest power of two that still fits in the remaining span
        let span = end - cursor + 1;
        let fit = (u32::from(MAX_LENGTH) - span.ilog2()) as u8;

        let prefix = align.max(fit);
        blocks.push(CidrBlock::from_parts(addr, prefix));
        cursor += 1u64 << (MAX_LENGTH - prefix);
    }

    log::debug!(
        "range_to_cidr: {start}-{} covered by {} block(s)",
        Ipv4Addr::from(end as u32),
        blocks.len()
    );
    Ok(blocks)
}
