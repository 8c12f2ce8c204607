//! CIDR block model and derived subnet attributes.
//!
//! Provides [`CidrBlock`] for representing a network in CIDR notation, the
//! [`CidrSummary`] record of everything derivable from it, and the common
//! prefix reference table.

use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;

use super::ipv4::{subnet_mask, to_dotted_binary, MAX_LENGTH};
use crate::error::AddrError;

/// Whether the string is a well-formed CIDR notation (valid IP, '/' separator,
/// prefix length 0-32).
pub fn is_valid_cidr(cidr: &str) -> bool {
    CidrBlock::new(cidr).is_ok()
}

/// Total number of addresses in a block of the given prefix length.
///
/// u64 so a /0 block reports the full 2^32 without overflowing.
pub fn total_addresses(prefix: u8) -> Result<u64, AddrError> {
    if prefix > MAX_LENGTH {
        Err(AddrError::PrefixOutOfRange(prefix))
    } else {
        Ok(1u64 << (MAX_LENGTH - prefix))
    }
}

/// Number of usable host addresses in a block of the given prefix length.
///
/// /31 keeps both addresses (RFC 3021 point-to-point) and /32 is a single
/// host; every wider block loses the network and broadcast addresses.
pub fn usable_addresses(prefix: u8) -> Result<u64, AddrError> {
    let total = total_addresses(prefix)?;
    if prefix >= 31 {
        Ok(total)
    } else {
        Ok(total - 2)
    }
}

/// IPv4 address class, determined from the leading octet.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum IpClass {
    A,
    B,
    C,
    /// Multicast range (224.0.0.0-239.255.255.255).
    D,
    /// Reserved range (240.0.0.0 and above).
    E,
}

impl IpClass {
    /// Classify an address by its leading octet.
    pub fn of(addr: Ipv4Addr) -> IpClass {
        let first_octet = addr.octets()[0];
        if first_octet < 128 {
            IpClass::A
        } else if first_octet < 192 {
            IpClass::B
        } else if first_octet < 224 {
            IpClass::C
        } else if first_octet < 240 {
            IpClass::D
        } else {
            IpClass::E
        }
    }
}

impl std::fmt::Display for IpClass {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            IpClass::A => write!(f, "A"),
            IpClass::B => write!(f, "B"),
            IpClass::C => write!(f, "C"),
            IpClass::D => write!(f, "D (Multicast)"),
            IpClass::E => write!(f, "E (Reserved)"),
        }
    }
}

/// Whether the address falls in one of the RFC 1918 private ranges.
pub fn is_private(addr: Ipv4Addr) -> bool {
    let octets = addr.octets();

    // 10.0.0.0/8
    if octets[0] == 10 {
        return true;
    }

    // 172.16.0.0/12
    if octets[0] == 172 && (16..=31).contains(&octets[1]) {
        return true;
    }

    // 192.168.0.0/16
    octets[0] == 192 && octets[1] == 168
}

/// A network block in CIDR notation.
///
/// The address may carry host bits; derived attributes are computed from the
/// masked bits only.
#[derive(Eq, Ord, PartialEq, PartialOrd, Debug, Copy, Clone, Hash)]
pub struct CidrBlock {
    /// The IPv4 address part.
    pub addr: Ipv4Addr,
    /// The prefix length (0-32).
    pub prefix: u8,
}

impl Serialize for CidrBlock {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        let cidr = format!("{}/{}", self.addr, self.prefix);
        serializer.serialize_str(&cidr)
    }
}

impl<'de> Deserialize<'de> for CidrBlock {
    fn deserialize<D>(deserializer: D) -> Result<CidrBlock, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        CidrBlock::new(&s).map_err(de::Error::custom)
    }
}

impl CidrBlock {
    /// Create a new [`CidrBlock`] from a CIDR string (e.g., "10.0.0.0/24").
    pub fn new(cidr: &str) -> Result<CidrBlock, AddrError> {
        let cidr = cidr.trim();
        let parts: Vec<&str> = cidr.split('/').collect();
        if parts.len() != 2 {
            return Err(AddrError::InvalidCidr(cidr.to_string()));
        }
        let addr: Ipv4Addr = parts[0]
            .parse()
            .map_err(|_| AddrError::InvalidIp(parts[0].to_string()))?;
        let prefix: u8 = parts[1]
            .parse()
            .map_err(|_| AddrError::InvalidCidr(cidr.to_string()))?;
        if prefix > MAX_LENGTH {
            return Err(AddrError::PrefixOutOfRange(prefix));
        }
        Ok(CidrBlock { addr, prefix })
    }

    /// Build a block from an already validated address and prefix.
    pub(crate) fn from_parts(addr: Ipv4Addr, prefix: u8) -> CidrBlock {
        debug_assert!(prefix <= MAX_LENGTH);
        CidrBlock { addr, prefix }
    }

    /// The network (lowest) address of this block.
    pub fn network(&self) -> Result<Ipv4Addr, AddrError> {
        super::ipv4::network_addr(self.addr, self.prefix)
    }

    /// The broadcast (highest) address of this block.
    pub fn broadcast(&self) -> Result<Ipv4Addr, AddrError> {
        super::ipv4::broadcast_addr(self.addr, self.prefix)
    }

    /// Whether `ip` falls within this block, network and broadcast inclusive.
    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        match (self.network(), self.broadcast()) {
            (Ok(lo), Ok(hi)) => {
                let ip = u32::from(ip);
                ip >= u32::from(lo) && ip <= u32::from(hi)
            }
            _ => false,
        }
    }

    /// Compute the full set of derived attributes for this block.
    pub fn summarize(&self) -> Result<CidrSummary, AddrError> {
        let mask = subnet_mask(self.prefix)?;
        let network_bits = u32::from(self.addr) & mask;
        let broadcast_bits = network_bits | !mask;
        let network = Ipv4Addr::from(network_bits);
        let broadcast = Ipv4Addr::from(broadcast_bits);

        let (first_usable, last_usable) = match self.prefix {
            32 => (network, network),
            // RFC 3021 point-to-point: both addresses usable
            31 => (network, broadcast),
            _ => (
                Ipv4Addr::from(network_bits + 1),
                Ipv4Addr::from(broadcast_bits - 1),
            ),
        };

        Ok(CidrSummary {
            block: *self,
            network,
            broadcast,
            subnet_mask: Ipv4Addr::from(mask),
            wildcard_mask: Ipv4Addr::from(!mask),
            prefix: self.prefix,
            total_addresses: total_addresses(self.prefix)?,
            usable_addresses: usable_addresses(self.prefix)?,
            first_usable,
            last_usable,
            class: IpClass::of(network),
            private: is_private(network),
            binary_mask: to_dotted_binary(mask),
        })
    }
}

impl std::fmt::Display for CidrBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.prefix)
    }
}

/// Everything derivable from a CIDR block.
///
/// Network and broadcast depend only on the masked bits, so two blocks that
/// differ only in host bits summarize identically apart from `block`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CidrSummary {
    /// The block as given, host bits included.
    pub block: CidrBlock,
    pub network: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub subnet_mask: Ipv4Addr,
    pub wildcard_mask: Ipv4Addr,
    pub prefix: u8,
    pub total_addresses: u64,
    pub usable_addresses: u64,
    pub first_usable: Ipv4Addr,
    pub last_usable: Ipv4Addr,
    pub class: IpClass,
    pub private: bool,
    /// Subnet mask as dotted binary octets.
    pub binary_mask: String,
}

/// A row of the common prefix reference table.
#[derive(Debug, Clone, Serialize)]
pub struct PrefixInfo {
    pub prefix: u8,
    pub mask: Ipv4Addr,
    pub usable: u64,
    pub name: &'static str,
}

/// Common prefix lengths with their conventional names.
pub fn common_prefixes() -> Vec<PrefixInfo> {
    [
        (8, "Class A"),
        (16, "Class B"),
        (24, "Class C"),
        (25, "Half Class C"),
        (26, "Quarter Class C"),
        (27, "1/8 Class C"),
        (28, "1/16 Class C"),
        (29, "Small subnet"),
        (30, "Point-to-point"),
        (31, "RFC 3021 P2P"),
        (32, "Single host"),
    ]
    .iter()
    .map(|&(prefix, name)| PrefixInfo {
        prefix,
        mask: Ipv4Addr::from(subnet_mask(prefix).expect("prefix table is in range")),
        usable: usable_addresses(prefix).expect("prefix table is in range"),
        name,
    })
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cidr_block_new() {
        let block = CidrBlock::new("192.168.1.0/24").unwrap();
        assert_eq!(block.addr, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(block.prefix, 24);
        assert_eq!(block.to_string(), "192.168.1.0/24");

        assert_eq!(
            CidrBlock::new("192.168.1.0").unwrap_err(),
            AddrError::InvalidCidr("192.168.1.0".to_string())
        );
        assert_eq!(
            CidrBlock::new("300.0.0.1/24").unwrap_err(),
            AddrError::InvalidIp("300.0.0.1".to_string())
        );
        assert_eq!(
            CidrBlock::new("10.0.0.0/33").unwrap_err(),
            AddrError::PrefixOutOfRange(33)
        );
        assert!(CidrBlock::new("10.0.0.0/x").is_err());
        assert!(CidrBlock::new("10.0.0.0/8/8").is_err());
    }

    #[test]
    fn test_is_valid_cidr() {
        assert!(is_valid_cidr("0.0.0.0/0"));
        assert!(is_valid_cidr("192.168.1.0/24"));
        assert!(is_valid_cidr("255.255.255.255/32"));
        assert!(!is_valid_cidr("192.168.1.0"));
        assert!(!is_valid_cidr("192.168.1.0/33"));
        assert!(!is_valid_cidr("banana/24"));
    }

    #[test]
    fn test_summarize_class_c() {
        let summary = CidrBlock::new("192.168.1.0/24").unwrap().summarize().unwrap();
        assert_eq!(summary.network, Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(summary.broadcast, Ipv4Addr::new(192, 168, 1, 255));
        assert_eq!(summary.subnet_mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(summary.wildcard_mask, Ipv4Addr::new(0, 0, 0, 255));
        assert_eq!(summary.total_addresses, 256);
        assert_eq!(summary.usable_addresses, 254);
        assert_eq!(summary.first_usable, Ipv4Addr::new(192, 168, 1, 1));
        assert_eq!(summary.last_usable, Ipv4Addr::new(192, 168, 1, 254));
        assert_eq!(summary.class, IpClass::C);
        assert!(summary.private);
        assert_eq!(
            summary.binary_mask,
            "11111111.11111111.11111111.00000000"
        );
    }

    #[test]
    fn test_summarize_host_bits_ignored() {
        // Network depends only on the masked bits
        let a = CidrBlock::new("10.1.2.3/16").unwrap().summarize().unwrap();
        let b = CidrBlock::new("10.1.0.0/16").unwrap().summarize().unwrap();
        assert_eq!(a.network, b.network);
        assert_eq!(a.broadcast, b.broadcast);
        assert_eq!(a.network, Ipv4Addr::new(10, 1, 0, 0));
    }

    #[test]
    fn test_summarize_rfc3021() {
        let summary = CidrBlock::new("10.0.0.0/31").unwrap().summarize().unwrap();
        assert_eq!(summary.total_addresses, 2);
        assert_eq!(summary.usable_addresses, 2);
        assert_eq!(summary.first_usable, summary.network);
        assert_eq!(summary.last_usable, summary.broadcast);
    }

    #[test]
    fn test_summarize_single_host() {
        let summary = CidrBlock::new("10.0.0.5/32").unwrap().summarize().unwrap();
        assert_eq!(summary.total_addresses, 1);
        assert_eq!(summary.usable_addresses, 1);
        assert_eq!(summary.first_usable, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(summary.last_usable, Ipv4Addr::new(10, 0, 0, 5));
        assert_eq!(summary.network, summary.broadcast);
    }

    #[test]
    fn test_summarize_whole_space() {
        let summary = CidrBlock::new("0.0.0.0/0").unwrap().summarize().unwrap();
        assert_eq!(summary.total_addresses, 1u64 << 32);
        assert_eq!(summary.usable_addresses, (1u64 << 32) - 2);
        assert_eq!(summary.network, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(summary.broadcast, Ipv4Addr::new(255, 255, 255, 255));
        assert_eq!(summary.subnet_mask, Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(summary.wildcard_mask, Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_summary_invariants() {
        for cidr in ["10.1.2.3/8", "172.20.5.1/12", "192.0.2.99/26", "8.8.8.8/32"] {
            let summary = CidrBlock::new(cidr).unwrap().summarize().unwrap();
            assert!(
                summary.network <= summary.broadcast,
                "network above broadcast for {cidr}"
            );
            assert_eq!(
                u64::from(u32::from(summary.broadcast)) - u64::from(u32::from(summary.network))
                    + 1,
                summary.total_addresses,
                "address count mismatch for {cidr}"
            );
        }
    }

    #[test]
    fn test_ip_class() {
        assert_eq!(IpClass::of(Ipv4Addr::new(10, 0, 0, 0)), IpClass::A);
        assert_eq!(IpClass::of(Ipv4Addr::new(127, 0, 0, 1)), IpClass::A);
        assert_eq!(IpClass::of(Ipv4Addr::new(128, 0, 0, 1)), IpClass::B);
        assert_eq!(IpClass::of(Ipv4Addr::new(191, 255, 0, 1)), IpClass::B);
        assert_eq!(IpClass::of(Ipv4Addr::new(192, 168, 1, 1)), IpClass::C);
        assert_eq!(IpClass::of(Ipv4Addr::new(224, 0, 0, 1)), IpClass::D);
        assert_eq!(IpClass::of(Ipv4Addr::new(240, 0, 0, 1)), IpClass::E);
        assert_eq!(IpClass::D.to_string(), "D (Multicast)");
        assert_eq!(IpClass::E.to_string(), "E (Reserved)");
    }

    #[test]
    fn test_is_private() {
        assert!(is_private(Ipv4Addr::new(10, 200, 1, 1)));
        assert!(is_private(Ipv4Addr::new(172, 16, 0, 1)));
        assert!(is_private(Ipv4Addr::new(172, 31, 255, 255)));
        assert!(is_private(Ipv4Addr::new(192, 168, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(172, 15, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(172, 32, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(192, 169, 0, 1)));
        assert!(!is_private(Ipv4Addr::new(8, 8, 8, 8)));
    }

    #[test]
    fn test_contains() {
        let block = CidrBlock::new("10.0.0.0/24").unwrap();
        assert!(block.contains(Ipv4Addr::new(10, 0, 0, 0)));
        assert!(block.contains(Ipv4Addr::new(10, 0, 0, 5)));
        assert!(block.contains(Ipv4Addr::new(10, 0, 0, 255)));
        assert!(!block.contains(Ipv4Addr::new(10, 0, 1, 5)));
        assert!(!block.contains(Ipv4Addr::new(9, 255, 255, 255)));
    }

    #[test]
    fn test_cidr_block_serde() {
        let block = CidrBlock::new("10.1.0.0/16").unwrap();
        let json = serde_json::to_string(&block).unwrap();
        assert_eq!(json, "\"10.1.0.0/16\"");
        let back: CidrBlock = serde_json::from_str(&json).unwrap();
        assert_eq!(back, block);
        assert!(serde_json::from_str::<CidrBlock>("\"10.1.0.0/99\"").is_err());
    }

    #[test]
    fn test_cidr_block_cmp() {
        let a = CidrBlock::new("10.0.0.0/8").unwrap();
        let b = CidrBlock::new("10.0.10.0/24").unwrap();
        let c = CidrBlock::new("10.0.10.0/26").unwrap();
        assert!(a < b);
        assert!(b < c);
    }

    #[test]
    fn test_common_prefixes() {
        let table = common_prefixes();
        assert_eq!(table.len(), 11);
        assert_eq!(table[0].prefix, 8);
        assert_eq!(table[0].usable, 16_777_214);
        assert_eq!(table[2].mask, Ipv4Addr::new(255, 255, 255, 0));
        assert_eq!(table[2].usable, 254);
        assert_eq!(table.last().unwrap().usable, 1);
    }
}
