//! IPv4 address and CIDR notation utilities.
//!
//! Provides [`Ipv4`] struct for representing IPv4 networks with a prefix length,
//! along with the bit-level helpers the subnet calculator is built from.

use crate::error::FormatError;
use itertools::Itertools;
use serde::de;
use serde::{Deserialize, Deserializer, Serialize};
use std::net::Ipv4Addr;
use std::str::FromStr;

/// Maximum length for an IPv4 subnet mask (32 bits).
pub const MAX_LENGTH: u8 = 32;

/// Mask with the top `len` bits set. Lengths above 32 saturate to a full mask.
///
/// # Examples
/// ```
/// use subzero::models::mask_bits;
/// assert_eq!(mask_bits(24), 0xFFFFFF00);
/// assert_eq!(mask_bits(0), 0);
/// ```
pub fn mask_bits(len: u8) -> u32 {
    let right_len = MAX_LENGTH.saturating_sub(len) as u32;
    u32::MAX.checked_shl(right_len).unwrap_or(0)
}

/// Number of addresses in a network of the given length, `2^(32-len)`.
pub fn block_size(len: u8) -> u64 {
    1u64 << MAX_LENGTH.saturating_sub(len)
}

/// Dotted binary form, each octet zero-padded to 8 bits.
///
/// `192.168.1.0` renders as `11000000.10101000.00000001.00000000`.
pub fn binary_octets(addr: Ipv4Addr) -> String {
    addr.octets().iter().map(|o| format!("{o:08b}")).join(".")
}

/// Parse a prefix length and check it against `min..=max`.
pub fn parse_prefix(text: &str, min: u8, max: u8) -> Result<u8, FormatError> {
    let text = text.trim();
    let value: i64 = text
        .parse()
        .map_err(|_| FormatError::InvalidPrefix(text.to_string()))?;
    if value < min as i64 || value > max as i64 {
        return Err(FormatError::PrefixOutOfRange { value, min, max });
    }
    Ok(value as u8)
}

/// Parse a dotted quad, rejecting anything `Ipv4Addr` would not accept.
pub fn parse_addr(text: &str) -> Result<Ipv4Addr, FormatError> {
    Ipv4Addr::from_str(text).map_err(|_| FormatError::InvalidAddress(text.to_string()))
}

/// IPv4 address with CIDR notation support.
#[derive(Eq, Ord, Debug, Copy, Clone, Hash)]
pub struct Ipv4 {
    /// The IPv4 address.
    pub addr: Ipv4Addr,
    /// The subnet mask length (0-32).
    pub mask: u8,
}

impl Serialize for Ipv4 {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::ser::Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

impl<'de> Deserialize<'de> for Ipv4 {
    fn deserialize<D>(deserializer: D) -> Result<Ipv4, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ipv4::new(&s).map_err(|e| de::Error::custom(format!("invalid CIDR {s}: {e}")))
    }
}

impl Ipv4 {
    /// Create a new [`Ipv4`] from a CIDR string (e.g., "10.0.0.0/24").
    ///
    /// The address is kept as written; use [`Ipv4::network`] to normalize it.
    pub fn new(addr_cidr: &str) -> Result<Ipv4, FormatError> {
        let (addr, mask) = addr_cidr
            .trim()
            .split_once('/')
            .ok_or(FormatError::MissingSeparator)?;
        let addr = parse_addr(addr)?;
        let mask = parse_prefix(mask, 0, MAX_LENGTH)?;
        Ok(Ipv4 { addr, mask })
    }

    /// The network containing `addr` at prefix `mask`.
    pub fn containing(addr: Ipv4Addr, mask: u8) -> Ipv4 {
        Ipv4 {
            addr: Ipv4Addr::from(u32::from(addr) & mask_bits(mask)),
            mask: mask.min(MAX_LENGTH),
        }
    }

    /// This network with host bits cleared.
    pub fn network(&self) -> Ipv4 {
        Ipv4::containing(self.addr, self.mask)
    }

    /// Subnet mask as a dotted quad.
    pub fn netmask(&self) -> Ipv4Addr {
        Ipv4Addr::from(mask_bits(self.mask))
    }

    /// Get the highest (broadcast) address in the subnet.
    pub fn hi(&self) -> Ipv4Addr {
        let mask = mask_bits(self.mask);
        Ipv4Addr::from((u32::from(self.addr) & mask) | !mask)
    }

    /// Get the lowest (network) address in the subnet.
    pub fn lo(&self) -> Ipv4Addr {
        self.network().addr
    }

    pub fn host_bits(&self) -> u8 {
        MAX_LENGTH.saturating_sub(self.mask)
    }

    pub fn block_size(&self) -> u64 {
        block_size(self.mask)
    }

    pub fn contains(&self, ip: Ipv4Addr) -> bool {
        self.lo() <= ip && ip <= self.hi()
    }

    /// Enumerate the subnets of this network at the longer prefix `new_mask`.
    ///
    /// Returns `None` when `new_mask` is shorter than the current mask or above 32.
    pub fn subnets(&self, new_mask: u8) -> Option<Subnets> {
        if new_mask < self.mask || new_mask > MAX_LENGTH {
            return None;
        }
        Some(Subnets {
            base: u32::from(self.lo()) as u64,
            mask: new_mask,
            next: 0,
            total: 1u64 << (new_mask - self.mask),
        })
    }
}

impl FromStr for Ipv4 {
    type Err = FormatError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ipv4::new(s)
    }
}

impl std::fmt::Display for Ipv4 {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        write!(f, "{}/{}", self.addr, self.mask)
    }
}

impl PartialEq for Ipv4 {
    fn eq(&self, other: &Ipv4) -> bool {
        self.addr == other.addr && self.mask == other.mask
    }
}

impl PartialOrd for Ipv4 {
    fn partial_cmp(&self, other: &Ipv4) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

/// Lazy, ascending enumeration of equal-sized subnets.
///
/// Addresses are computed from the index, so a /8 split into /32s costs
/// nothing until rows are actually pulled.
#[derive(Debug, Clone)]
pub struct Subnets {
    base: u64,
    mask: u8,
    next: u64,
    total: u64,
}

impl Subnets {
    /// Number of subnets in the full enumeration, including ones already yielded.
    pub fn total(&self) -> u64 {
        self.total
    }
}

impl Iterator for Subnets {
    type Item = Ipv4;

    fn next(&mut self) -> Option<Ipv4> {
        if self.next >= self.total {
            return None;
        }
        let addr = self.base + self.next * block_size(self.mask);
        self.next += 1;
        Some(Ipv4 {
            addr: Ipv4Addr::from(addr as u32),
            mask: self.mask,
        })
    }

    fn nth(&mut self, n: usize) -> Option<Ipv4> {
        self.next = self.next.saturating_add(n as u64).min(self.total);
        self.next()
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let left = usize::try_from(self.total - self.next).unwrap_or(usize::MAX);
        (left, Some(left))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_network_and_broadcast_per_prefix() {
        let net = Ipv4::new("192.168.1.42/24").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(192, 168, 1, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(192, 168, 1, 255));

        let net = Ipv4::new("10.1.2.3/1").unwrap();
        assert_eq!(net.lo(), Ipv4Addr::new(0, 0, 0, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(127, 255, 255, 255));

        let net = Ipv4::new("192.168.1.42/32").unwrap();
        assert_eq!(net.lo(), net.addr);
        assert_eq!(net.hi(), net.addr);
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 255, 255));
    }

    #[test]
    fn test_mask_has_prefix_leading_ones() {
        for len in 0..=MAX_LENGTH {
            let mask = mask_bits(len);
            assert_eq!(mask.leading_ones(), len as u32, "len={len}");
            assert_eq!(mask.count_ones(), len as u32, "len={len}");
        }
    }

    #[test]
    fn test_binary_octets() {
        assert_eq!(
            binary_octets(Ipv4Addr::new(192, 168, 1, 0)),
            "11000000.10101000.00000001.00000000"
        );
        assert_eq!(
            binary_octets(Ipv4Addr::new(255, 255, 255, 192)),
            "11111111.11111111.11111111.11000000"
        );
    }

    #[test]
    fn test_parse_prefix() {
        assert_eq!(parse_prefix("26", 1, 32).unwrap(), 26);
        assert_eq!(parse_prefix(" 8 ", 1, 32).unwrap(), 8);
        assert_eq!(
            parse_prefix("0", 1, 32).unwrap_err(),
            FormatError::PrefixOutOfRange {
                value: 0,
                min: 1,
                max: 32
            }
        );
        assert_eq!(
            parse_prefix("-3", 1, 32).unwrap_err(),
            FormatError::PrefixOutOfRange {
                value: -3,
                min: 1,
                max: 32
            }
        );
        assert_eq!(
            parse_prefix("2x", 1, 32).unwrap_err(),
            FormatError::InvalidPrefix("2x".to_string())
        );
    }

    #[test]
    fn test_ipv4_new() {
        let net = Ipv4::new("10.2.3.4/16").unwrap();
        assert_eq!(net.addr, Ipv4Addr::new(10, 2, 3, 4));
        assert_eq!(net.mask, 16);
        assert_eq!(net.network(), Ipv4::new("10.2.0.0/16").unwrap());
        assert_eq!(net.netmask(), Ipv4Addr::new(255, 255, 0, 0));
        assert_eq!(net.hi(), Ipv4Addr::new(10, 2, 255, 255));
        assert_eq!(net.to_string(), "10.2.3.4/16");

        assert_eq!(
            Ipv4::new("10.2.3.4").unwrap_err(),
            FormatError::MissingSeparator
        );
        assert!(matches!(
            Ipv4::new("10.2.3.256/16"),
            Err(FormatError::InvalidAddress(_))
        ));
        assert!(Ipv4::new("10.2.3.4/33").is_err());
    }

    #[test]
    fn test_ipv4_serde_string_form() {
        let net = Ipv4::new("172.16.0.0/12").unwrap();
        let json = serde_json::to_string(&net).unwrap();
        assert_eq!(json, "\"172.16.0.0/12\"");
        let back: Ipv4 = serde_json::from_str(&json).unwrap();
        assert_eq!(back, net);
        assert!(serde_json::from_str::<Ipv4>("\"172.16.0.0\"").is_err());
    }

    #[test]
    fn test_ip4_cmp() {
        let ip1 = Ipv4::new("10.0.0.1/24").unwrap();
        let ip2 = Ipv4::new("10.0.0.2/24").unwrap();
        let ip3 = Ipv4::new("10.0.0.1/24").unwrap();

        assert!(ip1 < ip2);
        assert!(ip1 == ip3);
        assert!(ip2 > ip1);
        assert!(ip2 >= ip3);
    }

    #[test]
    fn test_contains() {
        let net = Ipv4::new("172.16.0.0/12").unwrap();
        assert!(net.contains(Ipv4Addr::new(172, 16, 0, 0)));
        assert!(net.contains(Ipv4Addr::new(172, 31, 255, 255)));
        assert!(!net.contains(Ipv4Addr::new(172, 32, 0, 0)));
        assert!(!net.contains(Ipv4Addr::new(172, 15, 255, 255)));
    }

    #[test]
    fn test_subnets_ascending() {
        let net = Ipv4::new("192.168.1.0/24").unwrap();
        let subs: Vec<Ipv4> = net.subnets(26).unwrap().collect();
        assert_eq!(
            subs,
            vec![
                Ipv4::new("192.168.1.0/26").unwrap(),
                Ipv4::new("192.168.1.64/26").unwrap(),
                Ipv4::new("192.168.1.128/26").unwrap(),
                Ipv4::new("192.168.1.192/26").unwrap(),
            ]
        );
        assert!(net.subnets(23).is_none());
        assert!(net.subnets(33).is_none());
        assert_eq!(net.subnets(24).unwrap().count(), 1);
    }

    #[test]
    fn test_subnets_is_lazy_and_ends_at_top() {
        let net = Ipv4::new("255.0.0.0/8").unwrap();
        let subs = net.subnets(32).unwrap();
        assert_eq!(subs.total(), 1 << 24);
        assert_eq!(subs.size_hint(), (1 << 24, Some(1 << 24)));
        let last = subs.skip((1 << 24) - 1).next().unwrap();
        assert_eq!(last, Ipv4::new("255.255.255.255/32").unwrap());
    }
}
