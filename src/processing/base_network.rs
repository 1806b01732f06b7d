//! Parent network inference.
//!
//! The calculator assumes every request subdivides a classful-looking parent
//! picked from the RFC 1918 range the address falls in.

use crate::models::Ipv4;
use std::net::Ipv4Addr;

/// 172.16.0.0/12, treated as /16 parents.
pub const PRIVATE_172: Ipv4 = Ipv4 {
    addr: Ipv4Addr::new(172, 16, 0, 0),
    mask: 12,
};

/// 10.0.0.0/8, treated as a /8 parent.
pub const PRIVATE_10: Ipv4 = Ipv4 {
    addr: Ipv4Addr::new(10, 0, 0, 0),
    mask: 8,
};

/// Prefix of the parent network assumed for everything else.
pub const DEFAULT_BASE_PREFIX: u8 = 24;

/// Parent prefix length for `addr`: 16, 8 or 24.
pub fn base_prefix(addr: Ipv4Addr) -> u8 {
    if PRIVATE_172.contains(addr) {
        16
    } else if PRIVATE_10.contains(addr) {
        8
    } else {
        DEFAULT_BASE_PREFIX
    }
}

/// The parent network containing `addr`.
pub fn base_network(addr: Ipv4Addr) -> Ipv4 {
    Ipv4::containing(addr, base_prefix(addr))
}
