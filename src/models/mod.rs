//! Domain models for the subnet calculator.
//!
//! This module contains the core data structures used throughout the application:
//! - [`Ipv4`] - IPv4 network with CIDR notation support
//! - [`SubnetResult`] and [`SubnetRow`] - Calculation output

mod ipv4;
mod subnet;

// Re-export public types
pub use ipv4::{
    binary_octets, block_size, mask_bits, parse_addr, parse_prefix, Ipv4, Subnets, MAX_LENGTH,
};
pub use subnet::{BinaryForm, InfoRow, SubnetResult, SubnetRow, NOT_APPLICABLE};
