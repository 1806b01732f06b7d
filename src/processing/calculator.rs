//! Subnet calculation.
//!
//! Turns an `address/prefix` string into a [`SubnetResult`]. When the prefix is
//! longer than the inferred parent's, the parent is split and every resulting
//! subnet is counted; only the first `max_rows` of them are materialized.

use super::base_network::base_network;
use crate::error::FormatError;
use crate::models::{
    parse_addr, parse_prefix, BinaryForm, Ipv4, SubnetResult, SubnetRow, MAX_LENGTH,
};
use std::net::Ipv4Addr;

/// Default cap on materialized subnet rows.
pub const DEFAULT_MAX_ROWS: usize = 256;

/// Shortest prefix accepted from user input.
pub const MIN_PREFIX: u8 = 1;

/// Pure subnet calculator. Holds only the row cap, so it is `Copy` and can be
/// shared freely between threads.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubnetCalculator {
    max_rows: usize,
}

impl Default for SubnetCalculator {
    fn default() -> Self {
        SubnetCalculator {
            max_rows: DEFAULT_MAX_ROWS,
        }
    }
}

impl SubnetCalculator {
    pub fn new(max_rows: usize) -> Self {
        SubnetCalculator { max_rows }
    }

    pub fn max_rows(&self) -> usize {
        self.max_rows
    }

    /// Validate `raw_input` and calculate its subnets.
    ///
    /// # Arguments
    /// * `raw_input` - Text in `address/prefix` form, e.g. `192.168.1.50/26`
    ///
    /// # Returns
    /// * `Ok(SubnetResult)` - The full calculation
    /// * `Err(FormatError)` - Missing `/`, prefix outside 1-32, or a bad address
    pub fn compute(&self, raw_input: &str) -> Result<SubnetResult, FormatError> {
        let (addr, prefix) = parse_input(raw_input)?;
        Ok(self.calculate(addr, prefix))
    }

    /// Calculate from already-validated parts.
    pub fn calculate(&self, addr: Ipv4Addr, prefix: u8) -> SubnetResult {
        let prefix = prefix.min(MAX_LENGTH);
        let network = Ipv4::containing(addr, prefix);
        let base = base_network(addr);
        let host_bits = network.host_bits();
        let usable_hosts = (1i64 << host_bits) - 2;

        log::debug!(
            "calculate({addr}/{prefix}) network={network} base={base} usable_hosts={usable_hosts}"
        );

        let (subnet_bits, num_subnets, rows) = match base.subnets(prefix) {
            Some(subnets) if prefix > base.mask => {
                let total = subnets.total();
                let rows: Vec<SubnetRow> = subnets
                    .take(self.max_rows)
                    .enumerate()
                    .map(|(i, s)| SubnetRow::new(i + 1, s, usable_hosts))
                    .collect();
                (Some(prefix - base.mask), Some(total), rows)
            }
            _ => (None, None, vec![SubnetRow::new(1, network, usable_hosts)]),
        };

        let truncated = num_subnets.is_some_and(|total| (rows.len() as u64) < total);
        if truncated {
            log::debug!(
                "showing {} of {:?} subnets of {base}",
                rows.len(),
                num_subnets
            );
        }

        SubnetResult {
            network,
            base_network: base,
            netmask: network.netmask(),
            broadcast: network.hi(),
            host_bits,
            usable_hosts,
            block_size: network.block_size(),
            subnet_bits,
            num_subnets,
            rows,
            truncated,
            binary: BinaryForm::of(&network),
        }
    }
}

/// Split and validate `address/prefix`. The prefix is checked before the address.
pub fn parse_input(raw_input: &str) -> Result<(Ipv4Addr, u8), FormatError> {
    let (addr, prefix) = raw_input
        .trim()
        .split_once('/')
        .ok_or(FormatError::MissingSeparator)?;
    let prefix = parse_prefix(prefix, MIN_PREFIX, MAX_LENGTH)?;
    let addr = parse_addr(addr)?;
    Ok((addr, prefix))
}

/// Calculate with the default row cap.
///
/// # Examples
/// ```
/// let result = subzero::compute_subnets("192.168.1.0/26").unwrap();
/// assert_eq!(result.num_subnets, Some(4));
/// assert_eq!(result.rows[0].last_host_text(), "192.168.1.62");
/// ```
pub fn compute_subnets(raw_input: &str) -> Result<SubnetResult, FormatError> {
    SubnetCalculator::default().compute(raw_input)
}
