//! Subnet calculation results.

use super::ipv4::{binary_octets, Ipv4};
use serde::Serialize;
use std::net::Ipv4Addr;

/// Placeholder shown wherever a value does not apply.
pub const NOT_APPLICABLE: &str = "N/A";

/// One line of the subnet listing.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetRow {
    /// 1-based position in the listing.
    pub index: usize,
    /// Network address with prefix.
    pub network: Ipv4,
    /// First usable host, `None` when the subnet has no usable hosts.
    pub first_host: Option<Ipv4Addr>,
    /// Last usable host, `None` when the subnet has no usable hosts.
    pub last_host: Option<Ipv4Addr>,
    pub broadcast: Ipv4Addr,
    /// `2^host_bits - 2`, negative for /32.
    pub usable_hosts: i64,
}

impl SubnetRow {
    /// Derive the host range of `network`. Hosts are only reported when
    /// `usable_hosts` is positive and the network has at least two host
    /// bits, so /31 and /32 get neither whatever count is passed.
    pub fn new(index: usize, network: Ipv4, usable_hosts: i64) -> SubnetRow {
        let network = network.network();
        let broadcast = network.hi();
        let (first_host, last_host) = if usable_hosts > 0 && network.host_bits() >= 2 {
            (
                Some(Ipv4Addr::from(u32::from(network.addr) + 1)),
                Some(Ipv4Addr::from(u32::from(broadcast) - 1)),
            )
        } else {
            (None, None)
        };
        SubnetRow {
            index,
            network,
            first_host,
            last_host,
            broadcast,
            usable_hosts,
        }
    }

    pub fn first_host_text(&self) -> String {
        host_text(self.first_host)
    }

    pub fn last_host_text(&self) -> String {
        host_text(self.last_host)
    }
}

fn host_text(host: Option<Ipv4Addr>) -> String {
    host.map(|h| h.to_string())
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}

/// Dotted binary renderings of the calculated network.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct BinaryForm {
    pub address: String,
    pub netmask: String,
    pub broadcast: String,
}

impl BinaryForm {
    pub fn of(network: &Ipv4) -> BinaryForm {
        BinaryForm {
            address: binary_octets(network.lo()),
            netmask: binary_octets(network.netmask()),
            broadcast: binary_octets(network.hi()),
        }
    }
}

/// Property/value pair of the basic information table.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct InfoRow {
    pub property: String,
    pub value: String,
}

impl InfoRow {
    fn new(property: &str, value: impl Into<String>) -> InfoRow {
        InfoRow {
            property: property.to_string(),
            value: value.into(),
        }
    }

    /// The divider between the numeric and binary sections.
    pub fn is_separator(&self) -> bool {
        self.property == "----"
    }
}

/// Everything derived from one `address/prefix` input.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubnetResult {
    /// Requested network, normalized to its network address.
    pub network: Ipv4,
    /// Inferred parent network the request is compared against.
    pub base_network: Ipv4,
    pub netmask: Ipv4Addr,
    pub broadcast: Ipv4Addr,
    pub host_bits: u8,
    /// `2^host_bits - 2`; zero for /31 and negative for /32.
    pub usable_hosts: i64,
    pub block_size: u64,
    /// `prefix - base_prefix` when the base network was split.
    pub subnet_bits: Option<u8>,
    /// True subnet count when the base network was split, regardless of `rows`.
    pub num_subnets: Option<u64>,
    /// Materialized listing, capped by the calculator's row limit.
    pub rows: Vec<SubnetRow>,
    /// Set when `rows` holds fewer entries than `num_subnets`.
    pub truncated: bool,
    pub binary: BinaryForm,
}

impl SubnetResult {
    pub fn network_address(&self) -> Ipv4Addr {
        self.network.addr
    }

    pub fn prefix(&self) -> u8 {
        self.network.mask
    }

    pub fn is_split(&self) -> bool {
        self.subnet_bits.is_some()
    }

    /// Subnets represented by the result, 1 when nothing was split.
    pub fn total_subnets(&self) -> u64 {
        self.num_subnets.unwrap_or(1)
    }

    /// "K of M shown" notice for a truncated listing.
    pub fn truncation_notice(&self) -> Option<String> {
        if !self.truncated {
            return None;
        }
        Some(format!(
            "Only showing first {} of {} total subnets. The rest are calculated correctly.",
            self.rows.len(),
            self.total_subnets()
        ))
    }

    pub fn hosts_info(&self) -> String {
        format!(
            "{} (Rule: 2^{h} - 2, N={h} = Host Bits)",
            self.usable_hosts,
            h = self.host_bits
        )
    }

    pub fn block_info(&self) -> String {
        format!(
            "{} IPs (Rule: 2^{h}, N={h} = Host Bits)",
            self.block_size,
            h = self.host_bits
        )
    }

    pub fn subnets_info(&self) -> String {
        match (self.num_subnets, self.subnet_bits) {
            (Some(count), Some(bits)) => {
                format!("{count} (Rule: 2^{bits}, N={bits} = Subnet Bits)")
            }
            _ => format!("{NOT_APPLICABLE} (No Subnetting performed)"),
        }
    }

    /// Property/value table describing the calculated network.
    pub fn basic_info(&self) -> Vec<InfoRow> {
        vec![
            InfoRow::new("Network Address", self.network_address().to_string()),
            InfoRow::new("New Prefix Length", format!("/{}", self.prefix())),
            InfoRow::new("New Netmask", self.netmask.to_string()),
            InfoRow::new("Broadcast Address", self.broadcast.to_string()),
            InfoRow::new("Hosts per Subnet", self.hosts_info()),
            InfoRow::new("Block Size", self.block_info()),
            InfoRow::new("Number of Subnets", self.subnets_info()),
            InfoRow::new("----", "---- Binary Representation (New Mask) ----"),
            InfoRow::new("IP (Calculated Network Binary)", self.binary.address.clone()),
            InfoRow::new("Mask (New Prefix Binary)", self.binary.netmask.clone()),
            InfoRow::new(
                "Broadcast (Calculated Network Binary)",
                self.binary.broadcast.clone(),
            ),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_row_host_range() {
        let row = SubnetRow::new(1, Ipv4::new("192.168.1.64/26").unwrap(), 62);
        assert_eq!(row.first_host, Some(Ipv4Addr::new(192, 168, 1, 65)));
        assert_eq!(row.last_host, Some(Ipv4Addr::new(192, 168, 1, 126)));
        assert_eq!(row.broadcast, Ipv4Addr::new(192, 168, 1, 127));
        assert_eq!(row.first_host_text(), "192.168.1.65");
    }

    #[test]
    fn test_row_normalizes_network() {
        let row = SubnetRow::new(1, Ipv4::new("192.168.1.77/26").unwrap(), 62);
        assert_eq!(row.network, Ipv4::new("192.168.1.64/26").unwrap());
    }

    #[test]
    fn test_row_without_hosts() {
        let row = SubnetRow::new(3, Ipv4::new("192.168.1.4/31").unwrap(), 0);
        assert_eq!(row.first_host, None);
        assert_eq!(row.last_host, None);
        assert_eq!(row.first_host_text(), NOT_APPLICABLE);
        assert_eq!(row.last_host_text(), NOT_APPLICABLE);
        assert_eq!(row.broadcast, Ipv4Addr::new(192, 168, 1, 5));

        let row = SubnetRow::new(1, Ipv4::new("192.168.1.4/32").unwrap(), -1);
        assert_eq!(row.first_host, None);
        assert_eq!(row.broadcast, Ipv4Addr::new(192, 168, 1, 4));
    }

    #[test]
    fn test_row_top_of_address_space() {
        let row = SubnetRow::new(1, Ipv4::new("255.255.255.255/32").unwrap(), 1);
        assert_eq!(row.first_host, None);
        assert_eq!(row.last_host, None);
        assert_eq!(row.broadcast, Ipv4Addr::new(255, 255, 255, 255));

        let row = SubnetRow::new(1, Ipv4::new("0.0.0.0/32").unwrap(), 1);
        assert_eq!(row.first_host, None);

        let row = SubnetRow::new(2, Ipv4::new("255.255.255.252/30").unwrap(), 2);
        assert_eq!(row.first_host, Some(Ipv4Addr::new(255, 255, 255, 253)));
        assert_eq!(row.last_host, Some(Ipv4Addr::new(255, 255, 255, 254)));
    }

    #[test]
    fn test_binary_form() {
        let bin = BinaryForm::of(&Ipv4::new("192.168.1.0/26").unwrap());
        assert_eq!(bin.address, "11000000.10101000.00000001.00000000");
        assert_eq!(bin.netmask, "11111111.11111111.11111111.11000000");
        assert_eq!(bin.broadcast, "11000000.10101000.00000001.00111111");
    }
}
