//! Subnet calculation logic.
//!
//! This module contains the business logic of the calculator:
//! - [`base_network`] - Inference of the parent network being split
//! - [`calculator`] - Validation, splitting and host-range derivation

mod base_network;
mod calculator;

// Re-export public functions
pub use base_network::{
    base_network, base_prefix, DEFAULT_BASE_PREFIX, PRIVATE_10, PRIVATE_172,
};
pub use calculator::{
    compute_subnets, parse_input, SubnetCalculator, DEFAULT_MAX_ROWS, MIN_PREFIX,
};
