//! IPv4 subnet calculator.
//!
//! Give it `address/prefix` and it infers the parent network the prefix is
//! splitting, lists the resulting subnets and their host ranges, and renders
//! the whole thing as tables, CSV or JSON.
//!
//! ```
//! let result = subzero::compute_subnets("172.16.5.10/20").unwrap();
//! assert_eq!(result.base_network.to_string(), "172.16.0.0/16");
//! assert_eq!(result.num_subnets, Some(16));
//! ```

pub mod config;
pub mod error;
pub mod logging;
pub mod models;
pub mod output;
pub mod processing;
pub mod session;

pub use error::FormatError;
pub use models::{SubnetResult, SubnetRow};
pub use processing::{compute_subnets, SubnetCalculator};
