//! Output formatting for calculation results.
//!
//! This module handles rendering a [`SubnetResult`](crate::models::SubnetResult):
//! - [`csv`] - CSV output formatting
//! - [`json`] - JSON report
//! - [`terminal`] - Terminal tables with colors

mod csv;
mod json;
mod terminal;

pub use csv::render_csv;
pub use json::{render_json, JsonReport};
pub use terminal::{render_basic_info, render_subnets, render_table};
