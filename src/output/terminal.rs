//! Terminal output.
//!
//! Renders the basic information table and the subnet listing as aligned,
//! optionally colored text.

use crate::models::{SubnetResult, SubnetRow};
use colored::{ColoredString, Colorize};

const PROPERTY_WIDTH: usize = 38;
const SUBNET_COLUMNS: [(&str, usize); 6] = [
    ("Subnet #", 8),
    ("Network Address", 18),
    ("First Host", 15),
    ("Last Host", 15),
    ("Broadcast Address", 17),
    ("Usable Hosts", 12),
];

fn style<F>(text: String, color: bool, paint: F) -> String
where
    F: Fn(&str) -> ColoredString,
{
    if color {
        paint(&text).to_string()
    } else {
        text
    }
}

/// Both tables, the way the interactive session shows them.
pub fn render_table(result: &SubnetResult, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&render_basic_info(result, color));
    out.push('\n');
    out.push_str(&render_subnets(result, color));
    out
}

/// Property/value table.
pub fn render_basic_info(result: &SubnetResult, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&style(
        "Basic Network Information (Rules & Results)".to_string(),
        color,
        |t| t.bold(),
    ));
    out.push('\n');
    out.push_str(&style(
        format!("{:<PROPERTY_WIDTH$} {}", "Property", "Value"),
        color,
        |t| t.bold().on_red(),
    ));
    out.push('\n');

    for row in result.basic_info() {
        let line = if row.is_separator() {
            style(
                format!("{:<PROPERTY_WIDTH$} {}", row.property, row.value),
                color,
                |t| t.bold().red(),
            )
        } else {
            format!(
                "{:<PROPERTY_WIDTH$} {}",
                row.property,
                style(row.value.clone(), color, |t| t.blue())
            )
        };
        out.push_str(&line);
        out.push('\n');
    }
    out
}

/// Subnet listing, with a notice row when it was truncated.
pub fn render_subnets(result: &SubnetResult, color: bool) -> String {
    let mut out = String::new();
    out.push_str(&style("Split Subnets Details".to_string(), color, |t| t.bold()));
    out.push('\n');

    let header = SUBNET_COLUMNS
        .iter()
        .map(|&(name, width)| format!("{name:<width$}"))
        .collect::<Vec<String>>()
        .join(" ");
    out.push_str(&style(header, color, |t| t.bold().on_red()));
    out.push('\n');

    for row in &result.rows {
        out.push_str(&subnet_line(row, color));
        out.push('\n');
    }

    if let Some(notice) = result.truncation_notice() {
        let line = format!("{:<width$} {notice}", "...", width = SUBNET_COLUMNS[0].1);
        out.push_str(&style(line, color, |t| t.yellow()));
        out.push('\n');
    }
    out
}

fn subnet_line(row: &SubnetRow, color: bool) -> String {
    let cells = [
        row.index.to_string(),
        row.network.to_string(),
        row.first_host_text(),
        row.last_host_text(),
        row.broadcast.to_string(),
        row.usable_hosts.to_string(),
    ];
    cells
        .iter()
        .zip(SUBNET_COLUMNS.iter())
        .enumerate()
        .map(|(i, (cell, &(_, width)))| {
            let padded = format!("{cell:<width$}");
            if i == 1 {
                style(padded, color, |t| t.blue())
            } else {
                padded
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
        .trim_end()
        .to_string()
}
