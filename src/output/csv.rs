//! CSV output formatting for subnet listings.

use crate::models::{SubnetResult, SubnetRow};

const HEADER: &str = r#""subnet","network","first_host","last_host","broadcast","usable_hosts""#;

/// Render the subnet listing as CSV.
///
/// A truncated listing ends with a `#NOTE#` line carrying the notice.
pub fn render_csv(result: &SubnetResult) -> String {
    log::info!(
        "#Start render_csv() {} rows of {} subnets",
        result.rows.len(),
        result.total_subnets()
    );

    let mut out = String::new();
    out.push_str(HEADER);
    out.push('\n');

    for row in &result.rows {
        out.push_str(&csv_row(row));
        out.push('\n');
    }

    if let Some(notice) = result.truncation_notice() {
        out.push_str(&format!("#NOTE# {notice}\n"));
    }
    out
}

/// Quote a cell and right-align it to `width`; longer cells are kept whole.
fn format_field<T: ToString>(value: T, width: usize) -> String {
    let quoted = format!("\"{}\"", value.to_string());
    if quoted.len() >= width {
        quoted
    } else {
        format!("{quoted:>width$}")
    }
}

/// Format a single CSV row.
fn csv_row(row: &SubnetRow) -> String {
    format!(
        r#"{j},{network},{first},{last},{broadcast},{hosts}"#,
        j = format_field(row.index, 6),
        network = format_field(row.network, 20),
        first = format_field(row.first_host_text(), 17),
        last = format_field(row.last_host_text(), 17),
        broadcast = format_field(row.broadcast, 17),
        hosts = format_field(row.usable_hosts, 10),
    )
}
