//! Column report for the computed plan.
use time::{OffsetDateTime, format_description::BorrowedFormatItem, macros::format_description};

use relsweep_core::prelude::DeletionPlan;

/// `dd-mm-yyyy hh:mm`, always UTC.
const DEPLOYED_FORMAT: &[BorrowedFormatItem<'static>] =
    format_description!("[day]-[month]-[year] [hour]:[minute]");

/// Render the plan as aligned columns.
///
/// Column order matches what an operator eyeballs before re-running with
/// `--execute`: RELEASE / LABEL VALUE (<label_key>) / DEPLOYED. Entries
/// arrive already sorted by release name; this function only formats.
pub fn render(plan: &DeletionPlan, label_key: &str) -> String {
    let header = [
        "RELEASE".to_string(),
        format!("LABEL VALUE ({label_key})"),
        "DEPLOYED".to_string(),
    ];

    let mut rows = vec![header];
    rows.extend(plan.entries().iter().map(|entry| {
        [
            entry.name.clone(),
            entry.label_value.clone(),
            format_deployed(entry.deployed_at),
        ]
    }));

    let widths = column_widths(&rows);

    let mut out = String::new();
    for [name, value, deployed] in &rows {
        out.push_str(&format!(
            "{name:<name_w$}  {value:<value_w$}  {deployed}\n",
            name_w = widths[0],
            value_w = widths[1],
        ));
    }
    out
}

fn column_widths(rows: &[[String; 3]]) -> [usize; 3] {
    let mut widths = [0usize; 3];
    for row in rows {
        for (width, cell) in widths.iter_mut().zip(row) {
            *width = (*width).max(cell.len());
        }
    }
    widths
}

fn format_deployed(at: OffsetDateTime) -> String {
    at.format(&DEPLOYED_FORMAT)
        .unwrap_or_else(|_| "<invalid-time>".to_string())
}
