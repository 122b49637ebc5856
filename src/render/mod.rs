// src/render/mod.rs
//
// Thin text renderer for aggregation results. Presentation proper (layout,
// styling, links) lives outside this crate; anything consuming
// AggregationResult values can replace this.

use crate::aggregate::{AggregationResult, SummaryTable};
use crate::fetch::LoadOutcome;

/// Render one dashboard panel: a summary table with a total badge, or a
/// diagnostic an operator can act on without reading code.
pub fn panel(title: &str, result: &AggregationResult) -> String {
    match result {
        AggregationResult::Summary(table) => {
            format!("{}\nTotal: {}\n{}", title, table.total(), summary_table(table))
        }
        AggregationResult::MissingColumns {
            view,
            missing,
            available,
        } => {
            let roles: Vec<String> = missing.iter().map(|r| r.to_string().to_uppercase()).collect();
            let cols: Vec<String> = available.iter().map(|c| c.to_uppercase()).collect();
            format!(
                "{}\nMissing columns in {} sheet.\n  Required roles not found: {}\n  Available columns: {}\n",
                title,
                view,
                roles.join(", "),
                cols.join(", ")
            )
        }
    }
}

/// Render a load failure for a panel whose table never materialized.
pub fn load_failure(title: &str, outcome: &LoadOutcome) -> String {
    match outcome {
        LoadOutcome::FetchFailed(reason) => {
            format!(
                "{}\nCould not load sheet: {}. Check that it is shared as \"anyone with the link can view\".\n",
                title, reason
            )
        }
        LoadOutcome::EmptyOrMalformed => {
            format!("{}\nSheet loaded but held no tabular data.\n", title)
        }
        LoadOutcome::Loaded(_) => format!("{}\n", title),
    }
}

fn summary_table(table: &SummaryTable) -> String {
    if table.columns.is_empty() {
        return String::new();
    }
    // column widths: header vs widest cell
    let mut widths: Vec<usize> = table.columns.iter().map(|c| c.len()).collect();
    for row in &table.rows {
        widths[0] = widths[0].max(row.key.len());
        for (i, v) in row.values.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(v.to_string().len());
        }
    }

    let mut out = String::new();
    for (i, col) in table.columns.iter().enumerate() {
        if i > 0 {
            out.push_str("  ");
        }
        out.push_str(&format!("{:<width$}", col, width = widths[i]));
    }
    out.push('\n');
    for row in &table.rows {
        out.push_str(&format!("{:<width$}", row.key, width = widths[0]));
        for (i, v) in row.values.iter().enumerate() {
            out.push_str(&format!("  {:>width$}", v, width = widths[i + 1]));
        }
        out.push('\n');
    }
    out
}
