// src/aggregate/mod.rs
pub mod dates;
pub mod roles;

use crate::table::RawTable;
use crate::views::{MetricSpec, ViewSpec, WindowDirection};
use chrono::{Duration, Local, NaiveDate};
use self::roles::Role;
use std::collections::{HashMap, HashSet};
use tracing::debug;

/// Grouping key used for rows whose grouping column is empty; such rows are
/// counted here, never silently dropped.
pub const UNSPECIFIED_KEY: &str = "unspecified";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub key: String,
    /// One value per metric, in the view's declared order.
    pub values: Vec<u64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryTable {
    /// Grouping-key label first, then one label per metric.
    pub columns: Vec<String>,
    pub rows: Vec<SummaryRow>,
}

impl SummaryTable {
    /// Sum of the primary metric across all groups, for the panel badge.
    pub fn total(&self) -> u64 {
        self.rows
            .iter()
            .map(|r| r.values.first().copied().unwrap_or(0))
            .sum()
    }
}

/// Outcome of one aggregation. Never an error: a sheet revision that lost a
/// required column comes back as `MissingColumns` so the operator can see
/// which roles failed to resolve against which headers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AggregationResult {
    Summary(SummaryTable),
    MissingColumns {
        view: String,
        missing: Vec<Role>,
        available: Vec<String>,
    },
}

/// Aggregate `table` under `spec` against today's date.
pub fn aggregate(table: &RawTable, spec: &ViewSpec) -> AggregationResult {
    aggregate_at(table, spec, Local::now().date_naive())
}

/// Pure form of [`aggregate`] with an explicit `today`, so date-window
/// behavior is deterministic under test.
///
/// Resolves every required role (all-or-nothing: a partially-resolved view
/// would silently misreport counts), builds the grouping-key universe from
/// the base table in encounter order, then computes each metric as an
/// independent filtered group-by. Keys absent from a metric's surviving
/// rows stay in the summary with a zero count, which is the outer join the
/// dual-count views rely on.
pub fn aggregate_at(table: &RawTable, spec: &ViewSpec, today: NaiveDate) -> AggregationResult {
    // 1) resolve roles
    let mut resolved: HashMap<Role, usize> = HashMap::new();
    let mut missing: Vec<Role> = Vec::new();
    for &role in &spec.required_roles {
        match roles::resolve(table, role) {
            Some(idx) => {
                resolved.insert(role, idx);
            }
            None => missing.push(role),
        }
    }
    if !missing.is_empty() {
        return AggregationResult::MissingColumns {
            view: spec.name.clone(),
            missing,
            available: table.columns.clone(),
        };
    }
    let group_idx = match resolved.get(&spec.group_by) {
        Some(&idx) => idx,
        None => {
            return AggregationResult::MissingColumns {
                view: spec.name.clone(),
                missing: vec![spec.group_by],
                available: table.columns.clone(),
            }
        }
    };

    // 2) grouping-key universe, base table encounter order
    let mut keys: Vec<String> = Vec::new();
    let mut key_index: HashMap<String, usize> = HashMap::new();
    let mut row_keys: Vec<usize> = Vec::with_capacity(table.rows.len());
    for row in &table.rows {
        let raw = row.get(group_idx).map(|s| s.trim()).unwrap_or("");
        let key = if raw.is_empty() { UNSPECIFIED_KEY } else { raw };
        let idx = match key_index.get(key) {
            Some(&idx) => idx,
            None => {
                keys.push(key.to_string());
                key_index.insert(key.to_string(), keys.len() - 1);
                keys.len() - 1
            }
        };
        row_keys.push(idx);
    }

    // 3) one filtered group-by per metric
    let mut counts = vec![vec![0u64; keys.len()]; spec.metrics.len()];
    for (m, metric) in spec.metrics.iter().enumerate() {
        let mut seen: HashSet<(usize, &[String])> = HashSet::new();
        for (r, row) in table.rows.iter().enumerate() {
            if !row_passes(row, metric, &resolved, today) {
                continue;
            }
            if metric.distinct && !seen.insert((row_keys[r], row.as_slice())) {
                continue;
            }
            counts[m][row_keys[r]] += 1;
        }
    }

    // 4) assemble and sort by primary metric, descending, stable
    let mut rows: Vec<SummaryRow> = keys
        .into_iter()
        .enumerate()
        .map(|(k, key)| SummaryRow {
            key,
            values: counts.iter().map(|c| c[k]).collect(),
        })
        .collect();
    rows.sort_by(|a, b| {
        let a0 = a.values.first().copied().unwrap_or(0);
        let b0 = b.values.first().copied().unwrap_or(0);
        b0.cmp(&a0)
    });

    let mut columns = Vec::with_capacity(1 + spec.metrics.len());
    columns.push(spec.group_label.clone());
    columns.extend(spec.metrics.iter().map(|m| m.label.clone()));

    AggregationResult::Summary(SummaryTable { columns, rows })
}

/// Apply a metric's filters to one row: status first, then the date window.
/// Rows whose date cell does not parse are skipped, never fatal.
fn row_passes(
    row: &[String],
    metric: &MetricSpec,
    resolved: &HashMap<Role, usize>,
    today: NaiveDate,
) -> bool {
    if let Some(want) = &metric.status_equals {
        let idx = match resolved.get(&Role::Status) {
            Some(&idx) => idx,
            None => return false,
        };
        let got = row.get(idx).map(|s| s.trim().to_lowercase()).unwrap_or_default();
        if got != want.trim().to_lowercase() {
            return false;
        }
    }
    if let Some(window) = &metric.window {
        let idx = match resolved.get(&window.role) {
            Some(&idx) => idx,
            None => return false,
        };
        let cell = row.get(idx).map(String::as_str).unwrap_or("");
        let date = match dates::parse_day_first(cell) {
            Some(d) => d,
            None => {
                debug!(value = cell, "skipping row with unparseable date");
                return false;
            }
        };
        let (start, end) = match window.direction {
            WindowDirection::Forward => (today, today + Duration::days(window.days)),
            WindowDirection::Backward => (today - Duration::days(window.days), today),
        };
        if date < start || date > end {
            return false;
        }
    }
    true
}
