// src/views/mod.rs
//
// Declared configurations for the dashboard panels. Each view is a filter
// plus a grouped aggregation over one sheet; the driver pairs a view with
// the source it reads from.

use crate::aggregate::roles::Role;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WindowDirection {
    /// `[today, today + days]`, inclusive both ends.
    Forward,
    /// `[today - days, today]`, inclusive both ends.
    Backward,
}

#[derive(Debug, Clone)]
pub struct DateWindow {
    pub role: Role,
    pub days: i64,
    pub direction: WindowDirection,
}

/// One output column: an independent filtered group-by over the base table.
/// Results for all metrics are outer-joined on the grouping key with zeros
/// filled in, so the dual-count performance panel and the single-count
/// panels are the same mechanism.
#[derive(Debug, Clone)]
pub struct MetricSpec {
    pub label: String,
    /// Keep rows whose status column, lower-cased and trimmed, equals this.
    pub status_equals: Option<String>,
    pub window: Option<DateWindow>,
    /// Count distinct row tuples per key instead of all rows.
    pub distinct: bool,
}

impl MetricSpec {
    pub fn count(label: impl Into<String>) -> MetricSpec {
        MetricSpec {
            label: label.into(),
            status_equals: None,
            window: None,
            distinct: false,
        }
    }

    pub fn with_status(mut self, value: impl Into<String>) -> MetricSpec {
        self.status_equals = Some(value.into());
        self
    }

    pub fn with_window(mut self, role: Role, days: i64, direction: WindowDirection) -> MetricSpec {
        self.window = Some(DateWindow {
            role,
            days,
            direction,
        });
        self
    }

    pub fn distinct_rows(mut self) -> MetricSpec {
        self.distinct = true;
        self
    }
}

#[derive(Debug, Clone)]
pub struct ViewSpec {
    pub name: String,
    /// Every role this view must resolve before aggregating. Derived from
    /// the grouping key and the metric filters at construction.
    pub required_roles: Vec<Role>,
    pub group_by: Role,
    pub group_label: String,
    pub metrics: Vec<MetricSpec>,
}

impl ViewSpec {
    pub fn new(
        name: impl Into<String>,
        group_by: Role,
        group_label: impl Into<String>,
        metrics: Vec<MetricSpec>,
    ) -> ViewSpec {
        let mut required_roles = vec![group_by];
        for m in &metrics {
            if m.status_equals.is_some() && !required_roles.contains(&Role::Status) {
                required_roles.push(Role::Status);
            }
            if let Some(w) = &m.window {
                if !required_roles.contains(&w.role) {
                    required_roles.push(w.role);
                }
            }
        }
        ViewSpec {
            name: name.into(),
            required_roles,
            group_by,
            group_label: group_label.into(),
            metrics,
        }
    }
}

/// Pending tasks per officer.
pub fn pending_tasks() -> ViewSpec {
    ViewSpec::new(
        "Pending Tasks",
        Role::Officer,
        "Officer",
        vec![MetricSpec::count("Pending Tasks").with_status("pending")],
    )
}

/// Hearings falling within the next `window_days` days, grouped by date.
pub fn upcoming_hearings(window_days: i64) -> ViewSpec {
    ViewSpec::new(
        "Upcoming Hearings",
        Role::HearingDate,
        "Hearing Date",
        vec![MetricSpec::count("Cases").with_window(
            Role::HearingDate,
            window_days,
            WindowDirection::Forward,
        )],
    )
}

/// Completed-in-window and total-pending counts per officer.
pub fn performance(window_days: i64) -> ViewSpec {
    ViewSpec::new(
        "Performance",
        Role::Officer,
        "Officer",
        vec![
            MetricSpec::count(format!("Completed ({} Days)", window_days))
                .with_status("complete")
                .with_window(Role::CompletionDate, window_days, WindowDirection::Backward),
            MetricSpec::count("Pending (Total)").with_status("pending"),
        ],
    )
}
