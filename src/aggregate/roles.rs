// src/aggregate/roles.rs
use crate::table::RawTable;
use once_cell::sync::Lazy;
use std::fmt;

/// A semantic column purpose, independent of the literal header text a
/// given sheet revision uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Officer,
    Status,
    HearingDate,
    CompletionDate,
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Role::Officer => "officer",
            Role::Status => "status",
            Role::HearingDate => "hearing_date",
            Role::CompletionDate => "completion_date",
        };
        f.write_str(s)
    }
}

struct ColumnAlias {
    role: Role,
    /// Exact header names (compared case-insensitively after trimming),
    /// tried in order.
    exact: &'static [&'static str],
    /// Fallback keyword: any header containing it qualifies.
    keyword: &'static str,
}

/// Declared alias table, one entry per role. Exact names cover the header
/// wordings seen across sheet revisions; the keyword catches drift.
static ALIASES: Lazy<Vec<ColumnAlias>> = Lazy::new(|| {
    vec![
        ColumnAlias {
            role: Role::Officer,
            exact: &["officer name", "officer", "assigned officer"],
            keyword: "officer",
        },
        ColumnAlias {
            role: Role::Status,
            exact: &["task status", "status", "current status"],
            keyword: "status",
        },
        ColumnAlias {
            role: Role::HearingDate,
            exact: &["hearing date", "next hearing date", "date of hearing"],
            keyword: "hearing",
        },
        ColumnAlias {
            role: Role::CompletionDate,
            exact: &["completion date", "date of completion", "completed on"],
            keyword: "completion",
        },
    ]
});

fn alias_for(role: Role) -> &'static ColumnAlias {
    ALIASES
        .iter()
        .find(|a| a.role == role)
        .expect("every role has an alias entry")
}

/// Resolve a role to a concrete column index in the table.
///
/// Tries an exact case-insensitive match against each known alias first,
/// then falls back to substring containment of the role keyword; the first
/// column in table order wins either way. None means the role is missing
/// from this sheet revision.
pub fn resolve(table: &RawTable, role: Role) -> Option<usize> {
    let alias = alias_for(role);
    let normalized: Vec<String> = table
        .columns
        .iter()
        .map(|c| c.trim().to_lowercase())
        .collect();

    for want in alias.exact {
        if let Some(idx) = normalized.iter().position(|c| c == want) {
            return Some(idx);
        }
    }
    normalized.iter().position(|c| c.contains(alias.keyword))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(cols: &[&str]) -> RawTable {
        RawTable {
            columns: cols.iter().map(|c| c.to_string()).collect(),
            rows: vec![],
        }
    }

    #[test]
    fn exact_match_is_case_insensitive() {
        let t = table(&["OFFICER NAME", "Task Status"]);
        assert_eq!(resolve(&t, Role::Officer), Some(0));
        assert_eq!(resolve(&t, Role::Status), Some(1));
    }

    #[test]
    fn exact_aliases_beat_substring_candidates() {
        // "officer remarks" contains the keyword but "officer name" is an
        // exact alias and wins even though it comes later in table order.
        let t = table(&["Officer Remarks", "Officer Name"]);
        assert_eq!(resolve(&t, Role::Officer), Some(1));
    }

    #[test]
    fn substring_fallback_takes_first_in_table_order() {
        let t = table(&["Case No.", "Date of Next Hearing", "Hearing Notes"]);
        assert_eq!(resolve(&t, Role::HearingDate), Some(1));
    }

    #[test]
    fn missing_role_resolves_to_none() {
        let t = table(&["Case No.", "Party Name"]);
        assert_eq!(resolve(&t, Role::Status), None);
    }
}
