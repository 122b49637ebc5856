// src/fetch/mod.rs
pub mod share;

use crate::table::RawTable;
use reqwest::Client;
use std::time::Duration;
use tracing::{debug, warn};

use self::share::SheetRef;

/// Outcome of one load attempt for one sheet reference. Produced once per
/// source per refresh cycle; never partially populated.
#[derive(Debug)]
pub enum LoadOutcome {
    Loaded(RawTable),
    FetchFailed(String),
    EmptyOrMalformed,
}

/// Resolve a sharing URL to its CSV export endpoint, fetch it once with the
/// given timeout, and parse the body as a headered CSV table.
///
/// No retry: transient failures are surfaced as `FetchFailed` rather than
/// masked. A timeout yields `FetchFailed("timeout")`; malformed CSV, an
/// empty header, or zero data rows yield `EmptyOrMalformed`. Never errors
/// and writes nothing to disk.
pub async fn load(client: &Client, source_ref: &str, timeout: Duration) -> LoadOutcome {
    let sheet = match SheetRef::parse(source_ref) {
        Some(s) => s,
        None => {
            warn!(source = %source_ref, "no spreadsheet id in sharing URL");
            return LoadOutcome::FetchFailed("unparseable reference".to_string());
        }
    };

    let export_url = sheet.csv_export_url();
    debug!(doc_id = %sheet.doc_id, gid = %sheet.gid, "fetching CSV export");

    let resp = match client.get(&export_url).timeout(timeout).send().await {
        Ok(resp) => resp,
        Err(e) if e.is_timeout() => return LoadOutcome::FetchFailed("timeout".to_string()),
        Err(e) => return LoadOutcome::FetchFailed(e.to_string()),
    };

    let resp = match resp.error_for_status() {
        Ok(resp) => resp,
        Err(e) => return LoadOutcome::FetchFailed(e.to_string()),
    };

    let body = match resp.bytes().await {
        Ok(b) => b,
        Err(e) if e.is_timeout() => return LoadOutcome::FetchFailed("timeout".to_string()),
        Err(e) => return LoadOutcome::FetchFailed(e.to_string()),
    };

    match RawTable::from_csv(&body) {
        Ok(table) if table.is_empty() => LoadOutcome::EmptyOrMalformed,
        Ok(table) => {
            debug!(rows = table.rows.len(), cols = table.columns.len(), "loaded table");
            LoadOutcome::Loaded(table)
        }
        Err(e) => {
            warn!(error = %e, "CSV body did not parse");
            LoadOutcome::EmptyOrMalformed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn unparseable_reference_fails_before_any_fetch() {
        let client = Client::new();
        let outcome = load(
            &client,
            "https://example.com/nothing-here",
            Duration::from_secs(5),
        )
        .await;
        match outcome {
            LoadOutcome::FetchFailed(reason) => assert_eq!(reason, "unparseable reference"),
            other => panic!("expected FetchFailed, got {:?}", other),
        }
    }
}
