// src/fetch/share.rs
use once_cell::sync::Lazy;
use regex::Regex;
use url::Url;

static DOC_ID_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"/spreadsheets/d/([A-Za-z0-9_-]+)").expect("valid doc-id regex"));

static GID_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"gid=(\d+)").expect("valid gid regex"));

/// A resolved sheet reference: the spreadsheet document id plus the
/// sub-sheet (tab) gid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SheetRef {
    pub doc_id: String,
    pub gid: String,
}

impl SheetRef {
    /// Extract a SheetRef from a sharing URL.
    ///
    /// Accepts the `/edit?gid=N` and `/gviz/tq?...gid=N` forms as well as
    /// the fragment form `#gid=N`. Returns None when no document id can be
    /// extracted. A URL with no gid at all resolves to gid "0", the
    /// spreadsheet's first sheet.
    pub fn parse(share_url: &str) -> Option<SheetRef> {
        let doc_id = DOC_ID_RE
            .captures(share_url)
            .and_then(|c| c.get(1))
            .map(|m| m.as_str().to_string())?;

        // Prefer a proper query-pair match; fall back to a raw pattern scan
        // so fragment gids and loosely-formed URLs still resolve.
        let gid = Url::parse(share_url)
            .ok()
            .and_then(|u| {
                u.query_pairs()
                    .find(|(k, _)| k == "gid")
                    .map(|(_, v)| v.into_owned())
            })
            .or_else(|| {
                GID_RE
                    .captures(share_url)
                    .and_then(|c| c.get(1))
                    .map(|m| m.as_str().to_string())
            })
            .unwrap_or_else(|| "0".to_string());

        Some(SheetRef { doc_id, gid })
    }

    /// The canonical CSV export endpoint for this sheet.
    pub fn csv_export_url(&self) -> String {
        format!(
            "https://docs.google.com/spreadsheets/d/{}/gviz/tq?tqx=out:csv&gid={}",
            self.doc_id, self.gid
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_edit_form() {
        let r = SheetRef::parse(
            "https://docs.google.com/spreadsheets/d/1jspebqSTXgEtYyxYAE47/edit?gid=535674994",
        )
        .unwrap();
        assert_eq!(r.doc_id, "1jspebqSTXgEtYyxYAE47");
        assert_eq!(r.gid, "535674994");
    }

    #[test]
    fn parses_gviz_form() {
        let r = SheetRef::parse(
            "https://docs.google.com/spreadsheets/d/1VUnD7y-SFz_Ike/gviz/tq?tqx=out:csv&gid=0",
        )
        .unwrap();
        assert_eq!(r.doc_id, "1VUnD7y-SFz_Ike");
        assert_eq!(r.gid, "0");
    }

    #[test]
    fn parses_fragment_gid() {
        let r = SheetRef::parse("https://docs.google.com/spreadsheets/d/abc123/edit#gid=42")
            .unwrap();
        assert_eq!(r.gid, "42");
    }

    #[test]
    fn missing_gid_defaults_to_zero() {
        let r = SheetRef::parse("https://docs.google.com/spreadsheets/d/abc123/edit").unwrap();
        assert_eq!(r.gid, "0");
    }

    #[test]
    fn rejects_url_without_doc_id() {
        assert!(SheetRef::parse("https://example.com/not-a-sheet?gid=3").is_none());
    }

    #[test]
    fn export_url_shape() {
        let r = SheetRef::parse("https://docs.google.com/spreadsheets/d/abc/edit?gid=7").unwrap();
        assert_eq!(
            r.csv_export_url(),
            "https://docs.google.com/spreadsheets/d/abc/gviz/tq?tqx=out:csv&gid=7"
        );
    }
}
