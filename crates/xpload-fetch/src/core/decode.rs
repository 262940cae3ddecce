use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::data::{CatalogEntry, CatalogRecord};

/// Decodes a `payloadiovs` response body.
///
/// The catalog answers with an array of records; a lone object is
/// taken as a one-record list. Anything else, including a record
/// without a `payload_iov` entry, is an error.
pub fn decode_records(body: &[u8]) -> Result<Vec<CatalogRecord>, serde_json::Error> {
    decode_list(body)
}

/// Decodes a collection listing (tags, domains, ...).
pub fn decode_entries(body: &[u8]) -> Result<Vec<CatalogEntry>, serde_json::Error> {
    decode_list(body)
}

fn decode_list<T: DeserializeOwned>(body: &[u8]) -> Result<Vec<T>, serde_json::Error> {
    match serde_json::from_slice::<Value>(body)? {
        Value::Array(items) => items.into_iter().map(serde_json::from_value).collect(),
        other => serde_json::from_value(other).map(|item| vec![item]),
    }
}

/// Keeps the records that belong to `domain`.
///
/// Records that do not report a `payload_type` are kept.
pub fn retain_domain(records: Vec<CatalogRecord>, domain: Option<&str>) -> Vec<CatalogRecord> {
    let Some(domain) = domain else {
        return records;
    };
    records
        .into_iter()
        .filter(|r| r.payload_type.as_deref().is_none_or(|t| t == domain))
        .collect()
}

/// Anchors each record's payload under `storage_root`, in response order.
pub fn resolve_paths(records: &[CatalogRecord], storage_root: &str) -> Vec<String> {
    records
        .iter()
        .filter_map(CatalogRecord::fragment)
        .map(|fragment| format!("{storage_root}/{fragment}"))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const ONE: &str = r#"[{"payload_iov":[{"payload_url":"Payload_300_Commit_17_Domain_5"}]}]"#;

    #[test]
    fn decodes_array_of_records() {
        let records = decode_records(ONE.as_bytes()).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].fragment(), Some("Payload_300_Commit_17_Domain_5"));
    }

    #[test]
    fn keeps_unknown_fields() {
        let body = r#"[{"id":3,"payload_type":"Domain_5",
                        "payload_iov":[{"payload_url":"p","major_iov":0}]}]"#;
        let records = decode_records(body.as_bytes()).unwrap();
        assert_eq!(records[0].payload_type.as_deref(), Some("Domain_5"));
        assert_eq!(records[0].extra["id"], 3);
        assert_eq!(records[0].payload_iov[0].extra["major_iov"], 0);
    }

    #[test]
    fn single_object_is_one_record() {
        let body = r#"{"payload_iov":[{"payload_url":"p"}]}"#;
        assert_eq!(decode_records(body.as_bytes()).unwrap().len(), 1);
    }

    #[test]
    fn empty_array_is_no_records() {
        assert!(decode_records(b"[]").unwrap().is_empty());
    }

    #[test]
    fn structural_failures() {
        for body in [
            "not json",
            r#"[{"payload_iov":[]}]"#,
            r#"[{"payload_iov":[{"url":"p"}]}]"#,
            r#"[{"other":1}]"#,
            r#""just a string""#,
            "",
        ] {
            assert!(decode_records(body.as_bytes()).is_err(), "accepted {body:?}");
        }
    }

    #[test]
    fn retain_domain_filters_by_payload_type() {
        let records = vec![
            CatalogRecord::new("a").payload_type("Domain_5"),
            CatalogRecord::new("b").payload_type("Domain_6"),
            CatalogRecord::new("c"),
        ];

        let kept = retain_domain(records.clone(), Some("Domain_6"));
        let fragments: Vec<_> = kept.iter().filter_map(CatalogRecord::fragment).collect();
        assert_eq!(fragments, vec!["b", "c"]);

        assert_eq!(retain_domain(records.clone(), None), records);
    }

    #[test]
    fn resolve_paths_preserves_order_and_duplicates() {
        let records = vec![
            CatalogRecord::new("z"),
            CatalogRecord::new("a"),
            CatalogRecord::new("z"),
        ];
        assert_eq!(
            resolve_paths(&records, "/data"),
            vec!["/data/z", "/data/a", "/data/z"]
        );
    }

    #[test]
    fn decodes_entries() {
        let entries = decode_entries(br#"[{"id":1,"name":"Tag_17"},{"id":2}]"#).unwrap();
        assert_eq!(entries[0].name.as_deref(), Some("Tag_17"));
        assert_eq!(entries[1].name, None);

        let entries = decode_entries(br#"{"id":9,"name":"Domain_5"}"#).unwrap();
        assert_eq!(entries.len(), 1);

        assert!(decode_entries(br#"[{"name":"x"}]"#).is_err());
    }
}
