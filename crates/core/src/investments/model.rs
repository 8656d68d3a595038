//! Investment records as stored under the `investments` path.

use std::collections::HashSet;

use log::warn;
use serde::Deserialize;
use serde_json::Value;

/// A tracked investment. Only the ticker symbol is consumed; every other field
/// on the stored record is ignored.
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
pub struct InvestmentRecord {
    pub symbol: String,
}

/// Raw snapshot of the `investments` path, keyed by record id.
///
/// The database returns either `null`, an object keyed by arbitrary ids, or an
/// array when the ids happen to be sequential integers. Arrays may contain
/// `null` holes for deleted entries; those are dropped.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct InvestmentsSnapshot {
    entries: Vec<(String, Value)>,
}

impl InvestmentsSnapshot {
    /// Builds a snapshot from the value stored at the investments path.
    pub fn from_value(value: Value) -> Self {
        let entries = match value {
            Value::Object(map) => map.into_iter().filter(|(_, v)| !v.is_null()).collect(),
            Value::Array(items) => items
                .into_iter()
                .enumerate()
                .filter(|(_, v)| !v.is_null())
                .map(|(index, v)| (index.to_string(), v))
                .collect(),
            Value::Null => Vec::new(),
            other => {
                warn!("Ignoring investments snapshot of unexpected shape: {}", other);
                Vec::new()
            }
        };
        Self { entries }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Decodes every entry, skipping the ones that are not usable records.
    pub fn records(&self) -> Vec<InvestmentRecord> {
        self.entries
            .iter()
            .filter_map(|(id, value)| {
                match serde_json::from_value::<InvestmentRecord>(value.clone()) {
                    Ok(record) if !record.symbol.trim().is_empty() => Some(record),
                    Ok(_) => {
                        warn!("Skipping investment {}: blank symbol", id);
                        None
                    }
                    Err(e) => {
                        warn!("Skipping investment {}: {}", id, e);
                        None
                    }
                }
            })
            .collect()
    }
}

impl<K, V> FromIterator<(K, V)> for InvestmentsSnapshot
where
    K: Into<String>,
    V: Into<Value>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            entries: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .filter(|(_, v)| !v.is_null())
                .collect(),
        }
    }
}

/// Distinct symbols across all records, in first-seen order.
///
/// Symbols are returned exactly as stored, since they become the keys
/// consumers look prices up by. Returns `None` when there is nothing to refresh, which callers treat as a
/// clean no-op rather than an error.
pub fn extract_symbols(snapshot: &InvestmentsSnapshot) -> Option<Vec<String>> {
    let mut seen = HashSet::new();
    let symbols: Vec<String> = snapshot
        .records()
        .into_iter()
        .map(|record| record.symbol)
        .filter(|symbol| seen.insert(symbol.clone()))
        .collect();

    if symbols.is_empty() {
        None
    } else {
        Some(symbols)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_null_snapshot_has_no_symbols() {
        let snapshot = InvestmentsSnapshot::from_value(Value::Null);
        assert!(snapshot.is_empty());
        assert_eq!(extract_symbols(&snapshot), None);
    }

    #[test]
    fn test_empty_object_has_no_symbols() {
        let snapshot = InvestmentsSnapshot::from_value(json!({}));
        assert_eq!(extract_symbols(&snapshot), None);
    }

    #[test]
    fn test_duplicates_are_removed_in_first_seen_order() {
        let snapshot = InvestmentsSnapshot::from_value(json!([
            {"symbol": "OGDC", "quantity": 10},
            {"symbol": "HBL"},
            {"symbol": "OGDC", "quantity": 5},
            {"symbol": "KSE100"}
        ]));
        assert_eq!(
            extract_symbols(&snapshot),
            Some(vec![
                "OGDC".to_string(),
                "HBL".to_string(),
                "KSE100".to_string()
            ])
        );
    }

    #[test]
    fn test_object_snapshot() {
        let snapshot = InvestmentsSnapshot::from_value(json!({
            "a": {"symbol": "OGDC"},
            "b": {"symbol": "OGDC"},
            "c": {"symbol": "KSE100"}
        }));
        assert_eq!(snapshot.len(), 3);

        let mut symbols = extract_symbols(&snapshot).unwrap();
        symbols.sort();
        assert_eq!(symbols, vec!["KSE100".to_string(), "OGDC".to_string()]);
    }

    #[test]
    fn test_array_holes_are_dropped() {
        let snapshot = InvestmentsSnapshot::from_value(json!([null, {"symbol": "PSO"}, null]));
        assert_eq!(snapshot.len(), 1);
        assert_eq!(extract_symbols(&snapshot), Some(vec!["PSO".to_string()]));
    }

    #[test]
    fn test_unusable_records_are_skipped() {
        let snapshot = InvestmentsSnapshot::from_value(json!({
            "missing": {"name": "Cash"},
            "numeric": {"symbol": 42},
            "blank": {"symbol": "  "},
            "scalar": "LUCK",
            "ok": {"symbol": "LUCK"}
        }));
        assert_eq!(snapshot.records().len(), 1);
        assert_eq!(extract_symbols(&snapshot), Some(vec!["LUCK".to_string()]));
    }

    #[test]
    fn test_symbols_keep_their_stored_spelling() {
        let snapshot = InvestmentsSnapshot::from_value(json!([
            {"symbol": " LUCK "},
            {"symbol": "LUCK"},
            {"symbol": " LUCK "}
        ]));
        assert_eq!(
            extract_symbols(&snapshot),
            Some(vec![" LUCK ".to_string(), "LUCK".to_string()])
        );
    }

    #[test]
    fn test_only_unusable_records_is_a_no_op() {
        let snapshot = InvestmentsSnapshot::from_value(json!({"x": {"name": "Cash"}}));
        assert!(!snapshot.is_empty());
        assert_eq!(extract_symbols(&snapshot), None);
    }

    #[test]
    fn test_scalar_snapshot_is_ignored() {
        let snapshot = InvestmentsSnapshot::from_value(json!("OGDC"));
        assert!(snapshot.is_empty());
    }

    #[test]
    fn test_from_iterator() {
        let snapshot: InvestmentsSnapshot = vec![
            ("a", json!({"symbol": "OGDC"})),
            ("b", Value::Null),
        ]
        .into_iter()
        .collect();
        assert_eq!(snapshot.len(), 1);
    }
}
