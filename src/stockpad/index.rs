//! # Display Indexes
//!
//! Records are addressed two ways:
//! - **RecordId**: stable, assigned at creation, used by the store.
//! - **DisplayIndex**: the 1-based row number shown to the user.
//!
//! Display indexes are always the record's position in the *full* collection,
//! even when rendering a search result. So `search an` may show only row `2`,
//! and `delete 2` then removes exactly that record. Indexes are resolved to ids
//! once, before any mutation, so deleting several rows in one command never
//! shifts the targets of the later ones.

use crate::error::{Result, StockError};
use crate::model::{Record, RecordId};
use std::collections::HashSet;
use std::str::FromStr;

/// A user-facing, 1-based row number.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct DisplayIndex(usize);

impl DisplayIndex {
    /// Display index for a zero-based position.
    pub fn from_position(position: usize) -> Self {
        Self(position + 1)
    }

    /// The zero-based position this index refers to.
    pub fn position(&self) -> usize {
        self.0 - 1
    }

    pub fn get(&self) -> usize {
        self.0
    }
}

impl std::fmt::Display for DisplayIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for DisplayIndex {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        match s.trim().parse::<usize>() {
            Ok(0) => Err("Invalid index: indexes start at 1".to_string()),
            Ok(n) => Ok(DisplayIndex(n)),
            Err(_) => Err(format!("Invalid index format: {}", s)),
        }
    }
}

/// A record paired with the index it is shown under.
#[derive(Debug, Clone)]
pub struct DisplayRecord {
    pub index: DisplayIndex,
    pub record: Record,
}

/// Assigns display indexes to the full collection, in collection order.
pub fn index_records(records: &[Record]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(pos, r)| DisplayRecord {
            index: DisplayIndex::from_position(pos),
            record: r.clone(),
        })
        .collect()
}

/// Resolves display indexes against `records`, returning the matching ids.
///
/// Fails on the first index that has no row.
pub fn resolve_indexes(
    records: &[Record],
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, RecordId)>> {
    indexes
        .iter()
        .map(|idx| {
            records
                .get(idx.position())
                .map(|r| (*idx, r.id))
                .ok_or(StockError::IndexOutOfRange {
                    index: idx.get(),
                    len: records.len(),
                })
        })
        .collect()
}

/// Parses a single input string that may be either a single index or a range.
///
/// Supports formats:
/// - Single index: "3"
/// - Range: "3-5" (expands to 3, 4, 5)
///
/// Start must be <= end ("3-3" is valid, "3-2" is an error). A range ending
/// past `len` fails before it is expanded. Single indexes are checked later,
/// during resolution.
pub fn parse_index_or_range(s: &str, len: usize) -> Result<Vec<DisplayIndex>> {
    if let Some((start_str, end_str)) = s.split_once('-') {
        if !start_str.is_empty() {
            let start = DisplayIndex::from_str(start_str).map_err(StockError::Api)?;
            let end = DisplayIndex::from_str(end_str).map_err(StockError::Api)?;
            if start > end {
                return Err(StockError::Api(format!(
                    "Invalid range: start ({}) must be <= end ({})",
                    start, end
                )));
            }
            if end.get() > len {
                return Err(StockError::IndexOutOfRange {
                    index: end.get(),
                    len,
                });
            }
            return Ok((start.0..=end.0).map(DisplayIndex).collect());
        }
    }

    DisplayIndex::from_str(s)
        .map(|idx| vec![idx])
        .map_err(StockError::Api)
}

/// Parses every input with [`parse_index_or_range`], dropping repeats while
/// keeping first-seen order.
pub fn parse_selection<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    let mut seen = HashSet::new();
    let mut out = Vec::new();
    for input in inputs {
        for idx in parse_index_or_range(input.as_ref(), len)? {
            if seen.insert(idx) {
                out.push(idx);
            }
        }
    }
    Ok(out)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::record;

    #[test]
    fn test_parsing() {
        assert_eq!(DisplayIndex::from_str("1"), Ok(DisplayIndex(1)));
        assert_eq!(DisplayIndex::from_str("42"), Ok(DisplayIndex(42)));

        assert!(DisplayIndex::from_str("0").is_err());
        assert!(DisplayIndex::from_str("").is_err());
        assert!(DisplayIndex::from_str("abc").is_err());
        assert!(DisplayIndex::from_str("-1").is_err());
        assert!(DisplayIndex::from_str("12a").is_err());
    }

    #[test]
    fn test_position_roundtrip() {
        let idx = DisplayIndex::from_position(0);
        assert_eq!(idx.get(), 1);
        assert_eq!(idx.position(), 0);
        assert_eq!(idx.to_string(), "1");
    }

    #[test]
    fn test_parse_single_index() {
        assert_eq!(parse_index_or_range("3", 5).unwrap(), vec![DisplayIndex(3)]);
    }

    #[test]
    fn test_parse_range() {
        assert_eq!(
            parse_index_or_range("3-5", 5).unwrap(),
            vec![DisplayIndex(3), DisplayIndex(4), DisplayIndex(5)]
        );
        assert_eq!(parse_index_or_range("3-3", 5).unwrap(), vec![DisplayIndex(3)]);
    }

    #[test]
    fn test_parse_range_errors() {
        for bad in ["5-3", "0-2", "1-", "a-b", "-3"] {
            assert!(
                matches!(parse_index_or_range(bad, 10), Err(StockError::Api(_))),
                "{} should be rejected",
                bad
            );
        }
    }

    #[test]
    fn test_range_past_end_fails_before_expanding() {
        let err = parse_index_or_range("1-4000000000", 1).unwrap_err();
        assert!(matches!(
            err,
            StockError::IndexOutOfRange {
                index: 4000000000,
                len: 1
            }
        ));

        let err = parse_selection(&["1", "2-300000"], 3).unwrap_err();
        assert!(matches!(err, StockError::IndexOutOfRange { len: 3, .. }));
    }

    #[test]
    fn test_parse_selection_dedupes() {
        let parsed = parse_selection(&["2", "1-3", "2"], 3).unwrap();
        assert_eq!(parsed, vec![DisplayIndex(2), DisplayIndex(1), DisplayIndex(3)]);
    }

    #[test]
    fn test_parse_selection_leaves_single_indexes_to_resolution() {
        let parsed = parse_selection(&["9"], 3).unwrap();
        assert_eq!(parsed, vec![DisplayIndex(9)]);
    }

    #[test]
    fn test_index_records_is_one_based() {
        let records = vec![record("A", 1, 1.0), record("B", 2, 2.0)];
        let indexed = index_records(&records);
        assert_eq!(indexed[0].index, DisplayIndex(1));
        assert_eq!(indexed[1].index, DisplayIndex(2));
        assert_eq!(indexed[1].record.name, "B");
    }

    #[test]
    fn test_resolve_indexes() {
        let records = vec![record("A", 1, 1.0), record("B", 2, 2.0)];
        let resolved = resolve_indexes(&records, &[DisplayIndex(2)]).unwrap();
        assert_eq!(resolved, vec![(DisplayIndex(2), records[1].id)]);

        let err = resolve_indexes(&records, &[DisplayIndex(3)]).unwrap_err();
        assert!(matches!(err, StockError::IndexOutOfRange { index: 3, len: 2 }));
    }
}
