use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::{DisplayIndex, DisplayRecord};
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

/// Lists records whose name contains `query`, ignoring case.
///
/// Hits keep the index they have in the full listing.
pub fn run<B: StorageBackend>(store: &RecordStore<B>, query: &str) -> Result<CmdResult> {
    let listed = store
        .search(query)
        .map(|(pos, record)| DisplayRecord {
            index: DisplayIndex::from_position(pos),
            record: record.clone(),
        })
        .collect();

    Ok(CmdResult::default().with_listed_records(listed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::BackendFixture;
    use crate::store::mem_backend::MemBackend;

    fn fruit() -> RecordStore<MemBackend> {
        RecordStore::open(BackendFixture::new().with_fruit().backend).unwrap()
    }

    fn names(result: &CmdResult) -> Vec<&str> {
        result
            .listed_records
            .iter()
            .map(|dr| dr.record.name.as_str())
            .collect()
    }

    #[test]
    fn matches_substring_ignoring_case() {
        let result = run(&fruit(), "AN").unwrap();
        assert_eq!(names(&result), vec!["banana"]);
    }

    #[test]
    fn keeps_canonical_indexes() {
        let result = run(&fruit(), "grape").unwrap();
        assert_eq!(result.listed_records.len(), 1);
        assert_eq!(result.listed_records[0].index.get(), 3);
    }

    #[test]
    fn blank_query_lists_everything() {
        let result = run(&fruit(), " ").unwrap();
        assert_eq!(names(&result), vec!["Apple", "banana", "Grape"]);
    }

    #[test]
    fn no_match_is_empty() {
        assert!(run(&fruit(), "kiwi").unwrap().listed_records.is_empty());
    }
}
