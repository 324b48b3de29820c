use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

use super::helpers::resolve_indexes;

/// Deletes the records shown at `indexes`.
///
/// All indexes are resolved before anything is removed, so `delete 1 2`
/// removes the first two records as listed, not the first and third. The
/// whole selection is removed with one save: either every record goes or
/// none does.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let resolved = resolve_indexes(store, indexes)?;
    let ids: Vec<_> = resolved.iter().map(|(_, id)| *id).collect();
    let removed = store.delete_many(&ids)?;

    let mut result = CmdResult::default();
    for ((display_index, _), record) in resolved.iter().zip(&removed) {
        result.add_message(CmdMessage::success(format!(
            "Record deleted ({}): {}",
            display_index, record.name
        )));
    }

    Ok(result.with_affected_records(removed))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::StockError;
    use crate::index::parse_selection;
    use crate::store::mem_backend::fixtures::BackendFixture;

    #[test]
    fn deletes_listed_rows() {
        let mut store = RecordStore::open(BackendFixture::new().with_fruit().backend).unwrap();
        let indexes = parse_selection(&["1", "2"], store.len()).unwrap();

        let result = run(&mut store, &indexes).unwrap();

        let deleted: Vec<_> = result.affected_records.iter().map(|r| r.name.as_str()).collect();
        assert_eq!(deleted, vec!["Apple", "banana"]);
        assert_eq!(store.len(), 1);
        assert_eq!(store.records()[0].name, "Grape");
    }

    #[test]
    fn deletes_range() {
        let mut store = RecordStore::open(BackendFixture::new().with_records(5).backend).unwrap();
        let indexes = parse_selection(&["2-4"], store.len()).unwrap();

        run(&mut store, &indexes).unwrap();

        let left: Vec<_> = store.records().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(left, vec!["Item 1", "Item 5"]);
    }

    #[test]
    fn missing_index_deletes_nothing() {
        let mut store = RecordStore::open(BackendFixture::new().with_fruit().backend).unwrap();
        let indexes = parse_selection(&["1", "9"], store.len()).unwrap();

        assert!(matches!(
            run(&mut store, &indexes),
            Err(StockError::IndexOutOfRange { index: 9, len: 3 })
        ));
        assert_eq!(store.len(), 3);
    }

    #[test]
    fn failed_save_deletes_none_of_the_selection() {
        let mut backend = BackendFixture::new().with_fruit().backend;
        backend.fail_saves_after(0);
        let mut store = RecordStore::open(backend).unwrap();
        let before = store.records().to_vec();
        let indexes = parse_selection(&["1", "2"], store.len()).unwrap();

        assert!(matches!(run(&mut store, &indexes), Err(StockError::Io(_))));

        assert_eq!(store.records(), &before[..]);
        assert_eq!(store.backend().stored(), &before[..]);
    }
}
