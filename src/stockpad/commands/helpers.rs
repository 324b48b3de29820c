use crate::error::Result;
use crate::index::{self, DisplayIndex, DisplayRecord};
use crate::model::RecordId;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

pub fn resolve_indexes<B: StorageBackend>(
    store: &RecordStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<(DisplayIndex, RecordId)>> {
    index::resolve_indexes(store.records(), indexes)
}

pub fn records_by_indexes<B: StorageBackend>(
    store: &RecordStore<B>,
    indexes: &[DisplayIndex],
) -> Result<Vec<DisplayRecord>> {
    let resolved = resolve_indexes(store, indexes)?;
    let mut records = Vec::with_capacity(resolved.len());
    for (index, id) in resolved {
        let record = store.get(id)?.clone();
        records.push(DisplayRecord { index, record });
    }
    Ok(records)
}
