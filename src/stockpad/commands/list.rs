use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::index_records;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let listed = index_records(store.records());
    Ok(CmdResult::default().with_listed_records(listed))
}
