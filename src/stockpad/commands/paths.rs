use crate::commands::CmdResult;
use crate::error::{Result, StockError};
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

/// Reports where the inventory is stored.
pub fn run<B: StorageBackend>(store: &RecordStore<B>) -> Result<CmdResult> {
    let path = store
        .backend()
        .location()
        .ok_or_else(|| StockError::Api("This store has no file location".to_string()))?;
    Ok(CmdResult::default().with_record_paths(vec![path.to_path_buf()]))
}
