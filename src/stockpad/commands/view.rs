use crate::commands::CmdResult;
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

use super::helpers::records_by_indexes;

pub fn run<B: StorageBackend>(
    store: &RecordStore<B>,
    indexes: &[DisplayIndex],
) -> Result<CmdResult> {
    let records = records_by_indexes(store, indexes)?;
    Ok(CmdResult::default().with_listed_records(records))
}
