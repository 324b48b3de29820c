use crate::commands::{CmdMessage, CmdResult, RecordChanges};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

use super::helpers::resolve_indexes;

/// Applies `changes` to the record shown at `index`.
///
/// Fields left out of `changes` are filled with the record's current values
/// and go through the same validation as the new ones.
pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    index: DisplayIndex,
    changes: RecordChanges,
) -> Result<CmdResult> {
    let (index, id) = resolve_indexes(store, &[index])?[0];

    if changes.is_empty() {
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::info(format!("Nothing to change for {}.", index)));
        return Ok(result);
    }

    let current = store.get(id)?;
    let name = changes.name.unwrap_or_else(|| current.name.clone());
    let quantity = changes
        .quantity
        .unwrap_or_else(|| current.quantity.to_string());
    let price = changes.price.unwrap_or_else(|| current.price.to_string());

    let record = store.edit(id, &name, &quantity, &price)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Record updated ({}): {}",
        index, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}
