use crate::commands::{CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::DisplayIndex;
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;

pub fn run<B: StorageBackend>(
    store: &mut RecordStore<B>,
    name: &str,
    quantity: &str,
    price: &str,
) -> Result<CmdResult> {
    let record = store.add(name, quantity, price)?;
    let index = DisplayIndex::from_position(store.len() - 1);

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Successfully added ({}): {}",
        index, record.name
    )));
    Ok(result.with_affected_records(vec![record]))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::MessageLevel;
    use crate::error::StockError;
    use crate::store::mem_backend::MemBackend;

    #[test]
    fn adds_record_and_reports_index() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        run(&mut store, "Pen", "10", "5.50").unwrap();
        let result = run(&mut store, "Ink", "2", "3").unwrap();

        assert_eq!(result.affected_records.len(), 1);
        assert_eq!(result.affected_records[0].name, "Ink");
        assert_eq!(result.messages[0].level, MessageLevel::Success);
        assert_eq!(result.messages[0].content, "Successfully added (2): Ink");
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn rejects_invalid_input() {
        let mut store = RecordStore::open(MemBackend::new()).unwrap();
        let err = run(&mut store, "Pen", "", "1").unwrap_err();
        assert!(matches!(err, StockError::Validation(_)));
        assert!(store.is_empty());
    }
}
