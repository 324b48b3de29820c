//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every inventory operation, whatever the UI.
//!
//! The facade:
//! - **Owns** the [`RecordStore`]: there is no process-wide collection, a UI
//!   holds a `StockApi` and passes it where it is needed
//! - **Normalizes inputs** (raw index strings → [`DisplayIndex`] → record ids)
//! - **Returns structured types** (`Result<CmdResult>`)
//!
//! It does no business logic (that lives in `commands/*.rs`) and no output
//! formatting.
//!
//! `StockApi<B: StorageBackend>` is generic over the backend:
//! - Production: `StockApi<FsBackend>`
//! - Testing: `StockApi<MemBackend>`

use crate::commands;
use crate::error::{Result, StockError};
use crate::index::{parse_selection, DisplayIndex};
use crate::store::record_store::RecordStore;
use crate::store::StorageBackend;
use std::path::PathBuf;
use std::str::FromStr;

/// The main API facade for inventory operations.
pub struct StockApi<B: StorageBackend> {
    store: RecordStore<B>,
    config_dir: PathBuf,
}

impl<B: StorageBackend> StockApi<B> {
    /// Loads the inventory from `backend`.
    ///
    /// Fails if the stored data cannot be read, including when the file is
    /// present but corrupt.
    pub fn open(backend: B, config_dir: PathBuf) -> Result<Self> {
        let store = RecordStore::open(backend)?;
        Ok(Self { store, config_dir })
    }

    pub fn store(&self) -> &RecordStore<B> {
        &self.store
    }

    pub fn list_records(&self) -> Result<commands::CmdResult> {
        commands::list::run(&self.store)
    }

    pub fn search_records(&self, query: &str) -> Result<commands::CmdResult> {
        commands::search::run(&self.store, query)
    }

    pub fn view_records<I: AsRef<str>>(&self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selection = parse_selectors(indexes, self.store.len())?;
        commands::view::run(&self.store, &selection)
    }

    pub fn add_record(
        &mut self,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, name, quantity, price)
    }

    pub fn edit_record(
        &mut self,
        index: &str,
        changes: commands::RecordChanges,
    ) -> Result<commands::CmdResult> {
        let index = DisplayIndex::from_str(index).map_err(StockError::Api)?;
        commands::edit::run(&mut self.store, index, changes)
    }

    pub fn delete_records<I: AsRef<str>>(&mut self, indexes: &[I]) -> Result<commands::CmdResult> {
        let selection = parse_selectors(indexes, self.store.len())?;
        commands::delete::run(&mut self.store, &selection)
    }

    pub fn record_paths(&self) -> Result<commands::CmdResult> {
        commands::paths::run(&self.store)
    }

    pub fn config(&self, action: ConfigAction) -> Result<commands::CmdResult> {
        commands::config::run(&self.config_dir, action)
    }
}

fn parse_selectors<I: AsRef<str>>(inputs: &[I], len: usize) -> Result<Vec<DisplayIndex>> {
    if inputs.is_empty() {
        return Err(StockError::Api("No indexes given".to_string()));
    }
    parse_selection(inputs, len)
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel, RecordChanges};

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::mem_backend::fixtures::BackendFixture;
    use crate::store::mem_backend::MemBackend;

    fn api() -> StockApi<MemBackend> {
        StockApi::open(BackendFixture::new().with_fruit().backend, PathBuf::from(".")).unwrap()
    }

    #[test]
    fn add_dispatches_to_store() {
        let mut api = api();
        let result = api.add_record("Pen", "10", "5.50").unwrap();
        assert_eq!(result.affected_records[0].name, "Pen");
        assert_eq!(api.store().len(), 4);
    }

    #[test]
    fn edit_parses_display_index() {
        let mut api = api();
        let changes = RecordChanges {
            quantity: Some("7".into()),
            ..Default::default()
        };
        api.edit_record("1", changes).unwrap();
        assert_eq!(api.store().records()[0].quantity, 7);
    }

    #[test]
    fn edit_rejects_malformed_index() {
        let mut api = api();
        let err = api.edit_record("first", RecordChanges::default()).unwrap_err();
        assert!(matches!(err, StockError::Api(_)));
    }

    #[test]
    fn delete_accepts_ranges() {
        let mut api = api();
        let result = api.delete_records(&["1-2"]).unwrap();
        assert_eq!(result.affected_records.len(), 2);
        assert_eq!(api.store().records()[0].name, "Grape");
    }

    #[test]
    fn index_errors_are_typed() {
        let mut api = api();
        let changes = RecordChanges {
            name: Some("X".into()),
            ..Default::default()
        };

        let err = api.edit_record("9", changes.clone()).unwrap_err();
        assert!(matches!(err, StockError::IndexOutOfRange { index: 9, len: 3 }));

        let err = api.delete_records(&["9"]).unwrap_err();
        assert!(matches!(err, StockError::IndexOutOfRange { index: 9, len: 3 }));

        let err = api.view_records(&["1-300000"]).unwrap_err();
        assert!(matches!(err, StockError::IndexOutOfRange { .. }));

        let err = api.edit_record("abc", changes).unwrap_err();
        assert!(matches!(err, StockError::Api(_)));
        assert_eq!(api.store().len(), 3);
    }

    #[test]
    fn delete_requires_indexes() {
        let mut api = api();
        let empty: [&str; 0] = [];
        assert!(api.delete_records(&empty).is_err());
    }

    #[test]
    fn search_and_list_return_listed_records() {
        let api = api();
        assert_eq!(api.list_records().unwrap().listed_records.len(), 3);
        assert_eq!(api.search_records("ape").unwrap().listed_records.len(), 1);
    }

    #[test]
    fn config_uses_config_dir() {
        let dir = tempfile::TempDir::new().unwrap();
        let api = StockApi::open(MemBackend::new(), dir.path().to_path_buf()).unwrap();

        api.config(ConfigAction::Set("currency".into(), "$".into()))
            .unwrap();
        let result = api.config(ConfigAction::ShowAll).unwrap();
        assert_eq!(result.config.unwrap().currency, "$");
    }

    #[test]
    fn view_returns_selected() {
        let api = api();
        let result = api.view_records(&["2"]).unwrap();
        assert_eq!(result.listed_records[0].record.name, "banana");
    }
}
