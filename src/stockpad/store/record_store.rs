use super::StorageBackend;
use crate::error::{Result, StockError};
use crate::model::{Record, RecordId};
use crate::validation::validate_record;
use std::collections::HashSet;
use tracing::{debug, info, warn};

/// The ordered inventory collection and its persisted mirror.
///
/// Every successful mutation is followed by a full save through the backend.
/// A failed save undoes the mutation before the error is returned.
pub struct RecordStore<B: StorageBackend> {
    backend: B,
    records: Vec<Record>,
}

impl<B: StorageBackend> RecordStore<B> {
    /// Loads the collection from `backend`.
    pub fn open(backend: B) -> Result<Self> {
        let records = backend.load()?;
        info!(count = records.len(), "opened inventory");
        Ok(Self { backend, records })
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    /// The full collection, in insertion order.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn get(&self, id: RecordId) -> Result<&Record> {
        self.records
            .iter()
            .find(|r| r.id == id)
            .ok_or(StockError::NotFound(id))
    }

    /// Current position of the record with `id`.
    pub fn position(&self, id: RecordId) -> Option<usize> {
        self.records.iter().position(|r| r.id == id)
    }

    /// Id of the record at the zero-based `index`.
    pub fn id_at(&self, index: usize) -> Result<RecordId> {
        self.records
            .get(index)
            .map(|r| r.id)
            .ok_or(StockError::IndexOutOfRange {
                index,
                len: self.records.len(),
            })
    }

    /// Re-reads the collection from the backend, dropping in-memory state.
    pub fn reload(&mut self) -> Result<()> {
        self.records = self.backend.load()?;
        Ok(())
    }

    /// Writes the whole collection through the backend.
    pub fn save(&mut self) -> Result<()> {
        self.backend.save(&self.records)
    }

    /// Validates the raw field text and appends a new record.
    pub fn add(&mut self, name: &str, quantity: &str, price: &str) -> Result<Record> {
        let draft = validate_record(name, quantity, price)?;
        let record = Record::new(draft);

        self.records.push(record.clone());
        if let Err(e) = self.save() {
            warn!(error = %e, "save failed, discarding new record");
            self.records.pop();
            return Err(e);
        }

        debug!(id = %record.id, name = %record.name, "added record");
        Ok(record)
    }

    /// Validates the raw field text and replaces the values of record `id` in place.
    pub fn edit(
        &mut self,
        id: RecordId,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<Record> {
        let pos = self.position(id).ok_or(StockError::NotFound(id))?;
        let draft = validate_record(name, quantity, price)?;

        let previous = self.records[pos].clone();
        self.records[pos].apply(draft);
        if let Err(e) = self.save() {
            warn!(error = %e, "save failed, restoring previous values");
            self.records[pos] = previous;
            return Err(e);
        }

        debug!(%id, position = pos, "edited record");
        Ok(self.records[pos].clone())
    }

    /// Like [`RecordStore::edit`], addressing the record by zero-based position.
    pub fn edit_at(
        &mut self,
        index: usize,
        name: &str,
        quantity: &str,
        price: &str,
    ) -> Result<Record> {
        let id = self.id_at(index)?;
        self.edit(id, name, quantity, price)
    }

    /// Removes record `id`. Later records move up one position.
    pub fn delete(&mut self, id: RecordId) -> Result<Record> {
        let pos = self.position(id).ok_or(StockError::NotFound(id))?;

        let removed = self.records.remove(pos);
        if let Err(e) = self.save() {
            warn!(error = %e, "save failed, restoring deleted record");
            self.records.insert(pos, removed);
            return Err(e);
        }

        debug!(%id, position = pos, "deleted record");
        Ok(removed)
    }

    /// Removes every record in `ids` with a single save.
    ///
    /// Unknown ids fail before anything is removed. If the save fails, all of
    /// the records go back where they were. Removed records are returned in
    /// the order of `ids`, with repeats dropped.
    pub fn delete_many(&mut self, ids: &[RecordId]) -> Result<Vec<Record>> {
        let mut seen = HashSet::new();
        let mut targets = Vec::with_capacity(ids.len());
        for &id in ids {
            if seen.insert(id) {
                let pos = self.position(id).ok_or(StockError::NotFound(id))?;
                targets.push((pos, targets.len()));
            }
        }

        // Highest position first, so earlier removals don't shift later ones.
        targets.sort_unstable_by(|a, b| b.0.cmp(&a.0));
        let mut removed: Vec<(usize, usize, Record)> = targets
            .into_iter()
            .map(|(pos, order)| (pos, order, self.records.remove(pos)))
            .collect();

        if let Err(e) = self.save() {
            warn!(error = %e, count = removed.len(), "save failed, restoring deleted records");
            for (pos, _, record) in removed.into_iter().rev() {
                self.records.insert(pos, record);
            }
            return Err(e);
        }

        debug!(count = removed.len(), "deleted records");
        removed.sort_unstable_by_key(|(_, order, _)| *order);
        Ok(removed.into_iter().map(|(_, _, record)| record).collect())
    }

    /// Like [`RecordStore::delete`], addressing the record by zero-based position.
    pub fn delete_at(&mut self, index: usize) -> Result<Record> {
        let id = self.id_at(index)?;
        self.delete(id)
    }

    /// Case-insensitive substring search on names.
    ///
    /// A blank query matches everything. Each hit carries the record's position
    /// in the full collection, not in the filtered result.
    pub fn search(&self, query: &str) -> Search<'_> {
        let query = query.trim();
        Search {
            inner: self.records.iter().enumerate(),
            needle: (!query.is_empty()).then(|| query.to_lowercase()),
        }
    }
}

/// Lazy filtered view over a [`RecordStore`], yielding `(position, record)`.
pub struct Search<'a> {
    inner: std::iter::Enumerate<std::slice::Iter<'a, Record>>,
    needle: Option<String>,
}

impl<'a> Iterator for Search<'a> {
    type Item = (usize, &'a Record);

    fn next(&mut self) -> Option<Self::Item> {
        let needle = match &self.needle {
            None => return self.inner.next(),
            Some(n) => n,
        };
        self.inner
            .by_ref()
            .find(|(_, r)| r.name.to_lowercase().contains(needle.as_str()))
    }
}
