use super::StorageBackend;
use crate::error::{Result, StockError};
use crate::model::Record;
use std::path::Path;

/// In-memory storage for testing and development.
/// Does NOT persist data.
#[derive(Default)]
pub struct MemBackend {
    records: Vec<Record>,
    saves: usize,
    saves_left: Option<usize>,
}

impl MemBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Starts with `records` already "on disk".
    pub fn with_records(records: Vec<Record>) -> Self {
        Self {
            records,
            ..Self::default()
        }
    }

    /// Makes every subsequent save fail with an I/O error.
    pub fn failing_saves(mut self) -> Self {
        self.saves_left = Some(0);
        self
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.saves_left = fail.then_some(0);
    }

    /// Lets the next `n` saves through, then fails every save after them.
    pub fn fail_saves_after(&mut self, n: usize) {
        self.saves_left = Some(n);
    }

    /// What the last successful save wrote.
    pub fn stored(&self) -> &[Record] {
        &self.records
    }

    /// Number of successful saves.
    pub fn save_count(&self) -> usize {
        self.saves
    }
}

impl StorageBackend for MemBackend {
    fn load(&self) -> Result<Vec<Record>> {
        Ok(self.records.clone())
    }

    fn save(&mut self, records: &[Record]) -> Result<()> {
        match self.saves_left {
            Some(0) => {
                return Err(StockError::Io(std::io::Error::other("simulated write failure")));
            }
            Some(ref mut n) => *n -= 1,
            None => {}
        }
        self.records = records.to_vec();
        self.saves += 1;
        Ok(())
    }

    fn location(&self) -> Option<&Path> {
        None
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::RecordDraft;

    pub fn record(name: &str, quantity: u64, price: f64) -> Record {
        Record::new(RecordDraft {
            name: name.to_string(),
            quantity,
            price,
        })
    }

    pub struct BackendFixture {
        pub backend: MemBackend,
    }

    impl Default for BackendFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl BackendFixture {
        pub fn new() -> Self {
            Self {
                backend: MemBackend::new(),
            }
        }

        /// Adds `count` records named "Item 1", "Item 2", ...
        pub fn with_records(mut self, count: usize) -> Self {
            for i in 0..count {
                let r = record(&format!("Item {}", i + 1), (i as u64 + 1) * 10, 1.5);
                self.backend.records.push(r);
            }
            self
        }

        pub fn with_record(mut self, name: &str, quantity: u64, price: f64) -> Self {
            self.backend.records.push(record(name, quantity, price));
            self
        }

        /// Records named "Apple", "banana", "Grape", in that order.
        pub fn with_fruit(self) -> Self {
            self.with_record("Apple", 5, 1.2)
                .with_record("banana", 12, 0.5)
                .with_record("Grape", 40, 3.0)
        }
    }
}
