use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Stable identity of a record, assigned once at creation.
///
/// Positions in the collection shift on every delete, so everything below the
/// display layer addresses records by id.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RecordId(Uuid);

impl RecordId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for RecordId {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Validated field values for a record, before it gets an identity.
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDraft {
    pub name: String,
    pub quantity: u64,
    pub price: f64,
}

/// One inventory line item.
///
/// On disk the quantity is stored under `qty`. Files that predate ids and
/// timestamps still load: missing fields are filled in at load time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    #[serde(default)]
    pub id: RecordId,
    pub name: String,
    #[serde(rename = "qty")]
    pub quantity: u64,
    pub price: f64,
    #[serde(default = "Utc::now")]
    pub added_at: DateTime<Utc>,
    #[serde(default = "Utc::now")]
    pub updated_at: DateTime<Utc>,
}

impl Record {
    pub fn new(draft: RecordDraft) -> Self {
        let now = Utc::now();
        Self {
            id: RecordId::new(),
            name: draft.name,
            quantity: draft.quantity,
            price: draft.price,
            added_at: now,
            updated_at: now,
        }
    }

    /// Replaces the field values, keeping id and creation time.
    pub fn apply(&mut self, draft: RecordDraft) {
        self.name = draft.name;
        self.quantity = draft.quantity;
        self.price = draft.price;
        self.updated_at = Utc::now();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn deserializes_legacy_entries_without_id() {
        let json = r#"[{"name": "Pen", "qty": 10, "price": 5.5}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();

        assert_eq!(records.len(), 1);
        assert_eq!(records[0].name, "Pen");
        assert_eq!(records[0].quantity, 10);
        assert_eq!(records[0].price, 5.5);
    }

    #[test]
    fn legacy_entries_get_distinct_ids() {
        let json = r#"[{"name": "A", "qty": 1, "price": 1}, {"name": "A", "qty": 1, "price": 1}]"#;
        let records: Vec<Record> = serde_json::from_str(json).unwrap();
        assert_ne!(records[0].id, records[1].id);
    }

    #[test]
    fn serializes_quantity_as_qty() {
        let record = Record::new(RecordDraft {
            name: "Pen".into(),
            quantity: 3,
            price: 1.25,
        });
        let value = serde_json::to_value(&record).unwrap();

        assert_eq!(value["qty"], 3);
        assert_eq!(value["price"], 1.25);
        assert_eq!(value["name"], "Pen");
        assert!(value.get("quantity").is_none());
    }

    #[test]
    fn apply_keeps_identity() {
        let mut record = Record::new(RecordDraft {
            name: "Pen".into(),
            quantity: 3,
            price: 1.0,
        });
        let id = record.id;
        let added = record.added_at;

        record.apply(RecordDraft {
            name: "Pencil".into(),
            quantity: 4,
            price: 0.5,
        });

        assert_eq!(record.id, id);
        assert_eq!(record.added_at, added);
        assert_eq!(record.name, "Pencil");
        assert_eq!(record.quantity, 4);
    }
}
