//! In-memory log of accepted article counts

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// An accepted entry; never modified once recorded
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AcceptedRecord {
    /// Date the entry was accepted (serialised as YYYY-MM-DD)
    pub fecha: NaiveDate,
    /// Publication name
    pub diario: String,
    /// Accepted article count
    pub cantidad: u64,
}

impl AcceptedRecord {
    pub fn new(fecha: NaiveDate, diario: impl Into<String>, cantidad: u64) -> Self {
        Self {
            fecha,
            diario: diario.into(),
            cantidad,
        }
    }
}

/// Append-only list of accepted records, held for the process lifetime
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<AcceptedRecord>,
}

impl RecordStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append(&mut self, record: AcceptedRecord) {
        self.records.push(record);
    }

    /// Records in acceptance order
    pub fn records(&self) -> &[AcceptedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
