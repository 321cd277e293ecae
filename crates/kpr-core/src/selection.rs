//! Curated record selection for targeted document generation.
//!
//! Rows picked out of a batch table (for instance through a search front
//! end) are gathered here before composition. The collection owns its
//! records and only changes through explicit add/remove/clear calls;
//! confirmation prompts are a front-end concern, not enforced here.

use crate::models::record::ExtractedRecord;

/// An append-only set of hand-picked records.
#[derive(Debug, Default)]
pub struct Selection {
    records: Vec<ExtractedRecord>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to the selection.
    ///
    /// Always succeeds; duplicates are allowed, matching repeated picks of
    /// the same table row.
    pub fn add(&mut self, record: ExtractedRecord) {
        self.records.push(record);
    }

    /// Remove and return the record at `index`.
    ///
    /// `index` must be within bounds: an out-of-range index returns `None`
    /// and leaves the selection unchanged.
    pub fn remove(&mut self, index: usize) -> Option<ExtractedRecord> {
        if index < self.records.len() {
            Some(self.records.remove(index))
        } else {
            None
        }
    }

    /// Drop every selected record.
    pub fn clear(&mut self) {
        self.records.clear();
    }

    /// Selected records in pick order.
    pub fn records(&self) -> &[ExtractedRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
