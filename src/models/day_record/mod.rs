//! Per-date container of time blocks.
//!
//! `Assignments` maps a `YYYY-MM-DD` key to its `DayRecord` and is the whole
//! persisted scheduling state.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::block::Block;

/// All day records keyed by ISO date string.
pub type Assignments = BTreeMap<String, DayRecord>;

/// Blocks scheduled on one calendar date.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayRecord {
    /// The date key, stored again inside the record.
    pub date: String,
    /// Shift selected when the record was first created. Blocks carry their own shift.
    pub shift: String,
    /// Blocks in insertion order.
    #[serde(default)]
    pub blocks: Vec<Block>,
}

impl DayRecord {
    /// Create an empty record for a date key.
    pub fn new(date: impl Into<String>, shift: impl Into<String>) -> Self {
        Self {
            date: date.into(),
            shift: shift.into(),
            blocks: Vec::new(),
        }
    }

    pub fn find_block(&self, id: &str) -> Option<&Block> {
        self.blocks.iter().find(|b| b.id == id)
    }

    pub fn find_block_mut(&mut self, id: &str) -> Option<&mut Block> {
        self.blocks.iter_mut().find(|b| b.id == id)
    }

    pub fn contains_block(&self, id: &str) -> bool {
        self.find_block(id).is_some()
    }

    /// Blocks belonging to `shift`, in insertion order.
    pub fn blocks_for_shift(&self, shift: &str) -> Vec<&Block> {
        self.blocks.iter().filter(|b| b.shift == shift).collect()
    }

    /// Remove the block with `id`. Returns whether anything was removed.
    pub fn remove_block(&mut self, id: &str) -> bool {
        let before = self.blocks.len();
        self.blocks.retain(|b| b.id != id);
        self.blocks.len() != before
    }

    pub fn is_empty(&self) -> bool {
        self.blocks.is_empty()
    }
}
