//! Time-block store.
//!
//! Owns the in-memory `Assignments` map and every mutation of it. Each mutation
//! runs synchronously and writes the whole map back to durable storage before
//! returning, so storage always mirrors memory. Stale identifiers are tolerated:
//! editing or removing a block that no longer exists is a silent no-op.

use std::collections::BTreeMap;

use chrono::NaiveDate;

use crate::models::block::{generate_block_id, Block, BlockDraft, BlockPatch};
use crate::models::day_record::{Assignments, DayRecord};
use crate::services::storage::{keys, load_or_default, save_json, KeyValueStore};
use crate::utils::date::date_key;

/// One roster member's lane for a (date, shift) view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Lane<'a> {
    pub tech: &'a str,
    pub blocks: Vec<&'a Block>,
}

/// Service owning all scheduled blocks.
pub struct BlockStore<S: KeyValueStore> {
    storage: S,
    assignments: Assignments,
}

impl<S: KeyValueStore> BlockStore<S> {
    /// Load assignments from `storage`, starting empty when nothing usable is stored.
    pub fn load(storage: S) -> Self {
        let assignments: Assignments =
            load_or_default(&storage, keys::ASSIGNMENTS, Assignments::new());

        log::info!(
            "Loaded block store: {} day records, {} blocks",
            assignments.len(),
            assignments.values().map(|d| d.blocks.len()).sum::<usize>()
        );

        Self {
            storage,
            assignments,
        }
    }

    /// Read-only view of every day record.
    pub fn assignments(&self) -> &Assignments {
        &self.assignments
    }

    pub fn day(&self, date: NaiveDate) -> Option<&DayRecord> {
        self.assignments.get(&date_key(date))
    }

    pub fn find_block(&self, date: NaiveDate, id: &str) -> Option<&Block> {
        self.day(date).and_then(|record| record.find_block(id))
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, dropping the in-memory state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Return the record for `date`, creating and persisting an empty one
    /// with `default_shift` the first time the date is seen.
    pub fn ensure_day(&mut self, date: NaiveDate, default_shift: &str) -> &DayRecord {
        let key = date_key(date);
        if !self.assignments.contains_key(&key) {
            log::debug!("Creating day record for {}", key);
            self.assignments
                .insert(key.clone(), DayRecord::new(key.clone(), default_shift));
            self.persist();
        }
        &self.assignments[&key]
    }

    /// Append a new block to `date`, creating the day record if needed.
    ///
    /// The range is stored as given; `start >= end` is accepted.
    pub fn add_block(&mut self, date: NaiveDate, draft: BlockDraft) -> Block {
        let key = date_key(date);
        let record = self
            .assignments
            .entry(key.clone())
            .or_insert_with(|| DayRecord::new(key.clone(), draft.shift.clone()));

        let mut rng = rand::thread_rng();
        let mut id = generate_block_id(&mut rng);
        while record.contains_block(&id) {
            id = generate_block_id(&mut rng);
        }

        let block = Block::from_draft(id, draft);
        record.blocks.push(block.clone());
        log::debug!(
            "Added block {} for {} on {} ({}-{})",
            block.id,
            block.tech,
            key,
            block.start,
            block.end
        );

        self.persist();
        block
    }

    /// Merge `patch` over the block `id` on `date`.
    ///
    /// Returns whether the block was found. A missing block changes nothing.
    pub fn update_block(&mut self, date: NaiveDate, id: &str, patch: BlockPatch) -> bool {
        let key = date_key(date);
        let Some(record) = self.assignments.get_mut(&key) else {
            log::debug!("Ignoring update of {} on {}: no day record", id, key);
            return false;
        };

        let found = match record.find_block_mut(id) {
            Some(block) => {
                block.apply(patch);
                true
            }
            None => {
                log::debug!("Ignoring update of stale block {} on {}", id, key);
                false
            }
        };

        self.persist();
        found
    }

    /// Remove the block `id` from `date`. Returns whether a block was removed.
    ///
    /// Storage is written even when nothing matched.
    pub fn remove_block(&mut self, date: NaiveDate, id: &str) -> bool {
        let key = date_key(date);
        let removed = self
            .assignments
            .get_mut(&key)
            .map(|record| record.remove_block(id))
            .unwrap_or(false);

        if removed {
            log::debug!("Removed block {} on {}", id, key);
        } else {
            log::debug!("No block {} on {} to remove", id, key);
        }

        self.persist();
        removed
    }

    /// Blocks on `date` belonging to `shift`, in insertion order.
    pub fn blocks_for(&self, date: NaiveDate, shift: &str) -> Vec<&Block> {
        self.day(date)
            .map(|record| record.blocks_for_shift(shift))
            .unwrap_or_default()
    }

    /// Blocks on `date` for `shift`, grouped by roster member.
    ///
    /// Includes members that are no longer on any roster.
    pub fn blocks_by_tech(&self, date: NaiveDate, shift: &str) -> BTreeMap<&str, Vec<&Block>> {
        let mut by_tech: BTreeMap<&str, Vec<&Block>> = BTreeMap::new();
        for block in self.blocks_for(date, shift) {
            by_tech.entry(block.tech.as_str()).or_default().push(block);
        }
        by_tech
    }

    /// One lane per roster member, in roster order.
    pub fn lanes<'a>(
        &'a self,
        date: NaiveDate,
        shift: &str,
        roster: &'a [String],
    ) -> Vec<Lane<'a>> {
        let by_tech = self.blocks_by_tech(date, shift);
        roster
            .iter()
            .map(|tech| Lane {
                tech: tech.as_str(),
                blocks: by_tech.get(tech.as_str()).cloned().unwrap_or_default(),
            })
            .collect()
    }

    fn persist(&mut self) {
        if let Err(e) = save_json(&mut self.storage, keys::ASSIGNMENTS, &self.assignments) {
            log::error!("Failed to persist assignments: {}", e);
        }
    }
}
