// Property-based tests for the block store
// Exercises add, edit and remove with random inputs

use chrono::NaiveDate;
use proptest::prelude::*;
use shift_planner::models::block::{BlockDraft, BlockPatch};
use shift_planner::services::block::BlockStore;
use shift_planner::services::storage::MemoryStore;

fn june_10() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
}

fn hhmm() -> impl Strategy<Value = String> {
    (0..24i32, 0..60i32).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

/// A store pre-filled with `starts.len()` blocks on June 10
fn seeded_store(starts: &[String]) -> (BlockStore<MemoryStore>, Vec<String>) {
    let mut store = BlockStore::load(MemoryStore::new());
    let ids = starts
        .iter()
        .enumerate()
        .map(|(i, start)| {
            let tech = if i % 2 == 0 { "BRAD" } else { "VERNE" };
            store
                .add_block(june_10(), BlockDraft::new(tech, "Shift 1", start.clone(), "19:00"))
                .id
        })
        .collect();
    (store, ids)
}

proptest! {
    /// Property: every added block is immediately visible with a fresh id
    #[test]
    fn prop_added_blocks_have_unique_ids(starts in prop::collection::vec(hhmm(), 1..40)) {
        let (store, ids) = seeded_store(&starts);

        let visible: Vec<&str> = store
            .blocks_for(june_10(), "Shift 1")
            .iter()
            .map(|b| b.id.as_str())
            .collect();
        prop_assert_eq!(visible.len(), ids.len());
        for id in &ids {
            prop_assert!(visible.contains(&id.as_str()));
        }

        let mut unique = ids.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), ids.len());
    }

    /// Property: a removed id never shows up again
    #[test]
    fn prop_removed_block_is_gone(
        starts in prop::collection::vec(hhmm(), 1..20),
        pick in any::<prop::sample::Index>(),
    ) {
        let (mut store, ids) = seeded_store(&starts);
        let target = pick.get(&ids).clone();

        prop_assert!(store.remove_block(june_10(), &target));
        prop_assert!(store
            .blocks_for(june_10(), "Shift 1")
            .iter()
            .all(|b| b.id != target));
        prop_assert_eq!(store.blocks_for(june_10(), "Shift 1").len(), ids.len() - 1);
    }

    /// Property: stale ids leave the day untouched for both update and remove
    #[test]
    fn prop_stale_id_leaves_day_unchanged(
        starts in prop::collection::vec(hhmm(), 0..20),
        title in "[A-Za-z ]{0,12}",
    ) {
        let (mut store, _) = seeded_store(&starts);
        store.ensure_day(june_10(), "Shift 1");
        let before = store.day(june_10()).cloned();

        // Generated ids are base-36 lowercase, so an uppercase id never matches
        prop_assert!(!store.update_block(june_10(), "STALE", BlockPatch::new().title(title)));
        prop_assert!(!store.remove_block(june_10(), "STALE"));
        prop_assert_eq!(store.day(june_10()).cloned(), before);
    }

    /// Property: a title-only edit changes the title and nothing else
    #[test]
    fn prop_title_edit_changes_only_title(
        starts in prop::collection::vec(hhmm(), 1..10),
        pick in any::<prop::sample::Index>(),
        title in "[A-Za-z0-9 ]{0,20}",
    ) {
        let (mut store, ids) = seeded_store(&starts);
        let target = pick.get(&ids).clone();
        let before = store.find_block(june_10(), &target).cloned().unwrap();

        prop_assert!(store.update_block(june_10(), &target, BlockPatch::new().title(title.clone())));

        let after = store.find_block(june_10(), &target).cloned().unwrap();
        prop_assert_eq!(after.title.as_deref(), Some(title.as_str()));
        prop_assert_eq!(&after.id, &before.id);
        prop_assert_eq!(&after.tech, &before.tech);
        prop_assert_eq!(&after.start, &before.start);
        prop_assert_eq!(&after.end, &before.end);
        prop_assert_eq!(&after.shift, &before.shift);
        prop_assert_eq!(&after.color, &before.color);
    }
}
