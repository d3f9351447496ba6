// Verification script to demonstrate planner persistence
use chrono::NaiveDate;
use shift_planner::models::block::{BlockDraft, BlockPatch};
use shift_planner::services::block::BlockStore;
use shift_planner::services::config::{default_config_path, PlannerConfig};
use shift_planner::services::settings::SettingsService;
use shift_planner::services::storage::SqliteStore;
use shift_planner::utils::lane::{position_of, snap_position};

const DB_PATH: &str = "planner_demo.db";

fn main() {
    env_logger::init();

    println!("=== Shift Planner Persistence Verification ===\n");
    std::fs::remove_file(DB_PATH).ok();

    let date = NaiveDate::from_ymd_opt(2024, 6, 10).expect("valid date");
    let config_path = default_config_path();
    let config = PlannerConfig::load(&config_path).expect("Failed to load config");
    let window = config.working_window();
    println!(
        "Config: {} (window {}-{}, snap {} min)\n",
        config_path.display(),
        config.work_start,
        config.work_end,
        config.snap_minutes
    );

    // Step 1: First launch - open the day and schedule work
    println!("Step 1: First launch - scheduling blocks for {}...", date);
    let block_id = {
        let mut storage = SqliteStore::new(DB_PATH).expect("Failed to open storage");
        let settings = SettingsService::new(&mut storage).get();
        let shift = settings.default_shift().unwrap_or("Shift 1").to_string();

        let mut store = BlockStore::load(storage);
        store.ensure_day(date, &shift);
        let block = store.add_block(
            date,
            BlockDraft::new("BRAD", shift.as_str(), "08:00", "09:00").title("Briefing"),
        );
        // Double-click in the middle of a 1440 px lane
        let start = snap_position(720.0, 1440.0, window, config.snap_minutes);
        store.add_block(date, BlockDraft::new("MEGAN", shift.as_str(), start, "15:30"));

        let pos = position_of(&block, window);
        println!("  Added {} ({})", block.label(), block.id);
        println!(
            "    left = {:.4}, width = {:.4}",
            pos.left_fraction, pos.width_fraction
        );
        block.id
    }; // Storage closed

    println!("\nStep 2: Edit the first block and switch to a dark theme...");
    {
        let mut storage = SqliteStore::new(DB_PATH).expect("Failed to open storage");
        SettingsService::new(&mut storage)
            .toggle_theme()
            .expect("Failed to save theme");

        let mut store = BlockStore::load(storage);
        store.update_block(date, &block_id, BlockPatch::new().end("09:45"));
        println!("  Saved!");
    }

    println!("\nStep 3: Restart - loading the day view...");
    {
        let mut storage = SqliteStore::new(DB_PATH).expect("Failed to open storage");
        let settings = SettingsService::new(&mut storage).get();
        let shift = settings.default_shift().unwrap_or("Shift 1").to_string();
        let store = BlockStore::load(storage);

        println!("  Theme: {}", if settings.dark_theme { "dark ✓" } else { "light" });
        for lane in store.lanes(date, &shift, settings.roster_for(&shift)) {
            let labels: Vec<String> = lane.blocks.iter().map(|b| b.label()).collect();
            println!("    {:<8} {}", lane.tech, labels.join(", "));
        }

        let edited = store
            .find_block(date, &block_id)
            .expect("Edited block should persist");
        assert_eq!(edited.end, "09:45", "Edit should persist");
        assert!(settings.dark_theme, "Theme should persist");
    }

    std::fs::remove_file(DB_PATH).ok();
    println!("\n✅ Verification complete! Blocks and settings persist across restarts.");
}
