// Property-based tests for time arithmetic and lane geometry
// Exercises conversion, positioning and snapping with random inputs

use proptest::prelude::*;
use shift_planner::models::block::{Block, BlockDraft};
use shift_planner::utils::lane::{position_of, snap_minutes, WorkingWindow};
use shift_planner::utils::time::{minutes_to_time, time_to_minutes};

fn hhmm() -> impl Strategy<Value = String> {
    (0..24i32, 0..60i32).prop_map(|(h, m)| format!("{:02}:{:02}", h, m))
}

proptest! {
    /// Property: formatting then parsing any valid HH:MM is the identity
    #[test]
    fn prop_time_round_trip(s in hhmm()) {
        prop_assert_eq!(minutes_to_time(time_to_minutes(&s)), s);
    }

    /// Property: snapped starts sit on the grid and inside the clamped window
    #[test]
    fn prop_snap_on_grid_and_in_window(
        pixel_x in -2000.0f64..4000.0,
        lane_width in 1.0f64..3000.0,
        snap in prop::sample::select(vec![5i32, 10, 15, 30, 60]),
    ) {
        let window = WorkingWindow::default();
        let minutes = snap_minutes(pixel_x, lane_width, window, snap);

        prop_assert_eq!(minutes % snap, 0);
        prop_assert!(minutes >= window.start);
        prop_assert!(minutes <= window.end - snap);
    }

    /// Property: any pair of hour/minute components positions without overflow
    #[test]
    fn prop_position_of_arbitrary_components(
        sh in any::<i32>(),
        sm in any::<i32>(),
        eh in any::<i32>(),
        em in any::<i32>(),
    ) {
        let block = Block::from_draft(
            "b",
            BlockDraft::new("BRAD", "Shift 1", format!("{}:{}", sh, sm), format!("{}:{}", eh, em)),
        );
        let pos = position_of(&block, WorkingWindow::default());

        prop_assert!(pos.left_fraction.is_finite());
        prop_assert!(pos.width_fraction.is_finite());
        prop_assert_eq!(
            block.duration_minutes(),
            i64::from(block.end_minutes()) - i64::from(block.start_minutes())
        );
    }
}
