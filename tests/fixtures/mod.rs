// Test fixtures - reusable test data
// Provides consistent dates, drafts and rosters across test files

#![allow(dead_code)]

use chrono::NaiveDate;
use shift_planner::models::block::BlockDraft;

/// Sample dates for testing
pub mod dates {
    use super::*;

    /// Monday June 10, 2024
    pub fn june_10_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 10).unwrap()
    }

    /// Tuesday June 11, 2024
    pub fn june_11_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 6, 11).unwrap()
    }

    /// Feb 29, 2024 (leap year)
    pub fn leap_day_2024() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 2, 29).unwrap()
    }
}

/// Sample block drafts
pub mod drafts {
    use super::*;

    /// One hour for BRAD on Shift 1, 08:00-09:00
    pub fn brad_morning() -> BlockDraft {
        BlockDraft::new("BRAD", "Shift 1", "08:00", "09:00")
    }

    /// Titled, colored block for MEGAN on Shift 1
    pub fn megan_inspection() -> BlockDraft {
        BlockDraft::new("MEGAN", "Shift 1", "10:30", "12:00")
            .title("Inspection")
            .color("#f59e0b")
    }

    /// Shift 2 block that must not show up in Shift 1 views
    pub fn mike_evening() -> BlockDraft {
        BlockDraft::new("MIKE", "Shift 2", "17:00", "18:30")
    }

    /// Block whose start was never filled in
    pub fn missing_start() -> BlockDraft {
        BlockDraft::new("DREW", "Shift 1", "", "09:00")
    }
}

pub fn shift_1_roster() -> Vec<String> {
    ["BRAD", "VERNE", "DREW", "MEGAN"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}
