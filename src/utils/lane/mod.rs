//! Lane geometry: mapping between wall-clock time and horizontal lane position.
//!
//! A lane spans a fixed working window (07:00–19:00 by default). Positions are
//! fractions of the lane width. They are deliberately not clamped, so blocks
//! outside the window land partially or fully off the lane. The only clamping
//! happens when snapping a pointer position for a new block.

use serde::{Deserialize, Serialize};

use crate::models::block::Block;
use crate::utils::time::{minutes_to_time, time_to_minutes, MINUTES_PER_HOUR};

pub const WORK_START: i32 = 7 * 60;
pub const WORK_END: i32 = 19 * 60;
pub const DEFAULT_SNAP_MINUTES: i32 = 15;

/// Visible time range of a lane, in minutes since midnight.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkingWindow {
    pub start: i32,
    pub end: i32,
}

impl Default for WorkingWindow {
    fn default() -> Self {
        Self {
            start: WORK_START,
            end: WORK_END,
        }
    }
}

impl WorkingWindow {
    pub fn new(start: i32, end: i32) -> Self {
        Self { start, end }
    }

    /// Build a window from `"HH:MM"` bounds.
    pub fn from_times(start: &str, end: &str) -> Self {
        Self::new(time_to_minutes(start), time_to_minutes(end))
    }

    /// Window length in minutes. Widened so extreme bounds cannot overflow.
    pub fn span(&self) -> i64 {
        i64::from(self.end) - i64::from(self.start)
    }

    /// Hour axis labels from the window start to its end, both included.
    pub fn hour_marks(&self) -> Vec<String> {
        if self.span() < 0 {
            return Vec::new();
        }
        let hour = i64::from(MINUTES_PER_HOUR);
        (0..=self.span() / hour)
            .filter_map(|i| i32::try_from(i64::from(self.start) + i * hour).ok())
            .map(minutes_to_time)
            .collect()
    }

    /// Fraction of the lane width at which `minutes` falls. Unclamped.
    pub fn fraction_of(&self, minutes: i32) -> f64 {
        let span = self.span();
        if span == 0 {
            return 0.0;
        }
        (f64::from(minutes) - f64::from(self.start)) / span as f64
    }
}

/// Horizontal placement of a block inside a lane, as fractions of the lane width.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LanePosition {
    pub left_fraction: f64,
    pub width_fraction: f64,
}

impl LanePosition {
    /// Left offset and width in pixels for a lane `lane_width` pixels wide.
    pub fn to_pixels(&self, lane_width: f32) -> (f32, f32) {
        let width = f64::from(lane_width);
        (
            (self.left_fraction * width) as f32,
            (self.width_fraction * width) as f32,
        )
    }

    pub fn right_fraction(&self) -> f64 {
        self.left_fraction + self.width_fraction
    }

    /// Whether any part of the block overlaps the visible lane.
    pub fn is_visible(&self) -> bool {
        self.width_fraction > 0.0 && self.right_fraction() > 0.0 && self.left_fraction < 1.0
    }
}

/// Lane placement of a block.
///
/// # Examples
/// ```
/// use shift_planner::models::block::{Block, BlockDraft};
/// use shift_planner::utils::lane::{position_of, WorkingWindow};
///
/// let block = Block::from_draft("b1", BlockDraft::new("BRAD", "Shift 1", "08:00", "09:00"));
/// let pos = position_of(&block, WorkingWindow::default());
/// assert!((pos.left_fraction - 60.0 / 720.0).abs() < 1e-9);
/// assert!((pos.width_fraction - 60.0 / 720.0).abs() < 1e-9);
/// ```
pub fn position_of(block: &Block, window: WorkingWindow) -> LanePosition {
    position_of_range(&block.start, &block.end, window)
}

/// Lane placement of an arbitrary `"HH:MM"` range.
pub fn position_of_range(start: &str, end: &str, window: WorkingWindow) -> LanePosition {
    let start = time_to_minutes(start);
    let end = time_to_minutes(end);
    let span = window.span();

    if span == 0 {
        return LanePosition {
            left_fraction: 0.0,
            width_fraction: 0.0,
        };
    }

    LanePosition {
        left_fraction: window.fraction_of(start),
        width_fraction: (f64::from(end) - f64::from(start)) / span as f64,
    }
}

/// Convert a pointer offset within a lane to a snapped start time in minutes.
///
/// The result is rounded to the nearest `snap_step` grid line (measured from
/// the window start) and clamped to `[window.start, window.end - snap_step]`.
pub fn snap_minutes(
    pixel_x: f64,
    lane_width_px: f64,
    window: WorkingWindow,
    snap_step: i32,
) -> i32 {
    let snap = snap_step.max(1);
    let fraction = if lane_width_px > 0.0 && pixel_x.is_finite() {
        pixel_x / lane_width_px
    } else {
        0.0
    };

    let steps = (fraction * window.span() as f64 / f64::from(snap)).round();
    let raw = f64::from(window.start) + steps * f64::from(snap);

    let lo = window.start;
    let hi = window.end.saturating_sub(snap).max(lo);
    raw.max(f64::from(lo)).min(f64::from(hi)) as i32
}

/// Same as [`snap_minutes`], formatted as `"HH:MM"`.
pub fn snap_position(
    pixel_x: f64,
    lane_width_px: f64,
    window: WorkingWindow,
    snap_step: i32,
) -> String {
    minutes_to_time(snap_minutes(pixel_x, lane_width_px, window, snap_step))
}
