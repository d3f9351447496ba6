// Block module
// A single scheduled interval in a roster member's lane

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::utils::time::time_to_minutes;

/// Color used when neither the block nor the palette supplies one.
pub const FALLBACK_BLOCK_COLOR: &str = "#2563eb";

const BLOCK_ID_LEN: usize = 11;
const BASE36: &[u8] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// A time block assigned to one roster member within one shift.
///
/// `start` and `end` are `"HH:MM"` strings. `start < end` is expected but not
/// enforced; inverted or empty ranges are kept as entered.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Block {
    pub id: String,
    pub tech: String,
    pub start: String,
    pub end: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub title: Option<String>,
    pub shift: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub color: Option<String>,
}

impl Block {
    /// Build a block from a draft with the given identifier.
    pub fn from_draft(id: impl Into<String>, draft: BlockDraft) -> Self {
        Self {
            id: id.into(),
            tech: draft.tech,
            start: draft.start,
            end: draft.end,
            title: draft.title,
            shift: draft.shift,
            color: draft.color,
        }
    }

    pub fn start_minutes(&self) -> i32 {
        time_to_minutes(&self.start)
    }

    pub fn end_minutes(&self) -> i32 {
        time_to_minutes(&self.end)
    }

    /// Length in minutes. Zero or negative for malformed ranges.
    pub fn duration_minutes(&self) -> i64 {
        i64::from(self.end_minutes()) - i64::from(self.start_minutes())
    }

    /// Whether the block ends after it starts. Informational only.
    pub fn is_well_formed(&self) -> bool {
        self.duration_minutes() > 0
    }

    /// Color to draw the block with, falling back to the palette's first entry.
    pub fn display_color<'a>(&'a self, palette: &'a [String]) -> &'a str {
        self.color
            .as_deref()
            .filter(|c| !c.is_empty())
            .or_else(|| palette.first().map(String::as_str))
            .unwrap_or(FALLBACK_BLOCK_COLOR)
    }

    /// Lane label, e.g. `"08:00-09:00 • Inspection"`.
    pub fn label(&self) -> String {
        match self.title.as_deref().filter(|t| !t.trim().is_empty()) {
            Some(title) => format!("{}-{} • {}", self.start, self.end, title),
            None => format!("{}-{}", self.start, self.end),
        }
    }

    /// Merge the fields present in `patch` over this block.
    pub fn apply(&mut self, patch: BlockPatch) {
        if let Some(tech) = patch.tech {
            self.tech = tech;
        }
        if let Some(start) = patch.start {
            self.start = start;
        }
        if let Some(end) = patch.end {
            self.end = end;
        }
        if let Some(title) = patch.title {
            self.title = Some(title);
        }
        if let Some(shift) = patch.shift {
            self.shift = shift;
        }
        if let Some(color) = patch.color {
            self.color = Some(color);
        }
    }
}

/// Fields gathered by a create dialog, before an identifier is assigned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BlockDraft {
    pub tech: String,
    pub shift: String,
    pub start: String,
    pub end: String,
    pub title: Option<String>,
    pub color: Option<String>,
}

impl BlockDraft {
    /// Create a draft with the required fields
    ///
    /// # Examples
    /// ```
    /// use shift_planner::models::block::BlockDraft;
    ///
    /// let draft = BlockDraft::new("BRAD", "Shift 1", "08:00", "09:00")
    ///     .title("Inspection")
    ///     .color("#16a34a");
    /// assert_eq!(draft.title.as_deref(), Some("Inspection"));
    /// ```
    pub fn new(
        tech: impl Into<String>,
        shift: impl Into<String>,
        start: impl Into<String>,
        end: impl Into<String>,
    ) -> Self {
        Self {
            tech: tech.into(),
            shift: shift.into(),
            start: start.into(),
            end: end.into(),
            title: None,
            color: None,
        }
    }

    /// Set the optional title
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    /// Set the block color (hex format)
    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }
}

/// Partial field set for editing a block. `None` leaves a field untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BlockPatch {
    pub tech: Option<String>,
    pub shift: Option<String>,
    pub start: Option<String>,
    pub end: Option<String>,
    pub title: Option<String>,
    pub color: Option<String>,
}

impl BlockPatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tech(mut self, tech: impl Into<String>) -> Self {
        self.tech = Some(tech.into());
        self
    }

    pub fn shift(mut self, shift: impl Into<String>) -> Self {
        self.shift = Some(shift.into());
        self
    }

    pub fn start(mut self, start: impl Into<String>) -> Self {
        self.start = Some(start.into());
        self
    }

    pub fn end(mut self, end: impl Into<String>) -> Self {
        self.end = Some(end.into());
        self
    }

    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn color(mut self, color: impl Into<String>) -> Self {
        self.color = Some(color.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

/// Generate a random lowercase base-36 block identifier.
pub fn generate_block_id<R: Rng>(rng: &mut R) -> String {
    (0..BLOCK_ID_LEN)
        .map(|_| BASE36[rng.gen_range(0..BASE36.len())] as char)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample_block() -> Block {
        Block::from_draft(
            "abc123",
            BlockDraft::new("BRAD", "Shift 1", "08:00", "09:30").title("Inspection"),
        )
    }

    #[test]
    fn test_from_draft_copies_fields() {
        let block = Block::from_draft(
            "id1",
            BlockDraft::new("MEGAN", "Shift 2", "10:00", "11:00").color("#ef4444"),
        );

        assert_eq!(block.id, "id1");
        assert_eq!(block.tech, "MEGAN");
        assert_eq!(block.shift, "Shift 2");
        assert_eq!(block.start, "10:00");
        assert_eq!(block.end, "11:00");
        assert!(block.title.is_none());
        assert_eq!(block.color.as_deref(), Some("#ef4444"));
    }

    #[test]
    fn test_duration_and_well_formed() {
        let block = sample_block();
        assert_eq!(block.start_minutes(), 480);
        assert_eq!(block.end_minutes(), 570);
        assert_eq!(block.duration_minutes(), 90);
        assert!(block.is_well_formed());
    }

    #[test]
    fn test_inverted_range_is_kept() {
        let block = Block::from_draft("x", BlockDraft::new("TED", "Shift 4", "10:00", "09:00"));
        assert_eq!(block.duration_minutes(), -60);
        assert!(!block.is_well_formed());
    }

    #[test]
    fn test_duration_of_extreme_range() {
        let block = Block::from_draft(
            "x",
            BlockDraft::new("TED", "Shift 4", "-30000000:00", "30000000:00"),
        );
        assert_eq!(block.duration_minutes(), 3_600_000_000);
        assert!(block.is_well_formed());
    }

    #[test]
    fn test_display_color_fallbacks() {
        let palette = vec!["#16a34a".to_string(), "#f59e0b".to_string()];
        let mut block = sample_block();

        assert_eq!(block.display_color(&palette), "#16a34a");
        assert_eq!(block.display_color(&[]), FALLBACK_BLOCK_COLOR);

        block.color = Some("#7c3aed".to_string());
        assert_eq!(block.display_color(&palette), "#7c3aed");

        block.color = Some(String::new());
        assert_eq!(block.display_color(&palette), "#16a34a");
    }

    #[test]
    fn test_label() {
        let mut block = sample_block();
        assert_eq!(block.label(), "08:00-09:30 • Inspection");

        block.title = Some("  ".to_string());
        assert_eq!(block.label(), "08:00-09:30");

        block.title = None;
        assert_eq!(block.label(), "08:00-09:30");
    }

    #[test]
    fn test_apply_title_only() {
        let mut block = sample_block();
        let before = block.clone();

        block.apply(BlockPatch::new().title("X"));

        assert_eq!(block.title.as_deref(), Some("X"));
        assert_eq!(block.id, before.id);
        assert_eq!(block.tech, before.tech);
        assert_eq!(block.start, before.start);
        assert_eq!(block.end, before.end);
        assert_eq!(block.shift, before.shift);
        assert_eq!(block.color, before.color);
    }

    #[test]
    fn test_apply_empty_patch_is_identity() {
        let mut block = sample_block();
        let before = block.clone();
        let patch = BlockPatch::new();

        assert!(patch.is_empty());
        block.apply(patch);
        assert_eq!(block, before);
    }

    #[test]
    fn test_generate_block_id_shape() {
        let mut rng = StdRng::seed_from_u64(7);
        let id = generate_block_id(&mut rng);

        assert_eq!(id.len(), BLOCK_ID_LEN);
        assert!(id.chars().all(|c| c.is_ascii_digit() || c.is_ascii_lowercase()));
    }

    #[test]
    fn test_serde_omits_missing_optionals() {
        let block = Block::from_draft("id1", BlockDraft::new("ALEX", "Shift 2", "07:00", "08:00"));
        let json = serde_json::to_string(&block).unwrap();

        assert!(!json.contains("title"));
        assert!(!json.contains("color"));

        let parsed: Block = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, block);
    }

    #[test]
    fn test_deserialize_browser_record() {
        let json = r##"{"id":"k3j2h1","tech":"CODY","start":"13:00","end":"14:15","title":"Calls","shift":"Shift 2","color":"#0ea5e9"}"##;
        let block: Block = serde_json::from_str(json).unwrap();

        assert_eq!(block.tech, "CODY");
        assert_eq!(block.duration_minutes(), 75);
        assert_eq!(block.color.as_deref(), Some("#0ea5e9"));
    }
}
