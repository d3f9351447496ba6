// Settings module
// Display configuration consumed by the day editor: theme, palette, roster, shift names

use std::collections::BTreeMap;

/// Shift name → ordered roster member names.
pub type Roster = BTreeMap<String, Vec<String>>;

/// Persisted planner preferences. Each field is stored under its own key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlannerSettings {
    pub dark_theme: bool,
    pub palette: Vec<String>,
    pub roster: Roster,
    pub shift_names: Vec<String>,
}

impl Default for PlannerSettings {
    fn default() -> Self {
        Self {
            dark_theme: false,
            palette: default_palette(),
            roster: default_roster(),
            shift_names: default_shift_names(),
        }
    }
}

impl PlannerSettings {
    /// Members rostered on `shift`, empty when the shift is unknown.
    pub fn roster_for(&self, shift: &str) -> &[String] {
        self.roster.get(shift).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn roster_count(&self, shift: &str) -> usize {
        self.roster_for(shift).len()
    }

    /// Shift preselected when the planner opens.
    pub fn default_shift(&self) -> Option<&str> {
        self.shift_names.first().map(String::as_str)
    }

    /// Color given to new blocks.
    pub fn primary_color(&self) -> Option<&str> {
        self.palette.first().map(String::as_str)
    }

    /// Rotate the palette so the entry at `index` comes first.
    /// Returns false (and leaves the palette alone) when out of range.
    pub fn rotate_palette(&mut self, index: usize) -> bool {
        if index >= self.palette.len() {
            return false;
        }
        self.palette.rotate_left(index);
        true
    }

    pub fn toggle_theme(&mut self) -> bool {
        self.dark_theme = !self.dark_theme;
        self.dark_theme
    }
}

/// Shift names that ship with the application.
pub fn default_shift_names() -> Vec<String> {
    ["Shift 1", "Shift 2", "Shift 3", "Shift 4"]
        .iter()
        .map(|s| s.to_string())
        .collect()
}

/// Roster that ships with the application.
pub fn default_roster() -> Roster {
    let entries: [(&str, &[&str]); 4] = [
        ("Shift 1", &["BRAD", "VERNE", "DREW", "MEGAN"]),
        ("Shift 2", &["MIKE", "CODY", "ALEX"]),
        ("Shift 3", &["CURTIS", "TRAVIS", "NOLAN", "JEREMY"]),
        ("Shift 4", &["TED", "GURWINDER"]),
    ];

    entries
        .iter()
        .map(|(shift, members)| {
            (
                shift.to_string(),
                members.iter().map(|m| m.to_string()).collect(),
            )
        })
        .collect()
}

/// Block colors that ship with the application.
pub fn default_palette() -> Vec<String> {
    ["#2563eb", "#16a34a", "#f59e0b", "#ef4444", "#7c3aed", "#0ea5e9"]
        .iter()
        .map(|c| c.to_string())
        .collect()
}
