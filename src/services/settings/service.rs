use crate::models::settings::{
    default_palette, default_roster, default_shift_names, PlannerSettings, Roster,
};
use crate::services::storage::{keys, load_or_default, save_json, KeyValueStore, StorageError};

/// Reads and writes planner preferences, one storage key per value.
pub struct SettingsService<'a, S: KeyValueStore + ?Sized> {
    store: &'a mut S,
}

impl<'a, S: KeyValueStore + ?Sized> SettingsService<'a, S> {
    pub fn new(store: &'a mut S) -> Self {
        Self { store }
    }

    /// Get the current settings. Every value falls back to its default on its own.
    pub fn get(&self) -> PlannerSettings {
        PlannerSettings {
            dark_theme: load_or_default(&*self.store, keys::THEME, false),
            palette: load_or_default(&*self.store, keys::PALETTE, default_palette()),
            roster: load_or_default(&*self.store, keys::ROSTER, default_roster()),
            shift_names: load_or_default(&*self.store, keys::SHIFT_NAMES, default_shift_names()),
        }
    }

    /// Write every value.
    pub fn update(&mut self, settings: &PlannerSettings) -> Result<(), StorageError> {
        self.set_theme(settings.dark_theme)?;
        self.set_palette(&settings.palette)?;
        self.set_roster(&settings.roster)?;
        self.set_shift_names(&settings.shift_names)
    }

    pub fn set_theme(&mut self, dark: bool) -> Result<(), StorageError> {
        save_json(&mut *self.store, keys::THEME, &dark)
    }

    pub fn set_palette(&mut self, palette: &[String]) -> Result<(), StorageError> {
        save_json(&mut *self.store, keys::PALETTE, palette)
    }

    pub fn set_roster(&mut self, roster: &Roster) -> Result<(), StorageError> {
        save_json(&mut *self.store, keys::ROSTER, roster)
    }

    pub fn set_shift_names(&mut self, names: &[String]) -> Result<(), StorageError> {
        save_json(&mut *self.store, keys::SHIFT_NAMES, names)
    }

    /// Flip between light and dark and persist. Returns the new dark flag.
    pub fn toggle_theme(&mut self) -> Result<bool, StorageError> {
        let dark = !load_or_default(&*self.store, keys::THEME, false);
        self.set_theme(dark)?;
        Ok(dark)
    }

    /// Bring palette entry `index` to the front and persist.
    /// Out-of-range indices leave the stored palette untouched.
    pub fn rotate_palette(&mut self, index: usize) -> Result<Vec<String>, StorageError> {
        let mut settings = self.get();
        if settings.rotate_palette(index) {
            self.set_palette(&settings.palette)?;
        } else {
            log::debug!("Palette index {} out of range, not rotating", index);
        }
        Ok(settings.palette)
    }

    /// Reset settings to defaults
    pub fn reset(&mut self) -> Result<(), StorageError> {
        self.update(&PlannerSettings::default())
    }
}
