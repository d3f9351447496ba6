//! Planner configuration loaded from a TOML file.
//!
//! ```toml
//! work_start = "07:00"
//! work_end = "19:00"
//! snap_minutes = 15
//! database_path = "/home/me/.local/share/shift-planner/planner.db"
//! ```
//!
//! Every field is optional; a missing file means all defaults.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::services::storage::SqliteStore;
use crate::utils::lane::{WorkingWindow, DEFAULT_SNAP_MINUTES};
use crate::utils::time::{is_valid_time, minutes_to_time};

const CONFIG_FILE: &str = "config.toml";
const DATABASE_FILE: &str = "planner.db";

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlannerConfig {
    pub work_start: String,
    pub work_end: String,
    pub snap_minutes: i32,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub database_path: Option<PathBuf>,
}

impl Default for PlannerConfig {
    fn default() -> Self {
        let window = WorkingWindow::default();
        Self {
            work_start: minutes_to_time(window.start),
            work_end: minutes_to_time(window.end),
            snap_minutes: DEFAULT_SNAP_MINUTES,
            database_path: None,
        }
    }
}

impl PlannerConfig {
    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::info!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let data = fs::read_to_string(path)
            .with_context(|| format!("failed to read config from {}", path.display()))?;
        let config: Self = toml::from_str(&data)
            .with_context(|| format!("failed to parse config from {}", path.display()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }

        let data = toml::to_string_pretty(self)?;
        fs::write(path, data)
            .with_context(|| format!("failed to write config to {}", path.display()))?;
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        if !is_valid_time(&self.work_start) {
            anyhow::bail!("work_start must be HH:MM, got '{}'", self.work_start);
        }
        if !is_valid_time(&self.work_end) {
            anyhow::bail!("work_end must be HH:MM, got '{}'", self.work_end);
        }
        if self.snap_minutes <= 0 {
            anyhow::bail!("snap_minutes must be positive, got {}", self.snap_minutes);
        }
        Ok(())
    }

    pub fn working_window(&self) -> WorkingWindow {
        WorkingWindow::from_times(&self.work_start, &self.work_end)
    }

    /// Configured database path, or the default data-directory location.
    pub fn resolve_database_path(&self) -> PathBuf {
        self.database_path
            .clone()
            .unwrap_or_else(default_database_path)
    }

    /// Open the durable store this configuration points at.
    pub fn open_store(&self) -> Result<SqliteStore> {
        let path = self.resolve_database_path();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            fs::create_dir_all(parent)
                .with_context(|| format!("failed to create dir {}", parent.display()))?;
        }
        SqliteStore::new(&path.to_string_lossy())
    }
}

fn project_dirs() -> Option<ProjectDirs> {
    ProjectDirs::from("com", "ShiftPlanner", "ShiftPlanner")
}

/// Default config file location, falling back to the current directory.
pub fn default_config_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.config_dir().join(CONFIG_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for config");
        PathBuf::from(CONFIG_FILE)
    }
}

/// Default database location, falling back to the current directory.
pub fn default_database_path() -> PathBuf {
    if let Some(dirs) = project_dirs() {
        dirs.data_dir().join(DATABASE_FILE)
    } else {
        log::warn!("Unable to resolve project directory; using current dir for planner data");
        PathBuf::from(DATABASE_FILE)
    }
}
