//! Viewer settings

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::SettingsError;
use crate::viewport::camera::FramingOptions;
use crate::viewport::layout::LayoutSettings;

const SETTINGS_FILE: &str = "settings.json";

/// Camera framing settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FramingSettings {
    /// Generic framing tuning (fill scale, target offsets)
    #[serde(flatten)]
    pub options: FramingOptions,
    /// Fill scale used when the head is selected (pulls back for context)
    pub head_fill_scale: f32,
    /// Fill scale used for every other pick
    pub generic_fill_scale: f32,
}

impl Default for FramingSettings {
    fn default() -> Self {
        Self {
            options: FramingOptions::default(),
            head_fill_scale: 0.5,
            generic_fill_scale: 1.0,
        }
    }
}

impl FramingSettings {
    pub fn head(&self) -> FramingOptions {
        self.options.with_fill_scale(self.head_fill_scale)
    }

    pub fn generic(&self) -> FramingOptions {
        self.options.with_fill_scale(self.generic_fill_scale)
    }
}

/// Head tilt controls
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HeadTiltSettings {
    /// Degrees per button press
    pub step_degrees: f32,
    /// Maximum tilt either way, per axis
    pub max_degrees: f32,
}

impl Default for HeadTiltSettings {
    fn default() -> Self {
        Self {
            step_degrees: 5.0,
            max_degrees: 45.0,
        }
    }
}

/// All viewer settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct ViewerSettings {
    #[serde(default)]
    pub framing: FramingSettings,
    #[serde(default)]
    pub layout: LayoutSettings,
    #[serde(default)]
    pub head_tilt: HeadTiltSettings,
}

impl ViewerSettings {
    /// Load settings from the user config dir, or return default if not found
    /// or invalid
    pub fn load() -> Self {
        match project_dirs() {
            Some(dirs) => Self::load_in(dirs.config_dir()),
            None => Self::default(),
        }
    }

    /// Load `settings.json` from `dir`, falling back to defaults
    pub fn load_in(dir: &Path) -> Self {
        let config_path = dir.join(SETTINGS_FILE);
        if config_path.exists() {
            match Self::load_from(&config_path) {
                Ok(settings) => return settings,
                Err(e) => {
                    tracing::warn!("Ignoring {}: {e}", config_path.display());
                }
            }
        }
        Self::default()
    }

    /// Save settings to the user config dir
    pub fn save(&self) {
        if let Some(dirs) = project_dirs() {
            if let Err(e) = self.save_in(dirs.config_dir()) {
                tracing::warn!("Failed to save settings: {e}");
            }
        }
    }

    /// Write `settings.json` into `dir`, creating it if needed
    pub fn save_in(&self, dir: &Path) -> Result<(), SettingsError> {
        std::fs::create_dir_all(dir)?;
        self.save_to(&dir.join(SETTINGS_FILE))
    }

    /// Load and validate settings from an explicit file
    pub fn load_from(path: &Path) -> Result<Self, SettingsError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }

    /// Write settings as pretty JSON to an explicit file
    pub fn save_to(&self, path: &Path) -> Result<(), SettingsError> {
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Parse and validate settings JSON
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        let settings: Self = serde_json::from_str(json)?;
        settings.validate()?;
        Ok(settings)
    }

    /// Reject values the framing and layout math cannot use
    pub fn validate(&self) -> Result<(), SettingsError> {
        positive("framing.fill_scale", self.framing.options.fill_scale)?;
        positive("framing.head_fill_scale", self.framing.head_fill_scale)?;
        positive("framing.generic_fill_scale", self.framing.generic_fill_scale)?;
        finite("framing.offset_up", self.framing.options.offset_up)?;
        finite("framing.offset_forward", self.framing.options.offset_forward)?;
        positive("layout.desktop.scale", self.layout.desktop.scale)?;
        positive("layout.mobile.scale", self.layout.mobile.scale)?;
        finite("layout.mobile_breakpoint", self.layout.mobile_breakpoint)?;
        positive("head_tilt.step_degrees", self.head_tilt.step_degrees)?;
        positive("head_tilt.max_degrees", self.head_tilt.max_degrees)?;
        Ok(())
    }
}

fn project_dirs() -> Option<directories::ProjectDirs> {
    directories::ProjectDirs::from("com", "anatomy", "anatomy-viewer")
}

fn positive(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() && value > 0.0 {
        Ok(())
    } else {
        Err(SettingsError::NotPositive { field, value })
    }
}

fn finite(field: &'static str, value: f32) -> Result<(), SettingsError> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(SettingsError::NotFinite { field, value })
    }
}
