// settings.rs - User preferences persisted between runs
//
// Only preferences live here. Grid contents are never saved.

use std::fs;
use std::path::{Path, PathBuf};

use log::{info, warn};
use serde::{Deserialize, Serialize};

pub const SETTINGS_FILE_NAME: &str = "conway_settings.json";

pub const MIN_SPEED: u32 = 1;
pub const MAX_SPEED: u32 = 100;
pub const MIN_ZOOM: f32 = 2.0;
/// Largest grid side accepted from the settings file or the resize dialog.
pub const MAX_SIDE: i32 = 4096;
pub const MAX_ZOOM: f32 = 100.0;

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(default)]
pub struct Settings {
    pub grid_width: i32,
    pub grid_height: i32,
    pub wrap: bool,
    /// Generations per second while running.
    pub speed: u32,
    /// Cell size in points.
    pub zoom: f32,
    pub live_color: [u8; 3],
    pub dead_color: [u8; 3],
    pub seed_glider: bool,
    pub stop_on_cycle: bool,
    pub painting_enabled: bool,
    pub random_density: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            grid_width: 14,
            grid_height: 14,
            wrap: false,
            speed: 1,
            zoom: 20.0,
            live_color: [0, 200, 0],
            dead_color: [40, 40, 40],
            seed_glider: true,
            stop_on_cycle: false,
            painting_enabled: true,
            random_density: 0.33,
        }
    }
}

impl Settings {
    pub fn default_path() -> PathBuf {
        std::env::current_dir()
            .unwrap_or_else(|_| PathBuf::from("."))
            .join(SETTINGS_FILE_NAME)
    }

    pub fn load_from_disk(path: &Path) -> anyhow::Result<Self> {
        let data = fs::read_to_string(path)?;
        let mut settings: Settings = serde_json::from_str(&data)?;
        settings.sanitize();
        Ok(settings)
    }

    /// Loads `path`, falling back to defaults if it is missing or unreadable.
    pub fn load_or_default(path: &Path) -> Self {
        if !path.exists() {
            info!("no settings at {}, using defaults", path.display());
            return Self::default();
        }
        match Self::load_from_disk(path) {
            Ok(settings) => {
                info!("loaded settings from {}", path.display());
                settings
            }
            Err(err) => {
                warn!("failed to load settings from {}: {err:#}", path.display());
                Self::default()
            }
        }
    }

    pub fn save_to_disk(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let json = serde_json::to_string_pretty(self)?;
        fs::write(path, json)?;
        Ok(())
    }

    pub fn sanitize(&mut self) {
        self.grid_width = self.grid_width.clamp(1, MAX_SIDE);
        self.grid_height = self.grid_height.clamp(1, MAX_SIDE);
        self.speed = self.speed.clamp(MIN_SPEED, MAX_SPEED);
        self.zoom = if self.zoom.is_finite() {
            self.zoom.clamp(MIN_ZOOM, MAX_ZOOM)
        } else {
            Settings::default().zoom
        };
        self.random_density = if self.random_density.is_nan() {
            Settings::default().random_density
        } else {
            self.random_density.clamp(0.0, 1.0)
        };
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("conway_app_{}_{name}", std::process::id()))
            .join(SETTINGS_FILE_NAME)
    }

    #[test]
    fn save_then_load() {
        let path = temp_path("roundtrip");
        let settings = Settings {
            grid_width: 40,
            grid_height: 25,
            wrap: true,
            speed: 30,
            ..Settings::default()
        };
        settings.save_to_disk(&path).unwrap();
        let loaded = Settings::load_from_disk(&path).unwrap();
        assert_eq!(loaded, settings);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_fields_take_defaults() {
        let settings: Settings = serde_json::from_str(r#"{ "wrap": true }"#).unwrap();
        assert!(settings.wrap);
        assert_eq!(settings.grid_width, 14);
        assert_eq!(settings.speed, 1);
    }

    #[test]
    fn sanitize_clamps_out_of_range_values() {
        let mut settings = Settings {
            grid_width: 0,
            grid_height: -5,
            speed: 500,
            zoom: f32::NAN,
            random_density: 3.0,
            ..Settings::default()
        };
        settings.sanitize();
        assert_eq!((settings.grid_width, settings.grid_height), (1, 1));
        assert_eq!(settings.speed, MAX_SPEED);
        assert_eq!(settings.zoom, 20.0);
        assert_eq!(settings.random_density, 1.0);

        settings.speed = 0;
        settings.zoom = 0.5;
        settings.sanitize();
        assert_eq!(settings.speed, MIN_SPEED);
        assert_eq!(settings.zoom, MIN_ZOOM);
    }

    #[test]
    fn oversized_grid_is_capped() {
        let json = r#"{ "grid_width": 2147483647, "grid_height": 5000 }"#;
        let mut settings: Settings = serde_json::from_str(json).unwrap();
        settings.sanitize();
        assert_eq!((settings.grid_width, settings.grid_height), (MAX_SIDE, MAX_SIDE));

        let path = temp_path("oversized");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, json).unwrap();
        let loaded = Settings::load_or_default(&path);
        assert_eq!(loaded.grid_width, MAX_SIDE);
        assert_eq!(loaded.grid_height, MAX_SIDE);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn missing_or_broken_file_falls_back() {
        let path = temp_path("missing");
        assert_eq!(Settings::load_or_default(&path), Settings::default());

        let path = temp_path("broken");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "{ not json").unwrap();
        assert!(Settings::load_from_disk(&path).is_err());
        assert_eq!(Settings::load_or_default(&path), Settings::default());
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
