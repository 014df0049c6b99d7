//! Game configuration.
//!
//! Manages game settings loaded from an INI configuration file. Provides
//! defaults for safe startup and methods to load/save configuration.
//!
//! # Configuration File Format
//!
//! ```ini
//! [render]
//! width = 640
//! height = 480
//!
//! [window]
//! target_fps = 60
//!
//! [game]
//! asteroid_count = 25
//! ship_velocity = 8
//! asteroid_velocity = 1
//! ```

use configparser::ini::Ini;
use log::info;
use std::path::PathBuf;

/// Default safe values for startup
const DEFAULT_RENDER_WIDTH: u32 = 640;
const DEFAULT_RENDER_HEIGHT: u32 = 480;
const DEFAULT_TARGET_FPS: u32 = 60;
const DEFAULT_ASTEROID_COUNT: u32 = 25;
const DEFAULT_SHIP_VELOCITY: f32 = 8.0;
const DEFAULT_ASTEROID_VELOCITY: f32 = 1.0;
const DEFAULT_CONFIG_PATH: &str = "./config.ini";

/// Game configuration.
///
/// Stores the canvas size, frame pacing and gameplay tuning. Missing keys in
/// the file keep their defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct GameConfig {
    /// Canvas width in pixels.
    pub render_width: u32,
    /// Canvas height in pixels.
    pub render_height: u32,
    /// Target frames per second. Zero means "as fast as the host allows".
    pub target_fps: u32,
    /// Asteroids kept alive in the field.
    pub asteroid_count: u32,
    /// Ship movement per frame, in pixels.
    pub ship_velocity: f32,
    /// Asteroid drift per frame, in pixels.
    pub asteroid_velocity: f32,
    /// Path to the configuration file.
    pub config_path: PathBuf,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new()
    }
}

impl GameConfig {
    /// Create a new configuration with safe default values.
    pub fn new() -> Self {
        Self {
            render_width: DEFAULT_RENDER_WIDTH,
            render_height: DEFAULT_RENDER_HEIGHT,
            target_fps: DEFAULT_TARGET_FPS,
            asteroid_count: DEFAULT_ASTEROID_COUNT,
            ship_velocity: DEFAULT_SHIP_VELOCITY,
            asteroid_velocity: DEFAULT_ASTEROID_VELOCITY,
            config_path: PathBuf::from(DEFAULT_CONFIG_PATH),
        }
    }

    /// Create a new configuration with a custom config file path.
    pub fn with_path(path: impl Into<PathBuf>) -> Self {
        Self {
            config_path: path.into(),
            ..Self::new()
        }
    }

    /// Load configuration from the INI file.
    ///
    /// Missing values retain their current (default) values.
    /// Returns an error if the file cannot be read or parsed.
    pub fn load_from_file(&mut self) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .load(&self.config_path)
            .map_err(|e| format!("Failed to load config file: {}", e))?;
        self.apply(&config);

        info!(
            "Loaded config: {}x{} canvas, fps={}, asteroids={}, ship_velocity={}, asteroid_velocity={}",
            self.render_width,
            self.render_height,
            self.target_fps,
            self.asteroid_count,
            self.ship_velocity,
            self.asteroid_velocity
        );

        Ok(())
    }

    /// Load configuration from INI text instead of a file.
    pub fn load_from_str(&mut self, contents: &str) -> Result<(), String> {
        let mut config = Ini::new();
        config
            .read(contents.to_string())
            .map_err(|e| format!("Failed to parse config: {}", e))?;
        self.apply(&config);
        Ok(())
    }

    fn apply(&mut self, config: &Ini) {
        // [render] section
        if let Some(width) = config.getuint("render", "width").ok().flatten() {
            self.render_width = width as u32;
        }
        if let Some(height) = config.getuint("render", "height").ok().flatten() {
            self.render_height = height as u32;
        }

        // [window] section
        if let Some(fps) = config.getuint("window", "target_fps").ok().flatten() {
            self.target_fps = fps as u32;
        }

        // [game] section
        if let Some(count) = config.getuint("game", "asteroid_count").ok().flatten() {
            self.asteroid_count = count as u32;
        }
        if let Some(v) = config.getfloat("game", "ship_velocity").ok().flatten() {
            self.ship_velocity = v as f32;
        }
        if let Some(v) = config.getfloat("game", "asteroid_velocity").ok().flatten() {
            self.asteroid_velocity = v as f32;
        }
    }

    /// Save configuration to the INI file.
    ///
    /// Creates the file if it doesn't exist.
    pub fn save_to_file(&self) -> Result<(), String> {
        let mut config = Ini::new();

        // [render] section
        config.set("render", "width", Some(self.render_width.to_string()));
        config.set("render", "height", Some(self.render_height.to_string()));

        // [window] section
        config.set("window", "target_fps", Some(self.target_fps.to_string()));

        // [game] section
        config.set("game", "asteroid_count", Some(self.asteroid_count.to_string()));
        config.set("game", "ship_velocity", Some(self.ship_velocity.to_string()));
        config.set(
            "game",
            "asteroid_velocity",
            Some(self.asteroid_velocity.to_string()),
        );

        config
            .write(&self.config_path)
            .map_err(|e| format!("Failed to save config file: {}", e))?;

        info!("Saved config to {:?}", self.config_path);

        Ok(())
    }

    /// Get the canvas size.
    pub fn render_size(&self) -> (u32, u32) {
        (self.render_width, self.render_height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let c = GameConfig::new();
        assert_eq!(c.render_size(), (640, 480));
        assert_eq!(c.target_fps, 60);
        assert_eq!(c.asteroid_count, 25);
        assert_eq!(c.ship_velocity, 8.0);
        assert_eq!(c.asteroid_velocity, 1.0);
    }

    #[test]
    fn test_load_from_str_overrides_present_keys_only() {
        let mut c = GameConfig::new();
        c.load_from_str("[render]\nwidth = 800\n\n[game]\nasteroid_count = 10\nship_velocity = 4.5\n")
            .unwrap();
        assert_eq!(c.render_width, 800);
        assert_eq!(c.render_height, 480);
        assert_eq!(c.asteroid_count, 10);
        assert_eq!(c.ship_velocity, 4.5);
        assert_eq!(c.asteroid_velocity, 1.0);
    }

    #[test]
    fn test_load_missing_file_is_error_and_keeps_defaults() {
        let mut c = GameConfig::with_path("/nonexistent/dir/config.ini");
        assert!(c.load_from_file().is_err());
        assert_eq!(c.render_size(), (640, 480));
    }

    #[test]
    fn test_save_then_load_file() {
        let path = std::env::temp_dir().join(format!("asteroid-dodge-{}.ini", std::process::id()));
        let mut saved = GameConfig::with_path(&path);
        saved.render_width = 1024;
        saved.asteroid_count = 3;
        saved.save_to_file().unwrap();

        let mut loaded = GameConfig::with_path(&path);
        loaded.load_from_file().unwrap();
        let _ = std::fs::remove_file(&path);
        assert_eq!(loaded, saved);
    }
}
