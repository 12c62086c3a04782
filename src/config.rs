// src/config.rs

use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::PathBuf;

// --- Enums ---

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
  Error,
  Warn,
  #[default]
  Info,
  Debug,
}

impl LogLevel {
  pub fn to_filter(self) -> log::LevelFilter {
    match self {
      LogLevel::Error => log::LevelFilter::Error,
      LogLevel::Warn => log::LevelFilter::Warn,
      LogLevel::Info => log::LevelFilter::Info,
      LogLevel::Debug => log::LevelFilter::Debug,
    }
  }
}

// --- Main Config Struct ---
// Window and presentation preferences only. Interaction state is never stored.

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Config {
  pub window_width: i32,
  pub window_height: i32,
  /// Pixels between grid cells.
  pub cell_gap: f64,
  /// Reveal the view-mode switcher on startup.
  pub show_tools: bool,
  /// Replaces the embedded element table when set.
  pub dataset_path: Option<PathBuf>,
  pub log_level: LogLevel,
}

impl Default for Config {
  fn default() -> Self {
    Self {
      window_width: 1400,
      window_height: 900,
      cell_gap: 4.0,
      show_tools: false,
      dataset_path: None,
      log_level: LogLevel::Info,
    }
  }
}

impl Config {
  /// Reads `settings.json` from the per-user config directory.
  pub fn load() -> (Self, String) {
    Self::load_from(Self::get_path())
  }

  pub fn load_from(path: PathBuf) -> (Self, String) {
    if path.exists() {
      match File::open(&path) {
        Ok(file) => {
          let reader = BufReader::new(file);
          match serde_json::from_reader(reader) {
            Ok(cfg) => (cfg, format!("Config loaded from {:?}", path)),
            Err(e) => (Self::default(), format!("Error parsing config: {}", e)),
          }
        }
        Err(e) => (Self::default(), format!("Error opening config: {}", e)),
      }
    } else {
      (
        Self::default(),
        "No config found. Using defaults.".to_string(),
      )
    }
  }

  /// Writes `settings.json` back to the per-user config directory.
  pub fn save(&self) -> String {
    self.save_to(Self::get_path())
  }

  pub fn save_to(&self, path: PathBuf) -> String {
    if let Some(parent) = path.parent() {
      let _ = fs::create_dir_all(parent);
    }

    match File::create(&path) {
      Ok(file) => {
        let writer = BufWriter::new(file);
        match serde_json::to_writer_pretty(writer, self) {
          Ok(_) => format!("Config saved to {:?}", path),
          Err(e) => format!("Failed to save config: {}", e),
        }
      }
      Err(e) => format!("Could not create config file: {}", e),
    }
  }

  fn get_path() -> PathBuf {
    match ProjectDirs::from("org", "elementx", "elementx") {
      Some(proj) => proj.config_dir().join("settings.json"),
      // No home directory: keep it next to the binary's working dir.
      None => PathBuf::from("settings.json"),
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  fn scratch_path(name: &str) -> PathBuf {
    std::env::temp_dir()
      .join(format!("elementx-test-{}-{}", std::process::id(), name))
      .join("settings.json")
  }

  #[test]
  fn test_missing_file_uses_defaults() {
    let (cfg, msg) = Config::load_from(scratch_path("missing"));
    assert_eq!(cfg, Config::default());
    assert!(msg.contains("defaults"));
  }

  #[test]
  fn test_save_then_load() {
    let path = scratch_path("roundtrip");
    let cfg = Config {
      cell_gap: 2.0,
      show_tools: true,
      log_level: LogLevel::Debug,
      ..Config::default()
    };
    let msg = cfg.save_to(path.clone());
    assert!(msg.starts_with("Config saved"), "{}", msg);

    let (loaded, _) = Config::load_from(path.clone());
    assert_eq!(loaded, cfg);
    let _ = fs::remove_dir_all(path.parent().unwrap());
  }

  #[test]
  fn test_partial_file_fills_defaults() {
    let cfg: Config = serde_json::from_str(r#"{"show_tools": true}"#).unwrap();
    assert!(cfg.show_tools);
    assert_eq!(cfg.window_width, 1400);
    assert_eq!(cfg.log_level, LogLevel::Info);
  }

  #[test]
  fn test_corrupt_file_falls_back() {
    let path = scratch_path("corrupt");
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(&path, "{ not json").unwrap();
    let (cfg, msg) = Config::load_from(path.clone());
    assert_eq!(cfg, Config::default());
    assert!(msg.starts_with("Error parsing config"));
    let _ = fs::remove_dir_all(path.parent().unwrap());
  }
}
