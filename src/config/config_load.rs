// src/config/config_load.rs
//
// loading config.toml

use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

use crate::config::config_types::{
    DriverSettings, PageConfig, PathConfig, StyleConfig, WindowConfig,
};

#[derive(Debug, Deserialize)]
pub struct Config {
    pub window: WindowConfig,
    pub paths: PathConfig,
    pub style: StyleConfig,
    pub page: PageConfig,
    pub driver: DriverSettings,
}

impl Config {
    pub fn load() -> Result<Self, Box<dyn std::error::Error>> {
        // First try to load from the executable's directory
        if let Some(exe_config) = Self::load_from_exe_dir() {
            return Ok(exe_config);
        }

        // Fallback to loading from the current working directory
        Self::load_from_working_dir()
    }

    fn load_from_exe_dir() -> Option<Self> {
        let exe_path = std::env::current_exe().ok()?;
        let exe_dir = exe_path.parent()?;
        let config_path = exe_dir.join("config.toml");

        if config_path.exists() {
            let content = fs::read_to_string(&config_path).ok()?;
            toml::from_str(&content).ok()
        } else {
            None
        }
    }

    fn load_from_working_dir() -> Result<Self, Box<dyn std::error::Error>> {
        let content = fs::read_to_string("config.toml")?;
        Ok(toml::from_str(&content)?)
    }

    pub fn resolve_project_path(&self) -> PathBuf {
        if Path::new(&self.paths.project_file).is_absolute() {
            PathBuf::from(&self.paths.project_file)
        } else {
            // If path is relative, resolve it relative to the executable or working directory
            if let Some(exe_dir) = std::env::current_exe()
                .ok()
                .and_then(|p| p.parent().map(|p| p.to_path_buf()))
            {
                let candidate = exe_dir.join(&self.paths.project_file);
                if candidate.exists() {
                    return candidate;
                }
            }
            PathBuf::from(&self.paths.project_file)
        }
    }
}
