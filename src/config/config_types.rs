// src/config/config_types.rs
//
// Config types for the app

use serde::Deserialize;

use crate::animation::{DriverConfig, EntranceConfig, Marker, SmoothingConfig};

#[derive(Debug, Deserialize)]
pub struct WindowConfig {
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Deserialize)]
pub struct PathConfig {
    pub project_file: String,
}

#[derive(Debug, Deserialize)]
pub struct StyleConfig {
    pub segment_thickness: f32,
    pub icon_size: f32,
}

/// The virtual page the demo scrolls through.
#[derive(Debug, Deserialize)]
pub struct PageConfig {
    pub document_height: f32,
    pub container_top: f32,
    pub container_height: f32,
    pub wheel_line_px: f32,
}

#[derive(Debug, Deserialize)]
pub struct DriverSettings {
    pub start: String,
    pub end: String,
    pub smoothing_enabled: bool,
    pub smoothing_duration_ms: f32,
    pub entrance_enabled: bool,
    pub entrance_duration: f32,
}

impl DriverSettings {
    /// Turns the config shorthand into the typed driver configuration.
    /// None if either marker string does not parse.
    pub fn to_driver_config(&self) -> Option<DriverConfig> {
        Some(DriverConfig {
            start: Marker::parse(&self.start)?,
            end: Marker::parse(&self.end)?,
            smoothing: SmoothingConfig {
                enabled: self.smoothing_enabled,
                duration_ms: self.smoothing_duration_ms,
            },
            entrance: EntranceConfig {
                enabled: self.entrance_enabled,
                duration_secs: self.entrance_duration,
            },
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::animation::ContainerEdge;

    fn settings(start: &str, end: &str) -> DriverSettings {
        DriverSettings {
            start: start.into(),
            end: end.into(),
            smoothing_enabled: true,
            smoothing_duration_ms: 1000.0,
            entrance_enabled: false,
            entrance_duration: 2.0,
        }
    }

    #[test]
    fn test_marker_strings_become_typed_markers() {
        let config = settings("top center", "bottom center")
            .to_driver_config()
            .unwrap();

        assert_eq!(config.start.edge, ContainerEdge::Top);
        assert_eq!(config.start.viewport_anchor, 0.5);
        assert_eq!(config.end.edge, ContainerEdge::Bottom);
        assert!(config.smoothing.enabled);
        assert!(!config.entrance.enabled);
    }

    #[test]
    fn test_bad_marker_string_is_rejected() {
        assert!(settings("sideways center", "bottom center")
            .to_driver_config()
            .is_none());
    }
}
