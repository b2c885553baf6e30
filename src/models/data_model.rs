// src/models/data_model.rs
// the JSON-based path declaration file

use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fs;
use std::path::Path;

use crate::models::{PathTable, Segment, SegmentKind};

#[derive(Debug, Serialize, Deserialize)]
pub struct PathProject {
    pub name: String,
    pub segments: Vec<SegmentSpec>,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct SegmentSpec {
    pub direction: String,
    pub length: f32,
    pub position: PositionSpec,
    #[serde(default)]
    pub angle: f32,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct PositionSpec {
    pub x: f32,
    pub y: f32,
}

impl PathProject {
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, Box<dyn Error>> {
        let content = fs::read_to_string(path)?;
        let project: PathProject = serde_json::from_str(&content)?;
        Ok(project)
    }

    /// Builds the cumulative path layout from the declared segment order.
    pub fn build_table(&self) -> Result<PathTable, Box<dyn Error>> {
        let mut segments = Vec::with_capacity(self.segments.len());
        for spec in &self.segments {
            let segment = spec
                .to_segment()
                .ok_or_else(|| format!("unknown segment direction: {}", spec.direction))?;
            segments.push(segment);
        }
        Ok(PathTable::new(segments)?)
    }
}

impl SegmentSpec {
    pub fn to_segment(&self) -> Option<Segment> {
        let kind = match self.direction.as_str() {
            "horizontal" => SegmentKind::Horizontal,
            "vertical" => SegmentKind::Vertical,
            "diagonal" => SegmentKind::Diagonal,
            _ => return None,
        };

        let angle_degrees = match kind {
            SegmentKind::Horizontal => 0.0,
            SegmentKind::Vertical => 90.0,
            SegmentKind::Diagonal => self.angle,
        };

        Some(Segment {
            kind,
            length: self.length,
            origin: (self.position.x, self.position.y),
            angle_degrees,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PROJECT_JSON: &str = r#"{
        "name": "shield-path",
        "segments": [
            { "direction": "horizontal", "length": 200.0, "position": { "x": 100.0, "y": 200.0 } },
            { "direction": "diagonal", "length": 141.0, "position": { "x": 300.0, "y": 200.0 }, "angle": 45.0 }
        ]
    }"#;

    #[test]
    fn test_parse_project() {
        let project: PathProject = serde_json::from_str(PROJECT_JSON).unwrap();

        assert_eq!(project.name, "shield-path");
        assert_eq!(project.segments.len(), 2);
        assert_eq!(project.segments[1].angle, 45.0);
    }

    #[test]
    fn test_build_table_from_project() {
        let project: PathProject = serde_json::from_str(PROJECT_JSON).unwrap();
        let table = project.build_table().unwrap();

        assert_eq!(table.total_length(), 341.0);
        assert_eq!(table.segments()[0].kind, SegmentKind::Horizontal);
        assert_eq!(table.segments()[1].angle_degrees, 45.0);
    }

    #[test]
    fn test_unknown_direction_is_an_error() {
        let spec = SegmentSpec {
            direction: "sideways".into(),
            length: 10.0,
            position: PositionSpec { x: 0.0, y: 0.0 },
            angle: 0.0,
        };
        assert!(spec.to_segment().is_none());

        let project = PathProject {
            name: "broken".into(),
            segments: vec![spec],
        };
        assert!(project.build_table().is_err());
    }

    #[test]
    fn test_vertical_rotation_comes_from_kind_not_angle_field() {
        let spec = SegmentSpec {
            direction: "vertical".into(),
            length: 10.0,
            position: PositionSpec { x: 0.0, y: 0.0 },
            angle: 17.0,
        };
        let segment = spec.to_segment().unwrap();

        assert_eq!(segment.angle_degrees, 90.0);
    }
}
