use anyhow::Result;
use geo::{Coord, LineString};
use serde::Serialize;
use std::path::Path;

use crate::planner::Movement;

#[derive(Debug, Serialize)]
pub struct FeatureCollection {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub features: Vec<Feature>,
}

#[derive(Debug, Serialize)]
pub struct Feature {
    #[serde(rename = "type")]
    pub type_: &'static str,
    pub properties: Option<serde_json::Map<String, serde_json::Value>>,
    pub geometry: Geometry,
}

#[derive(Debug, Serialize)]
pub struct Geometry {
    #[serde(rename = "type")]
    pub type_: &'static str,
    /// `[lng, lat]` pairs
    pub coordinates: Vec<[f64; 2]>,
}

/// The drone's track as a line through every movement's start point
pub fn drone_track(movements: &[Movement]) -> LineString<f64> {
    movements.iter().map(|m| Coord::from(m.start)).collect()
}

/// Single-feature collection holding the whole flight as one LineString
pub fn feature_collection(movements: &[Movement]) -> FeatureCollection {
    let coordinates = drone_track(movements)
        .coords()
        .map(|c| [c.x, c.y])
        .collect();

    FeatureCollection {
        type_: "FeatureCollection",
        features: vec![Feature {
            type_: "Feature",
            properties: None,
            geometry: Geometry {
                type_: "LineString",
                coordinates,
            },
        }],
    }
}

pub fn write_drone_geojson(path: &Path, movements: &[Movement]) -> Result<()> {
    super::write_json(path, &feature_collection(movements))
}
