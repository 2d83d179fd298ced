use super::LngLat;
use serde::{Deserialize, Serialize};

/// A named polygon: a no-fly zone or the central area.
///
/// Vertices are in order and the first vertex is not repeated at the end.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NamedRegion {
    pub name: String,
    pub vertices: Vec<LngLat>,
}

impl NamedRegion {
    pub fn new(name: impl Into<String>, vertices: Vec<LngLat>) -> Self {
        Self {
            name: name.into(),
            vertices,
        }
    }

    pub fn is_valid(&self) -> bool {
        self.vertices.len() >= 3
    }
}
