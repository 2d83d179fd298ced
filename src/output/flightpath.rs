use anyhow::Result;
use serde::Serialize;
use std::path::Path;

use crate::planner::Movement;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FlightpathRecord<'a> {
    pub order_no: &'a str,
    pub from_longitude: f64,
    pub from_latitude: f64,
    pub angle: f64,
    pub to_longitude: f64,
    pub to_latitude: f64,
}

impl<'a> From<&'a Movement> for FlightpathRecord<'a> {
    fn from(m: &'a Movement) -> Self {
        Self {
            order_no: &m.order_no,
            from_longitude: m.start.lng,
            from_latitude: m.start.lat,
            angle: m.heading,
            to_longitude: m.end.lng,
            to_latitude: m.end.lat,
        }
    }
}

/// Write one record per movement, hover markers included
pub fn write_flightpath(path: &Path, movements: &[Movement]) -> Result<()> {
    let records: Vec<FlightpathRecord> = movements.iter().map(FlightpathRecord::from).collect();
    super::write_json(path, &records)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::LngLat;
    use tempfile::tempdir;

    #[test]
    fn test_write_flightpath() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("flightpath.json");

        let a = LngLat::new(-3.186874, 55.944494);
        let b = LngLat::new(-3.186724, 55.944494);
        let moves = vec![Movement::new(a, 0.0, b, "A1"), Movement::hover(b, "A1")];

        write_flightpath(&path, &moves).unwrap();

        let written: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&path).unwrap()).unwrap();
        let records = written.as_array().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0]["orderNo"], "A1");
        assert_eq!(records[0]["fromLongitude"], -3.186874);
        assert_eq!(records[0]["toLongitude"], -3.186724);
        assert_eq!(records[1]["angle"], 999.0);
        assert_eq!(records[1]["fromLatitude"], records[1]["toLatitude"]);
    }
}
