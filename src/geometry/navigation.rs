use crate::config::constants::{
    ANGLE_STEP, DRONE_IS_CLOSE_DISTANCE, DRONE_MOVE_DISTANCE, HOVER_ANGLE,
};
use crate::domain::{LngLat, NamedRegion};
use crate::error::{PlanError, Result};

use super::kernel::point_in_polygon;

/// The 16 legal non-hover headings in degrees, ascending.
///
/// 0 is east, 90 is north.
pub const COMPASS_HEADINGS: [f64; 16] = [
    0.0, 22.5, 45.0, 67.5, 90.0, 112.5, 135.0, 157.5, 180.0, 202.5, 225.0, 247.5, 270.0, 292.5,
    315.0, 337.5,
];

/// Euclidean distance on the lng/lat plane, no projection correction
pub fn distance(from: LngLat, to: LngLat) -> f64 {
    ((to.lng - from.lng).powi(2) + (from.lat - to.lat).powi(2)).sqrt()
}

pub fn is_close(a: LngLat, b: LngLat) -> bool {
    distance(a, b) < DRONE_IS_CLOSE_DISTANCE
}

pub fn in_region(position: LngLat, region: &NamedRegion) -> bool {
    point_in_polygon(&region.vertices, position)
}

pub fn is_hover(heading: f64) -> bool {
    heading == HOVER_ANGLE
}

/// Advance `start` by one move along `heading`.
///
/// The hover heading returns `start` unchanged. Any other heading must be a
/// multiple of 22.5 within `[0, 360]`.
pub fn next_position(start: LngLat, heading: f64) -> Result<LngLat> {
    if is_hover(heading) {
        return Ok(start);
    }
    if !(0.0..=360.0).contains(&heading) || heading % ANGLE_STEP != 0.0 {
        return Err(PlanError::InvalidHeading(heading));
    }

    let theta = heading.to_radians();
    Ok(LngLat::new(
        start.lng + DRONE_MOVE_DISTANCE * theta.cos(),
        start.lat + DRONE_MOVE_DISTANCE * theta.sin(),
    ))
}
