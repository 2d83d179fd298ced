//! Orientation, segment intersection and point-in-polygon primitives.
//!
//! Every comparison here is exact: the collinearity test is `== 0.0` and the
//! on-segment test is an inclusive axis-aligned bounding box check. Both are
//! isolated in [`is_zero`] and [`within_bounding_box`] so a tolerant variant
//! only has to change those two predicates.

use geo::{Coord, Line, Rect};

use crate::domain::LngLat;

/// Longitude of the far end of the ray cast eastward by [`point_in_polygon`]
const RAY_END_LNG: f64 = 999.99;

pub type Segment = Line<f64>;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Orientation {
    Collinear,
    Clockwise,
    CounterClockwise,
}

pub fn segment(from: LngLat, to: LngLat) -> Segment {
    Line::new(Coord::from(from), Coord::from(to))
}

fn is_zero(value: f64) -> bool {
    value == 0.0
}

/// Orientation of the ordered triplet `(a, b, c)`
pub fn orientation(a: LngLat, b: LngLat, c: LngLat) -> Orientation {
    let val = (b.lat - a.lat) * (c.lng - b.lng) - (b.lng - a.lng) * (c.lat - b.lat);

    if is_zero(val) {
        Orientation::Collinear
    } else if val < 0.0 {
        Orientation::CounterClockwise
    } else {
        Orientation::Clockwise
    }
}

/// True if `point` lies inside or on the axis-aligned bounding box of `seg`.
///
/// This is not an on-segment test: callers only use it once the point is
/// already known to be collinear with the segment.
pub fn within_bounding_box(seg: &Segment, point: LngLat) -> bool {
    let bbox = Rect::new(seg.start, seg.end);
    let (min, max) = (bbox.min(), bbox.max());

    point.lng <= max.x && point.lng >= min.x && point.lat <= max.y && point.lat >= min.y
}

/// Test whether two closed segments share at least one point
pub fn segments_intersect(s1: &Segment, s2: &Segment) -> bool {
    let (p1, q1) = (LngLat::from(s1.start), LngLat::from(s1.end));
    let (p2, q2) = (LngLat::from(s2.start), LngLat::from(s2.end));

    let d1 = orientation(p1, q1, p2);
    let d2 = orientation(p1, q1, q2);
    let d3 = orientation(p2, q2, p1);
    let d4 = orientation(p2, q2, q1);

    if d1 != d2 && d3 != d4 {
        return true;
    }

    (d1 == Orientation::Collinear && within_bounding_box(s1, p2))
        || (d2 == Orientation::Collinear && within_bounding_box(s1, q2))
        || (d3 == Orientation::Collinear && within_bounding_box(s2, p1))
        || (d4 == Orientation::Collinear && within_bounding_box(s2, q1))
}

/// Ray-casting point-in-polygon test.
///
/// A point on an edge or vertex counts as inside. Polygons with fewer than
/// three vertices contain nothing.
pub fn point_in_polygon(polygon: &[LngLat], point: LngLat) -> bool {
    let n = polygon.len();
    if n < 3 {
        return false;
    }

    let ray = segment(point, LngLat::new(RAY_END_LNG, point.lat));
    let mut crossings = 0usize;

    for i in 0..n {
        let (a, b) = (polygon[i], polygon[(i + 1) % n]);
        let side = segment(a, b);

        if !segments_intersect(&side, &ray) {
            continue;
        }

        // The point sits on the line through this edge
        if orientation(a, point, b) == Orientation::Collinear {
            return within_bounding_box(&side, point);
        }

        crossings += 1;
    }

    crossings % 2 == 1
}
