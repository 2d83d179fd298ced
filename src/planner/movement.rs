use crate::config::constants::HOVER_ANGLE;
use crate::domain::LngLat;
use crate::geometry::is_hover;

/// One atomic drone step, or a hover marker when `heading` is 999.
///
/// The geometry of a movement does not depend on which order it serves;
/// `order_no` is attached after planning.
#[derive(Debug, Clone, PartialEq)]
pub struct Movement {
    pub start: LngLat,
    pub heading: f64,
    pub end: LngLat,
    pub order_no: String,
}

impl Movement {
    pub fn new(start: LngLat, heading: f64, end: LngLat, order_no: impl Into<String>) -> Self {
        Self {
            start,
            heading,
            end,
            order_no: order_no.into(),
        }
    }

    /// Arrival marker: no displacement at `at`
    pub fn hover(at: LngLat, order_no: impl Into<String>) -> Self {
        Self::new(at, HOVER_ANGLE, at, order_no)
    }

    pub fn is_hover(&self) -> bool {
        is_hover(self.heading)
    }

    /// The same step flown backwards: endpoints swapped, heading turned 180
    pub fn reversed(&self) -> Self {
        Self {
            start: self.end,
            heading: (self.heading + 180.0) % 360.0,
            end: self.start,
            order_no: self.order_no.clone(),
        }
    }

    /// A copy of this movement attributed to `order_no`
    pub fn for_order(&self, order_no: &str) -> Self {
        Self {
            order_no: order_no.to_string(),
            ..self.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reversed() {
        let m = Movement::new(LngLat::new(0.0, 0.0), 202.5, LngLat::new(1.0, 1.0), "A");
        let r = m.reversed();
        assert_eq!(r.start, m.end);
        assert_eq!(r.end, m.start);
        assert_eq!(r.heading, 22.5);
        assert_eq!(Movement::new(m.start, 90.0, m.end, "A").reversed().heading, 270.0);
    }

    #[test]
    fn test_hover() {
        let at = LngLat::new(2.0, 3.0);
        let m = Movement::hover(at, "B");
        assert!(m.is_hover());
        assert_eq!(m.start, m.end);
    }

    #[test]
    fn test_for_order_leaves_original_untouched() {
        let m = Movement::new(LngLat::new(0.0, 0.0), 45.0, LngLat::new(1.0, 1.0), "A");
        let copy = m.for_order("B");
        assert_eq!(copy.order_no, "B");
        assert_eq!(m.order_no, "A");
        assert_eq!(copy.heading, m.heading);
    }
}
