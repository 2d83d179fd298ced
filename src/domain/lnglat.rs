use serde::{Deserialize, Serialize};

/// A position on the planar longitude/latitude grid, in degrees.
///
/// Equality is exact floating-point equality. Two positions reached by
/// different sequences of moves will generally not compare equal even if
/// they are within rounding error of each other.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LngLat {
    pub lng: f64,
    pub lat: f64,
}

impl LngLat {
    pub const fn new(lng: f64, lat: f64) -> Self {
        Self { lng, lat }
    }

    /// Hashable identity of this position, bit-for-bit on both coordinates
    pub fn key(&self) -> PointKey {
        PointKey {
            lng_bits: self.lng.to_bits(),
            lat_bits: self.lat.to_bits(),
        }
    }
}

/// Bitwise identity of a [`LngLat`], usable as a hash set or map key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PointKey {
    lng_bits: u64,
    lat_bits: u64,
}

impl From<LngLat> for geo::Coord<f64> {
    fn from(p: LngLat) -> Self {
        geo::coord! { x: p.lng, y: p.lat }
    }
}

impl From<geo::Coord<f64>> for LngLat {
    fn from(c: geo::Coord<f64>) -> Self {
        Self::new(c.x, c.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_is_bitwise() {
        let a = LngLat::new(-3.186874, 55.944494);
        let b = LngLat::new(-3.186874, 55.944494);
        assert_eq!(a.key(), b.key());

        let nudged = LngLat::new(-3.186874 + f64::EPSILON, 55.944494);
        assert_ne!(a.key(), nudged.key());
    }

    #[test]
    fn test_parse_lnglat() {
        let p: LngLat = serde_json::from_str(r#"{"lng": -3.1912869215011597, "lat": 55.945535152517735}"#)
            .unwrap();
        assert_eq!(p.lng, -3.1912869215011597);
        assert_eq!(p.lat, 55.945535152517735);
    }

    #[test]
    fn test_coord_conversion() {
        let p = LngLat::new(1.5, -2.5);
        let c: geo::Coord<f64> = p.into();
        assert_eq!(c.x, 1.5);
        assert_eq!(c.y, -2.5);
        assert_eq!(LngLat::from(c), p);
    }
}
