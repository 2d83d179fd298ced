use std::collections::HashMap;

use crate::domain::{LngLat, PointKey};

use super::Movement;

/// Directional endpoint pair identifying a cached round trip.
///
/// Coordinates are compared bit-for-bit, so `(a, b)` and `(b, a)` are
/// distinct keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RouteKey {
    source: PointKey,
    target: PointKey,
}

impl RouteKey {
    pub fn new(source: LngLat, target: LngLat) -> Self {
        Self {
            source: source.key(),
            target: target.key(),
        }
    }
}

/// Round-trip paths already computed during this run
#[derive(Debug, Default)]
pub struct PathCache {
    paths: HashMap<RouteKey, Vec<Movement>>,
}

impl PathCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Fresh copies of the cached path attributed to `order_no`
    pub fn get(&self, key: &RouteKey, order_no: &str) -> Option<Vec<Movement>> {
        self.paths
            .get(key)
            .map(|path| path.iter().map(|m| m.for_order(order_no)).collect())
    }

    pub fn insert(&mut self, key: RouteKey, path: Vec<Movement>) {
        self.paths.insert(key, path);
    }

    pub fn contains(&self, key: &RouteKey) -> bool {
        self.paths.contains_key(key)
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_path() -> Vec<Movement> {
        let a = LngLat::new(0.0, 0.0);
        let b = LngLat::new(0.00015, 0.0);
        vec![Movement::new(a, 0.0, b, "FIRST"), Movement::hover(b, "FIRST")]
    }

    #[test]
    fn test_get_rewrites_order_number() {
        let key = RouteKey::new(LngLat::new(1.0, 2.0), LngLat::new(3.0, 4.0));
        let mut cache = PathCache::new();
        cache.insert(key, sample_path());

        let copy = cache.get(&key, "SECOND").unwrap();
        assert!(copy.iter().all(|m| m.order_no == "SECOND"));

        let again = cache.get(&key, "THIRD").unwrap();
        assert!(again.iter().all(|m| m.order_no == "THIRD"));
        assert!(copy.iter().all(|m| m.order_no == "SECOND"));
    }

    #[test]
    fn test_key_is_directional() {
        let a = LngLat::new(1.0, 2.0);
        let b = LngLat::new(3.0, 4.0);
        let mut cache = PathCache::new();
        cache.insert(RouteKey::new(a, b), sample_path());

        assert!(cache.contains(&RouteKey::new(a, b)));
        assert!(!cache.contains(&RouteKey::new(b, a)));
    }

    #[test]
    fn test_key_does_not_alias_on_digits() {
        // Both sources print as "1.011.0" when their coordinates are concatenated
        let target = LngLat::new(2.0, 2.0);
        let k1 = RouteKey::new(LngLat::new(1.01, 1.0), target);
        let k2 = RouteKey::new(LngLat::new(1.0, 11.0), target);
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_empty() {
        let cache = PathCache::new();
        assert!(cache.is_empty());
        assert_eq!(cache.len(), 0);
        assert!(cache.get(&RouteKey::new(LngLat::new(0.0, 0.0), LngLat::new(0.0, 0.0)), "A").is_none());
    }
}
