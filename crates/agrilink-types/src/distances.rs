use crate::CityId;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Directed distances between cities (km)
///
/// Lookups are asymmetric: `get(a, b)` never falls back to `get(b, a)`.
/// A city's distance to itself is always zero, whatever the table holds.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DistanceTable {
    pub distances: BTreeMap<CityId, BTreeMap<CityId, f64>>,
}

impl DistanceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record the distance from `origin` to `destination`
    pub fn set(
        &mut self,
        origin: impl Into<CityId>,
        destination: impl Into<CityId>,
        distance: f64,
    ) {
        self.distances
            .entry(origin.into())
            .or_default()
            .insert(destination.into(), distance);
    }

    /// Record the same distance in both directions
    pub fn set_symmetric(&mut self, a: impl Into<CityId>, b: impl Into<CityId>, distance: f64) {
        let a = a.into();
        let b = b.into();
        self.set(a.clone(), b.clone(), distance);
        self.set(b, a, distance);
    }

    /// Builder-style variant of [`DistanceTable::set`]
    pub fn with_distance(
        mut self,
        origin: impl Into<CityId>,
        destination: impl Into<CityId>,
        distance: f64,
    ) -> Self {
        self.set(origin, destination, distance);
        self
    }

    /// Raw table entry, without the self-distance convention
    pub fn recorded(&self, origin: &CityId, destination: &CityId) -> Option<f64> {
        self.distances
            .get(origin)
            .and_then(|row| row.get(destination))
            .copied()
    }

    /// Distance from `origin` to `destination`; zero when they are the same city
    pub fn get(&self, origin: &CityId, destination: &CityId) -> Option<f64> {
        if origin == destination {
            return Some(0.0);
        }
        self.recorded(origin, destination)
    }

    /// Iterate every recorded (origin, destination, distance) entry
    pub fn entries(&self) -> impl Iterator<Item = (&CityId, &CityId, f64)> {
        self.distances.iter().flat_map(|(origin, row)| {
            row.iter()
                .map(move |(destination, distance)| (origin, destination, *distance))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_self_distance_is_zero() {
        let table = DistanceTable::new().with_distance("Pune", "Pune", 12.0);
        let pune = CityId::new("Pune");

        assert_eq!(table.get(&pune, &pune), Some(0.0));
        assert_eq!(table.recorded(&pune, &pune), Some(12.0));
    }

    #[test]
    fn test_lookup_is_directed() {
        let table = DistanceTable::new().with_distance("Pune", "Mumbai", 150.0);

        assert_eq!(table.get(&"Pune".into(), &"Mumbai".into()), Some(150.0));
        assert_eq!(table.get(&"Mumbai".into(), &"Pune".into()), None);
    }

    #[test]
    fn test_set_symmetric() {
        let mut table = DistanceTable::new();
        table.set_symmetric("Nashik", "Aurangabad", 180.0);

        assert_eq!(table.get(&"Nashik".into(), &"Aurangabad".into()), Some(180.0));
        assert_eq!(table.get(&"Aurangabad".into(), &"Nashik".into()), Some(180.0));
    }
}
