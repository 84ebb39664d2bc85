use serde::{Deserialize, Serialize};
use std::fmt;

/// City identifier, unique within a registry
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CityId(String);

impl CityId {
    pub fn new(id: impl Into<String>) -> Self {
        CityId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for CityId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<String> for CityId {
    fn from(s: String) -> Self {
        CityId(s)
    }
}

impl From<&str> for CityId {
    fn from(s: &str) -> Self {
        CityId(s.to_string())
    }
}

/// Geographic position, used for map display only
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinate {
    pub fn new(latitude: f64, longitude: f64) -> Self {
        Coordinate { latitude, longitude }
    }
}

/// A market city in the registry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct City {
    pub id: CityId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub coordinate: Option<Coordinate>,
}

impl City {
    pub fn new(id: impl Into<CityId>) -> Self {
        City {
            id: id.into(),
            coordinate: None,
        }
    }

    pub fn with_coordinate(id: impl Into<CityId>, latitude: f64, longitude: f64) -> Self {
        City {
            id: id.into(),
            coordinate: Some(Coordinate::new(latitude, longitude)),
        }
    }
}
