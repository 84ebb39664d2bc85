use agrilink_types::{AgriLinkError, City, CityId, Commodity, DistanceTable, PriceTable, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::time::{SystemTime, UNIX_EPOCH};

/// Transport cost in currency per kg per km
pub const DEFAULT_TRANSPORT_RATE: f64 = 0.02;

fn default_transport_rate() -> f64 {
    DEFAULT_TRANSPORT_RATE
}

/// Immutable view of the market reference data
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MarketSnapshot {
    /// City registry; order is the evaluation and tie-break order
    pub cities: Vec<City>,
    pub prices: PriceTable,
    pub distances: DistanceTable,
    /// Currency per distance unit per quantity unit
    #[serde(default = "default_transport_rate")]
    pub transport_rate: f64,
    /// Timestamp in milliseconds
    #[serde(default)]
    pub timestamp_ms: u64,
    /// Data providers
    #[serde(default)]
    pub providers: Vec<String>,
}

impl MarketSnapshot {
    /// Create a snapshot stamped with the current time
    pub fn new(
        cities: Vec<City>,
        prices: PriceTable,
        distances: DistanceTable,
        transport_rate: f64,
        providers: Vec<String>,
    ) -> Self {
        MarketSnapshot {
            cities,
            prices,
            distances,
            transport_rate,
            timestamp_ms: current_timestamp_ms(),
            providers,
        }
    }

    /// Check the registry and tables for values the optimizer cannot use
    pub fn validate(&self) -> Result<()> {
        if self.cities.is_empty() {
            return Err(AgriLinkError::InvalidReferenceData(
                "city registry is empty".to_string(),
            ));
        }

        let mut seen = BTreeSet::new();
        for city in &self.cities {
            if !seen.insert(&city.id) {
                return Err(AgriLinkError::InvalidReferenceData(format!(
                    "duplicate city in registry: {}",
                    city.id
                )));
            }
        }

        check_transport_rate(self.transport_rate)?;

        for (commodity, city, price) in self.prices.entries() {
            check_price(commodity, city, price)?;
        }

        for (origin, destination, distance) in self.distances.entries() {
            check_distance(origin, destination, distance)?;
        }

        Ok(())
    }

    pub fn city_ids(&self) -> impl Iterator<Item = &CityId> {
        self.cities.iter().map(|c| &c.id)
    }

    pub fn city(&self, id: &CityId) -> Option<&City> {
        self.cities.iter().find(|c| &c.id == id)
    }

    pub fn contains_city(&self, id: &CityId) -> bool {
        self.city(id).is_some()
    }

    pub fn commodities(&self) -> impl Iterator<Item = &Commodity> {
        self.prices.commodities()
    }

    /// Same data with a different transport rate
    pub fn with_transport_rate(mut self, transport_rate: f64) -> Self {
        self.transport_rate = transport_rate;
        self
    }

    /// Check if data is stale (age in milliseconds)
    pub fn is_stale(&self, current_time_ms: u64, max_age_ms: u64) -> bool {
        current_time_ms.saturating_sub(self.timestamp_ms) > max_age_ms
    }

    /// Parse and validate a JSON-encoded snapshot
    pub fn from_json_str(json: &str) -> Result<Self> {
        let snapshot: MarketSnapshot = serde_json::from_str(json)?;
        snapshot.validate()?;
        Ok(snapshot)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

pub(crate) fn check_transport_rate(transport_rate: f64) -> Result<()> {
    if !transport_rate.is_finite() || transport_rate < 0.0 {
        return Err(AgriLinkError::InvalidTransportRate(transport_rate));
    }
    Ok(())
}

pub(crate) fn check_price(commodity: &Commodity, city: &CityId, price: f64) -> Result<()> {
    if !price.is_finite() || price < 0.0 {
        return Err(AgriLinkError::InvalidReferenceData(format!(
            "price for {} in {} must be non-negative, got {}",
            commodity, city, price
        )));
    }
    Ok(())
}

pub(crate) fn check_distance(origin: &CityId, destination: &CityId, distance: f64) -> Result<()> {
    if !distance.is_finite() || distance < 0.0 {
        return Err(AgriLinkError::InvalidReferenceData(format!(
            "distance from {} to {} must be non-negative, got {}",
            origin, destination, distance
        )));
    }
    Ok(())
}

/// Get current timestamp in milliseconds
pub(crate) fn current_timestamp_ms() -> u64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_millis() as u64)
        .unwrap_or_default()
}
