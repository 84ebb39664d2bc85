use agrilink_types::{AgriLinkError, City, CityId, Commodity, DistanceTable, PriceTable, Result};
use std::sync::Arc;

use crate::snapshot::{
    check_distance, check_price, check_transport_rate, current_timestamp_ms, MarketSnapshot,
    DEFAULT_TRANSPORT_RATE,
};
use crate::source::MarketData;

const CITIES: [(&str, f64, f64); 6] = [
    ("Pune", 18.5204, 73.8567),
    ("Mumbai", 19.0760, 72.8777),
    ("Nashik", 19.9975, 73.7898),
    ("Solapur", 17.6599, 75.9064),
    ("Kolhapur", 16.7050, 74.2433),
    ("Aurangabad", 19.8762, 75.3433),
];

// Prices in the same city order as CITIES (currency per kg)
const PRICES: [(&str, [f64; 6]); 6] = [
    ("Rice", [42.0, 45.0, 40.0, 38.0, 41.0, 39.0]),
    ("Wheat", [30.0, 33.0, 29.0, 28.0, 30.0, 27.0]),
    ("Maize", [22.0, 24.0, 21.0, 20.0, 22.0, 21.0]),
    ("Potato", [25.0, 28.0, 24.0, 23.0, 26.0, 24.0]),
    ("Onion", [30.0, 34.0, 26.0, 29.0, 31.0, 28.0]),
    ("Tomato", [20.0, 24.0, 18.0, 19.0, 21.0, 20.0]),
];

// Road distances in km, recorded in both directions
const ROUTES: [(&str, &str, f64); 15] = [
    ("Pune", "Mumbai", 150.0),
    ("Pune", "Nashik", 210.0),
    ("Pune", "Solapur", 250.0),
    ("Pune", "Kolhapur", 230.0),
    ("Pune", "Aurangabad", 235.0),
    ("Mumbai", "Nashik", 170.0),
    ("Mumbai", "Solapur", 400.0),
    ("Mumbai", "Kolhapur", 380.0),
    ("Mumbai", "Aurangabad", 335.0),
    ("Nashik", "Solapur", 410.0),
    ("Nashik", "Kolhapur", 440.0),
    ("Nashik", "Aurangabad", 180.0),
    ("Solapur", "Kolhapur", 235.0),
    ("Solapur", "Aurangabad", 305.0),
    ("Kolhapur", "Aurangabad", 465.0),
];

/// In-memory market data
/// Defaults to a Maharashtra mandi dataset; useful for testing and demos
#[derive(Debug, Clone)]
pub struct StaticMarketData {
    snapshot: Arc<MarketSnapshot>,
}

impl StaticMarketData {
    /// Create with the built-in Maharashtra dataset
    pub fn new() -> Self {
        StaticMarketData {
            snapshot: Arc::new(maharashtra_snapshot()),
        }
    }

    /// Create from a caller-supplied snapshot
    pub fn with_snapshot(snapshot: MarketSnapshot) -> Result<Self> {
        snapshot.validate()?;
        Ok(StaticMarketData {
            snapshot: Arc::new(snapshot),
        })
    }

    /// Override the transport rate
    pub fn with_transport_rate(mut self, transport_rate: f64) -> Result<Self> {
        check_transport_rate(transport_rate)?;
        self.snapshot_mut().transport_rate = transport_rate;
        Ok(self)
    }

    /// Update a price; snapshots already handed out are unaffected.
    /// A negative or non-finite price is rejected and the data is left as it was.
    pub fn set_price(
        &mut self,
        commodity: impl Into<Commodity>,
        city: impl Into<CityId>,
        price: f64,
    ) -> Result<()> {
        let (commodity, city) = (commodity.into(), city.into());
        check_price(&commodity, &city, price)?;
        self.snapshot_mut().prices.set(commodity, city, price);
        Ok(())
    }

    /// Update a directed distance; snapshots already handed out are unaffected
    pub fn set_distance(
        &mut self,
        origin: impl Into<CityId>,
        destination: impl Into<CityId>,
        distance: f64,
    ) -> Result<()> {
        let (origin, destination) = (origin.into(), destination.into());
        check_distance(&origin, &destination, distance)?;
        self.snapshot_mut().distances.set(origin, destination, distance);
        Ok(())
    }

    /// Add a city to the end of the registry
    pub fn add_city(&mut self, city: City) -> Result<()> {
        if self.snapshot.contains_city(&city.id) {
            return Err(AgriLinkError::InvalidReferenceData(format!(
                "duplicate city in registry: {}",
                city.id
            )));
        }
        self.snapshot_mut().cities.push(city);
        Ok(())
    }

    fn snapshot_mut(&mut self) -> &mut MarketSnapshot {
        let snapshot = Arc::make_mut(&mut self.snapshot);
        snapshot.timestamp_ms = current_timestamp_ms();
        snapshot
    }
}

impl Default for StaticMarketData {
    fn default() -> Self {
        Self::new()
    }
}

impl MarketData for StaticMarketData {
    fn snapshot(&self) -> Result<Arc<MarketSnapshot>> {
        Ok(Arc::clone(&self.snapshot))
    }
}

/// Six Maharashtra markets with six commodities and a full distance matrix
pub fn maharashtra_snapshot() -> MarketSnapshot {
    let cities = CITIES
        .iter()
        .map(|(name, lat, lon)| City::with_coordinate(*name, *lat, *lon))
        .collect();

    let mut prices = PriceTable::new();
    for (commodity, row) in PRICES {
        for ((city, _, _), price) in CITIES.iter().zip(row) {
            prices.set(commodity, *city, price);
        }
    }

    let mut distances = DistanceTable::new();
    for (a, b, km) in ROUTES {
        distances.set_symmetric(a, b, km);
    }

    MarketSnapshot::new(
        cities,
        prices,
        distances,
        DEFAULT_TRANSPORT_RATE,
        vec!["static".to_string()],
    )
}
