use agrilink_types::{CityId, Commodity, Result};
use std::sync::Arc;

use crate::snapshot::MarketSnapshot;

/// Source of market reference data (cities, prices, distances, rate)
pub trait MarketData: Send + Sync {
    /// Get an immutable snapshot of the current reference data
    fn snapshot(&self) -> Result<Arc<MarketSnapshot>>;

    /// City ids in registry order
    fn city_ids(&self) -> Result<Vec<CityId>> {
        Ok(self.snapshot()?.city_ids().cloned().collect())
    }

    /// Commodities with at least one recorded price table
    fn commodities(&self) -> Result<Vec<Commodity>> {
        Ok(self.snapshot()?.commodities().cloned().collect())
    }
}
