use crate::{CityId, Commodity};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Unit prices per commodity and city (currency per kg)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PriceTable {
    pub prices: BTreeMap<Commodity, BTreeMap<CityId, f64>>,
}

impl PriceTable {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the unit price of a commodity in a city
    pub fn set(&mut self, commodity: impl Into<Commodity>, city: impl Into<CityId>, price: f64) {
        self.prices
            .entry(commodity.into())
            .or_default()
            .insert(city.into(), price);
    }

    /// Builder-style variant of [`PriceTable::set`]
    pub fn with_price(
        mut self,
        commodity: impl Into<Commodity>,
        city: impl Into<CityId>,
        price: f64,
    ) -> Self {
        self.set(commodity, city, price);
        self
    }

    /// All city prices for one commodity
    pub fn commodity(&self, commodity: &Commodity) -> Option<&BTreeMap<CityId, f64>> {
        self.prices.get(commodity)
    }

    pub fn contains_commodity(&self, commodity: &Commodity) -> bool {
        self.prices.contains_key(commodity)
    }

    /// Unit price of a commodity in a city, if recorded
    pub fn get(&self, commodity: &Commodity, city: &CityId) -> Option<f64> {
        self.prices
            .get(commodity)
            .and_then(|by_city| by_city.get(city))
            .copied()
    }

    /// Remove a single price entry, returning it if present
    pub fn remove(&mut self, commodity: &Commodity, city: &CityId) -> Option<f64> {
        self.prices
            .get_mut(commodity)
            .and_then(|by_city| by_city.remove(city))
    }

    /// Commodity names in sorted order
    pub fn commodities(&self) -> impl Iterator<Item = &Commodity> {
        self.prices.keys()
    }

    /// Iterate every (commodity, city, price) entry
    pub fn entries(&self) -> impl Iterator<Item = (&Commodity, &CityId, f64)> {
        self.prices.iter().flat_map(|(commodity, by_city)| {
            by_city
                .iter()
                .map(move |(city, price)| (commodity, city, *price))
        })
    }
}
