use agrilink_market::{MarketData, MarketSnapshot, StaticMarketData};
use agrilink_types::{OptimizationRequest, OptimizationResult, Result};
use std::sync::Arc;

use crate::optimize::optimize;

/// Transport optimizer bound to a market data source
///
/// Every call takes its own snapshot, so reference data can be swapped
/// between calls without affecting a computation in flight.
pub struct TransportOptimizer {
    market: Arc<dyn MarketData>,
    rate_override: Option<f64>,
}

impl TransportOptimizer {
    /// Create with the built-in Maharashtra dataset
    pub fn new() -> Self {
        Self::with_market(Arc::new(StaticMarketData::new()))
    }

    /// Create with a custom market data source
    pub fn with_market(market: Arc<dyn MarketData>) -> Self {
        TransportOptimizer {
            market,
            rate_override: None,
        }
    }

    /// Use a fixed transport rate instead of the snapshot's
    pub fn with_rate_override(mut self, rate: f64) -> Self {
        self.rate_override = Some(rate);
        self
    }

    pub fn market(&self) -> &Arc<dyn MarketData> {
        &self.market
    }

    /// Transport rate applied to a given snapshot
    pub fn effective_rate(&self, snapshot: &MarketSnapshot) -> f64 {
        self.rate_override.unwrap_or(snapshot.transport_rate)
    }

    /// Optimize against a fresh snapshot of the market data
    pub fn optimize(&self, request: &OptimizationRequest) -> Result<OptimizationResult> {
        let snapshot = self.market.snapshot()?;
        self.optimize_with(request, &snapshot)
    }

    /// Optimize against a snapshot the caller already holds
    pub fn optimize_with(
        &self,
        request: &OptimizationRequest,
        snapshot: &MarketSnapshot,
    ) -> Result<OptimizationResult> {
        let rate = self.effective_rate(snapshot);
        tracing::debug!(
            "Optimizing {} kg of {} from {} across {} cities (rate {})",
            request.quantity,
            request.commodity,
            request.origin_city,
            snapshot.cities.len(),
            rate
        );

        match optimize(
            request,
            &snapshot.prices,
            &snapshot.distances,
            &snapshot.cities,
            rate,
        ) {
            Ok(result) => {
                tracing::info!(
                    "Best market for {} from {}: {} (net profit {:.2}, transport: {})",
                    request.commodity,
                    request.origin_city,
                    result.recommended_city,
                    result.recommended_net_profit,
                    result.should_transport
                );
                Ok(result)
            }
            Err(err) => {
                tracing::warn!("Optimization rejected: {}", err);
                Err(err)
            }
        }
    }
}

impl Default for TransportOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
