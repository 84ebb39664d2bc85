use agrilink_optimizer::TransportOptimizer;
use std::sync::Arc;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub optimizer: Arc<TransportOptimizer>,
}

impl AppState {
    /// State over the built-in market data
    pub fn new() -> Self {
        Self::with_optimizer(TransportOptimizer::new())
    }

    pub fn with_optimizer(optimizer: TransportOptimizer) -> Self {
        AppState {
            optimizer: Arc::new(optimizer),
        }
    }
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}
