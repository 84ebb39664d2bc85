use crate::{CityId, Commodity};
use serde::{Deserialize, Serialize};

/// Request to compare local sale against transport to each market
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationRequest {
    pub origin_city: CityId,
    pub commodity: Commodity,
    /// Quantity to sell (kg); must be positive
    pub quantity: f64,
}

impl OptimizationRequest {
    pub fn new(
        origin_city: impl Into<CityId>,
        commodity: impl Into<Commodity>,
        quantity: f64,
    ) -> Self {
        OptimizationRequest {
            origin_city: origin_city.into(),
            commodity: commodity.into(),
            quantity,
        }
    }

    /// Same request with a different quantity
    pub fn with_quantity(&self, quantity: f64) -> Self {
        OptimizationRequest {
            quantity,
            ..self.clone()
        }
    }
}

/// Outcome of selling the whole quantity in one city
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CityEvaluation {
    pub city: CityId,
    pub unit_price: f64,
    /// Zero for the origin city
    pub transport_cost: f64,
    pub net_profit: f64,
}

impl CityEvaluation {
    /// Revenue before transport cost
    pub fn revenue(&self) -> f64 {
        self.net_profit + self.transport_cost
    }
}

/// Recommendation plus the per-city breakdown it was derived from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OptimizationResult {
    pub origin_city: CityId,
    pub recommended_city: CityId,
    pub recommended_net_profit: f64,
    pub should_transport: bool,
    /// One entry per registry city, in registry order
    pub evaluations: Vec<CityEvaluation>,
}

impl OptimizationResult {
    pub fn evaluation(&self, city: &CityId) -> Option<&CityEvaluation> {
        self.evaluations.iter().find(|e| &e.city == city)
    }

    pub fn origin_evaluation(&self) -> Option<&CityEvaluation> {
        self.evaluation(&self.origin_city)
    }

    pub fn recommended_evaluation(&self) -> Option<&CityEvaluation> {
        self.evaluation(&self.recommended_city)
    }

    /// Extra profit of the recommendation over selling at the origin
    pub fn transport_gain(&self) -> f64 {
        self.origin_evaluation()
            .map(|origin| self.recommended_net_profit - origin.net_profit)
            .unwrap_or(0.0)
    }

    /// Evaluations by descending net profit.
    ///
    /// Among equal profits the recommended city ranks first, so rank 1 always
    /// names the recommendation; other ties keep registry order.
    pub fn ranked(&self) -> Vec<&CityEvaluation> {
        let is_recommended = |e: &CityEvaluation| e.city == self.recommended_city;
        let mut ranked: Vec<&CityEvaluation> = self.evaluations.iter().collect();
        ranked.sort_by(|a, b| {
            b.net_profit
                .total_cmp(&a.net_profit)
                .then_with(|| is_recommended(b).cmp(&is_recommended(a)))
        });
        ranked
    }
}
