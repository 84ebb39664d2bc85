use agrilink_market::MarketData;
use agrilink_optimizer::recommendation_message;
use agrilink_types::{City, OptimizationRequest, OptimizationResult};
use axum::{
    extract::{rejection::JsonRejection, State},
    response::IntoResponse,
    Json,
};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
}

#[derive(Serialize)]
pub struct CitiesResponse {
    pub cities: Vec<String>,
}

#[derive(Serialize)]
pub struct CityLocationsResponse {
    pub cities: Vec<City>,
}

#[derive(Serialize)]
pub struct CommoditiesResponse {
    pub commodities: Vec<String>,
}

#[derive(Debug, Deserialize)]
pub struct OptimizeTransportRequest {
    pub current_city: String,
    pub crop: String,
    pub crop_weight_kg: f64,
}

#[derive(Serialize)]
pub struct CityDetail {
    pub price_per_kg: f64,
    pub transport_cost: f64,
    pub net_profit: f64,
}

#[derive(Serialize)]
pub struct TransportSummary {
    pub current_city: String,
    pub best_city: String,
    pub best_net_profit: f64,
    pub recommend_transport: bool,
    pub city_details: BTreeMap<String, CityDetail>,
}

#[derive(Serialize)]
pub struct RankedCity {
    pub rank: usize,
    pub city: String,
    pub net_profit: f64,
}

#[derive(Serialize)]
pub struct OptimizeTransportResponse {
    pub optimization_result: TransportSummary,
    pub ranking: Vec<RankedCity>,
    pub recommendation: String,
    pub transport_gain: f64,
    pub generated_at: String,
}

impl TransportSummary {
    fn from_result(result: &OptimizationResult) -> Self {
        let city_details = result
            .evaluations
            .iter()
            .map(|e| {
                (
                    e.city.to_string(),
                    CityDetail {
                        price_per_kg: e.unit_price,
                        transport_cost: e.transport_cost,
                        net_profit: e.net_profit,
                    },
                )
            })
            .collect();

        TransportSummary {
            current_city: result.origin_city.to_string(),
            best_city: result.recommended_city.to_string(),
            best_net_profit: result.recommended_net_profit,
            recommend_transport: result.should_transport,
            city_details,
        }
    }
}

/// Health check endpoint
pub async fn health() -> impl IntoResponse {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

/// City names in registry order
pub async fn list_cities(State(state): State<AppState>) -> Result<Json<CitiesResponse>, ApiError> {
    let cities = state
        .optimizer
        .market()
        .city_ids()?
        .into_iter()
        .map(|id| id.to_string())
        .collect();

    Ok(Json(CitiesResponse { cities }))
}

/// Cities with their map coordinates
pub async fn list_city_locations(
    State(state): State<AppState>,
) -> Result<Json<CityLocationsResponse>, ApiError> {
    let snapshot = state.optimizer.market().snapshot()?;
    Ok(Json(CityLocationsResponse {
        cities: snapshot.cities.clone(),
    }))
}

pub async fn list_commodities(
    State(state): State<AppState>,
) -> Result<Json<CommoditiesResponse>, ApiError> {
    let commodities = state
        .optimizer
        .market()
        .commodities()?
        .into_iter()
        .map(|c| c.to_string())
        .collect();

    Ok(Json(CommoditiesResponse { commodities }))
}

/// Recommend where to sell a crop
pub async fn optimize_transport(
    State(state): State<AppState>,
    payload: Result<Json<OptimizeTransportRequest>, JsonRejection>,
) -> Result<Json<OptimizeTransportResponse>, ApiError> {
    let Json(req) = payload?;
    tracing::debug!("optimize-transport request: {:?}", req);

    let request = OptimizationRequest::new(req.current_city, req.crop, req.crop_weight_kg);
    let result = state.optimizer.optimize(&request)?;

    let ranking = result
        .ranked()
        .into_iter()
        .enumerate()
        .map(|(i, e)| RankedCity {
            rank: i + 1,
            city: e.city.to_string(),
            net_profit: e.net_profit,
        })
        .collect();

    Ok(Json(OptimizeTransportResponse {
        optimization_result: TransportSummary::from_result(&result),
        ranking,
        recommendation: recommendation_message(&result, &request.commodity, request.quantity),
        transport_gain: result.transport_gain(),
        generated_at: chrono::Utc::now().to_rfc3339(),
    }))
}
