use agrilink_types::{
    AgriLinkError, City, CityEvaluation, DistanceTable, OptimizationRequest, OptimizationResult,
    PriceTable, Result,
};

/// Compare selling locally against transporting to every city in the registry
///
/// For each city `c`, in registry order:
///   transport_cost = distance(origin, c) * rate * quantity   (0 when c == origin)
///   net_profit     = price(commodity, c) * quantity - transport_cost
///
/// The recommendation is the strictly greatest net profit. The origin wins
/// ties; otherwise the first tied city in registry order wins. Any missing
/// price or distance aborts the whole computation.
pub fn optimize(
    request: &OptimizationRequest,
    prices: &PriceTable,
    distances: &DistanceTable,
    cities: &[City],
    rate: f64,
) -> Result<OptimizationResult> {
    let quantity = request.quantity;
    if !quantity.is_finite() || quantity <= 0.0 {
        return Err(AgriLinkError::InvalidQuantity(quantity));
    }
    if !rate.is_finite() || rate < 0.0 {
        return Err(AgriLinkError::InvalidTransportRate(rate));
    }

    let origin = &request.origin_city;
    let origin_index = cities
        .iter()
        .position(|c| &c.id == origin)
        .ok_or_else(|| AgriLinkError::UnknownOriginCity(origin.clone()))?;

    let city_prices = prices
        .commodity(&request.commodity)
        .ok_or_else(|| AgriLinkError::UnknownCommodity(request.commodity.clone()))?;

    let mut evaluations = Vec::with_capacity(cities.len());
    for city in cities {
        let unit_price = city_prices
            .get(&city.id)
            .copied()
            .ok_or_else(|| AgriLinkError::MissingPrice {
                commodity: request.commodity.clone(),
                city: city.id.clone(),
            })?;

        // The table's self-distance is never consulted for the origin
        let transport_cost = if &city.id == origin {
            0.0
        } else {
            let distance = distances
                .recorded(origin, &city.id)
                .ok_or_else(|| AgriLinkError::MissingDistance {
                    origin: origin.clone(),
                    city: city.id.clone(),
                })?;
            distance * rate * quantity
        };

        evaluations.push(CityEvaluation {
            city: city.id.clone(),
            unit_price,
            transport_cost,
            net_profit: unit_price * quantity - transport_cost,
        });
    }

    let mut best = &evaluations[origin_index];
    for evaluation in &evaluations {
        if evaluation.net_profit > best.net_profit {
            best = evaluation;
        }
    }

    let recommended_city = best.city.clone();
    let recommended_net_profit = best.net_profit;

    Ok(OptimizationResult {
        should_transport: &recommended_city != origin,
        origin_city: origin.clone(),
        recommended_city,
        recommended_net_profit,
        evaluations,
    })
}
