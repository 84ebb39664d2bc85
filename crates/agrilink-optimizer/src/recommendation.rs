use agrilink_types::{Commodity, OptimizationResult};

/// One-sentence advice for the farmer
pub fn recommendation_message(
    result: &OptimizationResult,
    commodity: &Commodity,
    quantity: f64,
) -> String {
    if result.should_transport {
        format!(
            "Transport your {} ({} kg) to {} for maximum profit.",
            commodity, quantity, result.recommended_city
        )
    } else {
        format!(
            "Sell your {} ({} kg) locally in {} for maximum profit.",
            commodity, quantity, result.origin_city
        )
    }
}
