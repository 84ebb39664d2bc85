mod city;
mod commodity;
mod distances;
mod prices;
mod optimization;
mod error;

pub use city::{City, CityId, Coordinate};
pub use commodity::Commodity;
pub use distances::DistanceTable;
pub use prices::PriceTable;
pub use optimization::{CityEvaluation, OptimizationRequest, OptimizationResult};
pub use error::{AgriLinkError, Result};
