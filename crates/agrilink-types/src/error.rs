use thiserror::Error;

use crate::{CityId, Commodity};

#[derive(Debug, Clone, PartialEq, Error)]
pub enum AgriLinkError {
    #[error("Invalid quantity: {0} (must be a positive, finite number)")]
    InvalidQuantity(f64),

    #[error("Invalid transport rate: {0} (must be a non-negative, finite number)")]
    InvalidTransportRate(f64),

    #[error("Unknown origin city: {0}")]
    UnknownOriginCity(CityId),

    #[error("Unknown commodity: {0}")]
    UnknownCommodity(Commodity),

    #[error("Missing price for {commodity} in {city}")]
    MissingPrice { commodity: Commodity, city: CityId },

    #[error("Missing distance from {origin} to {city}")]
    MissingDistance { origin: CityId, city: CityId },

    #[error("Invalid reference data: {0}")]
    InvalidReferenceData(String),

    #[error("Serialization error: {0}")]
    SerializationError(String),

    #[error("IO error: {0}")]
    IoError(String),

    #[error("Configuration error: {0}")]
    ConfigError(String),
}

impl AgriLinkError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            AgriLinkError::InvalidQuantity(_) => "invalid_quantity",
            AgriLinkError::InvalidTransportRate(_) => "invalid_transport_rate",
            AgriLinkError::UnknownOriginCity(_) => "unknown_origin_city",
            AgriLinkError::UnknownCommodity(_) => "unknown_commodity",
            AgriLinkError::MissingPrice { .. } => "missing_price",
            AgriLinkError::MissingDistance { .. } => "missing_distance",
            AgriLinkError::InvalidReferenceData(_) => "invalid_reference_data",
            AgriLinkError::SerializationError(_) => "serialization_error",
            AgriLinkError::IoError(_) => "io_error",
            AgriLinkError::ConfigError(_) => "config_error",
        }
    }
}

impl From<serde_json::Error> for AgriLinkError {
    fn from(err: serde_json::Error) -> Self {
        AgriLinkError::SerializationError(err.to_string())
    }
}

impl From<std::io::Error> for AgriLinkError {
    fn from(err: std::io::Error) -> Self {
        AgriLinkError::IoError(err.to_string())
    }
}

pub type Result<T> = std::result::Result<T, AgriLinkError>;
