mod optimize;
mod recommendation;
mod transport;

pub use optimize::optimize;
pub use recommendation::recommendation_message;
pub use transport::TransportOptimizer;
