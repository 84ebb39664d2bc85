mod source;
mod snapshot;
mod static_data;
mod file;

pub use source::MarketData;
pub use snapshot::{MarketSnapshot, DEFAULT_TRANSPORT_RATE};
pub use static_data::{maharashtra_snapshot, StaticMarketData};
pub use file::FileMarketData;
