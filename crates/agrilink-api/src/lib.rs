mod config;
mod error;
mod server;
mod handlers;
mod state;

pub use config::ApiConfig;
pub use error::ApiError;
pub use server::create_app;
pub use state::AppState;

#[cfg(test)]
mod tests;
