//! HTTP API server for the ToMo index diagnostic.
//!
//! This module provides the HTTP surface the web client consumes, built on
//! axum: response submission, aggregate statistics, and a health check.
//! Storage degradation is invisible here by design; the store never errors.

mod config;
mod error;
mod logging;
mod routes;
mod state;

pub use config::{
    Config, CorsConfig, FilterPolicyName, LogFormat, LoggingConfig, ServerConfig, StatsConfig,
};
pub use error::ApiError;
pub use logging::init as init_logging;
pub use routes::router;
pub use state::AppState;
