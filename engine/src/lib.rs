// Trip expense engine: cost functions, estimation services, saved-trip
// persistence and exports.

pub mod config;
pub mod costs;
pub mod data;
pub mod error;
pub mod services;

pub use error::EngineError;
