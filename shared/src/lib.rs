// Data models and formatting helpers used by the engine and its front ends.
pub mod models;
pub mod utils;
