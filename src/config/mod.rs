//! Application configuration module
//!
//! Environment-driven settings plus the constants they default to.

mod constants;
mod settings;

pub use constants::*;
pub use settings::Config;
