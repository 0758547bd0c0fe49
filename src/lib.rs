//! Safe house registry - administrators, users and safe houses behind a
//! JSON API, with alert severity prediction.
//!
//! # Architecture Layers
//!
//! - **cli**: Command-line interface
//! - **commands**: CLI command implementations
//! - **config**: Application configuration and constants
//! - **domain**: Entities, their invariants and password digests
//! - **services**: Use cases (uniqueness, existence, authentication)
//! - **infra**: PostgreSQL and in-memory stores, Redis, severity model
//! - **api**: HTTP handlers, middleware, and routes
//! - **errors**: Centralized error handling
//!
//! # CLI Usage
//!
//! ```bash
//! # Start the server
//! cargo run -- serve
//!
//! # Start without PostgreSQL
//! cargo run -- serve --in-memory
//!
//! # Run migrations
//! cargo run -- migrate up
//! ```

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod domain;
pub mod errors;
pub mod infra;
pub mod services;

// Re-export commonly used types at crate root
pub use api::AppState;
pub use config::Config;
pub use domain::{Administrator, SafeHouse, User};
pub use errors::{AppError, AppResult};
pub use infra::Cache;
