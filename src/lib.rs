//! # Usuarios Service
//!
//! REST service for user accounts under `/api/usuarios`.
//!
//! ## Architecture
//!
//! The project follows Clean Architecture principles:
//!
//! - **domain**: User and review entities, DTOs and the repository trait
//! - **application**: The user service (lookups, change-detecting update, guarded delete)
//! - **infrastructure**: SQLite persistence, the in-memory store and password hashing
//! - **interfaces**: REST API with Swagger documentation
//! - **server**: Runtime wiring and graceful shutdown

pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;
pub mod interfaces;
pub mod server;
pub mod shared;

pub use config::{default_config_path, AppConfig};

// Re-export database types for easy access
pub use infrastructure::{init_database, DatabaseConfig};

// Re-export API router and service
pub use application::UserService;
pub use interfaces::http::create_api_router;
