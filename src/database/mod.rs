//! PostgreSQL backend
//!
//! This module provides:
//! - Connection pooling via diesel r2d2 with connect/disconnect/health-check lifecycle
//! - Repository traits and their (placeholder) Postgres implementations
//! - Entity models and schema definitions

pub mod connection;
pub mod enums;
pub mod models;
pub mod repositories;
pub mod schema;

pub use connection::{PgPool, PgPooledConnection, PostgresDatabase};
