//! Error types for the data layer.
//!
//! Every failure in this crate surfaces as a [`DbError`]. The store never
//! retries; a failed append or read reaches the caller unchanged and maps
//! to the service-unavailable taxonomy at the API boundary.

/// Errors that can occur in the data layer.
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    /// A query or connection attempt against `PostgreSQL` failed.
    #[error("postgres: {0}")]
    Postgres(#[from] sqlx::Error),

    /// A schema migration could not be applied.
    #[error("migration: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    /// The store configuration is unusable.
    #[error("store configuration: {0}")]
    Config(String),
}
