//! Error types for the enrollment core.
//!
//! `AppError` is the top-level error type returned by the service layer. The
//! repository layer returns plain `sea_orm::DbErr`; absence of data (no
//! current semester, no matching groups) is represented as empty results,
//! never as an error.

pub mod config;

use thiserror::Error;

use crate::error::config::ConfigError;

/// Top-level application error type.
///
/// Aggregates the error types that can occur in the core. Variants with
/// `#[from]` convert automatically via `?`.
#[derive(Error, Debug)]
pub enum AppError {
    /// Configuration error during startup or environment variable loading.
    #[error(transparent)]
    ConfigErr(#[from] ConfigError),

    /// Database operation error from SeaORM.
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),

    /// Resource not found: a caller-supplied primary key (student, trainer)
    /// did not resolve to a record.
    #[error("{0}")]
    NotFound(String),
}
