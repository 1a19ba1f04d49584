//! Service layer for query orchestration.
//!
//! Sits between the request-handling layer and the repositories: resolves
//! caller-supplied identifiers to entities (a missing student or trainer is
//! an `AppError::NotFound`), delegates to the data layer, and converts
//! results to view models.

pub mod enrollment;
