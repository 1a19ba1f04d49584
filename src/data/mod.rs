//! Database repository layer for all domain entities.
//!
//! This module contains repository structs that handle the read-only queries
//! for each domain. Repositories use SeaORM entity models internally and
//! return view models to maintain separation between the data layer and the
//! layers above. The repositories perform no writes.

pub mod group;
pub mod semester;
pub mod sport;

#[cfg(test)]
mod test;
