//! View models for group listings.

use sea_orm::FromQueryResult;
use serde::Serialize;

/// A group a student is enrolled in, joined with its sport name.
///
/// Selected directly from the Enroll → Group → Sport join, hence
/// `FromQueryResult`.
#[derive(Debug, Clone, PartialEq, Eq, FromQueryResult, Serialize)]
pub struct StudentGroup {
    /// Group id.
    pub id: i32,
    /// Group section label.
    pub name: String,
    /// Name of the sport the group belongs to.
    pub sport_name: String,
}

/// A group a trainer teaches, with its front-end display name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainerGroup {
    /// Group id.
    pub id: i32,
    /// Display-formatted name, see `entity::group::Model::to_frontend_name`.
    pub name: String,
}
