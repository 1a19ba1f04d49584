//! View models for sport listings.

use serde::Serialize;

/// A trainer reference attached to a sport listing.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TrainerRef {
    /// Trainer record id.
    pub id: i32,
    /// Linked user account id.
    pub user_id: i32,
    /// Trainer display name.
    pub name: String,
}

impl TrainerRef {
    /// Converts an entity model to a view model at the repository boundary.
    pub fn from_entity(entity: entity::trainer::Model) -> Self {
        Self {
            id: entity.id,
            user_id: entity.user_id,
            name: entity.name,
        }
    }
}

/// A sport enriched with listing metadata for the current semester.
///
/// Produced by the eligibility filter: `trainers`, `num_of_groups` and
/// `free_places` are derived from the groups that survived semester and
/// medical-group filtering.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SportView {
    /// Unique identifier for the sport.
    pub id: i32,
    /// Sport name, e.g. "Swimming".
    pub name: String,
    /// Whether the sport is a special type (medical leave, self-training).
    pub special: bool,
    /// Whether the sport appears in listings at all.
    pub visible: bool,
    /// Distinct trainers across the sport's groups in the current semester.
    pub trainers: Vec<TrainerRef>,
    /// Number of groups for this sport in the current semester.
    pub num_of_groups: usize,
    /// Total free enrollment slots across those groups, floored at zero.
    pub free_places: i64,
}
