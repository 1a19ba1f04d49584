use sea_orm::entity::prelude::*;

/// Medical-group id meaning minimal/no-restriction clearance.
///
/// It carries no special meaning in eligibility checks (membership in a
/// group's allowed set is all that matters); the constant exists so callers
/// and fixtures agree on the sentinel.
pub const MEDICAL_GROUP_MINIMAL: i32 = -2;

/// A student who may enroll into training groups.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "student")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub medical_group_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::enroll::Entity")]
    Enroll,
}

impl Related<super::enroll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enroll.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
