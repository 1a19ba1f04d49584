use sea_orm::entity::prelude::*;

/// An academic semester with an inclusive date range.
///
/// At most one semester is expected to be "current" at any instant; overlap
/// is a data-integrity issue handled at query time, not here.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "semester")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub start_date: Date,
    pub end_date: Date,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(has_many = "super::group::Entity")]
    Group,
    #[sea_orm(has_many = "super::fitness_test_exercise::Entity")]
    FitnessTestExercise,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl Related<super::fitness_test_exercise::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::FitnessTestExercise.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
