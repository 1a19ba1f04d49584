use sea_orm::entity::prelude::*;

/// A training group for one sport within one semester.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub name: String,
    pub sport_id: i32,
    pub semester_id: i32,
    pub capacity: i32,
}

impl Model {
    /// Display name shown to the front end, combining the sport name with
    /// the group's own section label.
    pub fn to_frontend_name(&self, sport_name: &str) -> String {
        format!("{} - {}", sport_name, self.name)
    }
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::sport::Entity",
        from = "Column::SportId",
        to = "super::sport::Column::Id"
    )]
    Sport,
    #[sea_orm(
        belongs_to = "super::semester::Entity",
        from = "Column::SemesterId",
        to = "super::semester::Column::Id"
    )]
    Semester,
    #[sea_orm(has_many = "super::enroll::Entity")]
    Enroll,
    #[sea_orm(has_many = "super::group_trainer::Entity")]
    GroupTrainer,
    #[sea_orm(has_many = "super::group_allowed_medical_group::Entity")]
    GroupAllowedMedicalGroup,
}

impl Related<super::sport::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Sport.def()
    }
}

impl Related<super::semester::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Semester.def()
    }
}

impl Related<super::enroll::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Enroll.def()
    }
}

impl Related<super::group_trainer::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupTrainer.def()
    }
}

impl Related<super::group_allowed_medical_group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::GroupAllowedMedicalGroup.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
