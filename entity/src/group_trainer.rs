use sea_orm::entity::prelude::*;

/// Assignment of a trainer to a training group.
///
/// `user_id` references the trainer's *user account*, not the trainer row.
/// There is deliberately no foreign key to the trainer table: user accounts
/// and trainer records can drift apart, and unresolved assignments are
/// tolerated (dropped) at query time.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel)]
#[sea_orm(table_name = "group_trainer")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i32,
    pub group_id: i32,
    pub user_id: i32,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {
    #[sea_orm(
        belongs_to = "super::group::Entity",
        from = "Column::GroupId",
        to = "super::group::Column::Id"
    )]
    Group,
}

impl Related<super::group::Entity> for Entity {
    fn to() -> RelationDef {
        Relation::Group.def()
    }
}

impl ActiveModelBehavior for ActiveModel {}
