use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QuerySelect,
    RelationTrait,
};
use std::collections::{HashMap, HashSet};

use crate::{
    data::semester::SemesterRepository,
    model::group::{StudentGroup, TrainerGroup},
};

pub struct GroupRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> GroupRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Groups the student is enrolled in for the current semester, joined
    /// with the sport name.
    ///
    /// # Returns
    /// - `Ok(Vec<StudentGroup>)`: Enrollments, empty when no semester is
    ///   ongoing or the student has none
    /// - `Err(DbErr)`: Database error
    pub async fn student_groups(&self, student_id: i32) -> Result<Vec<StudentGroup>, DbErr> {
        let Some(semester) = SemesterRepository::new(self.db).current().await? else {
            return Ok(Vec::new());
        };

        entity::prelude::Enroll::find()
            .select_only()
            .column_as(entity::group::Column::Id, "id")
            .column_as(entity::group::Column::Name, "name")
            .column_as(entity::sport::Column::Name, "sport_name")
            .join(JoinType::InnerJoin, entity::enroll::Relation::Group.def())
            .join(JoinType::InnerJoin, entity::group::Relation::Sport.def())
            .filter(entity::enroll::Column::StudentId.eq(student_id))
            .filter(entity::group::Column::SemesterId.eq(semester.id))
            .distinct()
            .into_model::<StudentGroup>()
            .all(self.db)
            .await
    }

    /// Groups the trainer teaches in the current semester, with front-end
    /// display names.
    ///
    /// # Returns
    /// - `Ok(Vec<TrainerGroup>)`: Groups, empty when no semester is ongoing
    /// - `Err(DbErr)`: Database error
    pub async fn trainer_groups(
        &self,
        trainer: &entity::trainer::Model,
    ) -> Result<Vec<TrainerGroup>, DbErr> {
        let Some(semester) = SemesterRepository::new(self.db).current().await? else {
            return Ok(Vec::new());
        };

        let groups = entity::prelude::Group::find()
            .join(
                JoinType::InnerJoin,
                entity::group::Relation::GroupTrainer.def(),
            )
            .filter(entity::group_trainer::Column::UserId.eq(trainer.user_id))
            .filter(entity::group::Column::SemesterId.eq(semester.id))
            .all(self.db)
            .await?;

        let sport_ids: HashSet<i32> = groups.iter().map(|g| g.sport_id).collect();
        let sport_names: HashMap<i32, String> = entity::prelude::Sport::find()
            .filter(entity::sport::Column::Id.is_in(sport_ids))
            .all(self.db)
            .await?
            .into_iter()
            .map(|s| (s.id, s.name))
            .collect();

        Ok(groups
            .into_iter()
            .map(|group| {
                let sport_name = sport_names
                    .get(&group.sport_id)
                    .map(String::as_str)
                    .unwrap_or_default();
                TrainerGroup {
                    id: group.id,
                    name: group.to_frontend_name(sport_name),
                }
            })
            .collect())
    }
}
