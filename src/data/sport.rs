use sea_orm::{
    sea_query::Expr, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, ExprTrait, QueryFilter,
    QuerySelect,
};
use std::collections::{HashMap, HashSet};

use crate::{
    data::semester::SemesterRepository,
    model::sport::{SportView, TrainerRef},
};

pub struct SportRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SportRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sports a student can see in the current semester, enriched with
    /// trainers, group count and free places.
    ///
    /// With a student supplied, only sports with at least one group whose
    /// allowed medical groups contain the student's medical group are
    /// returned; trainers and group counts then cover only those eligible
    /// groups. Free places always cover all of the sport's groups in the
    /// semester, eligible or not.
    ///
    /// Trainer assignments that do not resolve to a trainer record are
    /// dropped silently.
    ///
    /// # Arguments
    /// - `include_special`: also return sports flagged special or invisible
    /// - `student`: restrict to groups matching this student's medical group
    ///
    /// # Returns
    /// - `Ok(Vec<SportView>)`: Enriched sports, empty when no semester is ongoing
    /// - `Err(DbErr)`: Database error
    pub async fn get_sports(
        &self,
        include_special: bool,
        student: Option<&entity::student::Model>,
    ) -> Result<Vec<SportView>, DbErr> {
        let Some(semester) = SemesterRepository::new(self.db).current().await? else {
            return Ok(Vec::new());
        };

        let semester_groups = entity::prelude::Group::find()
            .filter(entity::group::Column::SemesterId.eq(semester.id))
            .all(self.db)
            .await?;
        let semester_group_ids: Vec<i32> = semester_groups.iter().map(|g| g.id).collect();

        let eligible_groups: Vec<&entity::group::Model> = match student {
            Some(student) => {
                let allowed_ids: HashSet<i32> = entity::prelude::GroupAllowedMedicalGroup::find()
                    .filter(
                        entity::group_allowed_medical_group::Column::GroupId
                            .is_in(semester_group_ids.clone()),
                    )
                    .filter(
                        entity::group_allowed_medical_group::Column::MedicalGroupId
                            .eq(student.medical_group_id),
                    )
                    .all(self.db)
                    .await?
                    .into_iter()
                    .map(|row| row.group_id)
                    .collect();
                semester_groups
                    .iter()
                    .filter(|g| allowed_ids.contains(&g.id))
                    .collect()
            }
            None => semester_groups.iter().collect(),
        };

        let sport_ids: HashSet<i32> = eligible_groups.iter().map(|g| g.sport_id).collect();
        let mut sports_query = entity::prelude::Sport::find()
            .filter(entity::sport::Column::Id.is_in(sport_ids.iter().copied()));
        if !include_special {
            sports_query = sports_query
                .filter(entity::sport::Column::Special.eq(false))
                .filter(entity::sport::Column::Visible.eq(true));
        }
        let sports = sports_query.all(self.db).await?;

        // Single aggregation and single assignment fetch for all groups in
        // the semester, instead of per-group counting.
        let enrolled = self.enrolled_counts(&semester_group_ids).await?;

        let eligible_group_ids: Vec<i32> = eligible_groups.iter().map(|g| g.id).collect();
        let assignments = entity::prelude::GroupTrainer::find()
            .filter(entity::group_trainer::Column::GroupId.is_in(eligible_group_ids))
            .all(self.db)
            .await?;

        let user_ids: HashSet<i32> = assignments.iter().map(|a| a.user_id).collect();
        let trainers_by_user: HashMap<i32, entity::trainer::Model> = if user_ids.is_empty() {
            HashMap::new()
        } else {
            entity::prelude::Trainer::find()
                .filter(entity::trainer::Column::UserId.is_in(user_ids.iter().copied()))
                .all(self.db)
                .await?
                .into_iter()
                .map(|t| (t.user_id, t))
                .collect()
        };

        let mut sports_list = Vec::with_capacity(sports.len());
        for sport in sports {
            let sport_group_ids: HashSet<i32> = eligible_groups
                .iter()
                .filter(|g| g.sport_id == sport.id)
                .map(|g| g.id)
                .collect();

            let mut seen = HashSet::new();
            let mut trainers = Vec::new();
            for assignment in assignments
                .iter()
                .filter(|a| sport_group_ids.contains(&a.group_id))
            {
                if !seen.insert(assignment.user_id) {
                    continue;
                }
                match trainers_by_user.get(&assignment.user_id) {
                    Some(trainer) => trainers.push(TrainerRef::from_entity(trainer.clone())),
                    None => tracing::warn!(
                        user_id = assignment.user_id,
                        "trainer assignment without trainer record, dropped"
                    ),
                }
            }

            let free_places = semester_groups
                .iter()
                .filter(|g| g.sport_id == sport.id)
                .map(|g| free_places_in_group(g, &enrolled))
                .sum();

            sports_list.push(SportView {
                id: sport.id,
                name: sport.name,
                special: sport.special,
                visible: sport.visible,
                trainers,
                num_of_groups: sport_group_ids.len(),
                free_places,
            });
        }

        Ok(sports_list)
    }

    /// Total free enrollment slots for a sport in the current semester.
    ///
    /// Per group, free = max(0, capacity − distinct enrolled students),
    /// summed across the sport's groups. A sport with no groups, or the
    /// absence of a current semester, yields 0.
    ///
    /// # Returns
    /// - `Ok(i64)`: Free places, always >= 0
    /// - `Err(DbErr)`: Database error
    pub async fn free_places_for_sport(&self, sport_id: i32) -> Result<i64, DbErr> {
        let Some(semester) = SemesterRepository::new(self.db).current().await? else {
            return Ok(0);
        };
        self.free_places_for_sport_in_semester(sport_id, &semester)
            .await
    }

    /// Free places for a sport within an already-resolved semester.
    pub(crate) async fn free_places_for_sport_in_semester(
        &self,
        sport_id: i32,
        semester: &entity::semester::Model,
    ) -> Result<i64, DbErr> {
        let groups = entity::prelude::Group::find()
            .filter(entity::group::Column::SportId.eq(sport_id))
            .filter(entity::group::Column::SemesterId.eq(semester.id))
            .all(self.db)
            .await?;

        let group_ids: Vec<i32> = groups.iter().map(|g| g.id).collect();
        let enrolled = self.enrolled_counts(&group_ids).await?;

        Ok(groups
            .iter()
            .map(|g| free_places_in_group(g, &enrolled))
            .sum())
    }

    /// Distinct enrolled students per group, in a single grouped query.
    ///
    /// Groups without enrollments are absent from the map. Counting distinct
    /// students means duplicate enrollment rows cannot eat capacity.
    async fn enrolled_counts(&self, group_ids: &[i32]) -> Result<HashMap<i32, i64>, DbErr> {
        if group_ids.is_empty() {
            return Ok(HashMap::new());
        }

        let rows: Vec<(i32, i64)> = entity::prelude::Enroll::find()
            .select_only()
            .column(entity::enroll::Column::GroupId)
            .column_as(
                Expr::col(entity::enroll::Column::StudentId).count_distinct(),
                "enrolled",
            )
            .filter(entity::enroll::Column::GroupId.is_in(group_ids.to_vec()))
            .group_by(entity::enroll::Column::GroupId)
            .into_tuple()
            .all(self.db)
            .await?;

        Ok(rows.into_iter().collect())
    }
}

/// Free slots in one group, floored at zero even when over-enrolled.
fn free_places_in_group(group: &entity::group::Model, enrolled: &HashMap<i32, i64>) -> i64 {
    let enrolled = enrolled.get(&group.id).copied().unwrap_or(0);
    Ord::max(i64::from(group.capacity) - enrolled, 0)
}
