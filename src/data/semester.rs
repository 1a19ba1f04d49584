use chrono::{NaiveDate, Utc};
use sea_orm::{
    ColumnTrait, DatabaseConnection, DbErr, EntityTrait, JoinType, QueryFilter, QueryOrder,
    QuerySelect, RelationTrait,
};

pub struct SemesterRepository<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> SemesterRepository<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Resolves the current semester: the one whose date range contains today.
    ///
    /// Callers resolve this once per logical operation and pass the result
    /// down, so one request never observes two different current semesters.
    ///
    /// # Returns
    /// - `Ok(Some(Model))`: The ongoing semester
    /// - `Ok(None)`: No semester contains today's date
    /// - `Err(DbErr)`: Database error
    pub async fn current(&self) -> Result<Option<entity::semester::Model>, DbErr> {
        self.current_as_of(Utc::now().date_naive()).await
    }

    /// Resolves the semester whose date range contains the given date.
    ///
    /// At most one semester is expected to match; should ranges overlap, the
    /// most recently started semester wins, keeping the result deterministic.
    pub async fn current_as_of(
        &self,
        today: NaiveDate,
    ) -> Result<Option<entity::semester::Model>, DbErr> {
        entity::prelude::Semester::find()
            .filter(entity::semester::Column::StartDate.lte(today))
            .filter(entity::semester::Column::EndDate.gte(today))
            .order_by_desc(entity::semester::Column::StartDate)
            .one(self.db)
            .await
    }

    /// Lists semesters in one of three mutually exclusive modes.
    ///
    /// `current_only` takes precedence over `with_exercises_only`:
    /// - `current_only`: only the ongoing semester (zero or one results)
    /// - `with_exercises_only`: semesters with at least one fitness-test
    ///   exercise, distinct
    /// - neither: all semesters
    ///
    /// # Returns
    /// - `Ok(Vec<Model>)`: The selected semesters
    /// - `Err(DbErr)`: Database error
    pub async fn list(
        &self,
        current_only: bool,
        with_exercises_only: bool,
    ) -> Result<Vec<entity::semester::Model>, DbErr> {
        if current_only {
            Ok(self.current().await?.into_iter().collect())
        } else if with_exercises_only {
            entity::prelude::Semester::find()
                .join(
                    JoinType::InnerJoin,
                    entity::semester::Relation::FitnessTestExercise.def(),
                )
                .distinct()
                .all(self.db)
                .await
        } else {
            entity::prelude::Semester::find().all(self.db).await
        }
    }
}
