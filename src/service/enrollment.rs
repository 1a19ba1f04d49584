use sea_orm::{DatabaseConnection, EntityTrait};

use crate::{
    data::{group::GroupRepository, semester::SemesterRepository, sport::SportRepository},
    error::AppError,
    model::{
        group::{StudentGroup, TrainerGroup},
        semester::SemesterView,
        sport::SportView,
    },
};

pub struct EnrollmentService<'a> {
    db: &'a DatabaseConnection,
}

impl<'a> EnrollmentService<'a> {
    pub fn new(db: &'a DatabaseConnection) -> Self {
        Self { db }
    }

    /// Lists sports joinable in the current semester.
    ///
    /// # Arguments
    /// - `include_special`: also return special or invisible sports
    /// - `student_id`: when given, restrict to sports the student's medical
    ///   group allows
    ///
    /// # Returns
    /// - `Ok(Vec<SportView>)`: Enriched sports
    /// - `Err(AppError::NotFound)`: `student_id` does not resolve to a student
    /// - `Err(AppError)`: Database error
    pub async fn get_sports(
        &self,
        include_special: bool,
        student_id: Option<i32>,
    ) -> Result<Vec<SportView>, AppError> {
        let student = match student_id {
            Some(id) => Some(
                entity::prelude::Student::find_by_id(id)
                    .one(self.db)
                    .await?
                    .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?,
            ),
            None => None,
        };

        Ok(SportRepository::new(self.db)
            .get_sports(include_special, student.as_ref())
            .await?)
    }

    /// Groups the student is currently enrolled in.
    pub async fn student_groups(&self, student_id: i32) -> Result<Vec<StudentGroup>, AppError> {
        let student = entity::prelude::Student::find_by_id(student_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Student not found".to_string()))?;

        Ok(GroupRepository::new(self.db)
            .student_groups(student.id)
            .await?)
    }

    /// Groups the trainer teaches in the current semester.
    pub async fn trainer_groups(&self, trainer_id: i32) -> Result<Vec<TrainerGroup>, AppError> {
        let trainer = entity::prelude::Trainer::find_by_id(trainer_id)
            .one(self.db)
            .await?
            .ok_or_else(|| AppError::NotFound("Trainer not found".to_string()))?;

        Ok(GroupRepository::new(self.db)
            .trainer_groups(&trainer)
            .await?)
    }

    /// Total free enrollment slots for a sport in the current semester.
    pub async fn free_places_for_sport(&self, sport_id: i32) -> Result<i64, AppError> {
        Ok(SportRepository::new(self.db)
            .free_places_for_sport(sport_id)
            .await?)
    }

    /// Lists semesters; `current` takes precedence over `with_exercises`.
    pub async fn semesters(
        &self,
        current: bool,
        with_exercises: bool,
    ) -> Result<Vec<SemesterView>, AppError> {
        let semesters = SemesterRepository::new(self.db)
            .list(current, with_exercises)
            .await?;

        Ok(semesters.into_iter().map(SemesterView::from_entity).collect())
    }
}
