pub use super::enroll::Entity as Enroll;
pub use super::fitness_test_exercise::Entity as FitnessTestExercise;
pub use super::group::Entity as Group;
pub use super::group_allowed_medical_group::Entity as GroupAllowedMedicalGroup;
pub use super::group_trainer::Entity as GroupTrainer;
pub use super::semester::Entity as Semester;
pub use super::sport::Entity as Sport;
pub use super::student::Entity as Student;
pub use super::trainer::Entity as Trainer;
