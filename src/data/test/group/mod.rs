use crate::data::group::GroupRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, group::GroupFactory, sport::SportFactory},
};

mod student_groups;
