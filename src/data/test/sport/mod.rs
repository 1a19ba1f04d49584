use crate::data::sport::SportRepository;
use chrono::{Duration, Utc};
use sea_orm::DbErr;
use test_utils::{
    builder::TestBuilder,
    factory::{self, group::GroupFactory, sport::SportFactory},
};

mod get_sports;
