use crate::data::semester::SemesterRepository;
use chrono::{Duration, NaiveDate, Utc};
use sea_orm::DbErr;
use test_utils::{builder::TestBuilder, factory};

mod current;
mod list;
