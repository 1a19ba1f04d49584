use super::*;

/// Tests current-semester resolution among disjoint date ranges.
///
/// Verifies that only the semester whose range contains today is returned,
/// not the past or future ones.
///
/// Expected: Ok(Some(Model)) with the ongoing semester's id
#[tokio::test]
async fn resolves_semester_containing_today() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    factory::create_semester_with_dates(
        db,
        today - Duration::days(200),
        today - Duration::days(100),
    )
    .await?;
    let ongoing = factory::create_semester(db).await?;
    factory::create_semester_with_dates(
        db,
        today + Duration::days(100),
        today + Duration::days(200),
    )
    .await?;

    let repo = SemesterRepository::new(db);
    let current = repo.current().await?;

    assert_eq!(current.map(|s| s.id), Some(ongoing.id));

    Ok(())
}

/// Tests resolution when no semester contains today's date.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_when_no_semester_matches() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    factory::create_semester_with_dates(
        db,
        today - Duration::days(200),
        today - Duration::days(100),
    )
    .await?;
    factory::create_semester_with_dates(
        db,
        today + Duration::days(100),
        today + Duration::days(200),
    )
    .await?;

    let repo = SemesterRepository::new(db);

    assert!(repo.current().await?.is_none());

    Ok(())
}

/// Tests resolution with an empty semester table.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_without_semesters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(SemesterRepository::new(db).current().await?.is_none());

    Ok(())
}

/// Tests the overlap tie-break: when two semesters contain the same date,
/// the most recently started one wins.
///
/// Expected: Ok(Some(Model)) with the later-starting semester's id
#[tokio::test]
async fn prefers_most_recently_started_on_overlap() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    factory::create_semester_with_dates(
        db,
        NaiveDate::from_ymd_opt(2024, 9, 1).unwrap(),
        NaiveDate::from_ymd_opt(2024, 12, 31).unwrap(),
    )
    .await?;
    let later = factory::create_semester_with_dates(
        db,
        NaiveDate::from_ymd_opt(2024, 10, 1).unwrap(),
        NaiveDate::from_ymd_opt(2025, 1, 31).unwrap(),
    )
    .await?;

    let repo = SemesterRepository::new(db);
    let resolved = repo
        .current_as_of(NaiveDate::from_ymd_opt(2024, 11, 15).unwrap())
        .await?;

    assert_eq!(resolved.map(|s| s.id), Some(later.id));

    Ok(())
}

/// Tests that resolution treats the date range as inclusive on both ends.
///
/// Expected: the semester is current on its first and last day
#[tokio::test]
async fn range_bounds_are_inclusive() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let start = NaiveDate::from_ymd_opt(2024, 9, 1).unwrap();
    let end = NaiveDate::from_ymd_opt(2024, 12, 31).unwrap();
    let semester = factory::create_semester_with_dates(db, start, end).await?;

    let repo = SemesterRepository::new(db);

    assert_eq!(repo.current_as_of(start).await?.map(|s| s.id), Some(semester.id));
    assert_eq!(repo.current_as_of(end).await?.map(|s| s.id), Some(semester.id));
    assert!(repo
        .current_as_of(end + Duration::days(1))
        .await?
        .is_none());

    Ok(())
}
