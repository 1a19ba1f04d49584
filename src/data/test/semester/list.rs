use super::*;

/// Tests the default selection mode: all semesters.
///
/// Expected: Ok(Vec) with every semester regardless of dates
#[tokio::test]
async fn returns_all_semesters_by_default() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fitness_test_tables()
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
    factory::create_semester(db).await?;

    let semesters = SemesterRepository::new(db).list(false, false).await?;

    assert_eq!(semesters.len(), 2);

    Ok(())
}

/// Tests the current-only selection mode.
///
/// Expected: exactly the ongoing semester, or empty when none is ongoing
#[tokio::test]
async fn returns_only_current_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fitness_test_tables()
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

    let repo = SemesterRepository::new(db);
    let semesters = repo.list(true, false).await?;

    assert_eq!(semesters.len(), 1);
    assert_eq!(semesters[0].id, ongoing.id);

    Ok(())
}

/// Tests the current-only mode when no semester is ongoing.
///
/// Expected: Ok(empty Vec), not an error
#[tokio::test]
async fn current_only_is_empty_without_ongoing_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fitness_test_tables()
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

    let semesters = SemesterRepository::new(db).list(true, false).await?;

    assert!(semesters.is_empty());

    Ok(())
}

/// Tests the with-exercises selection mode.
///
/// A semester with several exercises must appear once (distinct), a semester
/// without exercises not at all.
///
/// Expected: Ok(Vec) with only the exercise-bearing semester, once
#[tokio::test]
async fn returns_semesters_with_exercises_distinct() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fitness_test_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let with_exercises = factory::create_semester(db).await?;
    factory::create_exercise(db, with_exercises.id).await?;
    factory::create_exercise(db, with_exercises.id).await?;
    factory::create_semester(db).await?;

    let semesters = SemesterRepository::new(db).list(false, true).await?;

    assert_eq!(semesters.len(), 1);
    assert_eq!(semesters[0].id, with_exercises.id);

    Ok(())
}

/// Tests mode precedence: current-only wins over with-exercises.
///
/// The ongoing semester has no exercises while an old one does; requesting
/// both modes must still return the ongoing semester.
///
/// Expected: Ok(vec![ongoing])
#[tokio::test]
async fn current_takes_precedence_over_exercises() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_fitness_test_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let old = factory::create_semester_with_dates(
        db,
        today - Duration::days(200),
        today - Duration::days(100),
    )
    .await?;
    factory::create_exercise(db, old.id).await?;
    let ongoing = factory::create_semester(db).await?;

    let semesters = SemesterRepository::new(db).list(true, true).await?;

    assert_eq!(semesters.len(), 1);
    assert_eq!(semesters[0].id, ongoing.id);

    Ok(())
}
