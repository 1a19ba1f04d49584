use super::*;

/// Tests the Enroll → Group → Sport join for a student's enrollments.
///
/// Expected: enrolled groups with their sport names, unrelated groups absent
#[tokio::test]
async fn returns_enrolled_groups_with_sport_name() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let swimming = SportFactory::new(db).name("Swimming").build().await?;
    let group = GroupFactory::new(db, swimming.id, semester.id)
        .name("Beginners")
        .build()
        .await?;
    factory::create_group(db, swimming.id, semester.id).await?;

    let student = factory::create_student(db).await?;
    factory::create_enroll(db, student.id, group.id).await?;

    let groups = GroupRepository::new(db).student_groups(student.id).await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, group.id);
    assert_eq!(groups[0].name, "Beginners");
    assert_eq!(groups[0].sport_name, "Swimming");

    Ok(())
}

/// Tests the no-current-semester edge case.
///
/// Expected: Ok(empty Vec) even though an enrollment row exists
#[tokio::test]
async fn returns_empty_without_current_semester() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let old_semester = factory::create_semester_with_dates(
        db,
        today - Duration::days(200),
        today - Duration::days(100),
    )
    .await?;
    let sport = factory::create_sport(db).await?;
    let group = factory::create_group(db, sport.id, old_semester.id).await?;

    let student = factory::create_student(db).await?;
    factory::create_enroll(db, student.id, group.id).await?;

    let groups = GroupRepository::new(db).student_groups(student.id).await?;

    assert!(groups.is_empty());

    Ok(())
}

/// Tests a student with no enrollments in the current semester.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn returns_empty_for_unenrolled_student() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;
    factory::create_group(db, sport.id, semester.id).await?;

    let student = factory::create_student(db).await?;

    let groups = GroupRepository::new(db).student_groups(student.id).await?;

    assert!(groups.is_empty());

    Ok(())
}

/// Tests that enrollments from past semesters are excluded.
///
/// Expected: only the current semester's group is returned
#[tokio::test]
async fn excludes_enrollments_of_other_semesters() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let today = Utc::now().date_naive();
    let old_semester = factory::create_semester_with_dates(
        db,
        today - Duration::days(200),
        today - Duration::days(100),
    )
    .await?;
    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;

    let old_group = factory::create_group(db, sport.id, old_semester.id).await?;
    let current_group = factory::create_group(db, sport.id, semester.id).await?;

    let student = factory::create_student(db).await?;
    factory::create_enroll(db, student.id, old_group.id).await?;
    factory::create_enroll(db, student.id, current_group.id).await?;

    let groups = GroupRepository::new(db).student_groups(student.id).await?;

    assert_eq!(groups.len(), 1);
    assert_eq!(groups[0].id, current_group.id);

    Ok(())
}

/// Tests that duplicate enrollment rows do not duplicate listing entries.
///
/// Expected: the group appears once
#[tokio::test]
async fn deduplicates_duplicate_enrollments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;
    let group = factory::create_group(db, sport.id, semester.id).await?;

    let student = factory::create_student(db).await?;
    factory::create_enroll(db, student.id, group.id).await?;
    factory::create_enroll(db, student.id, group.id).await?;

    let groups = GroupRepository::new(db).student_groups(student.id).await?;

    assert_eq!(groups.len(), 1);

    Ok(())
}
