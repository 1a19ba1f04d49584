use super::*;

/// Tests the no-current-semester edge case.
///
/// Expected: Ok(empty Vec), not an error
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
    factory::create_group(db, sport.id, old_semester.id).await?;

    let sports = SportRepository::new(db).get_sports(false, None).await?;

    assert!(sports.is_empty());

    Ok(())
}

/// Tests listing enrichment: group count, trainer set, free places.
///
/// Two groups for one sport, sharing one trainer and having one more each.
///
/// Expected: one SportView with num_of_groups 2 and three distinct trainers
#[tokio::test]
async fn enriches_sport_with_groups_and_trainers() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;

    let shared = factory::create_trainer(db).await?;
    let first = factory::create_trainer(db).await?;
    let second = factory::create_trainer(db).await?;

    GroupFactory::new(db, sport.id, semester.id)
        .capacity(20)
        .trainers(vec![shared.user_id, first.user_id])
        .build()
        .await?;
    GroupFactory::new(db, sport.id, semester.id)
        .capacity(10)
        .trainers(vec![shared.user_id, second.user_id])
        .build()
        .await?;

    let sports = SportRepository::new(db).get_sports(false, None).await?;

    assert_eq!(sports.len(), 1);
    let view = &sports[0];
    assert_eq!(view.id, sport.id);
    assert_eq!(view.num_of_groups, 2);
    assert_eq!(view.free_places, 30);

    let mut trainer_ids: Vec<i32> = view.trainers.iter().map(|t| t.id).collect();
    trainer_ids.sort_unstable();
    let mut expected = vec![shared.id, first.id, second.id];
    expected.sort_unstable();
    assert_eq!(trainer_ids, expected);

    Ok(())
}

/// Tests default filtering of special and invisible sports.
///
/// Expected: neither appears with include_special = false, both with true
#[tokio::test]
async fn filters_special_and_invisible_sports() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let regular = factory::create_sport(db).await?;
    let special = SportFactory::new(db).special(true).build().await?;
    let hidden = SportFactory::new(db).visible(false).build().await?;

    for sport in [&regular, &special, &hidden] {
        factory::create_group(db, sport.id, semester.id).await?;
    }

    let repo = SportRepository::new(db);

    let default_listing = repo.get_sports(false, None).await?;
    assert_eq!(default_listing.len(), 1);
    assert_eq!(default_listing[0].id, regular.id);

    let full_listing = repo.get_sports(true, None).await?;
    let mut ids: Vec<i32> = full_listing.iter().map(|s| s.id).collect();
    ids.sort_unstable();
    let mut expected = vec![regular.id, special.id, hidden.id];
    expected.sort_unstable();
    assert_eq!(ids, expected);

    Ok(())
}

/// Tests the medical-group gate with the reference scenario.
///
/// Swimming has Group A (capacity 20, 15 enrolled, medical groups {1, 2})
/// and Group B (capacity 10, 10 enrolled, medical groups {1}). A student in
/// medical group 2 is eligible via Group A only, but free places still cover
/// the whole sport.
///
/// Expected: Swimming listed with num_of_groups 1 and free_places 5
#[tokio::test]
async fn restricts_to_student_medical_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let swimming = SportFactory::new(db).name("Swimming").build().await?;

    let group_a = GroupFactory::new(db, swimming.id, semester.id)
        .capacity(20)
        .allowed_medical_groups(vec![1, 2])
        .build()
        .await?;
    factory::enroll::enroll_students(db, group_a.id, 15).await?;

    let group_b = GroupFactory::new(db, swimming.id, semester.id)
        .capacity(10)
        .allowed_medical_groups(vec![1])
        .build()
        .await?;
    factory::enroll::enroll_students(db, group_b.id, 10).await?;

    let student = factory::create_student_with_medical_group(db, 2).await?;

    let sports = SportRepository::new(db)
        .get_sports(false, Some(&student))
        .await?;

    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].id, swimming.id);
    assert_eq!(sports[0].num_of_groups, 1);
    assert_eq!(sports[0].free_places, 5);

    Ok(())
}

/// Tests a student whose medical group no group allows.
///
/// Expected: Ok(empty Vec)
#[tokio::test]
async fn excludes_sports_without_matching_medical_group() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;
    GroupFactory::new(db, sport.id, semester.id)
        .allowed_medical_groups(vec![1])
        .build()
        .await?;

    let student = factory::create_student_with_medical_group(db, 3).await?;

    let sports = SportRepository::new(db)
        .get_sports(false, Some(&student))
        .await?;

    assert!(sports.is_empty());

    Ok(())
}

/// Tests tolerance of dangling trainer assignments.
///
/// An assignment whose user id has no trainer record is dropped; the one
/// that resolves is kept.
///
/// Expected: Ok with a single resolved trainer, no error
#[tokio::test]
async fn drops_unresolvable_trainer_assignments() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;
    let trainer = factory::create_trainer(db).await?;

    GroupFactory::new(db, sport.id, semester.id)
        .trainers(vec![trainer.user_id, 999_999])
        .build()
        .await?;

    let sports = SportRepository::new(db).get_sports(false, None).await?;

    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].trainers.len(), 1);
    assert_eq!(sports[0].trainers[0].id, trainer.id);

    Ok(())
}

/// Tests semester scoping: a sport whose only group lives in a past
/// semester is not listed.
///
/// Expected: only the sport with a current-semester group appears
#[tokio::test]
async fn scopes_groups_to_current_semester() -> Result<(), DbErr> {
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

    let stale = factory::create_sport(db).await?;
    factory::create_group(db, stale.id, old_semester.id).await?;

    let active = factory::create_sport(db).await?;
    factory::create_group(db, active.id, semester.id).await?;

    let sports = SportRepository::new(db).get_sports(false, None).await?;

    assert_eq!(sports.len(), 1);
    assert_eq!(sports[0].id, active.id);

    Ok(())
}

/// Tests query idempotence: repeated calls over unchanged data yield
/// identical results.
#[tokio::test]
async fn is_idempotent_on_unchanged_data() -> Result<(), DbErr> {
    let test = TestBuilder::new()
        .with_enrollment_tables()
        .build()
        .await
        .unwrap();
    let db = test.db.as_ref().unwrap();

    let semester = factory::create_semester(db).await?;
    let sport = factory::create_sport(db).await?;
    let group = GroupFactory::new(db, sport.id, semester.id)
        .capacity(8)
        .build()
        .await?;
    factory::enroll::enroll_students(db, group.id, 3).await?;

    let repo = SportRepository::new(db);
    let first = repo.get_sports(false, None).await?;
    let second = repo.get_sports(false, None).await?;

    assert_eq!(first, second);

    Ok(())
}
