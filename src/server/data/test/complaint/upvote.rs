use super::*;

/// Tests that repeated upvotes each increment the counter once.
///
/// Expected: Ok(Some) with the running total and one entry per upvote
#[tokio::test]
async fn increments_upvotes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, complaint) = factory::helpers::create_complaint_with_dependencies(db).await?;
    let repo = ComplaintRepository::new(db);

    repo.upvote(complaint.id).await?;
    repo.upvote(complaint.id).await?;
    let upvoted = repo.upvote(complaint.id).await?.unwrap();

    assert_eq!(upvoted.upvotes, 3);
    assert_eq!(upvoted.version, 3);

    let activities = activities_of(db, complaint.id).await?;
    assert_eq!(activities.len(), 3);
    assert!(activities.iter().all(|a| a.kind == ActivityKind::Upvoted));
    assert_eq!(activities[2].message, "Upvoted, now at 3");

    Ok(())
}

/// Tests upvoting a complaint that does not exist.
///
/// Expected: Ok(None) and no feed entry
#[tokio::test]
async fn returns_none_for_missing_complaint() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let result = ComplaintRepository::new(db).upvote(404).await?;

    assert!(result.is_none());
    assert!(entity::prelude::Activity::find().all(db).await?.is_empty());

    Ok(())
}
