use super::*;
use crate::server::data::complaint::StatusChange;

/// Tests moving a complaint to a new status.
///
/// Expected: Changed with the new status, a bumped version and a `StatusChanged` entry
#[tokio::test]
async fn changes_status_and_records_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, complaint) = factory::helpers::create_complaint_with_dependencies(db).await?;

    let change = ComplaintRepository::new(db)
        .update_status(complaint.id, ComplaintStatus::InProgress)
        .await?;

    let StatusChange::Changed(updated) = change else {
        panic!("expected a status change, got {change:?}");
    };
    assert_eq!(updated.status, ComplaintStatus::InProgress);
    assert_eq!(updated.version, complaint.version + 1);

    let activities = activities_of(db, complaint.id).await?;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].kind, ActivityKind::StatusChanged);
    assert_eq!(activities[0].message, "Status changed from Pending to InProgress");

    Ok(())
}

/// Tests that a status change keeps version bumps made by upvotes since the complaint was
/// last read.
///
/// Expected: version counts every write and the feed names the stored previous status
#[tokio::test]
async fn keeps_version_bumps_of_earlier_writes() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, complaint) = factory::helpers::create_complaint_with_dependencies(db).await?;
    let repo = ComplaintRepository::new(db);

    repo.upvote(complaint.id).await?;
    repo.upvote(complaint.id).await?;
    repo.update_status(complaint.id, ComplaintStatus::InProgress)
        .await?;
    let change = repo
        .update_status(complaint.id, ComplaintStatus::Resolved)
        .await?;

    let StatusChange::Changed(updated) = change else {
        panic!("expected a status change, got {change:?}");
    };
    assert_eq!(updated.upvotes, 2);
    assert_eq!(updated.version, 4);

    let activities = activities_of(db, complaint.id).await?;
    assert_eq!(
        activities.last().map(|a| a.message.as_str()),
        Some("Status changed from InProgress to Resolved")
    );

    Ok(())
}

/// Tests requesting the status the complaint already has.
///
/// Expected: Unchanged, with no version bump and no feed entry
#[tokio::test]
async fn same_status_is_unchanged() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, complaint) = factory::helpers::create_complaint_with_dependencies(db).await?;

    let change = ComplaintRepository::new(db)
        .update_status(complaint.id, ComplaintStatus::Pending)
        .await?;

    assert!(matches!(change, StatusChange::Unchanged));

    let stored = entity::prelude::Complaint::find_by_id(complaint.id)
        .one(db)
        .await?
        .unwrap();
    assert_eq!(stored.version, complaint.version);
    assert!(activities_of(db, complaint.id).await?.is_empty());

    Ok(())
}

/// Tests changing the status of a complaint that does not exist.
///
/// Expected: NotFound and no feed entry
#[tokio::test]
async fn missing_complaint_is_not_found() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let change = ComplaintRepository::new(db)
        .update_status(404, ComplaintStatus::Resolved)
        .await?;

    assert!(matches!(change, StatusChange::NotFound));
    assert!(entity::prelude::Activity::find().all(db).await?.is_empty());

    Ok(())
}
