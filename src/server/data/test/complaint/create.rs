use super::*;

/// Tests filing a complaint.
///
/// Verifies that the complaint starts pending with no upvotes and that a
/// `Created` feed entry is written alongside it.
///
/// Expected: Ok with the complaint and one activity
#[tokio::test]
async fn files_pending_complaint_with_activity() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, _, zone) = factory::helpers::create_zone_with_dependencies(db).await?;

    let complaint = ComplaintRepository::new(db)
        .create(CreateComplaintParams {
            title: "Overflowing bins".to_string(),
            description: "Bins on Elm Street not emptied for two weeks".to_string(),
            zone_id: zone.id,
        })
        .await?;

    assert_eq!(complaint.status, ComplaintStatus::Pending);
    assert_eq!(complaint.upvotes, 0);
    assert_eq!(complaint.zone_id, zone.id);

    let activities = activities_of(db, complaint.id).await?;
    assert_eq!(activities.len(), 1);
    assert_eq!(activities[0].kind, ActivityKind::Created);
    assert!(activities[0].message.contains("Overflowing bins"));

    Ok(())
}
