use super::*;

/// Tests the activity feed filtered to one kind.
///
/// Expected: Ok with only upvote entries, each carrying its complaint
#[tokio::test]
async fn filters_feed_by_kind() -> Result<(), QueryError> {
    let test = TestBuilder::new().with_all_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (_, complaint) = factory::helpers::create_complaint_with_dependencies(db).await?;
    factory::create_activity(db, complaint.id, ActivityKind::Created).await?;
    factory::create_activity(db, complaint.id, ActivityKind::Upvoted).await?;
    factory::create_activity(db, complaint.id, ActivityKind::Upvoted).await?;

    let params = FeatureParams::from_query_str("kind=Upvoted");
    let records = ActivityRepository::new(db)
        .list(&params, QueryOptions::default())
        .await?;

    assert_eq!(records.len(), 2);
    for record in &records {
        assert_eq!(record["kind"], JsonValue::from("Upvoted"));
        assert_eq!(record["complaint"]["title"], JsonValue::from(complaint.title.clone()));
    }

    Ok(())
}
