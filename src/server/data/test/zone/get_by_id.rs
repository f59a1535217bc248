use super::*;

/// Tests that a zone is returned with its city and department.
///
/// Expected: Ok(Some) with both relations loaded
#[tokio::test]
async fn loads_relations() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, department, zone) = factory::helpers::create_zone_with_dependencies(db).await?;

    let result = ZoneRepository::new(db).get_by_id(zone.id).await?.unwrap();

    assert_eq!(result.zone.id, zone.id);
    assert_eq!(result.city, Some(city));
    assert_eq!(result.department, Some(department));

    Ok(())
}

/// Tests getting a zone that does not exist.
///
/// Expected: Ok(None)
#[tokio::test]
async fn returns_none_for_missing_zone() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    assert!(ZoneRepository::new(db).get_by_id(7).await?.is_none());

    Ok(())
}
