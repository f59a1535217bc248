use super::*;

/// Tests the reference checks used before deleting a city or department.
///
/// Expected: true for the referenced parents, false for an unreferenced one
#[tokio::test]
async fn detects_referencing_zones() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let (city, department, _) = factory::helpers::create_zone_with_dependencies(db).await?;
    let unused_city = factory::create_city(db).await?;

    let repo = ZoneRepository::new(db);
    assert!(repo.exists_for_city(city.id).await?);
    assert!(repo.exists_for_department(department.id).await?);
    assert!(!repo.exists_for_city(unused_city.id).await?);

    Ok(())
}
