use super::*;

/// Tests creating a zone and reading back its stored boundary.
///
/// Expected: Ok with the boundary round-tripped through the JSON column
#[tokio::test]
async fn creates_zone_with_boundary() -> Result<(), DbErr> {
    let test = TestBuilder::new().with_zone_tables().build().await.unwrap();
    let db = test.db.as_ref().unwrap();

    let city = factory::create_city(db).await?;
    let department = factory::create_department(db).await?;
    let boundary = fixture::zone::square_boundary(0.25);

    let repo = ZoneRepository::new(db);
    let zone = repo
        .create(CreateZoneParams {
            name: "Old Town".to_string(),
            city_id: city.id,
            department_id: department.id,
            boundary: boundary.clone(),
        })
        .await?;

    let stored = repo.get_by_id(zone.id).await?.unwrap();
    assert_eq!(stored.zone.name, "Old Town");
    assert_eq!(stored.zone.boundary, boundary);

    Ok(())
}
